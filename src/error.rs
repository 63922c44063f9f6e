//! Error taxonomy for toggling a hosts file region.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ToggleError {
    #[error("Invalid arguments, use -p to select project")]
    InvalidProject,

    #[error("You have to run this program as super-user!")]
    NotSuperUser,

    #[error("cannot read hosts file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Project not found: {project}")]
    ProjectNotFound { project: String },

    #[error("Project ending not found (start marker on line {})", .start + 1)]
    ProjectEndNotFound { start: usize },

    #[error("invalid project pattern {project:?}: {source}")]
    InvalidPattern {
        project: String,
        #[source]
        source: regex::Error,
    },

    #[error("Error writing hosts file {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
