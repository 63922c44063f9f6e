//! Hosts file load/save boundary.

use std::fs;
use std::io::Write;
use std::path::PathBuf;

use tracing::debug;

use crate::error::ToggleError;
use crate::hosts::HostsFile;

/// Permission bits for a newly created hosts file.
#[cfg(unix)]
pub const HOSTS_FILE_MODE: u32 = 0o644;

/// Trait for reading and overwriting the hosts file.
pub trait HostsStore {
    /// Read the whole file into a line sequence.
    fn load(&self) -> Result<HostsFile, ToggleError>;
    /// Overwrite the whole file. Not atomic.
    fn save(&self, file: &HostsFile) -> Result<(), ToggleError>;
}

/// HostsStore backed by a file at the given path.
#[derive(Debug, Clone)]
pub struct FileHostsStore {
    path: PathBuf,
}

impl FileHostsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn open_for_write(&self) -> std::io::Result<fs::File> {
        let mut opts = fs::OpenOptions::new();
        opts.write(true).create(true).truncate(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            opts.mode(HOSTS_FILE_MODE);
        }
        opts.open(&self.path)
    }
}

impl HostsStore for FileHostsStore {
    fn load(&self) -> Result<HostsFile, ToggleError> {
        let content = fs::read(&self.path).map_err(|source| ToggleError::Read {
            path: self.path.clone(),
            source,
        })?;
        let file = HostsFile::parse(&content);
        debug!(path = %self.path.display(), lines = file.line_count(), "loaded hosts file");
        Ok(file)
    }

    fn save(&self, file: &HostsFile) -> Result<(), ToggleError> {
        let content = file.to_content();
        self.open_for_write()
            .and_then(|mut f| f.write_all(&content))
            .map_err(|source| ToggleError::Write {
                path: self.path.clone(),
                source,
            })?;
        debug!(path = %self.path.display(), bytes = content.len(), "wrote hosts file");
        Ok(())
    }
}
