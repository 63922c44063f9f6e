//! CLI definition and the toggle command.

use anyhow::{Context, Result};
use clap::Parser;
use std::io::Write;
use std::path::PathBuf;
use tracing::info;

use crate::config::Settings;
use crate::error::ToggleError;
use crate::platform::{FileHostsStore, HostsStore};
use crate::{hosts::ToggleReport, privilege, report};

#[derive(Parser, Debug)]
#[command(name = "hosts-toggle", version)]
#[command(about = "Toggle a marked block of lines in the hosts file on or off")]
pub struct Cli {
    /// The project name as defined in your hosts-file (`# TOGGLE <project>`)
    #[arg(short, long)]
    pub project: Option<String>,

    /// Treat the project name as a regular expression instead of literal text
    #[arg(long)]
    pub regex: bool,

    /// Hosts file to edit (defaults to $HOSTS_TOGGLE_FILE, then /etc/hosts)
    #[arg(long)]
    pub hosts_file: Option<PathBuf>,
}

/// Trimmed, non-empty project name.
pub fn project_name(raw: Option<&str>) -> Result<String, ToggleError> {
    let project = raw.unwrap_or_default().trim();
    if project.is_empty() {
        return Err(ToggleError::InvalidProject);
    }
    Ok(project.to_string())
}

/// Run CLI: validate, check privilege, then toggle and print the summary.
pub fn run() -> Result<()> {
    crate::logging::init();
    let cli = Cli::parse();

    let project = project_name(cli.project.as_deref())?;
    privilege::require_super_user()?;

    let settings = Settings::resolve(cli.hosts_file, cli.regex);
    let store = FileHostsStore::new(&settings.hosts_file);
    toggle_and_report(&store, &project, &settings, &mut std::io::stdout().lock())
}

/// Toggle, then write the summary to `out`. Nothing is written to `out` on failure.
pub fn toggle_and_report(
    store: &dyn HostsStore,
    project: &str,
    settings: &Settings,
    out: &mut dyn Write,
) -> Result<()> {
    let summary = toggle_project(store, project, settings)?;
    report::write_to(out, &summary).context("Failed to print summary")?;
    Ok(())
}

/// Load, toggle and save. Nothing is written unless the region is found.
pub fn toggle_project(
    store: &dyn HostsStore,
    project: &str,
    settings: &Settings,
) -> Result<ToggleReport, ToggleError> {
    let mut file = store.load()?;
    let summary = file.toggle(project, settings.pattern_mode)?;
    store.save(&file)?;
    info!(
        project,
        uncommented = summary.uncommented.len(),
        commented = summary.commented.len(),
        "toggled"
    );
    Ok(summary)
}
