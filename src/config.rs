//! Runtime settings and hosts file path resolution.
//!
//! Supports HOSTS_TOGGLE_FILE env var override for testing.

use std::path::PathBuf;

use crate::hosts::PatternMode;

pub const DEFAULT_HOSTS_FILE: &str = "/etc/hosts";

/// Env var that redirects the tool to another hosts file.
pub const HOSTS_FILE_ENV: &str = "HOSTS_TOGGLE_FILE";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub hosts_file: PathBuf,
    pub pattern_mode: PatternMode,
}

impl Settings {
    /// CLI path wins, then HOSTS_TOGGLE_FILE, then /etc/hosts.
    pub fn resolve(cli_path: Option<PathBuf>, regex: bool) -> Self {
        Self::resolve_with(cli_path, regex, std::env::var_os(HOSTS_FILE_ENV).map(PathBuf::from))
    }

    /// Same as [`Settings::resolve`] with the env value passed in; empty counts as unset.
    pub fn resolve_with(cli_path: Option<PathBuf>, regex: bool, env_path: Option<PathBuf>) -> Self {
        let hosts_file = cli_path
            .or(env_path.filter(|p| !p.as_os_str().is_empty()))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_HOSTS_FILE));
        let pattern_mode = if regex {
            PatternMode::Verbatim
        } else {
            PatternMode::Literal
        };
        Self {
            hosts_file,
            pattern_mode,
        }
    }
}
