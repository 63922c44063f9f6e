//! Shared test helpers.

#![allow(dead_code)]

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const DEMO_HOSTS: &str = "127.0.0.1\tlocalhost\n\
# TOGGLE demo\n\
1.1.1.1 x.com\n\
#2.2.2.2 y.com\n\
# END TOGGLE\n\
::1\tlocalhost\n";

/// Temp dir holding a `hosts` file with the given content.
pub fn temp_hosts(content: &str) -> (TempDir, PathBuf) {
    let dir = tempfile::Builder::new()
        .prefix("hosts_toggle_test_")
        .tempdir()
        .expect("temp dir");
    let path = dir.path().join("hosts");
    std::fs::write(&path, content).expect("write hosts");
    (dir, path)
}

/// Binary pointed at `hosts`, with sudo evidence and colours off.
pub fn toggle_cmd(hosts: &Path) -> Command {
    let mut cmd = Command::cargo_bin("hosts-toggle").unwrap();
    cmd.env(hosts_toggle::config::HOSTS_FILE_ENV, hosts)
        .env("SUDO_USER", "tester")
        .env_remove("SUDO_UID")
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG");
    cmd
}
