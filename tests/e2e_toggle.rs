//! E2E: toggle on -> summary -> toggle back -> original content.

mod common;

use predicates::prelude::*;

#[test]
fn e2e_toggle_round_trip() {
    let (_dir, hosts) = common::temp_hosts(common::DEMO_HOSTS);

    common::toggle_cmd(&hosts)
        .args(["-p", " demo "])
        .assert()
        .success()
        .stdout(predicate::str::contains("Toggling demo.."))
        .stdout(predicate::str::contains("Uncommented the following lines:\n\t2.2.2.2 y.com\n"))
        .stdout(predicate::str::contains("Commented the following lines:\n\t#1.1.1.1 x.com\n"));

    let toggled = std::fs::read_to_string(&hosts).unwrap();
    assert!(toggled.contains("\n#1.1.1.1 x.com\n2.2.2.2 y.com\n"));
    assert_eq!(toggled.lines().count(), common::DEMO_HOSTS.lines().count());

    common::toggle_cmd(&hosts).args(["-p", "demo"]).assert().success();
    assert_eq!(std::fs::read_to_string(&hosts).unwrap(), common::DEMO_HOSTS);
}

#[test]
fn e2e_unknown_project() {
    let (_dir, hosts) = common::temp_hosts(common::DEMO_HOSTS);

    common::toggle_cmd(&hosts)
        .args(["-p", "other"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Project not found"));
    assert_eq!(std::fs::read_to_string(&hosts).unwrap(), common::DEMO_HOSTS);
}

#[test]
fn e2e_regex_flag_matches_pattern() {
    let content = "# TOGGLE web-1\n10.0.0.1 a.test\n# END TOGGLE\n";
    let (_dir, hosts) = common::temp_hosts(content);

    common::toggle_cmd(&hosts)
        .args(["-p", "web-."])
        .assert()
        .code(1);

    common::toggle_cmd(&hosts)
        .args(["-p", "web-.", "--regex"])
        .assert()
        .success();
    assert!(std::fs::read_to_string(&hosts).unwrap().contains("#10.0.0.1 a.test"));
}

#[test]
fn e2e_hosts_file_flag_beats_env() {
    let (_dir, hosts) = common::temp_hosts(common::DEMO_HOSTS);
    let (_other_dir, other) = common::temp_hosts("# TOGGLE demo\n# END TOGGLE\n");

    common::toggle_cmd(&other)
        .arg("--hosts-file")
        .arg(&hosts)
        .args(["-p", "demo"])
        .assert()
        .success();
    assert_ne!(std::fs::read_to_string(&hosts).unwrap(), common::DEMO_HOSTS);
}

#[test]
fn e2e_latin1_hosts_file() {
    let content: &[u8] = b"# caf\xe9 latin-1 comment\n# TOGGLE demo\n1.1.1.1 x.com\n# END TOGGLE\n";
    let (_dir, hosts) = common::temp_hosts("");
    std::fs::write(&hosts, content).unwrap();

    common::toggle_cmd(&hosts)
        .args(["-p", "demo"])
        .assert()
        .success()
        .stdout(predicate::str::contains("#1.1.1.1 x.com"));

    let toggled = std::fs::read(&hosts).unwrap();
    assert!(toggled.starts_with(b"# caf\xe9 latin-1 comment\n"));

    common::toggle_cmd(&hosts).args(["-p", "demo"]).assert().success();
    assert_eq!(std::fs::read(&hosts).unwrap(), content);
}
