//! Tests for `sealconf validate`.

use crate::support::*;
use predicates::prelude::*;

#[test]
fn test_validate_valid_config() {
    let t = Test::with_file("relay.yaml", RELAY_YAML);

    t.cmd()
        .args(["validate", "relay.yaml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config is valid"));
}

#[test]
fn test_validate_reports_every_finding() {
    let t = Test::with_file("bad.yaml", INVALID_YAML);

    let output = t.validate("bad.yaml");
    assert_failure(&output);
    assert_stdout_contains(&output, "smtp: not a valid hostname (not a host)");
    assert_stdout_contains(&output, "smtp: port must be between 1 and 65535 (0)");
    assert_stdout_contains(&output, "smtp: refers to an undefined account (nobody)");
    assert_stderr_contains(&output, "3 problems found");
}

#[test]
fn test_validate_sealed_config() {
    let t = Test::with_file("relay.yaml", RELAY_YAML);
    assert_success(&t.seal("relay.yaml"));
    assert_success(&t.validate("relay.yaml"));
}
