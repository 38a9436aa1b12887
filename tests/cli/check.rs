//! Tests for `sealconf check`.

use crate::support::*;
use predicates::prelude::*;

#[test]
fn test_check_without_key() {
    let t = Test::with_file("relay.yaml", RELAY_YAML);
    assert_success(&t.seal("relay.yaml"));

    t.cmd()
        .args(["check", "relay.yaml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("format only"))
        .stdout(predicate::str::contains("all secrets passed"));
}

#[test]
fn test_check_warns_about_plaintext() {
    let t = Test::with_file("relay.yaml", RELAY_YAML);

    let output = t.check("relay.yaml");
    assert_success(&output);
    assert_stdout_contains(&output, "2 secrets are not sealed");
}

#[test]
fn test_check_with_key_finds_foreign_ciphertext() {
    let t = Test::with_file(
        "relay.yaml",
        &RELAY_YAML.replace("hunter2", FOREIGN_SEALED),
    );

    assert_success(&t.check("relay.yaml"));

    t.cmd()
        .args(["check", "relay.yaml", "--private-key"])
        .arg(key_path(PRIVATE_KEY))
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "accounts[0].password: checking secret: decryption failed",
        ));

    assert!(t.read("relay.yaml").contains(FOREIGN_SEALED));
}

#[test]
fn test_check_catches_empty_password() {
    let t = Test::with_file("relay.yaml", &RELAY_YAML.replace("hunter2", "''"));

    let output = t.check("relay.yaml");
    assert_failure(&output);
    assert_stderr_contains(&output, "unsealed value should not be empty");
}
