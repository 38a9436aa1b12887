//! Tests for `sealconf unseal`.

use crate::support::*;
use predicates::prelude::*;

#[test]
fn test_seal_then_unseal_restores_values() {
    let t = Test::with_file("relay.yaml", RELAY_YAML);
    assert_success(&t.seal("relay.yaml"));

    let output = t.unseal("relay.yaml");
    assert_success(&output);
    assert_stdout_contains(&output, "2 secrets unsealed");
    assert_stdout_contains(&output, "do not commit");

    let text = t.read("relay.yaml");
    assert_eq!(sealed_count(&text), 0);
    assert!(text.contains("hunter2"));
    assert!(text.contains("correct horse battery staple"));
}

#[test]
fn test_unseal_with_wrong_key_changes_nothing() {
    let t = Test::with_file("relay.yaml", RELAY_YAML);
    assert_success(&t.seal("relay.yaml"));
    let sealed = t.read("relay.yaml");

    let output = t.unseal_with("relay.yaml", OTHER_PRIVATE_KEY);
    assert_failure(&output);
    assert_stderr_contains(&output, "decryption failed");
    assert_stderr_contains(&output, "2 secret(s) could not be unsealed");

    assert_eq!(t.read("relay.yaml"), sealed);
}

#[test]
fn test_unseal_encrypted_key_with_passphrase() {
    let t = Test::with_file("relay.yaml", RELAY_YAML);
    assert_success(&t.seal("relay.yaml"));

    t.cmd()
        .args(["unseal", "relay.yaml", "--private-key"])
        .arg(key_path(ENCRYPTED_PRIVATE_KEY))
        .env("SEALCONF_PASSPHRASE", PASSPHRASE)
        .assert()
        .success();

    assert!(t.read("relay.yaml").contains("hunter2"));
}

#[test]
fn test_unseal_encrypted_key_without_passphrase() {
    let t = Test::with_file("relay.yaml", RELAY_YAML);

    t.cmd()
        .args(["unseal", "relay.yaml", "--private-key"])
        .arg(key_path(ENCRYPTED_PRIVATE_KEY))
        .assert()
        .failure()
        .stderr(predicate::str::contains("no passphrase was given"))
        .stderr(predicate::str::contains("SEALCONF_PASSPHRASE"));
}
