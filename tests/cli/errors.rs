//! Tests for error handling and CLI flags.

use crate::support::*;
use predicates::prelude::*;

#[test]
fn test_help() {
    let t = Test::new();

    let output = t.cmd().arg("--help").output().unwrap();
    assert_success(&output);
    let out = stdout(&output);
    assert!(out.contains("sealconf") || out.contains("Usage"));
}

#[test]
fn test_version_flag() {
    let t = Test::new();

    t.cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_unknown_command_fails() {
    let t = Test::new();
    assert_failure(&t.cmd().arg("unknown-command").output().unwrap());
}

#[test]
fn test_seal_requires_a_key() {
    let t = Test::with_file("relay.yaml", RELAY_YAML);

    t.cmd()
        .args(["seal", "relay.yaml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--public-key"));
}

#[test]
fn test_missing_config_file() {
    let t = Test::new();

    let output = t.seal("missing.yaml");
    assert_failure(&output);
    assert_stderr_contains(&output, "failed to read");
}

#[test]
fn test_unsupported_extension() {
    let t = Test::with_file("relay.ini", "[smtp]\n");

    let output = t.validate("relay.ini");
    assert_failure(&output);
    assert_stderr_contains(&output, "unsupported config format");
}

#[test]
fn test_small_key_hint() {
    let t = Test::with_file("relay.yaml", RELAY_YAML);

    t.cmd()
        .args(["seal", "relay.yaml", "--public-key"])
        .arg(key_path("rsa512.pub.pem"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("key too small"))
        .stderr(predicate::str::contains("at least 2048 bits"));

    assert_eq!(t.read("relay.yaml"), RELAY_YAML);
}

#[test]
fn test_unpadded_key_size_rejected() {
    let t = Test::with_file("relay.yaml", RELAY_YAML);

    t.cmd()
        .args(["seal", "relay.yaml", "--public-key"])
        .arg(key_path("rsa3072.pub.pem"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("unsupported key size: 3072-bit"))
        .stderr(predicate::str::contains("2048 or 4096-bit"));

    assert_eq!(t.read("relay.yaml"), RELAY_YAML);
}

#[test]
fn test_ec_key_rejected() {
    let t = Test::new();

    t.cmd()
        .args(["seal-value", "hunter2", "--public-key"])
        .arg(key_path("ec256.pub.pem"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("unsupported key type: EC"));
}

#[test]
fn test_verbose_logs_to_stderr() {
    let t = Test::new();

    let output = t
        .cmd()
        .args(["--verbose", "seal-value", "hunter2", "--public-key"])
        .arg(key_path(PUBLIC_KEY))
        .output()
        .unwrap();
    assert_success(&output);

    let out = stdout(&output);
    assert_eq!(out.lines().count(), 1);
    assert!(out.starts_with("sealed("));
}
