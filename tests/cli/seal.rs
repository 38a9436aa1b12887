//! Tests for `sealconf seal` and `sealconf seal-value`.

use crate::support::*;
use predicates::prelude::*;

#[test]
fn test_seal_yaml_in_place() {
    let t = Test::with_file("relay.yaml", RELAY_YAML);

    let output = t.seal("relay.yaml");
    assert_success(&output);
    assert_stdout_contains(&output, "2 secrets sealed");

    let text = t.read("relay.yaml");
    assert_eq!(sealed_count(&text), 2);
    assert_no_plaintext(&text, &["hunter2", "correct horse battery staple"]);
    assert!(text.contains("login: relay@example.com"));
}

#[test]
fn test_seal_twice_is_a_no_op() {
    let t = Test::with_file("relay.yaml", RELAY_YAML);
    assert_success(&t.seal("relay.yaml"));
    let first = t.read("relay.yaml");

    let output = t.seal("relay.yaml");
    assert_success(&output);
    assert_stdout_contains(&output, "nothing to seal");
    assert_eq!(t.read("relay.yaml"), first);
}

#[test]
fn test_seal_to_output_file() {
    let t = Test::with_file("relay.json", RELAY_JSON);

    t.cmd()
        .arg("seal")
        .arg("relay.json")
        .arg("--public-key")
        .arg(key_path(PUBLIC_KEY))
        .args(["--output", "sealed.json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 secret sealed"));

    assert_eq!(t.read("relay.json"), RELAY_JSON);
    assert_eq!(sealed_count(&t.read("sealed.json")), 1);
}

#[test]
fn test_seal_toml() {
    let t = Test::with_file("relay.toml", RELAY_TOML);
    assert_success(&t.seal("relay.toml"));

    let text = t.read("relay.toml");
    assert!(text.contains("password = \"sealed("), "{}", text);
}

#[test]
fn test_seal_key_from_env() {
    let t = Test::with_file("relay.yaml", RELAY_YAML);

    t.cmd()
        .args(["seal", "relay.yaml"])
        .env("SEALCONF_PUBLIC_KEY", key_path(PUBLIC_KEY))
        .assert()
        .success();
    assert_eq!(sealed_count(&t.read("relay.yaml")), 2);
}

#[test]
fn test_seal_oversized_secret_fails_but_seals_the_rest() {
    let long = "x".repeat(191);
    let t = Test::with_file("relay.yaml", &RELAY_YAML.replace("hunter2", &long));

    let output = t.seal("relay.yaml");
    assert_failure(&output);
    assert_stderr_contains(&output, "accounts[0].password");
    assert_stderr_contains(&output, "message too long");

    let text = t.read("relay.yaml");
    assert_eq!(sealed_count(&text), 1);
    assert!(text.contains(&long));
}

#[test]
fn test_seal_value_prints_wrapped_ciphertext() {
    let t = Test::new();

    t.cmd()
        .args(["seal-value", "hunter2", "--public-key"])
        .arg(key_path(PUBLIC_KEY))
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"^sealed\([A-Za-z0-9+/]{342}==\)\n$").unwrap());
}

#[test]
fn test_seal_value_rejects_empty() {
    let t = Test::new();

    t.cmd()
        .args(["seal-value", "", "--public-key"])
        .arg(key_path(PUBLIC_KEY))
        .assert()
        .failure()
        .stderr(predicate::str::contains("should not be empty"));
}
