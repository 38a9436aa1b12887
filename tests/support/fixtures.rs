//! Test fixtures and constants.

use std::path::PathBuf;

/// Path to a key under `tests/fixtures/keys`.
pub fn key_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("keys")
        .join(name)
}

/// Contents of a key under `tests/fixtures/keys`.
pub fn key_pem(name: &str) -> String {
    std::fs::read_to_string(key_path(name)).expect("missing key fixture")
}

/// 2048-bit pair used by most tests.
pub const PUBLIC_KEY: &str = "rsa2048.pub.pem";
pub const PRIVATE_KEY: &str = "rsa2048.pem";

/// A second, unrelated 2048-bit pair.
pub const OTHER_PUBLIC_KEY: &str = "other2048.pub.pem";
pub const OTHER_PRIVATE_KEY: &str = "other2048.pem";

/// `rsa2048.pem` encrypted with [`PASSPHRASE`].
pub const ENCRYPTED_PRIVATE_KEY: &str = "rsa2048.enc.pem";
pub const PASSPHRASE: &str = "correct-horse";

/// Well-formed sealed payload that no fixture key can open.
pub const FOREIGN_SEALED: &str = "sealed(QUJDREVGR0g=)";

/// A valid relay config with plaintext passwords.
pub const RELAY_YAML: &str = "\
smtp:
  host: smtp.example.com
  port: 587
  account: relay
  starttls: true
imap:
  host: imap.example.com
  port: 993
  account: reader
accounts:
  - name: relay
    login: relay@example.com
    password: hunter2
  - name: reader
    login: reader@example.com
    password: correct horse battery staple
routes:
  alerts:
    account: relay
    recipients:
      - ops@example.com
";

/// The same config as [`RELAY_YAML`], in JSON.
pub const RELAY_JSON: &str = r#"{
  "smtp": { "host": "smtp.example.com", "port": 587, "account": "relay" },
  "accounts": [
    { "name": "relay", "login": "relay@example.com", "password": "hunter2" }
  ]
}
"#;

/// The same config as [`RELAY_YAML`], in TOML.
pub const RELAY_TOML: &str = r#"
[smtp]
host = "smtp.example.com"
port = 587
account = "relay"

[[accounts]]
name = "relay"
login = "relay@example.com"
password = "hunter2"
"#;

/// A config with three validation problems.
pub const INVALID_YAML: &str = "\
smtp:
  host: not a host
  port: 0
  account: nobody
accounts:
  - name: relay
    login: relay@example.com
    password: hunter2
";
