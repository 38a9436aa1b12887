//! Command helper methods for Test.

use super::{key_path, Test, PRIVATE_KEY, PUBLIC_KEY};
use assert_cmd::Command;
use std::process::Output;

impl Test {
    /// Create a sealconf command running in the test directory.
    ///
    /// Key and log variables from the outer environment are cleared and
    /// color is off.
    pub fn cmd(&self) -> Command {
        #[allow(deprecated)]
        let mut cmd = Command::cargo_bin("sealconf").expect("failed to find sealconf binary");
        cmd.current_dir(self.dir.path());
        cmd.env("NO_COLOR", "1");
        for var in [
            "SEALCONF_PUBLIC_KEY",
            "SEALCONF_PRIVATE_KEY",
            "SEALCONF_PASSPHRASE",
            "SEALCONF_LOG",
        ] {
            cmd.env_remove(var);
        }
        cmd
    }

    /// Shortcut for `sealconf seal <file>` with the default public key.
    pub fn seal(&self, file: &str) -> Output {
        self.cmd()
            .arg("seal")
            .arg(file)
            .arg("--public-key")
            .arg(key_path(PUBLIC_KEY))
            .output()
            .expect("failed to run sealconf seal")
    }

    /// Shortcut for `sealconf unseal <file>` with the given private key.
    pub fn unseal_with(&self, file: &str, key: &str) -> Output {
        self.cmd()
            .arg("unseal")
            .arg(file)
            .arg("--private-key")
            .arg(key_path(key))
            .output()
            .expect("failed to run sealconf unseal")
    }

    /// Shortcut for `sealconf unseal <file>` with the default private key.
    pub fn unseal(&self, file: &str) -> Output {
        self.unseal_with(file, PRIVATE_KEY)
    }

    /// Shortcut for `sealconf check <file>` with no key.
    pub fn check(&self, file: &str) -> Output {
        self.cmd()
            .args(["check", file])
            .output()
            .expect("failed to run sealconf check")
    }

    /// Shortcut for `sealconf validate <file>`.
    pub fn validate(&self, file: &str) -> Output {
        self.cmd()
            .args(["validate", file])
            .output()
            .expect("failed to run sealconf validate")
    }
}
