//! Mail relay configuration model.
//!
//! The tree sealconf reads, validates and seals: SMTP and IMAP servers,
//! the accounts they log in with, and forwarding routes. Account
//! passwords are [`SealedSecret`]s so the file can be committed with
//! them sealed.
//!
//! ```yaml
//! smtp:
//!   host: smtp.example.com
//!   port: 587
//!   account: relay
//! accounts:
//!   - name: relay
//!     login: relay@example.com
//!     password: sealed(...)
//! routes:
//!   alerts:
//!     account: relay
//!     recipients: [ops@example.com]
//! ```

use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::document;
use crate::core::secret::SealedSecret;
use crate::core::validation::{Report, Validate};
use crate::core::walk::Node;
use crate::error::{self, ValidationError};
use crate::walkable;

/// Root of a mail relay configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub smtp: Option<SmtpServer>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub imap: Option<ImapServer>,
    #[serde(default)]
    pub accounts: Vec<Account>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub routes: BTreeMap<String, Route>,
}

walkable!(Config [Validate] { smtp, imap, accounts, routes });

/// Login credentials.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub name: String,
    #[serde(rename = "login")]
    pub username: String,
    pub password: SealedSecret,
}

walkable!(Account [Validate] { name, username as "login", password });

/// Outgoing mail server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SmtpServer {
    pub host: String,
    pub port: u16,
    /// Name of the account to authenticate with.
    pub account: String,
    #[serde(default)]
    pub starttls: bool,
}

walkable!(SmtpServer [Validate] { host, port, account, starttls });

/// Incoming mail server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImapServer {
    pub host: String,
    pub port: u16,
    /// Name of the account to authenticate with.
    pub account: String,
    #[serde(default = "default_mailbox")]
    pub mailbox: String,
}

walkable!(ImapServer [Validate] { host, port, account, mailbox });

fn default_mailbox() -> String {
    "INBOX".to_string()
}

/// Forwarding route: mail sent through `account` to every recipient.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Route {
    pub account: String,
    pub recipients: Vec<String>,
}

walkable!(Route [Validate] { account, recipients });

impl Config {
    /// Load a configuration file; the format follows the extension.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file can't be read or parsed.
    pub fn load(path: impl AsRef<Path>) -> error::Result<Self> {
        let config: Self = document::read(path.as_ref())?;
        debug!(
            accounts = config.accounts.len(),
            routes = config.routes.len(),
            "config loaded"
        );
        Ok(config)
    }

    /// Write the configuration back out in the format of `path`.
    pub fn save(&self, path: impl AsRef<Path>) -> error::Result<()> {
        document::write(path.as_ref(), self)
    }

    /// Look up an account by name.
    pub fn account(&self, name: &str) -> Option<&Account> {
        self.accounts.iter().find(|a| a.name == name)
    }
}

impl Validate for Config {
    fn validate(&self, report: &mut Report, _root: &dyn Node) -> Result<(), ValidationError> {
        if self.accounts.is_empty() {
            report.add("accounts", "at least one account must be defined");
        }

        let mut seen = BTreeSet::new();
        for account in &self.accounts {
            if !account.name.is_empty() && !seen.insert(account.name.as_str()) {
                report.add(&account.name, "duplicate account name");
            }
        }

        Ok(())
    }
}

impl Validate for Account {
    fn validate(&self, report: &mut Report, _root: &dyn Node) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            report.add(shown(&self.name), "account name should not be empty");
        }
        if self.username.trim().is_empty() {
            report.add(shown(&self.name), "login should not be empty");
        }
        Ok(())
    }
}

impl Validate for SmtpServer {
    fn validate(&self, report: &mut Report, root: &dyn Node) -> Result<(), ValidationError> {
        check_endpoint(report, root, &self.host, self.port, &self.account);
        Ok(())
    }
}

impl Validate for ImapServer {
    fn validate(&self, report: &mut Report, root: &dyn Node) -> Result<(), ValidationError> {
        check_endpoint(report, root, &self.host, self.port, &self.account);
        if self.mailbox.trim().is_empty() {
            report.add(&self.host, "mailbox should not be empty");
        }
        Ok(())
    }
}

impl Validate for Route {
    fn validate(&self, report: &mut Report, root: &dyn Node) -> Result<(), ValidationError> {
        check_account_ref(report, root, &self.account);

        if self.recipients.is_empty() {
            report.add(&self.account, "route needs at least one recipient");
        }
        for recipient in &self.recipients {
            if !is_valid_address(recipient) {
                report.add(recipient, "not a valid mail address");
            }
        }
        Ok(())
    }
}

/// Subject text for a possibly blank value.
fn shown(value: &str) -> &str {
    if value.trim().is_empty() {
        "<empty>"
    } else {
        value
    }
}

fn check_endpoint(report: &mut Report, root: &dyn Node, host: &str, port: u16, account: &str) {
    if !is_valid_hostname(host) {
        report.add(host, "not a valid hostname");
    }
    if port == 0 {
        report.add(port, "port must be between 1 and 65535");
    }
    check_account_ref(report, root, account);
}

/// An account reference must name an account of the root config.
///
/// Skipped when the root is something other than a [`Config`], such as
/// a lone server being validated on its own.
fn check_account_ref(report: &mut Report, root: &dyn Node, account: &str) {
    if account.is_empty() {
        report.add("account", "account reference should not be empty");
        return;
    }
    if let Some(config) = root.as_any().downcast_ref::<Config>() {
        if config.account(account).is_none() {
            report.add(account, "refers to an undefined account");
        }
    }
}

fn hostname_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^[A-Za-z0-9]([A-Za-z0-9-]{0,61}[A-Za-z0-9])?(\.[A-Za-z0-9]([A-Za-z0-9-]{0,61}[A-Za-z0-9])?)*$")
            .expect("hostname pattern is a valid regex")
    })
}

/// RFC 1123 hostname check.
pub fn is_valid_hostname(host: &str) -> bool {
    !host.is_empty() && host.len() <= 253 && hostname_pattern().is_match(host)
}

/// Loose address check: `local@domain` with a valid domain.
pub fn is_valid_address(address: &str) -> bool {
    match address.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !local.contains(char::is_whitespace)
                && is_valid_hostname(domain)
                && domain.contains('.')
        }
        None => false,
    }
}
