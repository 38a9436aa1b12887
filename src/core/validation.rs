//! Whole-tree validation.
//!
//! Every value implementing [`Validate`] is visited once and may add
//! findings to a shared [`Report`]. A value checks its own level only;
//! nested values are reached by the walker.
//!
//! Two tiers of failure:
//!
//! - a *finding* is an invalid value. It is recorded and the walk goes on.
//! - a *hard error* means validation itself cannot continue. It stops the
//!   walk, the findings gathered so far are discarded, and the error is
//!   the only thing returned.

use std::fmt;

use tracing::debug;

use crate::core::walk::{self, Node, Validation, WalkPath};
use crate::error::ValidationError;

/// A value that knows the invariants of its own level.
pub trait Validate {
    /// Record findings about `self` in `report`.
    ///
    /// `root` is the root of the tree being validated, for checks that
    /// need to look elsewhere in it.
    ///
    /// # Errors
    ///
    /// Return a `ValidationError` only when validation cannot go on.
    fn validate(&self, report: &mut Report, root: &dyn Node) -> Result<(), ValidationError>;
}

/// One invalid value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    /// Where the value sits in the tree.
    pub path: String,
    /// Short description of the offending value.
    pub subject: String,
    /// What is wrong with it.
    pub message: String,
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let path = if self.path.is_empty() {
            "<root>"
        } else {
            &self.path
        };
        write!(f, "{}: {} ({})", path, self.message, self.subject)
    }
}

/// Findings accumulated during a walk.
#[derive(Debug, Default)]
pub struct Report {
    path: String,
    findings: Vec<Finding>,
}

impl Report {
    /// Record a finding about `subject` at the current path.
    pub fn add(&mut self, subject: impl fmt::Display, message: impl Into<String>) {
        let finding = Finding {
            path: self.path.clone(),
            subject: subject.to_string(),
            message: message.into(),
        };
        debug!(path = %finding.path, message = %finding.message, "validation finding");
        self.findings.push(finding);
    }

    /// Path of the value currently being validated.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Findings so far.
    pub fn findings(&self) -> &[Finding] {
        &self.findings
    }

    fn enter(&mut self, path: &WalkPath) {
        self.path = path.to_string();
    }

    fn finish(self) -> ValidationResult {
        ValidationResult {
            findings: self.findings,
        }
    }
}

/// Outcome of validating a tree.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationResult {
    pub findings: Vec<Finding>,
}

impl ValidationResult {
    /// True when nothing was found.
    pub fn is_valid(&self) -> bool {
        self.findings.is_empty()
    }

    /// Number of findings.
    pub fn len(&self) -> usize {
        self.findings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.findings.is_empty()
    }
}

/// Validate every value in `root`, the root included.
///
/// # Errors
///
/// Returns the first hard error raised by any [`Validate`] impl. No
/// findings are returned in that case.
pub fn validate_object(root: &dyn Node) -> Result<ValidationResult, ValidationError> {
    let mut report = Report::default();

    walk::walk::<Validation, _, _>(root, |value, path| {
        report.enter(path);
        value.validate(&mut report, root)
    })?;

    let result = report.finish();
    debug!(findings = result.len(), "validation complete");
    Ok(result)
}
