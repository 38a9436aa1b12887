//! Sealing, unsealing and checking every secret in a tree.
//!
//! Each operation walks the whole tree and tries every secret it finds.
//! A secret that fails is counted and its error recorded with its path;
//! the walk always finishes. The only early exit is a missing key, which
//! is reported before anything is touched.

use std::convert::Infallible;

use tracing::{debug, warn};

use crate::core::crypto::{Sealer, Unsealer};
use crate::core::walk::{walk, walk_mut, Node, PathError, Sealing, WalkPath};
use crate::error::{CryptoError, Result, SecretError};

/// Outcome of [`seal_all`].
#[derive(Debug, Default)]
pub struct SealResult {
    /// Secrets sealed once the walk finished.
    pub total_sealed: usize,
    /// Secrets still unsealed because sealing them failed.
    pub total_unsealed: usize,
    /// Secrets this call sealed.
    pub number_sealed: usize,
    pub errors: Vec<PathError<SecretError>>,
}

impl SealResult {
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Outcome of [`unseal_all`].
#[derive(Debug, Default)]
pub struct UnsealResult {
    /// Secrets still sealed because unsealing them failed.
    pub total_sealed: usize,
    /// Secrets unsealed once the walk finished.
    pub total_unsealed: usize,
    /// Secrets this call unsealed.
    pub number_unsealed: usize,
    pub errors: Vec<PathError<SecretError>>,
}

impl UnsealResult {
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Outcome of [`check_all`].
#[derive(Debug, Default)]
pub struct SealCheckResult {
    pub total_sealed: usize,
    pub total_unsealed: usize,
    pub errors: Vec<PathError<SecretError>>,
}

impl SealCheckResult {
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }
}

fn infallible(result: std::result::Result<(), Infallible>) {
    match result {
        Ok(()) => {}
        Err(never) => match never {},
    }
}

/// Seal every unsealed secret in `tree`.
///
/// # Errors
///
/// Returns `CryptoError::NoKey` if `sealer` has no key. Per-secret
/// failures are reported in the result instead.
pub fn seal_all(tree: &mut dyn Node, sealer: &Sealer) -> Result<SealResult> {
    if !sealer.has_key() {
        return Err(CryptoError::NoKey.into());
    }

    let mut result = SealResult::default();

    infallible(walk_mut::<Sealing, Infallible, _>(tree, |item, path| {
        if item.is_sealed() {
            result.total_sealed += 1;
            return Ok(());
        }

        match item.seal(sealer) {
            Ok(()) => {
                debug!(path = %path, "sealed");
                result.total_sealed += 1;
                result.number_sealed += 1;
            }
            Err(e) => {
                warn!(path = %path, error = %e, "failed to seal");
                result.total_unsealed += 1;
                result.errors.push(PathError::new(path.clone(), e));
            }
        }
        Ok(())
    }));

    debug!(
        sealed = result.total_sealed,
        newly_sealed = result.number_sealed,
        errors = result.errors.len(),
        "seal complete"
    );
    Ok(result)
}

/// Unseal every sealed secret in `tree`.
///
/// # Errors
///
/// Returns `CryptoError::NoKey` if `unsealer` has no key. Per-secret
/// failures are reported in the result instead.
pub fn unseal_all(tree: &mut dyn Node, unsealer: &Unsealer) -> Result<UnsealResult> {
    if !unsealer.has_key() {
        return Err(CryptoError::NoKey.into());
    }

    let mut result = UnsealResult::default();

    infallible(walk_mut::<Sealing, Infallible, _>(tree, |item, path| {
        if !item.is_sealed() {
            result.total_unsealed += 1;
            return Ok(());
        }

        match item.unseal(unsealer) {
            Ok(()) => {
                debug!(path = %path, "unsealed");
                result.total_unsealed += 1;
                result.number_unsealed += 1;
            }
            Err(e) => {
                warn!(path = %path, error = %e, "failed to unseal");
                result.total_sealed += 1;
                result.errors.push(PathError::new(path.clone(), e));
            }
        }
        Ok(())
    }));

    debug!(
        unsealed = result.total_unsealed,
        newly_unsealed = result.number_unsealed,
        errors = result.errors.len(),
        "unseal complete"
    );
    Ok(result)
}

/// Check every secret in `tree` without changing any of them.
///
/// With `Some(unsealer)` sealed secrets are trial-decrypted; with `None`
/// only their stored form is checked.
///
/// # Errors
///
/// Returns `CryptoError::NoKey` if an unsealer is given without a key.
pub fn check_all(tree: &dyn Node, unsealer: Option<&Unsealer>) -> Result<SealCheckResult> {
    if matches!(unsealer, Some(u) if !u.has_key()) {
        return Err(CryptoError::NoKey.into());
    }

    let mut result = SealCheckResult::default();

    infallible(walk::<Sealing, Infallible, _>(tree, |item, path| {
        if item.is_sealed() {
            result.total_sealed += 1;
        } else {
            result.total_unsealed += 1;
        }

        if let Err(e) = item.check(unsealer) {
            warn!(path = %path, error = %e, "check failed");
            result.errors.push(PathError::new(path.clone(), e));
        }
        Ok(())
    }));

    debug!(
        sealed = result.total_sealed,
        unsealed = result.total_unsealed,
        errors = result.errors.len(),
        "check complete"
    );
    Ok(result)
}

/// Paths of every secret in `tree`, sealed or not.
pub fn secret_paths(tree: &dyn Node) -> Vec<(WalkPath, bool)> {
    let mut paths = Vec::new();
    infallible(walk::<Sealing, Infallible, _>(tree, |item, path| {
        paths.push((path.clone(), item.is_sealed()));
        Ok(())
    }));
    paths
}
