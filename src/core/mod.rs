//! Core library components.
//!
//! The object-graph walker, the RSA-OAEP engine, sealed secrets, and the
//! whole-tree operations built on them.

pub mod bulk;
pub mod config;
pub mod constants;
pub mod crypto;
pub mod document;
pub mod secret;
pub mod validation;
pub mod walk;
