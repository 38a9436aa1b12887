//! Generic traversal of configuration trees.
//!
//! The walker visits every level of a tree of [`Node`]s, including the
//! root, and hands each value carrying a [`Capability`] to a callback
//! together with its [`WalkPath`]. Containers only list their direct
//! children; reaching nested values is the walker's job alone.
//!
//! A matched value is still descended into, so a validatable struct
//! holding validatable fields gets each of them visited separately.
//!
//! ## Traversal order
//!
//! - struct fields in declaration order
//! - sequence elements by ascending index
//! - map entries in the map's own iteration order
//!
//! `Option` and `Box` add no path segment, and `None` is skipped.

mod node;
mod path;

pub use node::Node;
pub use path::{PathError, Segment, WalkPath};

use tracing::trace;

use crate::core::secret::Sealable;
use crate::core::validation::Validate;

/// A trait the walker can test nodes for.
pub trait Capability {
    /// What a matching node is viewed as.
    type Target: ?Sized;

    /// View `node` as the target, if it has the capability.
    fn select(node: &dyn Node) -> Option<&Self::Target>;
}

/// A capability that can also be borrowed mutably.
pub trait CapabilityMut: Capability {
    fn select_mut(node: &mut dyn Node) -> Option<&mut Self::Target>;
}

/// Matches sealed secrets.
#[derive(Debug, Clone, Copy)]
pub struct Sealing;

impl Capability for Sealing {
    type Target = dyn Sealable;

    fn select(node: &dyn Node) -> Option<&Self::Target> {
        node.as_sealable()
    }
}

impl CapabilityMut for Sealing {
    fn select_mut(node: &mut dyn Node) -> Option<&mut Self::Target> {
        node.as_sealable_mut()
    }
}

/// Matches self-validating values.
#[derive(Debug, Clone, Copy)]
pub struct Validation;

impl Capability for Validation {
    type Target = dyn Validate;

    fn select(node: &dyn Node) -> Option<&Self::Target> {
        node.as_validate()
    }
}

/// Visit every value in `root` that has capability `C`.
///
/// The first error returned by `visit` stops the walk and is returned as is.
/// Whatever `visit` accumulated before that is left to the caller.
pub fn walk<C, E, F>(root: &dyn Node, mut visit: F) -> Result<(), E>
where
    C: Capability,
    F: FnMut(&C::Target, &WalkPath) -> Result<(), E>,
{
    let mut path = WalkPath::root();
    walk_node::<C, E>(root, &mut path, &mut visit)
}

/// Like [`walk`], with mutable access to each match.
pub fn walk_mut<C, E, F>(root: &mut dyn Node, mut visit: F) -> Result<(), E>
where
    C: CapabilityMut,
    F: FnMut(&mut C::Target, &WalkPath) -> Result<(), E>,
{
    let mut path = WalkPath::root();
    walk_node_mut::<C, E>(root, &mut path, &mut visit)
}

fn walk_node<C, E>(
    node: &dyn Node,
    path: &mut WalkPath,
    visit: &mut dyn FnMut(&C::Target, &WalkPath) -> Result<(), E>,
) -> Result<(), E>
where
    C: Capability,
{
    if let Some(target) = C::select(node) {
        trace!(path = %path, "capability match");
        visit(target, path)?;
    }

    for (segment, child) in node.children() {
        path.push(segment);
        let result = walk_node::<C, E>(child, path, visit);
        path.pop();
        result?;
    }

    Ok(())
}

fn walk_node_mut<C, E>(
    node: &mut dyn Node,
    path: &mut WalkPath,
    visit: &mut dyn FnMut(&mut C::Target, &WalkPath) -> Result<(), E>,
) -> Result<(), E>
where
    C: CapabilityMut,
{
    if let Some(target) = C::select_mut(node) {
        trace!(path = %path, "capability match");
        visit(target, path)?;
    }

    for (segment, child) in node.children_mut() {
        path.push(segment);
        let result = walk_node_mut::<C, E>(child, path, visit);
        path.pop();
        result?;
    }

    Ok(())
}
