//! The resolved-symbol accessor consumed by the translator.

use crate::node::Identifier;
use crate::types::NodeId;
use std::collections::HashMap;
use std::hash::BuildHasher;

/// Answers "which declared entity does this identifier denote?" as a stable
/// binding key, or `None` when the front-end could not resolve it.
pub trait ResolvedNames {
    fn binding_key(&self, name: &Identifier) -> Option<&str>;
}

/// Resolves nothing. Every identifier is unbound.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoBindings;

impl ResolvedNames for NoBindings {
    fn binding_key(&self, _name: &Identifier) -> Option<&str> {
        None
    }
}

impl<S: BuildHasher> ResolvedNames for HashMap<NodeId, String, S> {
    fn binding_key(&self, name: &Identifier) -> Option<&str> {
        self.get(&name.data.id).map(String::as_str)
    }
}
