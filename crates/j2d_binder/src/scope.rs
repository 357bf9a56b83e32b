//! Block scopes for locals and parameters.

use crate::descriptor::ResolvedType;
use rustc_hash::FxHashMap;

#[derive(Debug, Clone)]
pub struct LocalVariable {
    pub key: String,
    pub type_ref: Option<ResolvedType>,
}

/// A block scope. Scopes are kept on a stack by the binder; lookup walks it
/// from the innermost scope outwards.
#[derive(Debug, Default)]
pub struct Scope {
    names: FxHashMap<String, LocalVariable>,
}

impl Scope {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn declare(&mut self, name: String, variable: LocalVariable) {
        self.names.insert(name, variable);
    }

    pub fn get(&self, name: &str) -> Option<&LocalVariable> {
        self.names.get(name)
    }
}
