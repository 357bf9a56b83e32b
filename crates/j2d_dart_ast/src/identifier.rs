//! Identifier storage.

use std::fmt;

/// Handle to one identifier occurrence in the Dart output.
///
/// Two occurrences of the same name get distinct handles; that is what lets
/// a rename change the calls of `foo(int)` while leaving `foo()` alone.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct IdentifierId(u32);

impl IdentifierId {
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for IdentifierId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Ident#{}", self.0)
    }
}

/// Displayed text of every identifier occurrence in a batch.
#[derive(Debug, Clone, Default)]
pub struct IdentifierTable {
    names: Vec<String>,
}

impl IdentifierTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create(&mut self, name: impl Into<String>) -> IdentifierId {
        let id = IdentifierId(self.names.len() as u32);
        self.names.push(name.into());
        id
    }

    pub fn name(&self, id: IdentifierId) -> &str {
        &self.names[id.index()]
    }

    /// Changes the displayed text of one occurrence. Its handle stays valid.
    pub fn set_name(&mut self, id: IdentifierId, name: impl Into<String>) {
        self.names[id.index()] = name.into();
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn occurrences_are_independent() {
        let mut table = IdentifierTable::new();
        let first = table.create("foo");
        let second = table.create("foo");
        assert_ne!(first, second);
        table.set_name(first, "foo2");
        assert_eq!(table.name(first), "foo2");
        assert_eq!(table.name(second), "foo");
        assert_eq!(table.len(), 2);
    }
}
