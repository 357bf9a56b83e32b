//! Name interning.
//!
//! Every identifier the scanner produces is interned once per batch, so the
//! binder can compare names and key its tables by a `u32` handle.

use lasso::{Spur, ThreadedRodeo};
use std::fmt;
use std::sync::Arc;

/// Handle to a name stored in a [`StringInterner`].
#[derive(Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct InternedString(Spur);

impl fmt::Debug for InternedString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Name#{}", lasso::Key::into_usize(self.0))
    }
}

/// Batch-wide name table.
///
/// Cloning is cheap and every clone sees the same names, which lets the
/// parser intern through a shared reference while the binder resolves.
#[derive(Clone, Default)]
pub struct StringInterner {
    names: Arc<ThreadedRodeo>,
}

impl StringInterner {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn intern(&self, text: &str) -> InternedString {
        InternedString(self.names.get_or_intern(text))
    }

    /// Returns the handle for `text` only if it has been interned before.
    #[inline]
    pub fn lookup(&self, text: &str) -> Option<InternedString> {
        self.names.get(text).map(InternedString)
    }

    #[inline]
    pub fn resolve(&self, name: InternedString) -> &str {
        self.names.resolve(&name.0)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl fmt::Debug for StringInterner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StringInterner")
            .field("names", &self.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_text_same_handle() {
        let interner = StringInterner::new();
        let a = interner.intern("foo");
        let b = interner.intern("foo");
        assert_eq!(a, b);
        assert_ne!(a, interner.intern("bar"));
        assert_eq!(interner.resolve(a), "foo");
    }

    #[test]
    fn clones_share_names() {
        let interner = StringInterner::new();
        let clone = interner.clone();
        let a = clone.intern("Main");
        assert_eq!(interner.lookup("Main"), Some(a));
        assert_eq!(interner.len(), 1);
    }

    #[test]
    fn lookup_does_not_intern() {
        let interner = StringInterner::new();
        assert!(interner.lookup("missing").is_none());
        assert!(interner.is_empty());
    }
}
