//! Flag and id types attached to nodes.

bitflags::bitflags! {
    /// Java declaration modifiers.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct ModifierFlags: u32 {
        const NONE          = 0;
        const PUBLIC        = 1 << 0;
        const PROTECTED     = 1 << 1;
        const PRIVATE       = 1 << 2;
        const STATIC        = 1 << 3;
        const ABSTRACT      = 1 << 4;
        const FINAL         = 1 << 5;
        const NATIVE        = 1 << 6;
        const SYNCHRONIZED  = 1 << 7;
        const TRANSIENT     = 1 << 8;
        const VOLATILE      = 1 << 9;
        const STRICTFP      = 1 << 10;
        const DEFAULT       = 1 << 11;

        const ACCESSIBILITY = Self::PUBLIC.bits() | Self::PROTECTED.bits() | Self::PRIVATE.bits();
    }
}

impl ModifierFlags {
    pub fn from_keyword(kind: crate::SyntaxKind) -> ModifierFlags {
        use crate::SyntaxKind;
        match kind {
            SyntaxKind::PublicKeyword => ModifierFlags::PUBLIC,
            SyntaxKind::ProtectedKeyword => ModifierFlags::PROTECTED,
            SyntaxKind::PrivateKeyword => ModifierFlags::PRIVATE,
            SyntaxKind::StaticKeyword => ModifierFlags::STATIC,
            SyntaxKind::AbstractKeyword => ModifierFlags::ABSTRACT,
            SyntaxKind::FinalKeyword => ModifierFlags::FINAL,
            SyntaxKind::NativeKeyword => ModifierFlags::NATIVE,
            SyntaxKind::SynchronizedKeyword => ModifierFlags::SYNCHRONIZED,
            SyntaxKind::TransientKeyword => ModifierFlags::TRANSIENT,
            SyntaxKind::VolatileKeyword => ModifierFlags::VOLATILE,
            SyntaxKind::StrictfpKeyword => ModifierFlags::STRICTFP,
            SyntaxKind::DefaultKeyword => ModifierFlags::DEFAULT,
            _ => ModifierFlags::NONE,
        }
    }
}

/// Per-file node id, assigned by the parser in creation order.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct NodeId(pub u32);

impl NodeId {
    pub const INVALID: NodeId = NodeId(u32::MAX);

    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}
