//! Token information produced by the scanner.

use j2d_ast::SyntaxKind;

bitflags::bitflags! {
    /// Facts about the current token that its kind alone does not carry.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct TokenFlags: u32 {
        const NONE               = 0;
        const UNTERMINATED       = 1 << 0;
        const HEX_SPECIFIER      = 1 << 1;
        const BINARY_SPECIFIER   = 1 << 2;
        const OCTAL              = 1 << 3;
        const CONTAINS_SEPARATOR = 1 << 4;
        const SCIENTIFIC         = 1 << 5;
        const DECIMAL_POINT      = 1 << 6;
        /// `L` or `l`
        const LONG_SUFFIX        = 1 << 7;
        /// `F`, `f`, `D` or `d`
        const FLOATING_SUFFIX    = 1 << 8;
    }
}

#[derive(Debug, Clone)]
pub struct TokenInfo {
    pub kind: SyntaxKind,
    pub pos: u32,
    pub end: u32,
    pub text: String,
    pub flags: TokenFlags,
}

impl TokenInfo {
    pub fn len(&self) -> u32 {
        self.end - self.pos
    }

    pub fn is_empty(&self) -> bool {
        self.pos == self.end
    }
}
