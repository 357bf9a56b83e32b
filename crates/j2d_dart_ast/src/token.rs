//! Dart operator tokens.

use std::fmt;

/// Operator tokens that can appear in translated expressions.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum TokenType {
    // Arithmetic
    Plus,
    Minus,
    Star,
    Slash,
    Percent,
    // Shifts
    LtLt,
    GtGt,
    // Logical and bitwise
    BarBar,
    AmpAmp,
    Caret,
    Bar,
    Amp,
    // Relational and equality
    Lt,
    Gt,
    LtEq,
    GtEq,
    EqEq,
    BangEq,
    // Unary
    Bang,
    Tilde,
    PlusPlus,
    MinusMinus,
    // Assignment
    Eq,
    PlusEq,
    MinusEq,
    StarEq,
    SlashEq,
    PercentEq,
    AmpEq,
    BarEq,
    CaretEq,
    LtLtEq,
    GtGtEq,
}

impl TokenType {
    /// Source text of the token.
    pub fn lexeme(self) -> &'static str {
        match self {
            TokenType::Plus => "+",
            TokenType::Minus => "-",
            TokenType::Star => "*",
            TokenType::Slash => "/",
            TokenType::Percent => "%",
            TokenType::LtLt => "<<",
            TokenType::GtGt => ">>",
            TokenType::BarBar => "||",
            TokenType::AmpAmp => "&&",
            TokenType::Caret => "^",
            TokenType::Bar => "|",
            TokenType::Amp => "&",
            TokenType::Lt => "<",
            TokenType::Gt => ">",
            TokenType::LtEq => "<=",
            TokenType::GtEq => ">=",
            TokenType::EqEq => "==",
            TokenType::BangEq => "!=",
            TokenType::Bang => "!",
            TokenType::Tilde => "~",
            TokenType::PlusPlus => "++",
            TokenType::MinusMinus => "--",
            TokenType::Eq => "=",
            TokenType::PlusEq => "+=",
            TokenType::MinusEq => "-=",
            TokenType::StarEq => "*=",
            TokenType::SlashEq => "/=",
            TokenType::PercentEq => "%=",
            TokenType::AmpEq => "&=",
            TokenType::BarEq => "|=",
            TokenType::CaretEq => "^=",
            TokenType::LtLtEq => "<<=",
            TokenType::GtGtEq => ">>=",
        }
    }

    /// Conventional upper-case token name, e.g. `GT_GT`.
    pub fn name(self) -> &'static str {
        match self {
            TokenType::Plus => "PLUS",
            TokenType::Minus => "MINUS",
            TokenType::Star => "STAR",
            TokenType::Slash => "SLASH",
            TokenType::Percent => "PERCENT",
            TokenType::LtLt => "LT_LT",
            TokenType::GtGt => "GT_GT",
            TokenType::BarBar => "BAR_BAR",
            TokenType::AmpAmp => "AMP_AMP",
            TokenType::Caret => "CARET",
            TokenType::Bar => "BAR",
            TokenType::Amp => "AMP",
            TokenType::Lt => "LT",
            TokenType::Gt => "GT",
            TokenType::LtEq => "LT_EQ",
            TokenType::GtEq => "GT_EQ",
            TokenType::EqEq => "EQ_EQ",
            TokenType::BangEq => "BANG_EQ",
            TokenType::Bang => "BANG",
            TokenType::Tilde => "TILDE",
            TokenType::PlusPlus => "PLUS_PLUS",
            TokenType::MinusMinus => "MINUS_MINUS",
            TokenType::Eq => "EQ",
            TokenType::PlusEq => "PLUS_EQ",
            TokenType::MinusEq => "MINUS_EQ",
            TokenType::StarEq => "STAR_EQ",
            TokenType::SlashEq => "SLASH_EQ",
            TokenType::PercentEq => "PERCENT_EQ",
            TokenType::AmpEq => "AMP_EQ",
            TokenType::BarEq => "BAR_EQ",
            TokenType::CaretEq => "CARET_EQ",
            TokenType::LtLtEq => "LT_LT_EQ",
            TokenType::GtGtEq => "GT_GT_EQ",
        }
    }

    #[inline]
    pub fn is_assignment(self) -> bool {
        matches!(
            self,
            TokenType::Eq
                | TokenType::PlusEq
                | TokenType::MinusEq
                | TokenType::StarEq
                | TokenType::SlashEq
                | TokenType::PercentEq
                | TokenType::AmpEq
                | TokenType::BarEq
                | TokenType::CaretEq
                | TokenType::LtLtEq
                | TokenType::GtGtEq
        )
    }

    /// Dart precedence of the token as a binary operator; higher binds
    /// tighter. Prefix-only tokens rank as unary prefix operators.
    pub fn precedence(self) -> u8 {
        match self {
            TokenType::Star | TokenType::Slash | TokenType::Percent => 14,
            TokenType::Plus | TokenType::Minus => 13,
            TokenType::LtLt | TokenType::GtGt => 12,
            TokenType::Amp => 11,
            TokenType::Caret => 10,
            TokenType::Bar => 9,
            TokenType::Lt | TokenType::Gt | TokenType::LtEq | TokenType::GtEq => 8,
            TokenType::EqEq | TokenType::BangEq => 7,
            TokenType::AmpAmp => 6,
            TokenType::BarBar => 5,
            TokenType::Bang | TokenType::Tilde | TokenType::PlusPlus | TokenType::MinusMinus => 15,
            _ => 1,
        }
    }

    /// Relational and equality operators do not chain in Dart.
    #[inline]
    pub fn is_non_associative(self) -> bool {
        matches!(self.precedence(), 7 | 8)
    }
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.lexeme())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lexemes_and_names() {
        assert_eq!(TokenType::GtGt.lexeme(), ">>");
        assert_eq!(TokenType::GtGt.name(), "GT_GT");
        assert_eq!(TokenType::GtGtEq.to_string(), ">>=");
        assert!(TokenType::CaretEq.is_assignment());
        assert!(!TokenType::EqEq.is_assignment());
    }

    #[test]
    fn bitwise_operators_bind_tighter_than_comparisons() {
        assert!(TokenType::Amp.precedence() > TokenType::Lt.precedence());
        assert!(TokenType::Bar.precedence() > TokenType::EqEq.precedence());
        assert!(TokenType::Star.precedence() > TokenType::Plus.precedence());
        assert!(TokenType::AmpAmp.precedence() > TokenType::BarBar.precedence());
        assert_eq!(TokenType::PlusEq.precedence(), TokenType::Eq.precedence());
        assert!(TokenType::Lt.is_non_associative());
        assert!(!TokenType::Amp.is_non_associative());
    }
}
