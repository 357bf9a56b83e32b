//! Java operator to Dart token tables.
//!
//! Every table is closed: an operator missing here has no Dart form and
//! its expression fails to translate.

use j2d_ast::SyntaxKind;
use j2d_dart_ast::TokenType;

/// Infix operators. Signed and unsigned right shift both become `>>`.
pub fn binary_operator(operator: SyntaxKind) -> Option<TokenType> {
    let token = match operator {
        SyntaxKind::PlusToken => TokenType::Plus,
        SyntaxKind::MinusToken => TokenType::Minus,
        SyntaxKind::AsteriskToken => TokenType::Star,
        SyntaxKind::SlashToken => TokenType::Slash,
        SyntaxKind::PercentToken => TokenType::Percent,
        SyntaxKind::LessThanLessThanToken => TokenType::LtLt,
        SyntaxKind::GreaterThanGreaterThanToken | SyntaxKind::GreaterThanGreaterThanGreaterThanToken => {
            TokenType::GtGt
        }
        SyntaxKind::BarBarToken => TokenType::BarBar,
        SyntaxKind::AmpersandAmpersandToken => TokenType::AmpAmp,
        SyntaxKind::CaretToken => TokenType::Caret,
        SyntaxKind::BarToken => TokenType::Bar,
        SyntaxKind::AmpersandToken => TokenType::Amp,
        SyntaxKind::LessThanToken => TokenType::Lt,
        SyntaxKind::GreaterThanToken => TokenType::Gt,
        SyntaxKind::LessThanEqualsToken => TokenType::LtEq,
        SyntaxKind::GreaterThanEqualsToken => TokenType::GtEq,
        SyntaxKind::EqualsEqualsToken => TokenType::EqEq,
        SyntaxKind::ExclamationEqualsToken => TokenType::BangEq,
        _ => return None,
    };
    Some(token)
}

/// What a prefix operator becomes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrefixOperator {
    /// Unary plus: the operand stands alone.
    Elided,
    Token(TokenType),
}

pub fn prefix_operator(operator: SyntaxKind) -> Option<PrefixOperator> {
    let token = match operator {
        SyntaxKind::PlusToken => return Some(PrefixOperator::Elided),
        SyntaxKind::MinusToken => TokenType::Minus,
        SyntaxKind::ExclamationToken => TokenType::Bang,
        SyntaxKind::TildeToken => TokenType::Tilde,
        SyntaxKind::PlusPlusToken => TokenType::PlusPlus,
        SyntaxKind::MinusMinusToken => TokenType::MinusMinus,
        _ => return None,
    };
    Some(PrefixOperator::Token(token))
}

pub fn postfix_operator(operator: SyntaxKind) -> Option<TokenType> {
    match operator {
        SyntaxKind::PlusPlusToken => Some(TokenType::PlusPlus),
        SyntaxKind::MinusMinusToken => Some(TokenType::MinusMinus),
        _ => None,
    }
}

/// Assignment operators. `>>>=` becomes `>>=`, like the infix shift.
pub fn assignment_operator(operator: SyntaxKind) -> Option<TokenType> {
    let token = match operator {
        SyntaxKind::EqualsToken => TokenType::Eq,
        SyntaxKind::PlusEqualsToken => TokenType::PlusEq,
        SyntaxKind::MinusEqualsToken => TokenType::MinusEq,
        SyntaxKind::AsteriskEqualsToken => TokenType::StarEq,
        SyntaxKind::SlashEqualsToken => TokenType::SlashEq,
        SyntaxKind::PercentEqualsToken => TokenType::PercentEq,
        SyntaxKind::AmpersandEqualsToken => TokenType::AmpEq,
        SyntaxKind::BarEqualsToken => TokenType::BarEq,
        SyntaxKind::CaretEqualsToken => TokenType::CaretEq,
        SyntaxKind::LessThanLessThanEqualsToken => TokenType::LtLtEq,
        SyntaxKind::GreaterThanGreaterThanEqualsToken | SyntaxKind::GreaterThanGreaterThanGreaterThanEqualsToken => {
            TokenType::GtGtEq
        }
        _ => return None,
    };
    Some(token)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn binary_table() {
        let table = [
            (SyntaxKind::PlusToken, "PLUS"),
            (SyntaxKind::MinusToken, "MINUS"),
            (SyntaxKind::AsteriskToken, "STAR"),
            (SyntaxKind::SlashToken, "SLASH"),
            (SyntaxKind::PercentToken, "PERCENT"),
            (SyntaxKind::LessThanLessThanToken, "LT_LT"),
            (SyntaxKind::GreaterThanGreaterThanToken, "GT_GT"),
            (SyntaxKind::GreaterThanGreaterThanGreaterThanToken, "GT_GT"),
            (SyntaxKind::BarBarToken, "BAR_BAR"),
            (SyntaxKind::AmpersandAmpersandToken, "AMP_AMP"),
            (SyntaxKind::CaretToken, "CARET"),
            (SyntaxKind::BarToken, "BAR"),
            (SyntaxKind::AmpersandToken, "AMP"),
            (SyntaxKind::LessThanToken, "LT"),
            (SyntaxKind::GreaterThanToken, "GT"),
            (SyntaxKind::LessThanEqualsToken, "LT_EQ"),
            (SyntaxKind::GreaterThanEqualsToken, "GT_EQ"),
            (SyntaxKind::EqualsEqualsToken, "EQ_EQ"),
            (SyntaxKind::ExclamationEqualsToken, "BANG_EQ"),
        ];
        for (operator, expected) in table {
            assert_eq!(binary_operator(operator).map(TokenType::name), Some(expected), "{:?}", operator);
        }
        assert_eq!(binary_operator(SyntaxKind::InstanceOfKeyword), None);
    }

    #[test]
    fn unary_tables() {
        assert_eq!(prefix_operator(SyntaxKind::PlusToken), Some(PrefixOperator::Elided));
        assert_eq!(prefix_operator(SyntaxKind::TildeToken), Some(PrefixOperator::Token(TokenType::Tilde)));
        assert_eq!(prefix_operator(SyntaxKind::AsteriskToken), None);
        assert_eq!(postfix_operator(SyntaxKind::MinusMinusToken), Some(TokenType::MinusMinus));
        assert_eq!(postfix_operator(SyntaxKind::ExclamationToken), None);
    }

    #[test]
    fn assignment_table() {
        assert_eq!(assignment_operator(SyntaxKind::EqualsToken), Some(TokenType::Eq));
        assert_eq!(assignment_operator(SyntaxKind::CaretEqualsToken), Some(TokenType::CaretEq));
        assert_eq!(
            assignment_operator(SyntaxKind::GreaterThanGreaterThanGreaterThanEqualsToken),
            Some(TokenType::GtGtEq)
        );
        assert_eq!(assignment_operator(SyntaxKind::PlusToken), None);
    }
}
