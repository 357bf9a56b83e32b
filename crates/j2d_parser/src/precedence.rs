//! Java binary operator precedence.

use j2d_ast::SyntaxKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[repr(u8)]
pub enum OperatorPrecedence {
    Lowest = 0,
    LogicalOr = 1,
    LogicalAnd = 2,
    BitwiseOr = 3,
    BitwiseXor = 4,
    BitwiseAnd = 5,
    Equality = 6,
    /// `<`, `>`, `<=`, `>=` and `instanceof`
    Relational = 7,
    Shift = 8,
    Additive = 9,
    Multiplicative = 10,
    Invalid = 255,
}

pub fn get_binary_operator_precedence(kind: SyntaxKind) -> OperatorPrecedence {
    match kind {
        SyntaxKind::BarBarToken => OperatorPrecedence::LogicalOr,
        SyntaxKind::AmpersandAmpersandToken => OperatorPrecedence::LogicalAnd,
        SyntaxKind::BarToken => OperatorPrecedence::BitwiseOr,
        SyntaxKind::CaretToken => OperatorPrecedence::BitwiseXor,
        SyntaxKind::AmpersandToken => OperatorPrecedence::BitwiseAnd,
        SyntaxKind::EqualsEqualsToken | SyntaxKind::ExclamationEqualsToken => {
            OperatorPrecedence::Equality
        }
        SyntaxKind::LessThanToken
        | SyntaxKind::GreaterThanToken
        | SyntaxKind::LessThanEqualsToken
        | SyntaxKind::GreaterThanEqualsToken
        | SyntaxKind::InstanceOfKeyword => OperatorPrecedence::Relational,
        SyntaxKind::LessThanLessThanToken
        | SyntaxKind::GreaterThanGreaterThanToken
        | SyntaxKind::GreaterThanGreaterThanGreaterThanToken => OperatorPrecedence::Shift,
        SyntaxKind::PlusToken | SyntaxKind::MinusToken => OperatorPrecedence::Additive,
        SyntaxKind::AsteriskToken | SyntaxKind::SlashToken | SyntaxKind::PercentToken => {
            OperatorPrecedence::Multiplicative
        }
        _ => OperatorPrecedence::Invalid,
    }
}
