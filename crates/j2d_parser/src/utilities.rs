//! Token classification helpers for the parser.

use j2d_ast::SyntaxKind;

/// Tokens at which statement-level error recovery stops skipping.
pub fn is_statement_recovery_point(kind: SyntaxKind) -> bool {
    matches!(
        kind,
        SyntaxKind::OpenBraceToken
            | SyntaxKind::CloseBraceToken
            | SyntaxKind::SemicolonToken
            | SyntaxKind::IfKeyword
            | SyntaxKind::ForKeyword
            | SyntaxKind::WhileKeyword
            | SyntaxKind::DoKeyword
            | SyntaxKind::SwitchKeyword
            | SyntaxKind::CaseKeyword
            | SyntaxKind::DefaultKeyword
            | SyntaxKind::ReturnKeyword
            | SyntaxKind::ThrowKeyword
            | SyntaxKind::TryKeyword
            | SyntaxKind::BreakKeyword
            | SyntaxKind::ContinueKeyword
            | SyntaxKind::ClassKeyword
            | SyntaxKind::EndOfFileToken
    )
}

/// Tokens at which member-level error recovery stops skipping.
pub fn is_member_recovery_point(kind: SyntaxKind) -> bool {
    kind.is_modifier_keyword()
        || kind.is_primitive_type_keyword()
        || matches!(
            kind,
            SyntaxKind::CloseBraceToken
                | SyntaxKind::AtToken
                | SyntaxKind::ClassKeyword
                | SyntaxKind::InterfaceKeyword
                | SyntaxKind::EndOfFileToken
        )
}

/// Whether a token may start the operand of a cast to a reference type.
/// `(a) + b` is an addition, `(A) b` a cast; unary `+` and `-` are excluded
/// for exactly that reason.
pub fn can_start_cast_operand(kind: SyntaxKind) -> bool {
    matches!(
        kind,
        SyntaxKind::Identifier
            | SyntaxKind::NumericLiteral
            | SyntaxKind::StringLiteral
            | SyntaxKind::CharacterLiteral
            | SyntaxKind::OpenParenToken
            | SyntaxKind::ThisKeyword
            | SyntaxKind::SuperKeyword
            | SyntaxKind::NewKeyword
            | SyntaxKind::TrueKeyword
            | SyntaxKind::FalseKeyword
            | SyntaxKind::NullKeyword
            | SyntaxKind::ExclamationToken
            | SyntaxKind::TildeToken
    )
}

pub fn is_prefix_operator(kind: SyntaxKind) -> bool {
    matches!(
        kind,
        SyntaxKind::PlusToken
            | SyntaxKind::MinusToken
            | SyntaxKind::PlusPlusToken
            | SyntaxKind::MinusMinusToken
            | SyntaxKind::ExclamationToken
            | SyntaxKind::TildeToken
    )
}
