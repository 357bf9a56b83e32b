//! Literal and primitive type rewriting.

use j2d_ast::SyntaxKind;

/// A Java number token rewritten for Dart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NumberLiteral {
    Int(String),
    Double(String),
}

/// Rewrites a Java number token.
///
/// A token with a `.`, or a non-hex token ending in `f`/`d`, is a double:
/// the suffix goes and `.0` is added when no `.` remains. Everything else
/// is an int with any `l` suffix removed. Hex tokens never gain a `.0`,
/// so `0xFD` stays an int. Suffixes are matched case-insensitively.
///
/// Tokens with an exponent (`1e5`, `2E3f`) are doubles already and are
/// left without a `.0`.
pub fn normalize_number(token: &str) -> NumberLiteral {
    let is_hex = token.get(..2).is_some_and(|prefix| prefix.eq_ignore_ascii_case("0x"));
    let has_exponent = !is_hex && token.contains(['e', 'E']);
    let floating_suffix = ends_with_ignore_case(token, 'f') || ends_with_ignore_case(token, 'd');
    if token.contains('.') || has_exponent || (!is_hex && floating_suffix) {
        let stripped = strip_suffix_ignore_case(token, 'f');
        let stripped = strip_suffix_ignore_case(stripped, 'd');
        let mut text = stripped.to_string();
        if !text.contains('.') && !has_exponent {
            text.push_str(".0");
        }
        NumberLiteral::Double(text)
    } else {
        NumberLiteral::Int(strip_suffix_ignore_case(token, 'l').to_string())
    }
}

fn ends_with_ignore_case(token: &str, suffix: char) -> bool {
    token.chars().next_back().is_some_and(|last| last.eq_ignore_ascii_case(&suffix))
}

fn strip_suffix_ignore_case(token: &str, suffix: char) -> &str {
    if ends_with_ignore_case(token, suffix) {
        &token[..token.len() - 1]
    } else {
        token
    }
}

/// Dart name for a Java primitive type keyword.
pub fn primitive_type_name(keyword: SyntaxKind) -> &'static str {
    match keyword {
        SyntaxKind::BooleanKeyword => "bool",
        SyntaxKind::ByteKeyword | SyntaxKind::CharKeyword | SyntaxKind::ShortKeyword | SyntaxKind::LongKeyword => {
            "int"
        }
        SyntaxKind::FloatKeyword => "double",
        SyntaxKind::IntKeyword => "int",
        SyntaxKind::DoubleKeyword => "double",
        SyntaxKind::VoidKeyword => "void",
        other => other.keyword_text().unwrap_or("dynamic"),
    }
}
