//! Scanner integration tests over small Java fragments.

use j2d_ast::SyntaxKind;
use j2d_scanner::Scanner;

/// Helper: scan all tokens from source and return as (kind, value) pairs.
fn scan_all(source: &str) -> Vec<(SyntaxKind, String)> {
    let mut scanner = Scanner::new(source);
    let mut tokens = Vec::new();
    loop {
        let kind = scanner.scan();
        if kind == SyntaxKind::EndOfFileToken {
            break;
        }
        tokens.push((kind, scanner.token_value().to_string()));
    }
    tokens
}

fn scan_kinds(source: &str) -> Vec<SyntaxKind> {
    scan_all(source).into_iter().map(|(k, _)| k).collect()
}

#[test]
fn test_empty_and_comment_only_sources() {
    assert!(scan_all("").is_empty());
    assert!(scan_all("  \n\t // line\n /* block\n comment */ ").is_empty());
}

#[test]
fn test_class_header() {
    assert_eq!(
        scan_kinds("public class A<K> extends B {"),
        vec![
            SyntaxKind::PublicKeyword,
            SyntaxKind::ClassKeyword,
            SyntaxKind::Identifier,
            SyntaxKind::LessThanToken,
            SyntaxKind::Identifier,
            SyntaxKind::GreaterThanToken,
            SyntaxKind::ExtendsKeyword,
            SyntaxKind::Identifier,
            SyntaxKind::OpenBraceToken,
        ]
    );
}

#[test]
fn test_operators() {
    assert_eq!(
        scan_kinds("+ ++ += - -- -= * *= / /= % %= == != ! && || & | ^ &= |= ^= << <<= < <= ~ ? :"),
        vec![
            SyntaxKind::PlusToken,
            SyntaxKind::PlusPlusToken,
            SyntaxKind::PlusEqualsToken,
            SyntaxKind::MinusToken,
            SyntaxKind::MinusMinusToken,
            SyntaxKind::MinusEqualsToken,
            SyntaxKind::AsteriskToken,
            SyntaxKind::AsteriskEqualsToken,
            SyntaxKind::SlashToken,
            SyntaxKind::SlashEqualsToken,
            SyntaxKind::PercentToken,
            SyntaxKind::PercentEqualsToken,
            SyntaxKind::EqualsEqualsToken,
            SyntaxKind::ExclamationEqualsToken,
            SyntaxKind::ExclamationToken,
            SyntaxKind::AmpersandAmpersandToken,
            SyntaxKind::BarBarToken,
            SyntaxKind::AmpersandToken,
            SyntaxKind::BarToken,
            SyntaxKind::CaretToken,
            SyntaxKind::AmpersandEqualsToken,
            SyntaxKind::BarEqualsToken,
            SyntaxKind::CaretEqualsToken,
            SyntaxKind::LessThanLessThanToken,
            SyntaxKind::LessThanLessThanEqualsToken,
            SyntaxKind::LessThanToken,
            SyntaxKind::LessThanEqualsToken,
            SyntaxKind::TildeToken,
            SyntaxKind::QuestionToken,
            SyntaxKind::ColonToken,
        ]
    );
}

#[test]
fn test_nested_generic_closers_stay_single() {
    assert_eq!(
        scan_kinds("List<List<String>>"),
        vec![
            SyntaxKind::Identifier,
            SyntaxKind::LessThanToken,
            SyntaxKind::Identifier,
            SyntaxKind::LessThanToken,
            SyntaxKind::Identifier,
            SyntaxKind::GreaterThanToken,
            SyntaxKind::GreaterThanToken,
        ]
    );
}

#[test]
fn test_numeric_literals_keep_spelling() {
    let tokens = scan_all("42 3.14 0xFF 0b1010 017 1_000 1L 1f 1.0D .5 6.02e23");
    let values: Vec<&str> = tokens.iter().map(|(_, v)| v.as_str()).collect();
    assert_eq!(
        values,
        vec!["42", "3.14", "0xFF", "0b1010", "017", "1_000", "1L", "1f", "1.0D", ".5", "6.02e23"]
    );
    assert!(tokens.iter().all(|(k, _)| *k == SyntaxKind::NumericLiteral));
}

#[test]
fn test_string_and_char_literals_keep_quotes() {
    let tokens = scan_all(r#""a\"b" 'c' '\n' "A""#);
    assert_eq!(
        tokens,
        vec![
            (SyntaxKind::StringLiteral, r#""a\"b""#.to_string()),
            (SyntaxKind::CharacterLiteral, "'c'".to_string()),
            (SyntaxKind::CharacterLiteral, r"'\n'".to_string()),
            (SyntaxKind::StringLiteral, r#""A""#.to_string()),
        ]
    );
}

#[test]
fn test_unterminated_string_reports() {
    let mut scanner = Scanner::new("\"abc\nint");
    assert_eq!(scanner.scan(), SyntaxKind::StringLiteral);
    assert_eq!(scanner.scan(), SyntaxKind::IntKeyword);
    assert!(scanner.take_diagnostics().has_errors());
}

#[test]
fn test_unterminated_comment_reports() {
    let mut scanner = Scanner::new("/* never closed");
    assert_eq!(scanner.scan(), SyntaxKind::EndOfFileToken);
    assert!(scanner.take_diagnostics().has_errors());
}

#[test]
fn test_keywords_and_identifiers() {
    let tokens = scan_all("synchronized instanceof $x _y café");
    assert_eq!(tokens[0].0, SyntaxKind::SynchronizedKeyword);
    assert_eq!(tokens[1].0, SyntaxKind::InstanceOfKeyword);
    assert_eq!(tokens[2], (SyntaxKind::Identifier, "$x".to_string()));
    assert_eq!(tokens[3], (SyntaxKind::Identifier, "_y".to_string()));
    assert_eq!(tokens[4], (SyntaxKind::Identifier, "café".to_string()));
}

#[test]
fn test_token_positions_count_chars() {
    let mut scanner = Scanner::new("é x");
    scanner.scan();
    assert_eq!((scanner.token_start(), scanner.token_end()), (0, 1));
    scanner.scan();
    assert_eq!((scanner.token_start(), scanner.token_end()), (2, 3));
}
