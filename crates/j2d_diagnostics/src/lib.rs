//! j2d_diagnostics: problems reported by the Java front-end.
//!
//! The scanner, parser and binder never fail outright; they record
//! [`Diagnostic`]s and keep going. The driver decides which categories are
//! fatal for a batch.

use j2d_core::text::{LineAndColumn, LineMap, TextRange};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagnosticCategory {
    Warning,
    Error,
    Message,
}

impl fmt::Display for DiagnosticCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiagnosticCategory::Warning => write!(f, "warning"),
            DiagnosticCategory::Error => write!(f, "error"),
            DiagnosticCategory::Message => write!(f, "message"),
        }
    }
}

/// A message template. `{0}`, `{1}`, ... are replaced by arguments.
#[derive(Debug, Clone)]
pub struct DiagnosticMessage {
    pub code: u32,
    pub category: DiagnosticCategory,
    pub message: &'static str,
}

#[derive(Debug, Clone)]
pub struct Diagnostic {
    pub file: Option<String>,
    pub range: Option<TextRange>,
    /// Filled in by [`Diagnostic::locate`] once the source text is at hand.
    pub position: Option<LineAndColumn>,
    pub message_text: String,
    pub code: u32,
    pub category: DiagnosticCategory,
}

impl Diagnostic {
    pub fn new(message: &DiagnosticMessage, args: &[&str]) -> Self {
        Self {
            file: None,
            range: None,
            position: None,
            message_text: format_message(message.message, args),
            code: message.code,
            category: message.category,
        }
    }

    pub fn with_location(
        file: &str,
        range: TextRange,
        message: &DiagnosticMessage,
        args: &[&str],
    ) -> Self {
        Self {
            file: Some(file.to_string()),
            range: Some(range),
            ..Self::new(message, args)
        }
    }

    /// Resolves the range start to a line and column.
    pub fn locate(&mut self, line_map: &LineMap) {
        if let Some(range) = self.range {
            self.position = Some(line_map.position_of(range.pos));
        }
    }

    pub fn is_error(&self) -> bool {
        self.category == DiagnosticCategory::Error
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(file) = &self.file {
            write!(f, "{}", file)?;
            match (self.position, self.range) {
                (Some(position), _) => write!(f, ":{}", position)?,
                (None, Some(range)) => write!(f, "({})", range.pos)?,
                (None, None) => {}
            }
            write!(f, ": ")?;
        }
        write!(f, "{} J{}: {}", self.category, self.code, self.message_text)
    }
}

pub fn format_message(template: &str, args: &[&str]) -> String {
    let mut result = template.to_string();
    for (i, arg) in args.iter().enumerate() {
        result = result.replace(&format!("{{{}}}", i), arg);
    }
    result
}

#[derive(Debug, Clone, Default)]
pub struct DiagnosticCollection {
    diagnostics: Vec<Diagnostic>,
}

impl DiagnosticCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    pub fn extend(&mut self, diagnostics: impl IntoIterator<Item = Diagnostic>) {
        self.diagnostics.extend(diagnostics);
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(Diagnostic::is_error)
    }

    pub fn error_count(&self) -> usize {
        self.diagnostics.iter().filter(|d| d.is_error()).count()
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    /// Drops everything reported after the first `len` diagnostics.
    pub fn truncate(&mut self, len: usize) {
        self.diagnostics.truncate(len);
    }

    /// Orders by file, then by position.
    pub fn sort(&mut self) {
        self.diagnostics.sort_by(|a, b| {
            a.file.cmp(&b.file).then_with(|| {
                let a_pos = a.range.map(|r| r.pos).unwrap_or(0);
                let b_pos = b.range.map(|r| r.pos).unwrap_or(0);
                a_pos.cmp(&b_pos)
            })
        });
    }

    pub fn locate_all(&mut self, line_map: &LineMap) {
        for diagnostic in &mut self.diagnostics {
            diagnostic.locate(line_map);
        }
    }
}

// ============================================================================
// Messages
// ============================================================================

pub mod messages {
    use super::*;

    macro_rules! diag {
        ($code:expr, Error, $msg:expr) => {
            DiagnosticMessage { code: $code, category: DiagnosticCategory::Error, message: $msg }
        };
        ($code:expr, Warning, $msg:expr) => {
            DiagnosticMessage { code: $code, category: DiagnosticCategory::Warning, message: $msg }
        };
        ($code:expr, Message, $msg:expr) => {
            DiagnosticMessage { code: $code, category: DiagnosticCategory::Message, message: $msg }
        };
    }

    // ========================================================================
    // Scanner (1000-1099)
    // ========================================================================
    pub const UNTERMINATED_STRING_LITERAL: DiagnosticMessage = diag!(1002, Error, "Unterminated string literal.");
    pub const UNTERMINATED_CHARACTER_LITERAL: DiagnosticMessage = diag!(1004, Error, "Unterminated character literal.");
    pub const ASTERISK_SLASH_EXPECTED: DiagnosticMessage = diag!(1010, Error, "'*/' expected.");
    pub const INVALID_CHARACTER: DiagnosticMessage = diag!(1011, Error, "Invalid character.");
    pub const DIGIT_EXPECTED: DiagnosticMessage = diag!(1012, Error, "Digit expected.");
    pub const HEXADECIMAL_DIGIT_EXPECTED: DiagnosticMessage = diag!(1013, Error, "Hexadecimal digit expected.");
    pub const BINARY_DIGIT_EXPECTED: DiagnosticMessage = diag!(1014, Error, "Binary digit expected.");
    pub const INVALID_ESCAPE_SEQUENCE: DiagnosticMessage = diag!(1015, Error, "Invalid escape sequence.");

    // ========================================================================
    // Parser (1100-1199)
    // ========================================================================
    pub const IDENTIFIER_EXPECTED: DiagnosticMessage = diag!(1100, Error, "<identifier> expected.");
    pub const _0_EXPECTED: DiagnosticMessage = diag!(1101, Error, "'{0}' expected.");
    pub const UNEXPECTED_TOKEN_0: DiagnosticMessage = diag!(1102, Error, "Unexpected token '{0}'.");
    pub const EXPRESSION_EXPECTED: DiagnosticMessage = diag!(1103, Error, "Expression expected.");
    pub const TYPE_EXPECTED: DiagnosticMessage = diag!(1104, Error, "Type expected.");
    pub const STATEMENT_EXPECTED: DiagnosticMessage = diag!(1105, Error, "Statement expected.");
    pub const CLASS_INTERFACE_OR_ENUM_EXPECTED: DiagnosticMessage = diag!(1106, Error, "class, interface, or enum expected.");
    pub const ENUM_DECLARATIONS_ARE_NOT_SUPPORTED: DiagnosticMessage = diag!(1107, Error, "Enum declarations are not supported.");
    pub const ANNOTATION_TYPES_ARE_NOT_SUPPORTED: DiagnosticMessage = diag!(1108, Error, "Annotation type declarations are not supported.");
    pub const NOT_A_STATEMENT: DiagnosticMessage = diag!(1109, Error, "Not a statement.");
    pub const ORPHANED_0: DiagnosticMessage = diag!(1110, Error, "Orphaned '{0}'.");
    pub const MAXIMUM_NESTING_DEPTH_EXCEEDED: DiagnosticMessage = diag!(1111, Error, "Maximum nesting depth exceeded.");
    pub const VARARGS_MUST_BE_LAST: DiagnosticMessage = diag!(1112, Error, "A varargs parameter must be the last parameter.");

    // ========================================================================
    // Binder (2000-2099)
    // ========================================================================
    pub const DUPLICATE_CLASS_0: DiagnosticMessage = diag!(2000, Error, "Duplicate class '{0}'.");
    pub const CANNOT_RESOLVE_SYMBOL_0: DiagnosticMessage = diag!(2001, Message, "Cannot resolve symbol '{0}'; it will carry no binding.");
    pub const AMBIGUOUS_INVOCATION_OF_0: DiagnosticMessage = diag!(2002, Warning, "Call to '{0}' matches several overloads; it will carry no binding.");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_replaces_placeholders() {
        assert_eq!(format_message("'{0}' expected.", &[";"]), "';' expected.");
        assert_eq!(format_message("{0} and {1}", &["a", "b"]), "a and b");
    }

    #[test]
    fn display_with_position() {
        let mut diag = Diagnostic::with_location(
            "Main.java",
            TextRange::new(10, 11),
            &messages::_0_EXPECTED,
            &[";"],
        );
        assert_eq!(diag.to_string(), "Main.java(10): error J1101: ';' expected.");
        diag.locate(&LineMap::new("class A {\n x }"));
        assert_eq!(diag.to_string(), "Main.java:2:1: error J1101: ';' expected.");
    }

    #[test]
    fn collection_counts_only_errors() {
        let mut collection = DiagnosticCollection::new();
        collection.add(Diagnostic::new(&messages::CANNOT_RESOLVE_SYMBOL_0, &["x"]));
        assert!(!collection.has_errors());
        collection.add(Diagnostic::new(&messages::EXPRESSION_EXPECTED, &[]));
        assert!(collection.has_errors());
        assert_eq!(collection.error_count(), 1);
        assert_eq!(collection.len(), 2);
    }

    #[test]
    fn sort_by_file_then_position() {
        let mut collection = DiagnosticCollection::new();
        collection.add(Diagnostic::with_location("B.java", TextRange::new(1, 2), &messages::STATEMENT_EXPECTED, &[]));
        collection.add(Diagnostic::with_location("A.java", TextRange::new(9, 9), &messages::TYPE_EXPECTED, &[]));
        collection.add(Diagnostic::with_location("A.java", TextRange::new(3, 4), &messages::TYPE_EXPECTED, &[]));
        collection.sort();
        let order: Vec<_> = collection
            .diagnostics()
            .iter()
            .map(|d| (d.file.clone().unwrap_or_default(), d.range.map(|r| r.pos)))
            .collect();
        assert_eq!(
            order,
            vec![
                ("A.java".to_string(), Some(3)),
                ("A.java".to_string(), Some(9)),
                ("B.java".to_string(), Some(1)),
            ]
        );
    }
}
