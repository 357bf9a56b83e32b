//! The Java scanner.
//!
//! Works over a `Vec<char>` so every offset it reports is a char index,
//! which is what [`j2d_core::LineMap`] expects.

use crate::char_codes::*;
use crate::token::{TokenFlags, TokenInfo};
use j2d_ast::SyntaxKind;
use j2d_core::text::TextRange;
use j2d_diagnostics::{messages, Diagnostic, DiagnosticCollection, DiagnosticMessage};

/// Saved scanner state for speculative parsing.
#[derive(Debug, Clone)]
pub struct ScannerState {
    pos: usize,
    token_start: usize,
    token: SyntaxKind,
    token_value: String,
    token_flags: TokenFlags,
    diagnostics: usize,
}

pub struct Scanner {
    text: Vec<char>,
    pos: usize,
    token_start: usize,
    token: SyntaxKind,
    token_value: String,
    token_flags: TokenFlags,
    diagnostics: DiagnosticCollection,
}

impl Scanner {
    pub fn new(text: &str) -> Self {
        Self {
            text: text.chars().collect(),
            pos: 0,
            token_start: 0,
            token: SyntaxKind::Unknown,
            token_value: String::new(),
            token_flags: TokenFlags::NONE,
            diagnostics: DiagnosticCollection::new(),
        }
    }

    /// Runs `f` and rewinds to the current token afterwards.
    pub fn look_ahead<T>(&mut self, f: impl FnOnce(&mut Self) -> T) -> T {
        let state = self.save_state();
        let result = f(self);
        self.restore_state(state);
        result
    }

    #[inline]
    pub fn token(&self) -> SyntaxKind {
        self.token
    }

    #[inline]
    pub fn token_value(&self) -> &str {
        &self.token_value
    }

    #[inline]
    pub fn token_start(&self) -> usize {
        self.token_start
    }

    #[inline]
    pub fn token_end(&self) -> usize {
        self.pos
    }

    #[inline]
    pub fn token_flags(&self) -> TokenFlags {
        self.token_flags
    }

    pub fn token_info(&self) -> TokenInfo {
        TokenInfo {
            kind: self.token,
            pos: self.token_start as u32,
            end: self.pos as u32,
            text: self.token_value.clone(),
            flags: self.token_flags,
        }
    }

    pub fn take_diagnostics(&mut self) -> DiagnosticCollection {
        std::mem::take(&mut self.diagnostics)
    }

    pub fn save_state(&self) -> ScannerState {
        ScannerState {
            pos: self.pos,
            token_start: self.token_start,
            token: self.token,
            token_value: self.token_value.clone(),
            token_flags: self.token_flags,
            diagnostics: self.diagnostics.len(),
        }
    }

    /// Rewinds to a saved token, discarding diagnostics reported since.
    pub fn restore_state(&mut self, state: ScannerState) {
        self.pos = state.pos;
        self.token_start = state.token_start;
        self.token = state.token;
        self.token_value = state.token_value;
        self.token_flags = state.token_flags;
        self.diagnostics.truncate(state.diagnostics);
    }

    // ========================================================================
    // Core scanning
    // ========================================================================

    #[inline]
    fn current_char(&self) -> Option<char> {
        self.text.get(self.pos).copied()
    }

    #[inline]
    fn char_at(&self, offset: usize) -> Option<char> {
        self.text.get(self.pos + offset).copied()
    }

    #[inline]
    fn is_eof(&self) -> bool {
        self.pos >= self.text.len()
    }

    fn error(&mut self, message: &DiagnosticMessage) {
        let mut diagnostic = Diagnostic::new(message, &[]);
        diagnostic.range = Some(TextRange::new(self.token_start as u32, self.pos as u32));
        self.diagnostics.add(diagnostic);
    }

    fn skip_trivia(&mut self) {
        while let Some(ch) = self.current_char() {
            if is_white_space(ch) {
                self.pos += 1;
            } else if ch == '/' && self.char_at(1) == Some('/') {
                self.pos += 2;
                while self.current_char().map_or(false, |c| !is_line_break(c)) {
                    self.pos += 1;
                }
            } else if ch == '/' && self.char_at(1) == Some('*') {
                self.token_start = self.pos;
                self.pos += 2;
                loop {
                    if self.is_eof() {
                        self.error(&messages::ASTERISK_SLASH_EXPECTED);
                        return;
                    }
                    if self.text[self.pos] == '*' && self.char_at(1) == Some('/') {
                        self.pos += 2;
                        break;
                    }
                    self.pos += 1;
                }
            } else {
                return;
            }
        }
    }

    /// Advances to the next token and returns its kind.
    pub fn scan(&mut self) -> SyntaxKind {
        self.token_flags = TokenFlags::NONE;
        self.token_value.clear();
        self.skip_trivia();
        self.token_start = self.pos;

        let Some(ch) = self.current_char() else {
            self.token = SyntaxKind::EndOfFileToken;
            return self.token;
        };

        self.token = match ch {
            '(' => self.single(SyntaxKind::OpenParenToken),
            ')' => self.single(SyntaxKind::CloseParenToken),
            '{' => self.single(SyntaxKind::OpenBraceToken),
            '}' => self.single(SyntaxKind::CloseBraceToken),
            '[' => self.single(SyntaxKind::OpenBracketToken),
            ']' => self.single(SyntaxKind::CloseBracketToken),
            ';' => self.single(SyntaxKind::SemicolonToken),
            ',' => self.single(SyntaxKind::CommaToken),
            '@' => self.single(SyntaxKind::AtToken),
            '?' => self.single(SyntaxKind::QuestionToken),
            '~' => self.single(SyntaxKind::TildeToken),
            // `>` is always a single token; see `rescan_greater_than_token`.
            '>' => self.single(SyntaxKind::GreaterThanToken),
            ':' => self.scan_colon(),
            '.' => self.scan_dot(),
            '<' => self.scan_less_than(),
            '=' => self.with_equals(SyntaxKind::EqualsToken, SyntaxKind::EqualsEqualsToken),
            '!' => self.with_equals(SyntaxKind::ExclamationToken, SyntaxKind::ExclamationEqualsToken),
            '*' => self.with_equals(SyntaxKind::AsteriskToken, SyntaxKind::AsteriskEqualsToken),
            '/' => self.with_equals(SyntaxKind::SlashToken, SyntaxKind::SlashEqualsToken),
            '%' => self.with_equals(SyntaxKind::PercentToken, SyntaxKind::PercentEqualsToken),
            '^' => self.with_equals(SyntaxKind::CaretToken, SyntaxKind::CaretEqualsToken),
            '+' => self.scan_plus(),
            '-' => self.scan_minus(),
            '&' => self.scan_doubled('&', SyntaxKind::AmpersandToken, SyntaxKind::AmpersandAmpersandToken, SyntaxKind::AmpersandEqualsToken),
            '|' => self.scan_doubled('|', SyntaxKind::BarToken, SyntaxKind::BarBarToken, SyntaxKind::BarEqualsToken),
            '"' => self.scan_quoted('"'),
            '\'' => self.scan_quoted('\''),
            '0'..='9' => self.scan_number(),
            _ if is_identifier_start(ch) => self.scan_identifier(),
            _ => {
                self.pos += 1;
                self.error(&messages::INVALID_CHARACTER);
                SyntaxKind::Unknown
            }
        };

        if self.token_value.is_empty() {
            self.token_value = self.chars_to_string(self.token_start, self.pos);
        }
        self.token
    }

    // ========================================================================
    // Punctuation
    // ========================================================================

    #[inline]
    fn single(&mut self, kind: SyntaxKind) -> SyntaxKind {
        self.pos += 1;
        kind
    }

    fn with_equals(&mut self, plain: SyntaxKind, with_equals: SyntaxKind) -> SyntaxKind {
        if self.char_at(1) == Some('=') {
            self.pos += 2;
            with_equals
        } else {
            self.pos += 1;
            plain
        }
    }

    /// `&`, `&&`, `&=` and the `|` family.
    fn scan_doubled(
        &mut self,
        ch: char,
        single: SyntaxKind,
        doubled: SyntaxKind,
        assign: SyntaxKind,
    ) -> SyntaxKind {
        match self.char_at(1) {
            Some(next) if next == ch => {
                self.pos += 2;
                doubled
            }
            Some('=') => {
                self.pos += 2;
                assign
            }
            _ => self.single(single),
        }
    }

    fn scan_colon(&mut self) -> SyntaxKind {
        if self.char_at(1) == Some(':') {
            self.pos += 2;
            SyntaxKind::ColonColonToken
        } else {
            self.single(SyntaxKind::ColonToken)
        }
    }

    fn scan_dot(&mut self) -> SyntaxKind {
        if self.char_at(1) == Some('.') && self.char_at(2) == Some('.') {
            self.pos += 3;
            SyntaxKind::DotDotDotToken
        } else if self.char_at(1).map_or(false, is_digit) {
            self.scan_number()
        } else {
            self.single(SyntaxKind::DotToken)
        }
    }

    fn scan_less_than(&mut self) -> SyntaxKind {
        match (self.char_at(1), self.char_at(2)) {
            (Some('<'), Some('=')) => {
                self.pos += 3;
                SyntaxKind::LessThanLessThanEqualsToken
            }
            (Some('<'), _) => {
                self.pos += 2;
                SyntaxKind::LessThanLessThanToken
            }
            (Some('='), _) => {
                self.pos += 2;
                SyntaxKind::LessThanEqualsToken
            }
            _ => self.single(SyntaxKind::LessThanToken),
        }
    }

    fn scan_plus(&mut self) -> SyntaxKind {
        match self.char_at(1) {
            Some('+') => {
                self.pos += 2;
                SyntaxKind::PlusPlusToken
            }
            Some('=') => {
                self.pos += 2;
                SyntaxKind::PlusEqualsToken
            }
            _ => self.single(SyntaxKind::PlusToken),
        }
    }

    fn scan_minus(&mut self) -> SyntaxKind {
        match self.char_at(1) {
            Some('-') => {
                self.pos += 2;
                SyntaxKind::MinusMinusToken
            }
            Some('=') => {
                self.pos += 2;
                SyntaxKind::MinusEqualsToken
            }
            Some('>') => {
                self.pos += 2;
                SyntaxKind::MinusGreaterThanToken
            }
            _ => self.single(SyntaxKind::MinusToken),
        }
    }

    /// Called by the parser in expression position, where a `>` followed by
    /// more `>`/`=` characters is a shift or comparison operator rather than
    /// the end of a type argument list.
    pub fn rescan_greater_than_token(&mut self) -> SyntaxKind {
        if self.token != SyntaxKind::GreaterThanToken {
            return self.token;
        }
        let (kind, extra) = match (self.char_at(0), self.char_at(1), self.char_at(2)) {
            (Some('>'), Some('>'), Some('=')) => (SyntaxKind::GreaterThanGreaterThanGreaterThanEqualsToken, 3),
            (Some('>'), Some('>'), _) => (SyntaxKind::GreaterThanGreaterThanGreaterThanToken, 2),
            (Some('>'), Some('='), _) => (SyntaxKind::GreaterThanGreaterThanEqualsToken, 2),
            (Some('>'), _, _) => (SyntaxKind::GreaterThanGreaterThanToken, 1),
            (Some('='), _, _) => (SyntaxKind::GreaterThanEqualsToken, 1),
            _ => return self.token,
        };
        self.pos += extra;
        self.token = kind;
        self.token_value = self.chars_to_string(self.token_start, self.pos);
        self.token
    }

    // ========================================================================
    // Literals
    // ========================================================================

    /// String and character literals. The token value keeps the quotes and
    /// escape sequences exactly as written.
    fn scan_quoted(&mut self, quote: char) -> SyntaxKind {
        let (kind, unterminated) = if quote == '"' {
            (SyntaxKind::StringLiteral, &messages::UNTERMINATED_STRING_LITERAL)
        } else {
            (SyntaxKind::CharacterLiteral, &messages::UNTERMINATED_CHARACTER_LITERAL)
        };
        self.pos += 1;
        loop {
            match self.current_char() {
                None => {
                    self.token_flags |= TokenFlags::UNTERMINATED;
                    self.error(unterminated);
                    break;
                }
                Some(ch) if is_line_break(ch) => {
                    self.token_flags |= TokenFlags::UNTERMINATED;
                    self.error(unterminated);
                    break;
                }
                Some(ch) if ch == quote => {
                    self.pos += 1;
                    break;
                }
                Some('\\') => {
                    self.pos += 1;
                    self.scan_escape();
                }
                Some(_) => self.pos += 1,
            }
        }
        self.token_value = self.chars_to_string(self.token_start, self.pos);
        kind
    }

    fn scan_escape(&mut self) {
        match self.current_char() {
            Some('b' | 't' | 'n' | 'f' | 'r' | 's' | '"' | '\'' | '\\') => self.pos += 1,
            Some('0'..='7') => {
                while self.current_char().map_or(false, |c| ('0'..='7').contains(&c)) {
                    self.pos += 1;
                }
            }
            Some('u') => {
                while self.current_char() == Some('u') {
                    self.pos += 1;
                }
                for _ in 0..4 {
                    if self.current_char().map_or(false, is_hex_digit) {
                        self.pos += 1;
                    } else {
                        self.error(&messages::INVALID_ESCAPE_SEQUENCE);
                        return;
                    }
                }
            }
            _ => self.error(&messages::INVALID_ESCAPE_SEQUENCE),
        }
    }

    /// Numbers keep their full spelling, including an `L`, `F` or `D`
    /// suffix; the translator decides what the suffix means.
    fn scan_number(&mut self) -> SyntaxKind {
        let start = self.pos;
        if self.current_char() == Some('0') {
            match self.char_at(1) {
                Some('x' | 'X') => {
                    self.pos += 2;
                    self.token_flags |= TokenFlags::HEX_SPECIFIER;
                    if !self.scan_digits_with(is_hex_digit) {
                        self.error(&messages::HEXADECIMAL_DIGIT_EXPECTED);
                    }
                    self.scan_integer_suffix();
                    self.token_value = self.chars_to_string(start, self.pos);
                    return SyntaxKind::NumericLiteral;
                }
                Some('b' | 'B') => {
                    self.pos += 2;
                    self.token_flags |= TokenFlags::BINARY_SPECIFIER;
                    if !self.scan_digits_with(is_binary_digit) {
                        self.error(&messages::BINARY_DIGIT_EXPECTED);
                    }
                    self.scan_integer_suffix();
                    self.token_value = self.chars_to_string(start, self.pos);
                    return SyntaxKind::NumericLiteral;
                }
                Some('0'..='9' | '_') => self.token_flags |= TokenFlags::OCTAL,
                _ => {}
            }
        }

        self.scan_digits_with(is_digit);
        if self.current_char() == Some('.') && self.char_at(1).map_or(true, |c| !is_identifier_start(c) || matches!(c, 'e' | 'E' | 'f' | 'F' | 'd' | 'D')) {
            self.pos += 1;
            self.token_flags |= TokenFlags::DECIMAL_POINT;
            self.token_flags.remove(TokenFlags::OCTAL);
            self.scan_digits_with(is_digit);
        }
        if let Some('e' | 'E') = self.current_char() {
            self.pos += 1;
            self.token_flags |= TokenFlags::SCIENTIFIC;
            self.token_flags.remove(TokenFlags::OCTAL);
            if let Some('+' | '-') = self.current_char() {
                self.pos += 1;
            }
            if !self.scan_digits_with(is_digit) {
                self.error(&messages::DIGIT_EXPECTED);
            }
        }
        match self.current_char() {
            Some('f' | 'F' | 'd' | 'D') => {
                self.pos += 1;
                self.token_flags |= TokenFlags::FLOATING_SUFFIX;
                self.token_flags.remove(TokenFlags::OCTAL);
            }
            _ => self.scan_integer_suffix(),
        }
        self.token_value = self.chars_to_string(start, self.pos);
        SyntaxKind::NumericLiteral
    }

    fn scan_integer_suffix(&mut self) {
        if let Some('l' | 'L') = self.current_char() {
            self.pos += 1;
            self.token_flags |= TokenFlags::LONG_SUFFIX;
        }
    }

    /// Returns whether at least one digit was consumed.
    fn scan_digits_with(&mut self, accept: fn(char) -> bool) -> bool {
        let start = self.pos;
        while let Some(ch) = self.current_char() {
            if ch == '_' {
                self.token_flags |= TokenFlags::CONTAINS_SEPARATOR;
            } else if !accept(ch) {
                break;
            }
            self.pos += 1;
        }
        self.pos > start
    }

    fn scan_identifier(&mut self) -> SyntaxKind {
        let start = self.pos;
        self.pos += 1;
        while self.current_char().map_or(false, is_identifier_part) {
            self.pos += 1;
        }
        self.token_value = self.chars_to_string(start, self.pos);
        SyntaxKind::from_keyword(&self.token_value).unwrap_or(SyntaxKind::Identifier)
    }

    fn chars_to_string(&self, start: usize, end: usize) -> String {
        self.text[start..end].iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_separators() {
        let mut scanner = Scanner::new("( ) { } [ ] ; , . ... @ :: ->");
        let expected = [
            SyntaxKind::OpenParenToken,
            SyntaxKind::CloseParenToken,
            SyntaxKind::OpenBraceToken,
            SyntaxKind::CloseBraceToken,
            SyntaxKind::OpenBracketToken,
            SyntaxKind::CloseBracketToken,
            SyntaxKind::SemicolonToken,
            SyntaxKind::CommaToken,
            SyntaxKind::DotToken,
            SyntaxKind::DotDotDotToken,
            SyntaxKind::AtToken,
            SyntaxKind::ColonColonToken,
            SyntaxKind::MinusGreaterThanToken,
            SyntaxKind::EndOfFileToken,
        ];
        for kind in expected {
            assert_eq!(scanner.scan(), kind);
        }
    }

    #[test]
    fn test_greater_than_is_single_until_rescanned() {
        let mut scanner = Scanner::new(">>>= x");
        assert_eq!(scanner.scan(), SyntaxKind::GreaterThanToken);
        assert_eq!(
            scanner.rescan_greater_than_token(),
            SyntaxKind::GreaterThanGreaterThanGreaterThanEqualsToken
        );
        assert_eq!(scanner.token_value(), ">>>=");
        assert_eq!(scanner.scan(), SyntaxKind::Identifier);
    }

    #[test]
    fn test_number_keeps_suffix() {
        let mut scanner = Scanner::new("10L 0xBEEFL 1.5f 2d 1e10");
        assert_eq!(scanner.scan(), SyntaxKind::NumericLiteral);
        assert_eq!(scanner.token_value(), "10L");
        assert!(scanner.token_flags().contains(TokenFlags::LONG_SUFFIX));
        scanner.scan();
        assert_eq!(scanner.token_value(), "0xBEEFL");
        assert!(scanner.token_flags().contains(TokenFlags::HEX_SPECIFIER | TokenFlags::LONG_SUFFIX));
        scanner.scan();
        assert_eq!(scanner.token_value(), "1.5f");
        assert!(scanner.token_flags().contains(TokenFlags::DECIMAL_POINT | TokenFlags::FLOATING_SUFFIX));
        scanner.scan();
        assert_eq!(scanner.token_value(), "2d");
        scanner.scan();
        assert_eq!(scanner.token_value(), "1e10");
        assert!(scanner.token_flags().contains(TokenFlags::SCIENTIFIC));
    }

    #[test]
    fn test_hex_f_is_a_digit() {
        let mut scanner = Scanner::new("0x1F");
        scanner.scan();
        assert_eq!(scanner.token_value(), "0x1F");
        assert!(!scanner.token_flags().contains(TokenFlags::FLOATING_SUFFIX));
    }

    #[test]
    fn test_member_access_on_integer_is_not_a_decimal_point() {
        let mut scanner = Scanner::new("1.toString");
        assert_eq!(scanner.scan(), SyntaxKind::NumericLiteral);
        assert_eq!(scanner.token_value(), "1");
        assert_eq!(scanner.scan(), SyntaxKind::DotToken);
    }

    #[test]
    fn test_look_ahead_restores() {
        let mut scanner = Scanner::new("int x;");
        scanner.scan();
        let next = scanner.look_ahead(|s| s.scan());
        assert_eq!(next, SyntaxKind::Identifier);
        assert_eq!(scanner.token(), SyntaxKind::IntKeyword);
    }

    #[test]
    fn test_invalid_character_reports() {
        let mut scanner = Scanner::new("#");
        assert_eq!(scanner.scan(), SyntaxKind::Unknown);
        let diagnostics = scanner.take_diagnostics();
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics.diagnostics()[0].range, Some(TextRange::new(0, 1)));
    }
}
