//! Source positions.
//!
//! Offsets count `char`s, matching the scanner, which walks a `Vec<char>`.

use std::fmt;

pub type TextPos = u32;

/// Half-open range `[pos, end)` of a node or token.
#[derive(Copy, Clone, Default, Eq, PartialEq, Hash)]
pub struct TextRange {
    pub pos: TextPos,
    pub end: TextPos,
}

impl TextRange {
    #[inline]
    pub fn new(pos: TextPos, end: TextPos) -> Self {
        Self { pos, end }
    }

    #[inline]
    pub fn len(&self) -> TextPos {
        self.end.saturating_sub(self.pos)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pos >= self.end
    }

    /// Smallest range covering both.
    pub fn cover(&self, other: TextRange) -> TextRange {
        TextRange::new(self.pos.min(other.pos), self.end.max(other.end))
    }
}

impl fmt::Debug for TextRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.pos, self.end)
    }
}

/// One-based line and column, as shown to users.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct LineAndColumn {
    pub line: u32,
    pub column: u32,
}

impl fmt::Display for LineAndColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Maps offsets back to lines for error reporting.
#[derive(Debug, Clone)]
pub struct LineMap {
    line_starts: Vec<TextPos>,
}

impl LineMap {
    pub fn new(text: &str) -> Self {
        let mut line_starts = vec![0];
        for (i, ch) in text.chars().enumerate() {
            if ch == '\n' {
                line_starts.push(i as TextPos + 1);
            }
        }
        Self { line_starts }
    }

    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    pub fn position_of(&self, pos: TextPos) -> LineAndColumn {
        let line = match self.line_starts.binary_search(&pos) {
            Ok(line) => line,
            Err(next) => next - 1,
        };
        LineAndColumn {
            line: line as u32 + 1,
            column: pos - self.line_starts[line] + 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positions_are_one_based() {
        let map = LineMap::new("class A {\n  int x;\n}");
        assert_eq!(map.line_count(), 3);
        assert_eq!(map.position_of(0), LineAndColumn { line: 1, column: 1 });
        assert_eq!(map.position_of(12), LineAndColumn { line: 2, column: 3 });
        assert_eq!(map.position_of(10).to_string(), "2:1");
    }

    #[test]
    fn offsets_count_chars() {
        let map = LineMap::new("// é\nx");
        assert_eq!(map.position_of(5), LineAndColumn { line: 2, column: 1 });
    }

    #[test]
    fn cover_spans_both() {
        let r = TextRange::new(4, 6).cover(TextRange::new(1, 5));
        assert_eq!(r, TextRange::new(1, 6));
        assert_eq!(r.len(), 5);
        assert!(TextRange::new(3, 3).is_empty());
    }
}
