//! Source location tracking
//!
//! Positions and spans attached to tokens and errors, plus a `SourceMap`
//! for rendering an error underneath the offending source line.
use serde::{Deserialize, Serialize};
use std::fmt;

/// A position in source text with line, column, and byte offset.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
pub struct Position {
    /// Byte offset from start of input (0-based)
    pub offset: usize,
    /// Line number (1-based)
    pub line: u32,
    /// Column number (1-based, counted in characters)
    pub column: u32,
}

impl Position {
    pub fn new(offset: usize, line: u32, column: u32) -> Self {
        Self {
            offset,
            line,
            column,
        }
    }

    /// Offset 0, line 1, column 1
    pub fn start() -> Self {
        Self::new(0, 1, 1)
    }

    /// Advance position past one character
    pub fn advance(self, ch: char) -> Self {
        if ch == '\n' {
            Self::new(self.offset + 1, self.line + 1, 1)
        } else {
            Self::new(self.offset + ch.len_utf8(), self.line, self.column + 1)
        }
    }

    /// Advance position past every character of `s`
    pub fn advance_str(self, s: &str) -> Self {
        s.chars().fold(self, |pos, ch| pos.advance(ch))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// A span of source text from start (inclusive) to end (exclusive).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

impl Span {
    pub fn new(start: Position, end: Position) -> Self {
        debug_assert!(
            start.offset <= end.offset,
            "Span start must not be after end"
        );
        Self { start, end }
    }

    /// Zero-width span at `pos`
    pub fn empty_at(pos: Position) -> Self {
        Self {
            start: pos,
            end: pos,
        }
    }

    /// Span covering `text` when it begins at `start`
    pub fn covering(start: Position, text: &str) -> Self {
        Self::new(start, start.advance_str(text))
    }

    /// Byte length
    pub fn len(&self) -> usize {
        self.end.offset - self.start.offset
    }

    pub fn is_empty(&self) -> bool {
        self.start.offset == self.end.offset
    }

    /// Source text covered by this span; `None` if it falls outside `input`
    pub fn slice<'a>(&self, input: &'a str) -> Option<&'a str> {
        input.get(self.start.offset..self.end.offset)
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.start.line == self.end.line {
            write!(
                f,
                "{}:{}-{}",
                self.start.line, self.start.column, self.end.column
            )
        } else {
            write!(f, "{}-{}", self.start, self.end)
        }
    }
}

/// Line index over a source buffer
#[derive(Debug, Clone)]
pub struct SourceMap {
    pub source: String,
    line_starts: Vec<usize>,
}

impl SourceMap {
    pub fn new(source: impl Into<String>) -> Self {
        let source = source.into();
        let mut line_starts = vec![0];
        line_starts.extend(
            source
                .char_indices()
                .filter(|(_, ch)| *ch == '\n')
                .map(|(offset, _)| offset + 1),
        );
        Self {
            source,
            line_starts,
        }
    }

    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Text of a 1-based line, without its newline
    pub fn get_line(&self, line_num: u32) -> Option<&str> {
        let idx = (line_num as usize).checked_sub(1)?;
        let start = *self.line_starts.get(idx)?;
        let end = self
            .line_starts
            .get(idx + 1)
            .map(|next| next - 1)
            .unwrap_or(self.source.len());
        self.source.get(start..end)
    }

    /// Render `message` with the source line and a caret underline
    pub fn format_error(&self, span: &Span, message: &str) -> String {
        let mut result = format!(
            "error: {}\n  --> {}:{}\n",
            message, span.start.line, span.start.column
        );

        if let Some(line) = self.get_line(span.start.line) {
            let line_num = span.start.line.to_string();
            let gutter = " ".repeat(line_num.len());
            let width = if span.start.line == span.end.line {
                span.end.column.saturating_sub(span.start.column) as usize
            } else {
                line.chars().count() + 1 - span.start.column as usize
            };

            result.push_str(&format!("{} |\n", gutter));
            result.push_str(&format!("{} | {}\n", line_num, line));
            result.push_str(&format!(
                "{} | {}{}\n",
                gutter,
                " ".repeat(span.start.column.saturating_sub(1) as usize),
                "^".repeat(width.max(1))
            ));
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_tracks_lines() {
        let pos = Position::start().advance_str("ab\nc");
        assert_eq!(pos, Position::new(4, 2, 2));
    }

    #[test]
    fn test_span_covering_and_slice() {
        let source = "let x = 45";
        let start = Position::start().advance_str("let x = ");
        let span = Span::covering(start, "45");
        assert_eq!(span.len(), 2);
        assert_eq!(span.slice(source), Some("45"));
        assert_eq!(span.to_string(), "1:9-11");
    }

    #[test]
    fn test_source_map_lines() {
        let map = SourceMap::new("let x = 1\nx + 2");
        assert_eq!(map.line_count(), 2);
        assert_eq!(map.get_line(1), Some("let x = 1"));
        assert_eq!(map.get_line(2), Some("x + 2"));
        assert_eq!(map.get_line(0), None);
        assert_eq!(map.get_line(3), None);
    }

    #[test]
    fn test_format_error_underlines_span() {
        let map = SourceMap::new("x = 3.14");
        let start = Position::start().advance_str("x = ");
        let rendered = map.format_error(&Span::covering(start, "3.14"), "unknown token");
        assert!(rendered.contains("--> 1:5"));
        assert!(rendered.contains("1 | x = 3.14"));
        assert!(rendered.ends_with(" |     ^^^^\n"));
    }
}
