//! Literal kinds, their match patterns, and the locator.
//!
//! Kinds are tried in a fixed priority order because the patterns overlap: a
//! six-digit color contains a three-digit one, and the plain number pattern
//! would happily match the digits inside either.

use std::sync::OnceLock;

use regex::Regex;
use serde::Serialize;

/// The literal kinds a scrub can operate on, in match priority order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LiteralKind {
    /// `#rrggbb`
    Color6,
    /// `#rgb`
    Color3,
    /// `-1`, `12`, `3.5`, `.5`
    PlainNumber,
}

impl LiteralKind {
    /// All kinds in the order the locator tries them
    pub const PRIORITY: [LiteralKind; 3] = [
        LiteralKind::Color6,
        LiteralKind::Color3,
        LiteralKind::PlainNumber,
    ];

    /// Compiled pattern for this kind
    pub fn pattern(self) -> &'static Regex {
        static COLOR6: OnceLock<Regex> = OnceLock::new();
        static COLOR3: OnceLock<Regex> = OnceLock::new();
        static NUMBER: OnceLock<Regex> = OnceLock::new();

        // Patterns are constants; a failure here is a programming error.
        let (cell, source) = match self {
            LiteralKind::Color6 => (&COLOR6, r"(?i)#[0-9a-f]{6}"),
            LiteralKind::Color3 => (&COLOR3, r"(?i)#[0-9a-f]{3}"),
            // A leading '-' is taken even when it is really a subtraction ("1-5").
            LiteralKind::PlainNumber => (&NUMBER, r"-?[0-9]*\.?[0-9]+"),
        };
        cell.get_or_init(|| Regex::new(source).expect("literal pattern compiles"))
    }
}

/// A run of text recognized as a literal, in char columns of one line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LiteralSpan {
    pub start: usize,
    pub end: usize,
    pub text: String,
}

impl LiteralSpan {
    pub fn new(start: usize, text: impl Into<String>) -> Self {
        let text = text.into();
        let end = start + text.chars().count();
        Self { start, end, text }
    }

    /// The span the literal occupies after being rewritten to `text`
    pub fn with_text(&self, text: &str) -> Self {
        Self::new(self.start, text)
    }

    /// Whether `column` lies inside the span or touches either edge
    pub fn touches(&self, column: usize) -> bool {
        self.start <= column && column <= self.end
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Find the first match of one kind whose span touches `column`.
pub fn find_near(kind: LiteralKind, line: &str, column: usize) -> Option<LiteralSpan> {
    let goal = byte_offset(line, column);
    kind.pattern()
        .find_iter(line)
        .find(|m| m.start() <= goal && goal <= m.end())
        .map(|m| LiteralSpan::new(line[..m.start()].chars().count(), m.as_str()))
}

/// Locate the literal touching `column`, trying kinds in priority order.
pub fn locate(line: &str, column: usize) -> Option<(LiteralKind, LiteralSpan)> {
    LiteralKind::PRIORITY
        .into_iter()
        .find_map(|kind| find_near(kind, line, column).map(|span| (kind, span)))
}

/// Char column to byte offset; columns past the end clamp to the line length
/// the way an editor clamps a cursor.
fn byte_offset(line: &str, column: usize) -> usize {
    line.char_indices()
        .nth(column)
        .map(|(i, _)| i)
        .unwrap_or(line.len())
}
