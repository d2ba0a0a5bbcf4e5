//! Position and selection types shared by the engine and the host.

/// A position in a document (line and column, both 0-indexed, column in chars).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub const fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }

    pub const fn zero() -> Self {
        Self { line: 0, column: 0 }
    }
}

/// A text selection with anchor (start point) and head (cursor position).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Selection {
    /// Where the selection started (fixed point)
    pub anchor: Position,
    /// Where the cursor is (moving point)
    pub head: Position,
}

impl Selection {
    pub fn new(anchor: Position, head: Position) -> Self {
        Self { anchor, head }
    }

    /// Create a collapsed selection (cursor with no selection)
    pub fn collapsed(pos: Position) -> Self {
        Self {
            anchor: pos,
            head: pos,
        }
    }

    /// Selection covering `start..end` columns of a single line, head at the end
    pub fn on_line(line: usize, start: usize, end: usize) -> Self {
        Self::new(Position::new(line, start), Position::new(line, end))
    }

    /// Check if selection is empty (anchor == head)
    pub fn is_empty(&self) -> bool {
        self.anchor == self.head
    }

    /// Get the start position (minimum of anchor and head)
    pub fn start(&self) -> Position {
        self.anchor.min(self.head)
    }

    /// Get the end position (maximum of anchor and head)
    pub fn end(&self) -> Position {
        self.anchor.max(self.head)
    }

    /// The cursor position of this selection
    pub fn cursor(&self) -> Position {
        self.head
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_ordering() {
        let a = Position::new(0, 5);
        let b = Position::new(1, 0);
        let c = Position::new(1, 3);

        assert!(a < b);
        assert!(b < c);
        assert!(a < c);
    }

    #[test]
    fn test_selection_on_line() {
        let sel = Selection::on_line(3, 4, 9);
        assert_eq!(sel.start(), Position::new(3, 4));
        assert_eq!(sel.end(), Position::new(3, 9));
        assert_eq!(sel.cursor(), Position::new(3, 9));
        assert!(!sel.is_empty());
    }

    #[test]
    fn test_selection_start_end_reversed() {
        let backward = Selection::new(Position::new(0, 5), Position::new(0, 0));
        assert_eq!(backward.start(), Position::new(0, 0));
        assert_eq!(backward.end(), Position::new(0, 5));
    }

    #[test]
    fn test_selection_collapsed() {
        let sel = Selection::collapsed(Position::new(1, 5));
        assert!(sel.is_empty());
        assert_eq!(sel.anchor, sel.head);
    }
}
