//! Document model - a rope-backed text buffer implementing the scrub host interface

use ropey::Rope;
use std::borrow::Cow;
use std::ops::Range;
use std::path::{Path, PathBuf};

use super::history::{EditHistory, EditOperation};
use super::position::{Position, Selection};
use super::{DocumentId, GroupTag};
use crate::scrub::EditHost;

/// Document state - the text buffer, its selection, and undo history
#[derive(Debug, Clone)]
pub struct Document {
    /// Identity used to tell nudge sessions on different documents apart
    pub id: DocumentId,
    /// The text buffer
    pub buffer: Rope,
    /// Path to the file on disk (None for in-memory documents)
    pub file_path: Option<PathBuf>,
    /// Whether the buffer has unsaved changes
    pub is_modified: bool,
    /// Current selection; the head is the cursor
    pub selection: Selection,
    /// Grouped undo/redo history
    pub history: EditHistory,
    /// Buffer as last loaded or saved; undo back to it clears `is_modified`
    saved_buffer: Rope,
}

impl Document {
    /// Create a document with initial text
    pub fn with_text(id: DocumentId, text: &str) -> Self {
        let buffer = Rope::from(text);
        Self {
            id,
            saved_buffer: buffer.clone(),
            buffer,
            file_path: None,
            is_modified: false,
            selection: Selection::default(),
            history: EditHistory::new(),
        }
    }

    /// Load a document from a file path
    pub fn from_file(id: DocumentId, path: PathBuf) -> Result<Self, std::io::Error> {
        let content = std::fs::read_to_string(&path)?;
        Ok(Self {
            file_path: Some(path),
            ..Self::with_text(id, &content)
        })
    }

    /// Write the buffer back to `file_path`
    pub fn save(&mut self) -> Result<(), String> {
        let path = self
            .file_path
            .clone()
            .ok_or_else(|| "Document has no file path".to_string())?;
        self.write_to(&path)?;
        self.saved_buffer = self.buffer.clone();
        self.is_modified = false;
        Ok(())
    }

    /// Write the buffer to an arbitrary path
    pub fn write_to(&self, path: &Path) -> Result<(), String> {
        std::fs::write(path, self.buffer.to_string())
            .map_err(|e| format!("Failed to write {}: {}", path.display(), e))?;
        tracing::info!("Wrote {}", path.display());
        Ok(())
    }

    /// Get the number of lines in the document
    pub fn line_count(&self) -> usize {
        self.buffer.len_lines()
    }

    /// Get line content as Cow<str>, without the trailing newline
    pub fn get_line_cow(&self, line_idx: usize) -> Option<Cow<'_, str>> {
        if line_idx >= self.buffer.len_lines() {
            return None;
        }

        let line = self.buffer.line(line_idx);
        let len = line.len_chars();

        let trim_len = if len > 0 && line.char(len - 1) == '\n' {
            if len > 1 && line.char(len - 2) == '\r' {
                2 // CRLF
            } else {
                1 // LF
            }
        } else {
            0
        };

        let trimmed = line.slice(..len - trim_len);

        if let Some(s) = trimmed.as_str() {
            Some(Cow::Borrowed(s))
        } else {
            Some(Cow::Owned(trimmed.to_string()))
        }
    }

    /// Get the length of a line in chars (excluding the line ending)
    pub fn line_length(&self, line_idx: usize) -> usize {
        self.get_line_cow(line_idx)
            .map(|line| line.chars().count())
            .unwrap_or(0)
    }

    /// Convert a (line, column) position to a char offset, clamping to the line
    pub fn position_to_offset(&self, pos: Position) -> usize {
        if pos.line >= self.buffer.len_lines() {
            return self.buffer.len_chars();
        }
        let line_start = self.buffer.line_to_char(pos.line);
        line_start + pos.column.min(self.line_length(pos.line))
    }

    /// The cursor position (selection head)
    pub fn cursor(&self) -> Position {
        self.selection.cursor()
    }

    /// Move the cursor, collapsing the selection
    pub fn set_cursor(&mut self, pos: Position) {
        self.selection = Selection::collapsed(pos);
    }

    /// Replace an arbitrary char range without a group tag.
    ///
    /// Stands in for ordinary typing: it never coalesces with scrub edits.
    pub fn replace_untagged(&mut self, range: Range<usize>, text: &str) {
        self.replace_chars(range, text, None);
    }

    fn replace_chars(&mut self, range: Range<usize>, text: &str, tag: Option<GroupTag>) {
        let len = self.buffer.len_chars();
        let start = range.start.min(len);
        let end = range.end.clamp(start, len);

        let deleted = self.buffer.slice(start..end).to_string();
        if deleted == text {
            return;
        }

        let before = self.selection;
        self.buffer.remove(start..end);
        self.buffer.insert(start, text);
        self.is_modified = true;

        self.history.push(
            EditOperation::replace(start, deleted, text.to_string()),
            tag,
            before,
            self.selection,
        );
    }

    fn apply_operation(&mut self, op: &EditOperation) {
        let end = op.offset + op.deleted_text.chars().count();
        self.buffer.remove(op.offset..end);
        self.buffer.insert(op.offset, &op.inserted_text);
    }

    /// Undo the newest edit group. Returns false when there was nothing to undo.
    pub fn undo(&mut self) -> bool {
        let Some(group) = self.history.pop_undo() else {
            return false;
        };
        for op in group.operations.iter().rev() {
            self.apply_operation(&op.inverse());
        }
        self.selection = group.selection_before;
        self.is_modified = self.buffer != self.saved_buffer;
        tracing::debug!(ops = group.operations.len(), tag = ?group.tag, "undo");
        true
    }

    /// Redo the newest undone group. Returns false when there was nothing to redo.
    pub fn redo(&mut self) -> bool {
        let Some(group) = self.history.pop_redo() else {
            return false;
        };
        for op in &group.operations {
            self.apply_operation(op);
        }
        self.selection = group.selection_after;
        self.is_modified = self.buffer != self.saved_buffer;
        tracing::debug!(ops = group.operations.len(), tag = ?group.tag, "redo");
        true
    }
}

impl EditHost for Document {
    fn document_id(&self) -> DocumentId {
        self.id
    }

    fn line_text(&self, line: usize) -> Option<Cow<'_, str>> {
        self.get_line_cow(line)
    }

    fn replace_range(&mut self, line: usize, columns: Range<usize>, text: &str, tag: GroupTag) {
        let start = self.position_to_offset(Position::new(line, columns.start));
        let end = self.position_to_offset(Position::new(line, columns.end));
        self.replace_chars(start..end, text, Some(tag));
    }

    fn set_selection(&mut self, selection: Selection, tag: GroupTag) {
        self.selection = selection;
        self.history.note_selection(tag, selection);
    }
}

impl std::fmt::Display for Document {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.buffer)
    }
}
