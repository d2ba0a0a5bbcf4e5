//! Grouped edit history (undo/redo).
//!
//! Every edit carries an optional [`GroupTag`]. Consecutive edits that share
//! a tag are coalesced into one [`EditGroup`], so a whole scrub drag or nudge
//! sequence undoes as a single step. Untagged edits always start a new group.

use super::position::Selection;
use super::GroupTag;

/// A single replace operation, in char offsets into the whole document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditOperation {
    /// Char offset where the edit occurred
    pub offset: usize,
    /// Text that was deleted (empty for pure inserts)
    pub deleted_text: String,
    /// Text that was inserted (empty for pure deletes)
    pub inserted_text: String,
}

impl EditOperation {
    pub fn replace(offset: usize, deleted_text: String, inserted_text: String) -> Self {
        Self {
            offset,
            deleted_text,
            inserted_text,
        }
    }

    /// Get the inverse operation for undo
    pub fn inverse(&self) -> Self {
        Self {
            offset: self.offset,
            deleted_text: self.inserted_text.clone(),
            inserted_text: self.deleted_text.clone(),
        }
    }
}

/// Edits that undo/redo as one unit.
#[derive(Debug, Clone)]
pub struct EditGroup {
    pub tag: Option<GroupTag>,
    pub operations: Vec<EditOperation>,
    pub selection_before: Selection,
    pub selection_after: Selection,
}

impl EditGroup {
    fn merges_with(&self, tag: Option<GroupTag>) -> bool {
        tag.is_some() && self.tag == tag
    }
}

/// Edit history with undo/redo stacks of groups.
#[derive(Debug, Clone)]
pub struct EditHistory {
    undo_stack: Vec<EditGroup>,
    redo_stack: Vec<EditGroup>,
    max_size: usize,
}

impl Default for EditHistory {
    fn default() -> Self {
        Self::new()
    }
}

impl EditHistory {
    /// Create a new edit history with default max size
    pub fn new() -> Self {
        Self::with_max_size(1000)
    }

    /// Create a new edit history with specified max size (in groups)
    pub fn with_max_size(max_size: usize) -> Self {
        Self {
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
            max_size,
        }
    }

    /// Record an operation (clears the redo stack).
    ///
    /// Merges into the newest group when it carries the same tag.
    pub fn push(
        &mut self,
        op: EditOperation,
        tag: Option<GroupTag>,
        selection_before: Selection,
        selection_after: Selection,
    ) {
        self.redo_stack.clear();

        if let Some(group) = self.undo_stack.last_mut() {
            if group.merges_with(tag) {
                group.operations.push(op);
                group.selection_after = selection_after;
                return;
            }
        }

        self.undo_stack.push(EditGroup {
            tag,
            operations: vec![op],
            selection_before,
            selection_after,
        });

        while self.undo_stack.len() > self.max_size {
            self.undo_stack.remove(0);
        }
    }

    /// Update the final selection of the newest group if it carries `tag`.
    pub fn note_selection(&mut self, tag: GroupTag, selection: Selection) {
        if let Some(group) = self.undo_stack.last_mut() {
            if group.merges_with(Some(tag)) && self.redo_stack.is_empty() {
                group.selection_after = selection;
            }
        }
    }

    /// Pop a group from the undo stack (moves it to the redo stack)
    pub fn pop_undo(&mut self) -> Option<EditGroup> {
        let group = self.undo_stack.pop()?;
        self.redo_stack.push(group.clone());
        Some(group)
    }

    /// Pop a group from the redo stack (moves it back to the undo stack)
    pub fn pop_redo(&mut self) -> Option<EditGroup> {
        let group = self.redo_stack.pop()?;
        self.undo_stack.push(group.clone());
        Some(group)
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Get the number of groups in the undo stack
    pub fn undo_count(&self) -> usize {
        self.undo_stack.len()
    }

    /// Get the number of groups in the redo stack
    pub fn redo_count(&self) -> usize {
        self.redo_stack.len()
    }
}
