//! Host-side model: positions, identities, and a reference document
//!
//! The scrub engine only talks to a host through [`crate::scrub::EditHost`].
//! [`Document`] is the in-crate host: a rope buffer with a selection and a
//! grouped undo history, used by the CLI and the tests.

pub mod document;
pub mod history;
pub mod position;

pub use document::Document;
pub use history::{EditGroup, EditHistory, EditOperation};
pub use position::{Position, Selection};

/// Identity of a host document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DocumentId(pub u64);

/// Opaque undo-group identifier.
///
/// Every edit of one drag or one nudge sequence carries the same tag; the host
/// merges edits sharing a tag into a single undo step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GroupTag(pub u64);

/// Hands out fresh [`GroupTag`]s. Owned by whoever drives the engine.
#[derive(Debug, Clone, Default)]
pub struct GroupTagAllocator {
    next: u64,
}

impl GroupTagAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate a tag that no earlier call on this allocator returned
    pub fn next_tag(&mut self) -> GroupTag {
        self.next += 1;
        GroupTag(self.next)
    }
}
