//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use std::borrow::Cow;
use std::ops::Range;

use scrubber::model::{Document, DocumentId, GroupTag, Position, Selection};
use scrubber::EditHost;

/// Create a document with the cursor at (line, column)
pub fn test_doc(text: &str, line: usize, column: usize) -> Document {
    let mut doc = Document::with_text(DocumentId(1), text);
    doc.set_cursor(Position::new(line, column));
    doc
}

/// Line `line` of the document as an owned string
pub fn line(doc: &Document, line: usize) -> String {
    doc.get_line_cow(line)
        .map(|l| l.into_owned())
        .unwrap_or_default()
}

/// One call the engine made on a [`RecordingHost`]
#[derive(Debug, Clone, PartialEq)]
pub enum HostCall {
    Replace {
        line: usize,
        columns: Range<usize>,
        text: String,
        tag: GroupTag,
    },
    Select {
        selection: Selection,
        tag: GroupTag,
    },
}

/// Host that forwards to a [`Document`] and records every call made on it
pub struct RecordingHost {
    pub doc: Document,
    pub calls: Vec<HostCall>,
}

impl RecordingHost {
    pub fn new(text: &str) -> Self {
        Self {
            doc: Document::with_text(DocumentId(1), text),
            calls: Vec::new(),
        }
    }

    pub fn replace_count(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, HostCall::Replace { .. }))
            .count()
    }

    /// Tags of all replacements, in order
    pub fn replace_tags(&self) -> Vec<GroupTag> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                HostCall::Replace { tag, .. } => Some(*tag),
                HostCall::Select { .. } => None,
            })
            .collect()
    }
}

impl EditHost for RecordingHost {
    fn document_id(&self) -> DocumentId {
        self.doc.document_id()
    }

    fn line_text(&self, line: usize) -> Option<Cow<'_, str>> {
        self.doc.line_text(line)
    }

    fn replace_range(&mut self, line: usize, columns: Range<usize>, text: &str, tag: GroupTag) {
        self.calls.push(HostCall::Replace {
            line,
            columns: columns.clone(),
            text: text.to_string(),
            tag,
        });
        self.doc.replace_range(line, columns, text, tag);
    }

    fn set_selection(&mut self, selection: Selection, tag: GroupTag) {
        self.calls.push(HostCall::Select { selection, tag });
        self.doc.set_selection(selection, tag);
    }
}
