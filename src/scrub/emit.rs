//! Host interface and the edit emitter.

use std::borrow::Cow;
use std::ops::Range;

use super::literal::LiteralSpan;
use crate::model::{DocumentId, GroupTag, Selection};

/// What the engine needs from the editor hosting the buffer.
///
/// Columns are char columns within one line. The host guarantees that edits
/// and selection changes sharing a [`GroupTag`] undo as one step.
pub trait EditHost {
    /// Identity of the document being edited
    fn document_id(&self) -> DocumentId;

    /// Line content without its line ending, `None` past the last line
    fn line_text(&self, line: usize) -> Option<Cow<'_, str>>;

    /// Replace `columns` of `line` with `text`
    fn replace_range(&mut self, line: usize, columns: Range<usize>, text: &str, tag: GroupTag);

    /// Set the selection
    fn set_selection(&mut self, selection: Selection, tag: GroupTag);
}

/// Outcome of [`emit`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Emission {
    /// The buffer was rewritten; the literal now occupies this span
    Applied(LiteralSpan),
    /// The new text equals what is already there; the host was not touched
    Unchanged(LiteralSpan),
}

impl Emission {
    /// The literal's span after the emission
    pub fn span(&self) -> &LiteralSpan {
        match self {
            Emission::Applied(span) | Emission::Unchanged(span) => span,
        }
    }

    pub fn into_span(self) -> LiteralSpan {
        match self {
            Emission::Applied(span) | Emission::Unchanged(span) => span,
        }
    }

    pub fn is_applied(&self) -> bool {
        matches!(self, Emission::Applied(_))
    }
}

/// Replace `span` (whose text is the last text written there) with `new_text`
/// and select the result, all under `tag`.
pub fn emit<H: EditHost + ?Sized>(
    host: &mut H,
    line: usize,
    span: &LiteralSpan,
    new_text: &str,
    tag: GroupTag,
) -> Emission {
    if new_text == span.text {
        tracing::trace!(line, text = new_text, "scrub text unchanged, skipping edit");
        return Emission::Unchanged(span.clone());
    }

    host.replace_range(line, span.start..span.end, new_text, tag);
    let next = span.with_text(new_text);
    host.set_selection(Selection::on_line(line, next.start, next.end), tag);

    tracing::trace!(line, from = %span.text, to = new_text, ?tag, "scrub edit");
    Emission::Applied(next)
}

/// Select a literal without changing it
pub fn select_span<H: EditHost + ?Sized>(host: &mut H, line: usize, span: &LiteralSpan, tag: GroupTag) {
    host.set_selection(Selection::on_line(line, span.start, span.end), tag);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Document, Position};

    #[test]
    fn test_emit_replaces_and_selects() {
        let mut doc = Document::with_text(DocumentId(1), "margin: 9px;");
        let span = LiteralSpan::new(8, "9");

        let emission = emit(&mut doc, 0, &span, "10", GroupTag(1));

        assert!(emission.is_applied());
        assert_eq!(doc.to_string(), "margin: 10px;");
        assert_eq!(emission.span(), &LiteralSpan::new(8, "10"));
        assert_eq!(doc.selection.start(), Position::new(0, 8));
        assert_eq!(doc.selection.end(), Position::new(0, 10));
    }

    #[test]
    fn test_emit_same_text_is_noop() {
        let mut doc = Document::with_text(DocumentId(1), "c = #fff");
        let span = LiteralSpan::new(4, "#fff");

        let emission = emit(&mut doc, 0, &span, "#fff", GroupTag(1));

        assert_eq!(emission, Emission::Unchanged(span));
        assert!(!doc.history.can_undo());
        assert!(!doc.is_modified);
    }
}
