//! Pointer-drag scrubbing: one session per pointer-down, gone on pointer-up.

use super::emit::{emit, select_span, EditHost};
use super::literal::LiteralSpan;
use super::state::{detect, ScrubState};
use crate::model::{GroupTagAllocator, Position};

/// Default horizontal distance, in pixels, that makes one scrub step
pub const DEFAULT_PIXELS_PER_STEP: f64 = 8.0;

/// Convert a horizontal pointer displacement into whole scrub steps.
///
/// Truncates toward zero, so a drag has to cover a full step in either
/// direction before the value moves.
pub fn steps_for_displacement(displacement: f64, pixels_per_step: f64) -> i64 {
    if !(pixels_per_step > 0.0) || !displacement.is_finite() {
        return 0;
    }
    (displacement / pixels_per_step).trunc() as i64
}

/// State of one pointer-down-to-pointer-up scrub
#[derive(Debug, Clone, PartialEq)]
pub struct DragSession {
    pub state: ScrubState,
    /// Pointer x at pointer-down
    pub origin_x: f64,
    pub line: usize,
    /// Where the literal currently sits; its text is the last text written
    pub span: LiteralSpan,
}

impl DragSession {
    /// Start a drag at `position`. Selects the literal under it, or returns
    /// `None` (leaving the host untouched) when there is none.
    pub fn begin<H: EditHost + ?Sized>(
        host: &mut H,
        position: Position,
        origin_x: f64,
        tags: &mut GroupTagAllocator,
    ) -> Option<Self> {
        let (span, state) = {
            let line_text = host.line_text(position.line)?;
            detect(&line_text, position.column, tags)?
        };

        tracing::debug!(
            line = position.line,
            column = span.start,
            text = %span.text,
            kind = ?state.kind(),
            "starting drag session"
        );
        select_span(host, position.line, &span, state.tag);

        Some(Self {
            state,
            origin_x,
            line: position.line,
            span,
        })
    }

    /// Pointer moved to `pointer_x`. Returns true when the buffer changed.
    pub fn drag_to<H: EditHost + ?Sized>(
        &mut self,
        host: &mut H,
        pointer_x: f64,
        pixels_per_step: f64,
    ) -> bool {
        let delta = steps_for_displacement(pointer_x - self.origin_x, pixels_per_step);
        let new_text = self.state.update(delta);
        let emission = emit(host, self.line, &self.span, &new_text, self.state.tag);
        let applied = emission.is_applied();
        self.span = emission.into_span();
        applied
    }

    /// Pointer released. Consumes the session; no further edits can follow.
    pub fn end(self) {
        tracing::debug!(line = self.line, text = %self.span.text, "drag session ended");
    }
}
