//! Keyboard nudges and the continuation state between them.
//!
//! The tracker is two-state: no session (idle) or one [`NudgeSession`]. The
//! session is handed in by the caller and handed back, so the engine keeps no
//! state of its own between key presses.

use super::emit::{emit, EditHost, Emission};
use super::literal::{locate, LiteralSpan};
use super::state::{detect, ScrubState};
use crate::model::{DocumentId, GroupTagAllocator, Position};

/// Direction of one nudge step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NudgeDirection {
    Up,
    Down,
}

impl NudgeDirection {
    pub fn step(self) -> i64 {
        match self {
            NudgeDirection::Up => 1,
            NudgeDirection::Down => -1,
        }
    }
}

/// State carried from one nudge to the next on the same literal
#[derive(Debug, Clone, PartialEq)]
pub struct NudgeSession {
    pub state: ScrubState,
    /// Total steps since the session began; not clamped by saturation
    pub accumulated_delta: i64,
    /// The text this session last left in the buffer
    pub last_text: String,
    pub line: usize,
    /// Starting column of the literal
    pub column: usize,
    pub document: DocumentId,
}

impl NudgeSession {
    /// Whether the literal at the cursor is still the one this session wrote
    fn continues_at<H: EditHost + ?Sized>(&self, host: &H, cursor: Position) -> bool {
        if host.document_id() != self.document || cursor.line != self.line {
            return false;
        }
        let Some(line_text) = host.line_text(cursor.line) else {
            return false;
        };
        matches!(
            locate(&line_text, cursor.column),
            Some((_, span)) if span.start == self.column && span.text == self.last_text
        )
    }
}

/// Apply one nudge at `cursor`.
///
/// Returns the session to hand back on the next nudge, or `None` when there
/// is no literal at the cursor.
pub fn nudge<H: EditHost + ?Sized>(
    host: &mut H,
    cursor: Position,
    direction: NudgeDirection,
    session: Option<NudgeSession>,
    tags: &mut GroupTagAllocator,
) -> Option<NudgeSession> {
    nudge_step(host, cursor, direction, session, tags).map(|(session, _)| session)
}

/// [`nudge`], also reporting whether the buffer was actually rewritten.
pub fn nudge_step<H: EditHost + ?Sized>(
    host: &mut H,
    cursor: Position,
    direction: NudgeDirection,
    session: Option<NudgeSession>,
    tags: &mut GroupTagAllocator,
) -> Option<(NudgeSession, Emission)> {
    let mut session = match session {
        Some(mut session) if session.continues_at(&*host, cursor) => {
            session.accumulated_delta += direction.step();
            tracing::debug!(
                line = session.line,
                column = session.column,
                delta = session.accumulated_delta,
                "continuing nudge session"
            );
            session
        }
        previous => {
            if previous.is_some() {
                tracing::debug!(?cursor, "nudge target changed, starting new session");
            }
            start_session(&*host, cursor, direction, tags)?
        }
    };

    let new_text = session.state.update(session.accumulated_delta);
    let span = LiteralSpan::new(session.column, session.last_text.as_str());
    let emission = emit(host, session.line, &span, &new_text, session.state.tag);
    session.last_text = emission.span().text.clone();
    Some((session, emission))
}

fn start_session<H: EditHost + ?Sized>(
    host: &H,
    cursor: Position,
    direction: NudgeDirection,
    tags: &mut GroupTagAllocator,
) -> Option<NudgeSession> {
    let line_text = host.line_text(cursor.line)?;
    let (span, state) = detect(&line_text, cursor.column, tags)?;
    tracing::debug!(
        line = cursor.line,
        column = span.start,
        text = %span.text,
        kind = ?state.kind(),
        "starting nudge session"
    );
    Some(NudgeSession {
        state,
        accumulated_delta: direction.step(),
        last_text: span.text,
        line: cursor.line,
        column: span.start,
        document: host.document_id(),
    })
}
