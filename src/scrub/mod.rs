//! Live value scrubbing for numeric and color literals.
//!
//! Given a line of text and a column, the engine finds a literal touching that
//! column and rewrites it as a delta changes, either from a pointer drag or
//! from discrete keyboard nudges.
//!
//! # Architecture
//!
//! - [`locate`]: priority-ordered pattern matching around one column
//! - [`ScrubState`]: origin value of one literal and its delta arithmetic
//! - [`emit`]: one atomic replace + select per change, tagged for undo
//! - [`nudge`] / [`NudgeSession`]: keyboard steps that accumulate across presses
//! - [`DragSession`]: pointer drags, one session per pointer-down
//!
//! # Example
//!
//! ```ignore
//! use scrubber::model::{Document, DocumentId, GroupTagAllocator, Position};
//! use scrubber::scrub::{nudge, NudgeDirection};
//!
//! let mut doc = Document::with_text(DocumentId(1), "width: 9px;");
//! let mut tags = GroupTagAllocator::new();
//! let session = nudge(&mut doc, Position::new(0, 7), NudgeDirection::Up, None, &mut tags);
//!
//! assert_eq!(doc.to_string(), "width: 10px;");
//! ```

mod drag;
mod emit;
mod literal;
mod nudge;
mod state;

pub use drag::{steps_for_displacement, DragSession, DEFAULT_PIXELS_PER_STEP};
pub use emit::{emit, select_span, EditHost, Emission};
pub use literal::{find_near, locate, LiteralKind, LiteralSpan};
pub use nudge::{nudge, nudge_step, NudgeDirection, NudgeSession};
pub use state::{detect, LiteralValue, ScrubState};
