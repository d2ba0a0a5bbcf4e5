//! Message types for the Elm-style scrub controller
//!
//! Every pointer or keyboard event the host forwards becomes one [`ScrubMsg`].

use crate::keymap::Modifiers;
use crate::model::Position;
use crate::scrub::NudgeDirection;

/// Input events the scrub controller reacts to
#[derive(Debug, Clone, PartialEq)]
pub enum ScrubMsg {
    /// Pointer pressed over `position` (already mapped from screen space by the host)
    PointerDown {
        position: Position,
        x: f64,
        modifiers: Modifiers,
    },
    /// Pointer moved while pressed
    PointerMove { x: f64 },
    /// Pointer released
    PointerUp,
    /// Increment/decrement command at `cursor`
    Nudge {
        cursor: Position,
        direction: NudgeDirection,
    },
}
