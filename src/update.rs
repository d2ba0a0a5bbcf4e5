//! Update function for the Elm-style scrub controller
//!
//! [`Scrubber`] is the interaction-layer state the host owns: one nudge slot,
//! one drag slot, and the tag allocator. The two slots never share state.

use crate::config::ScrubConfig;
use crate::keymap::Modifiers;
use crate::messages::ScrubMsg;
use crate::model::GroupTagAllocator;
use crate::scrub::{nudge_step, DragSession, EditHost, NudgeSession};

/// Scrub state owned by the editor interaction layer
#[derive(Debug, Clone)]
pub struct Scrubber {
    pub config: ScrubConfig,
    drag_modifiers: Modifiers,
    tags: GroupTagAllocator,
    nudge: Option<NudgeSession>,
    drag: Option<DragSession>,
}

impl Default for Scrubber {
    fn default() -> Self {
        Self::new(ScrubConfig::default())
    }
}

impl Scrubber {
    pub fn new(config: ScrubConfig) -> Self {
        let drag_modifiers = config.drag_modifiers();
        Self {
            config,
            drag_modifiers,
            tags: GroupTagAllocator::new(),
            nudge: None,
            drag: None,
        }
    }

    /// The live keyboard session, if the last nudge hit a literal
    pub fn nudge_session(&self) -> Option<&NudgeSession> {
        self.nudge.as_ref()
    }

    /// The live drag, between pointer-down and pointer-up
    pub fn drag_session(&self) -> Option<&DragSession> {
        self.drag.as_ref()
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }
}

/// Apply one input event. Returns true when the host buffer or selection changed.
pub fn update<H: EditHost + ?Sized>(scrubber: &mut Scrubber, host: &mut H, msg: ScrubMsg) -> bool {
    match msg {
        ScrubMsg::PointerDown {
            position,
            x,
            modifiers,
        } => {
            if let Some(stale) = scrubber.drag.take() {
                stale.end();
            }
            if !modifiers.contains(scrubber.drag_modifiers) {
                return false;
            }
            scrubber.drag = DragSession::begin(host, position, x, &mut scrubber.tags);
            scrubber.drag.is_some()
        }

        ScrubMsg::PointerMove { x } => {
            let pixels_per_step = scrubber.config.pixels_per_step;
            match scrubber.drag.as_mut() {
                Some(drag) => drag.drag_to(host, x, pixels_per_step),
                None => false,
            }
        }

        ScrubMsg::PointerUp => {
            if let Some(drag) = scrubber.drag.take() {
                drag.end();
            }
            false
        }

        ScrubMsg::Nudge { cursor, direction } => {
            let previous = scrubber.nudge.take();
            match nudge_step(host, cursor, direction, previous, &mut scrubber.tags) {
                Some((session, emission)) => {
                    scrubber.nudge = Some(session);
                    emission.is_applied()
                }
                None => false,
            }
        }
    }
}
