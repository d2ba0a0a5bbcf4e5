//! Command enum representing the actions a keybinding can trigger

use std::fmt;
use std::str::FromStr;

use crate::messages::ScrubMsg;
use crate::model::Position;
use crate::scrub::NudgeDirection;

/// Actions that can be bound to keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    /// Increment the literal at the cursor
    NudgeUp,
    /// Decrement the literal at the cursor
    NudgeDown,
    /// Undo the last edit group (a whole scrub is one group)
    Undo,
    /// Redo the last undone edit group
    Redo,
    /// Placeholder used in user keymaps to remove a default binding
    Unbound,
}

impl Command {
    /// Name as written in keymap YAML
    pub fn name(self) -> &'static str {
        match self {
            Command::NudgeUp => "NudgeUp",
            Command::NudgeDown => "NudgeDown",
            Command::Undo => "Undo",
            Command::Redo => "Redo",
            Command::Unbound => "Unbound",
        }
    }

    /// Scrub message for this command, if it drives the scrub engine
    pub fn to_msg(self, cursor: Position) -> Option<ScrubMsg> {
        let direction = match self {
            Command::NudgeUp => NudgeDirection::Up,
            Command::NudgeDown => NudgeDirection::Down,
            Command::Undo | Command::Redo | Command::Unbound => return None,
        };
        Some(ScrubMsg::Nudge { cursor, direction })
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Command {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "NudgeUp" | "Increment" | "IncrementNumber" => Ok(Command::NudgeUp),
            "NudgeDown" | "Decrement" | "DecrementNumber" => Ok(Command::NudgeDown),
            "Undo" => Ok(Command::Undo),
            "Redo" => Ok(Command::Redo),
            "Unbound" => Ok(Command::Unbound),
            _ => Err(()),
        }
    }
}
