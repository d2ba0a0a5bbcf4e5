//! Keybinding: one keystroke mapped to one command

use super::command::Command;
use super::types::Keystroke;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keybinding {
    pub keystroke: Keystroke,
    pub command: Command,
}

impl Keybinding {
    pub fn new(keystroke: Keystroke, command: Command) -> Self {
        Self { keystroke, command }
    }

    /// Get display string for this keybinding
    pub fn display_string(&self) -> String {
        format!("{} → {}", self.keystroke, self.command)
    }
}
