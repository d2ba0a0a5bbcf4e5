//! Keymap struct for storing and looking up keybindings

use std::collections::HashMap;

use super::binding::Keybinding;
use super::command::Command;
use super::types::Keystroke;

/// All active bindings with a keystroke index
#[derive(Debug, Clone, Default)]
pub struct Keymap {
    bindings: Vec<Keybinding>,
    lookup: HashMap<Keystroke, Command>,
}

impl Keymap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a keymap with the given bindings. Later bindings win on conflict.
    pub fn with_bindings(bindings: Vec<Keybinding>) -> Self {
        let mut keymap = Self::new();
        for binding in bindings {
            keymap.add_binding(binding);
        }
        keymap
    }

    pub fn add_binding(&mut self, binding: Keybinding) {
        if binding.command == Command::Unbound {
            self.lookup.remove(&binding.keystroke);
        } else {
            self.lookup.insert(binding.keystroke, binding.command);
        }
        self.bindings.push(binding);
    }

    /// Command bound to a keystroke
    pub fn lookup(&self, keystroke: &Keystroke) -> Option<Command> {
        self.lookup.get(keystroke).copied()
    }

    /// Most recently added binding that still triggers `command`
    pub fn binding_for(&self, command: Command) -> Option<&Keybinding> {
        self.bindings
            .iter()
            .rev()
            .find(|b| b.command == command && self.lookup(&b.keystroke) == Some(command))
    }

    pub fn bindings(&self) -> &[Keybinding] {
        &self.bindings
    }
}
