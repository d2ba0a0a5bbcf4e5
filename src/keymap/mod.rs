//! Keyboard bindings for the scrub commands
//!
//! ```text
//! host key event → Keystroke → Keymap::lookup() → Command → ScrubMsg
//! ```
//!
//! Also parses the modifier chord that turns a pointer-down into a scrub drag.

mod binding;
mod command;
mod config;
mod defaults;
#[allow(clippy::module_inception)]
mod keymap;
mod types;

pub use binding::Keybinding;
pub use command::Command;
pub use config::{
    load_keymap_file, parse_key_string, parse_keymap_yaml, parse_modifiers, KeymapError,
};
pub use defaults::{default_bindings, get_default_keymap_yaml, load_default_keymap, merge_bindings};
pub use keymap::Keymap;
pub use types::{KeyCode, Keystroke, Modifiers};
