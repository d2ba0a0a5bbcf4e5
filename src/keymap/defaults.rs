//! Default keybindings
//!
//! Ship with the embedded `keymap.yaml`; a project-local `keymap.yaml` and the
//! user's config keymap are layered on top.

use std::path::Path;

use super::binding::Keybinding;
use super::command::Command;
use super::config::load_keymap_file;
use super::types::{KeyCode, Keystroke, Modifiers};

/// Default keymap YAML embedded at compile time
const DEFAULT_KEYMAP_YAML: &str = include_str!("../../keymap.yaml");

/// The embedded default keymap source
pub fn get_default_keymap_yaml() -> &'static str {
    DEFAULT_KEYMAP_YAML
}

/// Load and merge keymaps: defaults + overrides
///
/// Loading order (each layer overrides the previous):
/// 1. Embedded default keymap (compiled into binary)
/// 2. keymap.yaml in current directory (project-local overrides)
/// 3. User config at ~/.config/scrubber/keymap.yaml
pub fn load_default_keymap() -> Vec<Keybinding> {
    let mut bindings = match super::config::parse_keymap_yaml(DEFAULT_KEYMAP_YAML) {
        Ok(b) => {
            tracing::info!("Loaded embedded default keymap ({} bindings)", b.len());
            b
        }
        Err(e) => {
            tracing::warn!(
                "Failed to parse embedded keymap: {}, using hardcoded defaults",
                e
            );
            default_bindings()
        }
    };

    if let Ok(local_bindings) = load_keymap_file(Path::new("keymap.yaml")) {
        tracing::info!(
            "Merging project keymap.yaml ({} bindings)",
            local_bindings.len()
        );
        bindings = merge_bindings(bindings, local_bindings);
    }

    if let Some(user_path) = crate::config_paths::keymap_file() {
        if user_path.exists() {
            match load_keymap_file(&user_path) {
                Ok(user_bindings) => {
                    tracing::info!(
                        "Merging user keymap from {} ({} bindings)",
                        user_path.display(),
                        user_bindings.len()
                    );
                    bindings = merge_bindings(bindings, user_bindings);
                }
                Err(e) => {
                    tracing::warn!("Failed to load user keymap from {}: {}", user_path.display(), e);
                }
            }
        }
    }

    bindings
}

/// Merge user bindings into base bindings
///
/// - same keystroke as a base binding → replaces it
/// - command `Unbound` → removes base bindings on that keystroke
/// - otherwise → appended
pub fn merge_bindings(base: Vec<Keybinding>, user: Vec<Keybinding>) -> Vec<Keybinding> {
    let mut result = base;

    for user_binding in user {
        if user_binding.command == Command::Unbound {
            result.retain(|b| b.keystroke != user_binding.keystroke);
            continue;
        }

        match result
            .iter()
            .position(|b| b.keystroke == user_binding.keystroke)
        {
            Some(idx) => result[idx] = user_binding,
            None => result.push(user_binding),
        }
    }

    result
}

/// Hardcoded defaults, used when the embedded YAML cannot be parsed
pub fn default_bindings() -> Vec<Keybinding> {
    let cmd = Modifiers::cmd();
    let cmd_alt = cmd | Modifiers::ALT;

    vec![
        bind(KeyCode::Up, cmd_alt, Command::NudgeUp),
        bind(KeyCode::Down, cmd_alt, Command::NudgeDown),
        bind(KeyCode::Char('z'), cmd, Command::Undo),
        bind(KeyCode::Char('z'), cmd | Modifiers::SHIFT, Command::Redo),
    ]
}

fn bind(key: KeyCode, mods: Modifiers, command: Command) -> Keybinding {
    Keybinding::new(Keystroke::new(key, mods), command)
}
