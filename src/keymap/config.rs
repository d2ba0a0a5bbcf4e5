//! YAML configuration parsing for keymaps
//!
//! ```yaml
//! bindings:
//!   - key: ctrl+alt+up
//!     command: NudgeUp
//!   - key: cmd+alt+up
//!     command: NudgeUp
//!     platform: macos
//! ```

use std::path::Path;

use serde::Deserialize;

use super::binding::Keybinding;
use super::command::Command;
use super::types::{KeyCode, Keystroke, Modifiers};

/// Root structure of a keymap YAML file
#[derive(Debug, Deserialize)]
pub struct KeymapConfig {
    pub bindings: Vec<BindingConfig>,
}

/// A single binding entry from YAML
#[derive(Debug, Deserialize)]
pub struct BindingConfig {
    pub key: String,
    pub command: String,
    #[serde(default)]
    pub platform: Option<String>,
}

/// Load keybindings from a YAML file
pub fn load_keymap_file(path: &Path) -> Result<Vec<Keybinding>, KeymapError> {
    let content = std::fs::read_to_string(path).map_err(|e| KeymapError::IoError(e.to_string()))?;

    parse_keymap_yaml(&content)
}

/// Parse keybindings from YAML string, skipping entries for other platforms
pub fn parse_keymap_yaml(yaml: &str) -> Result<Vec<Keybinding>, KeymapError> {
    let config: KeymapConfig =
        serde_yaml::from_str(yaml).map_err(|e| KeymapError::ParseError(e.to_string()))?;

    let current_platform = get_current_platform();
    let mut bindings = Vec::with_capacity(config.bindings.len());

    for entry in config.bindings {
        if entry
            .platform
            .as_deref()
            .is_some_and(|platform| platform != current_platform)
        {
            continue;
        }

        let keystroke = parse_key_string(&entry.key)?;
        let command = entry
            .command
            .parse::<Command>()
            .map_err(|_| KeymapError::InvalidCommand(entry.command.clone()))?;
        bindings.push(Keybinding::new(keystroke, command));
    }

    Ok(bindings)
}

/// Parse a key string like "ctrl+alt+up" into a Keystroke
pub fn parse_key_string(key_str: &str) -> Result<Keystroke, KeymapError> {
    let mut mods = Modifiers::NONE;
    let mut key_part = None;

    for part in key_str.split('+').map(str::trim) {
        let part_lower = part.to_lowercase();
        if let Some(modifier) = parse_modifier(&part_lower) {
            mods = mods | modifier;
            continue;
        }
        if key_part.is_some() {
            return Err(KeymapError::InvalidKey(format!(
                "Multiple keys in binding: {}",
                key_str
            )));
        }
        key_part = Some(parse_key_code(&part_lower)?);
    }

    let key = key_part
        .ok_or_else(|| KeymapError::InvalidKey(format!("No key found in binding: {}", key_str)))?;

    Ok(Keystroke::new(key, mods))
}

/// Parse a modifier chord like "cmd+alt" (no key). An empty string is no modifiers.
pub fn parse_modifiers(mods_str: &str) -> Result<Modifiers, KeymapError> {
    let mut mods = Modifiers::NONE;
    for part in mods_str.split('+').map(str::trim).filter(|p| !p.is_empty()) {
        let modifier = parse_modifier(&part.to_lowercase())
            .ok_or_else(|| KeymapError::InvalidKey(format!("Unknown modifier: {}", part)))?;
        mods = mods | modifier;
    }
    Ok(mods)
}

fn parse_modifier(name: &str) -> Option<Modifiers> {
    match name {
        // Platform command key
        "cmd" => Some(Modifiers::cmd()),
        "ctrl" | "control" => Some(Modifiers::CTRL),
        "shift" => Some(Modifiers::SHIFT),
        "alt" | "option" | "opt" => Some(Modifiers::ALT),
        "meta" | "super" | "win" => Some(Modifiers::META),
        _ => None,
    }
}

fn parse_key_code(key: &str) -> Result<KeyCode, KeymapError> {
    let mut chars = key.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        return Ok(KeyCode::Char(c.to_ascii_lowercase()));
    }

    match key {
        "up" | "arrowup" => Ok(KeyCode::Up),
        "down" | "arrowdown" => Ok(KeyCode::Down),
        "left" | "arrowleft" => Ok(KeyCode::Left),
        "right" | "arrowright" => Ok(KeyCode::Right),
        "pageup" | "pgup" => Ok(KeyCode::PageUp),
        "pagedown" | "pgdown" | "pgdn" => Ok(KeyCode::PageDown),
        "home" => Ok(KeyCode::Home),
        "end" => Ok(KeyCode::End),
        "enter" | "return" => Ok(KeyCode::Enter),
        "escape" | "esc" => Ok(KeyCode::Escape),
        "tab" => Ok(KeyCode::Tab),
        "space" => Ok(KeyCode::Space),
        _ => key
            .strip_prefix('f')
            .and_then(|n| n.parse::<u8>().ok())
            .filter(|n| (1..=24).contains(n))
            .map(KeyCode::F)
            .ok_or_else(|| KeymapError::InvalidKey(format!("Unknown key: {}", key))),
    }
}

/// Get the current platform identifier
fn get_current_platform() -> &'static str {
    if cfg!(target_os = "macos") {
        "macos"
    } else if cfg!(target_os = "windows") {
        "windows"
    } else {
        "linux"
    }
}

/// Errors that can occur when parsing keymaps
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeymapError {
    IoError(String),
    ParseError(String),
    InvalidKey(String),
    InvalidCommand(String),
}

impl std::fmt::Display for KeymapError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            KeymapError::IoError(e) => write!(f, "IO error: {}", e),
            KeymapError::ParseError(e) => write!(f, "Parse error: {}", e),
            KeymapError::InvalidKey(k) => write!(f, "Invalid key: {}", k),
            KeymapError::InvalidCommand(c) => write!(f, "Invalid command: {}", c),
        }
    }
}

impl std::error::Error for KeymapError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_key_string_with_modifiers() {
        let stroke = parse_key_string("ctrl+alt+up").unwrap();
        assert_eq!(stroke.key, KeyCode::Up);
        assert_eq!(stroke.mods, Modifiers::CTRL | Modifiers::ALT);
    }

    #[test]
    fn test_parse_key_string_case_and_spaces() {
        let stroke = parse_key_string("Ctrl + Alt + Down").unwrap();
        assert_eq!(stroke, Keystroke::new(KeyCode::Down, Modifiers::CTRL | Modifiers::ALT));
    }

    #[test]
    fn test_parse_key_string_function_key() {
        assert_eq!(parse_key_string("f5").unwrap().key, KeyCode::F(5));
        assert!(parse_key_string("f99").is_err());
    }

    #[test]
    fn test_parse_key_string_errors() {
        assert!(matches!(parse_key_string("ctrl+alt"), Err(KeymapError::InvalidKey(_))));
        assert!(matches!(parse_key_string("a+b"), Err(KeymapError::InvalidKey(_))));
        assert!(matches!(parse_key_string("ctrl+nope"), Err(KeymapError::InvalidKey(_))));
    }

    #[test]
    fn test_parse_modifiers() {
        assert_eq!(parse_modifiers("ctrl+alt").unwrap(), Modifiers::CTRL | Modifiers::ALT);
        assert_eq!(parse_modifiers("").unwrap(), Modifiers::NONE);
        assert_eq!(parse_modifiers("cmd").unwrap(), Modifiers::cmd());
        assert!(parse_modifiers("ctrl+x").is_err());
    }

    #[test]
    fn test_parse_yaml_skips_other_platforms() {
        let yaml = r#"
bindings:
  - key: ctrl+alt+up
    command: NudgeUp
  - key: ctrl+alt+down
    command: NudgeDown
    platform: not-a-platform
"#;
        let bindings = parse_keymap_yaml(yaml).unwrap();
        assert_eq!(bindings.len(), 1);
        assert_eq!(bindings[0].command, Command::NudgeUp);
    }

    #[test]
    fn test_parse_yaml_rejects_unknown_command() {
        let yaml = "bindings:\n  - key: ctrl+s\n    command: SaveFile\n";
        assert_eq!(
            parse_keymap_yaml(yaml),
            Err(KeymapError::InvalidCommand("SaveFile".to_string()))
        );
    }

    #[test]
    fn test_parse_yaml_syntax_error() {
        assert!(matches!(parse_keymap_yaml("bindings: ["), Err(KeymapError::ParseError(_))));
    }
}
