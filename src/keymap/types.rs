//! Keystroke, Modifiers and KeyCode: what a binding or a drag gesture is made of

use std::fmt;

/// Held modifier keys, one bit each
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Modifiers(u8);

impl Modifiers {
    pub const NONE: Modifiers = Modifiers(0);
    pub const CTRL: Modifiers = Modifiers(0b0001);
    pub const SHIFT: Modifiers = Modifiers(0b0010);
    pub const ALT: Modifiers = Modifiers(0b0100);
    pub const META: Modifiers = Modifiers(0b1000); // Cmd on macOS, Win on Windows

    #[inline]
    pub const fn ctrl(self) -> bool {
        self.0 & Self::CTRL.0 != 0
    }

    #[inline]
    pub const fn shift(self) -> bool {
        self.0 & Self::SHIFT.0 != 0
    }

    #[inline]
    pub const fn alt(self) -> bool {
        self.0 & Self::ALT.0 != 0
    }

    #[inline]
    pub const fn meta(self) -> bool {
        self.0 & Self::META.0 != 0
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// True when every modifier in `other` is also held here.
    ///
    /// Extra held modifiers do not cancel a drag gesture.
    #[inline]
    pub const fn contains(self, other: Modifiers) -> bool {
        (self.0 & other.0) == other.0
    }

    #[inline]
    pub const fn union(self, other: Modifiers) -> Modifiers {
        Modifiers(self.0 | other.0)
    }

    /// The platform "command" modifier (Cmd on macOS, Ctrl elsewhere)
    pub fn cmd() -> Modifiers {
        if cfg!(target_os = "macos") {
            Modifiers::META
        } else {
            Modifiers::CTRL
        }
    }
}

impl std::ops::BitOr for Modifiers {
    type Output = Modifiers;

    fn bitor(self, rhs: Self) -> Self::Output {
        self.union(rhs)
    }
}

impl fmt::Display for Modifiers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let macos = cfg!(target_os = "macos");
        let names = [
            (self.ctrl(), "Ctrl"),
            (self.shift(), "Shift"),
            (self.alt(), if macos { "Option" } else { "Alt" }),
            (self.meta(), if macos { "Cmd" } else { "Win" }),
        ];
        let held: Vec<&str> = names
            .iter()
            .filter(|(on, _)| *on)
            .map(|(_, name)| *name)
            .collect();
        write!(f, "{}", held.join("+"))
    }
}

/// A key a binding can name
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KeyCode {
    /// A character key (normalized to lowercase)
    Char(char),
    Up,
    Down,
    Left,
    Right,
    PageUp,
    PageDown,
    Home,
    End,
    Enter,
    Escape,
    Tab,
    Space,
    F(u8),
}

impl fmt::Display for KeyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyCode::Char(c) => write!(f, "{}", c.to_uppercase()),
            KeyCode::Up => write!(f, "↑"),
            KeyCode::Down => write!(f, "↓"),
            KeyCode::Left => write!(f, "←"),
            KeyCode::Right => write!(f, "→"),
            KeyCode::PageUp => write!(f, "PageUp"),
            KeyCode::PageDown => write!(f, "PageDown"),
            KeyCode::Home => write!(f, "Home"),
            KeyCode::End => write!(f, "End"),
            KeyCode::Enter => write!(f, "Enter"),
            KeyCode::Escape => write!(f, "Escape"),
            KeyCode::Tab => write!(f, "Tab"),
            KeyCode::Space => write!(f, "Space"),
            KeyCode::F(n) => write!(f, "F{}", n),
        }
    }
}

/// A key with the modifiers held when it was pressed
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Keystroke {
    pub key: KeyCode,
    pub mods: Modifiers,
}

impl Keystroke {
    pub const fn new(key: KeyCode, mods: Modifiers) -> Self {
        Self { key, mods }
    }

    /// A character key without modifiers
    pub fn char(c: char) -> Self {
        Self::new(KeyCode::Char(c.to_ascii_lowercase()), Modifiers::NONE)
    }
}

impl fmt::Display for Keystroke {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.mods.is_empty() {
            write!(f, "{}", self.key)
        } else {
            write!(f, "{}+{}", self.mods, self.key)
        }
    }
}
