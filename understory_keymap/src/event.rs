// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Input event shapes consumed by the resolver.
//!
//! These types describe input after platform translation: a semantic key
//! identity, whether it was pressed or released, and the live modifier state.
//! Pointer events carry a position in the control's local coordinate space and
//! the click count computed by the host.

use core::fmt;
use core::str::FromStr;

use alloc::string::ToString;
use kurbo::Point;

use crate::ParseError;

/// Semantic identity of a key.
///
/// Letters and digits are carried by [`KeyCode::Char`] and are normalized to
/// uppercase by [`KeyCode::char`] and by parsing. Bindings and lookups compare
/// the [`normalized`](KeyCode::normalized) form, so a lowercase `Char` built
/// directly still matches.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum KeyCode {
    /// Arrow up.
    Up,
    /// Arrow down.
    Down,
    /// Arrow left.
    Left,
    /// Arrow right.
    Right,
    /// Keypad arrow up.
    KpUp,
    /// Keypad arrow down.
    KpDown,
    /// Keypad arrow left.
    KpLeft,
    /// Keypad arrow right.
    KpRight,
    /// Home.
    Home,
    /// End.
    End,
    /// Page up.
    PageUp,
    /// Page down.
    PageDown,
    /// Enter / Return.
    Enter,
    /// Space bar.
    Space,
    /// Tab.
    Tab,
    /// Escape.
    Escape,
    /// Backspace.
    Backspace,
    /// Forward delete.
    Delete,
    /// Insert.
    Insert,
    /// Keypad `+`.
    Add,
    /// Keypad `-`.
    Subtract,
    /// Keypad `*`.
    Multiply,
    /// Backslash.
    Backslash,
    /// Function key `F1`..=`F24`.
    F(u8),
    /// A letter or digit key.
    Char(char),
}

const NAMED_KEYS: &[(KeyCode, &str)] = &[
    (KeyCode::Up, "Up"),
    (KeyCode::Down, "Down"),
    (KeyCode::Left, "Left"),
    (KeyCode::Right, "Right"),
    (KeyCode::KpUp, "KpUp"),
    (KeyCode::KpDown, "KpDown"),
    (KeyCode::KpLeft, "KpLeft"),
    (KeyCode::KpRight, "KpRight"),
    (KeyCode::Home, "Home"),
    (KeyCode::End, "End"),
    (KeyCode::PageUp, "PageUp"),
    (KeyCode::PageDown, "PageDown"),
    (KeyCode::Enter, "Enter"),
    (KeyCode::Space, "Space"),
    (KeyCode::Tab, "Tab"),
    (KeyCode::Escape, "Escape"),
    (KeyCode::Backspace, "Backspace"),
    (KeyCode::Delete, "Delete"),
    (KeyCode::Insert, "Insert"),
    (KeyCode::Add, "Add"),
    (KeyCode::Subtract, "Subtract"),
    (KeyCode::Multiply, "Multiply"),
    (KeyCode::Backslash, "Backslash"),
];

const KEY_ALIASES: &[(KeyCode, &str)] = &[
    (KeyCode::Escape, "Esc"),
    (KeyCode::Enter, "Return"),
    (KeyCode::PageUp, "PgUp"),
    (KeyCode::PageDown, "PgDn"),
    (KeyCode::Delete, "Del"),
    (KeyCode::Backspace, "Back"),
    (KeyCode::Home, "Begin"),
];

impl KeyCode {
    /// Letter or digit key, normalized to uppercase.
    ///
    /// Returns `None` for characters that are not ASCII alphanumerics.
    pub fn char(c: char) -> Option<Self> {
        c.is_ascii_alphanumeric()
            .then(|| Self::Char(c.to_ascii_uppercase()))
    }

    /// The key with any letter folded to uppercase.
    pub const fn normalized(self) -> Self {
        match self {
            Self::Char(c) => Self::Char(c.to_ascii_uppercase()),
            other => other,
        }
    }

    /// Returns `true` for the main and keypad arrow keys.
    pub const fn is_arrow(self) -> bool {
        matches!(
            self,
            Self::Up
                | Self::Down
                | Self::Left
                | Self::Right
                | Self::KpUp
                | Self::KpDown
                | Self::KpLeft
                | Self::KpRight
        )
    }

    /// Maps keypad arrows onto the main arrow keys; other keys are returned unchanged.
    pub const fn without_keypad(self) -> Self {
        match self {
            Self::KpUp => Self::Up,
            Self::KpDown => Self::Down,
            Self::KpLeft => Self::Left,
            Self::KpRight => Self::Right,
            other => other,
        }
    }
}

impl fmt::Display for KeyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::F(n) => write!(f, "F{n}"),
            Self::Char(c) => write!(f, "{}", c.to_ascii_uppercase()),
            named => {
                let name = NAMED_KEYS
                    .iter()
                    .find(|(k, _)| k == named)
                    .map_or("?", |(_, n)| n);
                f.write_str(name)
            }
        }
    }
}

impl FromStr for KeyCode {
    type Err = ParseError;

    /// Parse a key name such as `"Up"`, `"PageDown"`, `"F2"`, or `"a"`.
    ///
    /// Matching is ASCII case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ParseError::Empty);
        }
        let mut chars = s.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            return match c {
                '\\' => Ok(Self::Backslash),
                '+' => Ok(Self::Add),
                '-' => Ok(Self::Subtract),
                '*' => Ok(Self::Multiply),
                c => Self::char(c).ok_or_else(|| ParseError::UnknownKey(s.to_string())),
            };
        }
        if let Some((key, _)) = NAMED_KEYS
            .iter()
            .chain(KEY_ALIASES)
            .find(|(_, name)| name.eq_ignore_ascii_case(s))
        {
            return Ok(*key);
        }
        if let Some(n) = s
            .strip_prefix('F')
            .or_else(|| s.strip_prefix('f'))
            .and_then(|n| n.parse::<u8>().ok())
            .filter(|n| (1..=24).contains(n))
        {
            return Ok(Self::F(n));
        }
        Err(ParseError::UnknownKey(s.to_string()))
    }
}

bitflags::bitflags! {
    /// Live modifier state carried by an input event.
    #[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Modifiers: u8 {
        /// Shift.
        const SHIFT = 1 << 0;
        /// Control.
        const CTRL = 1 << 1;
        /// Alt / Option.
        const ALT = 1 << 2;
        /// Meta / Command / Super.
        const META = 1 << 3;
    }
}

impl Modifiers {
    /// Returns `true` if Shift is held.
    pub const fn shift(self) -> bool {
        self.contains(Self::SHIFT)
    }

    /// Returns `true` if Control is held.
    pub const fn ctrl(self) -> bool {
        self.contains(Self::CTRL)
    }

    /// Returns `true` if Alt is held.
    pub const fn alt(self) -> bool {
        self.contains(Self::ALT)
    }

    /// Returns `true` if Meta is held.
    pub const fn meta(self) -> bool {
        self.contains(Self::META)
    }
}

/// Whether a key event reports a press or a release.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum EventType {
    /// Key went down (including auto-repeat).
    #[default]
    Pressed,
    /// Key went up.
    Released,
}

/// A keyboard event after platform translation.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct KeyEvent {
    /// Key identity.
    pub key: KeyCode,
    /// Press or release.
    pub event_type: EventType,
    /// Modifier state at the time of the event.
    pub modifiers: Modifiers,
}

impl KeyEvent {
    /// A key press with no modifiers held.
    pub const fn pressed(key: KeyCode) -> Self {
        Self {
            key,
            event_type: EventType::Pressed,
            modifiers: Modifiers::empty(),
        }
    }

    /// A key release with no modifiers held.
    pub const fn released(key: KeyCode) -> Self {
        Self {
            key,
            event_type: EventType::Released,
            modifiers: Modifiers::empty(),
        }
    }

    /// Replace the modifier state.
    #[must_use]
    pub const fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }
}

/// Kind of pointer event.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PointerEventType {
    /// Button went down.
    Pressed,
    /// Pointer moved.
    Moved,
    /// Button went up.
    Released,
}

/// A pointer event in control-local coordinates.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PointerEvent {
    /// Press, move, or release.
    pub event_type: PointerEventType,
    /// Pointer position in the control's coordinate space.
    pub position: Point,
    /// Modifier state at the time of the event.
    pub modifiers: Modifiers,
    /// Button identifier; `1` is the primary button.
    pub button: u8,
    /// Consecutive click count as computed by the host (`1` for a single click).
    pub click_count: u8,
}

impl PointerEvent {
    /// A primary-button single-click press at `position`.
    pub const fn pressed(position: Point) -> Self {
        Self {
            event_type: PointerEventType::Pressed,
            position,
            modifiers: Modifiers::empty(),
            button: 1,
            click_count: 1,
        }
    }

    /// Replace the modifier state.
    #[must_use]
    pub const fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    /// Replace the click count.
    #[must_use]
    pub const fn with_click_count(mut self, click_count: u8) -> Self {
        self.click_count = click_count;
        self
    }
}

/// Any input event a behavior can consume.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum InputEvent {
    /// Keyboard input.
    Key(KeyEvent),
    /// Pointer input.
    Pointer(PointerEvent),
}

impl From<KeyEvent> for InputEvent {
    fn from(event: KeyEvent) -> Self {
        Self::Key(event)
    }
}

impl From<PointerEvent> for InputEvent {
    fn from(event: PointerEvent) -> Self {
        Self::Pointer(event)
    }
}
