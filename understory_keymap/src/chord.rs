// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Textual key chords such as `"Shift+Shortcut+Down"`.

use core::fmt;
use core::str::FromStr;

use alloc::string::ToString;

use crate::{KeyCode, Modifier, Modifiers, ParseError};

/// A key plus the exact set of modifiers held with it.
///
/// `Shortcut` stands for the platform shortcut modifier and is resolved when
/// the chord becomes a [`KeyBinding`](crate::KeyBinding).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct KeyChord {
    /// The non-modifier key.
    pub key: KeyCode,
    /// Modifiers named explicitly.
    pub modifiers: Modifiers,
    /// Whether the platform shortcut modifier is required.
    pub shortcut: bool,
}

impl KeyChord {
    /// A chord with no modifiers.
    pub const fn new(key: KeyCode) -> Self {
        Self {
            key,
            modifiers: Modifiers::empty(),
            shortcut: false,
        }
    }
}

enum ModifierName {
    Plain(Modifier),
    Shortcut,
}

fn parse_modifier(name: &str) -> Option<ModifierName> {
    const NAMES: &[(&str, Modifier)] = &[
        ("shift", Modifier::Shift),
        ("ctrl", Modifier::Ctrl),
        ("control", Modifier::Ctrl),
        ("alt", Modifier::Alt),
        ("option", Modifier::Alt),
        ("meta", Modifier::Meta),
        ("cmd", Modifier::Meta),
        ("command", Modifier::Meta),
        ("super", Modifier::Meta),
    ];
    if name.eq_ignore_ascii_case("shortcut") {
        return Some(ModifierName::Shortcut);
    }
    NAMES
        .iter()
        .find(|(n, _)| n.eq_ignore_ascii_case(name))
        .map(|(_, m)| ModifierName::Plain(*m))
}

impl FromStr for KeyChord {
    type Err = ParseError;

    /// Parse `Modifier+...+Key`. A trailing `++` names the keypad `+` key.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ParseError::Empty);
        }
        let (mods, key) = if s == "+" {
            ("", "+")
        } else if let Some(mods) = s.strip_suffix("++") {
            (mods, "+")
        } else {
            s.rsplit_once('+').unwrap_or(("", s))
        };

        let key = key.trim();
        if key.is_empty() || parse_modifier(key).is_some() {
            return Err(ParseError::NoKey(s.to_string()));
        }
        let key = key.parse::<KeyCode>()?;

        let mut chord = Self::new(key);
        for name in mods.split('+').map(str::trim).filter(|n| !n.is_empty()) {
            match parse_modifier(name) {
                Some(ModifierName::Plain(m)) => chord.modifiers |= m.flag(),
                Some(ModifierName::Shortcut) => chord.shortcut = true,
                None if name.parse::<KeyCode>().is_ok() => {
                    return Err(ParseError::MultipleKeys(s.to_string()));
                }
                None => return Err(ParseError::UnknownModifier(name.to_string())),
            }
        }
        Ok(chord)
    }
}

impl fmt::Display for KeyChord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const LABELS: [(Modifier, &str); 4] = [
            (Modifier::Shift, "Shift"),
            (Modifier::Ctrl, "Ctrl"),
            (Modifier::Alt, "Alt"),
            (Modifier::Meta, "Meta"),
        ];
        if self.shortcut {
            f.write_str("Shortcut+")?;
        }
        for (m, label) in LABELS {
            if self.modifiers.contains(m.flag()) {
                write!(f, "{label}+")?;
            }
        }
        if self.key == KeyCode::Add {
            f.write_str("+")
        } else {
            write!(f, "{}", self.key)
        }
    }
}
