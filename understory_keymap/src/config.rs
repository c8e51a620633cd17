// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Keymap configuration loaded from serialized data.
//!
//! A [`KeymapConfig`] is a list of chord → action entries. It is meant for
//! user or application keymaps layered in front of a control's default table:
//!
//! ```
//! # #[cfg(feature = "serde")]
//! # {
//! use understory_keymap::{KeymapConfig, Platform};
//!
//! let json = r#"{ "bindings": [
//!     { "chord": "Shortcut+D", "action": "ClearSelection" },
//!     { "chord": "J", "action": "SelectNextRow", "orientation": "vertical_only" }
//! ] }"#;
//! let config: KeymapConfig = serde_json::from_str(json).unwrap();
//! let table = config.to_table(Platform::Other).unwrap();
//! assert_eq!(table.len(), 2);
//! # }
//! ```

use alloc::string::String;
use alloc::vec::Vec;

use crate::{KeyBinding, KeyBindingTable, KeyChord, OrientationReq, ParseError, Platform};

/// One configured binding.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct BindingConfig {
    /// Chord text such as `"Shift+Shortcut+Home"`.
    pub chord: String,
    /// Action produced when the chord matches.
    pub action: String,
    /// Orientation predicate; defaults to any.
    #[serde(default)]
    pub orientation: OrientationReq,
    /// Match key releases instead of presses.
    #[serde(default)]
    pub released: bool,
}

impl BindingConfig {
    /// Build the binding this entry describes.
    pub fn to_binding(&self, platform: Platform) -> Result<KeyBinding, ParseError> {
        let chord: KeyChord = self.chord.parse()?;
        let binding = KeyBinding::from_chord(&chord, platform, self.action.clone())
            .with_orientation(self.orientation);
        Ok(if self.released {
            binding.released()
        } else {
            binding
        })
    }
}

/// A serialized keymap.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct KeymapConfig {
    /// Entries in declaration order.
    #[serde(default)]
    pub bindings: Vec<BindingConfig>,
}

impl KeymapConfig {
    /// Build a binding table, failing on the first malformed chord.
    pub fn to_table(&self, platform: Platform) -> Result<KeyBindingTable, ParseError> {
        self.bindings
            .iter()
            .map(|entry| entry.to_binding(platform))
            .collect()
    }
}
