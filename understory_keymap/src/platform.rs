// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Platform key-mapping differences.

use crate::{Modifier, Modifiers};

/// Target platform family for default bindings.
///
/// The only difference the bindings care about is which modifier acts as the
/// "shortcut" key: Command (Meta) on macOS, Control elsewhere.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Platform {
    /// macOS.
    Mac,
    /// Windows, Linux, and everything else.
    Other,
}

impl Platform {
    /// The platform this crate was compiled for.
    pub const fn current() -> Self {
        if cfg!(target_os = "macos") {
            Self::Mac
        } else {
            Self::Other
        }
    }

    /// The modifier that acts as the shortcut key.
    pub const fn shortcut_modifier(self) -> Modifier {
        match self {
            Self::Mac => Modifier::Meta,
            Self::Other => Modifier::Ctrl,
        }
    }

    /// Returns `true` if the shortcut key is held in `modifiers`.
    pub const fn is_shortcut_down(self, modifiers: Modifiers) -> bool {
        modifiers.contains(self.shortcut_modifier().flag())
    }
}

impl Default for Platform {
    fn default() -> Self {
        Self::current()
    }
}
