// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors produced while parsing key names, chords, and keymap configuration.

use alloc::string::String;

/// Failure to parse a key name or a key chord.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// The input was empty or only whitespace.
    #[error("empty key description")]
    Empty,
    /// A chord listed only modifiers.
    #[error("chord `{0}` names no key")]
    NoKey(String),
    /// A key name was not recognized.
    #[error("unknown key `{0}`")]
    UnknownKey(String),
    /// A modifier name was not recognized.
    #[error("unknown modifier `{0}`")]
    UnknownModifier(String),
    /// A chord named more than one non-modifier key.
    #[error("chord `{0}` names more than one key")]
    MultipleKeys(String),
}
