// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Conditional key bindings.
//!
//! A [`KeyBinding`] pairs a set of constraints (key, event type, per-modifier
//! requirements, orientation) with an action name. Bindings are immutable once
//! built; the builder methods consume and return `self`.
//!
//! Modifiers a binding does not mention are [`ModifierReq::Forbidden`], so
//! `KeyBinding::new(KeyCode::Up, "SelectPreviousRow")` does not fire for
//! Shift+Up. Use [`KeyBinding::ignoring`] to accept either state.

use alloc::borrow::Cow;

use crate::{
    EventType, KeyChord, KeyCode, KeyEvent, Modifiers, Orientation, OrientationReq, Platform,
};

/// Name of an action produced by resolution and consumed by dispatch.
pub type ActionName = Cow<'static, str>;

/// One of the four modifier keys a binding can constrain.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Modifier {
    /// Shift.
    Shift,
    /// Control.
    Ctrl,
    /// Alt / Option.
    Alt,
    /// Meta / Command / Super.
    Meta,
}

impl Modifier {
    /// All modifiers, in a fixed order.
    pub const ALL: [Self; 4] = [Self::Shift, Self::Ctrl, Self::Alt, Self::Meta];

    /// The flag for this modifier in a [`Modifiers`] set.
    pub const fn flag(self) -> Modifiers {
        match self {
            Self::Shift => Modifiers::SHIFT,
            Self::Ctrl => Modifiers::CTRL,
            Self::Alt => Modifiers::ALT,
            Self::Meta => Modifiers::META,
        }
    }

    const fn index(self) -> usize {
        match self {
            Self::Shift => 0,
            Self::Ctrl => 1,
            Self::Alt => 2,
            Self::Meta => 3,
        }
    }
}

/// Tri-state requirement on a single modifier.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ModifierReq {
    /// The modifier must be held.
    Required,
    /// The modifier must not be held.
    #[default]
    Forbidden,
    /// Either state matches; does not count toward specificity.
    Ignored,
}

impl ModifierReq {
    /// Returns `true` if a modifier that is `down` satisfies this requirement.
    pub const fn matches(self, down: bool) -> bool {
        match self {
            Self::Required => down,
            Self::Forbidden => !down,
            Self::Ignored => true,
        }
    }

    /// Returns `true` for [`Required`](Self::Required) and [`Forbidden`](Self::Forbidden).
    pub const fn is_constraint(self) -> bool {
        !matches!(self, Self::Ignored)
    }
}

/// Which keys a binding applies to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum KeyPattern {
    /// Exactly this key.
    Key(KeyCode),
    /// Any key. Used to swallow otherwise unhandled input.
    Any,
}

impl KeyPattern {
    /// Returns `true` if `key` matches this pattern.
    pub fn matches(self, key: KeyCode) -> bool {
        match self {
            Self::Key(k) => k == key.normalized(),
            Self::Any => true,
        }
    }
}

/// An immutable conditional key binding.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct KeyBinding {
    key: KeyPattern,
    event_type: EventType,
    modifiers: [ModifierReq; 4],
    orientation: OrientationReq,
    action: ActionName,
}

impl KeyBinding {
    /// A binding for a key press of `key` with every modifier forbidden.
    pub fn new(key: KeyCode, action: impl Into<ActionName>) -> Self {
        Self {
            key: KeyPattern::Key(key.normalized()),
            event_type: EventType::Pressed,
            modifiers: [ModifierReq::Forbidden; 4],
            orientation: OrientationReq::Any,
            action: action.into(),
        }
    }

    /// A wildcard binding: any key press, modifiers ignored.
    ///
    /// Its specificity is zero, so every explicit binding outranks it.
    pub fn any(action: impl Into<ActionName>) -> Self {
        Self {
            key: KeyPattern::Any,
            event_type: EventType::Pressed,
            modifiers: [ModifierReq::Ignored; 4],
            orientation: OrientationReq::Any,
            action: action.into(),
        }
    }

    /// A binding requiring exactly the modifiers named in `chord`.
    ///
    /// A chord that names the shortcut key resolves it for `platform`.
    pub fn from_chord(chord: &KeyChord, platform: Platform, action: impl Into<ActionName>) -> Self {
        let mut binding = Self::new(chord.key, action);
        for modifier in Modifier::ALL {
            if chord.modifiers.contains(modifier.flag()) {
                binding = binding.require(modifier);
            }
        }
        if chord.shortcut {
            binding = binding.shortcut(platform);
        }
        binding
    }

    /// Set the requirement for one modifier.
    #[must_use]
    pub fn with_modifier(mut self, modifier: Modifier, req: ModifierReq) -> Self {
        self.modifiers[modifier.index()] = req;
        self
    }

    /// Require `modifier` to be held.
    #[must_use]
    pub fn require(self, modifier: Modifier) -> Self {
        self.with_modifier(modifier, ModifierReq::Required)
    }

    /// Accept `modifier` in either state.
    #[must_use]
    pub fn ignoring(self, modifier: Modifier) -> Self {
        self.with_modifier(modifier, ModifierReq::Ignored)
    }

    /// Require Shift.
    #[must_use]
    pub fn shift(self) -> Self {
        self.require(Modifier::Shift)
    }

    /// Require Control.
    #[must_use]
    pub fn ctrl(self) -> Self {
        self.require(Modifier::Ctrl)
    }

    /// Require Alt.
    #[must_use]
    pub fn alt(self) -> Self {
        self.require(Modifier::Alt)
    }

    /// Require Meta.
    #[must_use]
    pub fn meta(self) -> Self {
        self.require(Modifier::Meta)
    }

    /// Require the platform's shortcut key (Meta on macOS, Control elsewhere).
    #[must_use]
    pub fn shortcut(self, platform: Platform) -> Self {
        self.require(platform.shortcut_modifier())
    }

    /// Match key releases instead of presses.
    #[must_use]
    pub fn released(mut self) -> Self {
        self.event_type = EventType::Released;
        self
    }

    /// Restrict the binding to an orientation.
    #[must_use]
    pub fn with_orientation(mut self, orientation: OrientationReq) -> Self {
        self.orientation = orientation;
        self
    }

    /// Only active while the control is vertical.
    #[must_use]
    pub fn vertical_only(self) -> Self {
        self.with_orientation(OrientationReq::VerticalOnly)
    }

    /// Only active while the control is horizontal.
    #[must_use]
    pub fn horizontal_only(self) -> Self {
        self.with_orientation(OrientationReq::HorizontalOnly)
    }

    /// The key pattern.
    pub fn key(&self) -> KeyPattern {
        self.key
    }

    /// The required event type.
    pub fn event_type(&self) -> EventType {
        self.event_type
    }

    /// The requirement placed on `modifier`.
    pub fn requirement(&self, modifier: Modifier) -> ModifierReq {
        self.modifiers[modifier.index()]
    }

    /// The orientation predicate.
    pub fn orientation(&self) -> OrientationReq {
        self.orientation
    }

    /// The action name produced when this binding wins.
    pub fn action(&self) -> &str {
        &self.action
    }

    /// Number of constraints this binding places on an event.
    ///
    /// One point for a non-wildcard key plus one per modifier that is not
    /// [`ModifierReq::Ignored`].
    pub fn specificity(&self) -> u32 {
        let key = u32::from(matches!(self.key, KeyPattern::Key(_)));
        let modifiers: u32 = self
            .modifiers
            .iter()
            .map(|req| u32::from(req.is_constraint()))
            .sum();
        key + modifiers
    }

    /// Returns `true` if `event` satisfies every constraint of this binding
    /// for a control laid out with `orientation`.
    pub fn matches(&self, event: &KeyEvent, orientation: Orientation) -> bool {
        self.key.matches(event.key)
            && self.event_type == event.event_type
            && Modifier::ALL.iter().all(|m| {
                self.modifiers[m.index()].matches(event.modifiers.contains(m.flag()))
            })
            && self.orientation.matches(orientation)
    }
}

#[cfg(feature = "serde")]
mod serde_impl {
    use super::*;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    #[derive(Serialize, Deserialize)]
    struct Repr {
        #[serde(default)]
        key: Option<KeyName>,
        #[serde(default)]
        event_type: EventType,
        #[serde(default)]
        shift: ModifierReq,
        #[serde(default)]
        ctrl: ModifierReq,
        #[serde(default)]
        alt: ModifierReq,
        #[serde(default)]
        meta: ModifierReq,
        #[serde(default)]
        orientation: OrientationReq,
        action: ActionName,
    }

    struct KeyName(KeyCode);

    impl Serialize for KeyName {
        fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
            s.collect_str(&self.0)
        }
    }

    impl<'de> Deserialize<'de> for KeyName {
        fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
            let name = alloc::string::String::deserialize(d)?;
            name.parse().map(KeyName).map_err(serde::de::Error::custom)
        }
    }

    impl Serialize for KeyBinding {
        fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
            let key = match self.key {
                KeyPattern::Key(k) => Some(KeyName(k)),
                KeyPattern::Any => None,
            };
            Repr {
                key,
                event_type: self.event_type,
                shift: self.modifiers[0],
                ctrl: self.modifiers[1],
                alt: self.modifiers[2],
                meta: self.modifiers[3],
                orientation: self.orientation,
                action: self.action.clone(),
            }
            .serialize(s)
        }
    }

    impl<'de> Deserialize<'de> for KeyBinding {
        fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
            let r = Repr::deserialize(d)?;
            Ok(Self {
                key: r.key.map_or(KeyPattern::Any, |k| KeyPattern::Key(k.0.normalized())),
                event_type: r.event_type,
                modifiers: [r.shift, r.ctrl, r.alt, r.meta],
                orientation: r.orientation,
                action: r.action,
            })
        }
    }
}
