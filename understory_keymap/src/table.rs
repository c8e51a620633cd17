// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Ordered binding tables with a per-key index.

use alloc::vec::Vec;

use hashbrown::HashMap;
use smallvec::SmallVec;

use crate::{KeyBinding, KeyCode, KeyPattern};

type Slots = SmallVec<[usize; 4]>;

/// An ordered collection of [`KeyBinding`]s.
///
/// Declaration order is significant: when two matching bindings have equal
/// specificity, the one declared first wins. Lookups go through a per-key
/// index so resolution only inspects bindings for the event's key plus any
/// wildcards.
#[derive(Clone, Debug, Default)]
pub struct KeyBindingTable {
    bindings: Vec<KeyBinding>,
    by_key: HashMap<KeyCode, Slots>,
    wildcards: Slots,
}

impl KeyBindingTable {
    /// An empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a binding after all existing ones.
    pub fn push(&mut self, binding: KeyBinding) {
        let slot = self.bindings.len();
        match binding.key() {
            KeyPattern::Key(key) => self.by_key.entry(key).or_default().push(slot),
            KeyPattern::Any => self.wildcards.push(slot),
        }
        self.bindings.push(binding);
    }

    /// Builder form of [`push`](Self::push).
    #[must_use]
    pub fn with(mut self, binding: KeyBinding) -> Self {
        self.push(binding);
        self
    }

    /// A table with `overrides` declared ahead of this table's bindings.
    ///
    /// Overrides win ties against the existing entries.
    #[must_use]
    pub fn with_overrides(self, overrides: impl IntoIterator<Item = KeyBinding>) -> Self {
        overrides.into_iter().chain(self.bindings).collect()
    }

    /// Number of bindings.
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Returns `true` if the table has no bindings.
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// All bindings in declaration order.
    pub fn iter(&self) -> core::slice::Iter<'_, KeyBinding> {
        self.bindings.iter()
    }

    /// Bindings that could match `key`, in declaration order.
    ///
    /// This is the bindings for `key` merged with the wildcard bindings.
    pub fn candidates(&self, key: KeyCode) -> impl Iterator<Item = &KeyBinding> + '_ {
        let exact = self.by_key.get(&key.normalized()).map_or(&[][..], |s| s.as_slice());
        Merge {
            a: exact,
            b: &self.wildcards,
        }
        .map(|slot| &self.bindings[slot])
    }
}

/// Merges two ascending slot lists.
struct Merge<'a> {
    a: &'a [usize],
    b: &'a [usize],
}

impl<'a> Iterator for Merge<'a> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        let take_a = match (self.a.first(), self.b.first()) {
            (Some(a), Some(b)) => a < b,
            (Some(_), None) => true,
            (None, Some(_)) => false,
            (None, None) => return None,
        };
        let list: &'a [usize] = if take_a { self.a } else { self.b };
        let (&head, rest) = list.split_first()?;
        if take_a {
            self.a = rest;
        } else {
            self.b = rest;
        }
        Some(head)
    }
}

impl FromIterator<KeyBinding> for KeyBindingTable {
    fn from_iter<I: IntoIterator<Item = KeyBinding>>(iter: I) -> Self {
        let mut table = Self::new();
        table.extend(iter);
        table
    }
}

impl Extend<KeyBinding> for KeyBindingTable {
    fn extend<I: IntoIterator<Item = KeyBinding>>(&mut self, iter: I) {
        for binding in iter {
            self.push(binding);
        }
    }
}

impl<'a> IntoIterator for &'a KeyBindingTable {
    type Item = &'a KeyBinding;
    type IntoIter = core::slice::Iter<'a, KeyBinding>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
