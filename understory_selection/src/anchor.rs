// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Anchor tracking and recent-selection history.

use smallvec::SmallVec;

use crate::{Position, SequenceChange};

/// The reference point for range selection.
///
/// An anchor is an index into the current item sequence, not a handle to an
/// item, so it must be remapped with [`on_sequence_changed`] whenever rows are
/// inserted or removed.
///
/// The tracker also owns the path-deviation flag used by cell selection: it
/// is set when a selected cell shares neither the anchor's row nor its column,
/// and reset whenever the anchor is (re)established.
///
/// [`on_sequence_changed`]: Self::on_sequence_changed
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct AnchorTracker {
    anchor: Option<Position>,
    path_deviated: bool,
}

impl AnchorTracker {
    /// A tracker with no anchor.
    pub const fn new() -> Self {
        Self {
            anchor: None,
            path_deviated: false,
        }
    }

    /// Store `pos` as the anchor and clear path deviation.
    pub fn set(&mut self, pos: Position) {
        self.anchor = Some(pos);
        self.path_deviated = false;
    }

    /// The anchor, or `focused` if none has been set.
    pub fn get(&self, focused: Option<Position>) -> Option<Position> {
        self.anchor.or(focused)
    }

    /// The explicitly set anchor, without the focus fallback.
    pub fn explicit(&self) -> Option<Position> {
        self.anchor
    }

    /// Returns `true` only if an anchor was explicitly set.
    pub fn has(&self) -> bool {
        self.anchor.is_some()
    }

    /// Forget the anchor.
    pub fn clear(&mut self) {
        self.anchor = None;
        self.path_deviated = false;
    }

    /// Whether selected cells have left the anchor's row and column.
    pub fn path_deviated(&self) -> bool {
        self.path_deviated
    }

    /// Record that the selection no longer forms an anchor-rooted rectangle.
    pub fn mark_path_deviated(&mut self) {
        self.path_deviated = true;
    }

    /// Remap the anchor across a structural change, clearing it if its row
    /// was removed.
    pub fn on_sequence_changed(&mut self, change: &SequenceChange) {
        let Some(anchor) = self.anchor else {
            return;
        };
        match change.remap(anchor) {
            Some(moved) => self.anchor = Some(moved),
            None => self.clear(),
        }
    }
}

const HISTORY_CAPACITY: usize = 10;

/// Most-recent-first list of selected positions, bounded to
/// [`SelectionHistory::CAPACITY`] entries.
///
/// A position already present is not moved to the front when selected again.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SelectionHistory {
    entries: SmallVec<[Position; HISTORY_CAPACITY]>,
}

impl SelectionHistory {
    /// Maximum number of retained entries.
    pub const CAPACITY: usize = HISTORY_CAPACITY;

    /// An empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a newly selected position.
    pub fn record(&mut self, pos: Position) {
        if self.entries.contains(&pos) {
            return;
        }
        if self.entries.len() == Self::CAPACITY {
            self.entries.pop();
        }
        self.entries.insert(0, pos);
    }

    /// The entry `n` steps back; `get(0)` is the most recent.
    pub fn get(&self, n: usize) -> Option<Position> {
        self.entries.get(n).copied()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries, most recent first.
    pub fn iter(&self) -> impl Iterator<Item = Position> + '_ {
        self.entries.iter().copied()
    }

    /// Forget every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Remap entries across a structural change, dropping removed rows.
    pub fn on_sequence_changed(&mut self, change: &SequenceChange) {
        let remapped: SmallVec<[Position; HISTORY_CAPACITY]> = self
            .entries
            .iter()
            .filter_map(|&pos| change.remap(pos))
            .collect();
        self.entries = remapped;
    }
}
