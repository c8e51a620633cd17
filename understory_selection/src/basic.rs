// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! In-memory focus and selection models.
//!
//! These are complete, if simple, implementations of [`FocusModel`] and
//! [`SelectionModel`] for hosts that do not already have their own, and for
//! exercising the navigator in tests.

use alloc::vec::Vec;

use hashbrown::HashSet;

use crate::{FocusModel, Position, SelectionMode, SelectionModel, SequenceChange};

/// Focus over a sequence of `item_count` rows.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BasicFocus {
    focused: Option<Position>,
    item_count: usize,
}

impl BasicFocus {
    /// Nothing focused over `item_count` rows.
    pub fn new(item_count: usize) -> Self {
        Self {
            focused: None,
            item_count,
        }
    }

    /// The row count focus is clamped to.
    pub fn item_count(&self) -> usize {
        self.item_count
    }

    /// Change the row count, pulling focus back onto the last row if needed.
    pub fn set_item_count(&mut self, item_count: usize) {
        self.item_count = item_count;
        if let Some(pos) = self.focused.filter(|p| p.row >= item_count) {
            self.focused = item_count.checked_sub(1).map(|last| pos.with_row(last));
        }
    }

    /// Remap focus across a structural change.
    pub fn on_sequence_changed(&mut self, change: &SequenceChange) {
        if let Some(pos) = self.focused {
            self.focused = change.remap(pos);
        }
    }
}

impl FocusModel for BasicFocus {
    fn focused(&self) -> Option<Position> {
        self.focused
    }

    fn focus(&mut self, pos: Option<Position>) {
        match pos {
            Some(p) if p.row >= self.item_count => {
                log::debug!("ignoring focus on row {} of {}", p.row, self.item_count);
            }
            _ => self.focused = pos,
        }
    }

    fn focus_next(&mut self) {
        match self.focused {
            Some(pos) if pos.row + 1 < self.item_count => {
                self.focused = Some(pos.with_row(pos.row + 1));
            }
            None if self.item_count > 0 => self.focused = Some(Position::row(0)),
            _ => {}
        }
    }
}

/// Selection kept as an ordered list plus a membership set.
///
/// With cell selection disabled every position is stored as its row.
#[derive(Clone, Debug, Default)]
pub struct BasicSelection {
    mode: SelectionMode,
    cells: bool,
    order: Vec<Position>,
    members: HashSet<Position>,
    lead: Option<Position>,
}

impl BasicSelection {
    /// An empty selection in `mode` with row selection.
    pub fn new(mode: SelectionMode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    /// Enable or disable cell selection. Clears the selection.
    #[must_use]
    pub fn with_cell_selection(mut self, enabled: bool) -> Self {
        self.set_cell_selection(enabled);
        self
    }

    /// Enable or disable cell selection. Clears the selection.
    pub fn set_cell_selection(&mut self, enabled: bool) {
        self.cells = enabled;
        self.clear_selection();
    }

    /// Change the selection mode; switching to single keeps only the lead.
    pub fn set_mode(&mut self, mode: SelectionMode) {
        self.mode = mode;
        if mode == SelectionMode::Single {
            let lead = self.lead;
            self.clear_selection();
            if let Some(lead) = lead {
                self.select(lead);
            }
        }
    }

    /// Remap every stored position across a structural change.
    pub fn on_sequence_changed(&mut self, change: &SequenceChange) {
        let order: Vec<Position> = self.order.iter().filter_map(|&p| change.remap(p)).collect();
        self.members = order.iter().copied().collect();
        self.lead = self.lead.and_then(|p| change.remap(p));
        self.order = order;
    }

    fn key(&self, pos: Position) -> Position {
        if self.cells { pos } else { Position::row(pos.row) }
    }
}

impl SelectionModel for BasicSelection {
    fn selection_mode(&self) -> SelectionMode {
        self.mode
    }

    fn is_cell_selection_enabled(&self) -> bool {
        self.cells
    }

    fn select(&mut self, pos: Position) {
        let key = self.key(pos);
        if self.mode == SelectionMode::Single && !self.members.contains(&key) {
            self.clear_selection();
        }
        if self.members.insert(key) {
            self.order.push(key);
        }
        self.lead = Some(key);
    }

    fn clear_selection(&mut self) {
        self.order.clear();
        self.members.clear();
        self.lead = None;
    }

    fn clear_selection_at(&mut self, pos: Position) {
        let key = self.key(pos);
        if self.members.remove(&key) {
            self.order.retain(|p| *p != key);
            if self.lead == Some(key) {
                self.lead = self.order.last().copied();
            }
        }
    }

    fn is_selected(&self, pos: Position) -> bool {
        self.members.contains(&self.key(pos))
    }

    fn selected_positions(&self) -> Vec<Position> {
        self.order.clone()
    }

    fn selected_count(&self) -> usize {
        self.order.len()
    }

    fn lead(&self) -> Option<Position> {
        self.lead
    }
}
