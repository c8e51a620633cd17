// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The navigator's state and the plumbing its operations share.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

use crate::{
    AnchorTracker, FocusModel, ItemSource, NavContext, PageScroller, Position, SelectionHistory,
    SelectionMode, SelectionModel, SequenceChange, TreeItems,
};

/// Notification fired after a focus-moving operation, typically used by the
/// host to scroll the focused item into view.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum NavigationEvent {
    /// Focus moved up a row without changing the selection.
    FocusPreviousRow,
    /// Focus moved down a row without changing the selection.
    FocusNextRow,
    /// Selection moved or extended up a row.
    SelectPreviousRow,
    /// Selection moved or extended down a row.
    SelectNextRow,
    /// Focus or selection jumped to the first row.
    MoveToFirstCell,
    /// Focus or selection jumped to the last row.
    MoveToLastCell,
    /// Selection moved or extended one column left.
    SelectLeftCell,
    /// Selection moved or extended one column right.
    SelectRightCell,
    /// Focus moved one column left.
    FocusLeftCell,
    /// Focus moved one column right.
    FocusRightCell,
}

/// Modifier keys that change navigation semantics.
///
/// `shortcut` is the platform shortcut modifier (Command on macOS, Control
/// elsewhere); the host resolves it before handing the state over.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct ModifierState {
    /// Shift is held.
    pub shift: bool,
    /// The shortcut modifier is held.
    pub shortcut: bool,
}

impl ModifierState {
    /// No modifiers.
    pub const NONE: Self = Self::new(false, false);

    /// Construct from the two flags.
    pub const fn new(shift: bool, shortcut: bool) -> Self {
        Self { shift, shortcut }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Direction {
    Backward,
    Forward,
}

impl Direction {
    /// One step from `from` within `0..limit`.
    pub(crate) fn step(self, from: usize, limit: usize) -> Option<usize> {
        match self {
            Self::Backward => from.checked_sub(1),
            Self::Forward => from.checked_add(1).filter(|&next| next < limit),
        }
    }
}

/// The collaborators an operation needs, reborrowed from a [`NavContext`].
pub(crate) struct Models<'c, 'a> {
    pub(crate) focus: &'c mut (dyn FocusModel + 'a),
    pub(crate) selection: &'c mut (dyn SelectionModel + 'a),
    pub(crate) items: &'a dyn ItemSource,
    pub(crate) pager: Option<&'c mut (dyn PageScroller + 'a)>,
    pub(crate) tree: Option<&'c mut (dyn TreeItems + 'a)>,
}

impl Models<'_, '_> {
    pub(crate) fn cell_mode(&self) -> bool {
        self.selection.is_cell_selection_enabled()
    }

    pub(crate) fn is_multiple(&self) -> bool {
        self.selection.selection_mode() == SelectionMode::Multiple
    }

    pub(crate) fn last_row(&self) -> Option<usize> {
        self.items.item_count().checked_sub(1)
    }

    /// `pos` as the selection model addresses it.
    pub(crate) fn selection_key(&self, pos: Position) -> Position {
        if self.cell_mode() {
            pos
        } else {
            Position::row(pos.row)
        }
    }

    /// Ask the pager for the row one page away, if it lands in range.
    pub(crate) fn page(&mut self, direction: Direction, peek: bool) -> Option<usize> {
        let pager = self.pager.as_deref_mut()?;
        let row = match direction {
            Direction::Backward => pager.page_up(peek),
            Direction::Forward => pager.page_down(peek),
        }?;
        (row < self.items.item_count()).then_some(row)
    }
}

/// Reborrow the focus and selection models, or log and return `None`.
pub(crate) fn models<'c, 'a>(cx: &'c mut NavContext<'a>, op: &str) -> Option<Models<'c, 'a>> {
    let (Some(focus), Some(selection)) = (cx.focus.as_deref_mut(), cx.selection.as_deref_mut())
    else {
        log::debug!("{op}: no focus or selection model");
        return None;
    };
    Some(Models {
        focus,
        selection,
        items: cx.items,
        pager: cx.pager.as_deref_mut(),
        tree: cx.tree.as_deref_mut(),
    })
}

/// Selection mode and cell-selection flag, if a selection model is present.
pub(crate) fn selection_flags(cx: &NavContext<'_>) -> Option<(SelectionMode, bool)> {
    cx.selection
        .as_deref()
        .map(|sm| (sm.selection_mode(), sm.is_cell_selection_enabled()))
}

type Observer = Box<dyn FnMut(NavigationEvent)>;

/// Keyboard and pointer selection navigation for one control instance.
///
/// The navigator owns only the state the models do not: the anchor, the
/// path-deviation flag, recent selection history, and the live modifier keys.
/// Every operation takes a [`NavContext`] and drives the host's models
/// through it. Operations never fail; a missing model, an empty sequence, or
/// a step past either end leaves everything unchanged.
///
/// Selections made through the navigator are recorded automatically. Hosts
/// that change the selection on their own should report new positions with
/// [`note_added`](Self::note_added), deselections with
/// [`note_deselected`](Self::note_deselected), and wholesale clears with
/// [`on_selection_cleared`](Self::on_selection_cleared).
#[derive(Default)]
pub struct SelectionNavigator {
    pub(crate) anchor: AnchorTracker,
    pub(crate) history: SelectionHistory,
    pub(crate) modifiers: ModifierState,
    observers: Vec<Observer>,
}

impl fmt::Debug for SelectionNavigator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelectionNavigator")
            .field("anchor", &self.anchor)
            .field("history", &self.history)
            .field("modifiers", &self.modifiers)
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl SelectionNavigator {
    /// A navigator with no anchor and no history.
    pub fn new() -> Self {
        Self::default()
    }

    /// The anchor tracker.
    pub fn anchor(&self) -> &AnchorTracker {
        &self.anchor
    }

    /// Explicitly set the anchor.
    pub fn set_anchor(&mut self, pos: Position) {
        self.anchor.set(pos);
    }

    /// Explicitly clear the anchor.
    pub fn clear_anchor(&mut self) {
        self.anchor.clear();
    }

    /// Recently selected positions.
    pub fn history(&self) -> &SelectionHistory {
        &self.history
    }

    /// The modifier state operations currently observe.
    pub fn modifiers(&self) -> ModifierState {
        self.modifiers
    }

    /// Update the modifier state, typically from each key event before it is
    /// dispatched.
    pub fn set_modifiers(&mut self, modifiers: ModifierState) {
        self.modifiers = modifiers;
    }

    /// Register an observer for [`NavigationEvent`]s.
    pub fn on_navigate(&mut self, observer: impl FnMut(NavigationEvent) + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// Record that `pos` became selected.
    ///
    /// Adds it to the history, makes it the anchor if there is none, and in
    /// cell mode flags path deviation when it shares neither row nor column
    /// with the anchor.
    pub fn note_selected(&mut self, pos: Position, cell_mode: bool) {
        self.note_added([pos], cell_mode);
    }

    /// Record one batch of newly selected positions, in selection order.
    ///
    /// Like [`note_selected`](Self::note_selected), except that without an
    /// anchor the newest position of the batch becomes the anchor. Deviation
    /// is checked against the anchor held before the batch.
    pub fn note_added(&mut self, added: impl IntoIterator<Item = Position>, cell_mode: bool) {
        let anchor = self.anchor.explicit();
        let mut newest = None;
        for pos in added {
            self.history.record(pos);
            newest = Some(pos);
            let Some(anchor) = anchor else {
                continue;
            };
            if cell_mode
                && !self.anchor.path_deviated()
                && pos.row != anchor.row
                && pos.column != anchor.column
            {
                log::trace!("selection path deviated from anchor {anchor:?} at {pos:?}");
                self.anchor.mark_path_deviated();
            }
        }
        if let (None, Some(pos)) = (anchor, newest) {
            self.anchor.set(pos);
        }
    }

    /// Record that the host deselected `removed` on its own.
    ///
    /// Drops the anchor if it was among them. A row-only position matches the
    /// anchor on its row alone.
    pub fn note_deselected(&mut self, removed: impl IntoIterator<Item = Position>) {
        let Some(anchor) = self.anchor.explicit() else {
            return;
        };
        let hit = removed.into_iter().any(|pos| {
            pos.row == anchor.row
                && (pos.column.is_none() || anchor.column.is_none() || pos.column == anchor.column)
        });
        if hit {
            log::trace!("anchor {anchor:?} deselected");
            self.anchor.clear();
        }
    }

    /// Forget the anchor and history after the host cleared the selection.
    pub fn on_selection_cleared(&mut self) {
        self.anchor.clear();
        self.history.clear();
    }

    /// Remap the anchor and history after rows were inserted or removed.
    pub fn on_sequence_changed(&mut self, change: &SequenceChange) {
        log::trace!("sequence changed: {change:?}");
        self.anchor.on_sequence_changed(change);
        self.history.on_sequence_changed(change);
    }

    pub(crate) fn emit(&mut self, event: NavigationEvent) {
        log::trace!("navigation event {event:?}");
        for observer in &mut self.observers {
            observer(event);
        }
    }

    pub(crate) fn select(&mut self, m: &mut Models<'_, '_>, pos: Position) {
        m.selection.select(pos);
        self.note_selected(pos, m.cell_mode());
    }

    pub(crate) fn clear_and_select(&mut self, m: &mut Models<'_, '_>, pos: Position) {
        m.selection.clear_and_select(pos);
        self.note_selected(pos, m.cell_mode());
    }

    pub(crate) fn select_range(&mut self, m: &mut Models<'_, '_>, from: Position, to: Position) {
        m.selection.select_range(from, to);
        self.note_added(Position::span(from, to), m.cell_mode());
    }

    /// Deselect rows of `column` lying outside `a..=b`.
    pub(crate) fn clear_outside_range(
        m: &mut Models<'_, '_>,
        a: usize,
        b: usize,
        column: Option<usize>,
    ) {
        let (lo, hi) = (a.min(b), a.max(b));
        for row in m.selection.selected_rows() {
            if row < lo || row > hi {
                m.selection.clear_selection_at(Position { row, column });
            }
        }
    }

    /// Plain move: select only `pos`, focus it, and anchor there.
    pub(crate) fn move_to(&mut self, m: &mut Models<'_, '_>, pos: Position) {
        self.clear_and_select(m, pos);
        m.focus.focus(Some(pos));
        self.anchor.set(pos);
    }
}
