// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Collaborator interfaces implemented by the hosting toolkit.
//!
//! The navigator never owns focus or selection state. It drives these traits
//! through a [`NavContext`] assembled by the host for the duration of a single
//! event.

use alloc::vec::Vec;
use core::fmt;

use crate::{Position, SelectionMode};

/// Keyboard focus within a control.
pub trait FocusModel {
    /// The focused position, or `None` when nothing is focused.
    fn focused(&self) -> Option<Position>;

    /// Focus `pos`, or clear focus with `None`.
    fn focus(&mut self, pos: Option<Position>);

    /// Move focus up one row, keeping the column. No-op on the first row.
    fn focus_previous(&mut self) {
        if let Some(pos) = self.focused().filter(|p| p.row > 0) {
            self.focus(Some(pos.with_row(pos.row - 1)));
        }
    }

    /// Move focus down one row, keeping the column. No-op on the last row.
    fn focus_next(&mut self);
}

/// Selected items within a control.
///
/// Implementations that do not support cell selection may treat every
/// position as its row.
pub trait SelectionModel {
    /// Single or multiple selection.
    fn selection_mode(&self) -> SelectionMode;

    /// Whether individual cells, rather than whole rows, are selected.
    fn is_cell_selection_enabled(&self) -> bool {
        false
    }

    /// Add `pos` to the selection (replacing it in single mode) and make it
    /// the lead.
    fn select(&mut self, pos: Position);

    /// Replace the selection with `pos`.
    fn clear_and_select(&mut self, pos: Position) {
        self.clear_selection();
        self.select(pos);
    }

    /// Deselect everything.
    fn clear_selection(&mut self);

    /// Deselect `pos`.
    fn clear_selection_at(&mut self, pos: Position);

    /// Select every position spanned by `from` and `to`, inclusive, in the
    /// order given by [`Position::span`] so that `to` becomes the lead.
    fn select_range(&mut self, from: Position, to: Position) {
        for pos in Position::span(from, to) {
            self.select(pos);
        }
    }

    /// Select every row (or every cell) of a control with the given extent.
    fn select_all(&mut self, item_count: usize, column_count: usize) {
        let (Some(last_row), SelectionMode::Multiple) =
            (item_count.checked_sub(1), self.selection_mode())
        else {
            return;
        };
        match column_count.checked_sub(1) {
            Some(last_col) if self.is_cell_selection_enabled() => {
                self.select_range(Position::cell(0, 0), Position::cell(last_row, last_col));
            }
            _ => self.select_range(Position::row(0), Position::row(last_row)),
        }
    }

    /// Returns `true` if `pos` is selected.
    fn is_selected(&self, pos: Position) -> bool;

    /// Selected positions in the order they were selected.
    fn selected_positions(&self) -> Vec<Position>;

    /// Distinct selected rows, ascending.
    fn selected_rows(&self) -> Vec<usize> {
        let mut rows: Vec<usize> = self.selected_positions().iter().map(|p| p.row).collect();
        rows.sort_unstable();
        rows.dedup();
        rows
    }

    /// Number of selected positions.
    fn selected_count(&self) -> usize {
        self.selected_positions().len()
    }

    /// The most recently selected position still in the selection.
    fn lead(&self) -> Option<Position> {
        self.selected_positions().last().copied()
    }
}

/// Extent of the item sequence.
pub trait ItemSource {
    /// Number of rows.
    fn item_count(&self) -> usize;

    /// Number of visible leaf columns; zero for row-only controls.
    fn column_count(&self) -> usize {
        0
    }
}

/// A fixed item extent.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct ItemCount {
    /// Number of rows.
    pub rows: usize,
    /// Number of columns; zero for row-only controls.
    pub columns: usize,
}

impl ItemCount {
    /// A row-only extent.
    pub const fn rows(rows: usize) -> Self {
        Self { rows, columns: 0 }
    }

    /// A table extent.
    pub const fn grid(rows: usize, columns: usize) -> Self {
        Self { rows, columns }
    }
}

impl ItemSource for ItemCount {
    fn item_count(&self) -> usize {
        self.rows
    }

    fn column_count(&self) -> usize {
        self.columns
    }
}

/// Page-wise scrolling supplied by the visual layer.
///
/// With `peek` set the scroller only reports where a page step would land;
/// otherwise it scrolls. Either way it returns the row that becomes the lead,
/// or `None` if the step is not possible.
pub trait PageScroller {
    /// One page toward the start.
    fn page_up(&mut self, peek: bool) -> Option<usize>;

    /// One page toward the end.
    fn page_down(&mut self, peek: bool) -> Option<usize>;
}

/// Hierarchy queries and mutations for tree-like controls, by row.
pub trait TreeItems {
    /// Returns `true` if the item at `row` cannot have children.
    fn is_leaf(&self, row: usize) -> bool;

    /// Returns `true` if the item at `row` is expanded.
    fn is_expanded(&self, row: usize) -> bool;

    /// Expand or collapse the item at `row`.
    ///
    /// The host reports the resulting row insertions or removals through
    /// [`SelectionNavigator::on_sequence_changed`](crate::SelectionNavigator::on_sequence_changed).
    fn set_expanded(&mut self, row: usize, expanded: bool);

    /// Row of the parent item, or `None` for a top-level item.
    fn parent_row(&self, row: usize) -> Option<usize>;

    /// Expand every item.
    fn expand_all(&mut self);
}

/// The collaborators available while handling one event.
///
/// Focus and selection are optional; operations that need a missing model
/// do nothing.
pub struct NavContext<'a> {
    /// Focus model.
    pub focus: Option<&'a mut dyn FocusModel>,
    /// Selection model.
    pub selection: Option<&'a mut dyn SelectionModel>,
    /// Item extent.
    pub items: &'a dyn ItemSource,
    /// Page scroller, if the visual layer supports paging.
    pub pager: Option<&'a mut dyn PageScroller>,
    /// Hierarchy, for tree-like controls.
    pub tree: Option<&'a mut dyn TreeItems>,
}

impl<'a> NavContext<'a> {
    /// A context with focus and selection models.
    pub fn new(
        focus: &'a mut dyn FocusModel,
        selection: &'a mut dyn SelectionModel,
        items: &'a dyn ItemSource,
    ) -> Self {
        Self {
            focus: Some(focus),
            selection: Some(selection),
            items,
            pager: None,
            tree: None,
        }
    }

    /// A context with no focus or selection model.
    pub fn detached(items: &'a dyn ItemSource) -> Self {
        Self {
            focus: None,
            selection: None,
            items,
            pager: None,
            tree: None,
        }
    }

    /// Attach a page scroller.
    #[must_use]
    pub fn with_pager(mut self, pager: &'a mut dyn PageScroller) -> Self {
        self.pager = Some(pager);
        self
    }

    /// Attach a tree hierarchy.
    #[must_use]
    pub fn with_tree(mut self, tree: &'a mut dyn TreeItems) -> Self {
        self.tree = Some(tree);
        self
    }
}

impl fmt::Debug for NavContext<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NavContext")
            .field("focus", &self.focus.as_ref().map(|m| m.focused()))
            .field("selection", &self.selection.as_ref().map(|m| m.selected_count()))
            .field("items", &self.items.item_count())
            .field("pager", &self.pager.is_some())
            .field("tree", &self.tree.is_some())
            .finish()
    }
}

/// A control that can lend out its collaborators for one event.
pub trait SelectionHost {
    /// Borrow the focus, selection, and item models.
    fn nav_context(&mut self) -> NavContext<'_>;
}
