// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cell-oriented navigation for table-like controls.
//!
//! Shift+arrow in cell selection mode consults the anchor, the path-deviation
//! flag, and the recent selection history to tell whether the user is
//! reversing a previous extension (and so should shrink the selection) or
//! moving into new territory.

use crate::navigator::{Direction, models, selection_flags};
use crate::{NavContext, NavigationEvent, Position, SelectionMode, SelectionNavigator};

const fn cell_event(direction: Direction) -> NavigationEvent {
    match direction {
        Direction::Backward => NavigationEvent::SelectLeftCell,
        Direction::Forward => NavigationEvent::SelectRightCell,
    }
}

impl SelectionNavigator {
    /// Select only the cell left of the focus and anchor there. No-op in the
    /// first column or without a focused column.
    pub fn select_left_cell(&mut self, cx: &mut NavContext<'_>) {
        self.select_column_step(cx, Direction::Backward);
    }

    /// Select only the cell right of the focus and anchor there. No-op in the
    /// last column.
    pub fn select_right_cell(&mut self, cx: &mut NavContext<'_>) {
        self.select_column_step(cx, Direction::Forward);
    }

    fn select_column_step(&mut self, cx: &mut NavContext<'_>, direction: Direction) {
        if self.select_cell(cx, None, Some(direction)) {
            self.emit(cell_event(direction));
        }
    }

    /// Plain move by one row and/or one column. Returns `false` when the move
    /// was refused at a boundary.
    pub(crate) fn select_cell(
        &mut self,
        cx: &mut NavContext<'_>,
        rows: Option<Direction>,
        columns: Option<Direction>,
    ) -> bool {
        let Some(mut m) = models(cx, "select_cell") else {
            return false;
        };
        let Some(last) = m.last_row() else {
            return false;
        };
        let focused = m.focus.focused();
        let column = match (columns, focused.and_then(|p| p.column)) {
            (None, column) => column,
            (Some(direction), Some(column)) => {
                let Some(next) = direction.step(column, m.items.column_count()) else {
                    return false;
                };
                Some(next)
            }
            (Some(_), None) => return false,
        };
        let row = match (focused, rows) {
            (None, _) => 0,
            (Some(p), Some(Direction::Forward)) if p.row >= last => return false,
            (Some(p), Some(Direction::Forward)) => p.row + 1,
            (Some(p), Some(Direction::Backward)) if p.row == 0 => return false,
            (Some(p), Some(Direction::Backward)) => (p.row - 1).min(last),
            (Some(p), None) => p.row.min(last),
        };
        self.move_to(&mut m, Position { row, column });
        true
    }

    /// Move focus one column left without changing the selection.
    pub fn focus_left_cell(&mut self, cx: &mut NavContext<'_>) {
        self.focus_column_step(cx, Direction::Backward);
    }

    /// Move focus one column right without changing the selection.
    pub fn focus_right_cell(&mut self, cx: &mut NavContext<'_>) {
        self.focus_column_step(cx, Direction::Forward);
    }

    fn focus_column_step(&mut self, cx: &mut NavContext<'_>, direction: Direction) {
        let Some(mut m) = models(cx, "focus_column_step") else {
            return;
        };
        let columns = m.items.column_count();
        if let Some(pos) = m.focus.focused() {
            if let Some(column) = pos.column.and_then(|c| direction.step(c, columns)) {
                m.focus.focus(Some(pos.with_column(Some(column))));
            }
        }
        self.emit(match direction {
            Direction::Backward => NavigationEvent::FocusLeftCell,
            Direction::Forward => NavigationEvent::FocusRightCell,
        });
    }

    /// Extend the cell selection one column left (shift+left).
    ///
    /// Only meaningful with cell selection enabled; in single selection mode
    /// this is [`select_left_cell`](Self::select_left_cell).
    pub fn also_select_left_cell(&mut self, cx: &mut NavContext<'_>) {
        self.also_select_cell(cx, Direction::Backward);
    }

    /// Extend the cell selection one column right (shift+right).
    pub fn also_select_right_cell(&mut self, cx: &mut NavContext<'_>) {
        self.also_select_cell(cx, Direction::Forward);
    }

    fn also_select_cell(&mut self, cx: &mut NavContext<'_>, direction: Direction) {
        match selection_flags(cx) {
            Some((SelectionMode::Single, true)) => self.select_column_step(cx, direction),
            Some((SelectionMode::Multiple, true)) => {
                self.update_cell_horizontal_selection(cx, direction);
                self.emit(cell_event(direction));
            }
            _ => log::debug!("also_select_cell: cell selection is disabled"),
        }
    }

    pub(crate) fn update_cell_vertical_selection(
        &mut self,
        cx: &mut NavContext<'_>,
        direction: Direction,
    ) {
        let Some(mut m) = models(cx, "update_cell_vertical_selection") else {
            return;
        };
        let Some(focus) = m.focus.focused() else {
            return;
        };
        let Some(row) = direction.step(focus.row, m.items.item_count()) else {
            return;
        };
        let target = focus.with_row(row);
        let deviated = self.anchor.path_deviated();

        if m.selection.is_selected(target) {
            let backtracking = self.history.get(1) == Some(target);
            let clear_row = if deviated && !backtracking {
                row
            } else {
                focus.row
            };
            m.selection.clear_selection_at(focus.with_row(clear_row));
            m.focus.focus(Some(target));
        } else if let Some(anchor) = self.anchor.explicit().filter(|_| !deviated) {
            if m.selection.selected_count() > 1 {
                Self::clear_outside_range(&mut m, anchor.row, row, focus.column);
            }
            for pos in Position::span(focus.with_row(anchor.row), target) {
                if !m.selection.is_selected(pos) {
                    self.select(&mut m, pos);
                }
            }
            m.focus.focus(Some(target));
        } else {
            if !m.selection.is_selected(focus) {
                self.select(&mut m, focus);
            }
            self.select(&mut m, target);
            m.focus.focus(Some(target));
        }
    }

    fn update_cell_horizontal_selection(&mut self, cx: &mut NavContext<'_>, direction: Direction) {
        let Some(mut m) = models(cx, "update_cell_horizontal_selection") else {
            return;
        };
        let Some((focus, column)) = m.focus.focused().and_then(|p| Some((p, p.column?))) else {
            return;
        };
        let (adjacent, at_end) = match direction.step(column, m.items.column_count()) {
            Some(next) => (next, false),
            None => (column, true),
        };
        let target = focus.with_column(Some(adjacent));
        let deviated = self.anchor.path_deviated();

        if m.selection.is_selected(target) {
            if at_end {
                return;
            }
            let backtracking = m.selection.selected_positions().iter().rev().nth(1) == Some(&target);
            let clear_column = if deviated && !backtracking {
                adjacent
            } else {
                column
            };
            m.selection
                .clear_selection_at(focus.with_column(Some(clear_column)));
            m.focus.focus(Some(target));
        } else if let Some(anchor) = self.anchor.explicit().filter(|_| !deviated) {
            let anchor_column = anchor.column.unwrap_or(column);
            for pos in Position::span(focus.with_column(Some(anchor_column)), target) {
                self.select(&mut m, pos);
            }
            m.focus.focus(Some(target));
        } else if !at_end {
            self.select(&mut m, target);
            m.focus.focus(Some(target));
        }
    }

    /// Add the cell left of the focus to the selection and focus it, without
    /// deselecting anything. Cell selection only.
    pub fn discontinuous_select_previous_column(&mut self, cx: &mut NavContext<'_>) {
        self.discontinuous_select_column(cx, Direction::Backward);
    }

    /// Add the cell right of the focus to the selection and focus it, without
    /// deselecting anything. Cell selection only.
    pub fn discontinuous_select_next_column(&mut self, cx: &mut NavContext<'_>) {
        self.discontinuous_select_column(cx, Direction::Forward);
    }

    fn discontinuous_select_column(&mut self, cx: &mut NavContext<'_>, direction: Direction) {
        let Some(mut m) = models(cx, "discontinuous_select_column") else {
            return;
        };
        if !m.cell_mode() {
            return;
        }
        let Some(focus) = m.focus.focused() else {
            return;
        };
        let Some(column) = focus
            .column
            .and_then(|c| direction.step(c, m.items.column_count()))
        else {
            return;
        };
        let target = focus.with_column(Some(column));
        self.select(&mut m, target);
        m.focus.focus(Some(target));
    }
}
