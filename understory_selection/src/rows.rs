// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Row-oriented navigation: moves, focus-only moves, paging, range
//! extension, and discontinuous selection.

use crate::navigator::{Direction, models, selection_flags};
use crate::{NavContext, NavigationEvent, Position, SelectionMode, SelectionNavigator};

const fn row_event(direction: Direction) -> NavigationEvent {
    match direction {
        Direction::Backward => NavigationEvent::SelectPreviousRow,
        Direction::Forward => NavigationEvent::SelectNextRow,
    }
}

const fn focus_event(direction: Direction) -> NavigationEvent {
    match direction {
        Direction::Backward => NavigationEvent::FocusPreviousRow,
        Direction::Forward => NavigationEvent::FocusNextRow,
    }
}

const fn boundary_event(direction: Direction) -> NavigationEvent {
    match direction {
        Direction::Backward => NavigationEvent::MoveToFirstCell,
        Direction::Forward => NavigationEvent::MoveToLastCell,
    }
}

impl SelectionNavigator {
    /// Select only the row above the focus and anchor there.
    ///
    /// No-op on the first row. With nothing focused it selects the first row.
    pub fn select_previous_row(&mut self, cx: &mut NavContext<'_>) {
        self.select_row_step(cx, Direction::Backward);
    }

    /// Select only the row below the focus and anchor there. No-op on the last
    /// row.
    pub fn select_next_row(&mut self, cx: &mut NavContext<'_>) {
        self.select_row_step(cx, Direction::Forward);
    }

    fn select_row_step(&mut self, cx: &mut NavContext<'_>, direction: Direction) {
        if self.select_cell(cx, Some(direction), None) {
            self.emit(row_event(direction));
        }
    }

    /// Select only the first row, keeping the selected column.
    pub fn select_first_row(&mut self, cx: &mut NavContext<'_>) {
        self.select_boundary_row(cx, Direction::Backward);
    }

    /// Select only the last row, keeping the selected column.
    pub fn select_last_row(&mut self, cx: &mut NavContext<'_>) {
        self.select_boundary_row(cx, Direction::Forward);
    }

    fn select_boundary_row(&mut self, cx: &mut NavContext<'_>, direction: Direction) {
        let Some(mut m) = models(cx, "select_boundary_row") else {
            return;
        };
        let Some(last) = m.last_row() else {
            return;
        };
        let column = m
            .selection
            .selected_positions()
            .first()
            .and_then(|p| p.column)
            .or_else(|| m.focus.focused().and_then(|p| p.column));
        let row = match direction {
            Direction::Backward => 0,
            Direction::Forward => last,
        };
        self.move_to(&mut m, Position { row, column });
        self.emit(boundary_event(direction));
    }

    /// Move focus up a row without changing the selection.
    ///
    /// The anchor follows focus unless the shortcut modifier is held and an
    /// anchor already exists.
    pub fn focus_previous_row(&mut self, cx: &mut NavContext<'_>) {
        self.focus_row_step(cx, Direction::Backward);
    }

    /// Move focus down a row without changing the selection.
    pub fn focus_next_row(&mut self, cx: &mut NavContext<'_>) {
        self.focus_row_step(cx, Direction::Forward);
    }

    fn focus_row_step(&mut self, cx: &mut NavContext<'_>, direction: Direction) {
        let Some(mut m) = models(cx, "focus_row_step") else {
            return;
        };
        let before = m.focus.focused();
        if m.cell_mode() {
            let count = m.items.item_count();
            if let Some(pos) = m.focus.focused() {
                if let Some(row) = direction.step(pos.row, count) {
                    m.focus.focus(Some(pos.with_row(row)));
                }
            }
        } else {
            match direction {
                Direction::Backward => m.focus.focus_previous(),
                Direction::Forward => m.focus.focus_next(),
            }
        }
        if m.focus.focused() == before {
            log::debug!("focus stayed at {before:?}");
            return;
        }
        if !self.modifiers.shortcut || !self.anchor.has() {
            if let Some(focused) = m.focus.focused() {
                self.anchor.set(focused);
            }
        }
        self.emit(focus_event(direction));
    }

    /// Focus the first row, keeping the focused column.
    pub fn focus_first_row(&mut self, cx: &mut NavContext<'_>) {
        self.focus_boundary_row(cx, Direction::Backward);
    }

    /// Focus the last row, keeping the focused column.
    pub fn focus_last_row(&mut self, cx: &mut NavContext<'_>) {
        self.focus_boundary_row(cx, Direction::Forward);
    }

    fn focus_boundary_row(&mut self, cx: &mut NavContext<'_>, direction: Direction) {
        let Some(mut m) = models(cx, "focus_boundary_row") else {
            return;
        };
        let Some(last) = m.last_row() else {
            return;
        };
        let column = m.focus.focused().and_then(|p| p.column);
        let row = match direction {
            Direction::Backward => 0,
            Direction::Forward => last,
        };
        m.focus.focus(Some(Position { row, column }));
        self.emit(boundary_event(direction));
    }

    /// Focus the row one page up, as reported by the pager without scrolling.
    pub fn focus_page_up(&mut self, cx: &mut NavContext<'_>) {
        Self::focus_page(cx, Direction::Backward);
    }

    /// Focus the row one page down, as reported by the pager without scrolling.
    pub fn focus_page_down(&mut self, cx: &mut NavContext<'_>) {
        Self::focus_page(cx, Direction::Forward);
    }

    fn focus_page(cx: &mut NavContext<'_>, direction: Direction) {
        let Some(mut m) = models(cx, "focus_page") else {
            return;
        };
        let Some(row) = m.page(direction, true) else {
            return;
        };
        let column = m.focus.focused().and_then(|p| p.column);
        m.focus.focus(Some(Position { row, column }));
    }

    /// Scroll a page up and select only the new lead row.
    ///
    /// Does nothing while the selection is empty.
    pub fn scroll_up(&mut self, cx: &mut NavContext<'_>) {
        self.scroll_page(cx, Direction::Backward);
    }

    /// Scroll a page down and select only the new lead row.
    pub fn scroll_down(&mut self, cx: &mut NavContext<'_>) {
        self.scroll_page(cx, Direction::Forward);
    }

    fn scroll_page(&mut self, cx: &mut NavContext<'_>, direction: Direction) {
        let Some(mut m) = models(cx, "scroll_page") else {
            return;
        };
        let Some(first) = m.selection.selected_positions().first().copied() else {
            return;
        };
        let Some(row) = m.page(direction, false) else {
            return;
        };
        let focused = m.focus.focused();
        let column = first.column.or_else(|| focused.and_then(|p| p.column));
        let target = Position { row, column };
        if focused == Some(target) {
            log::debug!("page scroll stayed at row {row}");
            return;
        }
        self.move_to(&mut m, target);
    }

    /// Extend the selection one row up from the anchor (shift+up).
    ///
    /// Sets the anchor to the focus first if none exists. When more than one
    /// row is selected, rows outside the anchor..focus range are deselected.
    /// In single selection mode this is [`select_previous_row`].
    ///
    /// [`select_previous_row`]: Self::select_previous_row
    pub fn also_select_previous(&mut self, cx: &mut NavContext<'_>) {
        self.also_select_row(cx, Direction::Backward);
    }

    /// Extend the selection one row down from the anchor (shift+down).
    pub fn also_select_next(&mut self, cx: &mut NavContext<'_>) {
        self.also_select_row(cx, Direction::Forward);
    }

    fn also_select_row(&mut self, cx: &mut NavContext<'_>, direction: Direction) {
        match selection_flags(cx) {
            None => return,
            Some((SelectionMode::Single, _)) => {
                self.select_row_step(cx, direction);
                return;
            }
            Some((SelectionMode::Multiple, true)) => {
                self.update_cell_vertical_selection(cx, direction);
            }
            Some((SelectionMode::Multiple, false)) => self.update_row_selection(cx, direction),
        }
        self.emit(row_event(direction));
    }

    fn update_row_selection(&mut self, cx: &mut NavContext<'_>, direction: Direction) {
        let Some(mut m) = models(cx, "update_row_selection") else {
            return;
        };
        let Some(focus) = m.focus.focused() else {
            return;
        };
        let Some(row) = direction.step(focus.row, m.items.item_count()) else {
            log::debug!("range extension stopped at row {}", focus.row);
            return;
        };
        if !self.anchor.has() {
            self.anchor.set(focus);
        }
        let anchor = self.anchor.get(Some(focus)).unwrap_or(focus);
        if m.selection.selected_count() > 1 {
            Self::clear_outside_range(&mut m, anchor.row, row, None);
        }
        self.select_range(&mut m, Position::row(anchor.row), Position::row(row));
        m.focus.focus(Some(focus.with_row(row)));
    }

    /// Replace the selection with the range from the anchor (when shift is
    /// held) or the focus to the first row, and focus the first row.
    ///
    /// With shift held the anchor is re-established at the range start.
    pub fn select_all_to_first_row(&mut self, cx: &mut NavContext<'_>) {
        self.select_all_to_boundary(cx, Direction::Backward);
    }

    /// Replace the selection with the range from the anchor (when shift is
    /// held) or the focus to the last row, and focus the last row.
    pub fn select_all_to_last_row(&mut self, cx: &mut NavContext<'_>) {
        self.select_all_to_boundary(cx, Direction::Forward);
    }

    fn select_all_to_boundary(&mut self, cx: &mut NavContext<'_>, direction: Direction) {
        let Some(mut m) = models(cx, "select_all_to_boundary") else {
            return;
        };
        let (Some(last), Some(focus)) = (m.last_row(), m.focus.focused()) else {
            return;
        };
        let column = focus.column;
        let lead = if self.modifiers.shift {
            self.anchor.get(Some(focus)).map_or(focus.row, |a| a.row)
        } else {
            focus.row
        };
        let lead = lead.min(last);
        let boundary = match direction {
            Direction::Backward => 0,
            Direction::Forward => last,
        };
        let target = Position {
            row: boundary,
            column,
        };

        m.selection.clear_selection();
        if m.is_multiple() {
            let start = m.selection_key(Position { row: lead, column });
            let end = m.selection_key(target);
            self.select_range(&mut m, start, end);
        } else {
            self.select(&mut m, target);
        }
        m.focus.focus(Some(target));

        if self.modifiers.shift {
            self.anchor.set(Position { row: lead, column });
        }
        self.emit(boundary_event(direction));
    }

    /// Scroll a page up and select from the lead row (the anchor when shift
    /// is held) to the new lead row, inclusive.
    pub fn select_all_page_up(&mut self, cx: &mut NavContext<'_>) {
        self.select_all_page(cx, Direction::Backward);
    }

    /// Scroll a page down and select from the lead row to the new lead row.
    pub fn select_all_page_down(&mut self, cx: &mut NavContext<'_>) {
        self.select_all_page(cx, Direction::Forward);
    }

    fn select_all_page(&mut self, cx: &mut NavContext<'_>, direction: Direction) {
        let Some(mut m) = models(cx, "select_all_page") else {
            return;
        };
        let Some(focus) = m.focus.focused() else {
            return;
        };
        let column = focus.column;
        let mut lead = focus.row;
        if self.modifiers.shift {
            lead = self.anchor.get(Some(focus)).map_or(lead, |a| a.row);
            self.anchor.set(Position { row: lead, column });
        }
        let Some(row) = m.page(direction, false) else {
            return;
        };
        let target = Position { row, column };

        if m.is_multiple() {
            m.selection.clear_selection();
            let start = m.selection_key(Position { row: lead, column });
            let end = m.selection_key(target);
            self.select_range(&mut m, start, end);
        } else {
            self.select(&mut m, target);
        }
        m.focus.focus(Some(target));
    }

    /// Replace the selection with the range from the anchor to the focus
    /// (shift+space). With `move_anchor` the anchor then moves to the focus.
    pub fn select_all_to_focus(&mut self, cx: &mut NavContext<'_>, move_anchor: bool) {
        let Some(mut m) = models(cx, "select_all_to_focus") else {
            return;
        };
        let Some(focus) = m.focus.focused() else {
            return;
        };
        let anchor = self.anchor.get(Some(focus)).unwrap_or(focus);
        m.selection.clear_selection();
        let (start, end) = (m.selection_key(anchor), m.selection_key(focus));
        self.select_range(&mut m, start, end);
        self.anchor.set(if move_anchor { focus } else { anchor });
    }

    /// Select every item.
    pub fn select_all(&mut self, cx: &mut NavContext<'_>) {
        let Some(mut m) = models(cx, "select_all") else {
            return;
        };
        m.selection
            .select_all(m.items.item_count(), m.items.column_count());
    }

    /// Deselect everything and forget the anchor and history.
    pub fn clear_selection(&mut self, cx: &mut NavContext<'_>) {
        if let Some(selection) = cx.selection.as_deref_mut() {
            selection.clear_selection();
        }
        self.on_selection_cleared();
    }

    /// Toggle whether the focused item is selected (ctrl+space), keeping
    /// focus on it and anchoring there.
    pub fn toggle_focus_owner_selection(&mut self, cx: &mut NavContext<'_>) {
        let Some(mut m) = models(cx, "toggle_focus_owner_selection") else {
            return;
        };
        let Some(focus) = m.focus.focused() else {
            return;
        };
        if m.selection.is_selected(focus) {
            m.selection.clear_selection_at(focus);
            m.focus.focus(Some(focus));
        } else {
            self.select(&mut m, focus);
        }
        self.anchor.set(focus);
    }

    /// Extend the selection up a row without deselecting anything
    /// (shortcut+shift+up).
    ///
    /// The range starts at the anchor when shift is held and at the focus
    /// otherwise. Outside multiple selection mode this is
    /// [`select_previous_row`](Self::select_previous_row).
    pub fn discontinuous_select_previous_row(&mut self, cx: &mut NavContext<'_>) {
        self.discontinuous_select_row(cx, Direction::Backward);
    }

    /// Extend the selection down a row without deselecting anything.
    pub fn discontinuous_select_next_row(&mut self, cx: &mut NavContext<'_>) {
        self.discontinuous_select_row(cx, Direction::Forward);
    }

    fn discontinuous_select_row(&mut self, cx: &mut NavContext<'_>, direction: Direction) {
        match selection_flags(cx) {
            None => return,
            Some((SelectionMode::Single, _)) => {
                self.select_row_step(cx, direction);
                return;
            }
            Some((SelectionMode::Multiple, _)) => {}
        }
        let Some(mut m) = models(cx, "discontinuous_select_row") else {
            return;
        };
        let Some(focus) = m.focus.focused() else {
            return;
        };
        let Some(row) = direction.step(focus.row, m.items.item_count()) else {
            return;
        };
        let start = if self.modifiers.shift {
            self.anchor.get(Some(focus)).map_or(focus.row, |a| a.row)
        } else {
            focus.row
        };
        let target = focus.with_row(row);
        let from = m.selection_key(focus.with_row(start));
        let to = m.selection_key(target);
        self.select_range(&mut m, from, to);
        m.focus.focus(Some(target));
        self.emit(focus_event(direction));
    }

    /// Scroll a page up and add the range from the anchor to the new lead row
    /// without deselecting anything.
    pub fn discontinuous_select_page_up(&mut self, cx: &mut NavContext<'_>) {
        self.discontinuous_select_page(cx, Direction::Backward);
    }

    /// Scroll a page down and add the range from the anchor to the new lead
    /// row without deselecting anything.
    pub fn discontinuous_select_page_down(&mut self, cx: &mut NavContext<'_>) {
        self.discontinuous_select_page(cx, Direction::Forward);
    }

    fn discontinuous_select_page(&mut self, cx: &mut NavContext<'_>, direction: Direction) {
        let Some(mut m) = models(cx, "discontinuous_select_page") else {
            return;
        };
        let Some(focus) = m.focus.focused() else {
            return;
        };
        let start = self.anchor.explicit().map_or(focus.row, |a| a.row);
        let Some(row) = m.page(direction, false) else {
            return;
        };
        let target = focus.with_row(row);
        let from = m.selection_key(focus.with_row(start));
        let to = m.selection_key(target);
        self.select_range(&mut m, from, to);
        m.focus.focus(Some(target));
    }

    /// Add every row from the focus to the first row and focus the first row.
    pub fn discontinuous_select_all_to_first_row(&mut self, cx: &mut NavContext<'_>) {
        self.discontinuous_select_all_to_boundary(cx, Direction::Backward);
    }

    /// Add every row from the focus to the last row and focus the last row.
    pub fn discontinuous_select_all_to_last_row(&mut self, cx: &mut NavContext<'_>) {
        self.discontinuous_select_all_to_boundary(cx, Direction::Forward);
    }

    fn discontinuous_select_all_to_boundary(
        &mut self,
        cx: &mut NavContext<'_>,
        direction: Direction,
    ) {
        let Some(mut m) = models(cx, "discontinuous_select_all_to_boundary") else {
            return;
        };
        let (Some(last), Some(focus)) = (m.last_row(), m.focus.focused()) else {
            return;
        };
        let boundary = match direction {
            Direction::Backward => 0,
            Direction::Forward => last,
        };
        let target = focus.with_row(boundary);
        let from = m.selection_key(focus);
        let to = m.selection_key(target);
        self.select_range(&mut m, from, to);
        m.focus.focus(Some(target));
        self.emit(boundary_event(direction));
    }
}
