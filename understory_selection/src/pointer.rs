// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer selection and activation.

use crate::navigator::models;
use crate::{ModifierState, NavContext, Position, SelectionNavigator};

impl SelectionNavigator {
    /// Select the focused item, anchor there, and return it so the host can
    /// start editing. Returns `None` when nothing is focused.
    pub fn activate(&mut self, cx: &mut NavContext<'_>) -> Option<Position> {
        let mut m = models(cx, "activate")?;
        let focus = m.focus.focused()?;
        self.select(&mut m, focus);
        self.anchor.set(focus);
        Some(focus)
    }

    /// Handle a primary-button press on `pos`.
    ///
    /// - plain: select only `pos` and anchor there;
    /// - shortcut: toggle `pos` and anchor there;
    /// - shift: select from the anchor to `pos`, keeping the anchor;
    /// - shift+shortcut: as shift, without clearing the existing selection.
    ///
    /// Returns the pressed position when an unmodified multi-click asks for
    /// activation. Presses outside the item range are ignored.
    pub fn press(
        &mut self,
        cx: &mut NavContext<'_>,
        pos: Position,
        modifiers: ModifierState,
        click_count: u32,
    ) -> Option<Position> {
        let mut m = models(cx, "press")?;
        if pos.row >= m.items.item_count() {
            log::debug!("press outside the item range at row {}", pos.row);
            return None;
        }

        if modifiers.shift && m.is_multiple() {
            let focus = m.focus.focused();
            let anchor = self.anchor.get(focus).unwrap_or(pos);
            if !modifiers.shortcut {
                m.selection.clear_selection();
            }
            if !self.anchor.has() {
                self.anchor.set(anchor);
            }
            let (from, to) = (m.selection_key(anchor), m.selection_key(pos));
            self.select_range(&mut m, from, to);
            m.focus.focus(Some(pos));
        } else if modifiers.shortcut {
            let key = m.selection_key(pos);
            if m.selection.is_selected(key) {
                m.selection.clear_selection_at(key);
            } else {
                self.select(&mut m, key);
            }
            m.focus.focus(Some(pos));
            self.anchor.set(pos);
        } else {
            self.move_to(&mut m, pos);
        }

        (click_count >= 2 && modifiers == ModifierState::NONE).then_some(pos)
    }
}
