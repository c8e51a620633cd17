// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Expand and collapse for tree-like controls.
//!
//! These need a [`TreeItems`](crate::TreeItems) in the context and do
//! nothing without one.

use crate::navigator::models;
use crate::{NavContext, NavigationEvent, SelectionNavigator};

impl SelectionNavigator {
    /// Expand the focused item, or move to its first child if it is already
    /// expanded. No-op on a leaf.
    pub fn expand_row(&mut self, cx: &mut NavContext<'_>) {
        let Some(mut m) = models(cx, "expand_row") else {
            return;
        };
        let Some(focus) = m.focus.focused() else {
            return;
        };
        let row = focus.row;
        let Some(tree) = m.tree.as_deref_mut() else {
            log::debug!("expand_row: no tree");
            return;
        };
        if tree.is_leaf(row) {
            return;
        }
        if !tree.is_expanded(row) {
            tree.set_expanded(row, true);
            return;
        }
        if row + 1 < m.items.item_count() {
            self.move_to(&mut m, focus.with_row(row + 1));
            self.emit(NavigationEvent::SelectNextRow);
        }
    }

    /// Collapse the focused item, or move to its parent if it is a leaf or
    /// already collapsed.
    pub fn collapse_row(&mut self, cx: &mut NavContext<'_>) {
        let Some(mut m) = models(cx, "collapse_row") else {
            return;
        };
        let Some(focus) = m.focus.focused() else {
            return;
        };
        let row = focus.row;
        let Some(tree) = m.tree.as_deref_mut() else {
            log::debug!("collapse_row: no tree");
            return;
        };
        if !tree.is_leaf(row) && tree.is_expanded(row) {
            tree.set_expanded(row, false);
            return;
        }
        if let Some(parent) = tree.parent_row(row) {
            self.move_to(&mut m, focus.with_row(parent));
            self.emit(NavigationEvent::SelectPreviousRow);
        }
    }

    /// Expand every item in the tree.
    pub fn expand_all(&mut self, cx: &mut NavContext<'_>) {
        match cx.tree.as_deref_mut() {
            Some(tree) => tree.expand_all(),
            None => log::debug!("expand_all: no tree"),
        }
    }
}
