// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Action tables mapping the default action names onto navigator operations.
//!
//! Each table is one dispatch layer. [`ControlKind::actions`] stacks them
//! from most to least specific for a given kind of control.

use understory_keymap::{ActionDispatcher, ActionTable};
use understory_selection::{SelectionModel, SelectionNavigator};

use crate::actions::*;
use crate::{ControlHost, ControlKind, Traversal};

/// An action layer driving a [`SelectionNavigator`] on behalf of a host `H`.
pub type NavActions<H> = ActionTable<SelectionNavigator, H>;

/// Wrap a navigator operation taking only a context as a handler.
macro_rules! nav {
    ($method:ident) => {
        |nav: &mut SelectionNavigator, host: &mut H| nav.$method(&mut host.nav_context())
    };
}

fn activate<H: ControlHost>(nav: &mut SelectionNavigator, host: &mut H) {
    let activated = nav.activate(&mut host.nav_context());
    if let Some(pos) = activated {
        host.edit(pos);
    }
}

fn cell_selection<H: ControlHost>(host: &mut H) -> bool {
    host.nav_context()
        .selection
        .as_deref()
        .is_some_and(SelectionModel::is_cell_selection_enabled)
}

/// Row movement, range, paging, and activation actions common to every kind.
pub fn navigation_actions<H: ControlHost>() -> NavActions<H> {
    NavActions::<H>::new("navigation")
        .with(SELECT_PREVIOUS_ROW, nav!(select_previous_row))
        .with(SELECT_NEXT_ROW, nav!(select_next_row))
        .with(SELECT_FIRST_ROW, nav!(select_first_row))
        .with(SELECT_LAST_ROW, nav!(select_last_row))
        .with(SCROLL_UP, nav!(scroll_up))
        .with(SCROLL_DOWN, nav!(scroll_down))
        .with(ALSO_SELECT_PREVIOUS, nav!(also_select_previous))
        .with(ALSO_SELECT_NEXT, nav!(also_select_next))
        .with(SELECT_ALL_TO_FIRST_ROW, nav!(select_all_to_first_row))
        .with(SELECT_ALL_TO_LAST_ROW, nav!(select_all_to_last_row))
        .with(SELECT_ALL_PAGE_UP, nav!(select_all_page_up))
        .with(SELECT_ALL_PAGE_DOWN, nav!(select_all_page_down))
        .with(SELECT_ALL_TO_FOCUS, |nav, host| {
            nav.select_all_to_focus(&mut host.nav_context(), false);
        })
        .with(SELECT_ALL_TO_FOCUS_AND_SET_ANCHOR, |nav, host| {
            nav.select_all_to_focus(&mut host.nav_context(), true);
        })
        .with(SELECT_ALL, nav!(select_all))
        .with(CLEAR_SELECTION, nav!(clear_selection))
        .with(TOGGLE_FOCUS_OWNER_SELECTION, nav!(toggle_focus_owner_selection))
        .with(FOCUS_PREVIOUS_ROW, nav!(focus_previous_row))
        .with(FOCUS_NEXT_ROW, nav!(focus_next_row))
        .with(FOCUS_FIRST_ROW, nav!(focus_first_row))
        .with(FOCUS_LAST_ROW, nav!(focus_last_row))
        .with(FOCUS_PAGE_UP, nav!(focus_page_up))
        .with(FOCUS_PAGE_DOWN, nav!(focus_page_down))
        .with(
            DISCONTINUOUS_SELECT_PREVIOUS_ROW,
            nav!(discontinuous_select_previous_row),
        )
        .with(DISCONTINUOUS_SELECT_NEXT_ROW, nav!(discontinuous_select_next_row))
        .with(DISCONTINUOUS_SELECT_PAGE_UP, nav!(discontinuous_select_page_up))
        .with(
            DISCONTINUOUS_SELECT_PAGE_DOWN,
            nav!(discontinuous_select_page_down),
        )
        .with(
            DISCONTINUOUS_SELECT_ALL_TO_FIRST_ROW,
            nav!(discontinuous_select_all_to_first_row),
        )
        .with(
            DISCONTINUOUS_SELECT_ALL_TO_LAST_ROW,
            nav!(discontinuous_select_all_to_last_row),
        )
        .with(ACTIVATE, activate::<H>)
        .with(CANCEL_EDIT, |_, host| host.cancel_edit())
}

/// Column movement and extension for tables.
pub fn cell_actions<H: ControlHost>() -> NavActions<H> {
    NavActions::<H>::new("cells")
        .with(SELECT_LEFT_CELL, nav!(select_left_cell))
        .with(SELECT_RIGHT_CELL, nav!(select_right_cell))
        .with(ALSO_SELECT_LEFT_CELL, nav!(also_select_left_cell))
        .with(ALSO_SELECT_RIGHT_CELL, nav!(also_select_right_cell))
        .with(FOCUS_LEFT_CELL, nav!(focus_left_cell))
        .with(FOCUS_RIGHT_CELL, nav!(focus_right_cell))
        .with(
            DISCONTINUOUS_SELECT_PREVIOUS_COLUMN,
            nav!(discontinuous_select_previous_column),
        )
        .with(
            DISCONTINUOUS_SELECT_NEXT_COLUMN,
            nav!(discontinuous_select_next_column),
        )
}

/// Left/right item movement for horizontal lists, where items are rows laid
/// out along the horizontal axis.
pub fn item_actions<H: ControlHost>() -> NavActions<H> {
    NavActions::<H>::new("items")
        .with(SELECT_LEFT_ITEM, nav!(select_previous_row))
        .with(SELECT_RIGHT_ITEM, nav!(select_next_row))
        .with(ALSO_SELECT_LEFT_ITEM, nav!(also_select_previous))
        .with(ALSO_SELECT_RIGHT_ITEM, nav!(also_select_next))
        .with(FOCUS_LEFT_ITEM, nav!(focus_previous_row))
        .with(FOCUS_RIGHT_ITEM, nav!(focus_next_row))
        .with(
            DISCONTINUOUS_SELECT_LEFT_ITEM,
            nav!(discontinuous_select_previous_row),
        )
        .with(
            DISCONTINUOUS_SELECT_RIGHT_ITEM,
            nav!(discontinuous_select_next_row),
        )
}

/// Expand and collapse for trees.
pub fn tree_actions<H: ControlHost>() -> NavActions<H> {
    NavActions::<H>::new("tree")
        .with(EXPAND_ROW, nav!(expand_row))
        .with(COLLAPSE_ROW, nav!(collapse_row))
        .with(EXPAND_ALL, nav!(expand_all))
}

/// Tree tables use left/right for columns in cell selection mode and for
/// collapse/expand otherwise.
pub fn tree_table_actions<H: ControlHost>() -> NavActions<H> {
    NavActions::<H>::new("tree_table")
        .with(SELECT_LEFT_CELL, |nav, host| {
            if cell_selection(host) {
                nav.select_left_cell(&mut host.nav_context());
            } else {
                nav.collapse_row(&mut host.nav_context());
            }
        })
        .with(SELECT_RIGHT_CELL, |nav, host| {
            if cell_selection(host) {
                nav.select_right_cell(&mut host.nav_context());
            } else {
                nav.expand_row(&mut host.nav_context());
            }
        })
}

/// Focus traversal requests forwarded to the host.
pub fn traversal_actions<H: ControlHost>() -> NavActions<H> {
    NavActions::<H>::new("traversal")
        .with(TRAVERSE_NEXT, |_, host| host.traverse(Traversal::Next))
        .with(TRAVERSE_PREVIOUS, |_, host| host.traverse(Traversal::Previous))
        .with(TRAVERSE_UP, |_, host| host.traverse(Traversal::Up))
        .with(TRAVERSE_DOWN, |_, host| host.traverse(Traversal::Down))
        .with(TRAVERSE_LEFT, |_, host| host.traverse(Traversal::Left))
        .with(TRAVERSE_RIGHT, |_, host| host.traverse(Traversal::Right))
}

impl ControlKind {
    /// The default dispatch layers for this kind of control.
    pub fn actions<H: ControlHost>(self) -> ActionDispatcher<SelectionNavigator, H> {
        let layers = match self {
            Self::List => ActionDispatcher::new().with_fallback(item_actions()),
            Self::Table => ActionDispatcher::new().with_fallback(cell_actions()),
            Self::Tree => ActionDispatcher::new().with_fallback(tree_actions()),
            Self::TreeTable => ActionDispatcher::new()
                .with_fallback(tree_table_actions())
                .with_fallback(tree_actions())
                .with_fallback(cell_actions()),
        };
        layers
            .with_fallback(navigation_actions())
            .with_fallback(traversal_actions())
    }
}
