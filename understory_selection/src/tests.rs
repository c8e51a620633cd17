// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! End-to-end navigation scenarios over the basic models.

use alloc::rc::Rc;
use alloc::vec;
use alloc::vec::Vec;
use core::cell::RefCell;

use crate::{
    BasicFocus, BasicSelection, FocusModel, ItemCount, ModifierState, NavContext, NavigationEvent,
    PageScroller, Position, SelectionMode, SelectionModel, SelectionNavigator, SequenceChange,
    TreeItems,
};

const SHIFT: ModifierState = ModifierState::new(true, false);
const SHORTCUT: ModifierState = ModifierState::new(false, true);

struct Fixture {
    items: ItemCount,
    focus: BasicFocus,
    selection: BasicSelection,
    nav: SelectionNavigator,
    events: Rc<RefCell<Vec<NavigationEvent>>>,
}

impl Fixture {
    fn rows(count: usize, mode: SelectionMode) -> Self {
        Self::build(ItemCount::rows(count), BasicSelection::new(mode))
    }

    fn grid(rows: usize, columns: usize) -> Self {
        Self::build(
            ItemCount::grid(rows, columns),
            BasicSelection::new(SelectionMode::Multiple).with_cell_selection(true),
        )
    }

    fn build(items: ItemCount, selection: BasicSelection) -> Self {
        let events = Rc::new(RefCell::new(Vec::new()));
        let mut nav = SelectionNavigator::new();
        let sink = events.clone();
        nav.on_navigate(move |event| sink.borrow_mut().push(event));
        Self {
            items,
            focus: BasicFocus::new(items.rows),
            selection,
            nav,
            events,
        }
    }

    fn focused_at(mut self, pos: Position) -> Self {
        self.focus.focus(Some(pos));
        self
    }

    fn run(&mut self, op: impl FnOnce(&mut SelectionNavigator, &mut NavContext<'_>)) {
        let mut cx = NavContext::new(&mut self.focus, &mut self.selection, &self.items);
        op(&mut self.nav, &mut cx);
    }

    fn rows_selected(&self) -> Vec<usize> {
        self.selection.selected_rows()
    }

    fn focused_row(&self) -> Option<usize> {
        self.focus.focused().map(|p| p.row)
    }

    fn take_events(&self) -> Vec<NavigationEvent> {
        self.events.borrow_mut().drain(..).collect()
    }
}

#[derive(Default)]
struct StubPager {
    up: Option<usize>,
    down: Option<usize>,
    peeks: usize,
    commits: usize,
}

impl PageScroller for StubPager {
    fn page_up(&mut self, peek: bool) -> Option<usize> {
        self.count(peek);
        self.up
    }

    fn page_down(&mut self, peek: bool) -> Option<usize> {
        self.count(peek);
        self.down
    }
}

impl StubPager {
    fn count(&mut self, peek: bool) {
        if peek {
            self.peeks += 1;
        } else {
            self.commits += 1;
        }
    }
}

/// Row 0 is a branch holding rows 1 and 2; row 3 is a top-level leaf.
struct StubTree {
    expanded: Vec<bool>,
    expanded_all: bool,
}

impl StubTree {
    fn new() -> Self {
        Self {
            expanded: vec![false; 4],
            expanded_all: false,
        }
    }
}

impl TreeItems for StubTree {
    fn is_leaf(&self, row: usize) -> bool {
        row != 0
    }

    fn is_expanded(&self, row: usize) -> bool {
        self.expanded.get(row).copied().unwrap_or(false)
    }

    fn set_expanded(&mut self, row: usize, expanded: bool) {
        if let Some(slot) = self.expanded.get_mut(row) {
            *slot = expanded;
        }
    }

    fn parent_row(&self, row: usize) -> Option<usize> {
        matches!(row, 1 | 2).then_some(0)
    }

    fn expand_all(&mut self) {
        self.expanded_all = true;
    }
}

#[test]
fn anchor_survives_range_extension_and_moves_with_plain_navigation() {
    let mut f = Fixture::rows(10, SelectionMode::Multiple).focused_at(Position::row(5));
    f.nav.set_anchor(Position::row(5));
    f.nav.set_modifiers(SHIFT);
    for _ in 0..3 {
        f.run(|nav, cx| nav.also_select_next(cx));
        assert_eq!(f.nav.anchor().explicit(), Some(Position::row(5)));
    }

    f.nav.set_modifiers(ModifierState::NONE);
    f.run(|nav, cx| nav.select_next_row(cx));
    assert_eq!(f.nav.anchor().explicit(), Some(Position::row(9)));
    assert_eq!(f.rows_selected(), [9]);
}

#[test]
fn range_extension_ends_on_the_new_focus() {
    let mut f = Fixture::rows(10, SelectionMode::Multiple).focused_at(Position::row(5));
    f.nav.set_anchor(Position::row(5));
    for _ in 0..3 {
        f.run(|nav, cx| nav.also_select_next(cx));
    }
    assert_eq!(f.rows_selected(), [5, 6, 7, 8]);
    assert_eq!(f.selection.lead(), Some(Position::row(8)));
    assert_eq!(f.focused_row(), Some(8));

    let mut f = Fixture::rows(10, SelectionMode::Multiple).focused_at(Position::row(5));
    f.nav.set_anchor(Position::row(5));
    for _ in 0..2 {
        f.run(|nav, cx| nav.also_select_previous(cx));
    }
    assert_eq!(f.rows_selected(), [3, 4, 5]);
    assert_eq!(f.selection.lead(), Some(Position::row(3)));
}

#[test]
fn reversing_a_range_extension_shrinks_it() {
    let mut f = Fixture::rows(10, SelectionMode::Multiple).focused_at(Position::row(4));
    f.run(|nav, cx| nav.also_select_next(cx));
    f.run(|nav, cx| nav.also_select_next(cx));
    f.run(|nav, cx| nav.also_select_previous(cx));
    assert_eq!(f.rows_selected(), [4, 5]);
    f.run(|nav, cx| nav.also_select_previous(cx));
    f.run(|nav, cx| nav.also_select_previous(cx));
    assert_eq!(f.rows_selected(), [3, 4]);
    assert_eq!(f.nav.anchor().explicit(), Some(Position::row(4)));
}

#[test]
fn moving_past_the_last_row_changes_nothing() {
    let mut f = Fixture::rows(4, SelectionMode::Single).focused_at(Position::row(3));
    f.selection.select(Position::row(3));
    f.run(|nav, cx| nav.select_next_row(cx));
    assert_eq!(f.focused_row(), Some(3));
    assert_eq!(f.rows_selected(), [3]);
    assert!(f.take_events().is_empty());
}

#[test]
fn moving_up_from_the_first_row_changes_nothing() {
    let mut f = Fixture::rows(6, SelectionMode::Multiple).focused_at(Position::row(0));
    f.selection.select(Position::row(0));
    f.selection.select(Position::row(3));
    f.nav.set_anchor(Position::row(3));
    f.run(|nav, cx| nav.select_previous_row(cx));
    assert_eq!(f.rows_selected(), [0, 3]);
    assert_eq!(f.focused_row(), Some(0));
    assert_eq!(f.nav.anchor().explicit(), Some(Position::row(3)));
    assert!(f.take_events().is_empty());
}

#[test]
fn range_extension_restarts_after_the_host_deselects_the_anchor() {
    let mut f = Fixture::rows(6, SelectionMode::Multiple).focused_at(Position::row(2));
    f.nav.set_modifiers(SHIFT);
    f.run(|nav, cx| nav.also_select_next(cx));
    f.run(|nav, cx| nav.also_select_next(cx));
    assert_eq!(f.rows_selected(), [2, 3, 4]);

    f.selection.clear_selection_at(Position::row(2));
    f.nav.note_deselected([Position::row(2)]);
    assert!(!f.nav.anchor().has());

    f.run(|nav, cx| nav.also_select_next(cx));
    assert_eq!(f.rows_selected(), [4, 5]);
    assert_eq!(f.nav.anchor().explicit(), Some(Position::row(4)));
}

#[test]
fn focus_moves_at_the_ends_change_nothing() {
    let mut f = Fixture::rows(4, SelectionMode::Multiple).focused_at(Position::row(3));
    f.selection.select(Position::row(1));
    f.nav.set_anchor(Position::row(1));
    f.run(|nav, cx| nav.focus_next_row(cx));
    assert_eq!(f.focused_row(), Some(3));
    assert_eq!(f.nav.anchor().explicit(), Some(Position::row(1)));
    assert!(f.take_events().is_empty());

    let mut pager = StubPager {
        down: Some(3),
        ..StubPager::default()
    };
    let mut cx =
        NavContext::new(&mut f.focus, &mut f.selection, &f.items).with_pager(&mut pager);
    f.nav.scroll_down(&mut cx);
    assert_eq!(f.selection.selected_rows(), [1]);
    assert_eq!(f.nav.anchor().explicit(), Some(Position::row(1)));
}

#[test]
fn moving_without_focus_starts_at_the_first_row() {
    let mut f = Fixture::rows(4, SelectionMode::Single);
    f.run(|nav, cx| nav.select_next_row(cx));
    assert_eq!(f.focused_row(), Some(0));
    assert_eq!(f.rows_selected(), [0]);
}

#[test]
fn discontinuous_selection_keeps_gaps_where_range_extension_clears_them() {
    let setup = || {
        let mut f = Fixture::rows(6, SelectionMode::Multiple).focused_at(Position::row(3));
        f.selection.select(Position::row(1));
        f.selection.select(Position::row(3));
        f.nav.set_anchor(Position::row(3));
        f
    };

    let mut f = setup();
    f.run(|nav, cx| nav.discontinuous_select_next_row(cx));
    assert_eq!(f.rows_selected(), [1, 3, 4]);
    assert_eq!(f.focused_row(), Some(4));
    assert_eq!(f.take_events(), [NavigationEvent::FocusNextRow]);

    let mut f = setup();
    f.run(|nav, cx| nav.also_select_next(cx));
    assert_eq!(f.rows_selected(), [3, 4]);
}

#[test]
fn discontinuous_selection_in_single_mode_is_a_plain_move() {
    let mut f = Fixture::rows(6, SelectionMode::Single).focused_at(Position::row(2));
    f.selection.select(Position::row(2));
    f.run(|nav, cx| nav.discontinuous_select_next_row(cx));
    assert_eq!(f.rows_selected(), [3]);
    assert_eq!(f.nav.anchor().explicit(), Some(Position::row(3)));
}

#[test]
fn select_last_row_in_single_mode() {
    let mut f = Fixture::rows(10, SelectionMode::Single).focused_at(Position::row(0));
    f.run(|nav, cx| nav.select_last_row(cx));
    assert_eq!(f.focused_row(), Some(9));
    assert_eq!(f.rows_selected(), [9]);
    assert_eq!(f.take_events(), [NavigationEvent::MoveToLastCell]);
}

#[test]
fn shift_down_twice_from_an_unanchored_focus() {
    let mut f = Fixture::rows(5, SelectionMode::Multiple).focused_at(Position::row(2));
    f.nav.set_modifiers(SHIFT);
    f.run(|nav, cx| nav.also_select_next(cx));
    assert_eq!(f.nav.anchor().explicit(), Some(Position::row(2)));
    assert_eq!(f.focused_row(), Some(3));
    assert_eq!(f.rows_selected(), [2, 3]);

    f.run(|nav, cx| nav.also_select_next(cx));
    assert_eq!(f.focused_row(), Some(4));
    assert_eq!(f.rows_selected(), [2, 3, 4]);
    assert_eq!(
        f.take_events(),
        [NavigationEvent::SelectNextRow, NavigationEvent::SelectNextRow]
    );
}

#[test]
fn backtracking_across_cells_deselects_the_over_extension() {
    let mut f = Fixture::grid(5, 4);
    f.run(|nav, cx| {
        nav.press(cx, Position::cell(2, 0), ModifierState::NONE, 1);
    });
    f.nav.set_modifiers(SHIFT);
    f.run(|nav, cx| nav.also_select_right_cell(cx));
    f.run(|nav, cx| nav.also_select_right_cell(cx));
    assert!(f.selection.is_selected(Position::cell(2, 2)));

    f.run(|nav, cx| nav.also_select_left_cell(cx));
    assert!(!f.selection.is_selected(Position::cell(2, 2)));
    assert!(f.selection.is_selected(Position::cell(2, 0)));
    assert!(f.selection.is_selected(Position::cell(2, 1)));
    assert_eq!(f.focus.focused(), Some(Position::cell(2, 1)));
    assert_eq!(f.nav.anchor().explicit(), Some(Position::cell(2, 0)));
}

#[test]
fn backtracking_down_a_column_uses_the_history() {
    let mut f = Fixture::grid(6, 3);
    f.run(|nav, cx| {
        nav.press(cx, Position::cell(1, 1), ModifierState::NONE, 1);
    });
    f.nav.set_modifiers(SHIFT);
    f.run(|nav, cx| nav.also_select_next(cx));
    f.run(|nav, cx| nav.also_select_next(cx));
    assert_eq!(f.selection.selected_count(), 3);
    assert_eq!(f.nav.history().get(1), Some(Position::cell(2, 1)));

    f.run(|nav, cx| nav.also_select_previous(cx));
    assert_eq!(
        f.selection.selected_positions(),
        [Position::cell(1, 1), Position::cell(2, 1)]
    );
    assert_eq!(f.focus.focused(), Some(Position::cell(2, 1)));
}

#[test]
fn cell_moves_stop_at_the_outer_columns() {
    let mut f = Fixture::grid(3, 3).focused_at(Position::cell(0, 0));
    f.run(|nav, cx| nav.select_left_cell(cx));
    assert_eq!(f.selection.selected_count(), 0);

    f.run(|nav, cx| nav.select_right_cell(cx));
    f.run(|nav, cx| nav.select_right_cell(cx));
    f.run(|nav, cx| nav.select_right_cell(cx));
    assert_eq!(f.selection.selected_positions(), [Position::cell(0, 2)]);
    assert_eq!(f.nav.anchor().explicit(), Some(Position::cell(0, 2)));
    assert_eq!(
        f.take_events(),
        [NavigationEvent::SelectRightCell, NavigationEvent::SelectRightCell]
    );

    f.run(|nav, cx| nav.focus_left_cell(cx));
    assert_eq!(f.focus.focused(), Some(Position::cell(0, 1)));
    assert_eq!(f.selection.selected_positions(), [Position::cell(0, 2)]);
}

#[test]
fn discontinuous_column_selection_adds_without_clearing() {
    let mut f = Fixture::grid(3, 4);
    f.run(|nav, cx| {
        nav.press(cx, Position::cell(1, 1), ModifierState::NONE, 1);
    });
    f.run(|nav, cx| nav.discontinuous_select_next_column(cx));
    f.run(|nav, cx| nav.discontinuous_select_previous_column(cx));
    f.run(|nav, cx| nav.discontinuous_select_previous_column(cx));
    assert_eq!(f.selection.selected_count(), 3);
    assert_eq!(f.focus.focused(), Some(Position::cell(1, 0)));
}

#[test]
fn toggle_deselects_in_place_and_anchors() {
    let mut f = Fixture::rows(5, SelectionMode::Multiple).focused_at(Position::row(2));
    f.selection.select(Position::row(2));
    f.selection.select(Position::row(4));
    f.run(|nav, cx| nav.toggle_focus_owner_selection(cx));
    assert_eq!(f.rows_selected(), [4]);
    assert_eq!(f.focused_row(), Some(2));
    assert_eq!(f.nav.anchor().explicit(), Some(Position::row(2)));

    f.run(|nav, cx| nav.toggle_focus_owner_selection(cx));
    assert_eq!(f.rows_selected(), [2, 4]);
}

#[test]
fn focus_moves_leave_the_selection_alone() {
    let mut f = Fixture::rows(5, SelectionMode::Multiple).focused_at(Position::row(1));
    f.selection.select(Position::row(1));
    f.nav.set_anchor(Position::row(1));

    f.nav.set_modifiers(SHORTCUT);
    f.run(|nav, cx| nav.focus_next_row(cx));
    assert_eq!(f.focused_row(), Some(2));
    assert_eq!(f.nav.anchor().explicit(), Some(Position::row(1)));

    f.nav.set_modifiers(ModifierState::NONE);
    f.run(|nav, cx| nav.focus_next_row(cx));
    assert_eq!(f.nav.anchor().explicit(), Some(Position::row(3)));

    f.run(|nav, cx| nav.focus_last_row(cx));
    assert_eq!(f.focused_row(), Some(4));
    assert_eq!(f.rows_selected(), [1]);
    assert_eq!(
        f.take_events(),
        [
            NavigationEvent::FocusNextRow,
            NavigationEvent::FocusNextRow,
            NavigationEvent::MoveToLastCell,
        ]
    );
}

#[test]
fn page_operations_use_the_pager() {
    let mut pager = StubPager {
        up: Some(0),
        down: Some(9),
        ..StubPager::default()
    };
    let items = ItemCount::rows(20);
    let mut focus = BasicFocus::new(20);
    let mut selection = BasicSelection::new(SelectionMode::Multiple);
    let mut nav = SelectionNavigator::new();
    focus.focus(Some(Position::row(2)));
    selection.select(Position::row(2));
    nav.set_anchor(Position::row(2));

    nav.set_modifiers(SHIFT);
    {
        let mut cx = NavContext::new(&mut focus, &mut selection, &items).with_pager(&mut pager);
        nav.select_all_page_down(&mut cx);
    }
    assert_eq!(selection.selected_rows(), (2..=9).collect::<Vec<_>>());
    assert_eq!(focus.focused(), Some(Position::row(9)));
    assert_eq!(nav.anchor().explicit(), Some(Position::row(2)));

    {
        let mut cx = NavContext::new(&mut focus, &mut selection, &items).with_pager(&mut pager);
        nav.focus_page_up(&mut cx);
    }
    assert_eq!(focus.focused(), Some(Position::row(0)));
    assert_eq!(selection.selected_count(), 8);

    nav.set_modifiers(ModifierState::NONE);
    {
        let mut cx = NavContext::new(&mut focus, &mut selection, &items).with_pager(&mut pager);
        nav.scroll_down(&mut cx);
    }
    assert_eq!(selection.selected_rows(), [9]);
    assert_eq!(nav.anchor().explicit(), Some(Position::row(9)));
    assert_eq!((pager.peeks, pager.commits), (1, 2));
}

#[test]
fn discontinuous_page_adds_from_the_anchor() {
    let mut pager = StubPager {
        down: Some(6),
        ..StubPager::default()
    };
    let items = ItemCount::rows(10);
    let mut focus = BasicFocus::new(10);
    let mut selection = BasicSelection::new(SelectionMode::Multiple);
    let mut nav = SelectionNavigator::new();
    focus.focus(Some(Position::row(4)));
    selection.select(Position::row(0));
    nav.set_anchor(Position::row(3));

    let mut cx = NavContext::new(&mut focus, &mut selection, &items).with_pager(&mut pager);
    nav.discontinuous_select_page_down(&mut cx);
    assert_eq!(selection.selected_rows(), [0, 3, 4, 5, 6]);
    assert_eq!(focus.focused(), Some(Position::row(6)));
}

#[test]
fn select_all_to_boundaries() {
    let mut f = Fixture::rows(10, SelectionMode::Multiple).focused_at(Position::row(7));
    f.nav.set_anchor(Position::row(5));
    f.nav.set_modifiers(SHIFT);
    f.run(|nav, cx| nav.select_all_to_first_row(cx));
    assert_eq!(f.rows_selected(), [0, 1, 2, 3, 4, 5]);
    assert_eq!(f.selection.lead(), Some(Position::row(0)));
    assert_eq!(f.focused_row(), Some(0));
    assert_eq!(f.nav.anchor().explicit(), Some(Position::row(5)));

    f.run(|nav, cx| nav.select_all_to_last_row(cx));
    assert_eq!(f.rows_selected(), [5, 6, 7, 8, 9]);
    assert_eq!(f.focused_row(), Some(9));

    f.nav.set_modifiers(ModifierState::NONE);
    f.run(|nav, cx| nav.select_all_to_first_row(cx));
    assert_eq!(f.rows_selected(), (0..=9).collect::<Vec<_>>());
}

#[test]
fn discontinuous_select_to_boundary_includes_the_focus() {
    let mut f = Fixture::rows(6, SelectionMode::Multiple).focused_at(Position::row(3));
    f.selection.select(Position::row(0));
    f.run(|nav, cx| nav.discontinuous_select_all_to_last_row(cx));
    assert_eq!(f.rows_selected(), [0, 3, 4, 5]);
    assert_eq!(f.focused_row(), Some(5));
}

#[test]
fn select_all_to_focus_can_move_the_anchor() {
    let mut f = Fixture::rows(8, SelectionMode::Multiple).focused_at(Position::row(6));
    f.nav.set_anchor(Position::row(3));
    f.run(|nav, cx| nav.select_all_to_focus(cx, false));
    assert_eq!(f.rows_selected(), [3, 4, 5, 6]);
    assert_eq!(f.nav.anchor().explicit(), Some(Position::row(3)));

    f.run(|nav, cx| nav.select_all_to_focus(cx, true));
    assert_eq!(f.nav.anchor().explicit(), Some(Position::row(6)));
}

#[test]
fn select_all_and_clear() {
    let mut f = Fixture::rows(4, SelectionMode::Multiple).focused_at(Position::row(1));
    f.run(|nav, cx| nav.select_all(cx));
    assert_eq!(f.rows_selected(), [0, 1, 2, 3]);

    f.nav.set_anchor(Position::row(1));
    f.run(|nav, cx| nav.clear_selection(cx));
    assert_eq!(f.selection.selected_count(), 0);
    assert!(!f.nav.anchor().has());
    assert!(f.nav.history().is_empty());
}

#[test]
fn pointer_presses_follow_the_modifiers() {
    let mut f = Fixture::rows(10, SelectionMode::Multiple);
    f.run(|nav, cx| {
        nav.press(cx, Position::row(4), ModifierState::NONE, 1);
    });
    assert_eq!(f.rows_selected(), [4]);

    f.run(|nav, cx| {
        nav.press(cx, Position::row(7), SHIFT, 1);
    });
    assert_eq!(f.rows_selected(), [4, 5, 6, 7]);
    assert_eq!(f.focused_row(), Some(7));
    assert_eq!(f.nav.anchor().explicit(), Some(Position::row(4)));

    f.run(|nav, cx| {
        nav.press(cx, Position::row(1), SHORTCUT, 1);
    });
    assert_eq!(f.rows_selected(), [1, 4, 5, 6, 7]);
    assert_eq!(f.nav.anchor().explicit(), Some(Position::row(1)));

    f.run(|nav, cx| {
        nav.press(cx, Position::row(3), ModifierState::new(true, true), 1);
    });
    assert_eq!(f.rows_selected(), [1, 2, 3, 4, 5, 6, 7]);

    f.run(|nav, cx| {
        nav.press(cx, Position::row(5), SHORTCUT, 1);
    });
    assert!(!f.selection.is_selected(Position::row(5)));
}

#[test]
fn double_click_requests_activation() {
    let mut f = Fixture::rows(3, SelectionMode::Single);
    let mut activated = None;
    f.run(|nav, cx| activated = nav.press(cx, Position::row(1), ModifierState::NONE, 2));
    assert_eq!(activated, Some(Position::row(1)));

    f.run(|nav, cx| activated = nav.press(cx, Position::row(9), ModifierState::NONE, 2));
    assert_eq!(activated, None);
    assert_eq!(f.rows_selected(), [1]);
}

#[test]
fn activate_selects_and_anchors_the_focus() {
    let mut f = Fixture::rows(3, SelectionMode::Multiple).focused_at(Position::row(2));
    let mut activated = None;
    f.run(|nav, cx| activated = nav.activate(cx));
    assert_eq!(activated, Some(Position::row(2)));
    assert_eq!(f.rows_selected(), [2]);
    assert_eq!(f.nav.anchor().explicit(), Some(Position::row(2)));
}

#[test]
fn tree_expand_and_collapse() {
    let items = ItemCount::rows(4);
    let mut focus = BasicFocus::new(4);
    let mut selection = BasicSelection::new(SelectionMode::Single);
    let mut tree = StubTree::new();
    let mut nav = SelectionNavigator::new();
    focus.focus(Some(Position::row(0)));

    let mut step = |op: fn(&mut SelectionNavigator, &mut NavContext<'_>),
                    focus: &mut BasicFocus,
                    selection: &mut BasicSelection,
                    tree: &mut StubTree| {
        let mut cx = NavContext::new(focus, selection, &items).with_tree(tree);
        op(&mut nav, &mut cx);
    };

    step(SelectionNavigator::expand_row, &mut focus, &mut selection, &mut tree);
    assert!(tree.is_expanded(0));
    assert_eq!(focus.focused(), Some(Position::row(0)));

    step(SelectionNavigator::expand_row, &mut focus, &mut selection, &mut tree);
    assert_eq!(focus.focused(), Some(Position::row(1)));
    assert_eq!(selection.selected_rows(), [1]);

    step(SelectionNavigator::collapse_row, &mut focus, &mut selection, &mut tree);
    assert_eq!(focus.focused(), Some(Position::row(0)));
    assert!(tree.is_expanded(0));

    step(SelectionNavigator::collapse_row, &mut focus, &mut selection, &mut tree);
    assert!(!tree.is_expanded(0));

    step(SelectionNavigator::expand_all, &mut focus, &mut selection, &mut tree);
    assert!(tree.expanded_all);
}

#[test]
fn missing_models_make_every_operation_a_no_op() {
    let items = ItemCount::grid(5, 3);
    let mut nav = SelectionNavigator::new();
    let ops: [fn(&mut SelectionNavigator, &mut NavContext<'_>); 10] = [
        SelectionNavigator::select_next_row,
        SelectionNavigator::also_select_next,
        SelectionNavigator::select_last_row,
        SelectionNavigator::focus_next_row,
        SelectionNavigator::select_right_cell,
        SelectionNavigator::also_select_left_cell,
        SelectionNavigator::toggle_focus_owner_selection,
        SelectionNavigator::discontinuous_select_next_row,
        SelectionNavigator::select_all_to_first_row,
        SelectionNavigator::expand_row,
    ];
    for op in ops {
        let mut cx = NavContext::detached(&items);
        op(&mut nav, &mut cx);
    }
    assert!(!nav.anchor().has());
    assert!(nav.history().is_empty());
}

#[test]
fn empty_sequence_is_a_no_op() {
    let mut f = Fixture::rows(0, SelectionMode::Multiple);
    f.run(|nav, cx| nav.select_next_row(cx));
    f.run(|nav, cx| nav.select_last_row(cx));
    f.run(|nav, cx| nav.select_all(cx));
    assert_eq!(f.focused_row(), None);
    assert_eq!(f.selection.selected_count(), 0);
    assert!(f.take_events().is_empty());
}

#[test]
fn sequence_changes_shift_or_drop_the_anchor() {
    let mut nav = SelectionNavigator::new();
    nav.set_anchor(Position::row(5));
    nav.on_sequence_changed(&SequenceChange::Inserted(0..2));
    assert_eq!(nav.anchor().explicit(), Some(Position::row(7)));
    nav.on_sequence_changed(&SequenceChange::Removed(6..8));
    assert!(!nav.anchor().has());

    nav.set_anchor(Position::row(1));
    nav.on_sequence_changed(&SequenceChange::Replaced);
    assert!(!nav.anchor().has());
}
