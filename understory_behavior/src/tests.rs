// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Key and pointer events driven through a [`Behavior`] into basic models.

use alloc::vec;
use alloc::vec::Vec;

use kurbo::Point;
use understory_keymap::{
    ControlLayout, KeyBinding, KeyCode, KeyEvent, LayoutSource, Modifiers, Orientation, Platform,
    PointerEvent, TextDirection,
};
use understory_selection::{
    BasicFocus, BasicSelection, FocusModel, ItemCount, ModifierState, NavContext, Position,
    SelectionHost, SelectionMode, SelectionModel, SelectionNavigator, TreeItems,
};

use crate::actions::*;
use crate::{Behavior, ControlHost, ControlKind, KeyOutcome, NavActions, Traversal};

const ROW_HEIGHT: f64 = 20.0;

/// Every row is a branch; nothing is a leaf.
#[derive(Default)]
struct Tree {
    expanded: Vec<bool>,
}

impl TreeItems for Tree {
    fn is_leaf(&self, _row: usize) -> bool {
        false
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
        row.checked_sub(1)
    }

    fn expand_all(&mut self) {
        self.expanded.fill(true);
    }
}

struct Host {
    layout: ControlLayout,
    items: ItemCount,
    focus: BasicFocus,
    selection: BasicSelection,
    tree: Tree,
    traversals: Vec<Traversal>,
    edits: Vec<Position>,
    cancels: usize,
}

impl Host {
    fn new(items: ItemCount, selection: BasicSelection) -> Self {
        Self {
            layout: ControlLayout::new(Orientation::Vertical),
            items,
            focus: BasicFocus::new(items.rows),
            selection,
            tree: Tree {
                expanded: vec![false; items.rows],
            },
            traversals: Vec::new(),
            edits: Vec::new(),
            cancels: 0,
        }
    }

    fn list(rows: usize) -> Self {
        Self::new(
            ItemCount::rows(rows),
            BasicSelection::new(SelectionMode::Multiple),
        )
    }

    fn table(rows: usize, columns: usize, cells: bool) -> Self {
        Self::new(
            ItemCount::grid(rows, columns),
            BasicSelection::new(SelectionMode::Multiple).with_cell_selection(cells),
        )
    }

    fn focused_at(mut self, pos: Position) -> Self {
        self.focus.focus(Some(pos));
        self
    }

    fn laid_out(mut self, orientation: Orientation, direction: TextDirection) -> Self {
        self.layout = ControlLayout::new(orientation).with_direction(direction);
        self
    }
}

impl SelectionHost for Host {
    fn nav_context(&mut self) -> NavContext<'_> {
        NavContext::new(&mut self.focus, &mut self.selection, &self.items).with_tree(&mut self.tree)
    }
}

impl LayoutSource for Host {
    fn orientation(&self) -> Orientation {
        self.layout.orientation
    }

    fn text_direction(&self) -> TextDirection {
        self.layout.direction
    }
}

impl ControlHost for Host {
    fn traverse(&mut self, direction: Traversal) {
        self.traversals.push(direction);
    }

    fn edit(&mut self, pos: Position) {
        self.edits.push(pos);
    }

    fn cancel_edit(&mut self) {
        self.cancels += 1;
    }

    fn hit_test(&self, point: Point) -> Option<Position> {
        if point.y < 0.0 {
            return None;
        }
        (0_u32..)
            .take(self.items.rows)
            .position(|r| point.y < f64::from(r + 1) * ROW_HEIGHT)
            .map(Position::row)
    }
}

fn key(code: KeyCode, modifiers: Modifiers) -> KeyEvent {
    KeyEvent::pressed(code).with_modifiers(modifiers)
}

fn behavior(kind: ControlKind) -> Behavior<Host> {
    Behavior::with_platform(kind, Platform::Other)
}

fn row_y(row: u32) -> Point {
    Point::new(5.0, f64::from(row) * ROW_HEIGHT + ROW_HEIGHT / 2.0)
}

#[test]
fn shift_arrows_extend_from_the_anchor() {
    let mut host = Host::list(5).focused_at(Position::row(2));
    let mut b = behavior(ControlKind::List);
    let shift_down = key(KeyCode::Down, Modifiers::SHIFT);

    assert_eq!(
        b.handle_key(&shift_down, &mut host),
        KeyOutcome::Handled(ALSO_SELECT_NEXT.into())
    );
    assert_eq!(host.selection.selected_rows(), [2, 3]);
    assert_eq!(b.navigator().anchor().explicit(), Some(Position::row(2)));

    b.handle_key(&shift_down, &mut host);
    assert_eq!(host.selection.selected_rows(), [2, 3, 4]);
    assert_eq!(host.focus.focused(), Some(Position::row(4)));

    b.handle_key(&key(KeyCode::Up, Modifiers::empty()), &mut host);
    assert_eq!(host.selection.selected_rows(), [3]);
    assert_eq!(b.navigator().anchor().explicit(), Some(Position::row(3)));
}

#[test]
fn key_release_clears_the_modifier_state() {
    let mut host = Host::list(5).focused_at(Position::row(0));
    let mut b = behavior(ControlKind::List);
    b.handle_key(&key(KeyCode::Down, Modifiers::SHIFT | Modifiers::CTRL), &mut host);
    assert!(b.navigator().modifiers().shift);
    assert!(b.navigator().modifiers().shortcut);

    let release = KeyEvent::released(KeyCode::Down).with_modifiers(Modifiers::SHIFT);
    assert_eq!(b.handle_key(&release, &mut host), KeyOutcome::Unbound);
    assert!(!b.navigator().modifiers().shift);
}

#[test]
fn keypad_and_main_arrows_agree() {
    let mut host = Host::list(5).focused_at(Position::row(0));
    let mut b = behavior(ControlKind::List);
    b.handle_key(&key(KeyCode::KpDown, Modifiers::empty()), &mut host);
    assert_eq!(host.selection.selected_rows(), [1]);
}

#[test]
fn vertical_list_traverses_sideways_and_mirrors_under_rtl() {
    let mut host = Host::list(3).focused_at(Position::row(0));
    let mut b = behavior(ControlKind::List);
    b.handle_key(&key(KeyCode::Left, Modifiers::empty()), &mut host);
    b.handle_key(&key(KeyCode::Tab, Modifiers::SHIFT), &mut host);

    let mut host_rtl = Host::list(3).laid_out(Orientation::Vertical, TextDirection::Rtl);
    b.handle_key(&key(KeyCode::Left, Modifiers::empty()), &mut host_rtl);

    assert_eq!(host.traversals, [Traversal::Left, Traversal::Previous]);
    assert_eq!(host_rtl.traversals, [Traversal::Right]);
    assert_eq!(host.selection.selected_count(), 0);
}

#[test]
fn horizontal_list_moves_along_the_reading_direction() {
    let mut host = Host::list(5)
        .focused_at(Position::row(2))
        .laid_out(Orientation::Horizontal, TextDirection::Ltr);
    let mut b = behavior(ControlKind::List);
    b.handle_key(&key(KeyCode::Right, Modifiers::empty()), &mut host);
    assert_eq!(host.selection.selected_rows(), [3]);

    host.layout = host.layout.with_direction(TextDirection::Rtl);
    b.handle_key(&key(KeyCode::Right, Modifiers::empty()), &mut host);
    b.handle_key(&key(KeyCode::Right, Modifiers::empty()), &mut host);
    assert_eq!(host.selection.selected_rows(), [1]);

    b.handle_key(&key(KeyCode::Down, Modifiers::empty()), &mut host);
    assert_eq!(host.traversals, [Traversal::Down]);
}

#[test]
fn table_cells_backtrack_under_shift_arrows() {
    let mut host = Host::table(5, 4, true);
    let mut b = behavior(ControlKind::Table);
    {
        let mut cx = host.nav_context();
        b.navigator_mut()
            .press(&mut cx, Position::cell(2, 0), ModifierState::NONE, 1);
    }
    let shift_right = key(KeyCode::Right, Modifiers::SHIFT);
    b.handle_key(&shift_right, &mut host);
    b.handle_key(&shift_right, &mut host);
    b.handle_key(&key(KeyCode::Left, Modifiers::SHIFT), &mut host);

    assert_eq!(
        host.selection.selected_positions(),
        [Position::cell(2, 0), Position::cell(2, 1)]
    );
    assert_eq!(host.focus.focused(), Some(Position::cell(2, 1)));
}

#[test]
fn rtl_table_left_arrow_selects_the_right_cell() {
    let mut host = Host::table(2, 3, true)
        .focused_at(Position::cell(0, 1))
        .laid_out(Orientation::Vertical, TextDirection::Rtl);
    let mut b = behavior(ControlKind::Table);
    let outcome = b.handle_key(&key(KeyCode::Left, Modifiers::empty()), &mut host);
    assert_eq!(outcome, KeyOutcome::Handled(SELECT_RIGHT_CELL.into()));
    assert_eq!(host.selection.selected_positions(), [Position::cell(0, 2)]);
}

#[test]
fn toggle_and_clear_use_platform_chords() {
    let mut host = Host::list(4).focused_at(Position::row(1));
    let mut b = behavior(ControlKind::List);
    b.handle_key(&key(KeyCode::Space, Modifiers::CTRL), &mut host);
    assert_eq!(host.selection.selected_rows(), [1]);

    b.handle_key(&key(KeyCode::Backslash, Modifiers::CTRL), &mut host);
    assert_eq!(host.selection.selected_count(), 0);
    assert!(!b.navigator().anchor().has());

    let mut mac: Behavior<Host> = Behavior::with_platform(ControlKind::List, Platform::Mac);
    let toggle = key(KeyCode::Space, Modifiers::CTRL | Modifiers::META);
    assert!(mac.handle_key(&toggle, &mut host).is_handled());
    assert_eq!(host.selection.selected_rows(), [1]);
}

#[test]
fn activation_and_cancel_reach_the_host() {
    let mut host = Host::list(4).focused_at(Position::row(3));
    let mut b = behavior(ControlKind::List);
    b.handle_key(&key(KeyCode::Enter, Modifiers::empty()), &mut host);
    b.handle_key(&key(KeyCode::Escape, Modifiers::empty()), &mut host);
    assert_eq!(host.edits, [Position::row(3)]);
    assert_eq!(host.selection.selected_rows(), [3]);
    assert_eq!(host.cancels, 1);
}

#[test]
fn unbound_and_unhandled_keys_are_reported() {
    let mut host = Host::list(4).focused_at(Position::row(0));
    let mut b =
        behavior(ControlKind::List).with_overrides([KeyBinding::new(KeyCode::F(5), "Refresh")]);
    assert_eq!(
        b.handle_key(&key(KeyCode::Char('Q'), Modifiers::empty()), &mut host),
        KeyOutcome::Unbound
    );
    assert_eq!(
        b.handle_key(&key(KeyCode::F(5), Modifiers::empty()), &mut host),
        KeyOutcome::Unhandled("Refresh".into())
    );
}

#[test]
fn overrides_win_over_defaults() {
    let mut host = Host::list(4).focused_at(Position::row(0));
    let mut b = behavior(ControlKind::List)
        .with_overrides([KeyBinding::new(KeyCode::Home, SELECT_LAST_ROW)]);
    b.handle_key(&key(KeyCode::Home, Modifiers::empty()), &mut host);
    assert_eq!(host.selection.selected_rows(), [3]);
}

#[test]
fn custom_action_layers_shadow_the_defaults() {
    fn select_all_instead(nav: &mut SelectionNavigator, host: &mut Host) {
        nav.select_all(&mut host.nav_context());
    }

    let mut host = Host::list(3).focused_at(Position::row(0));
    let mut b = behavior(ControlKind::List)
        .with_actions(NavActions::new("app").with(SELECT_NEXT_ROW, select_all_instead));
    let outcome = b.handle_key(&key(KeyCode::Down, Modifiers::empty()), &mut host);
    assert_eq!(outcome, KeyOutcome::Handled(SELECT_NEXT_ROW.into()));
    assert_eq!(host.selection.selected_rows(), [0, 1, 2]);
    assert_eq!(b.dispatcher().layers()[0].label(), "app");
}

#[test]
fn pointer_clicks_select_extend_and_activate() {
    let mut host = Host::list(10);
    let mut b = behavior(ControlKind::List);

    assert!(b.handle_pointer(&PointerEvent::pressed(row_y(2)), &mut host));
    assert_eq!(host.selection.selected_rows(), [2]);

    let shift_click = PointerEvent::pressed(row_y(5)).with_modifiers(Modifiers::SHIFT);
    assert!(b.handle_pointer(&shift_click, &mut host));
    assert_eq!(host.selection.selected_rows(), [2, 3, 4, 5]);
    assert_eq!(b.navigator().anchor().explicit(), Some(Position::row(2)));

    let double = PointerEvent::pressed(row_y(7)).with_click_count(2);
    assert!(b.handle_pointer(&double, &mut host));
    assert_eq!(host.edits, [Position::row(7)]);

    assert!(!b.handle_pointer(&PointerEvent::pressed(row_y(40)), &mut host));
    assert_eq!(host.selection.selected_rows(), [7]);
}

#[test]
fn tree_arrows_expand_collapse_and_step() {
    let mut host = Host::list(4).focused_at(Position::row(1));
    let mut b = behavior(ControlKind::Tree);
    let right = key(KeyCode::Right, Modifiers::empty());
    let left = key(KeyCode::Left, Modifiers::empty());

    b.handle_key(&right, &mut host);
    assert!(host.tree.is_expanded(1));
    b.handle_key(&right, &mut host);
    assert_eq!(host.focus.focused(), Some(Position::row(2)));

    b.handle_key(&left, &mut host);
    assert_eq!(host.focus.focused(), Some(Position::row(1)));
    b.handle_key(&left, &mut host);
    assert!(!host.tree.is_expanded(1));

    b.handle_key(&key(KeyCode::Multiply, Modifiers::empty()), &mut host);
    assert!(host.tree.expanded.iter().all(|&e| e));
}

#[test]
fn tree_table_arrows_depend_on_cell_selection() {
    let mut rows = Host::table(3, 3, false).focused_at(Position::cell(0, 1));
    let mut b = behavior(ControlKind::TreeTable);
    b.handle_key(&key(KeyCode::Right, Modifiers::empty()), &mut rows);
    assert!(rows.tree.is_expanded(0));

    let mut cells = Host::table(3, 3, true).focused_at(Position::cell(0, 1));
    let mut b = behavior(ControlKind::TreeTable);
    b.handle_key(&key(KeyCode::Right, Modifiers::empty()), &mut cells);
    assert!(!cells.tree.is_expanded(0));
    assert_eq!(cells.selection.selected_positions(), [Position::cell(0, 2)]);
}

#[cfg(feature = "serde")]
#[test]
fn configured_keymaps_layer_over_defaults() {
    use understory_keymap::{BindingConfig, KeymapConfig};

    let keymap = KeymapConfig {
        bindings: vec![BindingConfig {
            chord: "J".into(),
            action: SELECT_NEXT_ROW.into(),
            ..BindingConfig::default()
        }],
    };
    let mut host = Host::list(3).focused_at(Position::row(0));
    let mut b = behavior(ControlKind::List).with_keymap(&keymap).unwrap();
    b.handle_key(&key(KeyCode::Char('J'), Modifiers::empty()), &mut host);
    assert_eq!(host.selection.selected_rows(), [1]);

    let bad = KeymapConfig {
        bindings: vec![BindingConfig {
            chord: "Hyper+J".into(),
            ..BindingConfig::default()
        }],
    };
    assert!(behavior(ControlKind::List).with_keymap(&bad).is_err());
}
