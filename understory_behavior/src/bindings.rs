// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Default key bindings per control kind.
//!
//! Bindings are plain data: chord text, action name, and orientation
//! predicate. Each arrow-key entry is also bound on its keypad twin.

use understory_keymap::{
    KeyBinding, KeyBindingTable, KeyChord, KeyCode, MirrorTable, OrientationReq, Platform,
};

use crate::actions::*;

/// The shape of control a [`Behavior`](crate::Behavior) drives.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ControlKind {
    /// A single-column list, vertical or horizontal.
    List,
    /// Rows and columns, with optional cell selection.
    Table,
    /// A single-column hierarchy.
    Tree,
    /// A hierarchy with columns.
    TreeTable,
}

#[derive(Copy, Clone, Debug)]
struct Entry {
    chord: &'static str,
    action: &'static str,
    orientation: OrientationReq,
}

const fn any(chord: &'static str, action: &'static str) -> Entry {
    Entry {
        chord,
        action,
        orientation: OrientationReq::Any,
    }
}

const fn vertical(chord: &'static str, action: &'static str) -> Entry {
    Entry {
        chord,
        action,
        orientation: OrientationReq::VerticalOnly,
    }
}

const fn horizontal(chord: &'static str, action: &'static str) -> Entry {
    Entry {
        chord,
        action,
        orientation: OrientationReq::HorizontalOnly,
    }
}

const SHARED: &[Entry] = &[
    any("Tab", TRAVERSE_NEXT),
    any("Shift+Tab", TRAVERSE_PREVIOUS),
    any("Home", SELECT_FIRST_ROW),
    any("End", SELECT_LAST_ROW),
    any("PageUp", SCROLL_UP),
    any("PageDown", SCROLL_DOWN),
    any("Shift+Home", SELECT_ALL_TO_FIRST_ROW),
    any("Shift+End", SELECT_ALL_TO_LAST_ROW),
    any("Shift+PageUp", SELECT_ALL_PAGE_UP),
    any("Shift+PageDown", SELECT_ALL_PAGE_DOWN),
    any("Shift+Space", SELECT_ALL_TO_FOCUS),
    any("Shortcut+Shift+Space", SELECT_ALL_TO_FOCUS_AND_SET_ANCHOR),
    any("Shortcut+A", SELECT_ALL),
    any("Shortcut+Backslash", CLEAR_SELECTION),
    any("Shortcut+Home", FOCUS_FIRST_ROW),
    any("Shortcut+End", FOCUS_LAST_ROW),
    any("Shortcut+PageUp", FOCUS_PAGE_UP),
    any("Shortcut+PageDown", FOCUS_PAGE_DOWN),
    any("Shortcut+Shift+PageUp", DISCONTINUOUS_SELECT_PAGE_UP),
    any("Shortcut+Shift+PageDown", DISCONTINUOUS_SELECT_PAGE_DOWN),
    any("Shortcut+Shift+Home", DISCONTINUOUS_SELECT_ALL_TO_FIRST_ROW),
    any("Shortcut+Shift+End", DISCONTINUOUS_SELECT_ALL_TO_LAST_ROW),
    any("Enter", ACTIVATE),
    any("Space", ACTIVATE),
    any("F2", ACTIVATE),
    any("Escape", CANCEL_EDIT),
];

const MAC: &[Entry] = &[any("Shortcut+Ctrl+Space", TOGGLE_FOCUS_OWNER_SELECTION)];

const OTHER: &[Entry] = &[any("Ctrl+Space", TOGGLE_FOCUS_OWNER_SELECTION)];

const ROWS: &[Entry] = &[
    any("Up", SELECT_PREVIOUS_ROW),
    any("Down", SELECT_NEXT_ROW),
    any("Shift+Up", ALSO_SELECT_PREVIOUS),
    any("Shift+Down", ALSO_SELECT_NEXT),
    any("Shortcut+Up", FOCUS_PREVIOUS_ROW),
    any("Shortcut+Down", FOCUS_NEXT_ROW),
    any("Shortcut+Shift+Up", DISCONTINUOUS_SELECT_PREVIOUS_ROW),
    any("Shortcut+Shift+Down", DISCONTINUOUS_SELECT_NEXT_ROW),
];

const CELLS: &[Entry] = &[
    any("Left", SELECT_LEFT_CELL),
    any("Right", SELECT_RIGHT_CELL),
    any("Shift+Left", ALSO_SELECT_LEFT_CELL),
    any("Shift+Right", ALSO_SELECT_RIGHT_CELL),
    any("Shortcut+Left", FOCUS_LEFT_CELL),
    any("Shortcut+Right", FOCUS_RIGHT_CELL),
    any("Shortcut+Shift+Left", DISCONTINUOUS_SELECT_PREVIOUS_COLUMN),
    any("Shortcut+Shift+Right", DISCONTINUOUS_SELECT_NEXT_COLUMN),
];

const LIST_VERTICAL: &[Entry] = &[
    vertical("Up", SELECT_PREVIOUS_ROW),
    vertical("Down", SELECT_NEXT_ROW),
    vertical("Shift+Up", ALSO_SELECT_PREVIOUS),
    vertical("Shift+Down", ALSO_SELECT_NEXT),
    vertical("Shortcut+Up", FOCUS_PREVIOUS_ROW),
    vertical("Shortcut+Down", FOCUS_NEXT_ROW),
    vertical("Shortcut+Shift+Up", DISCONTINUOUS_SELECT_PREVIOUS_ROW),
    vertical("Shortcut+Shift+Down", DISCONTINUOUS_SELECT_NEXT_ROW),
    vertical("Left", TRAVERSE_LEFT),
    vertical("Right", TRAVERSE_RIGHT),
];

const LIST_HORIZONTAL: &[Entry] = &[
    horizontal("Left", SELECT_LEFT_ITEM),
    horizontal("Right", SELECT_RIGHT_ITEM),
    horizontal("Shift+Left", ALSO_SELECT_LEFT_ITEM),
    horizontal("Shift+Right", ALSO_SELECT_RIGHT_ITEM),
    horizontal("Shortcut+Left", FOCUS_LEFT_ITEM),
    horizontal("Shortcut+Right", FOCUS_RIGHT_ITEM),
    horizontal("Shortcut+Shift+Left", DISCONTINUOUS_SELECT_LEFT_ITEM),
    horizontal("Shortcut+Shift+Right", DISCONTINUOUS_SELECT_RIGHT_ITEM),
    horizontal("Up", TRAVERSE_UP),
    horizontal("Down", TRAVERSE_DOWN),
];

const TREE: &[Entry] = &[
    any("Left", COLLAPSE_ROW),
    any("Right", EXPAND_ROW),
    any("*", EXPAND_ALL),
];

const TREE_TABLE: &[Entry] = &[any("*", EXPAND_ALL)];

const fn keypad_twin(key: KeyCode) -> Option<KeyCode> {
    match key {
        KeyCode::Up => Some(KeyCode::KpUp),
        KeyCode::Down => Some(KeyCode::KpDown),
        KeyCode::Left => Some(KeyCode::KpLeft),
        KeyCode::Right => Some(KeyCode::KpRight),
        _ => None,
    }
}

fn extend(table: &mut KeyBindingTable, entries: &[Entry], platform: Platform) {
    for entry in entries {
        let chord: KeyChord = match entry.chord.parse() {
            Ok(chord) => chord,
            Err(err) => {
                log::error!("skipping default binding {:?}: {err}", entry.chord);
                continue;
            }
        };
        let bind = |chord: &KeyChord| {
            KeyBinding::from_chord(chord, platform, entry.action)
                .with_orientation(entry.orientation)
        };
        table.push(bind(&chord));
        if let Some(key) = keypad_twin(chord.key) {
            table.push(bind(&KeyChord { key, ..chord }));
        }
    }
}

impl ControlKind {
    /// The default binding table for this kind of control on `platform`.
    pub fn bindings(self, platform: Platform) -> KeyBindingTable {
        let groups: &[&[Entry]] = match self {
            Self::List => &[LIST_VERTICAL, LIST_HORIZONTAL],
            Self::Table => &[ROWS, CELLS],
            Self::Tree => &[ROWS, TREE],
            Self::TreeTable => &[ROWS, CELLS, TREE_TABLE],
        };
        let platform_entries = match platform {
            Platform::Mac => MAC,
            Platform::Other => OTHER,
        };
        let mut table = KeyBindingTable::new();
        for group in groups.iter().copied().chain([SHARED, platform_entries]) {
            extend(&mut table, group, platform);
        }
        table
    }

    /// Directional action pairs swapped under right-to-left layout.
    pub fn mirror_table(self) -> MirrorTable {
        let standard = MirrorTable::standard();
        match self {
            Self::List => standard
                .with_pair(SELECT_LEFT_ITEM, SELECT_RIGHT_ITEM)
                .with_pair(ALSO_SELECT_LEFT_ITEM, ALSO_SELECT_RIGHT_ITEM)
                .with_pair(FOCUS_LEFT_ITEM, FOCUS_RIGHT_ITEM)
                .with_pair(DISCONTINUOUS_SELECT_LEFT_ITEM, DISCONTINUOUS_SELECT_RIGHT_ITEM),
            Self::Tree => standard.with_pair(COLLAPSE_ROW, EXPAND_ROW),
            Self::Table | Self::TreeTable => standard,
        }
    }
}
