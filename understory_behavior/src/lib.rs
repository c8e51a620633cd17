// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Understory Behavior: keyboard and pointer behavior for list-like controls.
//!
//! This crate composes [`understory_keymap`] and [`understory_selection`] into
//! a ready-made input behavior for lists, tables, trees, and tree tables:
//! - **Bindings** ([`ControlKind::bindings`]) are data tables of chords and
//!   action names, with platform variants for the shortcut modifier.
//! - **Handlers** ([`ControlKind::actions`]) are layered action tables that
//!   map those names onto [`SelectionNavigator`](understory_selection::SelectionNavigator)
//!   operations or [`ControlHost`] hooks.
//! - A [`Behavior`] owns both plus the navigator state for one control, and
//!   turns key and pointer events into model changes.
//!
//! ## Minimal example
//!
//! ```rust
//! use understory_behavior::{Behavior, ControlHost, ControlKind, KeyOutcome};
//! use understory_keymap::{
//!     KeyCode, KeyEvent, LayoutSource, Modifiers, Orientation, Platform, TextDirection,
//! };
//! use understory_selection::{
//!     BasicFocus, BasicSelection, FocusModel, ItemCount, NavContext, Position, SelectionHost,
//!     SelectionMode, SelectionModel,
//! };
//!
//! struct List {
//!     items: ItemCount,
//!     focus: BasicFocus,
//!     selection: BasicSelection,
//! }
//!
//! impl SelectionHost for List {
//!     fn nav_context(&mut self) -> NavContext<'_> {
//!         NavContext::new(&mut self.focus, &mut self.selection, &self.items)
//!     }
//! }
//!
//! impl LayoutSource for List {
//!     fn orientation(&self) -> Orientation {
//!         Orientation::Vertical
//!     }
//!     fn text_direction(&self) -> TextDirection {
//!         TextDirection::Ltr
//!     }
//! }
//!
//! impl ControlHost for List {}
//!
//! let mut list = List {
//!     items: ItemCount::rows(5),
//!     focus: BasicFocus::new(5),
//!     selection: BasicSelection::new(SelectionMode::Multiple),
//! };
//! list.focus.focus(Some(Position::row(2)));
//!
//! let mut behavior = Behavior::with_platform(ControlKind::List, Platform::Other);
//! let shift_down = KeyEvent::pressed(KeyCode::Down).with_modifiers(Modifiers::SHIFT);
//! behavior.handle_key(&shift_down, &mut list);
//! let outcome = behavior.handle_key(&shift_down, &mut list);
//!
//! assert_eq!(outcome, KeyOutcome::Handled("AlsoSelectNext".into()));
//! assert_eq!(list.selection.selected_rows(), [2, 3, 4]);
//! ```
//!
//! ## Features
//!
//! - `std` (default): enables `std` support for dependencies such as `kurbo`.
//! - `libm`: enables `no_std` + `alloc` builds that rely on `libm` for floating-point math.
//! - `serde`: enables `Behavior::with_keymap` for layering configured keymaps.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod actions;
mod behavior;
mod bindings;
mod handlers;
mod host;

#[cfg(test)]
mod tests;

pub use behavior::{Behavior, KeyOutcome};
pub use bindings::ControlKind;
pub use handlers::{
    NavActions, cell_actions, item_actions, navigation_actions, traversal_actions, tree_actions,
    tree_table_actions,
};
pub use host::{ControlHost, Traversal};
