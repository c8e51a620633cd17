// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Understory Selection: focus, anchor, and selection navigation.
//!
//! This crate implements the keyboard and pointer selection semantics shared
//! by list-like, table-like, and tree-like controls:
//! - **Positions** ([`Position`]) address a row, or a cell when the control
//!   selects individual cells.
//! - **Collaborators** ([`FocusModel`], [`SelectionModel`], [`ItemSource`],
//!   [`PageScroller`], [`TreeItems`]) are implemented by the host and lent to
//!   the navigator for one event at a time through a [`NavContext`].
//! - The **navigator** ([`SelectionNavigator`]) owns the anchor
//!   ([`AnchorTracker`]), the recent [`SelectionHistory`], and the live
//!   modifier state, and implements every move, range extension, toggle, and
//!   discontinuous selection operation on top of the collaborators.
//!
//! [`BasicFocus`] and [`BasicSelection`] are simple in-memory models for hosts
//! without their own.
//!
//! ## Minimal example
//!
//! ```rust
//! use understory_selection::{
//!     BasicFocus, BasicSelection, FocusModel, ItemCount, ModifierState, NavContext, Position,
//!     SelectionMode, SelectionModel, SelectionNavigator,
//! };
//!
//! let items = ItemCount::rows(5);
//! let mut focus = BasicFocus::new(5);
//! let mut selection = BasicSelection::new(SelectionMode::Multiple);
//! focus.focus(Some(Position::row(2)));
//!
//! let mut nav = SelectionNavigator::new();
//! nav.set_modifiers(ModifierState::new(true, false));
//!
//! // Shift+Down twice from row 2.
//! for _ in 0..2 {
//!     let mut cx = NavContext::new(&mut focus, &mut selection, &items);
//!     nav.also_select_next(&mut cx);
//! }
//!
//! assert_eq!(nav.anchor().explicit(), Some(Position::row(2)));
//! assert_eq!(focus.focused(), Some(Position::row(4)));
//! assert_eq!(selection.selected_rows(), [2, 3, 4]);
//! assert_eq!(selection.lead(), Some(Position::row(4)));
//! ```
//!
//! Operations never fail. Without a focus or selection model, with an empty
//! sequence, or at either end of the sequence they leave all state unchanged.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod anchor;
mod basic;
mod cells;
mod model;
mod navigator;
mod pointer;
mod position;
mod rows;
mod tree;

#[cfg(test)]
mod tests;

pub use anchor::{AnchorTracker, SelectionHistory};
pub use basic::{BasicFocus, BasicSelection};
pub use model::{
    FocusModel, ItemCount, ItemSource, NavContext, PageScroller, SelectionHost, SelectionModel,
    TreeItems,
};
pub use navigator::{ModifierState, NavigationEvent, SelectionNavigator};
pub use position::{Position, SelectionMode, SequenceChange, Span};
