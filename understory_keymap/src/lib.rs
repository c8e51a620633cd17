// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Understory Keymap: conditional key bindings and action dispatch.
//!
//! This crate turns translated input events into named actions and routes
//! those names to handlers:
//! - **Bindings** ([`KeyBinding`]) constrain a key (or any key), the event type,
//!   each modifier ([`ModifierReq`]), and the control's orientation, and name
//!   the action they produce.
//! - A **table** ([`KeyBindingTable`]) keeps bindings in declaration order with
//!   a per-key index.
//! - A **resolver** ([`BindingResolver`]) picks the most specific matching
//!   binding, breaks ties by declaration order, and mirrors directional actions
//!   for right-to-left layouts via a [`MirrorTable`].
//! - A **dispatcher** ([`ActionDispatcher`]) maps action names to handlers
//!   through an ordered chain of [`ActionTable`] layers, falling back from the
//!   most specific layer to the most generic.
//!
//! ## Minimal example
//!
//! ```rust
//! use understory_keymap::{
//!     BindingResolver, ControlLayout, KeyBinding, KeyBindingTable, KeyCode, KeyEvent,
//!     MirrorTable, Modifiers, Orientation, TextDirection,
//! };
//!
//! let table = KeyBindingTable::new()
//!     .with(KeyBinding::new(KeyCode::Down, "SelectNextRow").vertical_only())
//!     .with(KeyBinding::new(KeyCode::Down, "AlsoSelectNext").vertical_only().shift())
//!     .with(KeyBinding::new(KeyCode::Left, "SelectLeftCell"))
//!     .with(KeyBinding::new(KeyCode::Right, "SelectRightCell"));
//! let resolver = BindingResolver::new(table, MirrorTable::standard());
//!
//! let ltr = ControlLayout::new(Orientation::Vertical);
//! let shift_down = KeyEvent::pressed(KeyCode::Down).with_modifiers(Modifiers::SHIFT);
//! assert_eq!(resolver.resolve(&shift_down, &ltr), Some("AlsoSelectNext"));
//!
//! // Under right-to-left layout the left arrow moves toward the right cell.
//! let rtl = ltr.with_direction(TextDirection::Rtl);
//! let left = KeyEvent::pressed(KeyCode::Left);
//! assert_eq!(resolver.resolve(&left, &rtl), Some("SelectRightCell"));
//! ```
//!
//! ## Features
//!
//! - `std` (default): enables `std` support for dependencies such as `kurbo`.
//! - `libm`: enables `no_std` + `alloc` builds that rely on `libm` for floating-point math.
//! - `serde`: derives `Serialize`/`Deserialize` for bindings and enables
//!   [`KeymapConfig`](crate::KeymapConfig) for loading keymaps from data.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod binding;
mod chord;
#[cfg(feature = "serde")]
mod config;
mod dispatch;
mod error;
mod event;
mod layout;
mod platform;
mod resolve;
mod table;

pub use binding::{ActionName, KeyBinding, KeyPattern, Modifier, ModifierReq};
pub use chord::KeyChord;
#[cfg(feature = "serde")]
pub use config::{BindingConfig, KeymapConfig};
pub use dispatch::{ActionDispatcher, ActionTable, Dispatched, Handler};
pub use error::ParseError;
pub use event::{
    EventType, InputEvent, KeyCode, KeyEvent, Modifiers, PointerEvent, PointerEventType,
};
pub use layout::{ControlLayout, LayoutSource, Orientation, OrientationReq, TextDirection};
pub use platform::Platform;
pub use resolve::{BindingResolver, MirrorTable};
pub use table::KeyBindingTable;
