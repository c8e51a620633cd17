// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The interface a control implements to be driven by a [`Behavior`](crate::Behavior).

use kurbo::Point;
use understory_keymap::LayoutSource;
use understory_selection::{Position, SelectionHost};

/// Direction of a focus traversal request.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Traversal {
    /// The next control in tab order.
    Next,
    /// The previous control in tab order.
    Previous,
    /// The control above.
    Up,
    /// The control below.
    Down,
    /// The control to the left.
    Left,
    /// The control to the right.
    Right,
}

/// A list, table, or tree control.
///
/// Besides lending its models through [`SelectionHost`] and reporting layout
/// through [`LayoutSource`], a host receives the requests the navigator cannot
/// carry out on its own. Every hook defaults to doing nothing.
pub trait ControlHost: SelectionHost + LayoutSource {
    /// Move keyboard focus out of the control.
    fn traverse(&mut self, direction: Traversal) {
        log::trace!("traversal {direction:?} ignored");
    }

    /// Start editing the item at `pos`.
    fn edit(&mut self, pos: Position) {
        log::trace!("edit at {pos:?} ignored");
    }

    /// Cancel an edit in progress.
    fn cancel_edit(&mut self) {}

    /// The item under `point`, in control-local coordinates.
    fn hit_test(&self, point: Point) -> Option<Position> {
        log::trace!("no hit testing for {point:?}");
        None
    }
}
