// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Layout state consulted while resolving bindings.

/// Axis along which a control lays out its items.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Items flow left to right (or right to left under RTL).
    Horizontal,
    /// Items flow top to bottom.
    #[default]
    Vertical,
}

/// Effective text direction of a control.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum TextDirection {
    /// Left to right.
    #[default]
    Ltr,
    /// Right to left; directional actions are mirrored.
    Rtl,
}

/// Orientation predicate attached to a binding.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum OrientationReq {
    /// Active regardless of orientation.
    #[default]
    Any,
    /// Only active while the control is laid out horizontally.
    HorizontalOnly,
    /// Only active while the control is laid out vertically.
    VerticalOnly,
}

impl OrientationReq {
    /// Returns `true` if a control with `orientation` satisfies this predicate.
    pub const fn matches(self, orientation: Orientation) -> bool {
        match self {
            Self::Any => true,
            Self::HorizontalOnly => matches!(orientation, Orientation::Horizontal),
            Self::VerticalOnly => matches!(orientation, Orientation::Vertical),
        }
    }
}

/// Live layout queries a resolver makes against a control.
pub trait LayoutSource {
    /// Current item orientation.
    fn orientation(&self) -> Orientation;

    /// Current effective text direction.
    fn text_direction(&self) -> TextDirection;

    /// Returns `true` if the effective direction is right to left.
    fn is_rtl(&self) -> bool {
        self.text_direction() == TextDirection::Rtl
    }
}

/// A plain snapshot of layout state.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct ControlLayout {
    /// Item orientation.
    pub orientation: Orientation,
    /// Effective text direction.
    pub direction: TextDirection,
}

impl ControlLayout {
    /// A left-to-right layout with the given orientation.
    pub const fn new(orientation: Orientation) -> Self {
        Self {
            orientation,
            direction: TextDirection::Ltr,
        }
    }

    /// Replace the text direction.
    #[must_use]
    pub const fn with_direction(mut self, direction: TextDirection) -> Self {
        self.direction = direction;
        self
    }
}

impl LayoutSource for ControlLayout {
    fn orientation(&self) -> Orientation {
        self.orientation
    }

    fn text_direction(&self) -> TextDirection {
        self.direction
    }
}

impl<L: LayoutSource + ?Sized> LayoutSource for &L {
    fn orientation(&self) -> Orientation {
        (**self).orientation()
    }

    fn text_direction(&self) -> TextDirection {
        (**self).text_direction()
    }
}
