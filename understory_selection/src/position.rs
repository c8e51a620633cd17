// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Item addressing.

use core::ops::Range;

/// A row, optionally qualified by a column.
///
/// Row-only controls (lists, trees) leave `column` as `None`. Cell-addressable
/// controls (tables) carry the visible leaf column index.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    /// Row index in the current item sequence.
    pub row: usize,
    /// Column index, for cell-addressable controls.
    pub column: Option<usize>,
}

impl Position {
    /// A whole-row position.
    pub const fn row(row: usize) -> Self {
        Self { row, column: None }
    }

    /// A cell position.
    pub const fn cell(row: usize, column: usize) -> Self {
        Self {
            row,
            column: Some(column),
        }
    }

    /// The same column on another row.
    #[must_use]
    pub const fn with_row(self, row: usize) -> Self {
        Self {
            row,
            column: self.column,
        }
    }

    /// The same row in another column.
    #[must_use]
    pub const fn with_column(self, column: Option<usize>) -> Self {
        Self {
            row: self.row,
            column,
        }
    }

    /// Every position in the rectangle spanned by `from` and `to`, walking from
    /// `from` toward `to` so that `to` is yielded last.
    ///
    /// Rows advance in the outer loop. When only one endpoint has a column, that
    /// column is used for every row.
    ///
    /// ```
    /// use understory_selection::Position;
    ///
    /// let rows: Vec<_> = Position::span(Position::row(3), Position::row(1)).collect();
    /// assert_eq!(rows, [Position::row(3), Position::row(2), Position::row(1)]);
    ///
    /// let cells: Vec<_> = Position::span(Position::cell(0, 1), Position::cell(1, 0)).collect();
    /// assert_eq!(
    ///     cells,
    ///     [
    ///         Position::cell(0, 1),
    ///         Position::cell(0, 0),
    ///         Position::cell(1, 1),
    ///         Position::cell(1, 0),
    ///     ]
    /// );
    /// ```
    pub fn span(from: Self, to: Self) -> Span {
        let (first_col, last_col) = match (from.column, to.column) {
            (Some(a), Some(b)) => (Some(a), Some(b)),
            (Some(c), None) | (None, Some(c)) => (Some(c), Some(c)),
            (None, None) => (None, None),
        };
        Span {
            first_col,
            last_col,
            last_row: to.row,
            next: Some(Self {
                row: from.row,
                column: first_col,
            }),
        }
    }
}

const fn step_toward(from: usize, to: usize) -> usize {
    if from < to { from + 1 } else { from - 1 }
}

/// Iterator returned by [`Position::span`].
#[derive(Clone, Debug)]
pub struct Span {
    first_col: Option<usize>,
    last_col: Option<usize>,
    last_row: usize,
    next: Option<Position>,
}

impl Iterator for Span {
    type Item = Position;

    fn next(&mut self) -> Option<Position> {
        let current = self.next?;
        self.next = match (current.column, self.last_col) {
            (Some(c), Some(last)) if c != last => Some(current.with_column(Some(step_toward(c, last)))),
            _ if current.row != self.last_row => Some(Position {
                row: step_toward(current.row, self.last_row),
                column: self.first_col,
            }),
            _ => None,
        };
        Some(current)
    }
}

/// Whether a control allows one or many selected items.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum SelectionMode {
    /// At most one item is selected.
    #[default]
    Single,
    /// Any number of items may be selected.
    Multiple,
}

/// A structural change to the item sequence.
///
/// Hosts report these synchronously so that stored positions (anchor,
/// selection history, reference models) keep pointing at the same items.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SequenceChange {
    /// Rows were inserted at `range`; rows at or after `range.start` move down.
    Inserted(Range<usize>),
    /// Rows in `range` were removed; later rows move up.
    Removed(Range<usize>),
    /// The whole sequence was replaced.
    Replaced,
}

impl SequenceChange {
    /// Where `pos` lands after this change, or `None` if its item is gone.
    ///
    /// ```
    /// use understory_selection::{Position, SequenceChange};
    ///
    /// let p = Position::cell(5, 2);
    /// assert_eq!(SequenceChange::Inserted(0..2).remap(p), Some(Position::cell(7, 2)));
    /// assert_eq!(SequenceChange::Removed(4..6).remap(p), None);
    /// assert_eq!(SequenceChange::Removed(0..3).remap(p), Some(Position::cell(2, 2)));
    /// ```
    pub fn remap(&self, pos: Position) -> Option<Position> {
        match self {
            Self::Inserted(range) if pos.row >= range.start => {
                Some(pos.with_row(pos.row + range.len()))
            }
            Self::Inserted(_) => Some(pos),
            Self::Removed(range) if range.contains(&pos.row) => None,
            Self::Removed(range) if pos.row >= range.end => Some(pos.with_row(pos.row - range.len())),
            Self::Removed(_) => Some(pos),
            Self::Replaced => None,
        }
    }
}
