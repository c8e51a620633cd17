// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Action names produced by the default bindings.
//!
//! Custom bindings may use any name; these are the ones the built-in handler
//! tables understand.

/// Select only the row above the focus.
pub const SELECT_PREVIOUS_ROW: &str = "SelectPreviousRow";
/// Select only the row below the focus.
pub const SELECT_NEXT_ROW: &str = "SelectNextRow";
/// Select only the first row.
pub const SELECT_FIRST_ROW: &str = "SelectFirstRow";
/// Select only the last row.
pub const SELECT_LAST_ROW: &str = "SelectLastRow";
/// Page up, selecting only the new lead row.
pub const SCROLL_UP: &str = "ScrollUp";
/// Page down, selecting only the new lead row.
pub const SCROLL_DOWN: &str = "ScrollDown";
/// Extend the range from the anchor up a row.
pub const ALSO_SELECT_PREVIOUS: &str = "AlsoSelectPrevious";
/// Extend the range from the anchor down a row.
pub const ALSO_SELECT_NEXT: &str = "AlsoSelectNext";
/// Select from the anchor to the first row.
pub const SELECT_ALL_TO_FIRST_ROW: &str = "SelectAllToFirstRow";
/// Select from the anchor to the last row.
pub const SELECT_ALL_TO_LAST_ROW: &str = "SelectAllToLastRow";
/// Select from the anchor one page up.
pub const SELECT_ALL_PAGE_UP: &str = "SelectAllPageUp";
/// Select from the anchor one page down.
pub const SELECT_ALL_PAGE_DOWN: &str = "SelectAllPageDown";
/// Select from the anchor to the focus.
pub const SELECT_ALL_TO_FOCUS: &str = "SelectAllToFocus";
/// Select from the anchor to the focus, then anchor at the focus.
pub const SELECT_ALL_TO_FOCUS_AND_SET_ANCHOR: &str = "SelectAllToFocusAndSetAnchor";
/// Select everything.
pub const SELECT_ALL: &str = "SelectAll";
/// Deselect everything.
pub const CLEAR_SELECTION: &str = "ClearSelection";
/// Toggle the focused item.
pub const TOGGLE_FOCUS_OWNER_SELECTION: &str = "ToggleFocusOwnerSelection";
/// Move focus up a row.
pub const FOCUS_PREVIOUS_ROW: &str = "FocusPreviousRow";
/// Move focus down a row.
pub const FOCUS_NEXT_ROW: &str = "FocusNextRow";
/// Move focus to the first row.
pub const FOCUS_FIRST_ROW: &str = "FocusFirstRow";
/// Move focus to the last row.
pub const FOCUS_LAST_ROW: &str = "FocusLastRow";
/// Move focus a page up.
pub const FOCUS_PAGE_UP: &str = "FocusPageUp";
/// Move focus a page down.
pub const FOCUS_PAGE_DOWN: &str = "FocusPageDown";
/// Add the row above to the selection.
pub const DISCONTINUOUS_SELECT_PREVIOUS_ROW: &str = "DiscontinuousSelectPreviousRow";
/// Add the row below to the selection.
pub const DISCONTINUOUS_SELECT_NEXT_ROW: &str = "DiscontinuousSelectNextRow";
/// Add a page of rows above.
pub const DISCONTINUOUS_SELECT_PAGE_UP: &str = "DiscontinuousSelectPageUp";
/// Add a page of rows below.
pub const DISCONTINUOUS_SELECT_PAGE_DOWN: &str = "DiscontinuousSelectPageDown";
/// Add every row up to the first.
pub const DISCONTINUOUS_SELECT_ALL_TO_FIRST_ROW: &str = "DiscontinuousSelectAllToFirstRow";
/// Add every row down to the last.
pub const DISCONTINUOUS_SELECT_ALL_TO_LAST_ROW: &str = "DiscontinuousSelectAllToLastRow";
/// Select the focused item and start editing it.
pub const ACTIVATE: &str = "Activate";
/// Cancel an edit in progress.
pub const CANCEL_EDIT: &str = "CancelEdit";

/// Select only the cell to the left.
pub const SELECT_LEFT_CELL: &str = "SelectLeftCell";
/// Select only the cell to the right.
pub const SELECT_RIGHT_CELL: &str = "SelectRightCell";
/// Extend the cell selection left.
pub const ALSO_SELECT_LEFT_CELL: &str = "AlsoSelectLeftCell";
/// Extend the cell selection right.
pub const ALSO_SELECT_RIGHT_CELL: &str = "AlsoSelectRightCell";
/// Move focus a cell left.
pub const FOCUS_LEFT_CELL: &str = "FocusLeftCell";
/// Move focus a cell right.
pub const FOCUS_RIGHT_CELL: &str = "FocusRightCell";
/// Add the cell to the left.
pub const DISCONTINUOUS_SELECT_PREVIOUS_COLUMN: &str = "DiscontinuousSelectPreviousColumn";
/// Add the cell to the right.
pub const DISCONTINUOUS_SELECT_NEXT_COLUMN: &str = "DiscontinuousSelectNextColumn";

/// Horizontal list: select only the item to the left.
pub const SELECT_LEFT_ITEM: &str = "SelectLeftItem";
/// Horizontal list: select only the item to the right.
pub const SELECT_RIGHT_ITEM: &str = "SelectRightItem";
/// Horizontal list: extend the range left.
pub const ALSO_SELECT_LEFT_ITEM: &str = "AlsoSelectLeftItem";
/// Horizontal list: extend the range right.
pub const ALSO_SELECT_RIGHT_ITEM: &str = "AlsoSelectRightItem";
/// Horizontal list: move focus left.
pub const FOCUS_LEFT_ITEM: &str = "FocusLeftItem";
/// Horizontal list: move focus right.
pub const FOCUS_RIGHT_ITEM: &str = "FocusRightItem";
/// Horizontal list: add the item to the left.
pub const DISCONTINUOUS_SELECT_LEFT_ITEM: &str = "DiscontinuousSelectLeftItem";
/// Horizontal list: add the item to the right.
pub const DISCONTINUOUS_SELECT_RIGHT_ITEM: &str = "DiscontinuousSelectRightItem";

/// Expand the focused tree item, or step into it.
pub const EXPAND_ROW: &str = "ExpandRow";
/// Collapse the focused tree item, or step out to its parent.
pub const COLLAPSE_ROW: &str = "CollapseRow";
/// Expand every tree item.
pub const EXPAND_ALL: &str = "ExpandAll";

/// Move keyboard focus to the next control.
pub const TRAVERSE_NEXT: &str = "TraverseNext";
/// Move keyboard focus to the previous control.
pub const TRAVERSE_PREVIOUS: &str = "TraversePrevious";
/// Move keyboard focus to the control above.
pub const TRAVERSE_UP: &str = "TraverseUp";
/// Move keyboard focus to the control below.
pub const TRAVERSE_DOWN: &str = "TraverseDown";
/// Move keyboard focus to the control on the left.
pub const TRAVERSE_LEFT: &str = "TraverseLeft";
/// Move keyboard focus to the control on the right.
pub const TRAVERSE_RIGHT: &str = "TraverseRight";
