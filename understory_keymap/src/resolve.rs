// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Event-to-action resolution.
//!
//! Resolution picks the most specific matching binding from a
//! [`KeyBindingTable`], breaking ties by declaration order, and then swaps the
//! action for its mirror image when the control is laid out right to left.

use alloc::vec::Vec;

use crate::{ActionName, KeyBinding, KeyBindingTable, KeyEvent, LayoutSource, Orientation};

/// Pairs of directional action names swapped under right-to-left layout.
///
/// Mirroring is symmetric: registering `(a, b)` maps `a` to `b` and `b` to `a`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MirrorTable {
    pairs: Vec<(ActionName, ActionName)>,
}

impl MirrorTable {
    /// An empty table; nothing is mirrored.
    pub fn new() -> Self {
        Self::default()
    }

    /// The left/right pairs shared by list, table, and tree controls.
    pub fn standard() -> Self {
        Self::new()
            .with_pair("SelectLeftCell", "SelectRightCell")
            .with_pair("AlsoSelectLeftCell", "AlsoSelectRightCell")
            .with_pair("FocusLeftCell", "FocusRightCell")
            .with_pair(
                "DiscontinuousSelectPreviousColumn",
                "DiscontinuousSelectNextColumn",
            )
            .with_pair("TraverseLeft", "TraverseRight")
    }

    /// Add a mirror pair.
    #[must_use]
    pub fn with_pair(mut self, a: impl Into<ActionName>, b: impl Into<ActionName>) -> Self {
        self.pairs.push((a.into(), b.into()));
        self
    }

    /// The mirror image of `action`, if it has one.
    pub fn mirror(&self, action: &str) -> Option<&str> {
        self.pairs.iter().find_map(|(a, b)| {
            if a == action {
                Some(&**b)
            } else if b == action {
                Some(&**a)
            } else {
                None
            }
        })
    }
}

/// Resolves input events against a binding table.
#[derive(Clone, Debug, Default)]
pub struct BindingResolver {
    table: KeyBindingTable,
    mirror: MirrorTable,
}

impl BindingResolver {
    /// A resolver over `table` that mirrors actions listed in `mirror`.
    pub fn new(table: KeyBindingTable, mirror: MirrorTable) -> Self {
        Self { table, mirror }
    }

    /// The binding table.
    pub fn table(&self) -> &KeyBindingTable {
        &self.table
    }

    /// The mirror pairs.
    pub fn mirror_table(&self) -> &MirrorTable {
        &self.mirror
    }

    /// Replace the binding table, keeping the mirror pairs.
    pub fn set_table(&mut self, table: KeyBindingTable) {
        self.table = table;
    }

    /// The winning binding for `event` under `orientation`, before mirroring.
    ///
    /// Highest [`specificity`](KeyBinding::specificity) wins; among equals the
    /// earliest declared binding wins.
    pub fn best_match(&self, event: &KeyEvent, orientation: Orientation) -> Option<&KeyBinding> {
        let mut best: Option<&KeyBinding> = None;
        for binding in self.table.candidates(event.key) {
            if !binding.matches(event, orientation) {
                continue;
            }
            if best.is_none_or(|b| binding.specificity() > b.specificity()) {
                best = Some(binding);
            }
        }
        best
    }

    /// Resolve `event` to an action name for a control with `layout`.
    ///
    /// Returns `None` when nothing matches. Under right-to-left layout a
    /// mirrored action is replaced by its counterpart.
    pub fn resolve(&self, event: &KeyEvent, layout: &impl LayoutSource) -> Option<&str> {
        let binding = self.best_match(event, layout.orientation())?;
        let action = binding.action();
        if layout.is_rtl() {
            if let Some(mirrored) = self.mirror.mirror(action) {
                log::trace!("mirrored {action} to {mirrored} for right-to-left layout");
                return Some(mirrored);
            }
        }
        Some(action)
    }
}
