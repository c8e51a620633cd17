// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Layered action-name dispatch.
//!
//! An [`ActionDispatcher`] holds an ordered list of [`ActionTable`]s. The first
//! layer is the most specific (for example a tree control's own actions), and
//! later layers are progressively more generic (for example the actions shared
//! by every list-like control). Dispatch tries each layer in order and runs
//! the first handler registered under the action name.
//!
//! Handlers are plain function pointers taking the dispatch target and a
//! caller-supplied context, so tables can be built once and shared by value.

use alloc::vec::Vec;
use core::fmt;

use hashbrown::HashMap;

use crate::ActionName;

/// A handler invoked for an action name.
pub type Handler<T, C> = fn(&mut T, &mut C);

/// One layer of name → handler mappings.
pub struct ActionTable<T, C> {
    label: &'static str,
    handlers: HashMap<ActionName, Handler<T, C>>,
}

impl<T, C> ActionTable<T, C> {
    /// An empty table labelled `label` in logs and dispatch results.
    pub fn new(label: &'static str) -> Self {
        Self {
            label,
            handlers: HashMap::new(),
        }
    }

    /// Register `handler` under `name`, replacing any previous handler.
    pub fn insert(&mut self, name: impl Into<ActionName>, handler: Handler<T, C>) {
        self.handlers.insert(name.into(), handler);
    }

    /// Builder form of [`insert`](Self::insert).
    #[must_use]
    pub fn with(mut self, name: impl Into<ActionName>, handler: Handler<T, C>) -> Self {
        self.insert(name, handler);
        self
    }

    /// The handler registered under `name` in this layer.
    pub fn get(&self, name: &str) -> Option<Handler<T, C>> {
        self.handlers.get(name).copied()
    }

    /// Returns `true` if this layer handles `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.handlers.contains_key(name)
    }

    /// The layer label.
    pub fn label(&self) -> &'static str {
        self.label
    }

    /// Number of registered actions.
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    /// Returns `true` if no actions are registered.
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

impl<T, C> Clone for ActionTable<T, C> {
    fn clone(&self) -> Self {
        Self {
            label: self.label,
            handlers: self.handlers.clone(),
        }
    }
}

impl<T, C> fmt::Debug for ActionTable<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<&str> = self.handlers.keys().map(|k| &**k).collect();
        names.sort_unstable();
        f.debug_struct("ActionTable")
            .field("label", &self.label)
            .field("handlers", &names)
            .finish()
    }
}

/// Result of [`ActionDispatcher::dispatch`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Dispatched {
    /// A handler ran; `layer` is the label of the table that supplied it.
    Handled {
        /// Label of the handling layer.
        layer: &'static str,
    },
    /// No layer registers the action.
    Unhandled,
}

impl Dispatched {
    /// Returns `true` if a handler ran.
    pub fn is_handled(self) -> bool {
        matches!(self, Self::Handled { .. })
    }
}

/// Ordered chain of action tables, most specific first.
pub struct ActionDispatcher<T, C> {
    layers: Vec<ActionTable<T, C>>,
}

impl<T, C> Default for ActionDispatcher<T, C> {
    fn default() -> Self {
        Self { layers: Vec::new() }
    }
}

impl<T, C> Clone for ActionDispatcher<T, C> {
    fn clone(&self) -> Self {
        Self {
            layers: self.layers.clone(),
        }
    }
}

impl<T, C> fmt::Debug for ActionDispatcher<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(&self.layers).finish()
    }
}

impl<T, C> ActionDispatcher<T, C> {
    /// A dispatcher with no layers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `table` as the new most generic layer.
    #[must_use]
    pub fn with_fallback(mut self, table: ActionTable<T, C>) -> Self {
        self.layers.push(table);
        self
    }

    /// Insert `table` ahead of every existing layer.
    #[must_use]
    pub fn with_override(mut self, table: ActionTable<T, C>) -> Self {
        self.layers.insert(0, table);
        self
    }

    /// The layers, most specific first.
    pub fn layers(&self) -> &[ActionTable<T, C>] {
        &self.layers
    }

    /// Returns `true` if any layer handles `name`.
    pub fn handles(&self, name: &str) -> bool {
        self.layers.iter().any(|layer| layer.contains(name))
    }

    /// Run the most specific handler registered for `name`.
    pub fn dispatch(&self, name: &str, target: &mut T, cx: &mut C) -> Dispatched {
        for layer in &self.layers {
            if let Some(handler) = layer.get(name) {
                log::trace!("dispatching {name} via {}", layer.label);
                handler(target, cx);
                return Dispatched::Handled { layer: layer.label };
            }
        }
        log::warn!("no handler for action {name}");
        Dispatched::Unhandled
    }
}
