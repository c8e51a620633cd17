// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The per-control driver tying resolution, dispatch, and navigation together.

use alloc::string::String;
use core::fmt;

use understory_keymap::{
    ActionDispatcher, ActionName, ActionTable, BindingResolver, Dispatched, EventType, InputEvent,
    KeyBinding, KeyEvent, Modifiers, Platform, PointerEvent, PointerEventType,
};
use understory_selection::{ModifierState, NavigationEvent, SelectionNavigator, SequenceChange};

use crate::{ControlHost, ControlKind};

/// What [`Behavior::handle_key`] did with a key event.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum KeyOutcome {
    /// No binding matched; the event should continue to the parent.
    Unbound,
    /// The event resolved to this action and a handler ran.
    Handled(ActionName),
    /// The event resolved to this action but no layer handles it.
    Unhandled(ActionName),
}

impl KeyOutcome {
    /// Returns `true` if a handler ran.
    pub fn is_handled(&self) -> bool {
        matches!(self, Self::Handled(_))
    }
}

/// Input behavior for one list, table, or tree control instance.
///
/// A behavior owns the binding resolver, the action dispatcher, and the
/// [`SelectionNavigator`] state for its control. The control itself is passed
/// to each call as a [`ControlHost`].
pub struct Behavior<H> {
    kind: ControlKind,
    platform: Platform,
    resolver: BindingResolver,
    dispatcher: ActionDispatcher<SelectionNavigator, H>,
    navigator: SelectionNavigator,
}

impl<H> fmt::Debug for Behavior<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Behavior")
            .field("kind", &self.kind)
            .field("platform", &self.platform)
            .field("resolver", &self.resolver)
            .field("dispatcher", &self.dispatcher)
            .field("navigator", &self.navigator)
            .finish()
    }
}

impl<H: ControlHost> Behavior<H> {
    /// Default behavior for `kind` on the current platform.
    pub fn new(kind: ControlKind) -> Self {
        Self::with_platform(kind, Platform::current())
    }

    /// Default behavior for `kind` using `platform`'s key conventions.
    pub fn with_platform(kind: ControlKind, platform: Platform) -> Self {
        Self {
            kind,
            platform,
            resolver: BindingResolver::new(kind.bindings(platform), kind.mirror_table()),
            dispatcher: kind.actions(),
            navigator: SelectionNavigator::new(),
        }
    }

    /// Declare `bindings` ahead of the current table so they win ties.
    #[must_use]
    pub fn with_overrides(mut self, bindings: impl IntoIterator<Item = KeyBinding>) -> Self {
        let table = self.resolver.table().clone().with_overrides(bindings);
        self.resolver.set_table(table);
        self
    }

    /// Layer a configured keymap in front of the current bindings.
    #[cfg(feature = "serde")]
    pub fn with_keymap(
        self,
        keymap: &understory_keymap::KeymapConfig,
    ) -> Result<Self, understory_keymap::ParseError> {
        let table = keymap.to_table(self.platform)?;
        Ok(self.with_overrides(table.iter().cloned()))
    }

    /// Insert `actions` ahead of every existing dispatch layer.
    #[must_use]
    pub fn with_actions(mut self, actions: ActionTable<SelectionNavigator, H>) -> Self {
        self.dispatcher = core::mem::take(&mut self.dispatcher).with_override(actions);
        self
    }

    /// The kind of control.
    pub fn kind(&self) -> ControlKind {
        self.kind
    }

    /// The platform whose key conventions are in use.
    pub fn platform(&self) -> Platform {
        self.platform
    }

    /// The binding resolver.
    pub fn resolver(&self) -> &BindingResolver {
        &self.resolver
    }

    /// The dispatch layers.
    pub fn dispatcher(&self) -> &ActionDispatcher<SelectionNavigator, H> {
        &self.dispatcher
    }

    /// The navigator state.
    pub fn navigator(&self) -> &SelectionNavigator {
        &self.navigator
    }

    /// Mutable navigator state, for explicit anchor changes and the like.
    pub fn navigator_mut(&mut self) -> &mut SelectionNavigator {
        &mut self.navigator
    }

    /// Register an observer for navigation events.
    pub fn on_navigate(&mut self, observer: impl FnMut(NavigationEvent) + 'static) {
        self.navigator.on_navigate(observer);
    }

    /// Remap navigator state after the host's item sequence changed.
    pub fn on_sequence_changed(&mut self, change: &SequenceChange) {
        self.navigator.on_sequence_changed(change);
    }

    /// The action `event` resolves to for `host`, without running it.
    pub fn resolve(&self, event: &KeyEvent, host: &H) -> Option<&str> {
        self.resolver.resolve(event, host)
    }

    fn modifier_state(&self, pressed: bool, modifiers: Modifiers) -> ModifierState {
        ModifierState::new(
            pressed && modifiers.shift(),
            pressed && self.platform.is_shortcut_down(modifiers),
        )
    }

    /// Resolve a key event and run its action.
    ///
    /// The navigator observes the event's modifiers for the duration of the
    /// action; a release clears them.
    pub fn handle_key(&mut self, event: &KeyEvent, host: &mut H) -> KeyOutcome {
        let pressed = event.event_type == EventType::Pressed;
        self.navigator
            .set_modifiers(self.modifier_state(pressed, event.modifiers));
        let Some(action) = self.resolver.resolve(event, &*host) else {
            log::trace!("no binding for {} {:?}", event.key, event.event_type);
            return KeyOutcome::Unbound;
        };
        let name = ActionName::Owned(String::from(action));
        match self.dispatcher.dispatch(action, &mut self.navigator, host) {
            Dispatched::Handled { .. } => KeyOutcome::Handled(name),
            Dispatched::Unhandled => KeyOutcome::Unhandled(name),
        }
    }

    /// Handle a pointer event. Returns `true` if it selected something.
    ///
    /// Only primary-button presses on an item are handled. A double click
    /// without modifiers asks the host to edit the clicked item.
    pub fn handle_pointer(&mut self, event: &PointerEvent, host: &mut H) -> bool {
        if event.event_type != PointerEventType::Pressed || event.button != 1 {
            return false;
        }
        let Some(pos) = host.hit_test(event.position) else {
            return false;
        };
        let modifiers = self.modifier_state(true, event.modifiers);
        self.navigator.set_modifiers(modifiers);
        let activated = self.navigator.press(
            &mut host.nav_context(),
            pos,
            modifiers,
            u32::from(event.click_count),
        );
        if let Some(pos) = activated {
            host.edit(pos);
        }
        true
    }

    /// Handle any input event. Returns `true` if it was consumed.
    pub fn handle(&mut self, event: &InputEvent, host: &mut H) -> bool {
        match event {
            InputEvent::Key(key) => self.handle_key(key, host).is_handled(),
            InputEvent::Pointer(pointer) => self.handle_pointer(pointer, host),
        }
    }
}
