//! Input plugin: raw keyboard messages -> canonical key tokens -> held-key state.
//!
//! Pipeline:
//! - PreUpdate: `forward_keyboard_input` normalizes each `KeyboardInput` into a `KeyEvent`
//! - FixedUpdate (`TickSet::Input`): `drain_key_events` applies queued events to `InputState`
//!
//! `KeyEvent` is a registered message, so events written between ticks survive
//! until the next fixed tick reads them, even when a frame runs no tick.
//! Within one tick, events apply in arrival order (last write wins).
//!
//! Losing window focus releases every held key without firing, since the
//! matching key-up events never arrive.

use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::input::InputPlugin;
use bevy::input::keyboard::{Key, KeyboardFocusLost, KeyboardInput};
use bevy::platform::collections::HashSet;
use bevy::prelude::*;

use crate::common::state::TickSet;
use crate::common::tunables::KeyBindings;

/// One key going down or up, named by its canonical token.
#[derive(Message, Debug, Clone, PartialEq, Eq)]
pub enum KeyEvent {
    Pressed(String),
    Released(String),
    /// Every key counts as released; fire is not triggered.
    FocusLost,
}

impl KeyEvent {
    pub fn pressed(token: impl Into<String>) -> Self {
        Self::Pressed(token.into())
    }

    pub fn released(token: impl Into<String>) -> Self {
        Self::Released(token.into())
    }
}

/// Currently held keys, plus fire releases not yet turned into shots.
#[derive(Resource, Debug, Default)]
pub struct InputState {
    held: HashSet<String>,
    pending_fire: u32,
}

impl InputState {
    pub fn apply(&mut self, event: &KeyEvent, bindings: &KeyBindings) {
        match event {
            KeyEvent::Pressed(token) => {
                self.held.insert(token.clone());
            }
            KeyEvent::Released(token) => {
                self.held.remove(token);
                if bindings.fire.contains(token) {
                    self.pending_fire += 1;
                }
            }
            KeyEvent::FocusLost => self.held.clear(),
        }
    }

    pub fn any_held(&self, tokens: &[String]) -> bool {
        tokens.iter().any(|t| self.held.contains(t))
    }

    #[cfg(test)]
    pub(crate) fn is_held(&self, token: &str) -> bool {
        self.held.contains(token)
    }

    #[cfg(test)]
    pub(crate) fn held_count(&self) -> usize {
        self.held.len()
    }

    /// Returns and clears the number of fire releases seen since the last call.
    pub fn take_fire_requests(&mut self) -> u32 {
        std::mem::take(&mut self.pending_fire)
    }
}

/// Canonical lowercase token for a logical key.
///
/// Characters keep their (lowercased) text, named keys use their lowercased name
/// (`Shift` -> `shift`, `ArrowLeft` -> `arrowleft`, `Space` -> `space`).
/// Dead and unidentified keys have no token.
pub fn normalize_key(key: &Key) -> Option<String> {
    match key {
        Key::Character(text) => Some(text.to_lowercase()),
        Key::Unidentified(_) | Key::Dead(_) => None,
        named => Some(format!("{named:?}").to_lowercase()),
    }
}

pub fn plugin(app: &mut App) {
    if !app.is_plugin_added::<InputPlugin>() {
        app.add_plugins(InputPlugin);
    }

    app.add_message::<KeyEvent>()
        .init_resource::<InputState>()
        .add_systems(PreUpdate, forward_keyboard_input)
        .add_systems(FixedUpdate, drain_key_events.in_set(TickSet::Input));
}

pub fn forward_keyboard_input(
    mut raw: MessageReader<KeyboardInput>,
    mut focus_lost: MessageReader<KeyboardFocusLost>,
    mut out: MessageWriter<KeyEvent>,
) {
    for ev in raw.read() {
        // OS auto-repeat would only re-insert a held key.
        if ev.repeat {
            continue;
        }
        let Some(token) = normalize_key(&ev.logical_key) else {
            trace!("Ignoring key without a token: {:?}", ev.logical_key);
            continue;
        };
        out.write(if ev.state.is_pressed() {
            KeyEvent::Pressed(token)
        } else {
            KeyEvent::Released(token)
        });
    }

    // Focus loss lands after this frame's keys.
    if focus_lost.read().count() > 0 {
        debug!("Keyboard focus lost, releasing held keys");
        out.write(KeyEvent::FocusLost);
    }
}

pub fn drain_key_events(
    mut events: MessageReader<KeyEvent>,
    bindings: Res<KeyBindings>,
    mut input: ResMut<InputState>,
) {
    for ev in events.read() {
        input.apply(ev, &bindings);
    }
}
