//! Game composition root.
//!
//! Provides three public configuration functions:
//! - `configure_full`: includes DefaultPlugins (window/render) + game plugins.
//! - `configure_headless`: gameplay only, starting with actor loading.
//! - `configure_headless_in_game`: gameplay only, starting inside the arena.
//!   Actor loading never runs, so scene handles stay at their defaults.

use bevy::prelude::*;
use bevy::window::WindowResolution;

use crate::common::state::GameState;
use crate::plugins;

pub fn run() {
    App::new().add_plugins(configure_full).run();
}

/// Full configuration for `cargo run`.
pub fn configure_full(app: &mut App) {
    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Blaster Gallery".into(),
            resolution: WindowResolution::new(1280, 720),
            ..default()
        }),
        ..default()
    }));

    configure_game(app, GameState::Loading);
    plugins::register_render(app);
}

/// Headless configuration for integration tests.
///
/// Notes:
/// - Do NOT add DefaultPlugins.
/// - Do NOT add render-only plugins (camera/lighting).
pub fn configure_headless(app: &mut App) {
    configure_game(app, GameState::Loading);
}

/// Headless configuration that opens the arena immediately.
pub fn configure_headless_in_game(app: &mut App) {
    configure_game(app, GameState::InGame);
}

/// Configuration shared by both full and headless apps.
fn configure_game(app: &mut App, initial: GameState) {
    app.insert_state(initial);
    plugins::register_gameplay(app);
}
