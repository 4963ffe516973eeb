//! Integration test harness.
//!
//! Keep integration tests headless and deterministic:
//! - `MinimalPlugins` provides core ECS runtime; `AssetPlugin` + `ScenePlugin` back the actor scenes.
//! - time is frozen (`ManualDuration(ZERO)`), so `app.update()` never runs a fixed tick on its own.
//! - ticks are driven explicitly with `tick`, and the wall clock with `advance_wall_clock`.

#![allow(dead_code)]

use std::time::Duration;

use bevy::asset::AssetPlugin;
use bevy::ecs::message::Messages;
use bevy::prelude::*;
use bevy::scene::ScenePlugin;
use bevy::state::app::StatesPlugin;
use bevy::time::TimeUpdateStrategy;

use blaster_gallery::plugins::input::KeyEvent;

fn base_app() -> App {
    let mut app = App::new();
    app.add_plugins((
        MinimalPlugins,
        StatesPlugin,
        AssetPlugin::default(),
        ScenePlugin,
    ));
    app.insert_resource(TimeUpdateStrategy::ManualDuration(Duration::ZERO));
    app
}

/// Starts in `Loading`, like the real game.
pub fn app_headless() -> App {
    let mut app = base_app();
    blaster_gallery::game::configure_headless(&mut app);
    app
}

/// Starts inside the arena; the first `update` spawns the blaster and targets.
pub fn app_in_game() -> App {
    app_in_game_with(|_| {})
}

/// Like `app_in_game`, with a hook to insert config resources before the plugins read them.
pub fn app_in_game_with(configure: impl FnOnce(&mut App)) -> App {
    let mut app = base_app();
    configure(&mut app);
    blaster_gallery::game::configure_headless_in_game(&mut app);
    app.update();
    app
}

pub fn tick(app: &mut App, n: usize) {
    for _ in 0..n {
        app.world_mut().run_schedule(FixedUpdate);
    }
}

pub fn press(app: &mut App, token: &str) {
    app.world_mut().write_message(KeyEvent::pressed(token));
}

pub fn release(app: &mut App, token: &str) {
    app.world_mut().write_message(KeyEvent::released(token));
}

pub fn advance_wall_clock(app: &mut App, by: Duration) {
    app.world_mut().resource_mut::<Time<Real>>().advance_by(by);
}

pub fn drain<M: Message>(app: &mut App) -> Vec<M> {
    app.world_mut().resource_mut::<Messages<M>>().drain().collect()
}
