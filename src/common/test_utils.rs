//! Test helpers.
//!
//! Systems that use `Commands` enqueue structural changes; schedules apply them at
//! boundaries. Running a system by hand skips that, so we flush after every run.

use std::time::{Duration, Instant};

use bevy::ecs::system::{IntoSystem, RunSystemOnce};
use bevy::prelude::*;

use crate::common::tunables::{KeyBindings, Tunables};

/// Run a system once on the given world, then flush deferred commands.
/// Returns the system output.
pub fn run_system_once<T, Out, Marker>(world: &mut World, system: T) -> Out
where
    T: IntoSystem<(), Out, Marker>,
{
    let out = world.run_system_once(system).expect("system run failed");
    world.flush();
    out
}

/// A world holding the config resources every tick system reads, plus a wall clock at zero.
pub fn tick_world() -> World {
    let mut world = World::new();
    world.insert_resource(Tunables::default());
    world.insert_resource(KeyBindings::default());
    world.insert_resource(Time::<Real>::new(Instant::now()));
    world
}

/// Move the wall clock forward without touching any other time resource.
pub fn advance_real_time(world: &mut World, by: Duration) {
    world.resource_mut::<Time<Real>>().advance_by(by);
}
