//! Projectiles plugin: **message-based producer → consumer** spawning plus a
//! per-tick integrate / collide / retire loop.
//!
//! # Data flow (one fixed tick)
//! ```text
//!┌────────────────────────────────────────────────────────────────────────────┐
//!│  Motion                                                                    │
//!│  (A) blaster::steer (elsewhere) moves the blaster                          │
//!│  (B) Producer: request_projectiles                                         │
//!│      - reads: InputState fire releases, Blaster Transform + ActorBounds    │
//!│      - writes: SpawnProjectileRequest message                              │
//!│  (C) Consumer: spawn_projectiles                                           │
//!│      - reads: SpawnProjectileRequest, ActorCatalog projectile template     │
//!│      - mutates: ActiveProjectiles (push, creation order)                   │
//!├────────────────────────────────────────────────────────────────────────────┤
//!│  Integrate                                                                 │
//!│  (D) advance_projectiles: position += velocity, age += 1                   │
//!├────────────────────────────────────────────────────────────────────────────┤
//!│  Collide                                                                   │
//!│  (E) resolve_projectiles                                                   │
//!│      - expired -> retire; else first standing target in range -> hit       │
//!│      - mutates: ActiveProjectiles (retain), Target, RespawnSchedule        │
//!│      - writes: ProjectileRetired message, despawns the projectile          │
//!└────────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Producers never touch `ActiveProjectiles`; the consumer appends and the
//! collide pass removes. That keeps ownership of the collection in two places
//! with a fixed order between them.

pub mod collision;
pub mod components;
pub mod messages;
pub mod motion;
pub mod request;
pub mod spawn;

use bevy::prelude::*;

use crate::common::state::{GameState, TickSet};
use crate::plugins::blaster;

pub struct ProjectilesPlugin;

fn reset_active(mut active: ResMut<components::ActiveProjectiles>) {
    active.clear();
}

impl Plugin for ProjectilesPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<components::ActiveProjectiles>()
            .add_message::<messages::SpawnProjectileRequest>()
            .add_message::<messages::ProjectileRetired>()
            .add_systems(OnExit(GameState::InGame), reset_active);

        // Motion: steer -> request -> spawn
        app.add_systems(
            FixedUpdate,
            (
                request::request_projectiles.after(blaster::steer),
                spawn::spawn_projectiles.after(request::request_projectiles),
            )
                .in_set(TickSet::Motion),
        );

        app.add_systems(
            FixedUpdate,
            motion::advance_projectiles.in_set(TickSet::Integrate),
        )
        .add_systems(
            FixedUpdate,
            collision::resolve_projectiles.in_set(TickSet::Collide),
        );
    }
}
