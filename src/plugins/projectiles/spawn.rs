//! Spawn consumer: turn requests into projectile entities.
//!
//! The projectile model comes from the cached catalog template; nothing is
//! loaded here. A template that failed to load makes every shot a no-op.

use std::f32::consts::FRAC_PI_2;

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;

use crate::common::state::GameState;
use crate::plugins::actors::ActorCatalog;

use super::components::{ActiveProjectiles, Projectile};
use super::messages::SpawnProjectileRequest;

pub fn spawn_projectiles(
    mut commands: Commands,
    catalog: Res<ActorCatalog>,
    mut requests: MessageReader<SpawnProjectileRequest>,
    mut active: ResMut<ActiveProjectiles>,
) {
    for req in requests.read() {
        if !catalog.projectile_usable() {
            warn!("Projectile model unavailable ({}), dropping shot", catalog.projectile.path);
            continue;
        }

        let e = commands
            .spawn((
                Name::new("Projectile"),
                Projectile::new(req.velocity),
                Transform::from_translation(req.translation).with_rotation(req.rotation),
                Visibility::Visible,
                DespawnOnExit(GameState::InGame),
            ))
            .with_children(|parent| {
                // The model is authored pointing up; lay it along the flight axis.
                let upright = Transform::from_rotation(Quat::from_rotation_x(-FRAC_PI_2));
                parent.spawn(catalog.projectile.model(upright));
            })
            .id();

        active.push(e);
    }
}
