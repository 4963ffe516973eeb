use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::common::tunables::Tunables;
use crate::plugins::actors::ActorBounds;
use crate::plugins::blaster::Blaster;
use crate::plugins::input::InputState;

use super::messages::SpawnProjectileRequest;

/// Where a shot leaves the blaster: lifted by the muzzle height and pushed out
/// along the facing by half the blaster's depth, flying at projectile speed.
pub fn muzzle_pose(blaster: &Transform, bounds: &ActorBounds, tunables: &Tunables) -> SpawnProjectileRequest {
    let forward = blaster.forward().as_vec3();

    SpawnProjectileRequest {
        translation: blaster.translation
            + Vec3::Y * tunables.muzzle_height
            + forward * bounds.half_depth(),
        rotation: blaster.rotation,
        velocity: forward * tunables.projectile_speed,
    }
}

/// Producer: one request per fire release since the last tick.
///
/// Runs after steering so shots leave from this tick's pose.
/// This system does **not** spawn anything.
pub fn request_projectiles(
    mut input: ResMut<InputState>,
    tunables: Res<Tunables>,
    q_blaster: Query<(&Transform, &ActorBounds), With<Blaster>>,
    mut writer: MessageWriter<SpawnProjectileRequest>,
) {
    let shots = input.take_fire_requests();
    if shots == 0 {
        return;
    }

    let (tf, bounds) = match q_blaster.single() {
        Ok(v) => v,
        Err(e) => {
            debug!("No single Blaster to fire from, dropping {shots} shot(s): {e:?}");
            return;
        }
    };

    let request = muzzle_pose(tf, bounds, &tunables);
    for _ in 0..shots {
        writer.write(request);
    }
}
