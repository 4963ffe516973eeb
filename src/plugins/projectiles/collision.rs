//! Collide pass: expire or hit, then retire.
//!
//! Order is projectiles in creation order × targets in registry order; the
//! first standing target in range wins. Lifetime is checked first, so a
//! projectile ends for exactly one reason. A knocked-down target is no longer
//! eligible, even for later projectiles in the same pass.
//!
//! The collection is rebuilt with `retain` in one pass, so removal never skips
//! or revisits an element.

use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::common::tunables::Tunables;
use crate::plugins::targets::{knock_down, RespawnSchedule, Target, TargetRegistry};

use super::components::{ActiveProjectiles, Projectile};
use super::messages::{ProjectileRetired, RetireCause};

/// Strict: a projectile exactly on the threshold misses.
#[inline]
pub fn within_hit_distance(projectile: Vec3, target: Vec3, hit_distance_sq: f32) -> bool {
    projectile.distance_squared(target) < hit_distance_sq
}

pub fn resolve_projectiles(
    mut commands: Commands,
    tunables: Res<Tunables>,
    time: Res<Time<Real>>,
    registry: Res<TargetRegistry>,
    mut active: ResMut<ActiveProjectiles>,
    mut schedule: ResMut<RespawnSchedule>,
    q_projectiles: Query<(&Transform, &Projectile)>,
    mut q_targets: Query<(&Transform, &mut Target, &mut Visibility), Without<Projectile>>,
    mut retired: MessageWriter<ProjectileRetired>,
) {
    let respawn_at = time.elapsed() + tunables.respawn_delay;

    active.retain(|&projectile| {
        let (tf, state) = q_projectiles
            .get(projectile)
            .expect("ActiveProjectiles contained an entity missing projectile components");

        let cause = if state.is_expired(tunables.projectile_lifetime_ticks) {
            RetireCause::Expired
        } else {
            let hit = registry.iter().copied().find(|&t| {
                q_targets.get(t).is_ok_and(|(target_tf, target, _)| {
                    target.is_up()
                        && within_hit_distance(tf.translation, target_tf.translation, tunables.hit_distance_sq)
                })
            });

            let Some(target) = hit else {
                return true;
            };

            let (_, mut t, mut vis) = q_targets
                .get_mut(target)
                .expect("target matched above must still be queryable");
            knock_down(target, &mut t, &mut vis, &mut schedule, respawn_at);
            debug!("{projectile:?} hit {target:?}, respawn at {respawn_at:?}");

            RetireCause::Hit { target }
        };

        commands.entity(projectile).despawn();
        retired.write(ProjectileRetired { projectile, cause });
        false
    });
}
