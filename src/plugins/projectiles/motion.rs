use bevy::prelude::*;

use super::components::Projectile;

/// Explicit Euler step: one velocity per tick, no acceleration.
pub fn advance_projectiles(mut q: Query<(&mut Transform, &mut Projectile)>) {
    for (mut tf, mut projectile) in &mut q {
        tf.translation += projectile.velocity;
        projectile.age_ticks += 1;
    }
}
