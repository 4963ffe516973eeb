use bevy::prelude::*;

#[derive(Component, Debug, Clone)]
pub struct Projectile {
    /// Units per tick.
    pub velocity: Vec3,
    pub age_ticks: u32,
}

impl Projectile {
    pub fn new(velocity: Vec3) -> Self {
        Self { velocity, age_ticks: 0 }
    }

    #[inline]
    pub fn is_expired(&self, lifetime_ticks: u32) -> bool {
        self.age_ticks >= lifetime_ticks
    }
}

/// Live projectiles in creation order.
///
/// Invariant: every entry carries `Projectile` + `Transform` until it is removed
/// here, and it is despawned in the same pass that removes it.
#[derive(Resource, Debug, Default, Deref, DerefMut)]
pub struct ActiveProjectiles(pub Vec<Entity>);
