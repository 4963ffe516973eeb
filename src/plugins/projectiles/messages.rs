//! Buffered projectile traffic.
//!
//! Producers create *intent*, a single consumer applies it:
//! - `SpawnProjectileRequest`: fire release -> projectile entity
//! - `ProjectileRetired`: the collide pass reports every projectile it removed

use bevy::prelude::*;

#[derive(Message, Clone, Copy, Debug, PartialEq)]
pub struct SpawnProjectileRequest {
    pub translation: Vec3,
    pub rotation: Quat,
    /// Units per tick.
    pub velocity: Vec3,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RetireCause {
    /// Lived for the full lifetime without hitting anything.
    Expired,
    Hit { target: Entity },
}

#[derive(Message, Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProjectileRetired {
    pub projectile: Entity,
    pub cause: RetireCause,
}
