//! Tunable gameplay constants and the hardcoded arena description.
//!
//! Every value here is per-tick unless it carries a `Duration`. Ticks run in
//! `FixedUpdate` at `tick_hz`, so per-tick speeds stay frame-rate independent.

use std::f32::consts::FRAC_PI_2;
use std::time::Duration;

use bevy::prelude::*;

#[derive(Resource, Debug, Clone)]
pub struct Tunables {
    pub tick_hz: f64,
    /// Radians of yaw per tick while a turn key is held.
    pub yaw_step: f32,
    /// Units per tick for forward/back and strafe.
    pub move_speed: f32,
    pub projectile_speed: f32,
    pub projectile_lifetime_ticks: u32,
    /// Vertical lift applied to the muzzle above the blaster origin.
    pub muzzle_height: f32,
    /// A projectile hits when its squared distance to a target is strictly below this.
    pub hit_distance_sq: f32,
    pub respawn_delay: Duration,
}

impl Default for Tunables {
    fn default() -> Self {
        Self {
            tick_hz: 60.0,
            yaw_step: 0.02,
            move_speed: 0.1,
            projectile_speed: 0.2,
            projectile_lifetime_ticks: 60,
            muzzle_height: 0.06,
            hit_distance_sq: 0.05,
            respawn_delay: Duration::from_secs(1),
        }
    }
}

/// Canonical key tokens bound to each blaster action.
///
/// Tokens are the lowercase names produced by `input::normalize_key`.
#[derive(Resource, Debug, Clone)]
pub struct KeyBindings {
    pub forward: Vec<String>,
    pub back: Vec<String>,
    pub left: Vec<String>,
    pub right: Vec<String>,
    /// Held to turn left/right into strafing.
    pub modifier: Vec<String>,
    /// Fires once per release.
    pub fire: Vec<String>,
}

fn tokens(keys: &[&str]) -> Vec<String> {
    keys.iter().map(|k| (*k).to_owned()).collect()
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            forward: tokens(&["w", "arrowup"]),
            back: tokens(&["s", "arrowdown"]),
            left: tokens(&["a", "arrowleft"]),
            right: tokens(&["d", "arrowright"]),
            modifier: tokens(&["shift"]),
            fire: tokens(&["space"]),
        }
    }
}

/// Where everything stands when the arena opens.
#[derive(Resource, Debug, Clone)]
pub struct ArenaLayout {
    pub blaster_start: Vec3,
    /// Registry order: the first listed target wins a tie in collision testing.
    pub targets: Vec<Vec3>,
    /// Yaw applied to every target model so it faces the blaster.
    pub target_yaw: f32,
    pub camera_offset: Vec3,
    /// Vertical field of view, radians.
    pub camera_fov: f32,
    pub camera_near: f32,
    pub camera_far: f32,
    pub light_position: Vec3,
}

impl Default for ArenaLayout {
    fn default() -> Self {
        Self {
            blaster_start: Vec3::new(0.0, 0.0, 3.0),
            targets: vec![
                Vec3::new(-1.0, 0.0, -3.0),
                Vec3::new(1.0, 0.0, -3.0),
                Vec3::new(2.0, 0.0, -3.0),
                Vec3::new(-2.0, 0.0, -3.0),
            ],
            target_yaw: FRAC_PI_2,
            camera_offset: Vec3::new(0.0, 0.5, 1.0),
            camera_fov: 60f32.to_radians(),
            camera_near: 0.1,
            camera_far: 100.0,
            light_position: Vec3::new(0.0, 4.0, 2.0),
        }
    }
}
