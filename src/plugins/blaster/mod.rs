//! Blaster plugin: the player-controlled emitter.
//!
//! Pipeline:
//! - OnEnter(InGame): spawn the blaster at the layout start
//! - FixedUpdate (`TickSet::Motion`): resolve held keys into a `MotionDelta`, apply it
//!
//! Input rules, evaluated every tick:
//! - forward/back always translate along the current forward direction
//! - left/right yaw the blaster, or strafe while a modifier is held
//! - forward beats back and left beats right when both are held

use std::f32::consts::FRAC_PI_2;

use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;

use crate::common::state::{GameState, TickSet};
use crate::common::tunables::{ArenaLayout, KeyBindings, Tunables};
use crate::plugins::actors::{ActorBounds, ActorCatalog};
use crate::plugins::input::InputState;

#[derive(Component)]
pub struct Blaster;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    Left,
    Right,
}

impl Side {
    /// Left turns and strafes counter-clockwise about +Y.
    #[inline]
    fn sign(self) -> f32 {
        match self {
            Side::Left => 1.0,
            Side::Right => -1.0,
        }
    }
}

/// What one tick of input asks the blaster to do.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MotionDelta {
    /// Radians about +Y.
    pub yaw: f32,
    pub translation: Vec3,
}

/// Map held keys to this tick's motion. `forward` is the blaster's current facing.
pub fn resolve_input(
    input: &InputState,
    bindings: &KeyBindings,
    tunables: &Tunables,
    forward: Vec3,
) -> MotionDelta {
    let mut delta = MotionDelta::default();

    if input.any_held(&bindings.forward) {
        delta.translation += forward * tunables.move_speed;
    } else if input.any_held(&bindings.back) {
        delta.translation -= forward * tunables.move_speed;
    }

    let side = if input.any_held(&bindings.left) {
        Some(Side::Left)
    } else if input.any_held(&bindings.right) {
        Some(Side::Right)
    } else {
        None
    };

    let Some(side) = side else {
        return delta;
    };

    if input.any_held(&bindings.modifier) {
        let strafe = Quat::from_rotation_y(side.sign() * FRAC_PI_2) * forward;
        delta.translation += strafe * tunables.move_speed;
    } else {
        delta.yaw = side.sign() * tunables.yaw_step;
    }

    delta
}

pub fn plugin(app: &mut App) {
    app.add_systems(OnEnter(GameState::InGame), spawn)
        .add_systems(FixedUpdate, steer.in_set(TickSet::Motion));
}

pub fn spawn(mut commands: Commands, layout: Res<ArenaLayout>, catalog: Res<ActorCatalog>) {
    commands
        .spawn((
            Name::new("Blaster"),
            Blaster,
            ActorBounds(catalog.blaster.bounds),
            Transform::from_translation(layout.blaster_start),
            Visibility::Visible,
            DespawnOnExit(GameState::InGame),
        ))
        .with_children(|parent| {
            parent.spawn(catalog.blaster.model(Transform::IDENTITY));
        });
}

pub fn steer(
    input: Res<InputState>,
    bindings: Res<KeyBindings>,
    tunables: Res<Tunables>,
    mut q_blaster: Query<&mut Transform, With<Blaster>>,
) {
    let Ok(mut tf) = q_blaster.single_mut() else {
        return;
    };

    // Translation uses the facing from the start of the tick.
    let delta = resolve_input(&input, &bindings, &tunables, tf.forward().as_vec3());
    if delta == MotionDelta::default() {
        return;
    }

    tf.rotate_y(delta.yaw);
    tf.translation += delta.translation;
}

#[cfg(test)]
mod tests;
