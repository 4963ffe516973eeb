//! Camera plugin (render-only).
//!
//! The camera rides on the blaster as a child entity, so it inherits every turn
//! and step without a follow system.
//!
//! ```text
//! OnEnter(InGame): blaster::spawn -> attach_camera (child at layout camera_offset)
//! ```

use bevy::prelude::*;

use crate::common::state::GameState;
use crate::common::tunables::ArenaLayout;
use crate::plugins::blaster::{self, Blaster};

#[derive(Component)]
pub struct MainCamera;

pub fn plugin(app: &mut App) {
    app.add_systems(OnEnter(GameState::InGame), attach_camera.after(blaster::spawn));
}

fn attach_camera(
    mut commands: Commands,
    layout: Res<ArenaLayout>,
    q_blaster: Query<Entity, With<Blaster>>,
) {
    let Ok(blaster) = q_blaster.single() else {
        warn!("No single Blaster to attach the camera to");
        return;
    };

    commands.entity(blaster).with_children(|parent| {
        parent.spawn((
            Name::new("MainCamera"),
            MainCamera,
            Camera3d::default(),
            projection(&layout),
            Transform::from_translation(layout.camera_offset),
        ));
    });
}

/// Perspective lens from the layout; the aspect ratio follows the window.
pub fn projection(layout: &ArenaLayout) -> Projection {
    Projection::Perspective(PerspectiveProjection {
        fov: layout.camera_fov,
        near: layout.camera_near,
        far: layout.camera_far,
        ..default()
    })
}
