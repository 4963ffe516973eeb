//! Lighting plugin (render-only).

use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;

use crate::common::state::GameState;
use crate::common::tunables::ArenaLayout;

pub fn plugin(app: &mut App) {
    app.add_systems(OnEnter(GameState::InGame), setup);
}

fn setup(mut commands: Commands, layout: Res<ArenaLayout>) {
    commands.spawn((
        Name::new("SunLight"),
        DirectionalLight {
            color: Color::WHITE,
            ..default()
        },
        Transform::from_translation(layout.light_position).looking_at(Vec3::ZERO, Vec3::Y),
        DespawnOnExit(GameState::InGame),
    ));
}
