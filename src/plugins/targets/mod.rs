//! Targets plugin: fixed targets that drop when hit and stand back up later.
//!
//! ```text
//! OnEnter(InGame):           spawn one target per layout slot, in registry order
//! collide pass (projectiles): knock_down -> Down { respawn_at } + hidden + scheduled
//! FixedUpdate (Respawn):     respawn_targets pops due deadlines -> Up + visible
//! ```
//!
//! Deadlines are wall-clock (`Time<Real>` elapsed), so a target stays down for
//! the same real duration whatever the tick or frame rate. A down target is
//! never collision-eligible, so it can never be scheduled twice. Pending
//! respawns are not cancellable.

use std::collections::VecDeque;
use std::time::Duration;

use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;

use crate::common::state::{GameState, TickSet};
use crate::common::tunables::ArenaLayout;
use crate::plugins::actors::{ActorBounds, ActorCatalog};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TargetState {
    #[default]
    Up,
    /// Hidden until the wall clock reaches `respawn_at`.
    Down { respawn_at: Duration },
}

#[derive(Component, Debug, Clone, Default)]
pub struct Target {
    pub state: TargetState,
}

impl Target {
    #[inline]
    pub fn is_up(&self) -> bool {
        self.state == TargetState::Up
    }
}

/// Targets in registry order.
#[derive(Resource, Debug, Default, Deref, DerefMut)]
pub struct TargetRegistry(pub Vec<Entity>);

/// Pending respawns, sorted by deadline.
#[derive(Resource, Debug, Default)]
pub struct RespawnSchedule {
    queue: VecDeque<(Duration, Entity)>,
}

impl RespawnSchedule {
    pub fn schedule(&mut self, target: Entity, respawn_at: Duration) {
        // Equal deadlines keep insertion order.
        let idx = self.queue.partition_point(|(at, _)| *at <= respawn_at);
        self.queue.insert(idx, (respawn_at, target));
    }

    /// Next target whose deadline is at or before `now`.
    pub fn pop_due(&mut self, now: Duration) -> Option<Entity> {
        match self.queue.front() {
            Some((at, _)) if *at <= now => self.queue.pop_front().map(|(_, e)| e),
            _ => None,
        }
    }

    pub fn is_scheduled(&self, target: Entity) -> bool {
        self.queue.iter().any(|(_, e)| *e == target)
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn clear(&mut self) {
        self.queue.clear();
    }
}

/// Hide a standing target and book its respawn.
pub fn knock_down(
    entity: Entity,
    target: &mut Target,
    visibility: &mut Visibility,
    schedule: &mut RespawnSchedule,
    respawn_at: Duration,
) {
    debug_assert!(target.is_up(), "knock_down on a target that is already down");

    target.state = TargetState::Down { respawn_at };
    *visibility = Visibility::Hidden;
    schedule.schedule(entity, respawn_at);
}

pub fn plugin(app: &mut App) {
    app.init_resource::<TargetRegistry>()
        .init_resource::<RespawnSchedule>()
        .add_systems(OnEnter(GameState::InGame), spawn_targets)
        .add_systems(OnExit(GameState::InGame), reset_registry)
        .add_systems(FixedUpdate, respawn_targets.in_set(TickSet::Respawn));
}

pub fn spawn_targets(
    mut commands: Commands,
    layout: Res<ArenaLayout>,
    catalog: Res<ActorCatalog>,
    mut registry: ResMut<TargetRegistry>,
) {
    registry.clear();

    for (i, pos) in layout.targets.iter().enumerate() {
        let e = commands
            .spawn((
                Name::new(format!("Target{i}")),
                Target::default(),
                ActorBounds(catalog.target.bounds),
                Transform::from_translation(*pos),
                Visibility::Visible,
                DespawnOnExit(GameState::InGame),
            ))
            .with_children(|parent| {
                let facing = Transform::from_rotation(Quat::from_rotation_y(layout.target_yaw));
                parent.spawn(catalog.target.model(facing));
            })
            .id();

        registry.push(e);
    }

    info!("Spawned {} targets", registry.len());
}

fn reset_registry(mut registry: ResMut<TargetRegistry>, mut schedule: ResMut<RespawnSchedule>) {
    registry.clear();
    schedule.clear();
}

pub fn respawn_targets(
    time: Res<Time<Real>>,
    mut schedule: ResMut<RespawnSchedule>,
    mut q_targets: Query<(&mut Target, &mut Visibility)>,
) {
    let now = time.elapsed();

    while let Some(e) = schedule.pop_due(now) {
        let Ok((mut target, mut vis)) = q_targets.get_mut(e) else {
            debug!("Respawn due for {e:?}, which no longer exists");
            continue;
        };

        target.state = TargetState::Up;
        *vis = Visibility::Visible;
    }
}
