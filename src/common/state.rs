//! Global state machine and tick ordering.

use bevy::prelude::*;

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, States, Default)]
pub enum GameState {
    /// Actor assets are being fetched. No ticks run.
    #[default]
    Loading,
    InGame,
    /// A required actor asset failed to load. Terminal.
    LoadFailed,
}

/// Phases of one arena tick, chained in declaration order inside `FixedUpdate`.
///
/// ```text
/// Respawn -> Input -> Motion -> Integrate -> Collide
/// ```
///
/// Collision testing must see this tick's fully integrated positions, so no
/// system may be scheduled across two phases.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TickSet {
    /// Poll due target respawns.
    Respawn,
    /// Drain queued key events into `InputState`.
    Input,
    /// Steer the blaster, then turn fire releases into projectiles.
    Motion,
    Integrate,
    /// Expire, collide, retire.
    Collide,
}
