//! Core plugin: shared resources, tick rate and tick phase ordering.

use bevy::prelude::*;

use crate::common::state::{GameState, TickSet};
use crate::common::tunables::{ArenaLayout, KeyBindings, Tunables};

pub fn plugin(app: &mut App) {
    // `init_resource` keeps anything the host inserted beforehand.
    app.init_resource::<Tunables>()
        .init_resource::<KeyBindings>()
        .init_resource::<ArenaLayout>();
    app.insert_resource(ClearColor(Color::srgb(0.05, 0.05, 0.07)));

    let tick_hz = app.world().resource::<Tunables>().tick_hz;
    app.insert_resource(Time::<Fixed>::from_hz(tick_hz));

    app.configure_sets(
        FixedUpdate,
        (
            TickSet::Respawn,
            TickSet::Input,
            TickSet::Motion,
            TickSet::Integrate,
            TickSet::Collide,
        )
            .chain()
            .run_if(in_state(GameState::InGame)),
    );
}
