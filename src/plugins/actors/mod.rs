//! Actors plugin: fetch the glTF scenes every actor is drawn with.
//!
//! ```text
//! OnEnter(Loading):         request blaster / target / projectile scenes (once)
//! Update (Loading, InGame): refresh ActorStatus of each catalog entry
//! Update (Loading):         all required Ready  -> InGame
//!                           any required Failed -> LoadFailed (+ ActorLoadFailure)
//! OnEnter(LoadFailed):      AppExit::error()
//! ```
//!
//! The projectile scene is a cached template: loaded once here and cloned by
//! handle on every shot. It is not required to open the arena. If it fails,
//! each shot is dropped instead. Statuses keep refreshing inside the arena so a
//! template that fails after the arena opened is still noticed.

use std::fmt;

use bevy::asset::LoadState;
use bevy::ecs::message::MessageWriter;
use bevy::gltf::GltfAssetLabel;
use bevy::prelude::*;

use crate::common::state::GameState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActorKind {
    Blaster,
    Target,
    Projectile,
}

impl ActorKind {
    pub const ALL: [ActorKind; 3] = [ActorKind::Blaster, ActorKind::Target, ActorKind::Projectile];

    /// The arena cannot open without these.
    #[inline]
    pub fn is_required(self) -> bool {
        !matches!(self, ActorKind::Projectile)
    }
}

impl fmt::Display for ActorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ActorKind::Blaster => "blaster",
            ActorKind::Target => "target",
            ActorKind::Projectile => "projectile",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActorStatus {
    Pending,
    Ready,
    Failed(String),
}

impl ActorStatus {
    pub fn from_load_state(state: LoadState) -> Self {
        match state {
            LoadState::Loaded => ActorStatus::Ready,
            LoadState::Failed(err) => ActorStatus::Failed(err.to_string()),
            _ => ActorStatus::Pending,
        }
    }
}

/// A required actor asset could not be fetched or parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActorLoadError {
    pub kind: ActorKind,
    pub path: String,
    pub reason: String,
}

impl fmt::Display for ActorLoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to load {} actor from {}: {}", self.kind, self.path, self.reason)
    }
}

impl std::error::Error for ActorLoadError {}

/// Set when initialization gave up, so the host can report why.
#[derive(Resource, Debug, Clone)]
pub struct ActorLoadFailure(pub ActorLoadError);

/// Size of an actor's model in its local frame (x = width, y = height, z = depth).
///
/// Declared per kind in the catalog; the core never inspects meshes.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct ActorBounds(pub Vec3);

impl ActorBounds {
    #[inline]
    pub fn half_depth(&self) -> f32 {
        self.0.z * 0.5
    }
}

#[derive(Debug, Clone)]
pub struct ActorEntry {
    pub path: String,
    pub bounds: Vec3,
    pub scene: Handle<Scene>,
    pub status: ActorStatus,
}

impl ActorEntry {
    fn new(path: &str, bounds: Vec3) -> Self {
        Self {
            path: path.to_owned(),
            bounds,
            scene: Handle::default(),
            status: ActorStatus::Pending,
        }
    }

    /// Child bundle that draws this actor, offset by `transform` inside its parent.
    pub fn model(&self, transform: Transform) -> impl Bundle {
        (Name::new("Model"), SceneRoot(self.scene.clone()), transform)
    }
}

#[derive(Resource, Debug, Clone)]
pub struct ActorCatalog {
    pub blaster: ActorEntry,
    pub target: ActorEntry,
    pub projectile: ActorEntry,
}

impl Default for ActorCatalog {
    fn default() -> Self {
        Self {
            blaster: ActorEntry::new("models/blasterG.glb", Vec3::new(0.2, 0.25, 0.6)),
            target: ActorEntry::new("models/targetA.glb", Vec3::new(0.6, 0.6, 0.1)),
            projectile: ActorEntry::new("models/foamBulletB.glb", Vec3::new(0.05, 0.05, 0.2)),
        }
    }
}

impl ActorCatalog {
    pub fn entry(&self, kind: ActorKind) -> &ActorEntry {
        match kind {
            ActorKind::Blaster => &self.blaster,
            ActorKind::Target => &self.target,
            ActorKind::Projectile => &self.projectile,
        }
    }

    pub fn entry_mut(&mut self, kind: ActorKind) -> &mut ActorEntry {
        match kind {
            ActorKind::Blaster => &mut self.blaster,
            ActorKind::Target => &mut self.target,
            ActorKind::Projectile => &mut self.projectile,
        }
    }

    /// `Ok(true)` once every required actor is ready, `Ok(false)` while any is pending.
    /// The first failed required actor (in `ActorKind::ALL` order) is an error.
    pub fn required_ready(&self) -> Result<bool, ActorLoadError> {
        let mut ready = true;
        for kind in ActorKind::ALL.into_iter().filter(|k| k.is_required()) {
            let entry = self.entry(kind);
            match &entry.status {
                ActorStatus::Ready => {}
                ActorStatus::Pending => ready = false,
                ActorStatus::Failed(reason) => {
                    return Err(ActorLoadError {
                        kind,
                        path: entry.path.clone(),
                        reason: reason.clone(),
                    });
                }
            }
        }
        Ok(ready)
    }

    /// Shots are dropped only once the template is known to be broken.
    #[inline]
    pub fn projectile_usable(&self) -> bool {
        !matches!(self.projectile.status, ActorStatus::Failed(_))
    }
}

pub fn plugin(app: &mut App) {
    app.init_resource::<ActorCatalog>()
        .add_systems(OnEnter(GameState::Loading), begin_loading)
        .add_systems(
            Update,
            (
                refresh_actor_status.run_if(tracks_actor_status),
                poll_actor_loads
                    .after(refresh_actor_status)
                    .run_if(in_state(GameState::Loading)),
            ),
        )
        .add_systems(OnEnter(GameState::LoadFailed), exit_on_load_failure);
}

/// Statuses matter while loading and inside the arena, never after a failed load.
pub fn tracks_actor_status(state: Option<Res<State<GameState>>>) -> bool {
    matches!(state.map(|s| *s.get()), Some(GameState::Loading | GameState::InGame))
}

fn begin_loading(asset_server: Res<AssetServer>, mut catalog: ResMut<ActorCatalog>) {
    for kind in ActorKind::ALL {
        let entry = catalog.entry_mut(kind);
        entry.scene = asset_server.load(GltfAssetLabel::Scene(0).from_asset(entry.path.clone()));
        entry.status = ActorStatus::Pending;
        info!("Loading {kind} actor from {}", entry.path);
    }
}

fn refresh_actor_status(asset_server: Res<AssetServer>, mut catalog: ResMut<ActorCatalog>) {
    for kind in ActorKind::ALL {
        let state = asset_server.load_state(catalog.entry(kind).scene.id());
        let status = ActorStatus::from_load_state(state);
        if catalog.entry(kind).status == status {
            continue;
        }

        let entry = catalog.entry_mut(kind);
        match &status {
            ActorStatus::Ready => debug!("{kind} actor ready"),
            ActorStatus::Failed(reason) if !kind.is_required() => {
                warn!("{kind} actor failed to load from {}: {reason}; shots will be dropped", entry.path);
            }
            _ => {}
        }
        entry.status = status;
    }
}

fn poll_actor_loads(
    mut commands: Commands,
    catalog: Res<ActorCatalog>,
    mut next: ResMut<NextState<GameState>>,
) {
    match catalog.required_ready() {
        Ok(true) => {
            info!("Actors loaded, opening arena");
            next.set(GameState::InGame);
        }
        Ok(false) => {}
        Err(err) => {
            error!("{err}");
            commands.insert_resource(ActorLoadFailure(err));
            next.set(GameState::LoadFailed);
        }
    }
}

fn exit_on_load_failure(mut exit: MessageWriter<AppExit>) {
    exit.write(AppExit::error());
}
