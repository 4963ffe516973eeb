use bevy::prelude::*;

use crate::common::test_utils::{run_system_once, tick_world};
use crate::common::tunables::{ArenaLayout, KeyBindings, Tunables};
use crate::plugins::actors::{ActorBounds, ActorCatalog};
use crate::plugins::input::{InputState, KeyEvent};

use super::*;

fn held(keys: &[&str]) -> InputState {
    let bindings = KeyBindings::default();
    let mut input = InputState::default();
    for key in keys {
        input.apply(&KeyEvent::pressed(*key), &bindings);
    }
    input
}

fn resolve(keys: &[&str], forward: Vec3) -> MotionDelta {
    resolve_input(&held(keys), &KeyBindings::default(), &Tunables::default(), forward)
}

fn assert_delta(actual: MotionDelta, yaw: f32, translation: Vec3, keys: &[&str]) {
    assert!(
        (actual.yaw - yaw).abs() < 1e-6 && actual.translation.abs_diff_eq(translation, 1e-6),
        "keys {keys:?}: expected yaw {yaw} translation {translation}, got {actual:?}"
    );
}

#[test]
fn every_key_combination_follows_tie_break_rules() {
    const KEYS: [&str; 5] = ["w", "s", "a", "d", "shift"];

    for mask in 0u32..(1 << KEYS.len()) {
        let keys: Vec<&str> = KEYS
            .iter()
            .enumerate()
            .filter(|(i, _)| mask & (1 << i) != 0)
            .map(|(_, k)| *k)
            .collect();
        let has = |k: &str| keys.contains(&k);

        let along = if has("w") { 1.0 } else if has("s") { -1.0 } else { 0.0 };
        let side = if has("a") { 1.0 } else if has("d") { -1.0 } else { 0.0 };
        let (yaw, strafe_x) = if has("shift") { (0.0, -side * 0.1) } else { (side * 0.02, 0.0) };

        // Facing -Z: forward is -Z, left is -X.
        let expected = Vec3::new(strafe_x, 0.0, -along * 0.1);
        assert_delta(resolve(&keys, Vec3::NEG_Z), yaw, expected, &keys);
    }
}

#[test]
fn arrow_keys_alias_letter_keys() {
    assert_eq!(resolve(&["arrowup"], Vec3::NEG_Z), resolve(&["w"], Vec3::NEG_Z));
    assert_eq!(resolve(&["arrowdown"], Vec3::NEG_Z), resolve(&["s"], Vec3::NEG_Z));
    assert_eq!(resolve(&["arrowleft"], Vec3::NEG_Z), resolve(&["a"], Vec3::NEG_Z));
    assert_eq!(
        resolve(&["shift", "arrowright"], Vec3::NEG_Z),
        resolve(&["shift", "d"], Vec3::NEG_Z)
    );
}

#[test]
fn translation_follows_current_facing() {
    let delta = resolve(&["w"], Vec3::X);
    assert_delta(delta, 0.0, Vec3::new(0.1, 0.0, 0.0), &["w"]);

    // Facing +X, strafing left moves toward -Z.
    let delta = resolve(&["shift", "a"], Vec3::X);
    assert_delta(delta, 0.0, Vec3::new(0.0, 0.0, -0.1), &["shift", "a"]);
}

#[test]
fn unbound_keys_do_nothing() {
    assert_eq!(resolve(&["q", "space"], Vec3::NEG_Z), MotionDelta::default());
}

fn steering_world(keys: &[&str]) -> (World, Entity) {
    let mut world = tick_world();
    world.insert_resource(held(keys));
    let blaster = world
        .spawn((Blaster, Transform::from_xyz(0.0, 0.0, 3.0)))
        .id();
    (world, blaster)
}

#[test]
fn turning_over_many_ticks_never_translates() {
    let (mut world, blaster) = steering_world(&["a"]);

    for _ in 0..10 {
        run_system_once(&mut world, super::steer);
    }

    let tf = world.get::<Transform>(blaster).unwrap();
    assert_eq!(tf.translation, Vec3::new(0.0, 0.0, 3.0));
    let (yaw, _, _) = tf.rotation.to_euler(EulerRot::YXZ);
    assert!((yaw - 0.2).abs() < 1e-5, "yaw {yaw}");
}

#[test]
fn releasing_all_keys_stops_motion_next_tick() {
    let (mut world, blaster) = steering_world(&["w", "d"]);
    run_system_once(&mut world, super::steer);
    let after_first = *world.get::<Transform>(blaster).unwrap();
    assert_ne!(after_first.translation, Vec3::new(0.0, 0.0, 3.0));

    world.insert_resource(InputState::default());
    run_system_once(&mut world, super::steer);

    assert_eq!(*world.get::<Transform>(blaster).unwrap(), after_first);
}

#[test]
fn spawn_places_blaster_with_bounds() {
    let mut world = World::new();
    world.insert_resource(ArenaLayout::default());
    world.insert_resource(ActorCatalog::default());

    run_system_once(&mut world, super::spawn);

    let (tf, bounds) = world
        .query_filtered::<(&Transform, &ActorBounds), With<Blaster>>()
        .single(&world)
        .unwrap();
    assert_eq!(tf.translation, ArenaLayout::default().blaster_start);
    assert_eq!(bounds.0, ActorCatalog::default().blaster.bounds);
}
