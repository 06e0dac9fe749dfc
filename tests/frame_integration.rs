//! Frame schedule integration tests.
//!
//! Each test builds a headless world (no window, no audio thread), spawns
//! Pete and runs `game::frame_schedule()` step by step.

use bevy_ecs::prelude::*;
use raylib::prelude::Color;

use pete::components::animation::{Pose, PoseAnimation};
use pete::components::inputcontrolled::InputControlled;
use pete::components::jumper::Jumper;
use pete::components::mover::Mover;
use pete::components::pickup::Pickup;
use pete::components::player::{PLAYER_HEIGHT, PLAYER_MAX_JUMP_DISTANCE, PLAYER_WIDTH, Player};
use pete::components::rigidbody::RigidBody;
use pete::components::sprite::Sprite;
use pete::events::audio::AudioCmd;
use pete::events::jump::jump_sound_observer;
use pete::events::pickup::pickup_collected_observer;
use pete::game::frame_schedule;
use pete::resources::camera2d::Camera2DRes;
use pete::resources::gameconfig::GameConfig;
use pete::resources::gamestate::{GameState, GameStates};
use pete::resources::input::InputState;
use pete::resources::tilegrid::TileGrid;
use pete::resources::worldsignals::{ACORNS_COLLECTED, WorldSignals};
use pete::resources::worldtime::WorldTime;

const CELL: f32 = 16.0;

/// Every AudioCmd written so far.
#[derive(Resource, Default)]
struct Heard(Vec<AudioCmd>);

fn hear(mut reader: MessageReader<AudioCmd>, mut heard: ResMut<Heard>) {
    heard.0.extend(reader.read().cloned());
}

fn ground_grid(width: u32) -> TileGrid {
    let mut grid = TileGrid::new(width, 10, CELL);
    for x in 0..width as i32 {
        grid.set(x, 0, Some(1));
    }
    grid
}

fn make_world(grid: TileGrid) -> World {
    let mut world = World::new();
    let mut state = GameState::new();
    state.set(GameStates::Playing);
    world.insert_resource(state);
    world.insert_resource(WorldTime {
        delta: 1.0 / 60.0,
        ..WorldTime::default()
    });
    world.insert_resource(InputState::default());
    world.insert_resource(GameConfig::new());
    world.insert_resource(WorldSignals::default());
    world.insert_resource(Camera2DRes::centered(160.0, 120.0, 320.0, 240.0));
    world.insert_resource(grid);
    world.init_resource::<Messages<AudioCmd>>();
    world.init_resource::<Heard>();
    world.add_observer(jump_sound_observer);
    world.add_observer(pickup_collected_observer);
    world.flush();
    world
}

fn spawn_pete(world: &mut World, x: f32, y: f32) -> Entity {
    world
        .spawn((
            Player,
            Mover::new(x, y, PLAYER_WIDTH, PLAYER_HEIGHT),
            RigidBody::new(),
            Jumper::new(PLAYER_MAX_JUMP_DISTANCE),
            InputControlled::new(2.0, 2.0, 2.0),
            PoseAnimation::new(),
            Sprite::new("pete", PLAYER_WIDTH, PLAYER_HEIGHT, Color::ORANGE),
        ))
        .id()
}

fn hold(world: &mut World, left: bool, right: bool, jump: bool) {
    let mut input = world.resource_mut::<InputState>();
    input.move_left.active = left;
    input.move_right.active = right;
    input.jump.active = jump;
}

fn run_steps(world: &mut World, steps: usize) {
    let mut frame = frame_schedule();
    let mut listen = Schedule::default();
    listen.add_systems(hear);
    for _ in 0..steps {
        frame.run(world);
        listen.run(world);
    }
}

fn mover(world: &World, entity: Entity) -> Mover {
    *world.get::<Mover>(entity).unwrap()
}

fn fx_count(world: &World, id: &str) -> usize {
    world
        .resource::<Heard>()
        .0
        .iter()
        .filter(|cmd| matches!(cmd, AudioCmd::PlayFx { id: fx } if fx == id))
        .count()
}

#[test]
fn falling_pete_lands_on_top_of_the_ground() {
    let mut world = make_world(ground_grid(20));
    let pete = spawn_pete(&mut world, 32.0, 40.0);

    run_steps(&mut world, 20);

    let m = mover(&world, pete);
    assert_eq!(m.x(), 32.0);
    assert_eq!(m.y(), 16.0);
    assert_eq!(world.get::<RigidBody>(pete).unwrap().velocity.y, 0.0);
    assert_eq!(world.get::<PoseAnimation>(pete).unwrap().pose, Pose::Standing);
}

#[test]
fn empty_grid_leaves_motion_untouched() {
    let mut world = make_world(TileGrid::new(20, 10, CELL));
    let pete = spawn_pete(&mut world, 32.0, 40.0);

    run_steps(&mut world, 5);

    let m = mover(&world, pete);
    assert_eq!((m.x(), m.y()), (32.0, 30.0));
}

#[test]
fn level_edges_clamp_horizontal_motion() {
    let mut world = make_world(TileGrid::new(10, 10, CELL));
    let pete = spawn_pete(&mut world, 140.0, 0.0);
    hold(&mut world, false, true, false);
    run_steps(&mut world, 10);
    let m = mover(&world, pete);
    assert_eq!(m.x(), 160.0 - PLAYER_WIDTH);
    assert_eq!(m.y(), 0.0);

    hold(&mut world, true, false, false);
    run_steps(&mut world, 100);
    assert_eq!(mover(&world, pete).x(), 0.0);
}

#[test]
fn wall_stops_pete_on_its_left_face() {
    let mut grid = ground_grid(20);
    grid.set(5, 1, Some(2));
    let mut world = make_world(grid);
    let pete = spawn_pete(&mut world, 60.0, 16.0);
    hold(&mut world, false, true, false);

    run_steps(&mut world, 10);

    let m = mover(&world, pete);
    assert_eq!(m.x(), 5.0 * CELL - PLAYER_WIDTH);
    assert_eq!(m.y(), 16.0);
}

#[test]
fn held_jump_plays_the_jump_sound_once() {
    let mut world = make_world(ground_grid(20));
    let pete = spawn_pete(&mut world, 32.0, 16.0);
    run_steps(&mut world, 1);
    hold(&mut world, false, false, true);

    run_steps(&mut world, 30);

    assert_eq!(fx_count(&world, "jump"), 1);
    let jumper = world.get::<Jumper>(pete).unwrap();
    assert!(jumper.blocked);
    // Climbed until the accumulated height passed the limit, then fell back.
    assert!(mover(&world, pete).y() < 16.0 + 46.0);
}

#[test]
fn jump_peaks_after_passing_the_limit() {
    let mut world = make_world(ground_grid(20));
    let pete = spawn_pete(&mut world, 32.0, 16.0);
    run_steps(&mut world, 1);
    hold(&mut world, false, false, true);

    let mut peak: f32 = 0.0;
    for _ in 0..40 {
        run_steps(&mut world, 1);
        peak = peak.max(mover(&world, pete).y());
    }
    assert_eq!(peak, 16.0 + 46.0);
}

#[test]
fn landing_after_a_jump_allows_the_next_one() {
    let mut world = make_world(ground_grid(20));
    let pete = spawn_pete(&mut world, 32.0, 16.0);
    run_steps(&mut world, 1);

    hold(&mut world, false, false, true);
    run_steps(&mut world, 30);
    assert!(world.get::<Jumper>(pete).unwrap().blocked);

    hold(&mut world, false, false, false);
    for _ in 0..60 {
        run_steps(&mut world, 1);
        if world.get::<RigidBody>(pete).unwrap().velocity.y == 0.0 {
            break;
        }
    }
    assert_eq!(world.get::<RigidBody>(pete).unwrap().velocity.y, 0.0);
    assert_eq!(mover(&world, pete).y(), 16.0);
    let jumper = world.get::<Jumper>(pete).unwrap();
    assert!(!jumper.blocked);
    assert_eq!(jumper.distance, 0.0);

    hold(&mut world, false, false, true);
    run_steps(&mut world, 1);
    assert_eq!(fx_count(&world, "jump"), 2);
    assert_eq!(mover(&world, pete).y(), 18.0);
}

#[test]
fn landing_on_the_world_floor_resets_the_jump() {
    let mut world = make_world(TileGrid::new(20, 10, CELL));
    let pete = spawn_pete(&mut world, 32.0, 0.0);

    hold(&mut world, false, false, true);
    run_steps(&mut world, 30);
    hold(&mut world, false, false, false);
    run_steps(&mut world, 40);

    assert_eq!(mover(&world, pete).y(), 0.0);
    let jumper = world.get::<Jumper>(pete).unwrap();
    assert!(!jumper.blocked);
    assert_eq!(jumper.distance, 0.0);
}

#[test]
fn nothing_moves_outside_the_playing_state() {
    let mut world = make_world(TileGrid::new(20, 10, CELL));
    let pete = spawn_pete(&mut world, 32.0, 40.0);
    world.resource_mut::<GameState>().set(GameStates::Loading);
    hold(&mut world, false, true, false);

    run_steps(&mut world, 5);

    let m = mover(&world, pete);
    assert_eq!((m.x(), m.y()), (32.0, 40.0));
}

#[test]
fn pickup_is_collected_exactly_once() {
    let mut world = make_world(ground_grid(20));
    spawn_pete(&mut world, 32.0, 16.0);
    let acorn = world.spawn(Pickup::new(36.0, 16.0)).id();
    let far = world.spawn(Pickup::new(200.0, 16.0)).id();

    run_steps(&mut world, 3);

    assert!(world.get_entity(acorn).is_err());
    assert!(world.get_entity(far).is_ok());
    assert_eq!(
        world
            .resource::<WorldSignals>()
            .get_integer(ACORNS_COLLECTED),
        Some(1)
    );
    assert_eq!(fx_count(&world, "acorn"), 1);
}

#[test]
fn camera_follows_away_from_level_edges() {
    let mut world = make_world(ground_grid(60));
    spawn_pete(&mut world, 300.0, 16.0);
    hold(&mut world, false, true, false);

    run_steps(&mut world, 1);
    assert_eq!(world.resource::<Camera2DRes>().0.target.x, 302.0);
}

#[test]
fn camera_stays_near_the_left_edge() {
    let mut world = make_world(ground_grid(60));
    spawn_pete(&mut world, 40.0, 16.0);
    hold(&mut world, false, true, false);

    run_steps(&mut world, 10);
    assert_eq!(world.resource::<Camera2DRes>().0.target.x, 160.0);
}

#[test]
fn walking_left_mirrors_the_sprite() {
    let mut world = make_world(ground_grid(20));
    let pete = spawn_pete(&mut world, 100.0, 16.0);
    hold(&mut world, true, false, false);

    run_steps(&mut world, 2);

    let anim = world.get::<PoseAnimation>(pete).unwrap();
    assert_eq!(anim.pose, Pose::Walking);
    assert!(world.get::<Sprite>(pete).unwrap().flip_h);
}
