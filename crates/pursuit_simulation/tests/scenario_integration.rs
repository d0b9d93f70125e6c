//! Integration тесты: полная сцена в headless App
//!
//! Игрок, enemy, objective и exit зона; события идут через event bus,
//! порядок систем: SimulationSet chain.

use std::time::Duration;

use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;

use pursuit_simulation::scene::{spawn_end_trigger, spawn_enemy, spawn_objective, spawn_player};
use pursuit_simulation::session::ObjectiveStage;
use pursuit_simulation::signals::ObjectiveLatch;
use pursuit_simulation::{
    create_headless_app, Enemy, EnemyStateId, EndTrigger, HudState, InteractRequest, Outcome,
    SessionFlags,
};
use pursuit_simulation::player::PlayerInput;

const TICK: f64 = 1.0 / 60.0;

struct Scene {
    app: App,
    player: Entity,
    enemy: Entity,
    objective: Entity,
    exit: Entity,
}

/// Сцена: игрок у origin, enemy далеко (вне view radius), exit за спиной игрока
fn setup(player_at: Vec3, enemy_at: Vec3) -> Scene {
    let mut app = create_headless_app(42);
    app.insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_secs_f64(TICK)));

    let world = app.world_mut();
    let player = spawn_player(world, player_at);
    let enemy = spawn_enemy(world, enemy_at).expect("enemy spawns");
    let objective = spawn_objective(world, Vec3::new(0.0, 0.0, -1.0));
    let exit = spawn_end_trigger(world, Vec3::new(0.0, 0.0, 15.0), 1.5);

    Scene {
        app,
        player,
        enemy,
        objective,
        exit,
    }
}

fn run(app: &mut App, frames: usize) {
    for _ in 0..frames {
        app.update();
    }
}

fn enemy_state(scene: &Scene) -> Option<EnemyStateId> {
    scene.app.world().get::<Enemy>(scene.enemy).and_then(Enemy::state)
}

#[test]
fn test_enemy_starts_idle_when_player_far() {
    let mut scene = setup(Vec3::ZERO, Vec3::new(9.0, 0.0, 9.0));
    run(&mut scene.app, 10);

    assert_eq!(enemy_state(&scene), Some(EnemyStateId::Idle));
}

#[test]
fn test_objective_forces_chase_and_advances_hud() {
    let mut scene = setup(Vec3::ZERO, Vec3::new(9.0, 0.0, 9.0));
    run(&mut scene.app, 5);

    scene
        .app
        .world_mut()
        .send_event(InteractRequest { target: scene.objective });
    run(&mut scene.app, 5);

    let world = scene.app.world();
    assert!(world.resource::<ObjectiveLatch>().is_tripped());
    assert_eq!(world.resource::<HudState>().stage, ObjectiveStage::Escape);
    assert!(world.get::<EndTrigger>(scene.exit).map_or(false, EndTrigger::is_armed));

    let enemy = world.get::<Enemy>(scene.enemy).expect("enemy exists");
    assert!(enemy.force_chase_player());
    assert!(enemy.is_in(EnemyStateId::Chase));
}

#[test]
fn test_enemy_catches_player_in_view() {
    let mut scene = setup(Vec3::ZERO, Vec3::new(3.0, 0.0, 0.0));
    run(&mut scene.app, 180);

    let world = scene.app.world();
    let enemy = world.get::<Enemy>(scene.enemy).expect("enemy exists");
    assert!(enemy.is_in(EnemyStateId::GameOver));
    assert_eq!(enemy.outcome(), Some(Outcome::Defeat));

    let flags = world.resource::<SessionFlags>();
    assert!(!flags.player_can_move);
    assert!(!flags.mouse_look_enabled);
    assert_eq!(world.resource::<HudState>().end_prompt, Some(false));
}

#[test]
fn test_player_frozen_after_game_over() {
    let mut scene = setup(Vec3::ZERO, Vec3::new(3.0, 0.0, 0.0));
    run(&mut scene.app, 180);

    let before = scene
        .app
        .world()
        .get::<Transform>(scene.player)
        .map(|transform| transform.translation);

    if let Some(mut input) = scene.app.world_mut().get_mut::<PlayerInput>(scene.player) {
        input.forward = 1.0;
    }
    run(&mut scene.app, 30);

    let after = scene
        .app
        .world()
        .get::<Transform>(scene.player)
        .map(|transform| transform.translation);
    assert_eq!(before, after);
}

#[test]
fn test_player_walks_while_session_active() {
    let mut scene = setup(Vec3::ZERO, Vec3::new(9.0, 0.0, 9.0));
    if let Some(mut input) = scene.app.world_mut().get_mut::<PlayerInput>(scene.player) {
        input.strafe = -1.0;
    }
    run(&mut scene.app, 30);

    let position = scene
        .app
        .world()
        .get::<Transform>(scene.player)
        .map(|transform| transform.translation)
        .expect("player exists");
    assert!(position.x < 0.0);
    assert_eq!(position.y, 0.0);
}

#[test]
fn test_stun_through_interact_request() {
    let mut scene = setup(Vec3::ZERO, Vec3::new(9.0, 0.0, 9.0));
    run(&mut scene.app, 5);

    scene
        .app
        .world_mut()
        .send_event(InteractRequest { target: scene.enemy });
    run(&mut scene.app, 5);

    assert_eq!(enemy_state(&scene), Some(EnemyStateId::Stun));

    // stun_time 2.0s → после ~3s enemy снова патрулирует, cooldown активен
    run(&mut scene.app, 180);
    let enemy = scene.app.world().get::<Enemy>(scene.enemy).expect("enemy exists");
    assert!(!enemy.is_in(EnemyStateId::Stun));
    assert!(enemy.cooldown().is_active());
}

#[test]
fn test_reaching_exit_after_objective_is_victory() {
    let mut scene = setup(Vec3::ZERO, Vec3::new(9.0, 0.0, -9.0));
    run(&mut scene.app, 5);

    // Без objective выход закрыт
    if let Some(mut transform) = scene.app.world_mut().get_mut::<Transform>(scene.player) {
        transform.translation = Vec3::new(0.0, 0.0, 15.0);
    }
    run(&mut scene.app, 5);
    assert_eq!(scene.app.world().resource::<HudState>().end_prompt, None);

    scene
        .app
        .world_mut()
        .send_event(InteractRequest { target: scene.objective });
    run(&mut scene.app, 5);

    let world = scene.app.world();
    let enemy = world.get::<Enemy>(scene.enemy).expect("enemy exists");
    assert!(enemy.is_in(EnemyStateId::GameOver));
    assert_eq!(enemy.outcome(), Some(Outcome::Victory));
    assert_eq!(world.resource::<HudState>().end_prompt, Some(true));
    assert!(!world.resource::<SessionFlags>().player_can_move);
    assert!(world.get::<EndTrigger>(scene.exit).map_or(false, EndTrigger::has_fired));
}
