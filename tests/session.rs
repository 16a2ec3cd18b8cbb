//! End-to-end session scenarios

use dino_dash::persistence::{BestScoreStore, MemoryStore};
use dino_dash::sim::{Aabb, InputEvent, Obstacle, RunState, Session, handle_input, tick};
use dino_dash::{Game, Tuning};

fn ram_player(state: &mut Session) {
    let bounds = state.player.bounds;
    state.obstacles.push(Obstacle { bounds });
}

#[test]
fn test_start_jump_and_run_200_ticks() {
    let mut state = Session::new(2024, Tuning::default(), 0);
    assert_eq!(state.state, RunState::Idle);

    handle_input(&mut state, InputEvent::RequestStart);
    handle_input(&mut state, InputEvent::RequestJump);
    assert!(!state.player.grounded);

    for _ in 0..200 {
        tick(&mut state);
        let player = state.player.bounds;
        assert!(
            state
                .obstacles
                .iter()
                .all(|ob| !dino_dash::sim::overlaps(&player, &ob.bounds))
        );
    }

    assert_eq!(state.state, RunState::Running);
    assert!(state.score > 0.0);
    assert!(state.player.grounded);
}

#[test]
fn test_forced_collision_ends_run_that_tick() {
    let mut state = Session::new(5, Tuning::default(), 0);
    handle_input(&mut state, InputEvent::RequestStart);
    for _ in 0..50 {
        tick(&mut state);
    }
    let score = state.score;

    ram_player(&mut state);
    tick(&mut state);

    assert_eq!(state.state, RunState::GameOver);
    assert_eq!(state.score, score);
}

#[test]
fn test_restart_resets_from_every_state() {
    let tuning = Tuning::default();
    let resting_y = tuning.ground_y - tuning.player_size.y;

    let idle = Session::new(3, tuning.clone(), 0);

    let mut running = Session::new(3, tuning.clone(), 0);
    handle_input(&mut running, InputEvent::RequestStart);
    handle_input(&mut running, InputEvent::RequestJump);
    for _ in 0..90 {
        tick(&mut running);
    }

    let mut over = running.clone();
    ram_player(&mut over);
    tick(&mut over);
    assert_eq!(over.state, RunState::GameOver);

    for mut state in [idle, running, over] {
        handle_input(&mut state, InputEvent::RequestRestart);
        assert_eq!(state.state, RunState::Idle);
        assert_eq!(state.score, 0.0);
        assert_eq!(state.speed, tuning.base_speed);
        assert!(state.obstacles.is_empty());
        assert_eq!(state.player.bounds.pos.y, resting_y);
        assert_eq!(state.player.vy, 0.0);
        assert!(state.player.grounded);
    }
}

#[test]
fn test_best_score_across_sessions() {
    let mut game = Game::new(
        7,
        Tuning::default(),
        MemoryStore::with_raw("30"),
        dino_dash::ui::LogHud::default(),
    );

    // First session ends at 42
    game.handle(InputEvent::RequestStart);
    game.session.score = 42.5;
    ram_player(&mut game.session);
    let mut surface = dino_dash::renderer::NullSurface {
        size: glam::Vec2::new(800.0, 200.0),
    };
    game.frame(&mut surface);
    assert_eq!(game.session.best.get(), 42);
    assert_eq!(game.store.load_best(), 42);

    // Second session ends at 10
    game.handle(InputEvent::RequestRestart);
    game.handle(InputEvent::RequestStart);
    game.session.score = 10.0;
    ram_player(&mut game.session);
    game.frame(&mut surface);
    assert_eq!(game.session.state, RunState::GameOver);
    assert_eq!(game.session.best.get(), 42);
    assert_eq!(game.store.load_best(), 42);

    // A fresh game picks the stored best back up
    let reloaded = Game::new(
        8,
        Tuning::default(),
        game.store.clone(),
        dino_dash::ui::LogHud::default(),
    );
    assert_eq!(reloaded.session.best.get(), 42);
}

#[test]
fn test_obstacle_beside_player_does_not_collide() {
    let mut state = Session::new(1, Tuning::default(), 0);
    handle_input(&mut state, InputEvent::RequestStart);
    state.spawn_timer = 1_000;
    // Right edge touches the player's left edge after scrolling one tick
    let player = state.player.bounds;
    state.obstacles.push(Obstacle {
        bounds: Aabb::new(player.left() - 20.0 + state.speed, player.top(), 20.0, 40.0),
    });
    tick(&mut state);
    assert_eq!(state.state, RunState::Running);
}
