//! Per-frame simulation tick and input dispatch
//!
//! One call to `tick` is one frame of game time.

use super::collision::overlaps;
use super::spawner::speed_for_score;
use super::state::{InputEvent, RunState, Session};
use crate::consts::*;

/// Apply one normalized input event
///
/// Safe to call any number of times between ticks: events that make no sense
/// in the current state are ignored.
pub fn handle_input(state: &mut Session, event: InputEvent) {
    match (event, state.state) {
        (InputEvent::RequestStart, RunState::Idle) => {
            log::info!("Run started");
            state.set_state(RunState::Running);
        }
        (InputEvent::RequestJump, RunState::Running) => {
            let impulse = state.tuning.jump_impulse;
            state.player.jump(impulse);
        }
        (InputEvent::RequestRestart, _) => {
            log::info!("Restart");
            state.restart();
        }
        _ => {}
    }
}

/// Advance the session by one tick
pub fn tick(state: &mut Session) {
    // Idle and GameOver are frozen
    if state.state != RunState::Running {
        return;
    }

    state.time_ticks += 1;
    let base_speed = state.tuning.base_speed;
    state.speed = speed_for_score(state.score, base_speed);

    state.spawn_timer -= 1;
    if state.spawn_timer <= 0 {
        let width = state.viewport_width();
        let obstacle = state.spawner.spawn_one(width);
        log::debug!(
            "Spawned {}x{} obstacle at x={}",
            obstacle.bounds.size.x,
            obstacle.bounds.size.y,
            obstacle.bounds.left()
        );
        state.obstacles.push(obstacle);
        state.spawn_timer = state.spawner.next_countdown(state.score);
    }

    let speed = state.speed;
    for obstacle in &mut state.obstacles {
        obstacle.bounds.pos.x -= speed;
    }
    state
        .obstacles
        .retain(|ob| ob.bounds.right() >= -DESPAWN_MARGIN);

    let (gravity, ground_y) = (state.tuning.gravity, state.tuning.ground_y);
    state.player.update(gravity, ground_y);

    let player = state.player.bounds;
    if state.obstacles.iter().any(|ob| overlaps(&player, &ob.bounds)) {
        state.game_over();
        return;
    }

    state.score += SCORE_PER_TICK * f64::from(state.speed / base_speed);
    state.publish_score();
}
