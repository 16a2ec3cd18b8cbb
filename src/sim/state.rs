//! Session state and core simulation types

use glam::Vec2;

use super::collision::Aabb;
use super::spawner::Spawner;
use crate::consts::INITIAL_SPAWN_TIMER;
use crate::highscores::BestScore;
use crate::tuning::Tuning;

/// Current phase of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunState {
    /// Waiting for the first input; nothing advances
    #[default]
    Idle,
    /// Active gameplay
    Running,
    /// Run ended; frozen until an explicit restart
    GameOver,
}

/// Normalized player input, independent of keyboard/pointer/touch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    RequestStart,
    RequestJump,
    RequestRestart,
}

/// Notifications for the display and persistence collaborators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    StateChanged(RunState),
    /// Floored score changed
    ScoreChanged(u32),
    /// Best score improved at a game over
    NewBest(u32),
}

/// The player: fixed x, vertical motion under gravity
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerBody {
    pub bounds: Aabb,
    /// Vertical velocity (negative = up)
    pub vy: f32,
    pub grounded: bool,
}

impl PlayerBody {
    /// Player resting on the ground
    pub fn resting(x: f32, size: Vec2, ground_y: f32) -> Self {
        Self {
            bounds: Aabb {
                pos: Vec2::new(x, ground_y - size.y),
                size,
            },
            vy: 0.0,
            grounded: true,
        }
    }

    /// Lowest allowed y (top edge) for the given ground line
    #[inline]
    pub fn ground_clamp(&self, ground_y: f32) -> f32 {
        ground_y - self.bounds.size.y
    }

    /// Apply a jump impulse if grounded; returns whether the jump happened
    pub fn jump(&mut self, impulse: f32) -> bool {
        if !self.grounded {
            return false;
        }
        self.vy = impulse;
        self.grounded = false;
        true
    }

    /// Integrate one tick of gravity and clamp to the ground
    pub fn update(&mut self, gravity: f32, ground_y: f32) {
        self.vy += gravity;
        self.bounds.pos.y += self.vy;

        let clamp = self.ground_clamp(ground_y);
        if self.bounds.pos.y >= clamp {
            self.bounds.pos.y = clamp;
            self.vy = 0.0;
            self.grounded = true;
        }
    }
}

/// An obstacle scrolling toward the player
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Obstacle {
    pub bounds: Aabb,
}

/// Complete session state
///
/// Owned by the driver and passed by reference into `tick`/`handle_input`
/// and the renderer.
#[derive(Debug, Clone)]
pub struct Session {
    pub tuning: Tuning,
    pub state: RunState,
    /// Accumulated score (floored for display)
    pub score: f64,
    /// Current scroll speed
    pub speed: f32,
    /// Ticks until the next spawn
    pub spawn_timer: i32,
    pub player: PlayerBody,
    pub obstacles: Vec<Obstacle>,
    pub best: BestScore,
    /// Running ticks since the last restart
    pub time_ticks: u64,
    pub(crate) spawner: Spawner,
    viewport_width: f32,
    displayed_score: u32,
    events: Vec<GameEvent>,
}

impl Session {
    /// Create an idle session with the given seed and stored best score
    pub fn new(seed: u64, tuning: Tuning, best: u32) -> Self {
        let spawner = Spawner::new(seed, tuning.ground_y);
        let player = PlayerBody::resting(tuning.player_x, tuning.player_size, tuning.ground_y);
        Self {
            state: RunState::Idle,
            score: 0.0,
            speed: tuning.base_speed,
            spawn_timer: INITIAL_SPAWN_TIMER,
            player,
            obstacles: Vec::new(),
            best: BestScore::new(best),
            time_ticks: 0,
            spawner,
            viewport_width: tuning.fallback_viewport_width,
            displayed_score: 0,
            events: Vec::new(),
            tuning,
        }
    }

    /// Score as shown to the player
    #[inline]
    pub fn floored_score(&self) -> u32 {
        self.score.floor() as u32
    }

    pub fn viewport_width(&self) -> f32 {
        self.viewport_width
    }

    /// Track the logical viewport width (0 falls back to the tuned default)
    pub fn set_viewport_width(&mut self, width: f32) {
        self.viewport_width = if width > 0.0 {
            width
        } else {
            self.tuning.fallback_viewport_width
        };
    }

    /// Take all pending events, oldest first
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Reset everything except the best score and the RNG stream
    pub fn restart(&mut self) {
        self.obstacles.clear();
        self.score = 0.0;
        self.speed = self.tuning.base_speed;
        self.spawn_timer = INITIAL_SPAWN_TIMER;
        self.time_ticks = 0;
        self.player = PlayerBody::resting(
            self.tuning.player_x,
            self.tuning.player_size,
            self.tuning.ground_y,
        );
        self.set_state(RunState::Idle);
        self.displayed_score = 0;
        self.events.push(GameEvent::ScoreChanged(0));
    }

    pub(crate) fn set_state(&mut self, state: RunState) {
        if self.state != state {
            self.state = state;
            self.events.push(GameEvent::StateChanged(state));
        }
    }

    /// End the run and commit the best score
    pub(crate) fn game_over(&mut self) {
        self.set_state(RunState::GameOver);
        let final_score = self.floored_score();
        log::info!("Game over: score {} after {} ticks", final_score, self.time_ticks);
        if let Some(best) = self.best.commit(final_score) {
            log::info!("New best score: {}", best);
            self.events.push(GameEvent::NewBest(best));
        }
    }

    /// Emit a score event if the displayed value changed
    pub(crate) fn publish_score(&mut self) {
        let shown = self.floored_score();
        if shown != self.displayed_score {
            self.displayed_score = shown;
            self.events.push(GameEvent::ScoreChanged(shown));
        }
    }
}
