//! Dino Dash - A minimal endless-runner arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, spawning, collisions, state machine)
//! - `game`: Per-frame driver that ties the simulation to its collaborators
//! - `renderer`: Render surface contract and scene drawing
//! - `platform`: Input normalization (keyboard/pointer/touch to game input)
//! - `persistence`: Best score storage
//! - `tuning`: Data-driven physics tuning

#[cfg(not(target_arch = "wasm32"))]
pub mod cli;
pub mod game;
pub mod highscores;
pub mod persistence;
pub mod platform;
pub mod renderer;
pub mod sim;
pub mod tuning;
pub mod ui;

pub use game::Game;
pub use highscores::BestScore;
pub use tuning::Tuning;

/// Fixed gameplay rules (not tunable)
pub mod consts {
    /// Obstacle height range [min, max)
    pub const OBSTACLE_MIN_HEIGHT: f32 = 26.0;
    pub const OBSTACLE_MAX_HEIGHT: f32 = 52.0;
    /// Obstacle width range [min, max)
    pub const OBSTACLE_MIN_WIDTH: f32 = 18.0;
    pub const OBSTACLE_MAX_WIDTH: f32 = 38.0;

    /// Obstacles spawn this far beyond the right edge of the viewport
    pub const SPAWN_OFFSET_X: f32 = 20.0;
    /// Obstacles are dropped once their right edge passes this far left of x = 0
    pub const DESPAWN_MARGIN: f32 = 50.0;

    /// Spawn countdown = BASE + uniform[0, JITTER) - floor(score / SCORE_DIVISOR)
    pub const SPAWN_SPACING_BASE: i32 = 70;
    pub const SPAWN_SPACING_JITTER: i32 = 80;
    pub const SPAWN_SPACING_SCORE_DIVISOR: f64 = 10.0;
    /// Countdown floor (ticks) so obstacle density stays solvable
    pub const SPAWN_SPACING_MIN: i32 = 40;
    /// Countdown after a restart
    pub const INITIAL_SPAWN_TIMER: i32 = 60;

    /// Speed = base + min(MAX_SPEED_BONUS, score / SPEED_RAMP_DIVISOR)
    pub const MAX_SPEED_BONUS: f64 = 3.0;
    pub const SPEED_RAMP_DIVISOR: f64 = 200.0;

    /// Score gained per tick at base speed
    pub const SCORE_PER_TICK: f64 = 0.2;

    /// Corner radius of the player sprite
    pub const PLAYER_CORNER_RADIUS: f32 = 6.0;
}
