//! Procedural obstacle generation and the difficulty ramp

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::collision::Aabb;
use super::state::Obstacle;
use crate::consts::*;

/// Generates obstacles from a seeded RNG
#[derive(Debug, Clone)]
pub struct Spawner {
    rng: Pcg32,
    ground_y: f32,
}

impl Spawner {
    pub fn new(seed: u64, ground_y: f32) -> Self {
        Self::with_rng(Pcg32::seed_from_u64(seed), ground_y)
    }

    /// Use a caller-provided RNG (tests, replays)
    pub fn with_rng(rng: Pcg32, ground_y: f32) -> Self {
        Self { rng, ground_y }
    }

    /// Create one obstacle resting on the ground just past the right edge
    pub fn spawn_one(&mut self, viewport_width: f32) -> Obstacle {
        let h = self.rng.random_range(OBSTACLE_MIN_HEIGHT..OBSTACLE_MAX_HEIGHT);
        let w = self.rng.random_range(OBSTACLE_MIN_WIDTH..OBSTACLE_MAX_WIDTH);
        Obstacle {
            bounds: Aabb::new(viewport_width + SPAWN_OFFSET_X, self.ground_y - h, w, h),
        }
    }

    /// Ticks until the next spawn; shrinks with score but never below the floor
    pub fn next_countdown(&mut self, score: f64) -> i32 {
        let jitter = self.rng.random_range(0..SPAWN_SPACING_JITTER);
        let ramp = (score / SPAWN_SPACING_SCORE_DIVISOR).floor() as i32;
        (SPAWN_SPACING_BASE + jitter - ramp).max(SPAWN_SPACING_MIN)
    }
}

/// Scroll speed for a given score, saturating at `base + MAX_SPEED_BONUS`
#[inline]
pub fn speed_for_score(score: f64, base_speed: f32) -> f32 {
    base_speed + (score / SPEED_RAMP_DIVISOR).min(MAX_SPEED_BONUS) as f32
}
