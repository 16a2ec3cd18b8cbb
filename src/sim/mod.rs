//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per frame, no wall-clock time
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod collision;
pub mod spawner;
pub mod state;
pub mod tick;

pub use collision::{Aabb, overlaps};
pub use spawner::{Spawner, speed_for_score};
pub use state::{GameEvent, InputEvent, Obstacle, PlayerBody, RunState, Session};
pub use tick::{handle_input, tick};
