//! Idle/demo mode - AI plays the game
//!
//! Decides when to jump by looking a speed-scaled distance ahead of the player.

use super::state::{RunState, Session};

/// How many ticks ahead of contact the autopilot takes off
const LEAD_TICKS: f32 = 9.0;

/// Whether the autopilot wants to jump this tick
pub fn should_jump(state: &Session) -> bool {
    if state.state != RunState::Running || !state.player.grounded {
        return false;
    }

    let player = &state.player.bounds;
    let lookahead = state.speed * LEAD_TICKS;

    // Nearest obstacle whose right edge is still ahead of the player's left edge
    state
        .obstacles
        .iter()
        .filter(|ob| ob.bounds.right() > player.left())
        .map(|ob| ob.bounds.left() - player.right())
        .min_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal))
        .is_some_and(|gap| gap <= lookahead)
}
