//! HUD and overlay prompt contract
//!
//! The DOM implementation lives in the web entry point; `LogHud` serves
//! headless runs.

use crate::sim::RunState;

/// Prompt shown over the playfield
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlay {
    PressToStart,
    GameOver,
    Hidden,
}

impl Overlay {
    pub fn for_state(state: RunState) -> Self {
        match state {
            RunState::Idle => Overlay::PressToStart,
            RunState::Running => Overlay::Hidden,
            RunState::GameOver => Overlay::GameOver,
        }
    }

    /// Prompt text (None when hidden)
    pub fn text(&self) -> Option<&'static str> {
        match self {
            Overlay::PressToStart => Some("Tap or press Space to start"),
            Overlay::GameOver => Some("Game Over - press Restart or R"),
            Overlay::Hidden => None,
        }
    }
}

/// Score/best display and overlay collaborator
pub trait Hud {
    fn set_score(&mut self, score: u32);
    fn set_best(&mut self, best: u32);
    fn set_overlay(&mut self, overlay: Overlay);
}

/// HUD that writes to the log
#[derive(Debug, Default)]
pub struct LogHud {
    pub score: u32,
    pub best: u32,
}

impl Hud for LogHud {
    fn set_score(&mut self, score: u32) {
        self.score = score;
        log::trace!("Score: {}", score);
    }

    fn set_best(&mut self, best: u32) {
        self.best = best;
        log::info!("Best: {}", best);
    }

    fn set_overlay(&mut self, overlay: Overlay) {
        if let Some(text) = overlay.text() {
            log::info!("{}", text);
        }
    }
}
