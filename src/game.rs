//! Frame driver
//!
//! Owns the session and its collaborators. The host calls `frame` once per
//! display refresh and `dispatch` for each input between frames.

use crate::persistence::BestScoreStore;
use crate::platform::{RawInput, normalize};
use crate::renderer::{self, Surface};
use crate::sim::{GameEvent, InputEvent, Session, autopilot, handle_input, tick};
use crate::tuning::Tuning;
use crate::ui::{Hud, Overlay};

/// Game instance holding the session and its collaborators
pub struct Game<S: BestScoreStore, H: Hud> {
    pub session: Session,
    pub store: S,
    pub hud: H,
    /// Idle/demo mode - the autopilot jumps for the player
    pub autopilot: bool,
}

impl<S: BestScoreStore, H: Hud> Game<S, H> {
    /// Load the stored best and show the initial HUD
    pub fn new(seed: u64, tuning: Tuning, store: S, mut hud: H) -> Self {
        let best = store.load_best();
        let session = Session::new(seed, tuning, best);

        hud.set_best(best);
        hud.set_score(0);
        hud.set_overlay(Overlay::for_state(session.state));

        log::info!("Game initialized with seed {} (best {})", seed, best);

        Self {
            session,
            store,
            hud,
            autopilot: false,
        }
    }

    /// Apply one normalized input event
    pub fn handle(&mut self, event: InputEvent) {
        handle_input(&mut self.session, event);
        self.flush_events();
    }

    /// Normalize a raw host input and apply the resulting events
    pub fn dispatch(&mut self, raw: RawInput<'_>) {
        for &event in normalize(raw) {
            self.handle(event);
        }
    }

    pub fn toggle_autopilot(&mut self) {
        self.autopilot = !self.autopilot;
        log::info!("Idle mode: {}", self.autopilot);
    }

    /// One display refresh: tick, notify collaborators, redraw
    pub fn frame(&mut self, surface: &mut impl Surface) {
        self.session.set_viewport_width(surface.size().x);

        if self.autopilot && autopilot::should_jump(&self.session) {
            handle_input(&mut self.session, InputEvent::RequestJump);
        }

        tick(&mut self.session);
        self.flush_events();
        renderer::draw(&self.session, surface);
    }

    /// Forward pending session events to the HUD and store
    fn flush_events(&mut self) {
        for event in self.session.drain_events() {
            match event {
                GameEvent::StateChanged(state) => self.hud.set_overlay(Overlay::for_state(state)),
                GameEvent::ScoreChanged(score) => self.hud.set_score(score),
                GameEvent::NewBest(best) => {
                    self.store.save_best(best);
                    self.hud.set_best(best);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec2;

    use super::*;
    use crate::persistence::MemoryStore;
    use crate::renderer::NullSurface;
    use crate::sim::{Obstacle, RunState};

    #[derive(Debug, Default)]
    struct RecordingHud {
        scores: Vec<u32>,
        bests: Vec<u32>,
        overlays: Vec<Overlay>,
    }

    impl Hud for RecordingHud {
        fn set_score(&mut self, score: u32) {
            self.scores.push(score);
        }

        fn set_best(&mut self, best: u32) {
            self.bests.push(best);
        }

        fn set_overlay(&mut self, overlay: Overlay) {
            self.overlays.push(overlay);
        }
    }

    fn surface() -> NullSurface {
        NullSurface {
            size: Vec2::new(800.0, 200.0),
        }
    }

    #[test]
    fn test_initial_hud() {
        let game = Game::new(
            1,
            Tuning::default(),
            MemoryStore::with_raw("30"),
            RecordingHud::default(),
        );
        assert_eq!(game.hud.bests, vec![30]);
        assert_eq!(game.hud.scores, vec![0]);
        assert_eq!(game.hud.overlays, vec![Overlay::PressToStart]);
    }

    #[test]
    fn test_pointer_starts_and_hides_overlay() {
        let mut game = Game::new(
            1,
            Tuning::default(),
            MemoryStore::new(),
            RecordingHud::default(),
        );
        game.dispatch(RawInput::PointerDown);
        assert_eq!(game.session.state, RunState::Running);
        assert!(!game.session.player.grounded);
        assert_eq!(game.hud.overlays.last(), Some(&Overlay::Hidden));
    }

    #[test]
    fn test_score_updates_reach_hud() {
        let mut game = Game::new(
            1,
            Tuning::default(),
            MemoryStore::new(),
            RecordingHud::default(),
        );
        game.handle(InputEvent::RequestStart);
        let mut surface = surface();
        for _ in 0..20 {
            game.frame(&mut surface);
        }
        // Roughly 0.2 per tick, so the displayed score changed several times
        assert!(game.hud.scores.len() >= 3);
        assert_eq!(game.hud.scores.last(), Some(&game.session.floored_score()));
    }

    #[test]
    fn test_new_best_is_saved_and_shown() {
        let mut game = Game::new(
            1,
            Tuning::default(),
            MemoryStore::with_raw("30"),
            RecordingHud::default(),
        );
        game.handle(InputEvent::RequestStart);
        game.session.score = 42.0;
        let player = game.session.player.bounds;
        game.session.obstacles.push(Obstacle { bounds: player });
        game.frame(&mut surface());

        assert_eq!(game.session.state, RunState::GameOver);
        assert_eq!(game.store.load_best(), 42);
        assert_eq!(game.store.saves, 1);
        assert_eq!(game.hud.bests, vec![30, 42]);
        assert_eq!(game.hud.overlays.last(), Some(&Overlay::GameOver));

        // A worse second run leaves the best alone
        game.dispatch(RawInput::RestartButton);
        assert_eq!(game.session.state, RunState::Running);
        game.session.score = 10.0;
        let player = game.session.player.bounds;
        game.session.obstacles.push(Obstacle { bounds: player });
        game.frame(&mut surface());

        assert_eq!(game.session.state, RunState::GameOver);
        assert_eq!(game.store.load_best(), 42);
        assert_eq!(game.store.saves, 1);
    }

    #[test]
    fn test_zero_width_surface_uses_fallback() {
        let mut game = Game::new(
            1,
            Tuning::default(),
            MemoryStore::new(),
            RecordingHud::default(),
        );
        let mut surface = NullSurface { size: Vec2::ZERO };
        game.frame(&mut surface);
        assert_eq!(game.session.viewport_width(), 800.0);
    }
}
