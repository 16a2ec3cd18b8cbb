//! Platform abstraction layer
//!
//! Normalizes keyboard, pointer and touch input into `InputEvent` sequences
//! so the simulation never sees the input modality.

use crate::sim::InputEvent;

/// A raw input as delivered by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RawInput<'a> {
    /// Keyboard press: physical `code` and logical `key`
    Key { code: &'a str, key: &'a str },
    /// Mouse click on the playfield
    PointerDown,
    /// Touch start on the playfield
    TouchStart,
    /// The on-screen restart button
    RestartButton,
}

const START_AND_JUMP: &[InputEvent] = &[InputEvent::RequestStart, InputEvent::RequestJump];
const RESTART: &[InputEvent] = &[InputEvent::RequestRestart];
const RESTART_AND_START: &[InputEvent] = &[InputEvent::RequestRestart, InputEvent::RequestStart];

/// Events to dispatch, in order, for a raw input
pub fn normalize(raw: RawInput<'_>) -> &'static [InputEvent] {
    match raw {
        RawInput::Key { code, key } => match (code, key) {
            ("Space" | "ArrowUp", _) => START_AND_JUMP,
            (_, "r" | "R") => RESTART,
            _ => &[],
        },
        RawInput::PointerDown | RawInput::TouchStart => START_AND_JUMP,
        RawInput::RestartButton => RESTART_AND_START,
    }
}

/// Key that toggles idle/demo mode
pub fn is_autopilot_toggle(key: &str) -> bool {
    matches!(key, "i" | "I")
}
