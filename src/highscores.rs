//! Best score tracking
//!
//! A single integer that only ever goes up. Storage lives in `persistence`.

/// Highest floored score achieved across sessions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BestScore(u32);

impl BestScore {
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    pub const fn get(&self) -> u32 {
        self.0
    }

    /// Check if a final score beats the current best
    pub fn qualifies(&self, score: u32) -> bool {
        score > self.0
    }

    /// Record a final score; returns the new best if it improved
    pub fn commit(&mut self, score: u32) -> Option<u32> {
        if !self.qualifies(score) {
            return None;
        }
        self.0 = score;
        Some(score)
    }
}
