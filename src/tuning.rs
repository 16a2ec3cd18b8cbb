//! Physics tuning
//!
//! Persisted as JSON in LocalStorage (web) or read from the file named by
//! `DINO_DASH_TUNING` (native). Missing fields take their defaults.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Tunable physics values, in logical (CSS) pixels and per-tick units
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Y coordinate of the ground line (y grows downward)
    pub ground_y: f32,
    /// Added to vertical velocity every tick
    pub gravity: f32,
    /// Vertical velocity set by a jump (negative = up)
    pub jump_impulse: f32,
    /// Scroll speed at score 0
    pub base_speed: f32,
    /// Fixed horizontal position of the player
    pub player_x: f32,
    /// Player width/height
    pub player_size: Vec2,
    /// Used for spawn placement when the surface reports no width
    pub fallback_viewport_width: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            ground_y: 150.0,
            gravity: 0.6,
            jump_impulse: -14.0,
            base_speed: 3.0,
            player_x: 60.0,
            player_size: Vec2::new(40.0, 40.0),
            fallback_viewport_width: 800.0,
        }
    }
}

impl Tuning {
    /// Parse tuning from JSON and sanitize it
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let tuning: Tuning = serde_json::from_str(json)?;
        Ok(tuning.sanitized())
    }

    /// Replace values that would break the simulation with their defaults
    pub fn sanitized(mut self) -> Self {
        let defaults = Self::default();

        if !(self.gravity.is_finite() && self.gravity > 0.0) {
            log::warn!("Invalid gravity {}, using default", self.gravity);
            self.gravity = defaults.gravity;
        }
        if !(self.jump_impulse.is_finite() && self.jump_impulse < 0.0) {
            log::warn!("Invalid jump impulse {}, using default", self.jump_impulse);
            self.jump_impulse = defaults.jump_impulse;
        }
        if !(self.base_speed.is_finite() && self.base_speed > 0.0) {
            log::warn!("Invalid base speed {}, using default", self.base_speed);
            self.base_speed = defaults.base_speed;
        }
        if !self.ground_y.is_finite() {
            log::warn!("Invalid ground y {}, using default", self.ground_y);
            self.ground_y = defaults.ground_y;
        }
        if !self.player_x.is_finite() {
            log::warn!("Invalid player x {}, using default", self.player_x);
            self.player_x = defaults.player_x;
        }
        if !(self.player_size.is_finite() && self.player_size.cmpgt(Vec2::ZERO).all()) {
            log::warn!("Invalid player size {:?}, using default", self.player_size);
            self.player_size = defaults.player_size;
        }
        if !(self.fallback_viewport_width.is_finite() && self.fallback_viewport_width > 0.0) {
            log::warn!(
                "Invalid fallback viewport width {}, using default",
                self.fallback_viewport_width
            );
            self.fallback_viewport_width = defaults.fallback_viewport_width;
        }

        self
    }

    /// Peak jump height above the ground (v² / 2g)
    pub fn jump_height(&self) -> f32 {
        self.jump_impulse * self.jump_impulse / (2.0 * self.gravity)
    }

    /// LocalStorage key
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "dino_dash_tuning";

    /// Environment variable naming a tuning JSON file (native)
    #[allow(dead_code)]
    const ENV_VAR: &'static str = "DINO_DASH_TUNING";

    /// Load tuning from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                match Self::from_json(&json) {
                    Ok(tuning) => {
                        log::info!("Loaded tuning from LocalStorage");
                        return tuning;
                    }
                    Err(e) => log::warn!("Ignoring stored tuning: {}", e),
                }
            }
        }

        Self::default()
    }

    /// Load tuning from the file named by `DINO_DASH_TUNING` (native)
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        match std::env::var_os(Self::ENV_VAR) {
            Some(path) => Self::load_from_path(std::path::Path::new(&path)),
            None => Self::default(),
        }
    }

    /// Load tuning from a JSON file, falling back to defaults on any error
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from_path(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => match Self::from_json(&json) {
                Ok(tuning) => {
                    log::info!("Loaded tuning from {}", path.display());
                    tuning
                }
                Err(e) => {
                    log::warn!("Ignoring tuning file {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                log::warn!("Could not read tuning file {}: {}", path.display(), e);
                Self::default()
            }
        }
    }
}
