//! Best score persistence
//!
//! The stored value is the integer serialized as JSON (a bare number), so the
//! LocalStorage entry reads as plain digits.
//!
//! Storage is best-effort: a missing or corrupt value loads as 0 and a failed
//! write is logged and dropped.

/// LocalStorage key / file contents identifier
pub const BEST_KEY: &str = "dino_best_score";

/// Storage collaborator for the best score
pub trait BestScoreStore {
    /// Stored best, or 0 if absent or unreadable
    fn load_best(&self) -> u32;
    /// Persist a new best (fire-and-forget)
    fn save_best(&mut self, best: u32);
}

/// Parse a stored best score
pub fn parse_best(raw: &str) -> Result<u32, serde_json::Error> {
    serde_json::from_str(raw.trim())
}

/// Parse a stored best score, defaulting to 0
pub fn parse_best_or_default(raw: Option<&str>) -> u32 {
    match raw.map(parse_best) {
        Some(Ok(best)) => best,
        Some(Err(e)) => {
            log::warn!("Ignoring unreadable best score: {}", e);
            0
        }
        None => 0,
    }
}

/// Log the outcome of a save; returns whether it succeeded
pub(crate) fn report_save<E: std::fmt::Display>(best: u32, result: Result<(), E>) -> bool {
    match result {
        Ok(()) => {
            log::info!("Best score {} saved", best);
            true
        }
        Err(e) => {
            log::warn!("Failed to save best score {}: {}", best, e);
            false
        }
    }
}

/// In-memory store (tests, headless runs)
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    raw: Option<String>,
    /// Number of saves performed
    pub saves: u32,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with a raw stored value, as if written by an earlier session
    pub fn with_raw(raw: impl Into<String>) -> Self {
        Self {
            raw: Some(raw.into()),
            saves: 0,
        }
    }

    pub fn raw(&self) -> Option<&str> {
        self.raw.as_deref()
    }
}

impl BestScoreStore for MemoryStore {
    fn load_best(&self) -> u32 {
        parse_best_or_default(self.raw.as_deref())
    }

    fn save_best(&mut self, best: u32) {
        match serde_json::to_string(&best) {
            Ok(raw) => {
                self.raw = Some(raw);
                self.saves += 1;
            }
            Err(e) => log::warn!("Failed to encode best score: {}", e),
        }
    }
}

/// File-backed store (native)
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Clone)]
pub struct FileStore {
    path: std::path::PathBuf,
}

#[cfg(not(target_arch = "wasm32"))]
impl FileStore {
    pub fn new(path: impl Into<std::path::PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl BestScoreStore for FileStore {
    fn load_best(&self) -> u32 {
        let raw = std::fs::read_to_string(&self.path).ok();
        let best = parse_best_or_default(raw.as_deref());
        log::info!("Loaded best score {} from {}", best, self.path.display());
        best
    }

    fn save_best(&mut self, best: u32) {
        let result = serde_json::to_string(&best)
            .map_err(std::io::Error::other)
            .and_then(|raw| std::fs::write(&self.path, raw));
        report_save(best, result);
    }
}

/// LocalStorage-backed store (WASM only)
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Clone, Default)]
pub struct LocalStorageStore;

#[cfg(target_arch = "wasm32")]
impl LocalStorageStore {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
    }
}

#[cfg(target_arch = "wasm32")]
impl BestScoreStore for LocalStorageStore {
    fn load_best(&self) -> u32 {
        let raw = Self::storage().and_then(|s| s.get_item(BEST_KEY).ok().flatten());
        parse_best_or_default(raw.as_deref())
    }

    fn save_best(&mut self, best: u32) {
        let result = Self::storage()
            .ok_or_else(|| "LocalStorage unavailable".to_string())
            .and_then(|storage| {
                let raw = serde_json::to_string(&best).map_err(|e| e.to_string())?;
                storage
                    .set_item(BEST_KEY, &raw)
                    .map_err(|e| format!("{:?}", e))
            });
        report_save(best, result);
    }
}
