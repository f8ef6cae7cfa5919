//! Best score persistence
//!
//! A single integer in LocalStorage. Nothing else about a run is kept.

use serde::{Deserialize, Serialize};

/// Best score across runs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct BestScore {
    pub best: u32,
}

impl BestScore {
    /// LocalStorage key (used only in wasm32)
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "galactic_dash_best";

    pub fn new(best: u32) -> Self {
        Self { best }
    }

    /// Record a finished run. Returns true if it set a new best.
    pub fn record(&mut self, score: u32) -> bool {
        if score > self.best {
            self.best = score;
            true
        } else {
            false
        }
    }

    /// Stored form is the bare integer
    pub fn to_json(&self) -> String {
        serde_json::to_string(&self.best).unwrap_or_else(|_| "0".to_string())
    }

    /// Anything unreadable counts as no best score yet
    pub fn from_json(json: &str) -> Self {
        serde_json::from_str::<u32>(json.trim())
            .map(Self::new)
            .unwrap_or_default()
    }

    /// Load best score from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                let best = Self::from_json(&json);
                log::info!("Loaded best score {}", best.best);
                return best;
            }
        }

        log::info!("No best score found, starting fresh");
        Self::default()
    }

    /// Save best score to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            let _ = storage.set_item(Self::STORAGE_KEY, &self.to_json());
            log::info!("Best score saved ({})", self.best);
        }
    }

    /// Native stubs
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) {
        // No-op for native
    }
}
