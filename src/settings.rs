//! Game settings and preferences
//!
//! The quality preset is chosen with a `?quality=low|medium|high` page
//! parameter and remembered in LocalStorage. Reduced motion always follows the
//! system `prefers-reduced-motion` setting and is never stored.

use serde::{Deserialize, Serialize};

use crate::consts::STAR_COUNT;

/// Quality preset levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum QualityPreset {
    Low,
    #[default]
    Medium,
    High,
}

impl QualityPreset {
    pub fn as_str(&self) -> &'static str {
        match self {
            QualityPreset::Low => "Low",
            QualityPreset::Medium => "Medium",
            QualityPreset::High => "High",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "low" => Some(QualityPreset::Low),
            "medium" | "med" => Some(QualityPreset::Medium),
            "high" => Some(QualityPreset::High),
            _ => None,
        }
    }

    /// Number of background stars for this preset
    pub fn star_count(&self) -> usize {
        match self {
            QualityPreset::Low => STAR_COUNT / 3,
            QualityPreset::Medium => STAR_COUNT,
            QualityPreset::High => STAR_COUNT * 2,
        }
    }

    /// Triangle segments used for round shapes (stars, glow, cockpit)
    pub fn circle_segments(&self) -> u32 {
        match self {
            QualityPreset::Low => 6,
            QualityPreset::Medium => 10,
            QualityPreset::High => 16,
        }
    }
}

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Graphics quality preset
    pub quality: QualityPreset,

    // === Visual Effects ===
    /// Engine glow behind the craft while running
    pub engine_glow: bool,
    /// Faint vertical detail lines on pillars
    pub pillar_details: bool,

    // === Accessibility ===
    /// Reduced motion (no glow pulsing); mirrors the system preference
    #[serde(skip)]
    pub reduced_motion: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            quality: QualityPreset::Medium,
            engine_glow: true,
            pillar_details: true,
            reduced_motion: false,
        }
    }
}

/// Value of `quality=` in a URL search string such as `?quality=low&x=1`
pub fn quality_param(search: &str) -> Option<&str> {
    search
        .trim_start_matches('?')
        .split('&')
        .find_map(|pair| pair.strip_prefix("quality="))
}

impl Settings {
    /// Apply a quality preset (updates quality-dependent settings)
    pub fn apply_preset(&mut self, preset: QualityPreset) {
        self.quality = preset;
        // Low drops the extra pillar geometry
        self.pillar_details = preset != QualityPreset::Low;
    }

    /// Apply page start-up options: the `?quality=` parameter from `search`
    /// and the system reduced-motion preference.
    ///
    /// Returns true when the stored part changed and should be saved.
    pub fn apply_launch_options(&mut self, search: &str, prefers_reduced_motion: bool) -> bool {
        self.reduced_motion = prefers_reduced_motion;

        let Some(value) = quality_param(search) else {
            return false;
        };
        let Some(preset) = QualityPreset::from_str(value) else {
            log::warn!("Unknown quality preset '{}', keeping {}", value, self.quality.as_str());
            return false;
        };

        let before = self.clone();
        self.apply_preset(preset);
        log::info!("Quality preset: {}", preset.as_str());
        *self != before
    }

    /// Star count for the current preset
    pub fn star_count(&self) -> usize {
        self.quality.star_count()
    }

    /// Effective glow pulsing (respects reduced_motion)
    pub fn effective_glow_pulse(&self) -> bool {
        self.engine_glow && !self.reduced_motion
    }

    /// Parse from JSON, falling back to defaults on anything unreadable
    pub fn from_json(json: &str) -> Self {
        match serde_json::from_str(json) {
            Ok(settings) => settings,
            Err(e) => {
                log::info!("Ignoring stored settings ({e}), using defaults");
                Self::default()
            }
        }
    }

    /// LocalStorage key
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "galactic_dash_settings";

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                log::info!("Loaded settings from LocalStorage");
                return Self::from_json(&json);
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Save settings to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(json) = serde_json::to_string(self) {
                let _ = storage.set_item(Self::STORAGE_KEY, &json);
                log::info!("Settings saved");
            }
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_star_count_follows_preset() {
        let mut settings = Settings::default();
        assert_eq!(settings.star_count(), 150);
        settings.apply_preset(QualityPreset::Low);
        assert_eq!(settings.star_count(), 50);
        assert!(!settings.pillar_details);
        settings.apply_preset(QualityPreset::High);
        assert_eq!(settings.star_count(), 300);
        assert!(settings.pillar_details);
    }

    #[test]
    fn test_preset_names() {
        for preset in [QualityPreset::Low, QualityPreset::Medium, QualityPreset::High] {
            assert_eq!(QualityPreset::from_str(preset.as_str()), Some(preset));
        }
        assert_eq!(QualityPreset::from_str("med"), Some(QualityPreset::Medium));
        assert_eq!(QualityPreset::from_str("ultra"), None);
    }

    #[test]
    fn test_quality_param_lookup() {
        assert_eq!(quality_param("?quality=low"), Some("low"));
        assert_eq!(quality_param("?seed=3&quality=High"), Some("High"));
        assert_eq!(quality_param("?qualityx=low"), None);
        assert_eq!(quality_param(""), None);
    }

    #[test]
    fn test_launch_options_apply_and_report_changes() {
        let mut settings = Settings::default();
        assert!(settings.apply_launch_options("?quality=low", false));
        assert_eq!(settings.quality, QualityPreset::Low);
        assert!(!settings.pillar_details);

        // Same preset again: nothing new to store
        assert!(!settings.apply_launch_options("?quality=LOW", false));
        // Unknown or missing values leave the preset alone
        assert!(!settings.apply_launch_options("?quality=ultra", false));
        assert!(!settings.apply_launch_options("", false));
        assert_eq!(settings.quality, QualityPreset::Low);
    }

    #[test]
    fn test_reduced_motion_follows_system() {
        let mut settings = Settings::default();
        assert!(!settings.apply_launch_options("", true));
        assert!(settings.reduced_motion);
        assert!(!settings.effective_glow_pulse());

        settings.apply_launch_options("", false);
        assert!(settings.effective_glow_pulse());
    }

    #[test]
    fn test_json_round_trip_skips_reduced_motion() {
        let mut settings = Settings::default();
        settings.apply_preset(QualityPreset::High);
        settings.engine_glow = false;
        settings.reduced_motion = true;

        let json = serde_json::to_string(&settings).unwrap();
        let restored = Settings::from_json(&json);
        assert_eq!(restored.quality, QualityPreset::High);
        assert!(!restored.engine_glow);
        assert!(!restored.reduced_motion);

        assert_eq!(Settings::from_json("{not json"), Settings::default());
    }
}
