//! Game settings and preferences
//!
//! Loaded from a JSON file on native and passed in as a JSON string by the
//! browser host.

use serde::{Deserialize, Serialize};

use crate::error::SettingsError;
use crate::sim::Ruleset;

/// Which ruleset a match is played under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum RulesetPreset {
    /// Fish lanes plus a single octopus
    Classic,
    /// Fish lanes plus the monster-infested abyssal lane
    #[default]
    Abyssal,
}

impl RulesetPreset {
    pub fn as_str(&self) -> &'static str {
        match self {
            RulesetPreset::Classic => "Classic",
            RulesetPreset::Abyssal => "Abyssal",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "classic" => Some(RulesetPreset::Classic),
            "abyssal" | "monsters" => Some(RulesetPreset::Abyssal),
            _ => None,
        }
    }

    /// The preset's ruleset before any preference adjustments
    pub fn ruleset(&self) -> Ruleset {
        match self {
            RulesetPreset::Classic => Ruleset::classic(),
            RulesetPreset::Abyssal => Ruleset::abyssal(),
        }
    }
}

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Settings {
    pub preset: RulesetPreset,
    /// Fixed RNG seed; the host picks one when absent
    pub seed: Option<u64>,
    /// Let the autopilot cast
    pub demo_mode: bool,

    // === Visual Effects ===
    /// Background bubble stream
    pub bubbles: bool,

    // === Accessibility ===
    /// Reduced motion (no bubbles)
    pub reduced_motion: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            preset: RulesetPreset::Abyssal,
            seed: None,
            demo_mode: false,
            bubbles: true,
            reduced_motion: false,
        }
    }
}

impl Settings {
    /// Effective bubbles (respects reduced_motion)
    pub fn effective_bubbles(&self) -> bool {
        self.bubbles && !self.reduced_motion
    }

    /// Ruleset for these settings, validated
    pub fn ruleset(&self) -> Result<Ruleset, SettingsError> {
        let mut rules = self.preset.ruleset();
        if !self.effective_bubbles() {
            rules.bubble_chance = 0.0;
        }
        rules.validate()?;
        Ok(rules)
    }

    /// Parse settings; missing fields fall back to their defaults
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Self = serde_json::from_str(json)?;
        settings.ruleset()?;
        Ok(settings)
    }

    pub fn to_json(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load settings from a JSON file
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load(path: &std::path::Path) -> Result<Self, SettingsError> {
        let json = std::fs::read_to_string(path)?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }
}
