//! Survival tuning loaded from an external RON file.
//!
//! Rates are expressed per minute of elapsed play time except stamina
//! recovery, which is per second. Setting a rate to zero disables that part
//! of the pipeline.

use bevy::prelude::*;
use serde::Deserialize;

use crate::core::load_or_default;

const CONFIG_PATH: &str = "assets/config/survival.ron";

/// Survival pipeline tuning, loaded from `assets/config/survival.ron`.
#[derive(Resource, Clone, Deserialize)]
pub struct SurvivalConfig {
    // Decay (points per minute on the 0-100 scales)
    pub hunger_decay_per_minute: f32,
    pub thirst_decay_per_minute: f32,
    pub fatigue_gain_per_minute: f32,
    /// Fatigue recovered per minute while the rest capability reports
    /// resting. Nothing in this crate triggers rest; the rate is reserved
    /// for systems that do.
    pub rest_recovery_per_minute: f32,

    // Stamina
    pub stamina_recovery_per_second: f32,
    /// Multiplier applied to stamina recovery while any warning threshold
    /// is breached. Below 1.0.
    pub weakened_recovery_multiplier: f32,

    // Soft thresholds: performance degrades before damage starts
    pub hunger_warning_threshold: f32,
    pub thirst_warning_threshold: f32,
    pub fatigue_warning_threshold: f32,

    // Collapse: health damage once a stat bottoms out entirely
    pub collapse_damage_enabled: bool,
    pub collapse_damage_per_minute: f32,
}

impl Default for SurvivalConfig {
    fn default() -> Self {
        Self {
            hunger_decay_per_minute: 0.5,
            thirst_decay_per_minute: 0.8,
            fatigue_gain_per_minute: 0.3,
            rest_recovery_per_minute: 5.0,
            stamina_recovery_per_second: 15.0,
            weakened_recovery_multiplier: 0.25,
            hunger_warning_threshold: 20.0,
            thirst_warning_threshold: 20.0,
            fatigue_warning_threshold: 80.0,
            collapse_damage_enabled: true,
            collapse_damage_per_minute: 5.0,
        }
    }
}

impl SurvivalConfig {
    pub fn load() -> Self {
        load_or_default(CONFIG_PATH)
    }
}

/// System to load survival tuning at startup.
pub fn load_survival_config(mut commands: Commands) {
    commands.insert_resource(SurvivalConfig::load());
}
