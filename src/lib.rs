//! Ashfall - gameplay core for a 2D survival platformer in Bevy.
//!
//! A run loops between a bunker and the ash-covered surface while hunger,
//! thirst, and fatigue wear the survivor down.
//!
//! # Architecture
//!
//! The game is organized into plugins, each handling a specific aspect:
//!
//! - **Core**: Session states, global events, run flow, config loading
//! - **Stats**: The clamped vital-statistics store and its change events
//! - **Survival**: Per-tick stat decay, stamina recovery, collapse damage
//! - **Player**: Input sampling, platformer movement, gravity shaping,
//!   the pause-menu toggle
//! - **World**: Scene colliders, interactables, camera
//!
//! The tick is two-phase: input sampling, jump windows, and stat decay run
//! at the variable frame rate; velocity integration and gravity shaping run
//! in the fixed physics step.

pub mod core;
pub mod player;
pub mod stats;
pub mod survival;
pub mod world;

use bevy::prelude::*;

/// Main game plugin that adds all sub-plugins.
pub struct AshfallPlugin;

impl Plugin for AshfallPlugin {
    fn build(&self, app: &mut App) {
        app
            // Core systems (must be first)
            .add_plugins(core::CorePlugin)

            // Stat store
            .add_plugins(stats::StatsPlugin)

            // Survival decay pipeline
            .add_plugins(survival::SurvivalPlugin)

            // Player controller
            .add_plugins(player::PlayerPlugin)

            // Scenes and interactables
            .add_plugins(world::WorldPlugin);
    }
}
