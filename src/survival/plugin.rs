//! Survival plugin - wires the decay pipeline into the variable-rate phase.

use bevy::prelude::*;

use super::config::{load_survival_config, SurvivalConfig};
use super::systems::update_survival;
use crate::core::in_gameplay;

pub struct SurvivalPlugin;

impl Plugin for SurvivalPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SurvivalConfig>()
            .add_systems(Startup, load_survival_config)
            .add_systems(Update, update_survival.run_if(in_gameplay));
    }
}
