//! Player plugin - input sampling, movement, and menu toggling.

use bevy::prelude::*;

use super::components::{load_movement_config, MenuState, MovementConfig, PlayerInput};
use super::input::{emit_interaction_events, sample_input, toggle_menu};
use super::movement::{apply_horizontal_movement, handle_jump, probe_ground, shape_gravity};
use crate::core::{in_gameplay, GameSession};

pub struct PlayerPlugin;

impl Plugin for PlayerPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PlayerInput>()
            .init_resource::<MenuState>()
            .init_resource::<MovementConfig>()
            .add_systems(Startup, load_movement_config)
            // Variable-rate phase: sampling, menu, jump windows.
            // The sampler also runs while paused so the menu key can close
            // the menu again.
            .add_systems(
                Update,
                (sample_input, toggle_menu)
                    .chain()
                    .run_if(in_gameplay.or(in_state(GameSession::Paused))),
            )
            .add_systems(
                Update,
                ((probe_ground, handle_jump).chain(), emit_interaction_events)
                    .after(sample_input)
                    .run_if(in_gameplay),
            )
            // Fixed-rate phase: velocity integration and gravity shaping.
            .add_systems(
                FixedUpdate,
                (apply_horizontal_movement, shape_gravity).run_if(in_gameplay),
            );
    }
}
