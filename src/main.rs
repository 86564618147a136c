//! Ashfall - Entry Point
//!
//! A 2D survival platformer: scavenge the surface by day, hold out in the
//! bunker, and keep hunger, thirst, and fatigue at bay.
//!
//! Controls:
//! - A/D or arrows: Move
//! - Space: Jump (hold for height)
//! - Shift: Run
//! - E: Interact (hatches travel, the bunk sleeps)
//! - Escape: Menu / pause
//! - Enter: Start a run from the title screen

use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

fn main() {
    App::new()
        // Bevy default plugins
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Ashfall".to_string(),
                resolution: (1280.0, 720.0).into(),
                ..default()
            }),
            ..default()
        }))

        // Physics, stepped in the fixed-rate phase
        .add_plugins(
            RapierPhysicsPlugin::<NoUserData>::pixels_per_meter(100.0).in_fixed_schedule(),
        )

        // Our game plugin
        .add_plugins(ashfall::AshfallPlugin)

        .run();
}
