//! World module - scene scaffolding and interactables.

mod plugin;
mod spawning;

pub use plugin::WorldPlugin;
pub use spawning::{Bunk, SceneTag, TravelHatch, INTERACT_RANGE};
