//! Player module - input, platformer movement, and the pause menu toggle.

mod components;
mod input;
mod movement;
mod plugin;

pub use components::{JumpTimers, MenuState, MotionState, MovementConfig, Player, PlayerInput};
pub use movement::{spawn_player, GROUND_GROUP, PLAYER_GROUP};
pub use plugin::PlayerPlugin;
