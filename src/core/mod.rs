//! Core game module - session states, events, and fundamental systems.
//!
//! This module provides the foundation that all other game systems build upon.

mod config;
mod events;
mod plugin;
mod states;

pub use config::{load_or_default, read_ron, ConfigError};
pub use events::*;
pub use plugin::CorePlugin;
pub use states::*;
