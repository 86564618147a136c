//! Survival module - stat decay, stamina recovery, and collapse damage.

mod config;
mod plugin;
mod systems;

pub use config::SurvivalConfig;
pub use plugin::SurvivalPlugin;
pub use systems::{update_survival, Exertion, RestState};
