//! Stats module - the clamped vital-statistics store and its change events.

mod plugin;
mod vitals;

pub use plugin::StatsPlugin;
pub use vitals::{Stat, StatChange, StatChangedEvent, Vitals, STAT_TOLERANCE};
