//! Stats plugin - registers the change event and the missing-store check.

use bevy::prelude::*;

use super::vitals::{StatChangedEvent, Vitals};
use crate::core::GameSession;

pub struct StatsPlugin;

impl Plugin for StatsPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<StatChangedEvent>()
            .add_systems(Update, warn_missing_vitals);
    }
}

/// One-shot diagnostic: gameplay with no stat store means the survival
/// simulation is silently inert, which is a wiring bug worth surfacing.
fn warn_missing_vitals(
    mut checked: Local<bool>,
    state: Res<State<GameSession>>,
    stores: Query<(), With<Vitals>>,
) {
    if *checked || !state.get().is_gameplay() {
        return;
    }
    *checked = true;
    if stores.is_empty() {
        error!("No Vitals store present; survival simulation will be inert");
    }
}
