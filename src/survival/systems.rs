//! The per-tick survival pipeline: hunger/thirst/fatigue decay, stamina
//! recovery, and collapse damage once a stat bottoms out.
//!
//! Two threshold tiers are deliberate: the warning thresholds only slow
//! stamina recovery, while collapse damage waits for an absolute empty/full
//! stat. The player gets weak before the game starts killing them.

use bevy::prelude::*;

use super::config::SurvivalConfig;
use crate::core::DeathEvent;
use crate::player::Player;
use crate::stats::{StatChange, StatChangedEvent, Vitals};

/// Raised by movement or action systems while the player is working hard.
/// Natural stamina recovery is suspended while this is active; whatever
/// raised the flag owns the matching stamina drain.
#[derive(Component, Debug, Default)]
pub struct Exertion {
    pub active: bool,
}

/// Rest capability consulted for fatigue recovery.
///
/// Nothing in this crate toggles it; a camp or bed system would.
#[derive(Component, Debug, Default)]
pub struct RestState {
    resting: bool,
}

impl RestState {
    pub fn is_resting(&self) -> bool {
        self.resting
    }

    pub fn set_resting(&mut self, resting: bool) {
        self.resting = resting;
    }
}

/// Advance one survivor's vitals by `dt_seconds` of play time.
///
/// Returns the changes that actually landed, in pipeline order.
pub(crate) fn tick_survival(
    vitals: &mut Vitals,
    config: &SurvivalConfig,
    exerting: bool,
    resting: bool,
    dt_seconds: f32,
) -> Vec<StatChange> {
    let minutes = dt_seconds / 60.0;
    let mut changes = Vec::new();

    if config.hunger_decay_per_minute > 0.0 {
        changes.extend(vitals.add_hunger(-config.hunger_decay_per_minute * minutes));
    }
    if config.thirst_decay_per_minute > 0.0 {
        changes.extend(vitals.add_thirst(-config.thirst_decay_per_minute * minutes));
    }

    if resting {
        if config.rest_recovery_per_minute > 0.0 {
            changes.extend(vitals.add_fatigue(-config.rest_recovery_per_minute * minutes));
        }
    } else if config.fatigue_gain_per_minute > 0.0 {
        changes.extend(vitals.add_fatigue(config.fatigue_gain_per_minute * minutes));
    }

    if !exerting && config.stamina_recovery_per_second > 0.0 {
        let weakened = vitals.hunger() <= config.hunger_warning_threshold
            || vitals.thirst() <= config.thirst_warning_threshold
            || vitals.fatigue() >= config.fatigue_warning_threshold;
        let multiplier = if weakened {
            config.weakened_recovery_multiplier
        } else {
            1.0
        };
        changes.extend(
            vitals.recover_stamina(config.stamina_recovery_per_second * multiplier * dt_seconds),
        );
    }

    if config.collapse_damage_enabled && !vitals.is_dead() {
        let collapsing =
            vitals.hunger() <= 0.0 || vitals.thirst() <= 0.0 || vitals.fatigue() >= 100.0;
        if collapsing {
            changes.extend(vitals.apply_damage(config.collapse_damage_per_minute * minutes));
        }
    }

    changes
}

/// Run the survival pipeline for the player each variable-rate tick.
///
/// Gated to the gameplay states, so a paused session decays nothing.
pub fn update_survival(
    time: Res<Time>,
    config: Res<SurvivalConfig>,
    mut survivors: Query<(Entity, &mut Vitals, &Exertion, &RestState), With<Player>>,
    mut stat_events: EventWriter<StatChangedEvent>,
    mut death_events: EventWriter<DeathEvent>,
) {
    let dt = time.delta_secs();
    for (entity, mut vitals, exertion, rest) in survivors.iter_mut() {
        let changes = tick_survival(
            &mut vitals,
            &config,
            exertion.active,
            rest.is_resting(),
            dt,
        );
        for change in changes {
            if change.is_lethal() {
                death_events.send(DeathEvent { entity });
            }
            stat_events.send(StatChangedEvent(change));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> SurvivalConfig {
        SurvivalConfig::default()
    }

    #[test]
    fn hunger_decays_by_rate_times_minutes() {
        let mut vitals = Vitals::default();
        let mut cfg = config();
        cfg.hunger_decay_per_minute = 5.0;

        tick_survival(&mut vitals, &cfg, false, false, 60.0);

        assert!((vitals.hunger() - 95.0).abs() < 1e-3);
    }

    #[test]
    fn zero_rates_disable_decay() {
        let mut vitals = Vitals::default();
        let mut cfg = config();
        cfg.hunger_decay_per_minute = 0.0;
        cfg.thirst_decay_per_minute = 0.0;
        cfg.fatigue_gain_per_minute = 0.0;

        tick_survival(&mut vitals, &cfg, false, false, 600.0);

        assert_eq!(vitals.hunger(), 100.0);
        assert_eq!(vitals.thirst(), 100.0);
        assert_eq!(vitals.fatigue(), 0.0);
    }

    #[test]
    fn stamina_recovers_at_full_rate_when_nominal() {
        let mut vitals = Vitals::default();
        vitals.set_stamina(50.0);
        let mut cfg = config();
        cfg.stamina_recovery_per_second = 15.0;
        // Keep the decay out of the warning bands for this tick.
        cfg.hunger_decay_per_minute = 0.0;
        cfg.thirst_decay_per_minute = 0.0;
        cfg.fatigue_gain_per_minute = 0.0;

        tick_survival(&mut vitals, &cfg, false, false, 1.0);

        assert!((vitals.stamina() - 65.0).abs() < 1e-3);
    }

    #[test]
    fn exertion_suspends_stamina_recovery() {
        let mut vitals = Vitals::default();
        vitals.set_stamina(50.0);

        tick_survival(&mut vitals, &config(), true, false, 1.0);

        assert_eq!(vitals.stamina(), 50.0);
    }

    #[test]
    fn any_warning_threshold_slows_recovery() {
        let mut cfg = config();
        cfg.stamina_recovery_per_second = 10.0;
        cfg.weakened_recovery_multiplier = 0.25;
        cfg.hunger_decay_per_minute = 0.0;
        cfg.thirst_decay_per_minute = 0.0;
        cfg.fatigue_gain_per_minute = 0.0;

        // Hungry alone is enough.
        let mut vitals = Vitals::default();
        vitals.set_hunger(10.0);
        vitals.set_stamina(0.0);
        tick_survival(&mut vitals, &cfg, false, false, 1.0);
        assert!((vitals.stamina() - 2.5).abs() < 1e-3);

        // Exhausted alone is enough.
        let mut vitals = Vitals::default();
        vitals.set_fatigue(90.0);
        vitals.set_stamina(0.0);
        tick_survival(&mut vitals, &cfg, false, false, 1.0);
        assert!((vitals.stamina() - 2.5).abs() < 1e-3);
    }

    #[test]
    fn bottomed_out_hunger_deals_collapse_damage() {
        let mut vitals = Vitals::default();
        vitals.set_hunger(0.0);
        vitals.set_thirst(50.0);
        vitals.set_fatigue(10.0);
        let mut cfg = config();
        cfg.collapse_damage_per_minute = 5.0;
        cfg.hunger_decay_per_minute = 0.0;
        cfg.thirst_decay_per_minute = 0.0;
        cfg.fatigue_gain_per_minute = 0.0;

        tick_survival(&mut vitals, &cfg, false, false, 60.0);

        assert!((vitals.hp() - 95.0).abs() < 1e-3);
    }

    #[test]
    fn warning_levels_alone_deal_no_damage() {
        let mut vitals = Vitals::default();
        // Inside the warning band but not bottomed out.
        vitals.set_hunger(5.0);
        vitals.set_thirst(5.0);
        vitals.set_fatigue(95.0);
        let mut cfg = config();
        cfg.hunger_decay_per_minute = 0.0;
        cfg.thirst_decay_per_minute = 0.0;
        cfg.fatigue_gain_per_minute = 0.0;

        tick_survival(&mut vitals, &cfg, false, false, 60.0);

        assert_eq!(vitals.hp(), 100.0);
    }

    #[test]
    fn collapse_stops_at_death() {
        let mut vitals = Vitals::default();
        vitals.set_hp(3.0);
        vitals.set_hunger(0.0);
        let mut cfg = config();
        cfg.collapse_damage_per_minute = 5.0;
        cfg.hunger_decay_per_minute = 0.0;
        cfg.thirst_decay_per_minute = 0.0;
        cfg.fatigue_gain_per_minute = 0.0;

        let changes = tick_survival(&mut vitals, &cfg, false, false, 60.0);
        assert!(changes.iter().any(StatChange::is_lethal));
        assert!(vitals.is_dead());

        // Dead survivors take no further collapse damage.
        let changes = tick_survival(&mut vitals, &cfg, false, false, 60.0);
        assert!(!changes.iter().any(|c| c.stat == crate::stats::Stat::Health));
    }

    #[test]
    fn resting_recovers_fatigue() {
        let mut vitals = Vitals::default();
        vitals.set_fatigue(50.0);
        let mut cfg = config();
        cfg.rest_recovery_per_minute = 10.0;

        tick_survival(&mut vitals, &cfg, false, true, 60.0);

        assert!((vitals.fatigue() - 40.0).abs() < 1e-3);
    }
}
