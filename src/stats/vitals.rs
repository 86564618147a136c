//! The player's vital statistics: health, hunger, thirst, fatigue, stamina.
//!
//! All writes go through setters that clamp into range first, so the stored
//! values are always valid no matter what callers pass in. Setters return a
//! [`StatChange`] record when the stored value actually moved, which the
//! mutating system forwards as a [`StatChangedEvent`]; callers that don't
//! care can ignore the return value.

use bevy::prelude::*;

/// Writes closer to the current value than this are treated as no-ops.
pub const STAT_TOLERANCE: f32 = 1e-4;

/// Which vital a [`StatChange`] refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stat {
    Health,
    Hunger,
    Thirst,
    Fatigue,
    Stamina,
}

/// Record of a single stat mutation.
#[derive(Debug, Clone, Copy)]
pub struct StatChange {
    pub stat: Stat,
    pub previous: f32,
    pub current: f32,
}

impl StatChange {
    /// True when this change dropped health from above zero to zero.
    pub fn is_lethal(&self) -> bool {
        self.stat == Stat::Health && self.previous > 0.0 && self.current <= 0.0
    }
}

/// Sent whenever a vital actually changes value.
#[derive(Event, Debug, Clone, Copy)]
pub struct StatChangedEvent(pub StatChange);

/// The stat store for a survivor.
///
/// Hunger and thirst run from 0 (critical) to 100 (satisfied); fatigue runs
/// the other way, 0 (rested) to 100 (exhausted). Fields are private so every
/// write is forced through the clamping setters.
#[derive(Component, Debug, Clone)]
pub struct Vitals {
    hp: f32,
    max_hp: f32,
    hunger: f32,
    thirst: f32,
    fatigue: f32,
    max_carry_weight: f32,
    stamina: f32,
    max_stamina: f32,
}

impl Default for Vitals {
    fn default() -> Self {
        Self {
            hp: 100.0,
            max_hp: 100.0,
            hunger: 100.0,
            thirst: 100.0,
            fatigue: 0.0,
            max_carry_weight: 50.0,
            stamina: 100.0,
            max_stamina: 100.0,
        }
    }
}

impl Vitals {
    pub fn hp(&self) -> f32 {
        self.hp
    }

    pub fn max_hp(&self) -> f32 {
        self.max_hp
    }

    pub fn hunger(&self) -> f32 {
        self.hunger
    }

    pub fn thirst(&self) -> f32 {
        self.thirst
    }

    pub fn fatigue(&self) -> f32 {
        self.fatigue
    }

    pub fn stamina(&self) -> f32 {
        self.stamina
    }

    pub fn max_stamina(&self) -> f32 {
        self.max_stamina
    }

    pub fn max_carry_weight(&self) -> f32 {
        self.max_carry_weight
    }

    pub fn is_dead(&self) -> bool {
        self.hp <= 0.0
    }

    /// Write `clamped` into `slot`, reporting the move if it is outside
    /// tolerance of the previous value.
    fn write(stat: Stat, slot: &mut f32, clamped: f32) -> Option<StatChange> {
        let previous = *slot;
        if (clamped - previous).abs() <= STAT_TOLERANCE {
            return None;
        }
        *slot = clamped;
        Some(StatChange {
            stat,
            previous,
            current: clamped,
        })
    }

    pub fn set_hp(&mut self, value: f32) -> Option<StatChange> {
        let clamped = value.clamp(0.0, self.max_hp);
        Self::write(Stat::Health, &mut self.hp, clamped)
    }

    pub fn set_hunger(&mut self, value: f32) -> Option<StatChange> {
        let clamped = value.clamp(0.0, 100.0);
        Self::write(Stat::Hunger, &mut self.hunger, clamped)
    }

    pub fn set_thirst(&mut self, value: f32) -> Option<StatChange> {
        let clamped = value.clamp(0.0, 100.0);
        Self::write(Stat::Thirst, &mut self.thirst, clamped)
    }

    pub fn set_fatigue(&mut self, value: f32) -> Option<StatChange> {
        let clamped = value.clamp(0.0, 100.0);
        Self::write(Stat::Fatigue, &mut self.fatigue, clamped)
    }

    pub fn set_stamina(&mut self, value: f32) -> Option<StatChange> {
        let clamped = value.clamp(0.0, self.max_stamina);
        Self::write(Stat::Stamina, &mut self.stamina, clamped)
    }

    pub fn add_hunger(&mut self, delta: f32) -> Option<StatChange> {
        if delta.abs() <= STAT_TOLERANCE {
            return None;
        }
        self.set_hunger(self.hunger + delta)
    }

    pub fn add_thirst(&mut self, delta: f32) -> Option<StatChange> {
        if delta.abs() <= STAT_TOLERANCE {
            return None;
        }
        self.set_thirst(self.thirst + delta)
    }

    pub fn add_fatigue(&mut self, delta: f32) -> Option<StatChange> {
        if delta.abs() <= STAT_TOLERANCE {
            return None;
        }
        self.set_fatigue(self.fatigue + delta)
    }

    /// Reduce health. The returned record's [`StatChange::is_lethal`] is true
    /// on the hit that drops health to zero.
    pub fn apply_damage(&mut self, amount: f32) -> Option<StatChange> {
        if amount <= 0.0 {
            return None;
        }
        self.set_hp(self.hp - amount)
    }

    pub fn heal(&mut self, amount: f32) -> Option<StatChange> {
        if amount <= 0.0 {
            return None;
        }
        self.set_hp(self.hp + amount)
    }

    /// Spend stamina on an action. Returns false and leaves the pool
    /// untouched when there isn't enough; callers must check.
    pub fn consume_stamina(&mut self, amount: f32) -> bool {
        if amount <= 0.0 {
            return true;
        }
        if self.stamina < amount {
            return false;
        }
        self.stamina = (self.stamina - amount).max(0.0);
        true
    }

    pub fn recover_stamina(&mut self, amount: f32) -> Option<StatChange> {
        if amount <= 0.0 {
            return None;
        }
        self.set_stamina(self.stamina + amount)
    }

    /// Resize the stamina pool. With `clamp_current`, a shrinking cap pulls
    /// the current pool down immediately; without it, the overflow persists
    /// until the next stamina write.
    pub fn set_max_stamina(&mut self, value: f32, clamp_current: bool) -> Option<StatChange> {
        self.max_stamina = value.max(0.0);
        if clamp_current && self.stamina > self.max_stamina {
            return self.set_stamina(self.stamina);
        }
        None
    }

    /// Resize the health pool, re-clamping current health into it.
    pub fn set_max_hp(&mut self, value: f32) -> Option<StatChange> {
        self.max_hp = value.max(0.0);
        if self.hp > self.max_hp {
            return self.set_hp(self.hp);
        }
        None
    }

    /// No change notification; carry capacity is polled, not observed.
    pub fn set_max_carry_weight(&mut self, value: f32) {
        self.max_carry_weight = value.clamp(0.0, 100.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn setters_clamp_extreme_values() {
        let mut vitals = Vitals::default();

        vitals.set_hunger(f32::NEG_INFINITY);
        assert_eq!(vitals.hunger(), 0.0);
        vitals.set_hunger(1e12);
        assert_eq!(vitals.hunger(), 100.0);

        vitals.set_hp(-500.0);
        assert_eq!(vitals.hp(), 0.0);
        vitals.set_hp(f32::INFINITY);
        assert_eq!(vitals.hp(), vitals.max_hp());

        vitals.set_fatigue(250.0);
        assert_eq!(vitals.fatigue(), 100.0);

        vitals.set_max_carry_weight(-3.0);
        assert_eq!(vitals.max_carry_weight(), 0.0);
        vitals.set_max_carry_weight(400.0);
        assert_eq!(vitals.max_carry_weight(), 100.0);
    }

    #[test]
    fn setting_the_same_value_reports_no_change() {
        let mut vitals = Vitals::default();

        assert!(vitals.set_thirst(50.0).is_some());
        assert!(vitals.set_thirst(50.0).is_none());
        // Within tolerance counts as the same value.
        assert!(vitals.set_thirst(50.00001).is_none());
        assert!(vitals.set_thirst(49.0).is_some());
    }

    #[test]
    fn change_records_carry_old_and_new_values() {
        let mut vitals = Vitals::default();

        let change = vitals.set_hunger(40.0).unwrap();
        assert_eq!(change.stat, Stat::Hunger);
        assert_eq!(change.previous, 100.0);
        assert_eq!(change.current, 40.0);
    }

    #[test]
    fn death_fires_once_per_transition() {
        let mut vitals = Vitals::default();
        vitals.set_hp(10.0);

        let change = vitals.apply_damage(15.0).unwrap();
        assert!(change.is_lethal());
        assert!(vitals.is_dead());

        // Already dead: no further change, no further death.
        assert!(vitals.apply_damage(5.0).is_none());

        // Healing re-arms the edge trigger.
        let healed = vitals.heal(30.0).unwrap();
        assert!(!healed.is_lethal());
        let change = vitals.apply_damage(60.0).unwrap();
        assert!(change.is_lethal());
    }

    #[test]
    fn damage_and_heal_ignore_non_positive_amounts() {
        let mut vitals = Vitals::default();
        assert!(vitals.apply_damage(0.0).is_none());
        assert!(vitals.apply_damage(-10.0).is_none());
        assert!(vitals.heal(-10.0).is_none());
        assert_eq!(vitals.hp(), 100.0);
    }

    #[test]
    fn consume_stamina_fails_without_enough_in_the_pool() {
        let mut vitals = Vitals::default();
        vitals.set_stamina(10.0);

        assert!(!vitals.consume_stamina(20.0));
        assert_eq!(vitals.stamina(), 10.0);

        assert!(vitals.consume_stamina(4.0));
        assert_eq!(vitals.stamina(), 6.0);

        // Spending exactly the remainder succeeds.
        assert!(vitals.consume_stamina(6.0));
        assert_eq!(vitals.stamina(), 0.0);
    }

    #[test]
    fn consume_stamina_treats_non_positive_amounts_as_success() {
        let mut vitals = Vitals::default();
        vitals.set_stamina(5.0);
        assert!(vitals.consume_stamina(0.0));
        assert!(vitals.consume_stamina(-2.0));
        assert_eq!(vitals.stamina(), 5.0);
    }

    #[test]
    fn recover_stamina_clamps_to_the_cap() {
        let mut vitals = Vitals::default();
        vitals.set_stamina(90.0);

        let change = vitals.recover_stamina(25.0).unwrap();
        assert_eq!(change.current, 100.0);
        assert!(vitals.recover_stamina(5.0).is_none());
    }

    #[test]
    fn shrinking_max_stamina_can_pull_the_pool_down() {
        let mut vitals = Vitals::default();
        vitals.set_stamina(60.0);

        let change = vitals.set_max_stamina(40.0, true).unwrap();
        assert_eq!(change.previous, 60.0);
        assert_eq!(change.current, 40.0);
        assert_eq!(vitals.stamina(), 40.0);
    }

    #[test]
    fn shrinking_max_stamina_without_clamping_leaves_the_pool() {
        let mut vitals = Vitals::default();
        vitals.set_stamina(60.0);

        assert!(vitals.set_max_stamina(40.0, false).is_none());
        assert_eq!(vitals.stamina(), 60.0);
        assert_eq!(vitals.max_stamina(), 40.0);
    }

    #[test]
    fn max_stamina_floors_at_zero() {
        let mut vitals = Vitals::default();
        vitals.set_max_stamina(-10.0, true);
        assert_eq!(vitals.max_stamina(), 0.0);
        assert_eq!(vitals.stamina(), 0.0);
    }
}
