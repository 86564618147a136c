//! Player-related components and tuning.

use bevy::prelude::*;
use serde::Deserialize;

use crate::core::load_or_default;

const CONFIG_PATH: &str = "assets/config/player.ron";

/// Marker component for the player entity.
#[derive(Component)]
pub struct Player;

/// Movement and jump tuning, loaded from `assets/config/player.ron`.
///
/// Distances are in world units (pixels at the default physics scale),
/// times in seconds.
#[derive(Resource, Clone, Deserialize)]
pub struct MovementConfig {
    /// Top speed while walking
    pub walk_speed: f32,
    /// Top speed while running
    pub run_speed: f32,
    /// How fast the walk speed target is approached
    pub ground_acceleration: f32,
    /// How fast the run speed target is approached
    pub run_acceleration: f32,
    /// Acceleration multiplier while airborne (reduced air control)
    pub air_control: f32,
    /// Upward velocity applied on jump
    pub jump_speed: f32,
    /// Grace period after leaving the ground where a jump is still honored
    pub coyote_time: f32,
    /// How long a jump press is remembered before landing
    pub jump_buffer: f32,
    /// Stamina drained per second of running
    pub run_stamina_cost_per_second: f32,
    /// Gravity scale while rising with the jump held
    pub base_gravity_scale: f32,
    /// Gravity scale near the top of the arc (floaty apex)
    pub apex_gravity_scale: f32,
    /// Gravity scale while falling (heavy descent)
    pub fall_gravity_scale: f32,
    /// Gravity scale while rising after the jump was released (short hop)
    pub release_gravity_scale: f32,
    /// Vertical speeds below this count as the apex
    pub apex_threshold: f32,
    /// How far below the player origin the ground probe sits
    pub ground_probe_offset: f32,
    /// Radius of the ground probe
    pub ground_probe_radius: f32,
}

impl Default for MovementConfig {
    fn default() -> Self {
        Self {
            walk_speed: 220.0,
            run_speed: 380.0,
            ground_acceleration: 1800.0,
            run_acceleration: 2400.0,
            air_control: 0.35,
            jump_speed: 620.0,
            coyote_time: 0.12,
            jump_buffer: 0.1,
            run_stamina_cost_per_second: 8.0,
            base_gravity_scale: 1.0,
            apex_gravity_scale: 0.55,
            fall_gravity_scale: 1.9,
            release_gravity_scale: 1.5,
            apex_threshold: 40.0,
            ground_probe_offset: 34.0,
            ground_probe_radius: 10.0,
        }
    }
}

impl MovementConfig {
    pub fn load() -> Self {
        load_or_default(CONFIG_PATH)
    }
}

/// System to load movement tuning at startup.
pub fn load_movement_config(mut commands: Commands) {
    commands.insert_resource(MovementConfig::load());
}

/// The keyboard state sampled once per variable-rate tick.
///
/// Discrete presses are edges (true only on the frame they happened);
/// the rest are held states.
#[derive(Resource, Debug, Default, Clone, Copy)]
pub struct PlayerInput {
    /// Horizontal movement axis, -1.0 to 1.0
    pub axis: f32,
    pub run_held: bool,
    pub jump_held: bool,
    pub jump_pressed: bool,
    pub interact_pressed: bool,
    pub grab_pressed: bool,
    pub menu_pressed: bool,
}

/// The two jump grace windows, counted down in seconds.
///
/// A jump fires only while both are open, and firing closes both so a
/// single press/landing pair can't trigger twice.
#[derive(Component, Debug, Default, Clone, Copy)]
pub struct JumpTimers {
    coyote_remaining: f32,
    buffer_remaining: f32,
}

impl JumpTimers {
    /// Advance both windows for one tick.
    ///
    /// Standing on the ground holds the coyote window open; a jump press
    /// opens the buffer window. Everything else decays toward zero.
    pub fn tick(
        &mut self,
        grounded: bool,
        jump_pressed: bool,
        dt: f32,
        coyote_time: f32,
        buffer_time: f32,
    ) {
        if grounded {
            self.coyote_remaining = coyote_time;
        } else {
            self.coyote_remaining = (self.coyote_remaining - dt).max(0.0);
        }
        if jump_pressed {
            self.buffer_remaining = buffer_time;
        } else {
            self.buffer_remaining = (self.buffer_remaining - dt).max(0.0);
        }
    }

    /// Fire the jump if both windows are open, consuming them.
    pub fn try_jump(&mut self) -> bool {
        if self.coyote_remaining > 0.0 && self.buffer_remaining > 0.0 {
            self.coyote_remaining = 0.0;
            self.buffer_remaining = 0.0;
            true
        } else {
            false
        }
    }
}

/// Tracks grounded state for the current tick.
#[derive(Component, Debug, Default, Clone, Copy)]
pub struct MotionState {
    pub grounded: bool,
}

/// Whether the pause menu is open.
#[derive(Resource, Debug, Default)]
pub struct MenuState {
    pub open: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expired_coyote_window_rejects_the_jump() {
        let mut timers = JumpTimers::default();
        // On the ground, then walk off the ledge.
        timers.tick(true, false, 0.016, 0.1, 0.1);
        // Airborne for 0.15s: longer than the 0.1s window.
        timers.tick(false, false, 0.15, 0.1, 0.1);
        // The press comes too late.
        timers.tick(false, true, 0.016, 0.1, 0.1);

        assert!(!timers.try_jump());
    }

    #[test]
    fn buffered_press_fires_on_landing() {
        let mut timers = JumpTimers::default();
        // Press while still airborne.
        timers.tick(false, true, 0.016, 0.1, 0.1);
        // Land 0.05s later: inside the buffer window.
        timers.tick(true, false, 0.05, 0.1, 0.1);

        assert!(timers.try_jump());
    }

    #[test]
    fn jumping_consumes_both_windows() {
        let mut timers = JumpTimers::default();
        timers.tick(true, true, 0.016, 0.1, 0.1);

        assert!(timers.try_jump());
        // Same press, same tick: both windows were spent.
        assert!(!timers.try_jump());
    }

    #[test]
    fn grounded_press_jumps_immediately() {
        let mut timers = JumpTimers::default();
        timers.tick(true, true, 0.016, 0.1, 0.1);
        assert!(timers.try_jump());
    }

    #[test]
    fn coyote_jump_just_after_leaving_the_ledge() {
        let mut timers = JumpTimers::default();
        timers.tick(true, false, 0.016, 0.1, 0.1);
        // Airborne, but still inside the grace window when the press lands.
        timers.tick(false, true, 0.05, 0.1, 0.1);
        assert!(timers.try_jump());
    }

    #[test]
    fn shipped_config_file_parses() {
        let contents = include_str!("../../assets/config/player.ron");
        let config: MovementConfig = ron::from_str(contents).expect("player.ron should parse");
        assert!(config.run_speed > config.walk_speed);
        assert!(config.air_control <= 1.0);
    }
}
