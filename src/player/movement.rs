//! Platformer movement: ground probing, jump windows, horizontal
//! acceleration, and gravity shaping.
//!
//! The controller runs in two phases. The variable-rate phase samples input,
//! probes the ground, and ticks the jump windows; the fixed-rate phase
//! integrates horizontal velocity and reshapes gravity for the physics step.

use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

use super::components::{JumpTimers, MotionState, MovementConfig, Player, PlayerInput};
use crate::stats::Vitals;
use crate::survival::{Exertion, RestState};

/// Collision group for surfaces the player can stand on.
pub const GROUND_GROUP: Group = Group::GROUP_1;
/// Collision group for the player body.
pub const PLAYER_GROUP: Group = Group::GROUP_2;

/// Probe for ground in a small disc under the player's feet.
///
/// Only colliders in the ground group count; a missing physics context
/// degrades to "airborne" rather than halting.
pub fn probe_ground(
    rapier_context: Query<&RapierContext>,
    config: Res<MovementConfig>,
    mut players: Query<(Entity, &Transform, &mut MotionState), With<Player>>,
) {
    let Ok((player_entity, transform, mut motion)) = players.get_single_mut() else {
        return;
    };

    let Ok(context) = rapier_context.get_single() else {
        motion.grounded = false;
        return;
    };

    let probe_point =
        transform.translation.truncate() - Vec2::new(0.0, config.ground_probe_offset);
    let probe = Collider::ball(config.ground_probe_radius);
    let filter = QueryFilter::default()
        .exclude_collider(player_entity)
        .groups(CollisionGroups::new(Group::ALL, GROUND_GROUP));

    motion.grounded = context
        .intersection_with_shape(probe_point, 0.0, &probe, filter)
        .is_some();
}

/// Tick the jump windows and fire a buffered jump when both are open.
pub fn handle_jump(
    time: Res<Time>,
    input: Res<PlayerInput>,
    config: Res<MovementConfig>,
    mut players: Query<(&MotionState, &mut JumpTimers, &mut Velocity), With<Player>>,
) {
    let Ok((motion, mut timers, mut velocity)) = players.get_single_mut() else {
        return;
    };

    timers.tick(
        motion.grounded,
        input.jump_pressed,
        time.delta_secs(),
        config.coyote_time,
        config.jump_buffer,
    );

    if timers.try_jump() {
        velocity.linvel.y = config.jump_speed;
    }
}

/// Drive horizontal velocity toward the input target, fixed-rate.
///
/// Running costs stamina; an empty pool drops the player back to a walk.
/// Running or being airborne counts as exertion, which suspends natural
/// stamina recovery in the survival pipeline.
pub fn apply_horizontal_movement(
    time: Res<Time>,
    input: Res<PlayerInput>,
    config: Res<MovementConfig>,
    mut players: Query<
        (&MotionState, &mut Vitals, &mut Exertion, &mut Velocity),
        With<Player>,
    >,
) {
    let dt = time.delta_secs();
    let Ok((motion, mut vitals, mut exertion, mut velocity)) = players.get_single_mut() else {
        return;
    };

    let wants_run = input.run_held && input.axis != 0.0;
    let running =
        wants_run && vitals.consume_stamina(config.run_stamina_cost_per_second * dt);

    let target_speed = input.axis
        * if running {
            config.run_speed
        } else {
            config.walk_speed
        };
    let mut rate = if running {
        config.run_acceleration
    } else {
        config.ground_acceleration
    };
    if !motion.grounded {
        rate *= config.air_control;
    }

    velocity.linvel.x = approach(velocity.linvel.x, target_speed, rate * dt);

    exertion.active = running || !motion.grounded;
}

/// Reshape gravity for the current jump phase, every physics tick.
pub fn shape_gravity(
    input: Res<PlayerInput>,
    config: Res<MovementConfig>,
    mut players: Query<(&Velocity, &mut GravityScale), With<Player>>,
) {
    let Ok((velocity, mut gravity)) = players.get_single_mut() else {
        return;
    };
    gravity.0 = gravity_scale_for(velocity.linvel.y, input.jump_held, &config);
}

/// Pick the gravity scale for a vertical speed and jump-hold state.
///
/// Floaty at the apex, heavy on the way down, and a medium cutoff when the
/// jump is released early so held jumps rise higher than taps.
fn gravity_scale_for(vertical_speed: f32, jump_held: bool, config: &MovementConfig) -> f32 {
    if vertical_speed.abs() < config.apex_threshold {
        config.apex_gravity_scale
    } else if vertical_speed < 0.0 {
        config.fall_gravity_scale
    } else if !jump_held {
        config.release_gravity_scale
    } else {
        config.base_gravity_scale
    }
}

/// Move `current` toward `target` by at most `max_delta`, never overshooting.
fn approach(current: f32, target: f32, max_delta: f32) -> f32 {
    if (target - current).abs() <= max_delta {
        target
    } else {
        current + (target - current).signum() * max_delta
    }
}

/// Spawn the player with physics, vitals, and controller state.
pub fn spawn_player(commands: &mut Commands, position: Vec2) -> Entity {
    commands
        .spawn((
            Player,
            Vitals::default(),
            Exertion::default(),
            RestState::default(),
            MotionState::default(),
            JumpTimers::default(),
            Sprite {
                color: Color::srgb(0.85, 0.78, 0.62),
                custom_size: Some(Vec2::new(24.0, 60.0)),
                ..default()
            },
            Transform::from_translation(position.extend(0.0)),
            // Physics: a dynamic capsule that never tips over
            // (nested tuple: a flat 16-element tuple exceeds Bevy's Bundle
            // impl limit of 15)
            (
                RigidBody::Dynamic,
                Velocity::zero(),
                GravityScale(1.0),
                LockedAxes::ROTATION_LOCKED,
                Collider::capsule_y(18.0, 12.0),
                Friction::coefficient(0.0),
                CollisionGroups::new(PLAYER_GROUP, Group::ALL),
                Sleeping::disabled(),
            ),
        ))
        .id()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn approach_is_rate_limited_and_never_overshoots() {
        assert_eq!(approach(0.0, 100.0, 30.0), 30.0);
        assert_eq!(approach(90.0, 100.0, 30.0), 100.0);
        assert_eq!(approach(100.0, 100.0, 30.0), 100.0);
        assert_eq!(approach(0.0, -100.0, 30.0), -30.0);
        assert_eq!(approach(-90.0, -100.0, 30.0), -100.0);
    }

    #[test]
    fn gravity_regimes() {
        let config = MovementConfig {
            apex_threshold: 40.0,
            base_gravity_scale: 1.0,
            apex_gravity_scale: 0.5,
            fall_gravity_scale: 2.0,
            release_gravity_scale: 1.5,
            ..MovementConfig::default()
        };

        // Near-zero vertical speed is the apex, held or not.
        assert_eq!(gravity_scale_for(10.0, true, &config), 0.5);
        assert_eq!(gravity_scale_for(-10.0, false, &config), 0.5);
        // Falling is heaviest.
        assert_eq!(gravity_scale_for(-200.0, true, &config), 2.0);
        // Rising with the button released gets the short-hop cutoff.
        assert_eq!(gravity_scale_for(300.0, false, &config), 1.5);
        // Rising with the button held keeps base gravity.
        assert_eq!(gravity_scale_for(300.0, true, &config), 1.0);
    }
}
