//! World plugin - scene lifecycle and interactable handling.

use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

use super::spawning::{
    build_bunker, build_surface, Bunk, SceneTag, TravelHatch, BUNKER_ENTRY, INTERACT_RANGE,
    SURFACE_ENTRY,
};
use crate::core::{in_gameplay, AdvanceDayEvent, GameSession, InteractEvent};
use crate::player::{spawn_player, MenuState, Player};

/// World plugin - builds scenes on state entry and tears the run down on
/// exit. The player entity persists across Bunker/Ground travel so the
/// vitals carry over; it is only despawned with the run itself.
pub struct WorldPlugin;

impl Plugin for WorldPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_camera)
            .add_systems(OnEnter(GameSession::Bunker), enter_bunker)
            .add_systems(OnEnter(GameSession::Ground), enter_surface)
            .add_systems(OnEnter(GameSession::Title), cleanup_run)
            .add_systems(OnEnter(GameSession::Ending), cleanup_run)
            .add_systems(Update, use_interactables.run_if(in_gameplay));
    }
}

fn spawn_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}

fn enter_bunker(
    commands: Commands,
    scenes: Query<(Entity, &SceneTag)>,
    players: Query<(&mut Transform, &mut Velocity), With<Player>>,
) {
    switch_scene(commands, scenes, players, GameSession::Bunker, BUNKER_ENTRY, build_bunker);
}

fn enter_surface(
    commands: Commands,
    scenes: Query<(Entity, &SceneTag)>,
    players: Query<(&mut Transform, &mut Velocity), With<Player>>,
) {
    switch_scene(commands, scenes, players, GameSession::Ground, SURFACE_ENTRY, build_surface);
}

/// Swap the static scenery over to `scene`.
///
/// Re-entering the scene that is already built (closing the menu) is a
/// no-op so the world doesn't reset under the player.
fn switch_scene(
    mut commands: Commands,
    scenes: Query<(Entity, &SceneTag)>,
    mut players: Query<(&mut Transform, &mut Velocity), With<Player>>,
    scene: GameSession,
    entry: Vec2,
    build: fn(&mut Commands),
) {
    let already_built = scenes.iter().any(|(_, tag)| tag.0 == scene);
    if already_built {
        return;
    }

    for (entity, tag) in scenes.iter() {
        if tag.0 != scene {
            commands.entity(entity).despawn_recursive();
        }
    }
    build(&mut commands);

    if let Ok((mut transform, mut velocity)) = players.get_single_mut() {
        transform.translation = entry.extend(0.0);
        *velocity = Velocity::zero();
    } else {
        spawn_player(&mut commands, entry);
    }
}

/// Tear down the scenery and the player when the run ends or restarts.
fn cleanup_run(
    mut commands: Commands,
    mut menu: ResMut<MenuState>,
    scenes: Query<Entity, With<SceneTag>>,
    players: Query<Entity, With<Player>>,
) {
    for entity in scenes.iter().chain(players.iter()) {
        commands.entity(entity).despawn_recursive();
    }
    menu.open = false;
}

/// Resolve interact presses against nearby interactables.
///
/// Hatches travel between the bunker and the surface; the bunk sleeps the
/// night away and advances the day.
fn use_interactables(
    mut interactions: EventReader<InteractEvent>,
    players: Query<&Transform, With<Player>>,
    hatches: Query<(&TravelHatch, &Transform)>,
    bunks: Query<&Transform, With<Bunk>>,
    mut next_state: ResMut<NextState<GameSession>>,
    mut advance_day: EventWriter<AdvanceDayEvent>,
) {
    let Ok(player_transform) = players.get_single() else {
        return;
    };
    let player_pos = player_transform.translation.truncate();

    for _ in interactions.read() {
        for (hatch, transform) in hatches.iter() {
            if player_pos.distance(transform.translation.truncate()) <= INTERACT_RANGE {
                next_state.set(hatch.destination);
                return;
            }
        }
        for transform in bunks.iter() {
            if player_pos.distance(transform.translation.truncate()) <= INTERACT_RANGE {
                advance_day.send(AdvanceDayEvent);
                return;
            }
        }
    }
}
