//! Scene construction: static ground colliders and interactables.
//!
//! Scenes are built from flat colored slabs. Everything standable carries
//! the ground collision group so the player's foot probe can classify it.

use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

use crate::core::GameSession;
use crate::player::GROUND_GROUP;

/// Tag for entities belonging to a particular scene.
#[derive(Component)]
pub struct SceneTag(pub GameSession);

/// Travel point between the bunker and the surface.
#[derive(Component)]
pub struct TravelHatch {
    pub destination: GameSession,
}

/// Sleeping here advances the day.
#[derive(Component)]
pub struct Bunk;

/// How close the player must stand to use an interactable.
pub const INTERACT_RANGE: f32 = 70.0;

/// Where the player appears when entering each scene.
pub const BUNKER_ENTRY: Vec2 = Vec2::new(0.0, -120.0);
pub const SURFACE_ENTRY: Vec2 = Vec2::new(-520.0, -140.0);

/// A static slab the player can stand on.
fn spawn_slab(commands: &mut Commands, scene: GameSession, center: Vec2, size: Vec2, color: Color) {
    commands.spawn((
        SceneTag(scene),
        Sprite {
            color,
            custom_size: Some(size),
            ..default()
        },
        Transform::from_translation(center.extend(0.0)),
        RigidBody::Fixed,
        Collider::cuboid(size.x / 2.0, size.y / 2.0),
        CollisionGroups::new(GROUND_GROUP, Group::ALL),
    ));
}

/// A sprite-only marker entity (interactables have no collider; they are
/// used by proximity).
fn spawn_prop(
    commands: &mut Commands,
    scene: GameSession,
    center: Vec2,
    size: Vec2,
    color: Color,
) -> Entity {
    commands
        .spawn((
            SceneTag(scene),
            Sprite {
                color,
                custom_size: Some(size),
                ..default()
            },
            Transform::from_translation(center.extend(-1.0)),
        ))
        .id()
}

/// The shelter: enclosed room with a bunk and a hatch up to the surface.
pub fn build_bunker(commands: &mut Commands) {
    let scene = GameSession::Bunker;
    let concrete = Color::srgb(0.35, 0.34, 0.32);

    spawn_slab(commands, scene, Vec2::new(0.0, -180.0), Vec2::new(700.0, 40.0), concrete);
    spawn_slab(commands, scene, Vec2::new(-360.0, 0.0), Vec2::new(40.0, 400.0), concrete);
    spawn_slab(commands, scene, Vec2::new(360.0, 0.0), Vec2::new(40.0, 400.0), concrete);

    let bunk = spawn_prop(
        commands,
        scene,
        Vec2::new(-250.0, -140.0),
        Vec2::new(90.0, 40.0),
        Color::srgb(0.45, 0.30, 0.22),
    );
    commands.entity(bunk).insert(Bunk);

    let hatch = spawn_prop(
        commands,
        scene,
        Vec2::new(280.0, -125.0),
        Vec2::new(44.0, 70.0),
        Color::srgb(0.55, 0.52, 0.30),
    );
    commands.entity(hatch).insert(TravelHatch {
        destination: GameSession::Ground,
    });
}

/// The surface: a long stretch of ash with a few platforms and the hatch
/// back down.
pub fn build_surface(commands: &mut Commands) {
    let scene = GameSession::Ground;
    let ash = Color::srgb(0.42, 0.40, 0.38);

    spawn_slab(commands, scene, Vec2::new(0.0, -200.0), Vec2::new(1800.0, 40.0), ash);
    spawn_slab(commands, scene, Vec2::new(-280.0, -100.0), Vec2::new(200.0, 20.0), ash);
    spawn_slab(commands, scene, Vec2::new(40.0, -20.0), Vec2::new(160.0, 20.0), ash);
    spawn_slab(commands, scene, Vec2::new(320.0, 60.0), Vec2::new(160.0, 20.0), ash);
    spawn_slab(commands, scene, Vec2::new(620.0, -120.0), Vec2::new(240.0, 20.0), ash);

    let hatch = spawn_prop(
        commands,
        scene,
        Vec2::new(-600.0, -145.0),
        Vec2::new(44.0, 70.0),
        Color::srgb(0.55, 0.52, 0.30),
    );
    commands.entity(hatch).insert(TravelHatch {
        destination: GameSession::Bunker,
    });
}
