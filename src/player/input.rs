//! Keyboard sampling and menu toggling.
//!
//! Controls:
//! - A/D or arrows: move
//! - Space: jump
//! - Shift: run
//! - E: interact
//! - G: grab
//! - Escape: menu (pauses the session)

use bevy::prelude::*;

use super::components::{MenuState, PlayerInput};
use crate::core::{GameSession, GrabEvent, InteractEvent, MenuToggledEvent, PauseOrigin};

/// Sample the keyboard into the shared input snapshot, once per frame.
pub fn sample_input(keyboard: Res<ButtonInput<KeyCode>>, mut input: ResMut<PlayerInput>) {
    let mut axis = 0.0;
    if keyboard.pressed(KeyCode::KeyA) || keyboard.pressed(KeyCode::ArrowLeft) {
        axis -= 1.0;
    }
    if keyboard.pressed(KeyCode::KeyD) || keyboard.pressed(KeyCode::ArrowRight) {
        axis += 1.0;
    }
    input.axis = axis;
    input.run_held = keyboard.pressed(KeyCode::ShiftLeft);
    input.jump_held = keyboard.pressed(KeyCode::Space);
    input.jump_pressed = keyboard.just_pressed(KeyCode::Space);
    input.interact_pressed = keyboard.just_pressed(KeyCode::KeyE);
    input.grab_pressed = keyboard.just_pressed(KeyCode::KeyG);
    input.menu_pressed = keyboard.just_pressed(KeyCode::Escape);
}

/// Re-emit discrete interaction presses as events for whoever cares
/// (interactables, item systems).
pub fn emit_interaction_events(
    input: Res<PlayerInput>,
    mut interact_events: EventWriter<InteractEvent>,
    mut grab_events: EventWriter<GrabEvent>,
) {
    if input.interact_pressed {
        interact_events.send(InteractEvent);
    }
    if input.grab_pressed {
        grab_events.send(GrabEvent);
    }
}

/// Toggle the menu and request the matching pause state.
///
/// Edge-triggered on the menu key. Opening remembers the active scene so
/// closing can return to it; all gameplay systems are suspended in between
/// by their state gates.
pub fn toggle_menu(
    input: Res<PlayerInput>,
    mut menu: ResMut<MenuState>,
    current_state: Res<State<GameSession>>,
    mut origin: ResMut<PauseOrigin>,
    mut next_state: ResMut<NextState<GameSession>>,
    mut toggled: EventWriter<MenuToggledEvent>,
) {
    if !input.menu_pressed {
        return;
    }

    menu.open = !menu.open;
    toggled.send(MenuToggledEvent { open: menu.open });

    if menu.open {
        origin.0 = Some(*current_state.get());
        next_state.set(GameSession::Paused);
    } else {
        next_state.set(origin.0.take().unwrap_or(GameSession::Bunker));
    }
}
