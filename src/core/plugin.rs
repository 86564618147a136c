//! Core plugin that sets up session states, global events, and run flow.

use bevy::prelude::*;

use super::events::*;
use super::states::*;

/// Core plugin - must be added first as other plugins depend on it.
///
/// This plugin sets up:
/// - The session state machine (Title, Bunker, Ground, Ending, Paused)
/// - Global events (DeathEvent, InteractEvent, etc.)
/// - Run flow: starting a run, ending it on death, day advancement
/// - Freezing the simulation clock while paused
pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app
            // Session state machine
            .init_state::<GameSession>()
            .init_resource::<DayCounter>()
            .init_resource::<PauseOrigin>()

            // Register global events
            .add_event::<DeathEvent>()
            .add_event::<MenuToggledEvent>()
            .add_event::<InteractEvent>()
            .add_event::<GrabEvent>()
            .add_event::<AdvanceDayEvent>()
            .add_event::<DayAdvancedEvent>()

            // Run flow
            .add_systems(Update, start_run.run_if(in_state(GameSession::Title)))
            .add_systems(Update, return_to_title.run_if(in_state(GameSession::Ending)))
            .add_systems(Update, (end_run_on_death, apply_day_advance))
            .add_systems(Update, announce_scene_transitions)

            // Freeze the simulation clock while the menu is open
            .add_systems(OnEnter(GameSession::Paused), pause_clock)
            .add_systems(OnExit(GameSession::Paused), resume_clock);
    }
}

/// Start a new run from the title screen.
fn start_run(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut day: ResMut<DayCounter>,
    mut next_state: ResMut<NextState<GameSession>>,
) {
    if keyboard.just_pressed(KeyCode::Enter) {
        day.reset();
        next_state.set(GameSession::Bunker);
    }
}

/// Leave the ending screen once the player acknowledges it.
fn return_to_title(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut next_state: ResMut<NextState<GameSession>>,
) {
    if keyboard.just_pressed(KeyCode::Enter) {
        next_state.set(GameSession::Title);
    }
}

/// End the run when the player dies.
fn end_run_on_death(
    mut death_events: EventReader<DeathEvent>,
    day: Res<DayCounter>,
    mut next_state: ResMut<NextState<GameSession>>,
) {
    for _ in death_events.read() {
        info!("Run over on day {}", day.day());
        next_state.set(GameSession::Ending);
    }
}

/// Apply queued day-advance requests.
fn apply_day_advance(
    mut requests: EventReader<AdvanceDayEvent>,
    mut day: ResMut<DayCounter>,
    mut advanced: EventWriter<DayAdvancedEvent>,
) {
    for _ in requests.read() {
        day.advance();
        info!("Day {} begins", day.day());
        advanced.send(DayAdvancedEvent { day: day.day() });
    }
}

/// Hand the symbolic scene name for each entered state to the presentation
/// layer. Scene content itself is the world module's concern.
fn announce_scene_transitions(mut transitions: EventReader<StateTransitionEvent<GameSession>>) {
    for transition in transitions.read() {
        if let Some(entered) = transition.entered {
            if transition.exited != transition.entered {
                info!("Loading scene '{}'", entered.scene_name());
            }
        }
    }
}

/// Stop the virtual clock so physics and timers halt while paused.
fn pause_clock(mut time: ResMut<Time<Virtual>>) {
    time.pause();
}

fn resume_clock(mut time: ResMut<Time<Virtual>>) {
    time.unpause();
}
