//! Session state definitions that control the overall flow of the game.
//!
//! States determine which systems run at any given time. Survival decay and
//! player movement only run in the two gameplay states (Bunker and Ground),
//! while the title and ending screens only react to session-flow input.

use bevy::prelude::*;

/// Top-level session states.
///
/// The session moves between these based on player actions:
/// - Start on the `Title` screen
/// - "Start new run" enters the `Bunker` and resets the day counter
/// - `Bunker` and `Ground` are the two gameplay scenes; travel between them
///   is free
/// - `Ending` when the run is over (the player died)
/// - `Paused` freezes gameplay while the menu is open
#[derive(States, Debug, Clone, Copy, Eq, PartialEq, Hash, Default)]
pub enum GameSession {
    /// Title screen, waiting for a new run to start
    #[default]
    Title,
    /// Inside the shelter: safe, but the clock still runs
    Bunker,
    /// Out on the surface
    Ground,
    /// The run is over
    Ending,
    /// Menu is open, simulation frozen
    Paused,
}

impl GameSession {
    /// Symbolic scene name handed to the presentation layer on transition.
    pub fn scene_name(self) -> &'static str {
        match self {
            GameSession::Title => "title",
            GameSession::Bunker => "bunker_interior",
            GameSession::Ground => "surface",
            GameSession::Ending => "ending",
            GameSession::Paused => "pause_overlay",
        }
    }

    /// Whether this state is one of the two playable scenes.
    pub fn is_gameplay(self) -> bool {
        matches!(self, GameSession::Bunker | GameSession::Ground)
    }
}

/// Which day of the run it is, starting at 1.
///
/// Advancing has no upper bound; difficulty curves over the day count are
/// left to downstream systems.
#[derive(Resource, Debug, Clone, Copy)]
pub struct DayCounter {
    day: u32,
}

impl Default for DayCounter {
    fn default() -> Self {
        Self { day: 1 }
    }
}

impl DayCounter {
    pub fn day(&self) -> u32 {
        self.day
    }

    /// Unconditionally move to the next day.
    pub fn advance(&mut self) {
        self.day += 1;
    }

    /// Back to day 1, for a fresh run.
    pub fn reset(&mut self) {
        self.day = 1;
    }
}

/// Remembers which scene was active when the menu opened, so closing it
/// returns there instead of a fixed scene.
#[derive(Resource, Debug, Default)]
pub struct PauseOrigin(pub Option<GameSession>);

/// Run condition: the session is in one of the playable scenes.
pub fn in_gameplay(state: Res<State<GameSession>>) -> bool {
    state.get().is_gameplay()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn day_counter_starts_at_one_and_advances() {
        let mut counter = DayCounter::default();
        assert_eq!(counter.day(), 1);

        counter.advance();
        counter.advance();
        assert_eq!(counter.day(), 3);

        counter.reset();
        assert_eq!(counter.day(), 1);
    }

    #[test]
    fn gameplay_states() {
        assert!(GameSession::Bunker.is_gameplay());
        assert!(GameSession::Ground.is_gameplay());
        assert!(!GameSession::Title.is_gameplay());
        assert!(!GameSession::Ending.is_gameplay());
        assert!(!GameSession::Paused.is_gameplay());
    }

    #[test]
    fn every_state_has_a_scene_name() {
        for state in [
            GameSession::Title,
            GameSession::Bunker,
            GameSession::Ground,
            GameSession::Ending,
            GameSession::Paused,
        ] {
            assert!(!state.scene_name().is_empty());
        }
    }
}
