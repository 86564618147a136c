//! Global events used for cross-system communication.
//!
//! Events let decoupled systems communicate. The survival pipeline sends
//! `DeathEvent` when vitals bottom out, and the session-flow systems receive
//! it to end the run. This keeps systems independent and testable.

use bevy::prelude::*;

/// Sent when an entity's health reaches zero.
///
/// Fired exactly once per transition into the dead state; healing back
/// above zero re-arms it.
#[derive(Event, Debug, Clone, Copy)]
pub struct DeathEvent {
    /// Entity that died
    pub entity: Entity,
}

/// Sent when the pause menu is opened or closed.
#[derive(Event, Debug, Clone, Copy)]
pub struct MenuToggledEvent {
    /// New state of the menu
    pub open: bool,
}

/// Sent on the frame the interact key is pressed.
///
/// Interactables (bunk, travel hatches) listen for this and check their own
/// range against the player.
#[derive(Event, Debug, Clone, Copy)]
pub struct InteractEvent;

/// Sent on the frame the grab key is pressed.
///
/// Nothing in this crate consumes it yet; an item/inventory system would,
/// checking the carry capacity on `Vitals`.
#[derive(Event, Debug, Clone, Copy)]
pub struct GrabEvent;

/// Request to advance the day counter.
#[derive(Event, Debug, Clone, Copy)]
pub struct AdvanceDayEvent;

/// Sent after the day counter has advanced.
#[derive(Event, Debug, Clone, Copy)]
pub struct DayAdvancedEvent {
    /// The day that just began
    pub day: u32,
}
