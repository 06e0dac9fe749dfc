//! Event types and observers.
//!
//! Events let systems communicate without depending on each other: the
//! simulation fires them, observers turn them into sounds, counters and
//! state changes.
//!
//! Submodules:
//! - [`audio`] – commands and messages for the background audio thread
//! - [`gamestate`] – state transition notifications for the high-level game flow
//! - [`jump`] – a jump has just started
//! - [`pickup`] – an acorn has been collected
//! - [`switchdebug`] – toggle the debug overlay on/off
pub mod audio;
pub mod gamestate;
pub mod jump;
pub mod pickup;
pub mod switchdebug;
