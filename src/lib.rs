//! Pete, a small tile-based platformer.
//!
//! The library exposes the game's ECS components, resources, systems and
//! events so the simulation can be driven headlessly from integration tests.

pub mod components;
pub mod events;
pub mod game;
pub mod geometry;
pub mod resources;
pub mod systems;
