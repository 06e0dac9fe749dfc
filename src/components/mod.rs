//! ECS components for entities.
//!
//! Submodules overview:
//! - [`animation`] – pose selection and walk cycle for the player sprite
//! - [`inputcontrolled`] – run/jump/fall speeds applied from player input
//! - [`jumper`] – accumulated jump height and jump block
//! - [`mover`] – position with a bounding box kept in sync, for tile collision
//! - [`pickup`] – static collectables removed on contact
//! - [`player`] – player tag and Pete's constants
//! - [`rigidbody`] – per-step velocity
//! - [`sprite`] – 2D sprite rendering component

pub mod animation;
pub mod inputcontrolled;
pub mod jumper;
pub mod mover;
pub mod pickup;
pub mod player;
pub mod rigidbody;
pub mod sprite;
