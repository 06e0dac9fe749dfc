//! Game systems.
//!
//! This module groups the ECS systems that advance the simulation, read
//! input, load assets and draw.
//!
//! Submodules overview
//! - [`animation`] – pick Pete's pose and spritesheet frame
//! - [`audio`] – bridge with the audio thread (forward commands, poll replies)
//! - [`bounds`] – keep movers inside the level horizontally and above y = 0
//! - [`camera`] – horizontal camera follow
//! - [`collision`] – resolve mover boxes against the tile grid
//! - [`gamestate`] – check for pending state transitions and run conditions
//! - [`input`] – read hardware input into the `InputState` resource
//! - [`loading`] – drain the asset queue one job per frame
//! - [`movement`] – input-driven run, jump and fall
//! - [`pickup`] – collect acorns the player touches
//! - [`render`] – draw the loading bar or the level into the render target
//! - [`time`] – update the frame clock
pub mod animation;
pub mod audio;
pub mod bounds;
pub mod camera;
pub mod collision;
pub mod gamestate;
pub mod input;
pub mod loading;
pub mod movement;
pub mod pickup;
pub mod render;
pub mod time;
