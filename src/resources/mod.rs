//! ECS resources made available to systems.
//!
//! This module groups the long-lived data injected into the ECS world and
//! accessed by systems during execution: input state, timing, the level,
//! rendering handles and asset stores.
//!
//! Overview
//! - `assetqueue` – asset jobs drained one per frame by the loading screen
//! - `audio` – bridge and channels for the background audio thread
//! - `camera2d` – camera target and world-to-screen projection
//! - `debugmode` – presence toggles the debug overlay
//! - `gameconfig` – INI-backed window and level settings
//! - `gamestate` – authoritative and pending high-level game state
//! - `input` – per-frame keyboard state of keys relevant to the game
//! - `rendertarget` – fixed-resolution framebuffer and letterboxing
//! - `systemsstore` – registry of state hooks by name
//! - `texturestore` – loaded textures keyed by string IDs
//! - `tilegrid` – collision grid built from the level's first layer
//! - `tilemap` – level file format
//! - `tilemapstore` – parsed levels by key
//! - `worldsignals` – global counters, flags and entity handles
//! - `worldtime` – frame clock
pub mod assetqueue;
pub mod audio;
pub mod camera2d;
pub mod debugmode;
pub mod gameconfig;
pub mod gamestate;
pub mod input;
pub mod rendertarget;
pub mod systemsstore;
pub mod texturestore;
pub mod tilegrid;
pub mod tilemap;
pub mod tilemapstore;
pub mod worldsignals;
pub mod worldtime;
