//! Registry of loaded levels by key.
//!
//! The loading screen parses level files into [`Tilemap`]s and stores them
//! here; entering play reads the object layers back to spawn pickups.

use bevy_ecs::prelude::Resource;
use rustc_hash::FxHashMap;

use crate::resources::tilemap::Tilemap;

/// Key under which the level being played is stored.
pub const CURRENT_LEVEL: &str = "level";

#[derive(Resource, Debug, Default)]
pub struct TilemapStore {
    pub map: FxHashMap<String, Tilemap>,
}

impl TilemapStore {
    /// Create an empty store.
    pub fn new() -> Self {
        TilemapStore {
            map: FxHashMap::default(),
        }
    }
    /// Get a tilemap by its key.
    pub fn get(&self, key: impl AsRef<str>) -> Option<&Tilemap> {
        self.map.get(key.as_ref())
    }
    /// Insert a tilemap with a specific key.
    pub fn insert(&mut self, key: impl Into<String>, tilemap: Tilemap) {
        self.map.insert(key.into(), tilemap);
    }
}
