//! Level file format.
//!
//! A level is a JSON document describing a tile map and its object layers:
//!
//! ```json
//! {
//!   "tile_size": 16,
//!   "map_width": 60,
//!   "map_height": 15,
//!   "layers": [
//!     { "name": "Ground", "positions": [ { "x": 0, "y": 0, "id": 1 } ] }
//!   ],
//!   "object_layers": [
//!     { "name": "Collectables", "objects": [ { "x": 112.0, "y": 48.0 } ] }
//!   ]
//! }
//! ```
//!
//! Tile positions are in cells with `y` counting up from the bottom row.
//! Object positions are in world units. The first tile layer is the
//! collision layer.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Single tile placement within a layer.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Tileposition {
    /// X coordinate in cells.
    pub x: u32,
    /// Y coordinate in cells, counting up from the bottom row.
    pub y: u32,
    /// Tile identifier (tileset-local).
    pub id: u32,
}

/// A named tile layer containing positions.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Tilelayer {
    pub name: String,
    pub positions: Vec<Tileposition>,
}

/// A point object placed in world units.
#[derive(Debug, Clone, Copy, Deserialize, Serialize)]
pub struct MapObject {
    pub x: f32,
    pub y: f32,
}

/// A named layer of point objects.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ObjectLayer {
    pub name: String,
    pub objects: Vec<MapObject>,
}

/// Tilemap metadata, tile layers and object layers.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Tilemap {
    /// Size of a tile in world units.
    pub tile_size: u32,
    /// Map width in tiles.
    pub map_width: u32,
    /// Map height in tiles.
    pub map_height: u32,
    pub layers: Vec<Tilelayer>,
    #[serde(default)]
    pub object_layers: Vec<ObjectLayer>,
}

impl Tilemap {
    /// Parse a level from its JSON text.
    pub fn from_json(json: &str) -> Result<Self, String> {
        let tilemap: Tilemap =
            serde_json::from_str(json).map_err(|e| format!("Failed to parse level: {}", e))?;
        if tilemap.tile_size == 0 {
            return Err("Level tile_size must be greater than zero".to_string());
        }
        Ok(tilemap)
    }

    /// Read and parse a level file.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, String> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read level {}: {}", path.display(), e))?;
        Self::from_json(&json)
    }

    /// Objects of the named object layer, or an empty slice if there is none.
    pub fn objects(&self, layer: &str) -> &[MapObject] {
        self.object_layers
            .iter()
            .find(|l| l.name == layer)
            .map(|l| l.objects.as_slice())
            .unwrap_or(&[])
    }
}
