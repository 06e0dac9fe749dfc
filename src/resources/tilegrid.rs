//! Solid-tile lookup for collision.
//!
//! [`TileGrid`] is a dense copy of a level's collision layer. It is read-only
//! while playing. Lookups outside the map return empty instead of failing,
//! so boxes at the level border can be resolved without bounds checks.

use bevy_ecs::prelude::Resource;
use log::warn;

use crate::resources::tilemap::Tilemap;

#[derive(Resource, Debug, Clone, PartialEq)]
pub struct TileGrid {
    width: u32,
    height: u32,
    cell_size: f32,
    cells: Vec<Option<u32>>,
}

impl TileGrid {
    /// Create an all-empty grid.
    pub fn new(width: u32, height: u32, cell_size: f32) -> Self {
        Self {
            width,
            height,
            cell_size,
            cells: vec![None; (width as usize) * (height as usize)],
        }
    }

    /// Build the grid from the tile layer at `layer_index`.
    ///
    /// A missing layer gives an empty grid. Tiles outside the map are dropped.
    pub fn from_tilemap(tilemap: &Tilemap, layer_index: usize) -> Self {
        let mut grid = Self::new(
            tilemap.map_width,
            tilemap.map_height,
            tilemap.tile_size as f32,
        );
        let Some(layer) = tilemap.layers.get(layer_index) else {
            warn!("Tilemap has no layer {}, collision grid is empty", layer_index);
            return grid;
        };
        for pos in &layer.positions {
            if !grid.set(pos.x as i32, pos.y as i32, Some(pos.id)) {
                warn!(
                    "Tile ({}, {}) in layer '{}' is outside the {}x{} map",
                    pos.x, pos.y, layer.name, grid.width, grid.height
                );
            }
        }
        grid
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return None;
        }
        Some(y as usize * self.width as usize + x as usize)
    }

    /// Set a cell. Returns false if `(x, y)` is outside the grid.
    pub fn set(&mut self, x: i32, y: i32, tile: Option<u32>) -> bool {
        match self.index(x, y) {
            Some(i) => {
                self.cells[i] = tile;
                true
            }
            None => false,
        }
    }

    /// Tile at `(x, y)`, or `None` when empty or out of range.
    pub fn cell_at(&self, x: i32, y: i32) -> Option<u32> {
        self.index(x, y).and_then(|i| self.cells[i])
    }

    pub fn is_solid(&self, x: i32, y: i32) -> bool {
        self.cell_at(x, y).is_some()
    }

    /// Width in cells.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in cells.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Cell edge length in world units.
    pub fn cell_size(&self) -> f32 {
        self.cell_size
    }

    /// Level width in world units.
    pub fn level_width(&self) -> f32 {
        self.width as f32 * self.cell_size
    }

    /// Iterate over solid cells as `(x, y, tile)`.
    pub fn solid_cells(&self) -> impl Iterator<Item = (i32, i32, u32)> + '_ {
        let width = self.width as usize;
        self.cells.iter().enumerate().filter_map(move |(i, cell)| {
            cell.map(|tile| ((i % width) as i32, (i / width) as i32, tile))
        })
    }
}
