//! Tile collision: push movers out of solid cells.
//!
//! Resolution works on the cells a mover's bounding box covers. With the
//! box's bottom-left corner at fractional cell coordinate `(cx, cy)`:
//!
//! - the bottom-left cell `(floor(cx), floor(cy))` is always covered,
//! - the top-right cell is covered when both `cx` and `cy` have a fraction,
//! - the bottom-right cell is covered when `cx` has a fraction,
//! - the top-left cell is covered when `cy` has a fraction.
//!
//! Only the corner cells are considered, so this assumes boxes no larger
//! than one cell. Empty cells are discarded. For each remaining solid cell,
//! in the order above, the overlap with the mover's *current* box picks the
//! axis of least penetration:
//!
//! - overlap shorter than wide: the mover lands on top of the cell,
//! - overlap narrower than tall: the mover is pushed sideways out of it,
//! - overlap exactly square: no correction for that cell.
//!
//! Corrections are applied before the next cell is tested, so a later cell
//! sees the box already moved by earlier ones.

use arrayvec::ArrayVec;
use bevy_ecs::prelude::*;
use log::trace;

use crate::components::jumper::Jumper;
use crate::components::mover::Mover;
use crate::components::rigidbody::RigidBody;
use crate::geometry::{Rect, cell_coordinate, cell_index, cell_rect, has_fraction};
use crate::resources::tilegrid::TileGrid;
use crate::systems::movement::landed;

/// A cell covered by a mover during one resolution pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CollisionCell {
    /// Tile found at the cell, `None` when empty or outside the grid.
    pub tile: Option<u32>,
    pub x: i32,
    pub y: i32,
}

impl CollisionCell {
    pub fn is_empty(&self) -> bool {
        self.tile.is_none()
    }
}

/// Positional fix for one overlapping cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Correction {
    /// Snap the bottom edge to `y` and land.
    Land { y: f32 },
    /// Move the left edge to `x`.
    Push { x: f32 },
}

/// Outcome of [`resolve`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Resolution {
    /// Corrections applied, in order.
    pub corrections: ArrayVec<Correction, 4>,
}

impl Resolution {
    /// True if any correction was a landing.
    pub fn landed(&self) -> bool {
        self.corrections
            .iter()
            .any(|c| matches!(c, Correction::Land { .. }))
    }
}

/// Cells covered by `bounds`, looked up in `grid`.
///
/// Order: bottom-left, top-right, bottom-right, top-left.
pub fn covered_cells(bounds: &Rect, grid: &TileGrid) -> ArrayVec<CollisionCell, 4> {
    let cx = cell_coordinate(bounds.x, grid.cell_size());
    let cy = cell_coordinate(bounds.y, grid.cell_size());
    let left = cell_index(cx);
    let bottom = cell_index(cy);
    let frac_x = has_fraction(cx);
    let frac_y = has_fraction(cy);

    let mut cells = ArrayVec::new();
    let mut cover = |x: i32, y: i32| {
        cells.push(CollisionCell {
            tile: grid.cell_at(x, y),
            x,
            y,
        });
    };

    cover(left, bottom);
    if frac_x && frac_y {
        cover(left + 1, bottom + 1);
    }
    if frac_x {
        cover(left + 1, bottom);
    }
    if frac_y {
        cover(left, bottom + 1);
    }
    cells
}

/// Keep only the solid cells, preserving order.
pub fn solid_cells(cells: &[CollisionCell]) -> ArrayVec<CollisionCell, 4> {
    cells.iter().copied().filter(|c| !c.is_empty()).collect()
}

/// Correction that moves `bounds` out of `cell`, if any.
///
/// Ties (square overlap) and non-overlapping boxes yield `None`.
pub fn correction_for(bounds: &Rect, cell: &Rect) -> Option<Correction> {
    let overlap = bounds.intersection(cell);
    if overlap.height < overlap.width {
        Some(Correction::Land {
            y: overlap.y + overlap.height,
        })
    } else if overlap.width < overlap.height {
        if overlap.x == bounds.x {
            // Entered from the right: cell is on our left.
            Some(Correction::Push {
                x: overlap.x + overlap.width,
            })
        } else if overlap.x > bounds.x {
            Some(Correction::Push {
                x: overlap.x - bounds.width,
            })
        } else {
            None
        }
    } else {
        None
    }
}

/// Resolve `mover` against `grid`, moving it out of every solid cell it
/// covers. Landing must be applied by the caller when
/// [`Resolution::landed`] is true.
pub fn resolve(mover: &mut Mover, grid: &TileGrid) -> Resolution {
    let covered = covered_cells(&mover.bounds(), grid);
    let solid = solid_cells(&covered);

    let mut resolution = Resolution::default();
    for cell in solid {
        let rect = cell_rect(cell.x, cell.y, grid.cell_size());
        let Some(correction) = correction_for(&mover.bounds(), &rect) else {
            continue;
        };
        match correction {
            Correction::Land { y } => mover.set_y(y),
            Correction::Push { x } => mover.set_x(x),
        }
        trace!("cell ({}, {}) -> {:?}", cell.x, cell.y, correction);
        resolution.corrections.push(correction);
    }
    resolution
}

/// Resolve every mover against the level's tile grid.
pub fn tile_collision(
    mut query: Query<(&mut Mover, &mut RigidBody, Option<&mut Jumper>)>,
    grid: Option<Res<TileGrid>>,
) {
    let Some(grid) = grid else {
        return;
    };
    for (mut mover, mut body, jumper) in query.iter_mut() {
        let resolution = resolve(&mut mover, &grid);
        if resolution.landed() {
            landed(&mut body, jumper.map(|j| j.into_inner()));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CELL: f32 = 16.0;

    fn empty_grid() -> TileGrid {
        TileGrid::new(10, 10, CELL)
    }

    fn coords(cells: &[CollisionCell]) -> Vec<(i32, i32)> {
        cells.iter().map(|c| (c.x, c.y)).collect()
    }

    #[test]
    fn aligned_box_covers_one_cell() {
        let grid = empty_grid();
        for cx in -2..=9 {
            for cy in -2..=9 {
                let (x, y) = (cx as f32 * CELL, cy as f32 * CELL);
                let cells = covered_cells(&Rect::new(x, y, 16.0, 15.0), &grid);
                assert_eq!(coords(&cells), vec![(cx, cy)], "at ({x}, {y})");
            }
        }
    }

    #[test]
    fn straddling_box_covers_four_cells_in_order() {
        let grid = empty_grid();
        let cells = covered_cells(&Rect::new(20.0, 40.0, 16.0, 15.0), &grid);
        assert_eq!(coords(&cells), vec![(1, 2), (2, 3), (2, 2), (1, 3)]);

        for &x in &[-24.0, -0.5, 3.25, 20.0, 100.75] {
            for &y in &[-7.5, 0.5, 40.0, 130.125] {
                let cells = covered_cells(&Rect::new(x, y, 16.0, 15.0), &grid);
                let (l, b) = (cell_index(x / CELL), cell_index(y / CELL));
                assert_eq!(
                    coords(&cells),
                    vec![(l, b), (l + 1, b + 1), (l + 1, b), (l, b + 1)],
                    "at ({x}, {y})"
                );
            }
        }
        // Negative fractions floor away from zero.
        let cells = covered_cells(&Rect::new(-0.5, -7.5, 16.0, 15.0), &grid);
        assert_eq!(coords(&cells), vec![(-1, -1), (0, 0), (0, -1), (-1, 0)]);
    }

    #[test]
    fn straddling_one_axis_covers_two_cells() {
        let grid = empty_grid();
        let cells = covered_cells(&Rect::new(20.0, 32.0, 16.0, 15.0), &grid);
        assert_eq!(coords(&cells), vec![(1, 2), (2, 2)]);
        let cells = covered_cells(&Rect::new(32.0, 40.0, 16.0, 15.0), &grid);
        assert_eq!(coords(&cells), vec![(2, 2), (2, 3)]);
    }

    #[test]
    fn negative_positions_floor_down() {
        let grid = empty_grid();
        let cells = covered_cells(&Rect::new(-4.0, 0.0, 16.0, 15.0), &grid);
        assert_eq!(coords(&cells), vec![(-1, 0), (0, 0)]);
        assert!(cells[0].is_empty());
    }

    #[test]
    fn empty_cells_are_filtered() {
        let mut grid = empty_grid();
        grid.set(2, 2, Some(1));
        let cells = covered_cells(&Rect::new(20.0, 40.0, 16.0, 15.0), &grid);
        let solid = solid_cells(&cells);
        assert_eq!(coords(&solid), vec![(2, 2)]);
        assert_eq!(cells.len(), 4);
    }

    #[test]
    fn empty_grid_leaves_mover_untouched() {
        let grid = empty_grid();
        let mut mover = Mover::new(21.3, 37.7, 16.0, 15.0);
        let before = mover;
        let resolution = resolve(&mut mover, &grid);
        assert!(resolution.corrections.is_empty());
        assert!(!resolution.landed());
        assert_eq!(mover, before);
    }

    #[test]
    fn falling_onto_cell_lands_on_its_top() {
        let mut grid = empty_grid();
        grid.set(2, 1, Some(1));
        // Fell 2 units into the top of cell (2, 1), whose top is y = 32.
        let mut mover = Mover::new(32.0, 30.0, 16.0, 15.0);
        let resolution = resolve(&mut mover, &grid);
        assert!(resolution.landed());
        assert_eq!(mover.y(), 32.0);
        assert_eq!(mover.x(), 32.0);
    }

    #[test]
    fn walking_into_left_face_stops_at_edge() {
        let mut grid = empty_grid();
        grid.set(1, 0, Some(1));
        let mut mover = Mover::new(1.5, 0.0, 16.0, 15.0);
        let resolution = resolve(&mut mover, &grid);
        assert_eq!(resolution.corrections.as_slice(), &[Correction::Push { x: 0.0 }]);
        assert_eq!(mover.bounds().right(), 16.0);
        assert!(!resolution.landed());
    }

    #[test]
    fn walking_into_right_face_stops_at_edge() {
        let mut grid = empty_grid();
        grid.set(1, 0, Some(1));
        let mut mover = Mover::new(30.5, 0.0, 16.0, 15.0);
        resolve(&mut mover, &grid);
        assert_eq!(mover.x(), 32.0);
    }

    #[test]
    fn deep_overlap_with_left_edge_aligned_is_pushed_right() {
        // The box's left edge lies inside the cell, so the overlap starts at
        // the box's own x and the push goes to the cell's right edge.
        let mut grid = empty_grid();
        grid.set(1, 0, Some(1));
        let mut mover = Mover::new(17.5, 0.0, 16.0, 15.0);
        resolve(&mut mover, &grid);
        assert_eq!(mover.x(), 32.0);
    }

    #[test]
    fn square_overlap_is_left_alone() {
        let bounds = Rect::new(8.0, 8.0, 16.0, 16.0);
        let cell = Rect::new(16.0, 16.0, 16.0, 16.0);
        assert_eq!(correction_for(&bounds, &cell), None);
    }

    #[test]
    fn touching_cell_needs_no_correction() {
        let bounds = Rect::new(0.0, 16.0, 16.0, 15.0);
        let cell = Rect::new(0.0, 0.0, 16.0, 16.0);
        assert_eq!(correction_for(&bounds, &cell), None);
    }

    #[test]
    fn later_cells_see_earlier_corrections() {
        // Floor under both columns. Landing on the first cell lifts the box
        // clear of the second, so only one correction is recorded.
        let mut grid = empty_grid();
        grid.set(1, 1, Some(1));
        grid.set(2, 1, Some(1));
        let mut mover = Mover::new(20.0, 30.0, 16.0, 15.0);
        let resolution = resolve(&mut mover, &grid);
        assert_eq!(resolution.corrections.len(), 1);
        assert_eq!(mover.y(), 32.0);
    }

    #[test]
    fn border_cells_outside_grid_are_ignored() {
        let grid = TileGrid::new(1, 1, CELL);
        let mut mover = Mover::new(-8.0, -8.0, 16.0, 15.0);
        let resolution = resolve(&mut mover, &grid);
        assert!(resolution.corrections.is_empty());
    }
}
