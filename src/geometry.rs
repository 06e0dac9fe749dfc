//! Grid geometry and rectangle helpers.
//!
//! Everything here is pure: world coordinates in, cell coordinates or
//! rectangles out. World space is y-up, with `(x, y)` the bottom-left corner
//! of a rectangle.

/// Axis-aligned rectangle in world units. `(x, y)` is the bottom-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn top(&self) -> f32 {
        self.y + self.height
    }

    /// True when the rectangle covers no area.
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// Strict overlap test. Rectangles that only share an edge do not overlap.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.x < other.right()
            && self.right() > other.x
            && self.y < other.top()
            && self.top() > other.y
    }

    /// Intersection of two rectangles.
    ///
    /// Returns `Rect::default()` (zero origin, zero size) when the rectangles
    /// do not overlap, including when they only touch.
    pub fn intersection(&self, other: &Rect) -> Rect {
        if !self.overlaps(other) {
            return Rect::default();
        }
        let x = self.x.max(other.x);
        let y = self.y.max(other.y);
        Rect {
            x,
            y,
            width: self.right().min(other.right()) - x,
            height: self.top().min(other.top()) - y,
        }
    }
}

/// Fractional cell coordinate of a world position: `world / cell_size`.
pub fn cell_coordinate(world: f32, cell_size: f32) -> f32 {
    world / cell_size
}

/// Integer cell index containing a fractional cell coordinate.
///
/// Floors toward negative infinity, so `-0.5` lands in cell `-1`.
pub fn cell_index(coordinate: f32) -> i32 {
    coordinate.floor() as i32
}

/// True when a fractional cell coordinate is not on a cell boundary.
pub fn has_fraction(coordinate: f32) -> bool {
    coordinate % 1.0 != 0.0
}

/// World-space rectangle of the cell at `(cell_x, cell_y)`.
pub fn cell_rect(cell_x: i32, cell_y: i32, cell_size: f32) -> Rect {
    Rect::new(
        cell_x as f32 * cell_size,
        cell_y as f32 * cell_size,
        cell_size,
        cell_size,
    )
}

/// Clamp `value` into `[min, max]`.
///
/// Unlike [`f32::clamp`] this never panics: when `min > max` the lower bound
/// is checked first and wins.
pub fn clamp(value: f32, min: f32, max: f32) -> f32 {
    if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}
