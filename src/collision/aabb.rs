// Defines an Axis-Aligned Bounding Box in a body's local frame

use serde::{Deserialize, Serialize};

use crate::math::vec2::Vec2;

/// An Axis-Aligned Bounding Box defined by its minimum and maximum corner points.
///
/// Corners are offsets from the owning body's position, not absolute
/// coordinates. Use [`BoundingBox::world_bounds`] to place the box in the world.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub min: Vec2,
    pub max: Vec2,
}

impl BoundingBox {
    /// Creates a new box, reordering the corners so that `min <= max` per axis.
    pub fn new(min: Vec2, max: Vec2) -> Self {
        BoundingBox {
            min: Vec2::new(min.x.min(max.x), min.y.min(max.y)),
            max: Vec2::new(min.x.max(max.x), min.y.max(max.y)),
        }
    }

    /// Creates a box of the given size centred on the local origin.
    pub fn centered(width: f64, height: f64) -> Self {
        let half = Vec2::new(width.abs() / 2.0, height.abs() / 2.0);
        BoundingBox { min: -half, max: half }
    }

    /// Width and height of the box.
    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }

    /// Half of the box size along each axis.
    pub fn half_extents(&self) -> Vec2 {
        self.size() * 0.5
    }

    /// Whether `min <= max` holds on both axes. NaN corners are not well formed.
    pub fn is_well_formed(&self) -> bool {
        self.min.x <= self.max.x && self.min.y <= self.max.y
    }

    /// The box translated by `position` into world coordinates.
    pub fn world_bounds(&self, position: Vec2) -> BoundingBox {
        BoundingBox {
            min: self.min + position,
            max: self.max + position,
        }
    }

    /// Checks if this box overlaps with another box in the same frame.
    /// Touching edges do not count as overlap.
    pub fn overlaps(&self, other: &BoundingBox) -> bool {
        let x_overlap = self.max.x > other.min.x && self.min.x < other.max.x;
        let y_overlap = self.max.y > other.min.y && self.min.y < other.max.y;
        x_overlap && y_overlap
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_orders_corners() {
        let b = BoundingBox::new(Vec2::new(50.0, -50.0), Vec2::new(-50.0, 50.0));
        assert_eq!(b.min, Vec2::new(-50.0, -50.0));
        assert_eq!(b.max, Vec2::new(50.0, 50.0));
        assert!(b.is_well_formed());
    }

    #[test]
    fn test_centered_box_extents() {
        let b = BoundingBox::centered(100.0, 40.0);
        assert_eq!(b.min, Vec2::new(-50.0, -20.0));
        assert_eq!(b.max, Vec2::new(50.0, 20.0));
        assert_eq!(b.size(), Vec2::new(100.0, 40.0));
        assert_eq!(b.half_extents(), Vec2::new(50.0, 20.0));
    }

    #[test]
    fn test_half_extents_of_offset_box() {
        // Half extents only depend on size, not on where the box sits locally.
        let b = BoundingBox::new(Vec2::new(0.0, 0.0), Vec2::new(10.0, 30.0));
        assert_eq!(b.half_extents(), Vec2::new(5.0, 15.0));
    }

    #[test]
    fn test_malformed_box_detected() {
        let b = BoundingBox {
            min: Vec2::new(10.0, 0.0),
            max: Vec2::new(0.0, 10.0),
        };
        assert!(!b.is_well_formed());
        let nan = BoundingBox {
            min: Vec2::new(f64::NAN, 0.0),
            max: Vec2::new(1.0, 1.0),
        };
        assert!(!nan.is_well_formed());
    }

    #[test]
    fn test_world_bounds() {
        let b = BoundingBox::centered(100.0, 100.0);
        let w = b.world_bounds(Vec2::new(300.0, 250.0));
        assert_eq!(w.min, Vec2::new(250.0, 200.0));
        assert_eq!(w.max, Vec2::new(350.0, 300.0));
    }

    #[test]
    fn test_overlaps() {
        let a = BoundingBox::new(Vec2::new(0.0, 0.0), Vec2::new(2.0, 2.0));
        let b = BoundingBox::new(Vec2::new(1.0, 1.0), Vec2::new(3.0, 3.0));
        let touching = BoundingBox::new(Vec2::new(2.0, 0.0), Vec2::new(4.0, 2.0));
        let far = BoundingBox::new(Vec2::new(5.0, 5.0), Vec2::new(6.0, 6.0));
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
        assert!(!a.overlaps(&touching));
        assert!(!a.overlaps(&far));
    }
}
