use serde::{Deserialize, Serialize};

use crate::collision::BoundingBox;
use crate::math::vec2::Vec2;

/// A collidable entity: a position plus a bounding box expressed relative to it.
///
/// Players, walls and pickups are all bodies. A body has no identity beyond its
/// slot in whatever collection owns it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Body {
    pub position: Vec2,
    pub bounds: BoundingBox,
}

impl Body {
    pub fn new(position: Vec2, bounds: BoundingBox) -> Self {
        Self { position, bounds }
    }

    /// Convenience constructor for a box of `width` x `height` centred on `position`.
    pub fn with_size(position: Vec2, width: f64, height: f64) -> Self {
        Self::new(position, BoundingBox::centered(width, height))
    }

    /// The body's bounding box in world coordinates.
    pub fn world_bounds(&self) -> BoundingBox {
        self.bounds.world_bounds(self.position)
    }

    /// Shifts the body by `offset`.
    pub fn translate(&mut self, offset: Vec2) {
        self.position += offset;
    }
}
