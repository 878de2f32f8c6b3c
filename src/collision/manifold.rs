use crate::math::vec2::Vec2;
use crate::objects::Body;

/// The axis a collision was resolved along.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

/// Stores information about a collision between two bodies.
///
/// Only lives for the duration of one test; it borrows the bodies it describes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CollisionManifold<'a> {
    /// The first body tested.
    pub body_a: &'a Body,
    /// The second body tested.
    pub body_b: &'a Body,
    /// Axis-aligned collision normal, pointing from body A towards body B.
    pub normal: Vec2,
    /// Overlap along the resolved axis. Always positive.
    pub penetration: f64,
    /// The axis the collision was resolved along.
    pub axis: Axis,
}
