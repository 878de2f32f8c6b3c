use log::trace;

use super::manifold::{Axis, CollisionManifold};
use crate::math::vec2::Vec2;
use crate::objects::Body;

/// How the normal is reported when a collision resolves on the X axis and B
/// is not to the left of A.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NormalPolicy {
    /// Report `(1, 0)`, mirroring the Y-axis branch.
    #[default]
    Corrected,
    /// Report the zero vector (legacy behaviour).
    LegacyParity,
}

/// Tests two bodies for overlap using the separating axis test on X and Y.
///
/// Returns `None` when the bodies are separated (touching counts as separated).
/// Uses [`NormalPolicy::Corrected`].
pub fn test_aabb_overlap<'a>(a: &'a Body, b: &'a Body) -> Option<CollisionManifold<'a>> {
    test_aabb_overlap_with(a, b, NormalPolicy::default())
}

/// Same as [`test_aabb_overlap`] with an explicit normal policy.
///
/// Positions are treated as box centres: only the size of each bounding box
/// contributes, through its half extents. The axis with the larger overlap is
/// reported, ties go to Y. Malformed boxes (min > max) are not rejected and
/// produce meaningless results.
pub fn test_aabb_overlap_with<'a>(
    a: &'a Body,
    b: &'a Body,
    policy: NormalPolicy,
) -> Option<CollisionManifold<'a>> {
    // Vector from A to B
    let n = b.position - a.position;

    let a_extent_x = (a.bounds.max.x - a.bounds.min.x) / 2.0;
    let b_extent_x = (b.bounds.max.x - b.bounds.min.x) / 2.0;
    let x_overlap = a_extent_x + b_extent_x - n.x.abs();

    // Separated on X is sufficient; Y is never looked at.
    // Written as a negated `>` so NaN overlaps count as separated.
    if !(x_overlap > 0.0) {
        return None;
    }

    let a_extent_y = (a.bounds.max.y - a.bounds.min.y) / 2.0;
    let b_extent_y = (b.bounds.max.y - b.bounds.min.y) / 2.0;
    let y_overlap = a_extent_y + b_extent_y - n.y.abs();

    if !(y_overlap > 0.0) {
        return None;
    }

    let (axis, normal, penetration) = if x_overlap > y_overlap {
        let normal = if n.x < 0.0 {
            Vec2::new(-1.0, 0.0)
        } else {
            match policy {
                NormalPolicy::Corrected => Vec2::UNIT_X,
                NormalPolicy::LegacyParity => Vec2::ZERO,
            }
        };
        (Axis::X, normal, x_overlap)
    } else {
        let normal = if n.y < 0.0 {
            Vec2::new(0.0, -1.0)
        } else {
            Vec2::UNIT_Y
        };
        (Axis::Y, normal, y_overlap)
    };

    trace!(
        "aabb overlap: axis={:?} normal=({}, {}) penetration={:.3}",
        axis,
        normal.x,
        normal.y,
        penetration
    );

    Some(CollisionManifold {
        body_a: a,
        body_b: b,
        normal,
        penetration,
        axis,
    })
}

/// Boolean form of [`test_aabb_overlap`].
pub fn bodies_overlap(a: &Body, b: &Body) -> bool {
    test_aabb_overlap(a, b).is_some()
}
