//! Axis-separated movement with per-axis rollback, and pickup consumption.
//!
//! This is not swept collision: a displacement larger than the gap to an
//! obstacle can tunnel straight through it.

use log::debug;

use crate::collision::bodies_overlap;
use crate::math::vec2::Vec2;
use crate::objects::Body;

/// Anything that carries a collidable body.
pub trait Collider {
    fn body(&self) -> &Body;
}

impl Collider for Body {
    fn body(&self) -> &Body {
        self
    }
}

/// Which axes were rolled back during a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MoveOutcome {
    pub blocked_x: bool,
    pub blocked_y: bool,
}

impl MoveOutcome {
    pub fn is_blocked(&self) -> bool {
        self.blocked_x || self.blocked_y
    }
}

/// Index of the first obstacle, in collection order, that overlaps `body`.
pub fn first_overlap<C: Collider>(body: &Body, others: &[C]) -> Option<usize> {
    others.iter().position(|other| bodies_overlap(body, other.body()))
}

/// Moves `body` by `displacement`, treating `obstacles` as impassable.
///
/// X is applied first and reverted in full if the body then overlaps any
/// obstacle. Y is applied next, from the X-resolved position, with the same
/// all-or-nothing rule. Blocking one axis leaves the other free, so the body
/// slides along walls.
pub fn move_and_collide<C: Collider>(
    body: &mut Body,
    displacement: Vec2,
    obstacles: &[C],
) -> MoveOutcome {
    let mut outcome = MoveOutcome::default();

    let original_x = body.position.x;
    body.translate(Vec2::new(displacement.x, 0.0));
    if let Some(idx) = first_overlap(body, obstacles) {
        debug!("x movement {:.2} blocked by obstacle {}", displacement.x, idx);
        body.position.x = original_x;
        outcome.blocked_x = true;
    }

    let original_y = body.position.y;
    body.translate(Vec2::new(0.0, displacement.y));
    if let Some(idx) = first_overlap(body, obstacles) {
        debug!("y movement {:.2} blocked by obstacle {}", displacement.y, idx);
        body.position.y = original_y;
        outcome.blocked_y = true;
    }

    outcome
}

/// Removes and returns the first item of `pickups` that overlaps `body`.
///
/// At most one pickup is consumed per call even if several overlap. The
/// remaining pickups keep their relative order.
pub fn consume_first_pickup<C: Collider>(body: &Body, pickups: &mut Vec<C>) -> Option<C> {
    let idx = first_overlap(body, pickups)?;
    debug!("pickup {} consumed, {} left", idx, pickups.len() - 1);
    Some(pickups.remove(idx))
}
