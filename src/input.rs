//! Toolkit-independent movement intent, sampled once per update tick.

use crate::math::vec2::Vec2;

/// Which cardinal directions are currently requested. Screen convention: +Y is down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MovementIntent {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl MovementIntent {
    pub const IDLE: MovementIntent = MovementIntent {
        up: false,
        down: false,
        left: false,
        right: false,
    };

    pub fn is_idle(&self) -> bool {
        *self == Self::IDLE
    }

    /// Combines the requested directions additively and scales by `speed`.
    /// Opposite directions cancel out; diagonals are not normalised.
    pub fn displacement(&self, speed: f64) -> Vec2 {
        let mut movement = Vec2::ZERO;
        if self.up {
            movement.y -= speed;
        }
        if self.down {
            movement.y += speed;
        }
        if self.left {
            movement.x -= speed;
        }
        if self.right {
            movement.x += speed;
        }
        movement
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idle_has_no_displacement() {
        assert!(MovementIntent::default().is_idle());
        assert_eq!(MovementIntent::IDLE.displacement(5.0), Vec2::ZERO);
    }

    #[test]
    fn test_cardinal_directions() {
        let up = MovementIntent { up: true, ..Default::default() };
        let right = MovementIntent { right: true, ..Default::default() };
        assert_eq!(up.displacement(5.0), Vec2::new(0.0, -5.0));
        assert_eq!(right.displacement(5.0), Vec2::new(5.0, 0.0));
        assert!(!up.is_idle());
    }

    #[test]
    fn test_diagonal_is_additive() {
        let intent = MovementIntent {
            down: true,
            left: true,
            ..Default::default()
        };
        assert_eq!(intent.displacement(5.0), Vec2::new(-5.0, 5.0));
    }

    #[test]
    fn test_opposites_cancel() {
        let intent = MovementIntent {
            up: true,
            down: true,
            left: true,
            right: false,
        };
        assert_eq!(intent.displacement(3.0), Vec2::new(-3.0, 0.0));
    }
}
