//! Describes how an entity should be drawn. The library never draws anything
//! itself; renderers translate these into their own primitives.

use serde::{Deserialize, Serialize};

/// An 8-bit RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const WHITE: Rgba = Rgba::new(255, 255, 255, 255);
    pub const GREEN: Rgba = Rgba::new(0, 255, 0, 255);
    pub const RED: Rgba = Rgba::new(255, 0, 0, 255);
    pub const YELLOW: Rgba = Rgba::new(255, 255, 0, 255);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Rgba { r, g, b, a }
    }
}

/// Visual representation owned by an entity alongside its body.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Visual {
    /// Unfilled rectangle matching the body's bounding box.
    Outline { color: Rgba, thickness: f32 },
    /// Filled circle centred on the body's position.
    FilledCircle { color: Rgba, radius: f32 },
}

impl Visual {
    /// Player outline.
    pub const PLAYER: Visual = Visual::Outline {
        color: Rgba::GREEN,
        thickness: 2.0,
    };
    /// Wall outline.
    pub const WALL: Visual = Visual::Outline {
        color: Rgba::WHITE,
        thickness: 2.0,
    };

    /// Pickup disc of the given radius.
    pub fn pickup(radius: f32) -> Visual {
        Visual::FilledCircle {
            color: Rgba::YELLOW,
            radius: radius.max(0.0),
        }
    }

    pub fn color(&self) -> Rgba {
        match *self {
            Visual::Outline { color, .. } | Visual::FilledCircle { color, .. } => color,
        }
    }

    /// Same visual with its color replaced, used for overlap highlighting.
    pub fn with_color(self, color: Rgba) -> Visual {
        match self {
            Visual::Outline { thickness, .. } => Visual::Outline { color, thickness },
            Visual::FilledCircle { radius, .. } => Visual::FilledCircle { color, radius },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pickup_radius_clamped() {
        assert_eq!(
            Visual::pickup(-3.0),
            Visual::FilledCircle {
                color: Rgba::YELLOW,
                radius: 0.0
            }
        );
    }

    #[test]
    fn test_with_color_keeps_shape() {
        let highlighted = Visual::WALL.with_color(Rgba::RED);
        assert_eq!(highlighted.color(), Rgba::RED);
        assert_eq!(
            highlighted,
            Visual::Outline {
                color: Rgba::RED,
                thickness: 2.0
            }
        );
        assert_eq!(Visual::pickup(8.0).with_color(Rgba::WHITE).color(), Rgba::WHITE);
    }
}
