pub mod collision;
pub mod common;
pub mod config;
pub mod input;
pub mod math;
pub mod objects;
pub mod world;

// Re-export key types for easier use
pub use collision::{
    test_aabb_overlap, test_aabb_overlap_with, Axis, BoundingBox, CollisionManifold, NormalPolicy,
};
pub use common::{Rgba, Visual};
pub use config::{ConfigError, DemoVariant, SceneConfig, WindowConfig};
pub use input::MovementIntent;
pub use math::vec2::Vec2;
pub use objects::Body;
pub use world::{consume_first_pickup, move_and_collide, Entity, MoveOutcome, Scene, StepReport};
