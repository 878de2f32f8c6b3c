pub mod aabb;
pub mod detection;
pub mod manifold;

// Re-export key types
pub use aabb::BoundingBox;
pub use detection::*;
pub use manifold::*;
