pub mod movement;
pub mod scene;

pub use movement::{consume_first_pickup, first_overlap, move_and_collide, Collider, MoveOutcome};
pub use scene::{Entity, Scene, StepReport, DEFAULT_SPEED};
