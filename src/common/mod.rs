pub mod appearance;

pub use appearance::{Rgba, Visual};
