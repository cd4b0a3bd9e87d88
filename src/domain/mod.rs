pub mod model;
pub mod training;
pub mod transform;

pub use model::*;
pub use training::*;
pub use transform::*;
