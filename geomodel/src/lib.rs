mod deprecation;
mod error;
mod model;

pub use error::*;
pub use model::*;
