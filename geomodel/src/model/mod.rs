mod coordinates;
mod feature;
mod fields;
mod geometry;
mod record;
mod value;

pub use coordinates::*;
pub use feature::*;
pub use fields::*;
pub use geometry::*;
pub use record::*;
pub use value::*;
