mod error;
mod grade;
mod input;
mod percentile;
mod rounding;

pub use error::*;
pub use grade::*;
pub use input::*;
pub use percentile::*;
pub use rounding::*;
