pub mod distance;
pub mod snapshot;
pub mod validation;

pub use distance::*;
pub use snapshot::*;
pub use validation::*;
