pub mod gauge;
pub mod table;
pub mod target;
pub mod template;
pub mod utils;

pub use gauge::*;
pub use table::*;
pub use target::*;
pub use template::*;
pub use utils::*;
