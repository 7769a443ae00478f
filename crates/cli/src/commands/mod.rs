pub mod catalog;
pub mod recommend;
pub mod setup;
pub mod sweep;
pub mod util;

pub use catalog::*;
pub use recommend::*;
pub use setup::*;
pub use sweep::*;
pub use util::*;
