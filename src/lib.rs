pub mod types;
pub use self::types::*;
pub mod util;
pub use self::util::*;
pub mod matrix;
pub mod ops;
pub mod gauss;
