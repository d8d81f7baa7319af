pub mod error;
pub mod indicators;
pub mod registry;
pub mod traits;
pub mod types;

pub use error::*;
pub use indicators::*;
pub use registry::*;
pub use traits::*;
pub use types::*;
