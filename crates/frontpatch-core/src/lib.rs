pub mod error;
pub mod types;

pub use error::{FrontpatchError, FrontpatchResult};
pub use types::Marker;
