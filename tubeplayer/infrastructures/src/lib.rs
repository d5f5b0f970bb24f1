pub mod boundaries;
pub mod gateways;
pub(crate) mod utils;

pub use crate::utils::aliases::Fallible;
pub use crate::utils::aliases::MaybeOwnedPath;
