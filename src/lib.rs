
// The #[non_exhaustive] attribute applies at the crate-level, and I
// want module-level restrictions, which are far stricter.
#![allow(clippy::manual_non_exhaustive)]

pub mod catalog;
pub mod config;
pub mod error;
pub mod units;
pub mod util;

pub use config::EngineConfig;
pub use error::Error;
