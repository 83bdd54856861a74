//! Core types for homesense
//!
//! Domain records shared by every other crate, plus the pure parts of the
//! read pipeline: humidity derivation and display formatting.

mod config;
mod constants;
mod display;
mod env_config;
mod error;
mod format;
mod humidity;
mod location;
mod measurement;

pub use config::*;
pub use constants::*;
pub use display::*;
pub use env_config::*;
pub use error::*;
pub use format::*;
pub use humidity::*;
pub use location::*;
pub use measurement::*;
