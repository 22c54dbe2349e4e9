//! Item system: catalog types and the shop listing.

pub mod data;
pub mod types;

pub use data::*;
pub use types::*;
