//! Common types shared across the generator core.

/// Error taxonomy and the crate-wide [`Result`](error::Result) alias.
pub mod error;

pub use error::{GenError, Result};
