//! Instruction stream containers.
//!
//! * `base`: the ordered instruction sequence with insertion, splicing,
//!   mixing, and text rendering.
//! * `rand`: the randomized stream that fills itself from the catalog.

/// The ordered instruction sequence and its structural operations.
pub mod base;

/// Catalog-driven randomized stream.
pub mod rand;

pub use base::InstrStream;
pub use self::rand::RandStream;
