//! # Unit Components
//!
//! This module organizes the unit tests by the crate modules they cover:
//! the instruction model, the catalog, stream mechanics, directed
//! sequences, hazard classification, and configuration.




/// Unit tests for register and memory hazard classification.
pub mod hazard;

/// Unit tests for the instruction model (immediates, operands,
/// rendering, encoding fields).
pub mod isa;
