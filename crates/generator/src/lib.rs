//! Randomized RISC-V instruction stream generator library.
//!
//! This crate builds randomized assembly test programs with the following:
//! 1. **ISA:** Instruction model, ABI registers, formats, groups, and encoding fields.
//! 2. **Catalog:** Configuration-filtered instruction templates and weighted selection.
//! 3. **Streams:** Label-aware instruction sequences with atomic-region mixing.
//! 4. **Directed:** Load/store, multi-page, jump-chain, and numeric corner workloads.
//! 5. **Hazards:** Register and memory dependency classification between instructions.

/// Catalog of enabled instructions (filters, templates, weighted selection).
pub mod catalog;
/// Common types (errors).
pub mod common;
/// Generator configuration (defaults, ISA/program/register/memory sections).
pub mod config;
/// Directed stream library (load/store, multi-page, jumps, numeric corners).
pub mod directed;
/// Register and memory hazard classification.
pub mod hazard;
/// Instruction set (ABI, definitions, encoding, instruction model, tables).
pub mod isa;
/// Instruction streams (base sequence operations, randomized streams).
pub mod stream;

/// Catalog of enabled instructions; construct with `Catalog::build`.
pub use crate::catalog::Catalog;
/// Error type for all fallible generator operations.
pub use crate::common::GenError;
/// Root configuration type; use `Config::default()` or deserialize from JSON.
pub use crate::config::Config;
