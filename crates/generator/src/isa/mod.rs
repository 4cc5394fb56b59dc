//! Instruction Set Architecture (ISA) Definitions.
//!
//! Static instruction attributes and the mutable instruction value type,
//! organized as:
//!
//! * `abi`: Application Binary Interface (ABI) register names.
//! * `defs`: format, category, group, and related classification enums.
//! * `name`: the instruction name identifier and its spellings.
//! * `tables`: the static per-name descriptor registry.
//! * `encoding`: opcode and function-code field lookups.
//! * `instruction`: the randomizable instruction instance and its
//!   assembly rendering.

/// Application Binary Interface (ABI) register name mappings.
pub mod abi;

/// Classification enums shared across the generator.
pub mod defs;

/// Encoding-field lookups (opcode, `funct3`, `funct7`).
pub mod encoding;

/// The mutable instruction instance and assembly rendering.
pub mod instruction;

/// Instruction name identifiers.
pub mod name;

/// Static per-name descriptor registry.
pub mod tables;

pub use abi::Reg;
pub use defs::{Category, Format, Group, Hazard, ImmKind, PrivilegedMode};
pub use instruction::{Instruction, PseudoOp};
pub use name::InstrName;
pub use tables::{DESCRIPTORS, Descriptor, descriptor};
