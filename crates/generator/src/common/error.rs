//! Generation error definitions.
//!
//! This module defines the error taxonomy for the generator core. It provides:
//! 1. **Fatal Conditions:** Empty selection pools, unknown instruction names,
//!    and unmapped load/store counterparts — all of which abort generation.
//! 2. **Error Handling:** Integration with standard Rust error traits via
//!    `thiserror` for system-level reporting.

use thiserror::Error;

use crate::isa::name::InstrName;

/// Errors that abort a generation pass.
///
/// There is no partial-result recovery: the documented recovery unit is
/// "regenerate the whole test", performed by an external driver loop.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenError {
    /// A selection request found an empty candidate set after filtering.
    ///
    /// Raised by random instruction selection and by per-access load/store
    /// candidate selection when every name has been excluded.
    #[error("cannot generate random instruction: empty selection pool ({context})")]
    EmptySelection {
        /// Description of the selection that failed.
        context: &'static str,
    },

    /// An instruction name was requested from the catalog but has no cached
    /// template, either because it was filtered out by the configuration or
    /// because it was never registered.
    #[error("cannot get instruction {0}")]
    UnknownInstruction(InstrName),

    /// A load instruction has no mapped store counterpart.
    ///
    /// Raised by the random-address stream when pre-initializing load
    /// targets; the correctness of later loads depends on this mapping.
    #[error("unexpected load instruction with no store counterpart: {0}")]
    UnmappedStore(InstrName),

    /// Operand assignment found no usable register after removing reserved
    /// registers from the candidate pool.
    #[error("no usable register for {role} operand")]
    NoUsableRegister {
        /// The operand role being assigned (`"rd"`, `"rs1"`, ...).
        role: &'static str,
    },

    /// A memory-access stream was requested but the configuration supplies
    /// no data page for the selected region class.
    #[error("no data page available for region class {region}")]
    NoDataPage {
        /// Region class (`"mem"`, `"kernel"`, `"amo"`).
        region: &'static str,
    },

    /// An explicit insertion index lies outside the stream.
    #[error("insertion index {idx} out of range for stream of length {len}")]
    InvalidIndex {
        /// Requested index.
        idx: usize,
        /// Current stream length.
        len: usize,
    },
}

/// Convenience alias for results produced by the generation core.
pub type Result<T> = std::result::Result<T, GenError>;
