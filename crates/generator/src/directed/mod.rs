//! Directed instruction streams.
//!
//! Directed streams build small, purposeful instruction sequences on top
//! of the randomized stream machinery:
//!
//! * `mem`: data-page selection, base-register setup, and filler hooks
//!   shared by all memory streams.
//! * `load_store`: the load/store family (single, stress, shared-memory,
//!   random, hazard-injection).
//! * `multi_page`: interleaved stress bursts across distinct data pages.
//! * `rand_addr`: loads and stores against an arbitrary unbacked address
//!   window, with store-before-load initialization.
//! * `jump`: a label-threaded chain of unconditional jumps.
//! * `numeric`: integer corner-value initialization followed by random
//!   arithmetic.

use crate::stream::InstrStream;

/// Unconditional jump chains.
pub mod jump;

/// The load/store stream family.
pub mod load_store;

/// Shared memory-stream plumbing.
pub mod mem;

/// Multi-page and region-stress streams.
pub mod multi_page;

/// Integer numeric corner streams.
pub mod numeric;

/// Random-address load/store streams.
pub mod rand_addr;

/// Seals a finished directed sequence.
///
/// Every instruction becomes atomic so later insertions cannot split the
/// sequence, interior labels are cleared, the boundaries are commented
/// with the stream name, and the stream label (when set) moves onto the
/// first instruction.
pub fn finish(stream: &mut InstrStream, name: &str) {
    for instr in &mut stream.instrs {
        instr.has_label = false;
        instr.atomic = true;
    }
    if let Some(first) = stream.instrs.first_mut() {
        first.comment = format!("Start {name}");
    }
    if let Some(last) = stream.instrs.last_mut() {
        last.comment = format!("End {name}");
    }
    if !stream.label.is_empty() {
        if let Some(first) = stream.instrs.first_mut() {
            first.label = stream.label.clone();
            first.has_label = true;
        }
    }
}
