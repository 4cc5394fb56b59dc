//! Dependency classification between adjacent instructions.
//!
//! Classifies the register and memory dependency a newly emitted
//! instruction forms with its predecessor. Consumers feed this into
//! coverage sampling and the hazard-injection load/store stream uses the
//! same definitions when forcing address reuse.

use crate::isa::defs::{Category, Hazard};
use crate::isa::instruction::Instruction;

/// Classifies the register dependency of `cur` on `prev`.
///
/// Read-after-write wins over write-after-write, which wins over
/// write-after-read, matching pipeline severity order.
#[must_use]
pub fn reg_hazard(prev: &Instruction, cur: &Instruction) -> Hazard {
    if prev.has_rd
        && ((cur.has_rs1 && cur.rs1 == prev.rd) || (cur.has_rs2 && cur.rs2 == prev.rd))
    {
        return Hazard::Raw;
    }
    if prev.has_rd && cur.has_rd && cur.rd == prev.rd {
        return Hazard::Waw;
    }
    if cur.has_rd
        && ((prev.has_rs1 && prev.rs1 == cur.rd) || (prev.has_rs2 && prev.rs2 == cur.rd))
    {
        return Hazard::War;
    }
    Hazard::None
}

/// Classifies the memory dependency of `cur` on `prev`.
///
/// Both instructions must be loads or stores; addresses compare by base
/// register plus offset, so two accesses conflict only when they name the
/// same location the same way.
#[must_use]
pub fn mem_hazard(prev: &Instruction, cur: &Instruction) -> Hazard {
    let prev_mem = matches!(prev.category, Category::Load | Category::Store);
    let cur_mem = matches!(cur.category, Category::Load | Category::Store);
    if !prev_mem || !cur_mem || prev.rs1 != cur.rs1 || prev.imm != cur.imm {
        return Hazard::None;
    }
    match (prev.category, cur.category) {
        (Category::Store, Category::Load) => Hazard::Raw,
        (Category::Store, Category::Store) => Hazard::Waw,
        (Category::Load, Category::Store) => Hazard::War,
        _ => Hazard::None,
    }
}
