//! Register and memory hazard classification.

use rvgen_core::hazard::{mem_hazard, reg_hazard};
use rvgen_core::isa::Reg;
use rvgen_core::isa::defs::Hazard;
use rvgen_core::isa::name::InstrName;

use crate::common::instr;

#[test]
fn read_after_write_on_either_source() {
    let mut prev = instr(InstrName::Add);
    prev.rd = Reg::A0;
    prev.rs1 = Reg::A1;
    prev.rs2 = Reg::A2;
    let mut cur = instr(InstrName::Add);
    cur.rd = Reg::A3;
    cur.rs1 = Reg::A0;
    cur.rs2 = Reg::A4;
    assert_eq!(reg_hazard(&prev, &cur), Hazard::Raw);
    cur.rs1 = Reg::A4;
    cur.rs2 = Reg::A0;
    assert_eq!(reg_hazard(&prev, &cur), Hazard::Raw);
}

#[test]
fn write_after_write_on_the_destination() {
    let mut prev = instr(InstrName::Add);
    prev.rd = Reg::A0;
    prev.rs1 = Reg::A1;
    prev.rs2 = Reg::A2;
    let mut cur = instr(InstrName::Add);
    cur.rd = Reg::A0;
    cur.rs1 = Reg::A3;
    cur.rs2 = Reg::A4;
    assert_eq!(reg_hazard(&prev, &cur), Hazard::Waw);
}

#[test]
fn write_after_read_on_a_previous_source() {
    let mut prev = instr(InstrName::Add);
    prev.rd = Reg::A0;
    prev.rs1 = Reg::A1;
    prev.rs2 = Reg::A2;
    let mut cur = instr(InstrName::Add);
    cur.rd = Reg::A1;
    cur.rs1 = Reg::A3;
    cur.rs2 = Reg::A4;
    assert_eq!(reg_hazard(&prev, &cur), Hazard::War);
}

#[test]
fn raw_outranks_waw_and_war() {
    // cur both reads and rewrites prev's destination.
    let mut prev = instr(InstrName::Add);
    prev.rd = Reg::A0;
    prev.rs1 = Reg::A1;
    prev.rs2 = Reg::A2;
    let mut cur = instr(InstrName::Add);
    cur.rd = Reg::A0;
    cur.rs1 = Reg::A0;
    cur.rs2 = Reg::A3;
    assert_eq!(reg_hazard(&prev, &cur), Hazard::Raw);
}

#[test]
fn independent_instructions_have_no_register_hazard() {
    let mut prev = instr(InstrName::Add);
    prev.rd = Reg::A0;
    prev.rs1 = Reg::A1;
    prev.rs2 = Reg::A2;
    let mut cur = instr(InstrName::Add);
    cur.rd = Reg::A3;
    cur.rs1 = Reg::A4;
    cur.rs2 = Reg::A5;
    assert_eq!(reg_hazard(&prev, &cur), Hazard::None);
}

#[test]
fn absent_operands_do_not_alias() {
    // Stores have no destination, so a store then a read of the store's
    // data register is not read-after-write.
    let mut prev = instr(InstrName::Sw);
    prev.rs1 = Reg::A0;
    prev.rs2 = Reg::A1;
    let mut cur = instr(InstrName::Add);
    cur.rd = Reg::A3;
    cur.rs1 = Reg::A1;
    cur.rs2 = Reg::A2;
    assert_eq!(reg_hazard(&prev, &cur), Hazard::None);
}

fn access(name: InstrName, rs1: Reg, imm: u32) -> rvgen_core::isa::instruction::Instruction {
    let mut access = instr(name);
    access.rs1 = rs1;
    access.imm = imm;
    access
}

#[test]
fn memory_hazards_require_the_same_location() {
    let store = access(InstrName::Sw, Reg::A0, 16);
    let load = access(InstrName::Lw, Reg::A0, 16);
    assert_eq!(mem_hazard(&store, &load), Hazard::Raw);
    assert_eq!(mem_hazard(&store, &store), Hazard::Waw);
    assert_eq!(mem_hazard(&load, &store), Hazard::War);
    assert_eq!(mem_hazard(&load, &load), Hazard::None);
}

#[test]
fn different_offsets_or_bases_do_not_conflict() {
    let store = access(InstrName::Sw, Reg::A0, 16);
    let far_load = access(InstrName::Lw, Reg::A0, 24);
    assert_eq!(mem_hazard(&store, &far_load), Hazard::None);
    let other_base = access(InstrName::Lw, Reg::A1, 16);
    assert_eq!(mem_hazard(&store, &other_base), Hazard::None);
}

#[test]
fn non_memory_instructions_never_conflict() {
    let store = access(InstrName::Sw, Reg::A0, 16);
    let mut add = instr(InstrName::Add);
    add.rs1 = Reg::A0;
    assert_eq!(mem_hazard(&store, &add), Hazard::None);
    assert_eq!(mem_hazard(&add, &store), Hazard::None);
}
