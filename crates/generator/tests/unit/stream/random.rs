//! The catalog-driven randomized stream.

use rvgen_core::isa::Reg;
use rvgen_core::isa::defs::Category;
use rvgen_core::stream::RandStream;

use crate::common::{catalog, config, rng, rng_with};

#[test]
fn gen_instr_fills_the_requested_count() {
    let cfg = config();
    let cat = catalog(&cfg);
    let mut rng = rng();
    let mut stream = RandStream::new(&cat, &cfg);
    stream.gen_instr(20, true, true, false, &mut rng).unwrap();
    // Branches are excluded, so no trailing trim can occur.
    assert_eq!(stream.stream.len(), 20);
    for instr in &stream.stream.instrs {
        assert!(!matches!(
            instr.category,
            Category::Branch | Category::Load | Category::Store
        ));
    }
}

#[test]
fn gen_instr_never_ends_on_a_branch() {
    let cfg = config();
    let cat = catalog(&cfg);
    for seed in 0..20 {
        let mut rng = rng_with(seed);
        let mut stream = RandStream::new(&cat, &cfg);
        stream.gen_instr(15, false, false, false, &mut rng).unwrap();
        if let Some(last) = stream.stream.instrs.last() {
            assert_ne!(last.category, Category::Branch);
        }
    }
}

#[test]
fn operands_stay_inside_the_configured_pool() {
    let mut cfg = config();
    cfg.regs.reserved_regs = vec![Reg::T0, Reg::T1];
    let cat = catalog(&cfg);
    let mut rng = rng();
    let mut stream = RandStream::new(&cat, &cfg);
    stream.stream.reserved_rd.push(Reg::A0);
    stream.gen_instr(30, true, true, false, &mut rng).unwrap();
    for instr in &stream.stream.instrs {
        if instr.has_rd {
            assert!(!cfg.regs.reserved_regs.contains(&instr.rd), "reserved rd");
            assert_ne!(instr.rd, Reg::A0, "claimed rd");
        }
        if instr.has_rs1 {
            assert!(cfg.regs.gpr_pool.contains(&instr.rs1) || instr.rs1 == Reg::Sp);
        }
    }
}

#[test]
fn restricted_register_sets_apply_to_every_operand() {
    let cfg = config();
    let cat = catalog(&cfg);
    let mut rng = rng();
    let mut stream = RandStream::new(&cat, &cfg);
    let allowed = vec![Reg::S0, Reg::S1, Reg::A0, Reg::A1];
    stream.stream.avail_regs = allowed.clone();
    stream.gen_instr(30, true, true, false, &mut rng).unwrap();
    for instr in &stream.stream.instrs {
        if instr.has_rd && instr.rd != Reg::Sp {
            assert!(allowed.contains(&instr.rd));
        }
        if instr.has_rs1 {
            assert!(allowed.contains(&instr.rs1));
        }
        if instr.has_rs2 {
            assert!(allowed.contains(&instr.rs2));
        }
    }
}

#[test]
fn csr_instructions_use_the_scratch_csr() {
    let cfg = config();
    let cat = catalog(&cfg);
    let mut rng = rng();
    let mut stream = RandStream::new(&cat, &cfg);
    stream.gen_instr(60, true, true, false, &mut rng).unwrap();
    for instr in &stream.stream.instrs {
        if instr.category == Category::Csr {
            assert_eq!(instr.csr, 0x340);
        }
    }
}
