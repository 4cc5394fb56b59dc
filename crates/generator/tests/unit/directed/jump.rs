//! Label-threaded jump chains.

use std::collections::HashSet;

use rvgen_core::directed::jump::JalStream;
use rvgen_core::isa::Reg;
use rvgen_core::isa::name::InstrName;

use crate::common::{catalog, config, rng_with};

#[test]
fn chain_length_is_jumps_plus_entry_and_exit() {
    let cfg = config();
    let cat = catalog(&cfg);
    let mut rng = rng_with(1);
    let mut stream = JalStream::new(&cat, &cfg);
    stream.num_of_jump_instr = 12;
    stream.randomize(&mut rng).unwrap();
    assert_eq!(stream.rand.stream.len(), 14);
}

#[test]
fn the_entry_jump_links_through_ra() {
    let cfg = config();
    let cat = catalog(&cfg);
    let mut rng = rng_with(2);
    let mut stream = JalStream::new(&cat, &cfg);
    stream.num_of_jump_instr = 8;
    stream.rand.stream.label = String::from("jal_chain_0");
    stream.randomize(&mut rng).unwrap();
    let first = &stream.rand.stream.instrs[0];
    assert_eq!(first.name, InstrName::Jal);
    assert_eq!(first.rd, Reg::Ra);
    assert!(first.imm_str.ends_with('f'));
    assert_eq!(first.label, "jal_chain_0");
}

#[test]
fn every_jump_is_labeled_and_targets_another_label() {
    let cfg = config();
    let cat = catalog(&cfg);
    let n = 10usize;
    for seed in 0..10 {
        let mut rng = rng_with(seed);
        let mut stream = JalStream::new(&cat, &cfg);
        stream.num_of_jump_instr = n;
        stream.randomize(&mut rng).unwrap();
        let instrs = &stream.rand.stream.instrs;
        assert!(instrs.iter().all(|instr| instr.atomic && instr.has_label));
        // The jumps sit between the entry jump and the terminator, each
        // carrying its numeric label in order.
        let mut targets = HashSet::new();
        for (i, jump) in instrs[1..=n].iter().enumerate() {
            assert_eq!(jump.name, InstrName::Jal);
            assert_eq!(jump.label, i.to_string());
            let target = &jump.imm_str;
            let (index, direction) = target.split_at(target.len() - 1);
            let index: usize = index.parse().unwrap();
            assert!(index <= n);
            assert!(direction == "f" || direction == "b");
            assert!(targets.insert(index), "duplicate jump target {target}");
        }
        // Exactly one jump falls through to the terminator.
        assert!(targets.contains(&n));
        assert_eq!(instrs[n + 1].label, n.to_string());
    }
}

#[test]
fn jump_destinations_avoid_reserved_registers() {
    let mut cfg = config();
    cfg.regs.reserved_regs = vec![Reg::Sp, Reg::Gp, Reg::Tp];
    let cat = catalog(&cfg);
    let mut rng = rng_with(4);
    let mut stream = JalStream::new(&cat, &cfg);
    stream.num_of_jump_instr = 20;
    stream.randomize(&mut rng).unwrap();
    for jump in &stream.rand.stream.instrs[1..=20] {
        assert!(!cfg.regs.reserved_regs.contains(&jump.rd));
    }
}

#[test]
fn drawn_chain_length_stays_in_range() {
    let cfg = config();
    let cat = catalog(&cfg);
    for seed in 0..10 {
        let mut rng = rng_with(seed);
        let mut stream = JalStream::new(&cat, &cfg);
        stream.randomize(&mut rng).unwrap();
        assert!((12..=32).contains(&stream.rand.stream.len()));
    }
}
