//! The load/store stream family.

use rvgen_core::isa::Reg;
use rvgen_core::isa::defs::Category;
use rvgen_core::isa::instruction::PseudoOp;
use rvgen_core::directed::load_store::{LoadStoreStream, Profile};

use crate::common::{catalog, config, rng_with};

#[test]
fn single_profile_emits_exactly_one_access() {
    let cfg = config();
    let cat = catalog(&cfg);
    for seed in 0..10 {
        let mut rng = rng_with(seed);
        let mut stream = LoadStoreStream::new(&cat, &cfg, Profile::Single);
        stream.randomize(&mut rng).unwrap();
        assert_eq!(stream.load_store_instr.len(), 1);
        // One la setup, one access, up to four filler instructions.
        assert!((2..=6).contains(&stream.mem.rand.stream.len()));
    }
}

#[test]
fn every_access_shares_the_base_register() {
    let cfg = config();
    let cat = catalog(&cfg);
    let mut rng = rng_with(7);
    let mut stream = LoadStoreStream::new(&cat, &cfg, Profile::Rand);
    stream.randomize(&mut rng).unwrap();
    assert!((10..=30).contains(&stream.load_store_instr.len()));
    for access in &stream.load_store_instr {
        assert_eq!(access.rs1, stream.rs1);
        assert!(matches!(access.category, Category::Load | Category::Store));
        let offset = access.imm as i32;
        assert!((-2048..2048).contains(&offset), "offset {offset} out of range");
    }
}

#[test]
fn stress_profile_honors_the_count_bounds() {
    let cfg = config();
    let cat = catalog(&cfg);
    for seed in 0..10 {
        let mut rng = rng_with(seed);
        let mut stream = LoadStoreStream::new(&cat, &cfg, Profile::Stress);
        stream.min_instr_cnt = 5;
        stream.max_instr_cnt = 8;
        stream.randomize(&mut rng).unwrap();
        assert!((5..=8).contains(&stream.load_store_instr.len()));
        // Stress adds no filler: the stream is the accesses plus the la.
        assert_eq!(
            stream.mem.rand.stream.len(),
            stream.load_store_instr.len() + 1
        );
    }
}

#[test]
fn the_stream_starts_with_the_base_address_setup() {
    let cfg = config();
    let cat = catalog(&cfg);
    let mut rng = rng_with(3);
    let mut stream = LoadStoreStream::new(&cat, &cfg, Profile::Stress);
    stream.randomize(&mut rng).unwrap();
    let first = &stream.mem.rand.stream.instrs[0];
    match &first.pseudo {
        Some(PseudoOp::La { symbol }) => {
            assert!(symbol.starts_with("region_"), "unexpected symbol {symbol}");
            assert!(symbol.contains('+'));
        }
        other => panic!("stream does not start with la: {other:?}"),
    }
    assert_eq!(first.rd, stream.rs1);
    assert_eq!(first.comment, "Start load_store_stress");
}

#[test]
fn finished_streams_are_atomic_with_boundary_comments() {
    let cfg = config();
    let cat = catalog(&cfg);
    let mut rng = rng_with(11);
    let mut stream = LoadStoreStream::new(&cat, &cfg, Profile::Hazard);
    stream.randomize(&mut rng).unwrap();
    let instrs = &stream.mem.rand.stream.instrs;
    assert!(instrs.iter().all(|instr| instr.atomic));
    assert!(instrs.iter().all(|instr| !instr.has_label));
    assert_eq!(instrs[0].comment, "Start load_store_hazard");
    assert_eq!(
        instrs[instrs.len() - 1].comment,
        "End load_store_hazard"
    );
}

#[test]
fn fixed_base_register_and_page_are_respected() {
    let cfg = config();
    let cat = catalog(&cfg);
    let mut rng = rng_with(5);
    let mut stream = LoadStoreStream::new(&cat, &cfg, Profile::Stress);
    stream.fixed_rs1 = Some(Reg::S4);
    stream.fixed_page = Some(1);
    stream.randomize(&mut rng).unwrap();
    assert_eq!(stream.rs1, Reg::S4);
    assert_eq!(stream.data_page_id, 1);
    let first = &stream.mem.rand.stream.instrs[0];
    match &first.pseudo {
        Some(PseudoOp::La { symbol }) => assert!(symbol.starts_with("region_1+")),
        other => panic!("stream does not start with la: {other:?}"),
    }
}

#[test]
fn shared_memory_profile_targets_the_amo_region() {
    let cfg = config();
    let cat = catalog(&cfg);
    let mut rng = rng_with(9);
    let mut stream = LoadStoreStream::new(&cat, &cfg, Profile::SharedMem);
    stream.min_instr_cnt = 5;
    stream.max_instr_cnt = 8;
    stream.randomize(&mut rng).unwrap();
    let first = &stream.mem.rand.stream.instrs[0];
    match &first.pseudo {
        Some(PseudoOp::La { symbol }) => assert!(symbol.starts_with("amo_0+")),
        other => panic!("stream does not start with la: {other:?}"),
    }
}
