//! Base stream insertion, splicing, mixing, and rendering.

use pretty_assertions::assert_eq;

use rvgen_core::common::GenError;
use rvgen_core::isa::Reg;
use rvgen_core::isa::instruction::Instruction;
use rvgen_core::isa::name::InstrName;
use rvgen_core::stream::InstrStream;

use crate::common::{instr, rng, rng_with};

fn atomic(name: InstrName) -> Instruction {
    let mut instr = instr(name);
    instr.atomic = true;
    instr
}

#[test]
fn insert_into_empty_stream_appends() {
    let mut stream = InstrStream::default();
    let mut rng = rng();
    stream.insert_instr(instr(InstrName::Addi), &mut rng);
    assert_eq!(stream.len(), 1);
}

#[test]
fn random_insertion_never_splits_an_atomic_block() {
    let mut rng = rng();
    for _ in 0..32 {
        let mut stream = InstrStream::default();
        stream.push(atomic(InstrName::Lui));
        stream.push(atomic(InstrName::Add));
        stream.push(atomic(InstrName::Sub));
        stream.insert_instr(instr(InstrName::Addi), &mut rng);
        assert_eq!(stream.len(), 4);
        // The only legal position is past the atomic run.
        assert_eq!(stream.instrs[3].name, InstrName::Addi);
    }
}

#[test]
fn placed_insertion_checks_bounds() {
    let mut stream = InstrStream::default();
    stream.push(instr(InstrName::Add));
    assert!(stream.insert_instr_at(1, instr(InstrName::Sub)).is_ok());
    assert!(matches!(
        stream.insert_instr_at(5, instr(InstrName::Addi)),
        Err(GenError::InvalidIndex { idx: 5, len: 2 })
    ));
}

#[test]
fn splice_without_replace_keeps_the_original() {
    let mut stream = InstrStream::default();
    let mut rng = rng();
    stream.push(instr(InstrName::Add));
    stream.push(instr(InstrName::Sub));
    stream
        .insert_stream(
            vec![instr(InstrName::Xor), instr(InstrName::Or)],
            Some(1),
            false,
            &mut rng,
        )
        .unwrap();
    let names: Vec<InstrName> = stream.instrs.iter().map(|i| i.name).collect();
    assert_eq!(
        names,
        vec![
            InstrName::Add,
            InstrName::Xor,
            InstrName::Or,
            InstrName::Sub
        ]
    );
}

#[test]
fn splice_with_replace_transfers_the_label() {
    let mut stream = InstrStream::default();
    let mut rng = rng();
    stream.push(instr(InstrName::Add));
    let mut labeled = instr(InstrName::Sub);
    labeled.label = String::from("loop_head");
    labeled.has_label = true;
    stream.push(labeled);
    stream
        .insert_stream(vec![instr(InstrName::Xor)], Some(1), true, &mut rng)
        .unwrap();
    assert_eq!(stream.len(), 2);
    assert_eq!(stream.instrs[1].name, InstrName::Xor);
    assert_eq!(stream.instrs[1].label, "loop_head");
    assert!(stream.instrs[1].has_label);
}

#[test]
fn splice_fails_when_every_position_is_atomic() {
    let mut stream = InstrStream::default();
    let mut rng = rng();
    stream.push(atomic(InstrName::Add));
    stream.push(atomic(InstrName::Sub));
    assert!(matches!(
        stream.insert_stream(vec![instr(InstrName::Xor)], None, false, &mut rng),
        Err(GenError::EmptySelection { .. })
    ));
}

#[test]
fn splice_falls_back_to_a_scan_when_random_picks_hit_atomics() {
    // One legal slot at the front, buried under a long atomic run:
    // random picks almost always land on an atomic instruction, but
    // insertion must still find the slot.
    for seed in 0..100 {
        let mut stream = InstrStream::default();
        let mut rng = rng_with(seed);
        stream.push(instr(InstrName::Add));
        for _ in 0..50 {
            stream.push(atomic(InstrName::Sub));
        }
        stream
            .insert_stream(vec![instr(InstrName::Xor)], None, false, &mut rng)
            .unwrap();
        assert_eq!(stream.len(), 52);
        assert_eq!(stream.instrs[0].name, InstrName::Xor);
    }
}

#[test]
fn contained_mix_pins_the_boundaries() {
    let mut rng = rng();
    for _ in 0..16 {
        let mut stream = InstrStream::default();
        for _ in 0..4 {
            stream.push(instr(InstrName::Add));
        }
        let mixed = vec![
            instr(InstrName::Lui),
            instr(InstrName::Xor),
            instr(InstrName::Sub),
        ];
        stream.mix_stream(mixed, true, &mut rng).unwrap();
        assert_eq!(stream.len(), 7);
        assert_eq!(stream.instrs[0].name, InstrName::Lui);
        assert_eq!(stream.instrs[6].name, InstrName::Sub);
    }
}

#[test]
fn mix_preserves_the_relative_order_of_both_streams() {
    let mut rng = rng();
    for _ in 0..16 {
        let mut stream = InstrStream::default();
        stream.push(instr(InstrName::Add));
        stream.push(instr(InstrName::Sub));
        stream
            .mix_stream(vec![instr(InstrName::Xor), instr(InstrName::Or)], false, &mut rng)
            .unwrap();
        let original: Vec<usize> = stream
            .instrs
            .iter()
            .enumerate()
            .filter(|(_, i)| matches!(i.name, InstrName::Add | InstrName::Sub))
            .map(|(idx, _)| idx)
            .collect();
        let mixed: Vec<usize> = stream
            .instrs
            .iter()
            .enumerate()
            .filter(|(_, i)| matches!(i.name, InstrName::Xor | InstrName::Or))
            .map(|(idx, _)| idx)
            .collect();
        assert_eq!(stream.instrs[original[0]].name, InstrName::Add);
        assert_eq!(stream.instrs[original[1]].name, InstrName::Sub);
        assert_eq!(stream.instrs[mixed[0]].name, InstrName::Xor);
        assert_eq!(stream.instrs[mixed[1]].name, InstrName::Or);
    }
}

#[test]
fn render_prefixes_labels_and_indents_the_rest() {
    let mut stream = InstrStream::default();
    let mut labeled = instr(InstrName::Addi);
    labeled.rd = Reg::A0;
    labeled.rs1 = Reg::A0;
    labeled.imm_str = String::from("1");
    labeled.label = String::from("0");
    labeled.has_label = true;
    stream.push(labeled);
    let mut plain = instr(InstrName::Add);
    plain.rd = Reg::A1;
    plain.rs1 = Reg::A2;
    plain.rs2 = Reg::A3;
    stream.push(plain);
    let lines = stream.render();
    assert_eq!(lines[0], "0: addi        a0, a0, 1");
    assert_eq!(lines[1], "    add         a1, a2, a3");
}
