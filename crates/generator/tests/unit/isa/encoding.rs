//! Encoding-field lookup checks against the base-ISA opcode map.

use rstest::rstest;

use rvgen_core::isa::encoding::{funct3, funct7, opcode};
use rvgen_core::isa::name::InstrName;

#[rstest]
#[case(InstrName::Lui, 0x37)]
#[case(InstrName::Auipc, 0x17)]
#[case(InstrName::Jal, 0x6F)]
#[case(InstrName::Jalr, 0x67)]
#[case(InstrName::Beq, 0x63)]
#[case(InstrName::Bgeu, 0x63)]
#[case(InstrName::Lw, 0x03)]
#[case(InstrName::Ld, 0x03)]
#[case(InstrName::Sw, 0x23)]
#[case(InstrName::Addi, 0x13)]
#[case(InstrName::Add, 0x33)]
#[case(InstrName::Mul, 0x33)]
#[case(InstrName::Addiw, 0x1B)]
#[case(InstrName::Addw, 0x3B)]
#[case(InstrName::Fence, 0x0F)]
#[case(InstrName::Ecall, 0x73)]
#[case(InstrName::Csrrw, 0x73)]
fn major_opcodes(#[case] name: InstrName, #[case] expected: u8) {
    assert_eq!(opcode(name).unwrap(), expected, "{name}: opcode");
}

#[rstest]
#[case(InstrName::Addi, 0b000)]
#[case(InstrName::Beq, 0b000)]
#[case(InstrName::Bne, 0b001)]
#[case(InstrName::Lw, 0b010)]
#[case(InstrName::Sw, 0b010)]
#[case(InstrName::Sltiu, 0b011)]
#[case(InstrName::Xori, 0b100)]
#[case(InstrName::Srai, 0b101)]
#[case(InstrName::Mulh, 0b001)]
#[case(InstrName::Mulhsu, 0b010)]
#[case(InstrName::Csrrw, 0b001)]
#[case(InstrName::Csrrci, 0b111)]
fn funct3_fields(#[case] name: InstrName, #[case] expected: u8) {
    assert_eq!(funct3(name).unwrap(), expected, "{name}: funct3");
}

#[rstest]
#[case(InstrName::Add, 0b000_0000)]
#[case(InstrName::Sub, 0b010_0000)]
#[case(InstrName::Srai, 0b010_0000)]
#[case(InstrName::Sra, 0b010_0000)]
#[case(InstrName::Sraw, 0b010_0000)]
#[case(InstrName::Mul, 0b000_0001)]
#[case(InstrName::Remuw, 0b000_0001)]
#[case(InstrName::Sret, 0b000_1000)]
#[case(InstrName::Wfi, 0b000_1000)]
#[case(InstrName::Mret, 0b001_1000)]
#[case(InstrName::Dret, 0b011_1101)]
#[case(InstrName::SfenceVma, 0b000_1001)]
fn funct7_fields(#[case] name: InstrName, #[case] expected: u8) {
    assert_eq!(funct7(name).unwrap(), expected, "{name}: funct7");
}

#[test]
fn compressed_names_have_no_base_encoding() {
    assert!(opcode(InstrName::CAddi).is_err());
    assert!(funct3(InstrName::CLw).is_err());
    assert!(funct7(InstrName::CJ).is_err());
}

#[test]
fn formats_without_the_field_are_errors() {
    assert!(funct3(InstrName::Lui).is_err());
    assert!(funct3(InstrName::Jal).is_err());
    assert!(funct7(InstrName::Addi).is_err());
}
