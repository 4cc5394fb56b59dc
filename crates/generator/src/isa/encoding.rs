//! Encoding-field lookups.
//!
//! Maps instruction names to their major opcode, `funct3`, and `funct7`
//! fields. Only base-format (32-bit) instructions carry these fields;
//! querying a name outside the covered set is an error rather than a
//! silent zero.

use crate::common::{GenError, Result};

use super::name::InstrName;

/// Returns the 7-bit major opcode for `name`.
///
/// # Errors
///
/// Returns [`GenError::UnknownInstruction`] when `name` has no base-format
/// encoding (for example compressed instructions).
pub fn opcode(name: InstrName) -> Result<u8> {
    use InstrName as N;
    let op = match name {
        N::Lui => 0b011_0111,
        N::Auipc => 0b001_0111,
        N::Jal => 0b110_1111,
        N::Jalr => 0b110_0111,
        N::Beq | N::Bne | N::Blt | N::Bge | N::Bltu | N::Bgeu => 0b110_0011,
        N::Lb | N::Lh | N::Lw | N::Lbu | N::Lhu | N::Lwu | N::Ld => 0b000_0011,
        N::Sb | N::Sh | N::Sw | N::Sd => 0b010_0011,
        N::Addi
        | N::Slti
        | N::Sltiu
        | N::Xori
        | N::Ori
        | N::Andi
        | N::Slli
        | N::Srli
        | N::Srai
        | N::Nop => 0b001_0011,
        N::Add
        | N::Sub
        | N::Sll
        | N::Slt
        | N::Sltu
        | N::Xor
        | N::Srl
        | N::Sra
        | N::Or
        | N::And
        | N::Mul
        | N::Mulh
        | N::Mulhsu
        | N::Mulhu
        | N::Div
        | N::Divu
        | N::Rem
        | N::Remu => 0b011_0011,
        N::Addiw | N::Slliw | N::Srliw | N::Sraiw => 0b001_1011,
        N::Addw
        | N::Subw
        | N::Sllw
        | N::Srlw
        | N::Sraw
        | N::Mulw
        | N::Divw
        | N::Divuw
        | N::Remw
        | N::Remuw => 0b011_1011,
        N::Fence | N::FenceI => 0b000_1111,
        N::Ecall
        | N::Ebreak
        | N::Csrrw
        | N::Csrrs
        | N::Csrrc
        | N::Csrrwi
        | N::Csrrsi
        | N::Csrrci
        | N::Uret
        | N::Sret
        | N::Mret
        | N::Dret
        | N::Wfi
        | N::SfenceVma => 0b111_0011,
        _ => return Err(GenError::UnknownInstruction(name)),
    };
    Ok(op)
}

/// Returns the 3-bit `funct3` field for `name`.
///
/// # Errors
///
/// Returns [`GenError::UnknownInstruction`] when `name` has no `funct3`
/// field (U/J formats and compressed instructions).
pub fn funct3(name: InstrName) -> Result<u8> {
    use InstrName as N;
    let f3 = match name {
        N::Jalr
        | N::Beq
        | N::Lb
        | N::Sb
        | N::Addi
        | N::Nop
        | N::Add
        | N::Sub
        | N::Fence
        | N::Ecall
        | N::Ebreak
        | N::Addiw
        | N::Addw
        | N::Subw
        | N::Mul
        | N::Mulw
        | N::Uret
        | N::Sret
        | N::Mret
        | N::Dret
        | N::Wfi
        | N::SfenceVma => 0b000,
        N::Bne
        | N::Lh
        | N::Sh
        | N::Slli
        | N::Sll
        | N::FenceI
        | N::Csrrw
        | N::Slliw
        | N::Sllw
        | N::Mulh => 0b001,
        N::Lw | N::Sw | N::Slti | N::Slt | N::Csrrs | N::Mulhsu => 0b010,
        N::Sltiu | N::Sltu | N::Csrrc | N::Ld | N::Sd | N::Mulhu => 0b011,
        N::Blt | N::Lbu | N::Xori | N::Xor | N::Div | N::Divw => 0b100,
        N::Bge
        | N::Lhu
        | N::Srli
        | N::Srai
        | N::Srl
        | N::Sra
        | N::Csrrwi
        | N::Srliw
        | N::Sraiw
        | N::Srlw
        | N::Sraw
        | N::Divu
        | N::Divuw => 0b101,
        N::Bltu | N::Ori | N::Or | N::Csrrsi | N::Lwu | N::Rem | N::Remw => 0b110,
        N::Bgeu | N::Andi | N::And | N::Csrrci | N::Remu | N::Remuw => 0b111,
        _ => return Err(GenError::UnknownInstruction(name)),
    };
    Ok(f3)
}

/// Returns the 7-bit `funct7` field for `name`.
///
/// # Errors
///
/// Returns [`GenError::UnknownInstruction`] when `name` has no `funct7`
/// field.
pub fn funct7(name: InstrName) -> Result<u8> {
    use InstrName as N;
    let f7 = match name {
        N::Slli
        | N::Srli
        | N::Add
        | N::Sll
        | N::Slt
        | N::Sltu
        | N::Xor
        | N::Srl
        | N::Or
        | N::And
        | N::Slliw
        | N::Srliw
        | N::Addw
        | N::Sllw
        | N::Srlw
        | N::Ecall
        | N::Ebreak
        | N::Uret => 0b000_0000,
        N::Sub | N::Sra | N::Srai | N::Sraiw | N::Subw | N::Sraw => 0b010_0000,
        N::Mul
        | N::Mulh
        | N::Mulhsu
        | N::Mulhu
        | N::Div
        | N::Divu
        | N::Rem
        | N::Remu
        | N::Mulw
        | N::Divw
        | N::Divuw
        | N::Remw
        | N::Remuw => 0b000_0001,
        N::Sret | N::Wfi => 0b000_1000,
        N::Mret => 0b001_1000,
        N::Dret => 0b011_1101,
        N::SfenceVma => 0b000_1001,
        _ => return Err(GenError::UnknownInstruction(name)),
    };
    Ok(f7)
}
