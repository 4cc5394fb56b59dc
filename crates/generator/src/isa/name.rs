//! Instruction name identifiers.
//!
//! One enumerant per registered instruction. The canonical (upper-case,
//! underscore-separated) spelling is what configuration files and logs use;
//! [`InstrName::mnemonic`] derives the assembler spelling from it.

use std::fmt;

use serde::Deserialize;

/// Name of a RISC-V instruction known to the generator.
///
/// Covers the base integer ISAs (RV32I/RV64I including privileged and CSR
/// instructions), the multiply extension (RV32M/RV64M), and the compressed
/// extension (RV32C/RV64C).
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InstrName {
    // RV32I
    Lui,
    Auipc,
    Jal,
    Jalr,
    Beq,
    Bne,
    Blt,
    Bge,
    Bltu,
    Bgeu,
    Lb,
    Lh,
    Lw,
    Lbu,
    Lhu,
    Sb,
    Sh,
    Sw,
    Addi,
    Slti,
    Sltiu,
    Xori,
    Ori,
    Andi,
    Slli,
    Srli,
    Srai,
    Add,
    Sub,
    Sll,
    Slt,
    Sltu,
    Xor,
    Srl,
    Sra,
    Or,
    And,
    Nop,
    Fence,
    FenceI,
    Ecall,
    Ebreak,
    Csrrw,
    Csrrs,
    Csrrc,
    Csrrwi,
    Csrrsi,
    Csrrci,
    // RV32I privileged
    Dret,
    Mret,
    Uret,
    Sret,
    Wfi,
    SfenceVma,
    // RV64I
    Lwu,
    Ld,
    Sd,
    Addiw,
    Slliw,
    Srliw,
    Sraiw,
    Addw,
    Subw,
    Sllw,
    Srlw,
    Sraw,
    // RV32M
    Mul,
    Mulh,
    Mulhsu,
    Mulhu,
    Div,
    Divu,
    Rem,
    Remu,
    // RV64M
    Mulw,
    Divw,
    Divuw,
    Remw,
    Remuw,
    // RV32C
    CLw,
    CSw,
    CLwsp,
    CSwsp,
    CAddi4spn,
    CAddi,
    CLi,
    CAddi16sp,
    CLui,
    CSrli,
    CSrai,
    CAndi,
    CSub,
    CXor,
    COr,
    CAnd,
    CBeqz,
    CBnez,
    CSlli,
    CMv,
    CEbreak,
    CAdd,
    CNop,
    CJ,
    CJal,
    CJr,
    CJalr,
    // RV64C
    CAddiw,
    CSubw,
    CAddw,
    CLd,
    CSd,
    CLdsp,
    CSdsp,
}

impl InstrName {
    /// Returns the canonical upper-case spelling (`"C_ADDI16SP"`, `"FENCE_I"`).
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Lui => "LUI",
            Self::Auipc => "AUIPC",
            Self::Jal => "JAL",
            Self::Jalr => "JALR",
            Self::Beq => "BEQ",
            Self::Bne => "BNE",
            Self::Blt => "BLT",
            Self::Bge => "BGE",
            Self::Bltu => "BLTU",
            Self::Bgeu => "BGEU",
            Self::Lb => "LB",
            Self::Lh => "LH",
            Self::Lw => "LW",
            Self::Lbu => "LBU",
            Self::Lhu => "LHU",
            Self::Sb => "SB",
            Self::Sh => "SH",
            Self::Sw => "SW",
            Self::Addi => "ADDI",
            Self::Slti => "SLTI",
            Self::Sltiu => "SLTIU",
            Self::Xori => "XORI",
            Self::Ori => "ORI",
            Self::Andi => "ANDI",
            Self::Slli => "SLLI",
            Self::Srli => "SRLI",
            Self::Srai => "SRAI",
            Self::Add => "ADD",
            Self::Sub => "SUB",
            Self::Sll => "SLL",
            Self::Slt => "SLT",
            Self::Sltu => "SLTU",
            Self::Xor => "XOR",
            Self::Srl => "SRL",
            Self::Sra => "SRA",
            Self::Or => "OR",
            Self::And => "AND",
            Self::Nop => "NOP",
            Self::Fence => "FENCE",
            Self::FenceI => "FENCE_I",
            Self::Ecall => "ECALL",
            Self::Ebreak => "EBREAK",
            Self::Csrrw => "CSRRW",
            Self::Csrrs => "CSRRS",
            Self::Csrrc => "CSRRC",
            Self::Csrrwi => "CSRRWI",
            Self::Csrrsi => "CSRRSI",
            Self::Csrrci => "CSRRCI",
            Self::Dret => "DRET",
            Self::Mret => "MRET",
            Self::Uret => "URET",
            Self::Sret => "SRET",
            Self::Wfi => "WFI",
            Self::SfenceVma => "SFENCE_VMA",
            Self::Lwu => "LWU",
            Self::Ld => "LD",
            Self::Sd => "SD",
            Self::Addiw => "ADDIW",
            Self::Slliw => "SLLIW",
            Self::Srliw => "SRLIW",
            Self::Sraiw => "SRAIW",
            Self::Addw => "ADDW",
            Self::Subw => "SUBW",
            Self::Sllw => "SLLW",
            Self::Srlw => "SRLW",
            Self::Sraw => "SRAW",
            Self::Mul => "MUL",
            Self::Mulh => "MULH",
            Self::Mulhsu => "MULHSU",
            Self::Mulhu => "MULHU",
            Self::Div => "DIV",
            Self::Divu => "DIVU",
            Self::Rem => "REM",
            Self::Remu => "REMU",
            Self::Mulw => "MULW",
            Self::Divw => "DIVW",
            Self::Divuw => "DIVUW",
            Self::Remw => "REMW",
            Self::Remuw => "REMUW",
            Self::CLw => "C_LW",
            Self::CSw => "C_SW",
            Self::CLwsp => "C_LWSP",
            Self::CSwsp => "C_SWSP",
            Self::CAddi4spn => "C_ADDI4SPN",
            Self::CAddi => "C_ADDI",
            Self::CLi => "C_LI",
            Self::CAddi16sp => "C_ADDI16SP",
            Self::CLui => "C_LUI",
            Self::CSrli => "C_SRLI",
            Self::CSrai => "C_SRAI",
            Self::CAndi => "C_ANDI",
            Self::CSub => "C_SUB",
            Self::CXor => "C_XOR",
            Self::COr => "C_OR",
            Self::CAnd => "C_AND",
            Self::CBeqz => "C_BEQZ",
            Self::CBnez => "C_BNEZ",
            Self::CSlli => "C_SLLI",
            Self::CMv => "C_MV",
            Self::CEbreak => "C_EBREAK",
            Self::CAdd => "C_ADD",
            Self::CNop => "C_NOP",
            Self::CJ => "C_J",
            Self::CJal => "C_JAL",
            Self::CJr => "C_JR",
            Self::CJalr => "C_JALR",
            Self::CAddiw => "C_ADDIW",
            Self::CSubw => "C_SUBW",
            Self::CAddw => "C_ADDW",
            Self::CLd => "C_LD",
            Self::CSd => "C_SD",
            Self::CLdsp => "C_LDSP",
            Self::CSdsp => "C_SDSP",
        }
    }

    /// Returns the assembler mnemonic: the canonical name with `_` replaced
    /// by `.` (case is normalized when the full line is rendered).
    pub fn mnemonic(self) -> String {
        self.as_str().replace('_', ".")
    }
}

impl fmt::Display for InstrName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
