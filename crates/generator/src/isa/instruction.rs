//! The mutable instruction value type.
//!
//! An [`Instruction`] is stamped out from a static [`Descriptor`] and then
//! shaped by randomization: operand registers, an immediate (truncated and
//! sign-extended to the format's width), a CSR address for CSR
//! instructions, and stream bookkeeping (label, comment, atomic flag).
//! [`Instruction::to_asm`] renders the final assembly line.

use rand::Rng;

use crate::common::Result;

use super::abi::Reg;
use super::defs::{Category, Format, Group, ImmKind};
use super::name::InstrName;
use super::tables::Descriptor;

/// Field width the mnemonic is padded to in rendered assembly.
const MNEMONIC_WIDTH: usize = 11;

/// An expanded pseudo-instruction carried in place of a real encoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PseudoOp {
    /// `li rd, imm` load-immediate.
    Li,
    /// `la rd, symbol` load-address.
    La {
        /// Symbol the address refers to.
        symbol: String,
    },
}

/// A single instruction instance inside a stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instruction {
    /// Instruction name identifier.
    pub name: InstrName,
    /// Encoding format.
    pub format: Format,
    /// Functional category.
    pub category: Category,
    /// ISA-extension group.
    pub group: Group,
    /// Immediate interpretation.
    pub imm_kind: ImmKind,
    /// Destination register.
    pub rd: Reg,
    /// First source register.
    pub rs1: Reg,
    /// Second source register.
    pub rs2: Reg,
    /// Immediate value, truncated and sign-extended to `imm_len` bits.
    pub imm: u32,
    /// CSR address for CSR-category instructions.
    pub csr: u16,
    /// Rendered immediate operand. May be overridden with a label
    /// reference for jumps.
    pub imm_str: String,
    /// Trailing comment appended to the rendered line.
    pub comment: String,
    /// Label emitted in front of the instruction when `has_label` is set.
    pub label: String,
    /// Whether `label` is emitted.
    pub has_label: bool,
    /// Atomic instructions belong to a directed sequence and must not be
    /// split by later insertions.
    pub atomic: bool,
    /// Whether the format carries a destination register.
    pub has_rd: bool,
    /// Whether the format carries a first source register.
    pub has_rs1: bool,
    /// Whether the format carries a second source register.
    pub has_rs2: bool,
    /// Whether the format carries an immediate.
    pub has_imm: bool,
    /// Immediate width in bits.
    pub imm_len: u32,
    /// Mask covering the sign-extension bits above `imm_len`.
    pub imm_mask: u32,
    /// When set, the instruction renders as a pseudo-instruction instead
    /// of its own format.
    pub pseudo: Option<PseudoOp>,
}

impl Instruction {
    /// Builds a fresh instance from a registry descriptor with operand
    /// presence and immediate width derived from the format.
    #[must_use]
    pub fn new(desc: &Descriptor) -> Self {
        let mut instr = Self {
            name: desc.name,
            format: desc.format,
            category: desc.category,
            group: desc.group,
            imm_kind: desc.imm_kind,
            rd: Reg::Zero,
            rs1: Reg::Zero,
            rs2: Reg::Zero,
            imm: 0,
            csr: 0,
            imm_str: String::from("0"),
            comment: String::new(),
            label: String::new(),
            has_label: false,
            atomic: false,
            has_rd: true,
            has_rs1: true,
            has_rs2: true,
            has_imm: true,
            imm_len: 0,
            imm_mask: 0xFFFF_FFFF,
            pseudo: None,
        };
        instr.set_operand_presence();
        instr.set_imm_len();
        instr
    }

    /// Builds a `li rd, imm` pseudo-instruction. `imm_str` carries the
    /// already-rendered immediate (decimal or hex).
    #[must_use]
    pub fn pseudo_li(rd: Reg, imm_str: String) -> Self {
        let mut instr = Self::pseudo_base(rd);
        instr.imm_str = imm_str;
        instr.pseudo = Some(PseudoOp::Li);
        instr
    }

    /// Builds a `la rd, symbol` pseudo-instruction.
    #[must_use]
    pub fn pseudo_la(rd: Reg, symbol: String) -> Self {
        let mut instr = Self::pseudo_base(rd);
        instr.pseudo = Some(PseudoOp::La { symbol });
        instr
    }

    /// Pseudo-instructions expand to I-format arithmetic sequences, so
    /// they carry ADDI's descriptor for classification purposes.
    fn pseudo_base(rd: Reg) -> Self {
        let mut instr = Self::new(&Descriptor {
            name: InstrName::Addi,
            format: Format::I,
            category: Category::Arithmetic,
            group: Group::Rv32i,
            imm_kind: ImmKind::Imm,
        });
        instr.rd = rd;
        instr
    }

    /// Marks the operands the format does not encode as absent.
    fn set_operand_presence(&mut self) {
        match self.format {
            Format::R | Format::R4 => self.has_imm = false,
            Format::I => self.has_rs2 = false,
            Format::S | Format::B => self.has_rd = false,
            Format::U | Format::J => {
                self.has_rs1 = false;
                self.has_rs2 = false;
            }
            Format::Cr => {
                if self.category == Category::Jump {
                    self.has_rd = false;
                } else {
                    self.has_rs1 = false;
                }
                self.has_imm = false;
            }
            Format::Css => {
                self.has_rs1 = false;
                self.has_rd = false;
            }
            Format::Cl => self.has_rs2 = false,
            Format::Cs => self.has_rd = false,
            Format::Ca => {
                self.has_rs1 = false;
                self.has_imm = false;
            }
            Format::Ci | Format::Ciw => {
                self.has_rs1 = false;
                self.has_rs2 = false;
            }
            Format::Cj => {
                self.has_rs1 = false;
                self.has_rs2 = false;
                self.has_rd = false;
            }
            Format::Cb => {
                self.has_rs2 = false;
                self.has_rd = false;
            }
        }
        if self.category == Category::Csr {
            self.has_rs2 = false;
            if self.format == Format::I {
                self.has_rs1 = false;
            }
        }
    }

    /// Derives `imm_len` and `imm_mask` from the format.
    fn set_imm_len(&mut self) {
        self.imm_len = match self.format {
            Format::U | Format::J => 20,
            Format::I | Format::S | Format::B => {
                if self.imm_kind.is_unsigned() {
                    5
                } else {
                    11
                }
            }
            Format::Ci | Format::Css => 6,
            Format::Cl | Format::Cs | Format::Cb => 5,
            Format::Cj => 11,
            Format::Ciw => 8,
            Format::R | Format::R4 | Format::Cr | Format::Ca => 0,
        };
        // Compressed shifts take a 5-bit shamt regardless of CI encoding.
        if matches!(self.name, InstrName::CSlli | InstrName::CSrli | InstrName::CSrai) {
            self.imm_len = 5;
        }
        self.imm_mask = (0xFFFF_FFFFu64 << self.imm_len) as u32;
    }

    /// Whether the instruction uses a 16-bit compressed encoding.
    #[must_use]
    pub fn is_compressed(&self) -> bool {
        self.format.is_compressed()
    }

    /// Truncates the immediate to `imm_len` bits and sign-extends it for
    /// signed immediate kinds.
    pub fn extend_imm(&mut self) {
        if !self.has_imm || self.imm_len == 0 {
            return;
        }
        let shift = 32 - self.imm_len;
        let shifted = (u64::from(self.imm) << shift) & 0xFFFF_FFFF;
        let sign = shifted & 0x8000_0000 != 0;
        self.imm = (shifted >> shift) as u32;
        if sign && self.format != Format::U && !self.imm_kind.is_unsigned() {
            self.imm |= self.imm_mask;
        }
    }

    /// Refreshes `imm_str` from the current immediate value.
    pub fn update_imm_str(&mut self) {
        self.imm_str = (self.imm as i32).to_string();
    }

    /// Draws a fresh immediate, honoring shamt-width constraints for
    /// shift-immediate instructions and the non-zero immediate kinds.
    pub fn randomize_imm(&mut self, xlen: u32, rng: &mut impl Rng) {
        if !self.has_imm {
            return;
        }
        for _ in 0..8 {
            let raw: u32 = rng.gen_range(0..=u32::MAX);
            self.imm = match self.name {
                InstrName::Slliw | InstrName::Srliw | InstrName::Sraiw => raw & 0x1F,
                InstrName::Slli | InstrName::Srli | InstrName::Srai => {
                    if xlen == 32 {
                        raw & 0x1F
                    } else {
                        raw & 0x3F
                    }
                }
                _ => raw,
            };
            self.extend_imm();
            if !self.imm_kind.is_nonzero() || self.imm & !self.imm_mask != 0 {
                break;
            }
        }
        if self.imm_kind.is_nonzero() && self.imm & !self.imm_mask == 0 {
            self.imm = 1;
        }
        self.update_imm_str();
    }

    /// Dotted assembly mnemonic for the instruction name.
    #[must_use]
    pub fn mnemonic(&self) -> String {
        self.name.mnemonic()
    }

    fn padded_mnemonic(&self) -> String {
        format!("{:<MNEMONIC_WIDTH$}", self.mnemonic())
    }

    /// Renders the instruction as one assembly line (without any stream
    /// label prefix), lowercased, with the comment appended when present.
    #[must_use]
    pub fn to_asm(&self) -> String {
        let mut asm = match &self.pseudo {
            Some(PseudoOp::Li) => format!("{:<MNEMONIC_WIDTH$} {}, {}", "li", self.rd, self.imm_str),
            Some(PseudoOp::La { symbol }) => {
                format!("{:<MNEMONIC_WIDTH$} {}, {}", "la", self.rd, symbol)
            }
            None if self.category == Category::System => self.render_system(),
            None if self.is_compressed() => self.render_compressed(),
            None => self.render_base(),
        };
        if !self.comment.is_empty() {
            asm.push_str(" #");
            asm.push_str(&self.comment);
        }
        asm.to_lowercase()
    }

    fn render_system(&self) -> String {
        match self.name {
            // Encode ebreak as raw data so epc+4 lands on an instruction
            // boundary in the handler.
            InstrName::Ebreak => String::from(".4byte 0x00100073 # ebreak"),
            InstrName::CEbreak => String::from("c.ebreak"),
            _ => self.mnemonic(),
        }
    }

    fn render_base(&self) -> String {
        let name = self.padded_mnemonic();
        match self.format {
            Format::J | Format::U => format!("{name} {}, {}", self.rd, self.imm_str),
            Format::I => match self.name {
                InstrName::Nop => String::from("nop"),
                InstrName::Wfi => String::from("wfi"),
                InstrName::Fence => String::from("fence"),
                InstrName::FenceI => String::from("fence.i"),
                _ if self.category == Category::Load => {
                    format!("{name} {}, {}({})", self.rd, self.imm_str, self.rs1)
                }
                _ if self.category == Category::Csr => {
                    format!("{name} {}, 0x{:x}, {}", self.rd, self.csr, self.imm_str)
                }
                _ => format!("{name} {}, {}, {}", self.rd, self.rs1, self.imm_str),
            },
            Format::S | Format::B => {
                if self.category == Category::Store {
                    format!("{name} {}, {}({})", self.rs2, self.imm_str, self.rs1)
                } else {
                    format!("{name} {}, {}, {}", self.rs1, self.rs2, self.imm_str)
                }
            }
            Format::R => {
                if self.category == Category::Csr {
                    format!("{name} {}, 0x{:x}, {}", self.rd, self.csr, self.rs1)
                } else if self.name == InstrName::SfenceVma {
                    String::from("sfence.vma x0, x0")
                } else {
                    format!("{name} {}, {}, {}", self.rd, self.rs1, self.rs2)
                }
            }
            _ => format!("Fatal_unsupported_format: {:?} {}", self.format, self.name),
        }
    }

    fn render_compressed(&self) -> String {
        let name = self.padded_mnemonic();
        match self.format {
            Format::Ci | Format::Ciw => match self.name {
                InstrName::CNop => String::from("c.nop"),
                InstrName::CAddi16sp => format!("{name} sp, {}", self.imm_str),
                InstrName::CAddi4spn => format!("{name} {}, sp, {}", self.rd, self.imm_str),
                InstrName::CLwsp | InstrName::CLdsp => {
                    format!("{name} {}, {}(sp)", self.rd, self.imm_str)
                }
                _ => format!("{name} {}, {}", self.rd, self.imm_str),
            },
            Format::Cl => format!("{name} {}, {}({})", self.rd, self.imm_str, self.rs1),
            Format::Cs => {
                if self.category == Category::Store {
                    format!("{name} {}, {}({})", self.rs2, self.imm_str, self.rs1)
                } else {
                    format!("{name} {}, {}", self.rs1, self.rs2)
                }
            }
            Format::Ca => format!("{name} {}, {}", self.rd, self.rs2),
            Format::Cb => format!("{name} {}, {}", self.rs1, self.imm_str),
            Format::Css => {
                if self.category == Category::Store {
                    format!("{name} {}, {}(sp)", self.rs2, self.imm_str)
                } else {
                    format!("{name} {}, {}", self.rs2, self.imm_str)
                }
            }
            Format::Cr => match self.name {
                InstrName::CJr | InstrName::CJalr => format!("{name} {}", self.rs1),
                _ => format!("{name} {}, {}", self.rd, self.rs2),
            },
            Format::Cj => format!("{name} {}", self.imm_str),
            _ => format!("Fatal_unsupported_format: {:?} {}", self.format, self.name),
        }
    }

    /// Returns the 7-bit major opcode of the base-format encoding.
    ///
    /// # Errors
    ///
    /// Returns [`GenError::UnknownInstruction`](crate::common::GenError::UnknownInstruction) for names without a
    /// base-format encoding.
    pub fn opcode(&self) -> Result<u8> {
        super::encoding::opcode(self.name)
    }

    /// Returns the `funct3` field of the base-format encoding.
    ///
    /// # Errors
    ///
    /// Returns [`GenError::UnknownInstruction`](crate::common::GenError::UnknownInstruction) for names without a
    /// `funct3` field.
    pub fn funct3(&self) -> Result<u8> {
        super::encoding::funct3(self.name)
    }

    /// Returns the `funct7` field of the base-format encoding.
    ///
    /// # Errors
    ///
    /// Returns [`GenError::UnknownInstruction`](crate::common::GenError::UnknownInstruction) for names without a
    /// `funct7` field.
    pub fn funct7(&self) -> Result<u8> {
        super::encoding::funct7(self.name)
    }
}
