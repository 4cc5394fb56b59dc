//! Static instruction descriptor registry.
//!
//! One immutable [`Descriptor`] per instruction name, recording the
//! format, category, group, and immediate kind the catalog needs to build
//! templates and answer classification queries. Each name appears exactly
//! once; the registry is the single source of truth for the
//! one-name-one-descriptor invariant.

use super::defs::{Category, Format, Group, ImmKind};
use super::name::InstrName;

/// Static per-instruction-name attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Descriptor {
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
}

const fn d(
    name: InstrName,
    format: Format,
    category: Category,
    group: Group,
    imm_kind: ImmKind,
) -> Descriptor {
    Descriptor {
        name,
        format,
        category,
        group,
        imm_kind,
    }
}

use Category as C;
use Format as F;
use Group as G;
use ImmKind as K;
use InstrName as N;

/// The full instruction registry, grouped by ISA extension.
pub static DESCRIPTORS: &[Descriptor] = &[
    // RV32I
    d(N::Lui, F::U, C::Arithmetic, G::Rv32i, K::Uimm),
    d(N::Auipc, F::U, C::Arithmetic, G::Rv32i, K::Uimm),
    d(N::Jal, F::J, C::Jump, G::Rv32i, K::Imm),
    d(N::Jalr, F::I, C::Jump, G::Rv32i, K::Imm),
    d(N::Beq, F::B, C::Branch, G::Rv32i, K::Imm),
    d(N::Bne, F::B, C::Branch, G::Rv32i, K::Imm),
    d(N::Blt, F::B, C::Branch, G::Rv32i, K::Imm),
    d(N::Bge, F::B, C::Branch, G::Rv32i, K::Imm),
    d(N::Bltu, F::B, C::Branch, G::Rv32i, K::Imm),
    d(N::Bgeu, F::B, C::Branch, G::Rv32i, K::Imm),
    d(N::Lb, F::I, C::Load, G::Rv32i, K::Imm),
    d(N::Lh, F::I, C::Load, G::Rv32i, K::Imm),
    d(N::Lw, F::I, C::Load, G::Rv32i, K::Imm),
    d(N::Lbu, F::I, C::Load, G::Rv32i, K::Imm),
    d(N::Lhu, F::I, C::Load, G::Rv32i, K::Imm),
    d(N::Sb, F::S, C::Store, G::Rv32i, K::Imm),
    d(N::Sh, F::S, C::Store, G::Rv32i, K::Imm),
    d(N::Sw, F::S, C::Store, G::Rv32i, K::Imm),
    d(N::Addi, F::I, C::Arithmetic, G::Rv32i, K::Imm),
    d(N::Slti, F::I, C::Compare, G::Rv32i, K::Imm),
    d(N::Sltiu, F::I, C::Compare, G::Rv32i, K::Imm),
    d(N::Xori, F::I, C::Logical, G::Rv32i, K::Imm),
    d(N::Ori, F::I, C::Logical, G::Rv32i, K::Imm),
    d(N::Andi, F::I, C::Logical, G::Rv32i, K::Imm),
    d(N::Slli, F::I, C::Shift, G::Rv32i, K::Uimm),
    d(N::Srli, F::I, C::Shift, G::Rv32i, K::Uimm),
    d(N::Srai, F::I, C::Shift, G::Rv32i, K::Uimm),
    d(N::Add, F::R, C::Arithmetic, G::Rv32i, K::Imm),
    d(N::Sub, F::R, C::Arithmetic, G::Rv32i, K::Imm),
    d(N::Sll, F::R, C::Shift, G::Rv32i, K::Imm),
    d(N::Slt, F::R, C::Compare, G::Rv32i, K::Imm),
    d(N::Sltu, F::R, C::Compare, G::Rv32i, K::Imm),
    d(N::Xor, F::R, C::Logical, G::Rv32i, K::Imm),
    d(N::Srl, F::R, C::Shift, G::Rv32i, K::Imm),
    d(N::Sra, F::R, C::Shift, G::Rv32i, K::Imm),
    d(N::Or, F::R, C::Logical, G::Rv32i, K::Imm),
    d(N::And, F::R, C::Logical, G::Rv32i, K::Imm),
    d(N::Nop, F::I, C::Arithmetic, G::Rv32i, K::Imm),
    d(N::Fence, F::I, C::Synch, G::Rv32i, K::Imm),
    d(N::FenceI, F::I, C::Synch, G::Rv32i, K::Imm),
    d(N::Ecall, F::I, C::System, G::Rv32i, K::Imm),
    d(N::Ebreak, F::I, C::System, G::Rv32i, K::Imm),
    d(N::Csrrw, F::R, C::Csr, G::Rv32i, K::Uimm),
    d(N::Csrrs, F::R, C::Csr, G::Rv32i, K::Uimm),
    d(N::Csrrc, F::R, C::Csr, G::Rv32i, K::Uimm),
    d(N::Csrrwi, F::I, C::Csr, G::Rv32i, K::Uimm),
    d(N::Csrrsi, F::I, C::Csr, G::Rv32i, K::Uimm),
    d(N::Csrrci, F::I, C::Csr, G::Rv32i, K::Uimm),
    d(N::Dret, F::R, C::System, G::Rv32i, K::Imm),
    d(N::Mret, F::R, C::Trap, G::Rv32i, K::Imm),
    d(N::Uret, F::R, C::Trap, G::Rv32i, K::Imm),
    d(N::Sret, F::R, C::Trap, G::Rv32i, K::Imm),
    d(N::Wfi, F::I, C::Interrupt, G::Rv32i, K::Imm),
    d(N::SfenceVma, F::R, C::Synch, G::Rv32i, K::Imm),
    // RV64I
    d(N::Lwu, F::I, C::Load, G::Rv64i, K::Imm),
    d(N::Ld, F::I, C::Load, G::Rv64i, K::Imm),
    d(N::Sd, F::S, C::Store, G::Rv64i, K::Imm),
    d(N::Addiw, F::I, C::Arithmetic, G::Rv64i, K::Imm),
    d(N::Slliw, F::I, C::Shift, G::Rv64i, K::Uimm),
    d(N::Srliw, F::I, C::Shift, G::Rv64i, K::Uimm),
    d(N::Sraiw, F::I, C::Shift, G::Rv64i, K::Uimm),
    d(N::Addw, F::R, C::Arithmetic, G::Rv64i, K::Imm),
    d(N::Subw, F::R, C::Arithmetic, G::Rv64i, K::Imm),
    d(N::Sllw, F::R, C::Shift, G::Rv64i, K::Imm),
    d(N::Srlw, F::R, C::Shift, G::Rv64i, K::Imm),
    d(N::Sraw, F::R, C::Shift, G::Rv64i, K::Imm),
    // RV32M
    d(N::Mul, F::R, C::Arithmetic, G::Rv32m, K::Imm),
    d(N::Mulh, F::R, C::Arithmetic, G::Rv32m, K::Imm),
    d(N::Mulhsu, F::R, C::Arithmetic, G::Rv32m, K::Imm),
    d(N::Mulhu, F::R, C::Arithmetic, G::Rv32m, K::Imm),
    d(N::Div, F::R, C::Arithmetic, G::Rv32m, K::Imm),
    d(N::Divu, F::R, C::Arithmetic, G::Rv32m, K::Imm),
    d(N::Rem, F::R, C::Arithmetic, G::Rv32m, K::Imm),
    d(N::Remu, F::R, C::Arithmetic, G::Rv32m, K::Imm),
    // RV64M
    d(N::Mulw, F::R, C::Arithmetic, G::Rv64m, K::Imm),
    d(N::Divw, F::R, C::Arithmetic, G::Rv64m, K::Imm),
    d(N::Divuw, F::R, C::Arithmetic, G::Rv64m, K::Imm),
    d(N::Remw, F::R, C::Arithmetic, G::Rv64m, K::Imm),
    d(N::Remuw, F::R, C::Arithmetic, G::Rv64m, K::Imm),
    // RV32C
    d(N::CLw, F::Cl, C::Load, G::Rv32c, K::Uimm),
    d(N::CSw, F::Cs, C::Store, G::Rv32c, K::Uimm),
    d(N::CLwsp, F::Ci, C::Load, G::Rv32c, K::Uimm),
    d(N::CSwsp, F::Css, C::Store, G::Rv32c, K::Uimm),
    d(N::CAddi4spn, F::Ciw, C::Arithmetic, G::Rv32c, K::Nzuimm),
    d(N::CAddi, F::Ci, C::Arithmetic, G::Rv32c, K::Nzimm),
    d(N::CLi, F::Ci, C::Arithmetic, G::Rv32c, K::Imm),
    d(N::CAddi16sp, F::Ci, C::Arithmetic, G::Rv32c, K::Nzimm),
    d(N::CLui, F::Ci, C::Arithmetic, G::Rv32c, K::Nzimm),
    d(N::CSrli, F::Cb, C::Shift, G::Rv32c, K::Nzuimm),
    d(N::CSrai, F::Cb, C::Shift, G::Rv32c, K::Nzuimm),
    d(N::CAndi, F::Cb, C::Logical, G::Rv32c, K::Imm),
    d(N::CSub, F::Ca, C::Arithmetic, G::Rv32c, K::Imm),
    d(N::CXor, F::Ca, C::Logical, G::Rv32c, K::Imm),
    d(N::COr, F::Ca, C::Logical, G::Rv32c, K::Imm),
    d(N::CAnd, F::Ca, C::Logical, G::Rv32c, K::Imm),
    d(N::CBeqz, F::Cb, C::Branch, G::Rv32c, K::Imm),
    d(N::CBnez, F::Cb, C::Branch, G::Rv32c, K::Imm),
    d(N::CSlli, F::Ci, C::Shift, G::Rv32c, K::Nzuimm),
    d(N::CMv, F::Cr, C::Arithmetic, G::Rv32c, K::Imm),
    d(N::CEbreak, F::Cr, C::System, G::Rv32c, K::Imm),
    d(N::CAdd, F::Cr, C::Arithmetic, G::Rv32c, K::Imm),
    d(N::CNop, F::Ci, C::Arithmetic, G::Rv32c, K::Nzimm),
    d(N::CJ, F::Cj, C::Jump, G::Rv32c, K::Imm),
    d(N::CJal, F::Cj, C::Jump, G::Rv32c, K::Imm),
    d(N::CJr, F::Cr, C::Jump, G::Rv32c, K::Imm),
    d(N::CJalr, F::Cr, C::Jump, G::Rv32c, K::Imm),
    // RV64C
    d(N::CAddiw, F::Ci, C::Arithmetic, G::Rv64c, K::Imm),
    d(N::CSubw, F::Ca, C::Arithmetic, G::Rv64c, K::Imm),
    d(N::CAddw, F::Ca, C::Arithmetic, G::Rv64c, K::Imm),
    d(N::CLd, F::Cl, C::Load, G::Rv64c, K::Uimm),
    d(N::CSd, F::Cs, C::Store, G::Rv64c, K::Uimm),
    d(N::CLdsp, F::Ci, C::Load, G::Rv64c, K::Uimm),
    d(N::CSdsp, F::Css, C::Store, G::Rv64c, K::Uimm),
];

/// Looks up the descriptor for `name`.
///
/// Every [`InstrName`] has exactly one entry in [`DESCRIPTORS`], so this
/// only returns `None` for a registry/table mismatch (covered by tests).
pub fn descriptor(name: InstrName) -> Option<&'static Descriptor> {
    DESCRIPTORS.iter().find(|desc| desc.name == name)
}
