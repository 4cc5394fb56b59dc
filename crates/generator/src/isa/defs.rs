//! Core ISA classification enums.
//!
//! This module defines the classification axes shared by the catalog,
//! the instruction model, and the stream generators:
//! 1. **Format:** the instruction-encoding shape, which determines the
//!    operand fields present and the immediate width.
//! 2. **Category:** the functional classification used for filtered random
//!    selection and coverage.
//! 3. **Group:** ISA-extension membership used for configuration filtering.
//! 4. **Immediate kind** and **hazard** classifications.

use serde::Deserialize;

/// Instruction-encoding format.
///
/// Base formats follow the RISC-V unprivileged specification (R/I/S/B/U/J
/// plus the R4 fused form); the `C*` variants are the compressed sub-formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Format {
    /// Jump format (JAL): `rd`, 20-bit immediate.
    J,
    /// Upper-immediate format (LUI/AUIPC): `rd`, 20-bit immediate.
    U,
    /// Immediate format: `rd`, `rs1`, 11-bit immediate.
    I,
    /// Branch format: `rs1`, `rs2`, immediate.
    B,
    /// Register-register format: `rd`, `rs1`, `rs2`.
    R,
    /// Store format: `rs1`, `rs2`, immediate.
    S,
    /// Register4 format (fused multiply-add family).
    R4,
    /// Compressed immediate format (C.ADDI, C.LI, C.LWSP, ...).
    Ci,
    /// Compressed branch/shift format (C.BEQZ, C.SRLI, ...).
    Cb,
    /// Compressed jump format (C.J, C.JAL).
    Cj,
    /// Compressed register format (C.MV, C.ADD, C.JR, ...).
    Cr,
    /// Compressed arithmetic format (C.SUB, C.XOR, C.OR, C.AND, ...).
    Ca,
    /// Compressed load format (C.LW, C.LD).
    Cl,
    /// Compressed store format (C.SW, C.SD).
    Cs,
    /// Compressed stack-relative store format (C.SWSP, C.SDSP).
    Css,
    /// Compressed wide-immediate format (C.ADDI4SPN).
    Ciw,
}

impl Format {
    /// Whether this is one of the 16-bit compressed sub-formats.
    pub const fn is_compressed(self) -> bool {
        matches!(
            self,
            Self::Ci | Self::Cb | Self::Cj | Self::Cr | Self::Ca | Self::Cl | Self::Cs | Self::Css | Self::Ciw
        )
    }
}

/// Functional instruction category.
///
/// Categories drive constrained random selection (include/exclude filters)
/// and the basic-instruction subset used by filler streams.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Category {
    /// Memory loads.
    Load,
    /// Memory stores.
    Store,
    /// Shift operations.
    Shift,
    /// Integer arithmetic.
    Arithmetic,
    /// Bitwise logical operations.
    Logical,
    /// Comparison operations (SLT family).
    Compare,
    /// Conditional branches.
    Branch,
    /// Unconditional jumps.
    Jump,
    /// Memory-ordering fences.
    Synch,
    /// System instructions (ECALL, EBREAK, DRET).
    System,
    /// Counter accesses.
    Counter,
    /// CSR read/write instructions.
    Csr,
    /// Privilege-level changes.
    ChangeLevel,
    /// Trap-return instructions (MRET, SRET, URET).
    Trap,
    /// Interrupt-related instructions (WFI).
    Interrupt,
    /// Atomic memory operations.
    Amo,
}

/// ISA-extension group an instruction belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Group {
    /// Base 32-bit integer ISA.
    Rv32i,
    /// 64-bit integer additions.
    Rv64i,
    /// 32-bit multiply/divide extension.
    Rv32m,
    /// 64-bit multiply/divide additions.
    Rv64m,
    /// 32-bit atomic extension.
    Rv32a,
    /// 64-bit atomic additions.
    Rv64a,
    /// 32-bit single-precision floating point.
    Rv32f,
    /// 64-bit single-precision additions.
    Rv64f,
    /// 32-bit double-precision floating point.
    Rv32d,
    /// 64-bit double-precision additions.
    Rv64d,
    /// 32-bit compressed extension.
    Rv32c,
    /// 64-bit compressed additions.
    Rv64c,
    /// Compressed single-precision loads/stores.
    Rv32fc,
    /// Compressed double-precision loads/stores.
    Rv32dc,
    /// 128-bit compressed additions.
    Rv128c,
}

impl Group {
    /// Whether this group belongs to the compressed extension family.
    pub const fn is_compressed(self) -> bool {
        matches!(
            self,
            Self::Rv32c | Self::Rv64c | Self::Rv32fc | Self::Rv32dc | Self::Rv128c
        )
    }

    /// Whether this group belongs to the floating-point extension family.
    pub const fn is_floating_point(self) -> bool {
        matches!(self, Self::Rv32f | Self::Rv64f | Self::Rv32d | Self::Rv64d)
    }
}

/// Immediate interpretation attached to an instruction descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ImmKind {
    /// Signed immediate.
    Imm,
    /// Unsigned immediate (shift amounts, CSR immediates).
    Uimm,
    /// Non-zero signed immediate.
    Nzimm,
    /// Non-zero unsigned immediate.
    Nzuimm,
}

impl ImmKind {
    /// Whether sign extension never applies to this immediate kind.
    pub const fn is_unsigned(self) -> bool {
        matches!(self, Self::Uimm | Self::Nzuimm)
    }

    /// Whether a zero immediate field is an illegal encoding.
    pub const fn is_nonzero(self) -> bool {
        matches!(self, Self::Nzimm | Self::Nzuimm)
    }
}

/// Register or memory dependency classification between two instructions
/// in emission order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Hazard {
    /// No dependency.
    None,
    /// Read-after-write dependency.
    Raw,
    /// Write-after-read dependency.
    War,
    /// Write-after-write dependency.
    Waw,
}

/// Privileged execution mode the generated program boots into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PrivilegedMode {
    /// User mode.
    User,
    /// Supervisor mode.
    Supervisor,
    /// Machine mode.
    #[default]
    Machine,
}
