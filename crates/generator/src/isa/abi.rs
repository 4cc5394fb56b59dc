//! RISC-V general-purpose register identifiers and ABI names.
//!
//! Operand selection works on ABI register identities rather than raw
//! indices: reserved-register filtering, compressible-register checks for
//! the RVC formats, and assembly rendering all use the names below.

use std::fmt;

use serde::Deserialize;

/// A RISC-V general-purpose register, named per the standard ABI.
///
/// The discriminant is the architectural register index (`x0`–`x31`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
#[repr(u8)]
pub enum Reg {
    /// x0, hardwired zero.
    #[default]
    Zero = 0,
    /// x1, return address.
    Ra,
    /// x2, stack pointer.
    Sp,
    /// x3, global pointer.
    Gp,
    /// x4, thread pointer.
    Tp,
    /// x5, temporary 0.
    T0,
    /// x6, temporary 1.
    T1,
    /// x7, temporary 2.
    T2,
    /// x8, saved register 0 / frame pointer.
    S0,
    /// x9, saved register 1.
    S1,
    /// x10, argument/return 0.
    A0,
    /// x11, argument/return 1.
    A1,
    /// x12, argument 2.
    A2,
    /// x13, argument 3.
    A3,
    /// x14, argument 4.
    A4,
    /// x15, argument 5.
    A5,
    /// x16, argument 6.
    A6,
    /// x17, argument 7.
    A7,
    /// x18, saved register 2.
    S2,
    /// x19, saved register 3.
    S3,
    /// x20, saved register 4.
    S4,
    /// x21, saved register 5.
    S5,
    /// x22, saved register 6.
    S6,
    /// x23, saved register 7.
    S7,
    /// x24, saved register 8.
    S8,
    /// x25, saved register 9.
    S9,
    /// x26, saved register 10.
    S10,
    /// x27, saved register 11.
    S11,
    /// x28, temporary 3.
    T3,
    /// x29, temporary 4.
    T4,
    /// x30, temporary 5.
    T5,
    /// x31, temporary 6.
    T6,
}

/// All 32 registers in architectural order.
pub const ALL_REGS: [Reg; 32] = [
    Reg::Zero,
    Reg::Ra,
    Reg::Sp,
    Reg::Gp,
    Reg::Tp,
    Reg::T0,
    Reg::T1,
    Reg::T2,
    Reg::S0,
    Reg::S1,
    Reg::A0,
    Reg::A1,
    Reg::A2,
    Reg::A3,
    Reg::A4,
    Reg::A5,
    Reg::A6,
    Reg::A7,
    Reg::S2,
    Reg::S3,
    Reg::S4,
    Reg::S5,
    Reg::S6,
    Reg::S7,
    Reg::S8,
    Reg::S9,
    Reg::S10,
    Reg::S11,
    Reg::T3,
    Reg::T4,
    Reg::T5,
    Reg::T6,
];

impl Reg {
    /// Returns the architectural register index (0–31).
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns the lower-case ABI name (`"zero"`, `"ra"`, `"sp"`, ...).
    pub const fn name(self) -> &'static str {
        const NAMES: [&str; 32] = [
            "zero", "ra", "sp", "gp", "tp", "t0", "t1", "t2", "s0", "s1", "a0", "a1", "a2", "a3",
            "a4", "a5", "a6", "a7", "s2", "s3", "s4", "s5", "s6", "s7", "s8", "s9", "s10", "s11",
            "t3", "t4", "t5", "t6",
        ];
        NAMES[self as usize]
    }

    /// Whether this register is addressable by the 3-bit register fields of
    /// the compressed CL/CS/CIW/CB formats (`x8`–`x15`), or is the stack
    /// pointer used by the SP-relative compressed forms.
    pub const fn is_compressible(self) -> bool {
        matches!(
            self,
            Self::Sp
                | Self::S0
                | Self::S1
                | Self::A0
                | Self::A1
                | Self::A2
                | Self::A3
                | Self::A4
                | Self::A5
        )
    }
}

impl fmt::Display for Reg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
