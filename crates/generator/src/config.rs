//! Configuration system for the test-program generator.
//!
//! This module defines all configuration structures used to parameterize
//! one generation pass. It provides:
//! 1. **Defaults:** Baseline target constants (XLEN, supported extensions, data regions).
//! 2. **Structures:** Hierarchical config for the ISA, program knobs, registers, and memory regions.
//!
//! Configuration is supplied via JSON from the test driver or use
//! `Config::default()` for a bare RV64IMC machine-mode target.

use serde::Deserialize;

use crate::isa::defs::{Group, PrivilegedMode};
use crate::isa::name::InstrName;
use crate::isa::Reg;

/// Default configuration constants for the generator.
///
/// These values define the baseline target when not explicitly overridden
/// in the supplied JSON configuration.
mod defaults {
    /// Default register width in bits.
    pub const XLEN: u32 = 64;

    /// Default size of each normal and supervisor data region (4 KiB).
    pub const REGION_SIZE: u32 = 4096;

    /// Default size of the atomic-operation data region (64 bytes).
    pub const AMO_REGION_SIZE: u32 = 64;

    /// Default region permission bits (XWR = read/write/execute).
    pub const REGION_XWR: u8 = 0b111;
}

/// A named data page the generated program may load from and store to.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MemRegion {
    /// Link-time symbol of the region.
    pub name: String,
    /// Region size in bytes.
    pub size_in_bytes: u32,
    /// Execute/write/read permission bits.
    pub xwr: u8,
}

impl MemRegion {
    /// Builds a region with the default permission bits.
    #[must_use]
    pub fn new(name: &str, size_in_bytes: u32) -> Self {
        Self {
            name: String::from(name),
            size_in_bytes,
            xwr: defaults::REGION_XWR,
        }
    }
}

/// Target ISA selection.
///
/// Controls which instruction groups the catalog admits and the register
/// width address and immediate logic assumes.
#[derive(Debug, Clone, Deserialize)]
pub struct IsaConfig {
    /// Register width in bits (32 or 64).
    #[serde(default = "IsaConfig::default_xlen")]
    pub xlen: u32,

    /// ISA extension groups the target implements.
    #[serde(default = "IsaConfig::default_supported_isa")]
    pub supported_isa: Vec<Group>,

    /// Instruction names the target does not implement, dropped from the
    /// catalog regardless of group support.
    #[serde(default)]
    pub unsupported_instr: Vec<InstrName>,

    /// Drop all compressed instructions even when a compressed group is
    /// in `supported_isa`.
    #[serde(default)]
    pub disable_compressed_instr: bool,

    /// Admit floating-point groups into the catalog.
    #[serde(default)]
    pub enable_floating_point: bool,

    /// Target supports the SFENCE.VMA instruction.
    #[serde(default)]
    pub enable_sfence: bool,
}

impl IsaConfig {
    fn default_xlen() -> u32 {
        defaults::XLEN
    }

    fn default_supported_isa() -> Vec<Group> {
        vec![
            Group::Rv32i,
            Group::Rv64i,
            Group::Rv32m,
            Group::Rv64m,
            Group::Rv32c,
            Group::Rv64c,
        ]
    }
}

impl Default for IsaConfig {
    fn default() -> Self {
        Self {
            xlen: defaults::XLEN,
            supported_isa: Self::default_supported_isa(),
            unsupported_instr: Vec::new(),
            disable_compressed_instr: false,
            enable_floating_point: false,
            enable_sfence: false,
        }
    }
}

/// Program-shape knobs.
///
/// Switches that widen or narrow the basic instruction pool and control
/// privileged behavior of the generated program.
#[derive(Debug, Clone, Deserialize)]
pub struct ProgramConfig {
    /// Privileged mode the program boots into.
    #[serde(default)]
    pub init_privileged_mode: PrivilegedMode,

    /// Keep EBREAK/C.EBREAK out of the basic instruction pool.
    #[serde(default = "ProgramConfig::default_true")]
    pub no_ebreak: bool,

    /// Keep DRET out of the basic instruction pool.
    #[serde(default = "ProgramConfig::default_true")]
    pub no_dret: bool,

    /// Keep fence instructions out of the basic instruction pool.
    #[serde(default = "ProgramConfig::default_true")]
    pub no_fence: bool,

    /// Keep WFI out of the basic instruction pool.
    #[serde(default = "ProgramConfig::default_true")]
    pub no_wfi: bool,

    /// Keep CSR instructions out of the basic instruction pool.
    #[serde(default)]
    pub no_csr_instr: bool,

    /// Allow generated load/store addresses to be unaligned for the
    /// access width.
    #[serde(default)]
    pub enable_unaligned_load_store: bool,

    /// Allow EBREAK/C.EBREAK inside debug ROM streams.
    #[serde(default)]
    pub enable_ebreak_in_debug_rom: bool,
}

impl ProgramConfig {
    fn default_true() -> bool {
        true
    }
}

impl Default for ProgramConfig {
    fn default() -> Self {
        Self {
            init_privileged_mode: PrivilegedMode::default(),
            no_ebreak: true,
            no_dret: true,
            no_fence: true,
            no_wfi: true,
            no_csr_instr: false,
            enable_unaligned_load_store: false,
            enable_ebreak_in_debug_rom: false,
        }
    }
}

/// Register allocation settings.
#[derive(Debug, Clone, Deserialize)]
pub struct RegConfig {
    /// Registers the surrounding program claims for its own use. Streams
    /// never write these.
    #[serde(default)]
    pub reserved_regs: Vec<Reg>,

    /// Pool operand registers are drawn from when a stream supplies no
    /// pool of its own.
    #[serde(default = "RegConfig::default_gpr_pool")]
    pub gpr_pool: Vec<Reg>,
}

impl RegConfig {
    /// All general-purpose registers except ZERO and the ABI-assigned
    /// RA/SP/GP/TP.
    fn default_gpr_pool() -> Vec<Reg> {
        crate::isa::abi::ALL_REGS
            .iter()
            .copied()
            .filter(|r| !matches!(r, Reg::Zero | Reg::Ra | Reg::Sp | Reg::Gp | Reg::Tp))
            .collect()
    }
}

impl Default for RegConfig {
    fn default() -> Self {
        Self {
            reserved_regs: Vec::new(),
            gpr_pool: Self::default_gpr_pool(),
        }
    }
}

/// Data pages available to load/store streams.
#[derive(Debug, Clone, Deserialize)]
pub struct MemConfig {
    /// Normal data regions.
    #[serde(default = "MemConfig::default_mem_region")]
    pub mem_region: Vec<MemRegion>,

    /// Supervisor-mode data regions.
    #[serde(default = "MemConfig::default_s_mem_region")]
    pub s_mem_region: Vec<MemRegion>,

    /// Shared regions for atomic-operation streams.
    #[serde(default = "MemConfig::default_amo_region")]
    pub amo_region: Vec<MemRegion>,
}

impl MemConfig {
    fn default_mem_region() -> Vec<MemRegion> {
        vec![
            MemRegion::new("region_0", defaults::REGION_SIZE),
            MemRegion::new("region_1", defaults::REGION_SIZE),
        ]
    }

    fn default_s_mem_region() -> Vec<MemRegion> {
        vec![
            MemRegion::new("s_region_0", defaults::REGION_SIZE),
            MemRegion::new("s_region_1", defaults::REGION_SIZE),
        ]
    }

    fn default_amo_region() -> Vec<MemRegion> {
        vec![MemRegion::new("amo_0", defaults::AMO_REGION_SIZE)]
    }
}

impl Default for MemConfig {
    fn default() -> Self {
        Self {
            mem_region: Self::default_mem_region(),
            s_mem_region: Self::default_s_mem_region(),
            amo_region: Self::default_amo_region(),
        }
    }
}

/// Root configuration structure for one generation pass.
///
/// # Examples
///
/// Creating a default configuration:
///
/// ```
/// use rvgen_core::config::Config;
///
/// let config = Config::default();
/// assert_eq!(config.isa.xlen, 64);
/// assert!(config.program.no_wfi);
/// ```
///
/// Deserializing from JSON (typical driver usage):
///
/// ```
/// use rvgen_core::config::Config;
/// use rvgen_core::isa::Reg;
///
/// let json = r#"{
///     "isa": {
///         "xlen": 32,
///         "supported_isa": ["RV32I", "RV32C"]
///     },
///     "program": {
///         "no_csr_instr": true
///     },
///     "regs": {
///         "reserved_regs": ["TP", "T0"]
///     },
///     "mem": {
///         "mem_region": [
///             { "name": "region_0", "size_in_bytes": 4096, "xwr": 7 }
///         ]
///     }
/// }"#;
///
/// let config: Config = serde_json::from_str(json).unwrap();
/// assert_eq!(config.isa.xlen, 32);
/// assert!(config.regs.reserved_regs.contains(&Reg::T0));
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Target ISA selection.
    #[serde(default)]
    pub isa: IsaConfig,

    /// Program-shape knobs.
    #[serde(default)]
    pub program: ProgramConfig,

    /// Register allocation settings.
    #[serde(default)]
    pub regs: RegConfig,

    /// Data pages available to load/store streams.
    #[serde(default)]
    pub mem: MemConfig,
}

impl Config {
    /// Whether the stack pointer is claimed by the surrounding program.
    #[must_use]
    pub fn sp_reserved(&self) -> bool {
        self.regs.reserved_regs.contains(&Reg::Sp)
    }
}
