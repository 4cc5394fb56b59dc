//! Shared helpers for the generator test suite.
//!
//! All randomized tests run against a fixed-seed [`StdRng`] so failures
//! reproduce deterministically.

use rand::SeedableRng;
use rand::rngs::StdRng;

use rvgen_core::config::Config;
use rvgen_core::isa::defs::Group;
use rvgen_core::isa::instruction::Instruction;
use rvgen_core::isa::name::InstrName;
use rvgen_core::isa::tables::descriptor;
use rvgen_core::Catalog;

/// The default deterministic RNG for tests.
pub fn rng() -> StdRng {
    rng_with(0x5EED_CAFE)
}

/// A deterministic RNG with an explicit seed, for tests that sweep
/// several generation passes.
pub fn rng_with(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// The default RV64IMC machine-mode configuration.
pub fn config() -> Config {
    Config::default()
}

/// A bare RV32I configuration with no compressed instructions.
pub fn rv32i_config() -> Config {
    let mut cfg = Config::default();
    cfg.isa.xlen = 32;
    cfg.isa.supported_isa = vec![Group::Rv32i];
    cfg.isa.disable_compressed_instr = true;
    cfg
}

/// Builds the catalog for `cfg`, failing the test on filter errors.
pub fn catalog(cfg: &Config) -> Catalog {
    Catalog::build(cfg).unwrap()
}

/// A fresh instruction instance for `name`, straight from the registry.
pub fn instr(name: InstrName) -> Instruction {
    Instruction::new(descriptor(name).unwrap())
}
