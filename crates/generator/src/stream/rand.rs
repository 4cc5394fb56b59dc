//! Catalog-driven randomized instruction stream.
//!
//! A [`RandStream`] wraps the base stream with a catalog and
//! configuration reference, maintains the allowed-instruction working set
//! for the current request, and assigns operand registers from the
//! available pool.

use rand::Rng;
use rand::seq::SliceRandom;

use crate::catalog::{Catalog, Filter};
use crate::common::{GenError, Result};
use crate::config::Config;
use crate::isa::Reg;
use crate::isa::defs::{Category, Format};
use crate::isa::instruction::Instruction;
use crate::isa::name::InstrName;

/// A stream that fills itself with random instructions.
#[derive(Debug, Clone)]
pub struct RandStream<'a> {
    /// The underlying instruction sequence.
    pub stream: super::InstrStream,
    catalog: &'a Catalog,
    cfg: &'a Config,
    /// Generate for a kernel section instead of the user program.
    pub kernel_mode: bool,
    allowed_instr: Vec<InstrName>,
}

impl<'a> RandStream<'a> {
    /// Creates an empty randomized stream over `catalog` and `cfg`.
    #[must_use]
    pub fn new(catalog: &'a Catalog, cfg: &'a Config) -> Self {
        Self {
            stream: super::InstrStream::default(),
            catalog,
            cfg,
            kernel_mode: false,
            allowed_instr: Vec::new(),
        }
    }

    /// Shared configuration for this stream.
    #[must_use]
    pub fn cfg(&self) -> &'a Config {
        self.cfg
    }

    /// Shared catalog for this stream.
    #[must_use]
    pub fn catalog(&self) -> &'a Catalog {
        self.catalog
    }

    /// Rebuilds the allowed working set: the basic filler pool, widened
    /// with branches and loads/stores unless excluded.
    pub fn setup_allowed_instr(&mut self, no_branch: bool, no_load_store: bool) {
        self.allowed_instr = self.catalog.basic_instr().to_vec();
        if !no_branch {
            self.allowed_instr
                .extend_from_slice(self.catalog.in_category(Category::Branch));
        }
        if !no_load_store {
            self.allowed_instr
                .extend_from_slice(self.catalog.in_category(Category::Load));
            self.allowed_instr
                .extend_from_slice(self.catalog.in_category(Category::Store));
        }
    }

    /// Appends `count` random instructions, then trims any trailing
    /// branches so the stream never ends on a dangling branch target.
    ///
    /// # Errors
    ///
    /// Returns [`GenError::EmptySelection`] when the allowed set nets to
    /// nothing or operand assignment finds no usable register.
    pub fn gen_instr(
        &mut self,
        count: usize,
        no_branch: bool,
        no_load_store: bool,
        is_debug: bool,
        rng: &mut impl Rng,
    ) -> Result<()> {
        self.setup_allowed_instr(no_branch, no_load_store);
        for _ in 0..count {
            let instr = self.randomize_instr(is_debug, rng)?;
            self.stream.push(instr);
        }
        while self
            .stream
            .instrs
            .last()
            .is_some_and(|instr| instr.category == Category::Branch)
        {
            self.stream.instrs.pop();
        }
        Ok(())
    }

    /// Selects one instruction from the allowed set and assigns its
    /// operands.
    ///
    /// Stack-relative compressed instructions are excluded when the stack
    /// pointer is unavailable to this stream, and breakpoints are
    /// excluded inside debug ROM unless explicitly enabled.
    ///
    /// # Errors
    ///
    /// Returns [`GenError::EmptySelection`] when no candidate remains and
    /// [`GenError::NoUsableRegister`] when the register pool nets to
    /// nothing for a required operand.
    pub fn randomize_instr(&self, is_debug: bool, rng: &mut impl Rng) -> Result<Instruction> {
        let mut filter = Filter {
            include_instr: self.allowed_instr.clone(),
            ..Filter::default()
        };
        if self.sp_unavailable() {
            filter.exclude_instr.extend_from_slice(&[
                InstrName::CAddi4spn,
                InstrName::CAddi16sp,
                InstrName::CLwsp,
                InstrName::CLdsp,
            ]);
        }
        if is_debug && !self.cfg.program.enable_ebreak_in_debug_rom {
            filter
                .exclude_instr
                .extend_from_slice(&[InstrName::Ebreak, InstrName::CEbreak]);
        }
        let mut instr = self.catalog.random_instr(&filter, rng)?;
        self.randomize_gpr(&mut instr, rng)?;
        Ok(instr)
    }

    fn sp_unavailable(&self) -> bool {
        self.stream.reserved_rd.contains(&Reg::Sp)
            || self.cfg.regs.reserved_regs.contains(&Reg::Sp)
            || (!self.stream.avail_regs.is_empty() && !self.stream.avail_regs.contains(&Reg::Sp))
    }

    /// Assigns operand registers from the available pool, the scratch CSR
    /// for CSR instructions, and a fresh immediate.
    ///
    /// Destination registers (and the compare register of compressed
    /// branches) avoid both the configured reserved set and the stream's
    /// claimed destinations; plain sources draw from the full pool.
    ///
    /// # Errors
    ///
    /// Returns [`GenError::NoUsableRegister`] when a required operand has
    /// no candidate register.
    pub fn randomize_gpr(&self, instr: &mut Instruction, rng: &mut impl Rng) -> Result<()> {
        let pool: Vec<Reg> = if self.stream.avail_regs.is_empty() {
            self.cfg.regs.gpr_pool.clone()
        } else {
            self.stream.avail_regs.clone()
        };
        let pool: Vec<Reg> = if Self::needs_compressible_regs(instr.format) {
            pool.into_iter().filter(|reg| reg.is_compressible()).collect()
        } else {
            pool
        };
        let writable: Vec<Reg> = pool
            .iter()
            .copied()
            .filter(|reg| {
                !self.stream.reserved_rd.contains(reg)
                    && !self.cfg.regs.reserved_regs.contains(reg)
            })
            .collect();
        if instr.has_rd {
            instr.rd = if instr.name == InstrName::CAddi16sp {
                Reg::Sp
            } else {
                *writable
                    .choose(rng)
                    .ok_or(GenError::NoUsableRegister { role: "rd" })?
            };
        }
        if instr.has_rs1 {
            let rs1_pool = if instr.format == Format::Cb {
                &writable
            } else {
                &pool
            };
            instr.rs1 = *rs1_pool
                .choose(rng)
                .ok_or(GenError::NoUsableRegister { role: "rs1" })?;
        }
        if instr.has_rs2 {
            instr.rs2 = *pool
                .choose(rng)
                .ok_or(GenError::NoUsableRegister { role: "rs2" })?;
        }
        if instr.category == Category::Csr {
            instr.csr = self.catalog.scratch_csr();
        }
        instr.randomize_imm(self.cfg.isa.xlen, rng);
        Ok(())
    }

    /// Formats whose register fields only encode the x8-x15 window.
    fn needs_compressible_regs(format: Format) -> bool {
        matches!(
            format,
            Format::Ciw | Format::Cl | Format::Cs | Format::Cb | Format::Ca
        )
    }
}
