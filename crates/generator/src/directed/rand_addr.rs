//! Loads and stores against an arbitrary, unbacked address window.
//!
//! Picks an unused 4 KiB-aligned window above 1 MiB, materializes it into
//! the base register with `li`/`add`, and emits a short burst of accesses
//! with offsets across the full signed 12-bit range. Because nothing
//! preloads that memory, every location a load will read is first
//! initialized with a matching-width store.

use rand::Rng;
use rand::seq::SliceRandom;

use crate::catalog::Catalog;
use crate::common::{GenError, Result};
use crate::config::Config;
use crate::isa::Reg;
use crate::isa::abi::ALL_REGS;
use crate::isa::defs::Category;
use crate::isa::instruction::Instruction;
use crate::isa::name::InstrName;

use super::load_store::aligned_candidates;
use super::mem::MemAccessStream;

/// A load/store stream over a random absolute address window.
#[derive(Debug, Clone)]
pub struct RandAddrStream<'a> {
    /// Data-page plumbing and the underlying stream.
    pub mem: MemAccessStream<'a>,
    /// Base register holding the window address.
    pub rs1: Reg,
    /// The selected window base address.
    pub addr_offset: u64,
    offsets: Vec<i64>,
    load_store_instr: Vec<Instruction>,
}

impl<'a> RandAddrStream<'a> {
    /// Creates an unrandomized stream.
    #[must_use]
    pub fn new(catalog: &'a Catalog, cfg: &'a Config) -> Self {
        Self {
            mem: MemAccessStream::new(catalog, cfg),
            rs1: Reg::Zero,
            addr_offset: 0,
            offsets: Vec::new(),
            load_store_instr: Vec::new(),
        }
    }

    /// Builds and seals the stream.
    ///
    /// # Errors
    ///
    /// Fails when no base or scratch register is available, when
    /// instruction selection nets to nothing, or when a generated load
    /// has no matching-width store for initialization.
    pub fn randomize(&mut self, rng: &mut impl Rng) -> Result<()> {
        // A free 4K page somewhere in [1M, 2M).
        self.addr_offset = 0x10_0000 | (u64::from(rng.gen_range(0u32..256)) << 12);
        let num_load_store = rng.gen_range(5..=10);
        let num_mixed = rng.gen_range(5..=10);
        self.rs1 = self.draw_rs1(rng)?;
        self.offsets = (0..num_load_store)
            .map(|_| rng.gen_range(-2048..2047))
            .collect();
        if !self.mem.rand.stream.reserved_rd.contains(&self.rs1) {
            self.mem.rand.stream.reserved_rd.push(self.rs1);
        }
        self.gen_load_store_instr(rng)?;
        self.mem.add_mixed_instr(num_mixed, rng)?;
        self.add_window_init_instr(rng)?;
        super::finish(&mut self.mem.rand.stream, "load_store_rand_addr");
        Ok(())
    }

    fn draw_rs1(&self, rng: &mut impl Rng) -> Result<Reg> {
        let cfg = self.mem.rand.cfg();
        let pool: Vec<Reg> = cfg
            .regs
            .gpr_pool
            .iter()
            .copied()
            .filter(|reg| {
                *reg != Reg::Zero
                    && !cfg.regs.reserved_regs.contains(reg)
                    && !self.mem.rand.stream.reserved_rd.contains(reg)
            })
            .collect();
        pool.choose(rng)
            .copied()
            .ok_or(GenError::NoUsableRegister { role: "rs1 base" })
    }

    fn gen_load_store_instr(&mut self, rng: &mut impl Rng) -> Result<()> {
        let cfg = self.mem.rand.cfg();
        let catalog = self.mem.rand.catalog();
        for i in 0..self.offsets.len() {
            let offset = self.offsets[i];
            let addr = self.addr_offset as i64 + offset;
            let candidates = aligned_candidates(addr, offset, self.rs1, cfg);
            let mut instr = catalog.random_load_store(&candidates, rng)?;
            let (had_rs1, had_imm) = (instr.has_rs1, instr.has_imm);
            instr.has_rs1 = false;
            instr.has_imm = false;
            self.mem.rand.randomize_gpr(&mut instr, rng)?;
            instr.has_rs1 = had_rs1;
            instr.has_imm = had_imm;
            instr.rs1 = self.rs1;
            instr.imm = offset as i32 as u32;
            instr.update_imm_str();
            self.load_store_instr.push(instr.clone());
            self.mem.rand.stream.push(instr);
        }
        Ok(())
    }

    /// Prepends the window-address setup and one initializing store per
    /// generated load.
    fn add_window_init_instr(&mut self, rng: &mut impl Rng) -> Result<()> {
        let cfg = self.mem.rand.cfg();
        let catalog = self.mem.rand.catalog();
        let tmp: Vec<Reg> = cfg
            .regs
            .gpr_pool
            .iter()
            .copied()
            .filter(|reg| *reg != self.rs1 && !cfg.regs.reserved_regs.contains(reg))
            .collect();
        let tmp = tmp
            .choose(rng)
            .copied()
            .ok_or(GenError::NoUsableRegister { role: "window scratch" })?;
        let mut init = vec![Instruction::pseudo_li(tmp, format!("0x{:x}", self.addr_offset))];
        let mut add = catalog.instance(InstrName::Add)?;
        add.rs1 = tmp;
        add.rs2 = Reg::Zero;
        add.rd = self.rs1;
        init.push(add);
        for (i, load) in self
            .load_store_instr
            .iter()
            .filter(|instr| instr.category == Category::Load)
            .enumerate()
        {
            let mut store = catalog.instance(matching_store(load.name)?)?;
            store.rs1 = self.rs1;
            store.rs2 = ALL_REGS[i % ALL_REGS.len()];
            store.imm = load.imm;
            store.imm_str = load.imm_str.clone();
            init.push(store);
        }
        for (idx, instr) in init.into_iter().enumerate() {
            self.mem.rand.stream.insert_instr_at(idx, instr)?;
        }
        Ok(())
    }
}

/// Maps a load to the store of the same access width.
fn matching_store(load: InstrName) -> Result<InstrName> {
    match load {
        InstrName::Lb | InstrName::Lbu => Ok(InstrName::Sb),
        InstrName::Lh | InstrName::Lhu => Ok(InstrName::Sh),
        InstrName::Lw | InstrName::CLw | InstrName::CLwsp => Ok(InstrName::Sw),
        InstrName::Ld | InstrName::CLd | InstrName::CLdsp | InstrName::Lwu => Ok(InstrName::Sd),
        _ => Err(GenError::UnmappedStore(load)),
    }
}
