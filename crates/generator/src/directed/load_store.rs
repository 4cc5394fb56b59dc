//! The load/store directed stream family.
//!
//! One base stream randomizes a data page, a base address inside it, an
//! address-locality class, and a shared base register, then emits
//! `num_load_store` accesses whose instruction names are chosen per-access
//! from whatever the computed address alignment makes legal. Profiles
//! constrain the access count, the filler ratio, and (for the hazard
//! profile) how often an access reuses the previous address.

use rand::Rng;
use rand::seq::SliceRandom;

use crate::catalog::Catalog;
use crate::common::{GenError, Result};
use crate::config::Config;
use crate::isa::Reg;
use crate::isa::defs::Group;
use crate::isa::instruction::Instruction;
use crate::isa::name::InstrName;

use super::mem::MemAccessStream;

/// Address-locality class, each mapping to a bounded offset window
/// around the stream's base address.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Locality {
    /// Offsets within +/-16 bytes.
    Narrow,
    /// Offsets within +/-64 bytes.
    High,
    /// Offsets within +/-256 bytes.
    Medium,
    /// Offsets within +/-2048 bytes.
    Sparse,
}

const LOCALITIES: [Locality; 4] = [
    Locality::Narrow,
    Locality::High,
    Locality::Medium,
    Locality::Sparse,
];

impl Locality {
    /// Draws one offset inside this locality's window.
    pub fn random_offset(self, rng: &mut impl Rng) -> i64 {
        match self {
            Self::Narrow => rng.gen_range(-16..16),
            Self::High => rng.gen_range(-64..64),
            Self::Medium => rng.gen_range(-256..256),
            Self::Sparse => rng.gen_range(-2048..2047),
        }
    }
}

/// Count and filler constraints for one load/store stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Profile {
    /// Exactly one access with fewer than five filler instructions.
    Single,
    /// A 10-30 access burst with no filler.
    Stress,
    /// A stress burst against the shared atomic-operation region.
    SharedMem,
    /// 10-30 accesses mixed with 10-30 filler instructions.
    Rand,
    /// 10-20 accesses that reuse the previous address with the drawn
    /// probability, mixed with 1-7 filler instructions.
    Hazard,
}

impl Profile {
    fn name(self) -> &'static str {
        match self {
            Self::Single => "single_load_store",
            Self::Stress => "load_store_stress",
            Self::SharedMem => "load_store_shared_mem",
            Self::Rand => "load_store_rand",
            Self::Hazard => "load_store_hazard",
        }
    }
}

/// The base load/store stream, parameterized by a [`Profile`].
#[derive(Debug, Clone)]
pub struct LoadStoreStream<'a> {
    /// Data-page plumbing and the underlying stream.
    pub mem: MemAccessStream<'a>,
    profile: Profile,
    /// Lower access-count bound for the stress profile. Composite
    /// streams override this.
    pub min_instr_cnt: usize,
    /// Upper access-count bound for the stress profile.
    pub max_instr_cnt: usize,
    /// Pin the base register instead of drawing one.
    pub fixed_rs1: Option<Reg>,
    /// Pin the data page instead of drawing one.
    pub fixed_page: Option<usize>,
    /// The shared base register of all accesses.
    pub rs1: Reg,
    /// Base byte offset inside the data page.
    pub base: i64,
    /// Index of the selected data page.
    pub data_page_id: usize,
    offsets: Vec<i64>,
    addrs: Vec<i64>,
    /// The generated memory-access instructions, in emission order.
    pub load_store_instr: Vec<Instruction>,
}

impl<'a> LoadStoreStream<'a> {
    /// Creates an unrandomized stream for `profile`.
    #[must_use]
    pub fn new(catalog: &'a Catalog, cfg: &'a Config, profile: Profile) -> Self {
        let mut mem = MemAccessStream::new(catalog, cfg);
        mem.shared_memory = profile == Profile::SharedMem;
        Self {
            mem,
            profile,
            min_instr_cnt: 10,
            max_instr_cnt: 30,
            fixed_rs1: None,
            fixed_page: None,
            rs1: Reg::Zero,
            base: 0,
            data_page_id: 0,
            offsets: Vec::new(),
            addrs: Vec::new(),
            load_store_instr: Vec::new(),
        }
    }

    /// Builds the full stream: accesses, filler, and the base-register
    /// initialization, then seals it as a directed sequence.
    ///
    /// # Errors
    ///
    /// Fails when no data page or base register is available, or when
    /// instruction selection nets to nothing.
    pub fn randomize(&mut self, rng: &mut impl Rng) -> Result<()> {
        let (num_load_store, num_mixed) = self.draw_counts(rng);
        let hazard_ratio = if self.profile == Profile::Hazard {
            Some(rng.gen_range(20..=100))
        } else {
            None
        };
        self.data_page_id = match self.fixed_page {
            Some(id) => id,
            None => self.mem.random_data_page(rng)?,
        };
        let page_size = i64::from(self.mem.data_pages()[self.data_page_id].size_in_bytes);
        self.base = rng.gen_range(0..page_size);
        self.rs1 = match self.fixed_rs1 {
            Some(reg) => reg,
            None => self.draw_rs1(rng)?,
        };
        let locality = *LOCALITIES
            .choose(rng)
            .ok_or(GenError::EmptySelection { context: "locality" })?;
        self.randomize_offset(num_load_store, locality, hazard_ratio, rng);
        if !self.mem.rand.stream.reserved_rd.contains(&self.rs1) {
            self.mem.rand.stream.reserved_rd.push(self.rs1);
        }
        self.gen_load_store_instr(rng)?;
        self.mem.add_mixed_instr(num_mixed, rng)?;
        self.mem
            .add_rs1_init_la_instr(self.rs1, self.data_page_id, self.base)?;
        super::finish(&mut self.mem.rand.stream, self.profile.name());
        Ok(())
    }

    /// Same as [`Self::randomize`] but leaves the stream unsealed, for
    /// composite streams that mix several bursts before finishing.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`Self::randomize`].
    pub fn randomize_raw(&mut self, rng: &mut impl Rng) -> Result<()> {
        let (num_load_store, num_mixed) = self.draw_counts(rng);
        self.data_page_id = match self.fixed_page {
            Some(id) => id,
            None => self.mem.random_data_page(rng)?,
        };
        let page_size = i64::from(self.mem.data_pages()[self.data_page_id].size_in_bytes);
        self.base = rng.gen_range(0..page_size);
        self.rs1 = match self.fixed_rs1 {
            Some(reg) => reg,
            None => self.draw_rs1(rng)?,
        };
        let locality = *LOCALITIES
            .choose(rng)
            .ok_or(GenError::EmptySelection { context: "locality" })?;
        self.randomize_offset(num_load_store, locality, None, rng);
        if !self.mem.rand.stream.reserved_rd.contains(&self.rs1) {
            self.mem.rand.stream.reserved_rd.push(self.rs1);
        }
        self.gen_load_store_instr(rng)?;
        self.mem.add_mixed_instr(num_mixed, rng)?;
        self.mem
            .add_rs1_init_la_instr(self.rs1, self.data_page_id, self.base)
    }

    fn draw_counts(&self, rng: &mut impl Rng) -> (usize, usize) {
        match self.profile {
            Profile::Single => (1, rng.gen_range(0..5)),
            Profile::Stress | Profile::SharedMem => {
                (rng.gen_range(self.min_instr_cnt..=self.max_instr_cnt), 0)
            }
            Profile::Rand => (rng.gen_range(10..=30), rng.gen_range(10..=30)),
            Profile::Hazard => (rng.gen_range(10..=20), rng.gen_range(1..=7)),
        }
    }

    /// Draws the shared base register: the stack pointer with one-in-three
    /// probability when available, otherwise any unreserved pool register.
    fn draw_rs1(&self, rng: &mut impl Rng) -> Result<Reg> {
        let cfg = self.mem.rand.cfg();
        let reserved_rd = &self.mem.rand.stream.reserved_rd;
        let sp_usable =
            !cfg.regs.reserved_regs.contains(&Reg::Sp) && !reserved_rd.contains(&Reg::Sp);
        if sp_usable && rng.gen_ratio(1, 3) {
            return Ok(Reg::Sp);
        }
        let pool: Vec<Reg> = cfg
            .regs
            .gpr_pool
            .iter()
            .copied()
            .filter(|reg| {
                *reg != Reg::Zero
                    && !cfg.regs.reserved_regs.contains(reg)
                    && !reserved_rd.contains(reg)
            })
            .collect();
        pool.choose(rng)
            .copied()
            .ok_or(GenError::NoUsableRegister { role: "rs1 base" })
    }

    fn randomize_offset(
        &mut self,
        count: usize,
        locality: Locality,
        hazard_ratio: Option<i64>,
        rng: &mut impl Rng,
    ) {
        self.offsets.clear();
        self.addrs.clear();
        // One draw decides reuse for the whole stream, so a high ratio
        // yields long same-address runs.
        let reuse_draw = rng.gen_range(0..100);
        for i in 0..count {
            if i > 0 && hazard_ratio.is_some_and(|ratio| reuse_draw < ratio) {
                self.offsets.push(self.offsets[i - 1]);
                self.addrs.push(self.addrs[i - 1]);
            } else {
                let offset = locality.random_offset(rng);
                let addr = rng.gen_range(self.base + offset - 1..self.base + offset + 1);
                self.offsets.push(offset);
                self.addrs.push(addr);
            }
        }
    }

    /// Emits one access per computed address, selecting among the
    /// instruction names the address alignment makes legal.
    fn gen_load_store_instr(&mut self, rng: &mut impl Rng) -> Result<()> {
        let cfg = self.mem.rand.cfg();
        let catalog = self.mem.rand.catalog();
        for i in 0..self.addrs.len() {
            let candidates = aligned_candidates(self.addrs[i], self.offsets[i], self.rs1, cfg);
            let mut instr = catalog.random_load_store(&candidates, rng)?;
            let (had_rs1, had_imm) = (instr.has_rs1, instr.has_imm);
            instr.has_rs1 = false;
            instr.has_imm = false;
            self.mem.rand.randomize_gpr(&mut instr, rng)?;
            instr.has_rs1 = had_rs1;
            instr.has_imm = had_imm;
            instr.rs1 = self.rs1;
            instr.imm = self.offsets[i] as i32 as u32;
            instr.update_imm_str();
            self.load_store_instr.push(instr.clone());
            self.mem.rand.stream.push(instr);
        }
        Ok(())
    }
}

/// Collects the load/store names legal for `addr`, honoring alignment
/// unless unaligned accesses are enabled.
///
/// Compressed forms additionally require the base register to be
/// compressible (or the stack pointer, switching to the SP-relative
/// forms) and the offset to fit the compressed immediate window.
pub(crate) fn aligned_candidates(addr: i64, offset: i64, rs1: Reg, cfg: &Config) -> Vec<InstrName> {
    let mut candidates = vec![InstrName::Lb, InstrName::Lbu, InstrName::Sb];
    let compressed_ok =
        (rs1.is_compressible() || rs1 == Reg::Sp) && !cfg.isa.disable_compressed_instr;
    let word_compressed = compressed_ok && (0..128).contains(&offset) && offset % 4 == 0;
    let double_compressed = compressed_ok && (0..256).contains(&offset) && offset % 8 == 0;
    let rv32c = cfg.isa.supported_isa.contains(&Group::Rv32c);
    let rv64c = cfg.isa.supported_isa.contains(&Group::Rv64c);

    let add_word_compressed = |candidates: &mut Vec<InstrName>| {
        if word_compressed && rv32c {
            if rs1 == Reg::Sp {
                candidates.extend_from_slice(&[InstrName::CLwsp, InstrName::CSwsp]);
            } else {
                candidates.extend_from_slice(&[InstrName::CLw, InstrName::CSw]);
            }
        }
    };
    let add_double_compressed = |candidates: &mut Vec<InstrName>| {
        if double_compressed && rv64c {
            if rs1 == Reg::Sp {
                candidates.extend_from_slice(&[InstrName::CLdsp, InstrName::CSdsp]);
            } else {
                candidates.extend_from_slice(&[InstrName::CLd, InstrName::CSd]);
            }
        }
    };

    if cfg.program.enable_unaligned_load_store {
        candidates.extend_from_slice(&[
            InstrName::Lh,
            InstrName::Lhu,
            InstrName::Sh,
            InstrName::Lw,
            InstrName::Sw,
        ]);
        add_word_compressed(&mut candidates);
        if cfg.isa.xlen >= 64 {
            candidates.extend_from_slice(&[InstrName::Lwu, InstrName::Ld, InstrName::Sd]);
            add_double_compressed(&mut candidates);
        }
    } else {
        if addr % 2 == 0 {
            candidates.extend_from_slice(&[InstrName::Lh, InstrName::Lhu, InstrName::Sh]);
        }
        if addr % 4 == 0 {
            candidates.extend_from_slice(&[InstrName::Lw, InstrName::Sw]);
            add_word_compressed(&mut candidates);
        }
        if cfg.isa.xlen >= 64 && addr % 8 == 0 {
            candidates.extend_from_slice(&[InstrName::Lwu, InstrName::Ld, InstrName::Sd]);
            add_double_compressed(&mut candidates);
        }
    }
    candidates
}
