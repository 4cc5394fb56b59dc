//! Integer corner-value workloads.
//!
//! Seeds a set of registers with boundary values (zero, all ones, the
//! most negative representable value, plus ordinary random words) and
//! then runs arithmetic over exactly that register set, driving the
//! datapath through its sign and carry corners.

use rand::Rng;
use rand::seq::SliceRandom;

use crate::catalog::{Catalog, Filter};
use crate::common::{GenError, Result};
use crate::config::Config;
use crate::isa::{Category, Group, Instruction, Reg};
use crate::stream::RandStream;

/// How many registers get a corner value preloaded.
const NUM_SEEDED_REGS: usize = 10;

/// Value pattern assigned to one seeded register.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CornerKind {
    Normal,
    Zero,
    AllOnes,
    NegativeMax,
}

const CORNER_KINDS: [CornerKind; 4] = [
    CornerKind::Normal,
    CornerKind::Zero,
    CornerKind::AllOnes,
    CornerKind::NegativeMax,
];

/// Arithmetic stream over corner-initialized registers.
#[derive(Debug, Clone)]
pub struct NumericCornerStream<'a> {
    /// The underlying randomized stream.
    pub rand: RandStream<'a>,
    /// Number of arithmetic instructions; zero draws 15-30 at random.
    pub num_of_instr: usize,
}

impl<'a> NumericCornerStream<'a> {
    /// Creates an unrandomized corner stream.
    #[must_use]
    pub fn new(catalog: &'a Catalog, cfg: &'a Config) -> Self {
        Self {
            rand: RandStream::new(catalog, cfg),
            num_of_instr: 0,
        }
    }

    /// Picks the seeded registers, emits their `li` preloads, then fills
    /// the stream with base-ISA arithmetic restricted to those registers.
    ///
    /// # Errors
    ///
    /// Fails when the register pool cannot supply enough seed registers
    /// or arithmetic instruction selection comes up empty.
    pub fn randomize(&mut self, rng: &mut impl Rng) -> Result<()> {
        let cfg = self.rand.cfg();
        let xlen = u32::from(cfg.isa.xlen);
        let mut pool: Vec<Reg> = cfg
            .regs
            .gpr_pool
            .iter()
            .copied()
            .filter(|reg| *reg != Reg::Zero && !cfg.regs.reserved_regs.contains(reg))
            .collect();
        if pool.len() < NUM_SEEDED_REGS {
            return Err(GenError::NoUsableRegister {
                role: "numeric corner seed",
            });
        }
        pool.shuffle(rng);
        pool.truncate(NUM_SEEDED_REGS);

        for &reg in &pool {
            let value = corner_value(xlen, rng);
            self.rand
                .stream
                .push(Instruction::pseudo_li(reg, format!("0x{value:x}")));
        }
        self.rand.stream.avail_regs = pool;

        let count = if self.num_of_instr == 0 {
            rng.gen_range(15..=30)
        } else {
            self.num_of_instr
        };
        let filter = Filter {
            include_category: vec![Category::Arithmetic],
            exclude_group: vec![
                Group::Rv32c,
                Group::Rv64c,
                Group::Rv32f,
                Group::Rv64f,
                Group::Rv32d,
                Group::Rv64d,
            ],
            ..Filter::default()
        };
        for _ in 0..count {
            let mut instr = self.rand.catalog().random_instr(&filter, rng)?;
            self.rand.randomize_gpr(&mut instr, rng)?;
            self.rand.stream.push(instr);
        }
        super::finish(&mut self.rand.stream, "int_numeric_corner");
        Ok(())
    }
}

fn corner_value(xlen: u32, rng: &mut impl Rng) -> u64 {
    let mask = (!0u64) >> (64 - xlen);
    let kind = CORNER_KINDS
        .choose(rng)
        .copied()
        .unwrap_or(CornerKind::Normal);
    match kind {
        CornerKind::Normal => rng.gen_range(0..=u64::MAX) & mask,
        CornerKind::Zero => 0,
        CornerKind::AllOnes => mask,
        CornerKind::NegativeMax => 1 << (xlen - 1),
    }
}
