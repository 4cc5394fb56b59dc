//! Label-threaded jump chains.
//!
//! Emits an entry jump plus `n` numerically-labeled jumps arranged so
//! that control flow visits every jump exactly once in a shuffled order
//! before landing on the terminating instruction. Forward hops use `Nf`
//! references and backward hops `Nb`, so the chain exercises both branch
//! directions of the assembler's local-label resolution.

use rand::Rng;
use rand::seq::SliceRandom;

use crate::catalog::Catalog;
use crate::common::{GenError, Result};
use crate::config::Config;
use crate::isa::Reg;
use crate::isa::name::InstrName;
use crate::stream::RandStream;

/// Weighted link-register candidates: RA dominates so most of the chain
/// looks like ordinary calls, with occasional writes to the temporaries.
const RD_WEIGHTS: [(Reg, u32); 10] = [
    (Reg::Ra, 5),
    (Reg::Sp, 1),
    (Reg::Gp, 1),
    (Reg::Tp, 1),
    (Reg::T0, 1),
    (Reg::T2, 2),
    (Reg::T3, 2),
    (Reg::T4, 2),
    (Reg::T5, 2),
    (Reg::T6, 2),
];

/// A shuffled chain of unconditional jumps.
#[derive(Debug, Clone)]
pub struct JalStream<'a> {
    /// The underlying randomized stream.
    pub rand: RandStream<'a>,
    /// Number of chained jumps; zero draws 10-30 at random.
    pub num_of_jump_instr: usize,
}

impl<'a> JalStream<'a> {
    /// Creates an unrandomized chain.
    #[must_use]
    pub fn new(catalog: &'a Catalog, cfg: &'a Config) -> Self {
        Self {
            rand: RandStream::new(catalog, cfg),
            num_of_jump_instr: 0,
        }
    }

    /// Builds the chain: entry jump, `n` shuffled jumps, and a labeled
    /// terminating instruction. The whole sequence is atomic and every
    /// instruction keeps its numeric label.
    ///
    /// # Errors
    ///
    /// Fails when the jump destination register pool nets to nothing or
    /// instruction selection fails for the terminator.
    pub fn randomize(&mut self, rng: &mut impl Rng) -> Result<()> {
        let n = if self.num_of_jump_instr == 0 {
            rng.gen_range(10..=30)
        } else {
            self.num_of_jump_instr
        };
        let mut order: Vec<usize> = (0..n).collect();
        order.shuffle(rng);

        let catalog = self.rand.catalog();
        let cfg = self.rand.cfg();
        let mut jump_start = catalog.instance(InstrName::Jal)?;
        jump_start.rd = Reg::Ra;
        jump_start.imm_str = format!("{}f", order[0]);
        jump_start.label = self.rand.stream.label.clone();

        self.rand.setup_allowed_instr(true, true);
        let mut jump_end = self.rand.randomize_instr(false, rng)?;
        jump_end.label = n.to_string();

        let rd_pool: Vec<(Reg, u32)> = RD_WEIGHTS
            .iter()
            .copied()
            .filter(|(reg, _)| !cfg.regs.reserved_regs.contains(reg))
            .collect();
        let mut jumps: Vec<crate::isa::Instruction> = Vec::with_capacity(n);
        for i in 0..n {
            let mut jump = catalog.instance(InstrName::Jal)?;
            jump.rd = rd_pool
                .choose_weighted(rng, |(_, weight)| *weight)
                .map_err(|_| GenError::NoUsableRegister { role: "jump rd" })?
                .0;
            jump.label = i.to_string();
            jumps.push(jump);
        }
        // Thread the chain in shuffled visit order; the final visit
        // falls through to the terminator label.
        for i in 0..n {
            let target = if i == n - 1 {
                format!("{n}f")
            } else if order[i + 1] > order[i] {
                format!("{}f", order[i + 1])
            } else {
                format!("{}b", order[i + 1])
            };
            jumps[order[i]].imm_str = target;
        }

        self.rand.stream.push(jump_start);
        for jump in jumps {
            self.rand.stream.push(jump);
        }
        self.rand.stream.push(jump_end);
        for instr in &mut self.rand.stream.instrs {
            instr.has_label = true;
            instr.atomic = true;
        }
        Ok(())
    }
}
