//! Interleaved load/store bursts across data pages.
//!
//! Composes several short stress bursts, each bound to its own data page
//! and base register, and mixes their instruction lists together. Because
//! consecutive accesses then keep switching pages, the result exercises
//! data-TLB switch and replacement. A region-stress variant pins every
//! burst to the same page to hammer one region's address range instead.

use rand::Rng;
use rand::seq::SliceRandom;

use crate::catalog::Catalog;
use crate::common::{GenError, Result};
use crate::config::Config;
use crate::isa::Reg;

use super::load_store::{LoadStoreStream, Profile};
use super::mem::MemAccessStream;

/// Sub-stream access-count bounds; kept short so each burst fits one
/// base register without starving the others.
const SUB_MIN_INSTR: usize = 5;
const SUB_MAX_INSTR: usize = 10;

/// A composite stream of page-bound stress bursts.
#[derive(Debug, Clone)]
pub struct MultiPageStream<'a> {
    /// Data-page plumbing and the composed stream.
    pub mem: MemAccessStream<'a>,
    /// Pin all bursts to one shared page instead of distinct pages.
    pub same_page: bool,
}

impl<'a> MultiPageStream<'a> {
    /// Creates an unrandomized stream; `same_page` selects the
    /// region-stress variant.
    #[must_use]
    pub fn new(catalog: &'a Catalog, cfg: &'a Config, same_page: bool) -> Self {
        Self {
            mem: MemAccessStream::new(catalog, cfg),
            same_page,
        }
    }

    /// Builds, mixes, and seals the composite stream.
    ///
    /// # Errors
    ///
    /// Fails when too few data pages or base registers exist to give each
    /// burst its own, or when a burst itself fails to randomize.
    pub fn randomize(&mut self, rng: &mut impl Rng) -> Result<()> {
        let pages = self.mem.data_pages();
        if pages.is_empty() || (!self.same_page && pages.len() < 2) {
            return Err(GenError::EmptySelection {
                context: "multi-page data pages",
            });
        }
        let num_streams = if self.same_page {
            rng.gen_range(2..=5)
        } else {
            rng.gen_range(2..=8).min(pages.len())
        };
        let page_ids = self.draw_page_ids(num_streams, rng);
        let base_regs = self.draw_base_regs(num_streams, rng)?;
        let catalog = self.mem.rand.catalog();
        let cfg = self.mem.rand.cfg();
        for i in 0..num_streams {
            let mut sub = LoadStoreStream::new(catalog, cfg, Profile::Stress);
            sub.min_instr_cnt = SUB_MIN_INSTR;
            sub.max_instr_cnt = SUB_MAX_INSTR;
            sub.fixed_page = Some(page_ids[i]);
            sub.fixed_rs1 = Some(base_regs[i]);
            sub.mem.rand.stream.hart = self.mem.rand.stream.hart;
            sub.mem.rand.kernel_mode = self.mem.rand.kernel_mode;
            // Each burst must not clobber the base registers of its
            // siblings.
            for (j, reg) in base_regs.iter().enumerate() {
                if i != j {
                    sub.mem.rand.stream.reserved_rd.push(*reg);
                }
            }
            sub.randomize_raw(rng)?;
            if i == 0 {
                self.mem.rand.stream.instrs = sub.mem.rand.stream.instrs;
            } else {
                self.mem
                    .rand
                    .stream
                    .mix_stream(sub.mem.rand.stream.instrs, false, rng)?;
            }
        }
        let name = if self.same_page {
            "mem_region_stress"
        } else {
            "multi_page_load_store"
        };
        super::finish(&mut self.mem.rand.stream, name);
        Ok(())
    }

    fn draw_page_ids(&self, num_streams: usize, rng: &mut impl Rng) -> Vec<usize> {
        let pages = self.mem.data_pages();
        if self.same_page {
            let id = rng.gen_range(0..pages.len());
            return vec![id; num_streams];
        }
        let mut ids: Vec<usize> = (0..pages.len()).collect();
        ids.shuffle(rng);
        ids.truncate(num_streams);
        ids
    }

    /// Draws one distinct base register per burst, excluding reserved
    /// registers and ZERO.
    fn draw_base_regs(&self, num_streams: usize, rng: &mut impl Rng) -> Result<Vec<Reg>> {
        let cfg = self.mem.rand.cfg();
        let mut pool: Vec<Reg> = cfg
            .regs
            .gpr_pool
            .iter()
            .copied()
            .filter(|reg| *reg != Reg::Zero && !cfg.regs.reserved_regs.contains(reg))
            .collect();
        if pool.len() < num_streams {
            return Err(GenError::NoUsableRegister { role: "rs1 base" });
        }
        pool.shuffle(rng);
        pool.truncate(num_streams);
        Ok(pool)
    }
}
