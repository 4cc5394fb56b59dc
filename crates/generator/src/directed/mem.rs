//! Shared plumbing for memory-access streams.

use rand::Rng;

use crate::catalog::Catalog;
use crate::common::{GenError, Result};
use crate::config::{Config, MemRegion};
use crate::isa::Reg;
use crate::isa::instruction::Instruction;
use crate::stream::RandStream;

/// A randomized stream bound to one family of data pages.
///
/// Selects the applicable region list (shared/AMO, kernel, or default),
/// prepends the base-register initialization, and interleaves filler
/// instructions between the memory accesses.
#[derive(Debug, Clone)]
pub struct MemAccessStream<'a> {
    /// The underlying randomized stream.
    pub rand: RandStream<'a>,
    /// Access the shared atomic-operation regions instead of the normal
    /// data pages.
    pub shared_memory: bool,
}

impl<'a> MemAccessStream<'a> {
    /// Creates a stream over the default data pages.
    #[must_use]
    pub fn new(catalog: &'a Catalog, cfg: &'a Config) -> Self {
        Self {
            rand: RandStream::new(catalog, cfg),
            shared_memory: false,
        }
    }

    /// The data pages this stream may target, picked by the shared-memory
    /// and kernel-mode flags.
    #[must_use]
    pub fn data_pages(&self) -> &'a [MemRegion] {
        let cfg = self.rand.cfg();
        if self.shared_memory {
            &cfg.mem.amo_region
        } else if self.rand.kernel_mode {
            &cfg.mem.s_mem_region
        } else {
            &cfg.mem.mem_region
        }
    }

    /// Picks a random page index from the applicable region list.
    ///
    /// # Errors
    ///
    /// Returns [`GenError::NoDataPage`] when the region list is empty.
    pub fn random_data_page(&self, rng: &mut impl Rng) -> Result<usize> {
        let pages = self.data_pages();
        if pages.is_empty() {
            return Err(GenError::NoDataPage {
                region: self.region_kind(),
            });
        }
        Ok(rng.gen_range(0..pages.len()))
    }

    fn region_kind(&self) -> &'static str {
        if self.shared_memory {
            "amo"
        } else if self.rand.kernel_mode {
            "kernel"
        } else {
            "data"
        }
    }

    /// Prepends `la gpr, <region>+<base>` so the accesses land inside the
    /// selected page.
    ///
    /// # Errors
    ///
    /// Returns [`GenError::NoDataPage`] when `page_id` does not name a
    /// page in the applicable region list.
    pub fn add_rs1_init_la_instr(&mut self, gpr: Reg, page_id: usize, base: i64) -> Result<()> {
        let pages = self.data_pages();
        let region = pages.get(page_id).ok_or(GenError::NoDataPage {
            region: self.region_kind(),
        })?;
        let la = Instruction::pseudo_la(gpr, format!("{}+{}", region.name, base));
        self.rand.stream.insert_instr_at(0, la)
    }

    /// Inserts `count` basic filler instructions at random non-atomic
    /// positions.
    ///
    /// # Errors
    ///
    /// Propagates selection and operand-assignment failures from the
    /// underlying randomized stream.
    pub fn add_mixed_instr(&mut self, count: usize, rng: &mut impl Rng) -> Result<()> {
        self.rand.setup_allowed_instr(true, true);
        for _ in 0..count {
            let instr = self.rand.randomize_instr(false, rng)?;
            self.rand.stream.insert_instr(instr, rng);
        }
        Ok(())
    }
}
