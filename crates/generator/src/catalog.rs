//! The filtered instruction catalog.
//!
//! A [`Catalog`] is built once per [`Config`] and then shared read-only by
//! every stream. Building it:
//! 1. Filters the static descriptor registry down to the names the target
//!    can execute.
//! 2. Indexes the surviving names by category and by group.
//! 3. Derives the "basic" subset used as stream filler.
//! 4. Caches one template [`Instruction`] per name; selection hands out
//!    clones of these templates.

use std::collections::HashMap;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::common::{GenError, Result};
use crate::config::Config;
use crate::isa::defs::{Category, Group, PrivilegedMode};
use crate::isa::instruction::Instruction;
use crate::isa::name::InstrName;
use crate::isa::tables::DESCRIPTORS;

/// Picks this many times against the exclude list before falling back to
/// materializing the filtered candidate set.
const PICK_RETRY_LIMIT: usize = 100;

/// Inclusion and exclusion sets for one random selection.
///
/// Include sets narrow the candidate pool, with explicit names taking
/// priority over category/group unions; exclude sets always apply.
#[derive(Debug, Clone, Default)]
pub struct Filter {
    /// Exact names to select from. When non-empty, overrides the
    /// category/group includes.
    pub include_instr: Vec<InstrName>,
    /// Categories whose members are candidates.
    pub include_category: Vec<Category>,
    /// Groups whose members are candidates.
    pub include_group: Vec<Group>,
    /// Names never selected.
    pub exclude_instr: Vec<InstrName>,
    /// Categories whose members are never selected.
    pub exclude_category: Vec<Category>,
    /// Groups whose members are never selected.
    pub exclude_group: Vec<Group>,
}

impl Filter {
    /// A filter with no restrictions.
    #[must_use]
    pub fn any() -> Self {
        Self::default()
    }
}

/// The per-configuration instruction pool.
#[derive(Debug, Clone)]
pub struct Catalog {
    instr_names: Vec<InstrName>,
    instr_category: HashMap<Category, Vec<InstrName>>,
    instr_group: HashMap<Group, Vec<InstrName>>,
    basic_instr: Vec<InstrName>,
    templates: HashMap<InstrName, Instruction>,
    privileged_mode: PrivilegedMode,
}

impl Catalog {
    /// Builds the catalog for `cfg`.
    ///
    /// Filtering drops, in order: names on the unsupported list, `C.JAL`
    /// on non-RV32 targets, `C.ADDI16SP` when the stack pointer is
    /// reserved, `SFENCE.VMA` when the target does not support it, all
    /// fence instructions, and finally every name whose group is outside
    /// the supported set (or belongs to a disabled compressed or
    /// floating-point group).
    ///
    /// # Errors
    ///
    /// Returns [`GenError::EmptySelection`] when no instruction survives
    /// filtering.
    pub fn build(cfg: &Config) -> Result<Self> {
        let mut catalog = Self {
            instr_names: Vec::new(),
            instr_category: HashMap::new(),
            instr_group: HashMap::new(),
            basic_instr: Vec::new(),
            templates: HashMap::new(),
            privileged_mode: cfg.program.init_privileged_mode,
        };
        for desc in DESCRIPTORS {
            if cfg.isa.unsupported_instr.contains(&desc.name) {
                continue;
            }
            if desc.name == InstrName::CJal && cfg.isa.xlen != 32 {
                continue;
            }
            if desc.name == InstrName::CAddi16sp && cfg.sp_reserved() {
                continue;
            }
            if desc.name == InstrName::SfenceVma && !cfg.isa.enable_sfence {
                continue;
            }
            // Fences are only emitted by dedicated directed sequences,
            // never picked at random.
            if matches!(
                desc.name,
                InstrName::Fence | InstrName::FenceI | InstrName::SfenceVma
            ) {
                continue;
            }
            if !cfg.isa.supported_isa.contains(&desc.group) {
                continue;
            }
            if cfg.isa.disable_compressed_instr && desc.group.is_compressed() {
                continue;
            }
            if !cfg.isa.enable_floating_point && desc.group.is_floating_point() {
                continue;
            }
            catalog.instr_names.push(desc.name);
            catalog
                .instr_category
                .entry(desc.category)
                .or_default()
                .push(desc.name);
            catalog
                .instr_group
                .entry(desc.group)
                .or_default()
                .push(desc.name);
            catalog.templates.insert(desc.name, Instruction::new(desc));
        }
        if catalog.instr_names.is_empty() {
            tracing::error!("no instruction survives the configured filters");
            return Err(GenError::EmptySelection {
                context: "catalog build",
            });
        }
        catalog.build_basic_instr(cfg);
        tracing::debug!(
            total = catalog.instr_names.len(),
            basic = catalog.basic_instr.len(),
            "catalog built"
        );
        Ok(catalog)
    }

    /// Collects the filler subset: the plain computational categories
    /// plus whatever privileged names the program knobs allow.
    fn build_basic_instr(&mut self, cfg: &Config) {
        let mut basic: Vec<InstrName> = Vec::new();
        for category in [
            Category::Shift,
            Category::Arithmetic,
            Category::Logical,
            Category::Compare,
        ] {
            basic.extend_from_slice(self.in_category(category));
        }
        if !cfg.program.no_ebreak {
            basic.push(InstrName::Ebreak);
            if cfg.isa.supported_isa.contains(&Group::Rv32c) && !cfg.isa.disable_compressed_instr {
                basic.push(InstrName::CEbreak);
            }
        }
        if !cfg.program.no_dret {
            basic.push(InstrName::Dret);
        }
        if !cfg.program.no_fence {
            basic.extend_from_slice(self.in_category(Category::Synch));
        }
        if !cfg.program.no_csr_instr
            && cfg.program.init_privileged_mode == PrivilegedMode::Machine
        {
            basic.extend_from_slice(self.in_category(Category::Csr));
        }
        if !cfg.program.no_wfi {
            basic.push(InstrName::Wfi);
        }
        basic.retain(|name| self.templates.contains_key(name));
        basic.dedup();
        self.basic_instr = basic;
    }

    /// Names that survived filtering, in registry order.
    #[must_use]
    pub fn instr_names(&self) -> &[InstrName] {
        &self.instr_names
    }

    /// The filler subset used between directed sequences.
    #[must_use]
    pub fn basic_instr(&self) -> &[InstrName] {
        &self.basic_instr
    }

    /// Surviving names in `category`, or an empty slice.
    #[must_use]
    pub fn in_category(&self, category: Category) -> &[InstrName] {
        self.instr_category
            .get(&category)
            .map_or(&[], Vec::as_slice)
    }

    /// Surviving names in `group`, or an empty slice.
    #[must_use]
    pub fn in_group(&self, group: Group) -> &[InstrName] {
        self.instr_group.get(&group).map_or(&[], Vec::as_slice)
    }

    /// The scratch CSR address matching the configured privileged mode.
    #[must_use]
    pub fn scratch_csr(&self) -> u16 {
        match self.privileged_mode {
            PrivilegedMode::Machine => 0x340,
            PrivilegedMode::Supervisor => 0x140,
            PrivilegedMode::User => 0x040,
        }
    }

    /// Hands out a fresh copy of the template for `name`.
    ///
    /// # Errors
    ///
    /// Returns [`GenError::UnknownInstruction`] when `name` did not
    /// survive filtering.
    pub fn instance(&self, name: InstrName) -> Result<Instruction> {
        self.templates
            .get(&name)
            .cloned()
            .ok_or(GenError::UnknownInstruction(name))
    }

    /// Selects a random instruction under `filter`.
    ///
    /// # Errors
    ///
    /// Returns [`GenError::EmptySelection`] when the include sets net to
    /// nothing or the exclude sets reject every candidate.
    pub fn random_instr(&self, filter: &Filter, rng: &mut impl Rng) -> Result<Instruction> {
        let allowed = self.allowed_names(filter);
        if allowed.is_empty() {
            tracing::error!(?filter, "random selection has no candidates");
            return Err(GenError::EmptySelection {
                context: "random instruction",
            });
        }
        let mut disallowed: Vec<InstrName> = filter.exclude_instr.clone();
        for category in &filter.exclude_category {
            disallowed.extend_from_slice(self.in_category(*category));
        }
        for group in &filter.exclude_group {
            disallowed.extend_from_slice(self.in_group(*group));
        }
        if disallowed.is_empty() {
            let name = allowed[rng.gen_range(0..allowed.len())];
            return self.instance(name);
        }
        for _ in 0..PICK_RETRY_LIMIT {
            let name = allowed[rng.gen_range(0..allowed.len())];
            if !disallowed.contains(&name) {
                return self.instance(name);
            }
        }
        let remaining: Vec<InstrName> = allowed
            .iter()
            .copied()
            .filter(|name| !disallowed.contains(name))
            .collect();
        match remaining.choose(rng) {
            Some(name) => self.instance(*name),
            None => {
                tracing::error!(?filter, "exclude sets reject every candidate");
                Err(GenError::EmptySelection {
                    context: "random instruction",
                })
            }
        }
    }

    /// Selects a random load/store instruction from `candidates`, or from
    /// all surviving loads and stores when `candidates` is empty.
    ///
    /// # Errors
    ///
    /// Returns [`GenError::EmptySelection`] when no load/store candidate
    /// exists.
    pub fn random_load_store(
        &self,
        candidates: &[InstrName],
        rng: &mut impl Rng,
    ) -> Result<Instruction> {
        let pool: Vec<InstrName> = if candidates.is_empty() {
            let mut pool = self.in_category(Category::Load).to_vec();
            pool.extend_from_slice(self.in_category(Category::Store));
            pool
        } else {
            candidates
                .iter()
                .copied()
                .filter(|name| self.templates.contains_key(name))
                .collect()
        };
        match pool.choose(rng) {
            Some(name) => self.instance(*name),
            None => {
                tracing::error!("no load/store candidate available");
                Err(GenError::EmptySelection {
                    context: "load/store selection",
                })
            }
        }
    }

    fn allowed_names(&self, filter: &Filter) -> Vec<InstrName> {
        let mut allowed: Vec<InstrName> = if filter.include_instr.is_empty() {
            let mut union: Vec<InstrName> = Vec::new();
            for category in &filter.include_category {
                union.extend_from_slice(self.in_category(*category));
            }
            for group in &filter.include_group {
                union.extend_from_slice(self.in_group(*group));
            }
            if union.is_empty()
                && filter.include_category.is_empty()
                && filter.include_group.is_empty()
            {
                self.instr_names.clone()
            } else {
                union
            }
        } else {
            filter.include_instr.clone()
        };
        allowed.retain(|name| self.templates.contains_key(name));
        allowed.dedup();
        allowed
    }
}
