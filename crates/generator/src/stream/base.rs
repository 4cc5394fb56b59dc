//! The base instruction stream.
//!
//! An [`InstrStream`] owns an ordered list of instructions in emission
//! order plus stream-level metadata: a label, the register pool operand
//! assignment may draw from, and destination registers the stream has
//! claimed. Structural operations insert single instructions, splice whole
//! sub-streams, and mix two streams together while never landing inside an
//! atomic block.

use rand::Rng;

use crate::common::{GenError, Result};
use crate::isa::Reg;
use crate::isa::instruction::Instruction;

/// Attempts at finding a non-atomic injection point before giving up.
const INJECT_RETRY_LIMIT: usize = 10;

/// An ordered, mutable instruction sequence.
#[derive(Debug, Clone, Default)]
pub struct InstrStream {
    /// Instructions in emission order.
    pub instrs: Vec<Instruction>,
    /// Label attached to the stream entry point.
    pub label: String,
    /// Hart the stream is generated for.
    pub hart: usize,
    /// Registers operand assignment may use. When empty, the configured
    /// default pool applies.
    pub avail_regs: Vec<Reg>,
    /// Destination registers this stream must not overwrite.
    pub reserved_rd: Vec<Reg>,
}

impl InstrStream {
    /// Creates an empty stream carrying `label`.
    #[must_use]
    pub fn new(label: &str) -> Self {
        Self {
            label: String::from(label),
            ..Self::default()
        }
    }

    /// Inserts `instr` at a random position, advancing past atomic
    /// instructions. Falls back to appending when the scan reaches the
    /// end of the stream.
    pub fn insert_instr(&mut self, instr: Instruction, rng: &mut impl Rng) {
        if self.instrs.is_empty() {
            self.instrs.push(instr);
            return;
        }
        let mut idx = rng.gen_range(0..self.instrs.len());
        while self.instrs[idx].atomic {
            idx += 1;
            if idx == self.instrs.len() {
                self.instrs.push(instr);
                return;
            }
        }
        self.instrs.insert(idx, instr);
    }

    /// Inserts `instr` at `idx` without any atomic-block check; callers
    /// doing placed insertion have already chosen a legal index.
    ///
    /// # Errors
    ///
    /// Returns [`GenError::InvalidIndex`] when `idx` is past the end of
    /// the stream.
    pub fn insert_instr_at(&mut self, idx: usize, instr: Instruction) -> Result<()> {
        if idx > self.instrs.len() {
            return Err(GenError::InvalidIndex {
                idx,
                len: self.instrs.len(),
            });
        }
        self.instrs.insert(idx, instr);
        Ok(())
    }

    /// Splices `new_instrs` into the stream at a random non-atomic
    /// position (or at `idx` when given). With `replace`, the instruction
    /// at the injection point is dropped and its label moves onto the
    /// head of the injected sequence; otherwise the original instruction
    /// is kept after the injected sequence.
    ///
    /// # Errors
    ///
    /// Returns [`GenError::InvalidIndex`] for an out-of-range explicit
    /// index and [`GenError::EmptySelection`] when no non-atomic
    /// injection point can be found.
    pub fn insert_stream(
        &mut self,
        mut new_instrs: Vec<Instruction>,
        idx: Option<usize>,
        replace: bool,
        rng: &mut impl Rng,
    ) -> Result<()> {
        if new_instrs.is_empty() {
            return Ok(());
        }
        if self.instrs.is_empty() {
            self.instrs = new_instrs;
            return Ok(());
        }
        let idx = match idx {
            Some(idx) => {
                if idx >= self.instrs.len() {
                    return Err(GenError::InvalidIndex {
                        idx,
                        len: self.instrs.len(),
                    });
                }
                idx
            }
            None => {
                let mut idx = rng.gen_range(0..self.instrs.len());
                let mut attempts = 0;
                while self.instrs[idx].atomic && attempts < INJECT_RETRY_LIMIT {
                    attempts += 1;
                    idx = rng.gen_range(0..self.instrs.len());
                }
                if self.instrs[idx].atomic {
                    // Random picks kept landing inside atomic blocks; take
                    // the first legal slot instead.
                    match self.instrs.iter().position(|instr| !instr.atomic) {
                        Some(first) => idx = first,
                        None => {
                            tracing::error!("cannot find a non-atomic injection point");
                            return Err(GenError::EmptySelection {
                                context: "stream injection point",
                            });
                        }
                    }
                }
                idx
            }
        };
        if replace {
            let removed = self.instrs.remove(idx);
            new_instrs[0].label = removed.label;
            new_instrs[0].has_label = removed.has_label;
        }
        self.instrs.splice(idx..idx, new_instrs);
        Ok(())
    }

    /// Mixes `new_instrs` into the stream at sorted random positions.
    /// With `contained`, the first injected instruction is pinned to the
    /// front of the stream and the last to the back.
    ///
    /// # Errors
    ///
    /// Propagates [`GenError::InvalidIndex`] from placed insertion; the
    /// computed positions are always in range, so this does not occur in
    /// practice.
    pub fn mix_stream(
        &mut self,
        new_instrs: Vec<Instruction>,
        contained: bool,
        rng: &mut impl Rng,
    ) -> Result<()> {
        let current = self.instrs.len();
        let mut positions: Vec<usize> = (0..new_instrs.len())
            .map(|_| rng.gen_range(0..=current))
            .collect();
        positions.sort_unstable();
        if contained {
            if let Some(first) = positions.first_mut() {
                *first = 0;
            }
            if new_instrs.len() > 1 {
                if let Some(last) = positions.last_mut() {
                    *last = current;
                }
            }
        }
        for (offset, instr) in new_instrs.into_iter().enumerate() {
            self.insert_instr_at(positions[offset] + offset, instr)?;
        }
        Ok(())
    }

    /// Appends `instr` to the end of the stream.
    pub fn push(&mut self, instr: Instruction) {
        self.instrs.push(instr);
    }

    /// Number of instructions in the stream.
    #[must_use]
    pub fn len(&self) -> usize {
        self.instrs.len()
    }

    /// Whether the stream holds no instructions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.instrs.is_empty()
    }

    /// Renders the stream as assembly lines, one per instruction, with
    /// label prefixes where set.
    #[must_use]
    pub fn render(&self) -> Vec<String> {
        self.instrs
            .iter()
            .map(|instr| {
                let asm = instr.to_asm();
                if instr.has_label {
                    format!("{}: {asm}", instr.label)
                } else {
                    format!("    {asm}")
                }
            })
            .collect()
    }
}
