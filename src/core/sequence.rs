//! Synthesis result: an ordered instruction sequence plus its clobber set.

use std::fmt;

use super::instruction::{Instruction, Reg};
use crate::avr::encoder;
use crate::core::error::SynthResult;

/// A finished delay sequence.
///
/// Invariant: executing `instructions` front to back consumes exactly
/// `budget` cycles under the timing model. The sequence owns its
/// instructions; nothing is shared across synthesis runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DelaySequence {
    budget: u64,
    instructions: Vec<Instruction>,
    clobbered: Vec<Reg>,
}

impl DelaySequence {
    pub(crate) fn new(budget: u64, instructions: Vec<Instruction>, clobbered: Vec<Reg>) -> Self {
        Self {
            budget,
            instructions,
            clobbered,
        }
    }

    /// The cycle budget this sequence was synthesized for.
    pub fn budget(&self) -> u64 {
        self.budget
    }

    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    /// Registers the sequence overwrites, in ascending order. Callers that
    /// need them preserved must save and restore around the delay.
    pub fn clobbers(&self) -> &[Reg] {
        &self.clobbered
    }

    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    /// Encode the whole sequence into 16-bit opcode words for direct
    /// placement in a program image.
    pub fn words(&self) -> SynthResult<Vec<u16>> {
        self.instructions.iter().map(encoder::encode).collect()
    }
}

impl fmt::Display for DelaySequence {
    /// Renders a GNU-as compatible listing with a summary comment on top.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "; delay: {} cycles", self.budget)?;
        if !self.clobbered.is_empty() {
            let regs: Vec<String> = self.clobbered.iter().map(|r| format!("r{r}")).collect();
            write!(f, ", clobbers {}", regs.join(", "))?;
        }
        writeln!(f)?;
        for inst in &self.instructions {
            writeln!(f, "    {inst}")?;
        }
        Ok(())
    }
}
