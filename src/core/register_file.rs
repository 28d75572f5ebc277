//! High-register allocation for loop counters.
//!
//! Delay loops only ever need registers that `ldi` can target, i.e. the
//! high half of the register file (r16..r31). Allocation is strictly
//! sequential and registers are never reused while a counter is live, so
//! the allocator is a bump pointer over that range.

use super::error::{SynthError, SynthResult};
use super::instruction::Reg;

/// First register reachable by immediate instructions (`ldi`, `subi`, ...).
pub const FIRST_HIGH_REG: Reg = 16;

/// Last register in the file.
pub const LAST_HIGH_REG: Reg = 31;

/// Sequential allocator over the high registers.
#[derive(Debug)]
pub struct RegisterFile {
    next: Reg,
}

impl RegisterFile {
    pub fn new() -> Self {
        Self {
            next: FIRST_HIGH_REG,
        }
    }

    /// Hand out the next free high register.
    ///
    /// Both strategies need at most a handful of counters (4 for the widest
    /// tier, log256 of the budget for nested loops), so exhaustion means a
    /// synthesizer bug rather than a representable-budget problem.
    pub fn alloc(&mut self) -> SynthResult<Reg> {
        if self.next > LAST_HIGH_REG {
            return Err(SynthError::RegisterOutOfRange { reg: self.next });
        }
        let reg = self.next;
        self.next += 1;
        Ok(reg)
    }

    /// Allocate `count` consecutive registers, lowest first.
    pub fn alloc_chain(&mut self, count: usize) -> SynthResult<Vec<Reg>> {
        (0..count).map(|_| self.alloc()).collect()
    }

    /// Every register handed out so far, in allocation order.
    pub fn clobbered(&self) -> Vec<Reg> {
        (FIRST_HIGH_REG..self.next).collect()
    }
}

impl Default for RegisterFile {
    fn default() -> Self {
        Self::new()
    }
}
