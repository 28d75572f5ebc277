//! Per-instruction cycle costs for the AVR core.
//!
//! Pure data consumed by the synthesizers and the test-side simulator.
//! Costs match the AVR instruction set manual for single-core parts:
//! everything here is 1 cycle except control flow (`rjmp` 2, `brne` 2 when
//! taken, 1 on fall-through).

use super::instruction::Instruction;

/// Cycle cost of one instruction.
///
/// `branch_taken` is consulted only for `brne`; every other kind has a fixed
/// cost.
pub fn instruction_cycles(inst: &Instruction, branch_taken: bool) -> u64 {
    match inst {
        Instruction::Nop => 1,
        Instruction::Rjmp { .. } => 2,
        Instruction::Ldi { .. } => 1,
        Instruction::Subi { .. } => 1,
        Instruction::Sbci { .. } => 1,
        Instruction::Dec { .. } => 1,
        Instruction::Brne { .. } => {
            if branch_taken {
                2
            } else {
                1
            }
        }
    }
}

/// Cycle cost of a straight-line (branch-free) sequence.
///
/// Panics if the sequence contains a `brne`, whose cost is data-dependent.
pub fn straight_line_cycles(seq: &[Instruction]) -> u64 {
    seq.iter()
        .map(|inst| {
            assert!(
                !matches!(inst, Instruction::Brne { .. }),
                "branch cost depends on the taken path"
            );
            instruction_cycles(inst, false)
        })
        .sum()
}
