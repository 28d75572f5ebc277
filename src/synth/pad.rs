//! Exact padding for cycle counts too small for a counting loop.
//!
//! The terminal base case of both strategies. `nop` burns 1 cycle and
//! `rjmp .+0` burns 2 without touching any register or flag, so any budget
//! can be ground down to zero: pairs of `rjmp` for every 4 cycles, then a
//! final 0-3 cycle tail with the fewest possible instructions.

use crate::core::instruction::Instruction;

/// Append instructions consuming exactly `budget` cycles to `out`.
///
/// 0 appends nothing; 1 -> `nop`; 2 -> `rjmp`; 3 -> `rjmp` + `nop`;
/// anything larger emits `rjmp` pairs first.
pub fn emit_pad(mut budget: u64, out: &mut Vec<Instruction>) {
    while budget >= 4 {
        out.push(Instruction::Rjmp { offset: 0 });
        out.push(Instruction::Rjmp { offset: 0 });
        budget -= 4;
    }
    match budget {
        0 => {}
        1 => out.push(Instruction::Nop),
        2 => out.push(Instruction::Rjmp { offset: 0 }),
        3 => {
            out.push(Instruction::Rjmp { offset: 0 });
            out.push(Instruction::Nop);
        }
        _ => unreachable!(),
    }
}

/// Pad as a standalone sequence.
pub fn pad(budget: u64) -> Vec<Instruction> {
    let mut out = Vec::new();
    emit_pad(budget, &mut out);
    out
}
