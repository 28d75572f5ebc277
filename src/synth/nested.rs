//! Dynamic-depth synthesis: a register-frugal nested counting loop.
//!
//! Instead of jumping straight to a wide counter, the nesting depth is
//! grown one level at a time until the budget fits. Each level owns one
//! high register holding one base-256 digit of the overall iteration count.
//! The levels share a single loop head: per level, a 1-cycle decrement of
//! its register followed by `brne` back to the head. An outer branch
//! re-enters with the inner registers at zero, so the first inner decrement
//! wraps and the inner level runs its full 256 counts - no reloads needed.
//!
//! A level's per-count cost follows the recurrence `len' = len * 256 + 2`
//! starting at 3 (`dec` + taken `brne`): one outer count is a full inner
//! run (256 counts, minus the cycle the inner's final untaken branch gives
//! back) plus the outer's own decrement and taken branch. The fixed cost
//! per level is 3: its `ldi`, its final decrement-to-zero and untaken
//! branch. Counter immediates are picked greedily from the outermost level
//! inward; whatever is left (always under 12 cycles) is padded exactly.

use log::{debug, trace};

use super::pad::emit_pad;
use crate::core::error::{SynthError, SynthResult};
use crate::core::instruction::Instruction;
use crate::core::register_file::RegisterFile;
use crate::core::sequence::DelaySequence;

/// Budgets below this are cheaper as pure pad than as a loop.
const MIN_LOOP_BUDGET: u64 = 12;

/// Synthesize `budget` cycles as a nested loop of dynamically chosen depth.
pub fn synthesize(budget: u64) -> SynthResult<DelaySequence> {
    if budget == 0 {
        return Err(SynthError::DelayTooSmall);
    }

    let mut out = Vec::new();
    let mut regs = RegisterFile::new();

    if budget < MIN_LOOP_BUDGET {
        emit_pad(budget, &mut out);
        return Ok(DelaySequence::new(budget, out, regs.clobbered()));
    }

    // Grow the nest until one more outer level would overshoot: at depth D
    // the structure covers up to length*256 counts plus the worst-case pad.
    let mut length: u64 = 3;
    let mut depth: usize = 1;
    while (budget as u128) > (length as u128) * 256 + depth as u128 + 8 {
        length = length * 256 + 2;
        depth += 1;
    }
    debug!("nested: budget {budget} -> depth {depth}, outermost count length {length}");

    // chain[0] is the innermost counter.
    let chain = regs.alloc_chain(depth)?;

    // Greedy immediate selection, outermost level first. Three cycles per
    // not-yet-assigned level are reserved for its fixed cost.
    let mut immediates = Vec::with_capacity(depth);
    let mut remaining = budget;
    let mut len = length;
    for level in 0..depth {
        let reserve = 3 * (depth - level) as u64;
        let count = (remaining.saturating_sub(reserve) / len + 1).min(256);
        debug_assert!((1..=256).contains(&count));
        trace!("nested: level {level} count {count} (len {len}, remaining {remaining})");
        remaining -= (count - 1) * len + 3;
        immediates.push(count);
        len = (len - 2) / 256;
    }
    debug_assert!(remaining < MIN_LOOP_BUDGET);

    // Counter loads, outermost first. A full count of 256 is stored as 0
    // and relies on the decrement wrapping.
    for (level, &count) in immediates.iter().enumerate() {
        out.push(Instruction::Ldi {
            reg: chain[depth - 1 - level],
            value: count as u8,
        });
    }

    // The cascade: every level decrements its own register and branches to
    // the shared head, innermost outward, each branch two slots further
    // from its target than the last.
    out.push(Instruction::Subi {
        reg: chain[0],
        value: 1,
    });
    out.push(Instruction::Brne { offset: -2 });
    for (level, &reg) in chain.iter().enumerate().skip(1) {
        out.push(Instruction::Dec { reg });
        out.push(Instruction::Brne {
            offset: -(2 * level as i8 + 2),
        });
    }

    emit_pad(remaining, &mut out);

    Ok(DelaySequence::new(budget, out, regs.clobbered()))
}
