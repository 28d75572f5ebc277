//! Tiered synthesis: one fixed-width counting loop plus a remainder pad.
//!
//! The budget is classified into a counter width of 8, 16, 24 or 32 bits
//! (one chained high register per byte). A width-W loop costs
//! `(W/8 + 2) * iterations + (W/8 - 1)` cycles: one `ldi` per byte up
//! front, then per iteration a 1-cycle decrement of each byte and a 2-cycle
//! `brne`, minus the cycle the final untaken branch gives back. Whatever
//! the division leaves over (always below the per-iteration cost) is padded
//! exactly with `nop`/`rjmp`.
//!
//! Simple and fast to classify, at the price of being register-hungry at
//! the wide end; the nested strategy trades the other way.

use log::debug;

use super::pad::emit_pad;
use crate::core::error::{SynthError, SynthResult};
use crate::core::instruction::Instruction;
use crate::core::register_file::RegisterFile;
use crate::core::sequence::DelaySequence;

/// Largest budget the 32-bit tier can realise: `6 * 2^32 + 3` cycles, i.e.
/// a full 2^32-iteration loop (counter loaded as all zeroes, wrapping) plus
/// the maximum pad the division can leave.
pub const MAX_BUDGET: u64 = 25_769_803_779;

/// Inclusive upper bound of each tier, index = width in bytes - 1.
const TIER_MAX: [u64; 4] = [768, 262_145, 83_886_082, MAX_BUDGET];

/// Synthesize `budget` cycles as a single loop plus pad.
pub fn synthesize(budget: u64) -> SynthResult<DelaySequence> {
    if budget == 0 {
        return Err(SynthError::DelayTooSmall);
    }

    let mut out = Vec::new();
    let mut regs = RegisterFile::new();

    if budget <= 2 {
        emit_pad(budget, &mut out);
        return Ok(DelaySequence::new(budget, out, regs.clobbered()));
    }

    let width_bytes: usize = match budget {
        b if b <= TIER_MAX[0] => 1,
        b if b <= TIER_MAX[1] => 2,
        b if b <= TIER_MAX[2] => 3,
        b if b <= TIER_MAX[3] => 4,
        _ => {
            return Err(SynthError::DelayTooLarge {
                budget,
                max: MAX_BUDGET,
            })
        }
    };

    let body = width_bytes as u64 + 2;
    let overhead = width_bytes as u64 - 1;
    let iterations = (budget - overhead) / body;
    let remainder = (budget - overhead) % body;

    // The tier bounds guarantee 1..=2^W iterations; anything else is a
    // classification bug.
    if iterations == 0 || iterations > 1u64 << (8 * width_bytes) {
        return Err(SynthError::ImmediateOutOfRange {
            value: iterations as i64,
        });
    }

    debug!(
        "tiered: budget {budget} -> {}-bit counter, {iterations} iterations, remainder {remainder}",
        width_bytes * 8
    );

    let chain = regs.alloc_chain(width_bytes)?;

    // Counter bytes, low byte first. An iteration count of 2^W comes out as
    // all zeroes: the first decrement wraps and the loop runs the full range.
    for (i, &reg) in chain.iter().enumerate() {
        out.push(Instruction::Ldi {
            reg,
            value: (iterations >> (8 * i)) as u8,
        });
    }

    // Loop body: dec for a single byte, otherwise a subi/sbci borrow chain
    // so the brne sees zero only when the whole counter is exhausted.
    if width_bytes == 1 {
        out.push(Instruction::Dec { reg: chain[0] });
    } else {
        out.push(Instruction::Subi {
            reg: chain[0],
            value: 1,
        });
        for &reg in &chain[1..] {
            out.push(Instruction::Sbci { reg, value: 0 });
        }
    }
    out.push(Instruction::Brne {
        offset: -(width_bytes as i8 + 1),
    });

    emit_pad(remainder, &mut out);

    Ok(DelaySequence::new(budget, out, regs.clobbered()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_budget_is_rejected() {
        assert_eq!(synthesize(0).unwrap_err(), SynthError::DelayTooSmall);
    }

    #[test]
    fn tiny_budgets_are_pure_pad() {
        assert_eq!(
            synthesize(1).unwrap().instructions(),
            &[Instruction::Nop]
        );
        assert_eq!(
            synthesize(2).unwrap().instructions(),
            &[Instruction::Rjmp { offset: 0 }]
        );
    }

    #[test]
    fn minimal_loop_at_three_cycles() {
        let seq = synthesize(3).unwrap();
        assert_eq!(
            seq.instructions(),
            &[
                Instruction::Ldi { reg: 16, value: 1 },
                Instruction::Dec { reg: 16 },
                Instruction::Brne { offset: -2 },
            ]
        );
        assert_eq!(seq.clobbers(), &[16]);
    }

    #[test]
    fn full_eight_bit_tier_wraps_to_zero() {
        // 768 = 3 * 256: the counter is loaded as 0 and wraps.
        let seq = synthesize(768).unwrap();
        assert_eq!(seq.instructions()[0], Instruction::Ldi { reg: 16, value: 0 });
        assert_eq!(seq.clobbers().len(), 1);
    }

    #[test]
    fn sixteen_bit_tier_starts_at_769() {
        let seq = synthesize(769).unwrap();
        assert_eq!(seq.clobbers(), &[16, 17]);
        // 192 iterations * 4 cycles + 1 overhead = 769, no pad.
        assert_eq!(
            seq.instructions(),
            &[
                Instruction::Ldi { reg: 16, value: 192 },
                Instruction::Ldi { reg: 17, value: 0 },
                Instruction::Subi { reg: 16, value: 1 },
                Instruction::Sbci { reg: 17, value: 0 },
                Instruction::Brne { offset: -3 },
            ]
        );
    }

    #[test]
    fn widest_tier_upper_bound() {
        let seq = synthesize(MAX_BUDGET).unwrap();
        assert_eq!(seq.clobbers(), &[16, 17, 18, 19]);
        // 2^32 iterations: every counter byte is zero.
        for inst in &seq.instructions()[..4] {
            assert!(matches!(inst, Instruction::Ldi { value: 0, .. }));
        }
        assert_eq!(
            synthesize(MAX_BUDGET + 1).unwrap_err(),
            SynthError::DelayTooLarge {
                budget: MAX_BUDGET + 1,
                max: MAX_BUDGET
            }
        );
    }
}
