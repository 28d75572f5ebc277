//! cyclewait - cycle-exact AVR busy-wait synthesis.
//!
//! Turns an exact clock-cycle budget (or a duration plus a clock frequency)
//! into an AVR instruction sequence that consumes precisely that many
//! cycles, so firmware can delay without a hardware timer. Two independent
//! strategies implement the same contract: fixed-width counter tiers and a
//! dynamically-deepened nested loop.
//!
//! # Primary Usage
//!
//! ```
//! use cyclewait::{delay_microseconds, Strategy};
//!
//! let seq = delay_microseconds(100, 16_000_000, Strategy::Tiered)?;
//! assert_eq!(seq.budget(), 1600);
//! print!("{seq}");
//! # Ok::<(), cyclewait::SynthError>(())
//! ```
//!
//! Raw budgets skip the conversion step:
//!
//! ```
//! use cyclewait::synthesize_dynamic_depth;
//!
//! let seq = synthesize_dynamic_depth(1_000_000)?;
//! let words = seq.words()?; // 16-bit opcodes for image placement
//! assert_eq!(words.len(), seq.len());
//! # Ok::<(), cyclewait::SynthError>(())
//! ```
//!
//! # Architecture
//!
//! - [`core`] - shared infrastructure (instructions, timing, registers)
//! - [`synth`] - the two synthesis strategies plus the pad base case
//! - [`avr`] - opcode-word encoding
//! - [`convert`] - duration-to-cycle front end

pub mod avr;
pub mod convert;
pub mod core;
pub mod synth;

pub use crate::core::{DelaySequence, Instruction, Reg, SynthError, SynthResult};
pub use convert::{delay_microseconds, delay_milliseconds, to_cycles, TimeUnit};
pub use synth::Strategy;

/// Synthesize with the tiered (fixed counter width) strategy.
pub fn synthesize_tiered(budget: u64) -> SynthResult<DelaySequence> {
    synth::tiered::synthesize(budget)
}

/// Synthesize with the dynamic-depth (nested loop) strategy.
pub fn synthesize_dynamic_depth(budget: u64) -> SynthResult<DelaySequence> {
    synth::nested::synthesize(budget)
}
