//! Duration-to-cycle conversion front end.
//!
//! Thin wrapper over the synthesizers: multiply a duration by the clock
//! frequency, round, and hand the resulting budget to the chosen strategy.
//! Rounding is half-up at one decimal of precision: the exact quotient is
//! truncated to tenths of a cycle, then a first decimal digit of 5 or more
//! rounds up. Not banker's rounding; 0.5 always rounds toward the longer
//! wait.

use log::debug;

use crate::core::error::{SynthError, SynthResult};
use crate::core::sequence::DelaySequence;
use crate::synth::Strategy;

/// Duration units accepted by the converter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeUnit {
    Microseconds,
    Milliseconds,
}

/// Convert a duration at a clock frequency into a cycle budget.
pub fn to_cycles(amount: u64, unit: TimeUnit, frequency_hz: u64) -> SynthResult<u64> {
    let micros: u128 = match unit {
        TimeUnit::Microseconds => amount as u128,
        TimeUnit::Milliseconds => amount as u128 * 1000,
    };
    let tenths = micros * frequency_hz as u128 / 100_000;
    let cycles = (tenths + 5) / 10;
    // Cycle counts past u64 are unrepresentable by either strategy.
    u64::try_from(cycles).map_err(|_| SynthError::DelayTooLarge {
        budget: u64::MAX,
        max: u64::MAX,
    })
}

/// Synthesize a busy-wait for `amount` microseconds at `frequency_hz`.
pub fn delay_microseconds(
    amount: u64,
    frequency_hz: u64,
    strategy: Strategy,
) -> SynthResult<DelaySequence> {
    let cycles = to_cycles(amount, TimeUnit::Microseconds, frequency_hz)?;
    if cycles == 0 {
        return Err(SynthError::DelayTooSmall);
    }
    debug!("{amount} us at {frequency_hz} Hz -> {cycles} cycles ({strategy:?})");
    strategy.synthesize(cycles)
}

/// Synthesize a busy-wait for `amount` milliseconds at `frequency_hz`.
pub fn delay_milliseconds(
    amount: u64,
    frequency_hz: u64,
    strategy: Strategy,
) -> SynthResult<DelaySequence> {
    let cycles = to_cycles(amount, TimeUnit::Milliseconds, frequency_hz)?;
    if cycles == 0 {
        return Err(SynthError::DelayTooSmall);
    }
    debug!("{amount} ms at {frequency_hz} Hz -> {cycles} cycles ({strategy:?})");
    strategy.synthesize(cycles)
}
