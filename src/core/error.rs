//! Error types for delay synthesis.
//!
//! Using thiserror for more idiomatic error handling.

use thiserror::Error;

/// Main error type for delay-loop synthesis.
///
/// The first two variants are user-facing classification failures: the
/// requested budget cannot be realised at all, or not by the chosen strategy.
/// The remaining variants are encoder-level contract violations on internally
/// computed operands; hitting one of them means a synthesizer produced an
/// instruction it never should have.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SynthError {
    #[error("requested delay rounds to 0 cycles")]
    DelayTooSmall,

    #[error("delay of {budget} cycles exceeds the {max} cycle maximum of the widest counter")]
    DelayTooLarge { budget: u64, max: u64 },

    #[error("register r{reg} out of range for this operation")]
    RegisterOutOfRange { reg: u8 },

    #[error("immediate {value} out of range")]
    ImmediateOutOfRange { value: i64 },

    #[error("branch offset {offset} words out of range")]
    BranchOutOfRange { offset: i32 },
}

/// Result type alias for synthesis operations.
pub type SynthResult<T> = Result<T, SynthError>;
