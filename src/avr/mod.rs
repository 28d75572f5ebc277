//! AVR architecture-specific components.
//!
//! This module contains everything that depends on the concrete opcode
//! format: the 16-bit word encoder. Timing facts live in `core::timing`
//! since both synthesizers reason about them directly.

pub mod encoder;

pub use encoder::{encode, encode_sequence};
