//! Core infrastructure shared by both synthesis strategies.
//!
//! # Key Components
//!
//! ## Instruction Model (`instruction`)
//! - The tagged instruction value both synthesizers emit
//! - Objdump-style mnemonic rendering
//!
//! ## Timing Model (`timing`)
//! - Fixed per-instruction cycle costs, pure lookup
//!
//! ## Register Allocation (`register_file`)
//! - Sequential allocation over the `ldi`-addressable high registers
//!
//! ## Results (`sequence`)
//! - Ordered instruction list plus clobber set, renderable and encodable

pub mod error;
pub mod instruction;
pub mod register_file;
pub mod sequence;
pub mod timing;

pub use error::{SynthError, SynthResult};
pub use instruction::{Instruction, Reg};
pub use register_file::{RegisterFile, FIRST_HIGH_REG, LAST_HIGH_REG};
pub use sequence::DelaySequence;
pub use timing::instruction_cycles;
