//! AVR instruction model for synthesized delay sequences.
//!
//! Only the handful of instruction kinds a busy-wait loop can contain is
//! modelled. Branch and jump offsets are stored in hardware convention:
//! words relative to the *next* instruction (`PC <- PC + k + 1`), which is
//! what the opcode word actually carries. The `Display` impl renders
//! objdump-style mnemonics, so offsets appear as byte displacements.

use std::fmt;

/// AVR register number (r0..r31).
pub type Reg = u8;

/// One synthesized instruction. Immutable once created.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Instruction {
    /// `nop` - 1 cycle filler.
    Nop,
    /// `rjmp` - relative jump, 2 cycles. `offset` 0 jumps to the next
    /// instruction, which is how it is used as a 2-cycle pad.
    Rjmp { offset: i16 },
    /// `ldi Rd, K` - load immediate into a high register.
    Ldi { reg: Reg, value: u8 },
    /// `subi Rd, K` - subtract immediate, sets carry and zero.
    Subi { reg: Reg, value: u8 },
    /// `sbci Rd, K` - subtract immediate with carry; only ever clears the
    /// zero flag, so a subi/sbci chain detects a whole multi-byte counter
    /// reaching zero.
    Sbci { reg: Reg, value: u8 },
    /// `dec Rd` - decrement, sets zero, leaves carry alone.
    Dec { reg: Reg },
    /// `brne` - branch if the zero flag is clear. 2 cycles taken, 1 not.
    Brne { offset: i8 },
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Instruction::Nop => write!(f, "nop"),
            Instruction::Rjmp { offset } => write!(f, "rjmp .{:+}", offset as i32 * 2),
            Instruction::Ldi { reg, value } => write!(f, "ldi r{reg}, 0x{value:02X}"),
            Instruction::Subi { reg, value } => write!(f, "subi r{reg}, 0x{value:02X}"),
            Instruction::Sbci { reg, value } => write!(f, "sbci r{reg}, 0x{value:02X}"),
            Instruction::Dec { reg } => write!(f, "dec r{reg}"),
            Instruction::Brne { offset } => write!(f, "brne .{:+}", offset as i32 * 2),
        }
    }
}
