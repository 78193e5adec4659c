//! Instruction word encoding and decoding.
//!
//! Every instruction starts with a 16-bit word, stored little-endian:
//! ```text
//! bits 15..4  opcode (12 bits)
//! bits  3..2  source stack selector
//! bits  1..0  destination stack selector
//! ```
//! Some opcodes are followed by an inline operand; see
//! [`Operation::inline_operand`](crate::operation::Operation::inline_operand).

use crate::error::DecodeError;
use crate::opcode::Opcode;

/// Number of operand stacks addressable by a selector.
pub const STACK_COUNT: usize = 4;

/// Size of an instruction word in bytes.
pub const WORD_BYTES: usize = 2;

/// A decoded instruction word.
///
/// The opcode is kept as its raw 12-bit code so that decoding never fails;
/// [`Instruction::opcode`] resolves it against the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Instruction {
    /// Raw 12-bit operation code.
    pub code: u16,
    /// Source stack selector (0-3).
    pub source: u8,
    /// Destination stack selector (0-3).
    pub destination: u8,
}

impl Instruction {
    /// Create a new instruction. Selectors are truncated to two bits.
    pub fn new(opcode: Opcode, source: u8, destination: u8) -> Self {
        Self {
            code: opcode.code(),
            source: source & 0b11,
            destination: destination & 0b11,
        }
    }

    /// Split a 16-bit word into its fields.
    pub fn decode(word: u16) -> Self {
        Self {
            code: word >> 4,
            source: ((word >> 2) & 0b11) as u8,
            destination: (word & 0b11) as u8,
        }
    }

    /// Pack the fields back into a 16-bit word.
    pub fn encode(&self) -> u16 {
        ((self.code & 0x0fff) << 4)
            | ((self.source as u16 & 0b11) << 2)
            | (self.destination as u16 & 0b11)
    }

    /// Little-endian bytes of the encoded word.
    pub fn to_le_bytes(&self) -> [u8; WORD_BYTES] {
        self.encode().to_le_bytes()
    }

    /// Resolve the raw code against the opcode table.
    pub fn opcode(&self) -> Result<Opcode, DecodeError> {
        Opcode::try_from(self.code)
    }

    /// Source stack index.
    pub fn src(&self) -> usize {
        self.source as usize
    }

    /// Destination stack index.
    pub fn dst(&self) -> usize {
        self.destination as usize
    }
}
