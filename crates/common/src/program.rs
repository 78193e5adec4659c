//! Building program images.
//!
//! A program is a flat byte string with no header: instruction words
//! interleaved with their inline operands. [`ProgramBuilder`] emits that
//! layout directly, which keeps tests and tools from hand-counting bytes.

use crate::instruction::Instruction;
use crate::opcode::Opcode;
use crate::width::Width;

/// Incrementally builds a program image.
///
/// ```
/// use claw_common::{Opcode, ProgramBuilder};
///
/// let program = ProgramBuilder::new()
///     .let8(0, 101)
///     .let8(0, 99)
///     .op(Opcode::Add8, 0, 1)
///     .op(Opcode::End, 0, 0)
///     .build();
///
/// // Each 8-bit literal takes a single byte.
/// assert_eq!(program.len(), 10);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProgramBuilder {
    bytes: Vec<u8>,
}

impl ProgramBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Offset of the next byte to be emitted.
    pub fn here(&self) -> usize {
        self.bytes.len()
    }

    /// Emit an instruction word.
    pub fn op(mut self, opcode: Opcode, source: u8, destination: u8) -> Self {
        let word = Instruction::new(opcode, source, destination);
        self.bytes.extend_from_slice(&word.to_le_bytes());
        self
    }

    /// Emit a raw 16-bit word, bypassing the opcode table.
    pub fn word(mut self, word: u16) -> Self {
        self.bytes.extend_from_slice(&word.to_le_bytes());
        self
    }

    /// Emit an unsigned literal of the given width, little-endian.
    pub fn literal(mut self, width: Width, value: u32) -> Self {
        let le = value.to_le_bytes();
        self.bytes.extend_from_slice(&le[..width.bytes()]);
        self
    }

    /// Emit a signed 16-bit branch offset.
    pub fn offset(mut self, offset: i16) -> Self {
        self.bytes.extend_from_slice(&offset.to_le_bytes());
        self
    }

    /// Emit raw bytes.
    pub fn bytes(mut self, bytes: &[u8]) -> Self {
        self.bytes.extend_from_slice(bytes);
        self
    }

    /// `LET8` into `destination`.
    pub fn let8(self, destination: u8, value: u8) -> Self {
        self.op(Opcode::Let8, 0, destination)
            .literal(Width::W8, value as u32)
    }

    /// `LET16` into `destination`.
    pub fn let16(self, destination: u8, value: u16) -> Self {
        self.op(Opcode::Let16, 0, destination)
            .literal(Width::W16, value as u32)
    }

    /// `LET32` into `destination`.
    pub fn let32(self, destination: u8, value: u32) -> Self {
        self.op(Opcode::Let32, 0, destination)
            .literal(Width::W32, value)
    }

    /// `LETA` into `destination`.
    pub fn let_address(self, destination: u8, address: u32) -> Self {
        self.op(Opcode::LetA, 0, destination)
            .literal(Width::ADDRESS, address)
    }

    /// A branch instruction followed by its offset.
    pub fn branch(self, opcode: Opcode, offset: i16) -> Self {
        self.op(opcode, 0, 0).offset(offset)
    }

    /// `DBGS` followed by the NUL-terminated text.
    pub fn debug_string(self, text: &str) -> Self {
        self.op(Opcode::DbgS, 0, 0).bytes(text.as_bytes()).bytes(&[0])
    }

    /// Overwrite four bytes at `at` with `value`, little-endian.
    ///
    /// Used to fill in forward jump targets once they are known.
    ///
    /// # Panics
    ///
    /// Panics if `at + 4` is past the end of the image.
    pub fn patch_u32(mut self, at: usize, value: u32) -> Self {
        self.bytes[at..at + 4].copy_from_slice(&value.to_le_bytes());
        self
    }

    /// Finish and return the image.
    pub fn build(self) -> Vec<u8> {
        self.bytes
    }
}
