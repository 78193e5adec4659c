//! Fetch unit: reads instruction words and inline operands at the PC.
//!
//! Every read is bounds-checked against the program before any byte is
//! touched. A read that would run past the end raises
//! [`Fault::TargetOutOfBounds`] at the offset where the read started, and
//! leaves the PC where it was.

use claw_common::{Width, WORD_BYTES};

use crate::error::Fault;
use crate::machine::Engine;

impl<W, P> Engine<W, P> {
    /// Borrow `n` bytes at the PC and advance past them.
    fn take<'p>(&mut self, program: &'p [u8], n: usize) -> Result<&'p [u8], Fault> {
        let bytes = program
            .get(self.pc..)
            .and_then(|rest| rest.get(..n))
            .ok_or(Fault::TargetOutOfBounds { at: self.pc })?;
        self.pc += n;
        Ok(bytes)
    }

    /// Read the 16-bit instruction word at the PC.
    pub(crate) fn fetch_instruction(&mut self, program: &[u8]) -> Result<u16, Fault> {
        let bytes = self.take(program, WORD_BYTES)?;
        Ok(u16::from_le_bytes([bytes[0], bytes[1]]))
    }

    /// Read an unsigned inline literal. An 8-bit literal is one byte.
    pub(crate) fn fetch_literal(&mut self, program: &[u8], width: Width) -> Result<u32, Fault> {
        let bytes = self.take(program, width.bytes())?;
        let mut le = [0u8; 4];
        le[..bytes.len()].copy_from_slice(bytes);
        Ok(u32::from_le_bytes(le))
    }

    /// Read a signed 16-bit branch offset.
    pub(crate) fn fetch_offset(&mut self, program: &[u8]) -> Result<i16, Fault> {
        let raw = self.fetch_literal(program, Width::W16)?;
        Ok(raw as u16 as i16)
    }

    /// Read a NUL-terminated string, returning it without the terminator.
    pub(crate) fn fetch_string<'p>(&mut self, program: &'p [u8]) -> Result<&'p [u8], Fault> {
        let rest = program
            .get(self.pc..)
            .ok_or(Fault::TargetOutOfBounds { at: self.pc })?;
        let len = rest
            .iter()
            .position(|&b| b == 0)
            .ok_or(Fault::TargetOutOfBounds { at: self.pc })?;
        let bytes = self.take(program, len + 1)?;
        Ok(&bytes[..len])
    }
}
