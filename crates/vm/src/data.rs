//! Data movement: literals, copies, moves, swaps, deletes.
//!
//! None of these instructions touch the flags.

use claw_common::{Instruction, Width};

use crate::error::Fault;
use crate::machine::Engine;

impl<W, P> Engine<W, P> {
    /// `LET`: push the inline literal.
    pub(crate) fn exec_let(
        &mut self,
        program: &[u8],
        instr: Instruction,
        width: Width,
    ) -> Result<(), Fault> {
        let value = self.fetch_literal(program, width)?;
        self.push(instr.dst(), width, value)
    }

    /// `CPY`: push a copy of the source top.
    pub(crate) fn exec_copy(&mut self, instr: Instruction, width: Width) -> Result<(), Fault> {
        let value = self.peek(instr.src(), width)?;
        self.push(instr.dst(), width, value)
    }

    /// `MOV`: pop from source, push to destination.
    pub(crate) fn exec_move(&mut self, instr: Instruction, width: Width) -> Result<(), Fault> {
        let value = self.pop(instr.src(), width)?;
        self.push(instr.dst(), width, value)
    }

    /// `SWP`: exchange the source and destination tops.
    ///
    /// With source and destination on the same stack this exchanges its top
    /// two values. Both pushes land in space the pops just freed.
    pub(crate) fn exec_swap(&mut self, instr: Instruction, width: Width) -> Result<(), Fault> {
        let a = self.pop(instr.src(), width)?;
        let b = self.pop(instr.dst(), width)?;
        self.push(instr.dst(), width, a)?;
        self.push(instr.src(), width, b)
    }

    /// `PEEKD`: pop a 32-bit byte depth, copy the value at that depth.
    ///
    /// The depth is measured after the depth operand itself is popped.
    pub(crate) fn exec_peek_deep(
        &mut self,
        instr: Instruction,
        width: Width,
    ) -> Result<(), Fault> {
        let depth = self.pop(instr.src(), Width::W32)?;
        let value = self
            .stacks
            .peek_at(instr.src(), width, depth as usize)
            .map_err(|e| e.at(self.at))?;
        self.push(instr.dst(), width, value)
    }

    /// `SPTR`: push the source stack pointer.
    pub(crate) fn exec_stack_pointer(&mut self, instr: Instruction) -> Result<(), Fault> {
        let sp = self.stacks.sp(instr.src()) as u32;
        self.push(instr.dst(), Width::W32, sp)
    }

    /// `DEL`: pop and discard.
    pub(crate) fn exec_delete(&mut self, instr: Instruction, width: Width) -> Result<(), Fault> {
        self.pop(instr.src(), width).map(drop)
    }
}
