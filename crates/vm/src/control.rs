//! Control flow: absolute jumps, relative branches, calls, halts.
//!
//! Every conditional form consumes its operand (stack address or inline
//! offset) whether or not the condition holds. A taken transfer marks the
//! engine as having landed, which makes a target equal to the program
//! length a normal completion instead of a fault.

use claw_common::{Condition, Instruction, Width};

use crate::error::Fault;
use crate::machine::{Engine, Halt, HaltReason};

impl<W, P> Engine<W, P> {
    /// `JMP*`: pop a 32-bit address, jump if the condition holds.
    pub(crate) fn exec_jump(
        &mut self,
        instr: Instruction,
        condition: Condition,
    ) -> Result<(), Fault> {
        let target = self.pop(instr.src(), Width::ADDRESS)?;
        if self.flags.satisfies(condition) {
            self.jump_to(target as usize);
        }
        Ok(())
    }

    /// `BR*`: read a signed offset, add it to the PC past the offset.
    ///
    /// A target below zero faults here, at the branch itself, since no
    /// program offset can represent it.
    pub(crate) fn exec_branch(
        &mut self,
        program: &[u8],
        condition: Condition,
    ) -> Result<(), Fault> {
        let offset = self.fetch_offset(program)?;
        if self.flags.satisfies(condition) {
            let target = self
                .pc
                .checked_add_signed(offset as isize)
                .ok_or(Fault::TargetOutOfBounds { at: self.at })?;
            self.jump_to(target);
        }
        Ok(())
    }

    /// `CALL`: pop a target, push the return address, jump.
    pub(crate) fn exec_call(&mut self, instr: Instruction) -> Result<(), Fault> {
        let target = self.pop(instr.src(), Width::ADDRESS)?;
        let ret =
            u32::try_from(self.pc).map_err(|_| Fault::TargetOutOfBounds { at: self.at })?;
        self.push(instr.dst(), Width::ADDRESS, ret)?;
        self.jump_to(target as usize);
        Ok(())
    }

    /// `RET`: pop a return address and jump to it.
    pub(crate) fn exec_return(&mut self, instr: Instruction) -> Result<(), Fault> {
        let target = self.pop(instr.src(), Width::ADDRESS)?;
        self.jump_to(target as usize);
        Ok(())
    }

    /// `END*`: halt if the condition holds.
    pub(crate) fn exec_end(&self, condition: Condition) -> Option<Halt> {
        self.flags.satisfies(condition).then_some(Halt {
            at: self.at,
            reason: HaltReason::End(condition),
        })
    }
}
