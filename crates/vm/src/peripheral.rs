//! Delegation boundary for reserved opcodes.
//!
//! The core decodes display, peripheral, float, cast and constant-shorthand
//! opcodes but does not execute them. Each one is handed to a
//! [`Peripheral`] together with both stack selectors and the stack bank, so
//! a display-capable host can implement them without touching the engine.

use claw_common::Instruction;
use log::debug;
use thiserror::Error;

use crate::error::{Fault, StackError};
use crate::machine::Engine;
use crate::stack::StackBank;

/// Reasons a peripheral can reject an instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PeripheralError {
    /// The peripheral refuses to run this opcode.
    #[error("permission denied")]
    Denied,

    /// A stack access made by the peripheral failed.
    #[error(transparent)]
    Stack(#[from] StackError),
}

/// Handler for reserved instructions.
pub trait Peripheral {
    /// Execute a reserved instruction.
    ///
    /// `instr.code` may be a table opcode or an unknown code.
    fn dispatch(
        &mut self,
        instr: Instruction,
        stacks: &mut StackBank,
    ) -> Result<(), PeripheralError>;
}

/// Peripheral that accepts every reserved instruction and does nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoPeripheral;

impl Peripheral for NoPeripheral {
    fn dispatch(
        &mut self,
        _instr: Instruction,
        _stacks: &mut StackBank,
    ) -> Result<(), PeripheralError> {
        Ok(())
    }
}

impl<P: Peripheral + ?Sized> Peripheral for &mut P {
    fn dispatch(
        &mut self,
        instr: Instruction,
        stacks: &mut StackBank,
    ) -> Result<(), PeripheralError> {
        (**self).dispatch(instr, stacks)
    }
}

impl<W, P: Peripheral> Engine<W, P> {
    /// Hand a reserved instruction to the peripheral.
    pub(crate) fn exec_reserved(&mut self, instr: Instruction) -> Result<(), Fault> {
        debug!(
            "reserved opcode {:#05x} at {:#06x} delegated",
            instr.code, self.at
        );
        self.peripheral
            .dispatch(instr, &mut self.stacks)
            .map_err(|e| match e {
                PeripheralError::Denied => Fault::InsufficientPermissions {
                    at: self.at,
                    code: instr.code,
                },
                PeripheralError::Stack(e) => e.at(self.at),
            })
    }
}
