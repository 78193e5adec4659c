//! Main execution loop and operation dispatch.

use claw_common::{Instruction, Operation};
use log::{debug, trace};

use crate::error::Fault;
use crate::machine::{Engine, Halt, HaltReason};
use crate::output::OutputSink;
use crate::peripheral::Peripheral;

impl<W: OutputSink, P: Peripheral> Engine<W, P> {
    /// Reset the engine and execute `program` from offset 0.
    ///
    /// Returns the halt on a normal end of run. On a fault the fault is
    /// latched (see [`Engine::fault`]) and returned; the stacks, flags and
    /// PC are left as they were when it was raised.
    pub fn run(&mut self, program: &[u8]) -> Result<Halt, Fault> {
        self.reset();
        loop {
            match self.step(program) {
                Ok(None) => {}
                Ok(Some(halt)) => {
                    debug!(
                        "halt at {:#06x} ({:?}) after {} steps",
                        halt.at, halt.reason, self.steps
                    );
                    return Ok(halt);
                }
                Err(fault) => {
                    let fault = self.latch(fault);
                    debug!("fault after {} steps: {fault}", self.steps);
                    return Err(fault);
                }
            }
        }
    }

    /// Execute one instruction.
    fn step(&mut self, program: &[u8]) -> Result<Option<Halt>, Fault> {
        if self.landed && self.pc == program.len() {
            return Ok(Some(Halt {
                at: self.pc,
                reason: HaltReason::Landed,
            }));
        }
        if let Some(limit) = self.config.step_limit {
            if self.steps >= limit {
                return Err(Fault::StepLimitExceeded { at: self.pc, limit });
            }
        }

        self.landed = false;
        self.at = self.pc;
        let instr = Instruction::decode(self.fetch_instruction(program)?);
        let operation = Operation::from_code(instr.code);
        trace!(
            "{:#06x}: {operation:?} s{} d{} (code {:#05x})",
            self.at,
            instr.src(),
            instr.dst(),
            instr.code
        );
        self.steps += 1;
        let flags = self.flags;

        match operation {
            Operation::Nop => {}

            // Data movement
            Operation::Let(w) => self.exec_let(program, instr, w)?,
            Operation::Copy(w) => self.exec_copy(instr, w)?,
            Operation::Move(w) => self.exec_move(instr, w)?,
            Operation::Swap(w) => self.exec_swap(instr, w)?,
            Operation::PeekDeep(w) => self.exec_peek_deep(instr, w)?,
            Operation::StackPointer => self.exec_stack_pointer(instr)?,
            Operation::Delete(w) => self.exec_delete(instr, w)?,

            // ALU
            Operation::Arith(op, w) => self.exec_arith(instr, op, w)?,
            Operation::Shift(op, w) => self.exec_shift(instr, op, w)?,
            Operation::Logic(op, w) => self.exec_logic(instr, op, w)?,
            Operation::Unary(op, w) => self.exec_unary(instr, op, w)?,

            // Control flow
            Operation::Jump(cond) => self.exec_jump(instr, cond)?,
            Operation::Branch(cond) => self.exec_branch(program, cond)?,
            Operation::Call => self.exec_call(instr)?,
            Operation::Return => self.exec_return(instr)?,
            Operation::End(cond) => return Ok(self.exec_end(cond)),

            // Debug output
            Operation::DebugString => self.exec_debug_string(program)?,
            Operation::DebugValue(w) => self.exec_debug_value(instr, w)?,

            Operation::Reserved => self.exec_reserved(instr)?,
        }
        debug_assert!(
            operation.affects_flags() || self.flags == flags,
            "{operation:?} changed the flags"
        );
        Ok(None)
    }
}
