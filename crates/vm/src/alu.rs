//! Arithmetic/logic unit.
//!
//! The pure functions here compute results at a given width; the engine
//! handlers wrap them with the pop/compute/push/flags sequence. Two-operand
//! instructions pop the right-hand operand first, then the left-hand one,
//! both from the source stack.
//!
//! A handler stops at the first failing step. Pops that already succeeded
//! keep their effect; the result is not pushed and the flags keep their old
//! value.

use claw_common::{ArithOp, Instruction, LogicOp, ShiftOp, UnaryOp, Width};

use crate::error::Fault;
use crate::machine::Engine;

/// Returned by [`arith`] when the divisor is zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DivideByZero;

/// `lhs OP rhs`, wrapping at `width`.
///
/// `Div` and `Mod` read both operands as signed; the single overflowing
/// case (`MIN / -1`) wraps back to `MIN`, and `MIN % -1` is 0.
pub fn arith(op: ArithOp, width: Width, lhs: u32, rhs: u32) -> Result<u32, DivideByZero> {
    let result = match op {
        ArithOp::Add => lhs.wrapping_add(rhs),
        ArithOp::Sub => lhs.wrapping_sub(rhs),
        ArithOp::Mul => lhs.wrapping_mul(rhs),
        ArithOp::Div | ArithOp::Mod => {
            let (l, r) = (width.sign_extend(lhs), width.sign_extend(rhs));
            if r == 0 {
                return Err(DivideByZero);
            }
            let v = if op == ArithOp::Div {
                l.wrapping_div(r)
            } else {
                l.wrapping_rem(r)
            };
            v as u32
        }
        ArithOp::DivU | ArithOp::ModU => {
            let (l, r) = (width.truncate(lhs), width.truncate(rhs));
            if r == 0 {
                return Err(DivideByZero);
            }
            if op == ArithOp::DivU {
                l / r
            } else {
                l % r
            }
        }
    };
    Ok(width.truncate(result))
}

/// Shift `value` by `count` bits at `width`.
///
/// Counts at or past the width shift every bit out: `SR` and `SL` give 0,
/// `SSR` gives the sign bit repeated across the width.
pub fn shift(op: ShiftOp, width: Width, value: u32, count: u32) -> u32 {
    let value = width.truncate(value);
    let result = match op {
        ShiftOp::Right if count >= width.bits() => 0,
        ShiftOp::Left if count >= width.bits() => 0,
        ShiftOp::Right => value >> count,
        ShiftOp::Left => value << count,
        ShiftOp::RightSigned => (width.sign_extend(value) >> count.min(31)) as u32,
    };
    width.truncate(result)
}

pub fn logic(op: LogicOp, width: Width, lhs: u32, rhs: u32) -> u32 {
    let result = match op {
        LogicOp::And => lhs & rhs,
        LogicOp::Or => lhs | rhs,
        LogicOp::Nor => !(lhs | rhs),
        LogicOp::Nand => !(lhs & rhs),
        LogicOp::Xor => lhs ^ rhs,
    };
    width.truncate(result)
}

pub fn unary(op: UnaryOp, width: Width, value: u32) -> u32 {
    let result = match op {
        UnaryOp::Not => !value,
        UnaryOp::Neg => value.wrapping_neg(),
    };
    width.truncate(result)
}

impl<W, P> Engine<W, P> {
    /// Push an ALU result to the destination, then update flags.
    fn commit(&mut self, instr: Instruction, width: Width, value: u32) -> Result<(), Fault> {
        self.push(instr.dst(), width, value)?;
        self.set_flags(width, value);
        Ok(())
    }

    pub(crate) fn exec_arith(
        &mut self,
        instr: Instruction,
        op: ArithOp,
        width: Width,
    ) -> Result<(), Fault> {
        let rhs = self.pop(instr.src(), width)?;
        let lhs = self.pop(instr.src(), width)?;
        let result = arith(op, width, lhs, rhs)
            .map_err(|DivideByZero| Fault::ArithmeticFault { at: self.at })?;
        self.commit(instr, width, result)
    }

    pub(crate) fn exec_shift(
        &mut self,
        instr: Instruction,
        op: ShiftOp,
        width: Width,
    ) -> Result<(), Fault> {
        let count = self.pop(instr.src(), Width::W8)?;
        let value = self.pop(instr.src(), width)?;
        self.commit(instr, width, shift(op, width, value, count))
    }

    pub(crate) fn exec_logic(
        &mut self,
        instr: Instruction,
        op: LogicOp,
        width: Width,
    ) -> Result<(), Fault> {
        let rhs = self.pop(instr.src(), width)?;
        let lhs = self.pop(instr.src(), width)?;
        self.commit(instr, width, logic(op, width, lhs, rhs))
    }

    pub(crate) fn exec_unary(
        &mut self,
        instr: Instruction,
        op: UnaryOp,
        width: Width,
    ) -> Result<(), Fault> {
        let value = self.pop(instr.src(), width)?;
        self.commit(instr, width, unary(op, width, value))
    }
}
