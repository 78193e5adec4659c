//! Runtime faults for the CLAW engine.
//!
//! Every fault carries `at`, the program offset where it was raised: the
//! start of the faulting instruction, or the offset of a fetch that ran past
//! the end of the program.

use thiserror::Error;

/// Errors raised by the stack bank, before a program offset is attached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StackError {
    /// A push would exceed the stack capacity.
    #[error("stack {stack} overflow")]
    Overflow { stack: usize },

    /// A pop or peek asked for more bytes than the stack holds.
    #[error("stack {stack} underflow")]
    Underflow { stack: usize },
}

impl StackError {
    /// Attach the program offset of the instruction that caused the error.
    pub fn at(self, at: usize) -> Fault {
        match self {
            StackError::Overflow { stack } => Fault::StackOverflow { at, stack },
            StackError::Underflow { stack } => Fault::StackUnderflow { at, stack },
        }
    }
}

/// Conditions that end a run abnormally.
///
/// Once raised, a fault is latched by the engine and no further instruction
/// executes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Fault {
    /// A push would have exceeded the 1024-byte stack capacity.
    #[error("stack {stack} overflow at {at:#06x}")]
    StackOverflow { at: usize, stack: usize },

    /// A pop or peek found fewer bytes than the operand width.
    #[error("stack {stack} underflow at {at:#06x}")]
    StackUnderflow { at: usize, stack: usize },

    /// Division or remainder by zero.
    #[error("division by zero at {at:#06x}")]
    ArithmeticFault { at: usize },

    /// The program counter left the program without an explicit halt.
    #[error("target out of bounds at {at:#06x}")]
    TargetOutOfBounds { at: usize },

    /// The peripheral dispatcher refused a reserved opcode.
    #[error("insufficient permissions for opcode {code:#05x} at {at:#06x}")]
    InsufficientPermissions { at: usize, code: u16 },

    /// The configured step budget ran out.
    #[error("step limit of {limit} exceeded at {at:#06x}")]
    StepLimitExceeded { at: usize, limit: u64 },
}

/// The kind of a [`Fault`], without its location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FaultKind {
    StackOverflow,
    StackUnderflow,
    ArithmeticFault,
    TargetOutOfBounds,
    InsufficientPermissions,
    StepLimitExceeded,
}

impl Fault {
    /// Program offset at which the fault was raised.
    pub fn at(&self) -> usize {
        match *self {
            Fault::StackOverflow { at, .. }
            | Fault::StackUnderflow { at, .. }
            | Fault::ArithmeticFault { at }
            | Fault::TargetOutOfBounds { at }
            | Fault::InsufficientPermissions { at, .. }
            | Fault::StepLimitExceeded { at, .. } => at,
        }
    }

    pub fn kind(&self) -> FaultKind {
        match self {
            Fault::StackOverflow { .. } => FaultKind::StackOverflow,
            Fault::StackUnderflow { .. } => FaultKind::StackUnderflow,
            Fault::ArithmeticFault { .. } => FaultKind::ArithmeticFault,
            Fault::TargetOutOfBounds { .. } => FaultKind::TargetOutOfBounds,
            Fault::InsufficientPermissions { .. } => FaultKind::InsufficientPermissions,
            Fault::StepLimitExceeded { .. } => FaultKind::StepLimitExceeded,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fault_display_formats() {
        assert_eq!(
            Fault::ArithmeticFault { at: 5 }.to_string(),
            "division by zero at 0x0005"
        );
        assert_eq!(
            Fault::StackOverflow { at: 0x12, stack: 3 }.to_string(),
            "stack 3 overflow at 0x0012"
        );
        assert_eq!(
            Fault::InsufficientPermissions { at: 2, code: 0x1ab }.to_string(),
            "insufficient permissions for opcode 0x1ab at 0x0002"
        );
        assert_eq!(
            Fault::StepLimitExceeded { at: 0, limit: 10 }.to_string(),
            "step limit of 10 exceeded at 0x0000"
        );
    }

    #[test]
    fn stack_error_gains_location() {
        assert_eq!(
            StackError::Underflow { stack: 1 }.at(7),
            Fault::StackUnderflow { at: 7, stack: 1 }
        );
        assert_eq!(
            StackError::Overflow { stack: 2 }.at(9),
            Fault::StackOverflow { at: 9, stack: 2 }
        );
    }

    #[test]
    fn kind_and_location() {
        let fault = Fault::TargetOutOfBounds { at: 12 };
        assert_eq!(fault.kind(), FaultKind::TargetOutOfBounds);
        assert_eq!(fault.at(), 12);
    }
}
