//! Decode errors for CLAW instruction words.

use thiserror::Error;

/// Errors that occur while resolving an instruction word.
///
/// Neither variant is fatal to execution: the engine treats any word whose
/// opcode does not resolve as a reserved instruction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// The 12-bit code has no entry in the opcode table.
    #[error("unknown opcode: {0:#05x}")]
    UnknownOpcode(u16),

    /// The value does not fit in the 12-bit opcode field.
    #[error("opcode {0:#06x} does not fit in 12 bits")]
    CodeOutOfRange(u16),
}
