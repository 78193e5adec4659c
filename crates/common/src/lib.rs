//! CLAW common types and instruction encoding.
//!
//! This crate provides the foundational data structures for the CLAW
//! bytecode:
//!
//! - [`Opcode`]: the full numeric opcode table
//! - [`Instruction`]: the 16-bit instruction word with encode/decode
//! - [`Width`]: operand widths (8, 16 and 32 bits)
//! - [`Operation`]: the handler class each opcode dispatches to
//! - [`ProgramBuilder`]: emits program images byte by byte
//! - [`disassemble`]: renders a program image as a listing
//! - [`DecodeError`]: errors from resolving opcode values
//!
//! # Dependencies
//!
//! This crate uses `thiserror` (compile-time proc-macro, zero runtime cost)
//! and has no other dependencies.

pub mod error;
pub mod instruction;
pub mod listing;
pub mod opcode;
pub mod operation;
pub mod program;
pub mod width;

// Re-export commonly used types at the crate root.
pub use error::DecodeError;
pub use instruction::{Instruction, STACK_COUNT, WORD_BYTES};
pub use listing::disassemble;
pub use opcode::Opcode;
pub use operation::{ArithOp, Condition, InlineOperand, LogicOp, Operation, ShiftOp, UnaryOp};
pub use program::ProgramBuilder;
pub use width::Width;

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    /// Strategy that generates a random table opcode.
    fn arb_opcode() -> impl Strategy<Value = Opcode> {
        prop::sample::select(&opcode::ALL_OPCODES[..])
    }

    proptest! {
        /// Any 16-bit word survives decode then encode unchanged.
        #[test]
        fn word_roundtrip(word in any::<u16>()) {
            prop_assert_eq!(Instruction::decode(word).encode(), word);
        }

        /// Building an instruction from table entries resolves back to the same opcode.
        #[test]
        fn opcode_survives_encoding(op in arb_opcode(), src in 0u8..4, dst in 0u8..4) {
            let instr = Instruction::decode(Instruction::new(op, src, dst).encode());
            prop_assert_eq!(instr.opcode(), Ok(op));
            prop_assert_eq!(instr.source, src);
            prop_assert_eq!(instr.destination, dst);
        }

        /// Listing arbitrary bytes never panics and ends every line.
        #[test]
        fn listing_total(bytes in prop::collection::vec(any::<u8>(), 0..64)) {
            let text = disassemble(&bytes);
            prop_assert!(text.is_empty() || text.ends_with('\n'));
        }
    }
}
