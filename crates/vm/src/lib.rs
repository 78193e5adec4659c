//! CLAW execution engine: runs flat CLAW bytecode images.
//!
//! The engine is a four-stack machine with:
//! - Four 1024-byte stacks holding little-endian values of 8, 16 or 32 bits
//! - Zero and negative flags set by ALU results
//! - A latched fault state; the first fault ends the run
//!
//! Reserved opcodes (display, peripherals, floats, casts) are handed to a
//! [`Peripheral`], which does nothing by default.
//!
//! # Usage
//!
//! ```
//! use claw_common::{Opcode, ProgramBuilder};
//! use claw_vm::{Engine, HaltReason};
//!
//! let program = ProgramBuilder::new()
//!     .let8(0, 101)
//!     .let8(0, 99)
//!     .op(Opcode::Add8, 0, 1)
//!     .op(Opcode::Dbg8, 1, 0)
//!     .op(Opcode::End, 0, 0)
//!     .build();
//!
//! let mut engine = Engine::with_output(Vec::<u8>::new());
//! let halt = engine.run(&program).unwrap();
//! assert!(matches!(halt.reason, HaltReason::End(_)));
//! assert_eq!(engine.output(), b"200\n");
//! ```

pub mod alu;
pub mod config;
mod control;
mod data;
pub mod error;
mod execute;
mod fetch;
pub mod machine;
pub mod output;
pub mod peripheral;
pub mod stack;

pub use config::EngineConfig;
pub use error::{Fault, FaultKind, StackError};
pub use machine::{Engine, Flags, Halt, HaltReason};
pub use output::OutputSink;
pub use peripheral::{NoPeripheral, Peripheral, PeripheralError};
pub use stack::{StackBank, STACK_CAPACITY};

/// Execute a program with debug output on stdout and no peripherals.
///
/// # Errors
///
/// Returns the [`Fault`] that ended the run: a stack overflow or underflow,
/// a division by zero, or control leaving the program.
pub fn run(program: &[u8]) -> Result<Halt, Fault> {
    Engine::new().run(program)
}
