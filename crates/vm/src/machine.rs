//! Engine state: program counter, stack bank, flags, fault latch.

use std::io;

use claw_common::{Condition, Width};
use log::debug;

use crate::config::EngineConfig;
use crate::error::Fault;
use crate::peripheral::{NoPeripheral, Peripheral};
use crate::stack::StackBank;

/// Condition flags, set from the last ALU result.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Flags {
    pub zero: bool,
    pub negative: bool,
}

impl Flags {
    /// Flags for `value` read as a signed number of the given width.
    pub fn from_result(width: Width, value: u32) -> Self {
        Self {
            zero: width.truncate(value) == 0,
            negative: width.is_negative(value),
        }
    }

    pub fn satisfies(&self, condition: Condition) -> bool {
        condition.holds(self.zero, self.negative)
    }
}

/// Why a run stopped normally.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HaltReason {
    /// `END`, or `ENDZ`/`ENDN` with its flag set.
    End(Condition),
    /// A jump, branch, call or return landed exactly on the end of the program.
    Landed,
}

/// A normal end of run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Halt {
    /// Offset of the halting instruction, or the program length for
    /// [`HaltReason::Landed`].
    pub at: usize,
    pub reason: HaltReason,
}

/// The CLAW execution engine.
///
/// An engine owns its stacks, flags and fault latch, and runs one program at
/// a time. [`Engine::run`] resets all state first, so an engine can be reused
/// across programs. Debug output goes to `W`; reserved opcodes go to `P`.
pub struct Engine<W = io::Stdout, P = NoPeripheral> {
    pub(crate) stacks: StackBank,
    pub(crate) flags: Flags,
    /// Program counter (byte offset).
    pub(crate) pc: usize,
    /// Offset of the instruction currently executing.
    pub(crate) at: usize,
    /// Set when the last instruction transferred control.
    pub(crate) landed: bool,
    pub(crate) fault: Option<Fault>,
    pub(crate) steps: u64,
    pub(crate) config: EngineConfig,
    pub(crate) output: W,
    pub(crate) peripheral: P,
}

impl Engine {
    /// Engine writing debug output to stdout, with no peripherals.
    pub fn new() -> Self {
        Self::with_output(io::stdout())
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

impl<W> Engine<W, NoPeripheral> {
    /// Engine writing debug output to `output`, with no peripherals.
    pub fn with_output(output: W) -> Self {
        Self {
            stacks: StackBank::new(),
            flags: Flags::default(),
            pc: 0,
            at: 0,
            landed: false,
            fault: None,
            steps: 0,
            config: EngineConfig::default(),
            output,
            peripheral: NoPeripheral,
        }
    }
}

impl<W, P> Engine<W, P> {
    /// Replace the peripheral dispatcher.
    pub fn with_peripheral<Q: Peripheral>(self, peripheral: Q) -> Engine<W, Q> {
        Engine {
            stacks: self.stacks,
            flags: self.flags,
            pc: self.pc,
            at: self.at,
            landed: self.landed,
            fault: self.fault,
            steps: self.steps,
            config: self.config,
            output: self.output,
            peripheral,
        }
    }

    pub fn with_config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    /// Return PC, stack pointers, flags, fault latch and step count to their
    /// start-of-run values. Stack contents past each pointer are left as is.
    pub fn reset(&mut self) {
        self.stacks.reset();
        self.flags = Flags::default();
        self.pc = 0;
        self.at = 0;
        self.landed = false;
        self.fault = None;
        self.steps = 0;
        debug!("engine reset");
    }

    pub fn stacks(&self) -> &StackBank {
        &self.stacks
    }

    pub fn flags(&self) -> Flags {
        self.flags
    }

    pub fn pc(&self) -> usize {
        self.pc
    }

    /// The latched fault of the last run, if it faulted.
    pub fn fault(&self) -> Option<&Fault> {
        self.fault.as_ref()
    }

    /// Instructions executed by the last run.
    pub fn steps(&self) -> u64 {
        self.steps
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn output(&self) -> &W {
        &self.output
    }

    pub fn output_mut(&mut self) -> &mut W {
        &mut self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }

    pub fn peripheral(&self) -> &P {
        &self.peripheral
    }

    /// Record `fault` unless one is already latched; returns the latched fault.
    pub(crate) fn latch(&mut self, fault: Fault) -> Fault {
        self.fault.get_or_insert(fault).clone()
    }

    /// Transfer control to `target`.
    pub(crate) fn jump_to(&mut self, target: usize) {
        self.pc = target;
        self.landed = true;
    }

    pub(crate) fn push(&mut self, stack: usize, width: Width, value: u32) -> Result<(), Fault> {
        self.stacks
            .push(stack, width, value)
            .map_err(|e| e.at(self.at))
    }

    pub(crate) fn pop(&mut self, stack: usize, width: Width) -> Result<u32, Fault> {
        self.stacks.pop(stack, width).map_err(|e| e.at(self.at))
    }

    pub(crate) fn peek(&self, stack: usize, width: Width) -> Result<u32, Fault> {
        self.stacks.peek(stack, width).map_err(|e| e.at(self.at))
    }

    /// Write an ALU result's flags.
    pub(crate) fn set_flags(&mut self, width: Width, value: u32) {
        self.flags = Flags::from_result(width, value);
    }
}
