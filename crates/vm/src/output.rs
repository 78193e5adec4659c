//! The debug/output channel.
//!
//! `DBGS` and `DBG8`/`DBG16`/`DBG32` write through an [`OutputSink`]. Every
//! [`std::io::Write`] is a sink, so stdout, a `Vec<u8>` or a file all work.

use std::io;

use claw_common::{Instruction, Width};
use log::warn;

use crate::error::Fault;
use crate::machine::Engine;

/// Destination for debug output.
pub trait OutputSink {
    /// Write raw bytes, as emitted by `DBGS`.
    fn emit_bytes(&mut self, bytes: &[u8]) -> io::Result<()>;

    /// Write a value popped by `DBG8`/`DBG16`/`DBG32`.
    ///
    /// The default renders unsigned decimal followed by a newline.
    fn emit_value(&mut self, _width: Width, value: u32) -> io::Result<()> {
        self.emit_bytes(format!("{value}\n").as_bytes())
    }
}

impl<T: io::Write> OutputSink for T {
    fn emit_bytes(&mut self, bytes: &[u8]) -> io::Result<()> {
        self.write_all(bytes)?;
        self.flush()
    }
}

impl<W: OutputSink, P> Engine<W, P> {
    /// `DBGS`: emit the inline string.
    pub(crate) fn exec_debug_string(&mut self, program: &[u8]) -> Result<(), Fault> {
        let text = self.fetch_string(program)?;
        if let Err(e) = self.output.emit_bytes(text) {
            warn!("debug output failed at {:#06x}: {e}", self.at);
        }
        Ok(())
    }

    /// `DBG8`/`DBG16`/`DBG32`: pop a value and emit it.
    pub(crate) fn exec_debug_value(
        &mut self,
        instr: Instruction,
        width: Width,
    ) -> Result<(), Fault> {
        let value = self.pop(instr.src(), width)?;
        if let Err(e) = self.output.emit_value(width, value) {
            warn!("debug output failed at {:#06x}: {e}", self.at);
        }
        Ok(())
    }
}
