//! Human-readable listings of program images.
//!
//! One line per instruction:
//! ```text
//! 0000  LET8     s0 d0  101
//! 0003  ADD8     s0 d1
//! 0005  BRZ      s0 d0  +4
//! ```
//! Words whose code is not in the table print as `.code 0x00c`. A trailing
//! odd byte or an operand cut off by the end of the image prints as
//! `.truncated` and ends the listing.

use crate::instruction::{Instruction, WORD_BYTES};
use crate::operation::{InlineOperand, Operation};

/// Render a listing of `program`.
pub fn disassemble(program: &[u8]) -> String {
    let mut out = String::new();
    let mut pc = 0;

    while pc < program.len() {
        let start = pc;
        let Some(word) = program.get(pc..pc + WORD_BYTES) else {
            out.push_str(&format!("{start:04x}  .truncated\n"));
            break;
        };
        pc += WORD_BYTES;
        let instr = Instruction::decode(u16::from_le_bytes([word[0], word[1]]));

        let name = match instr.opcode() {
            Ok(opcode) => opcode.mnemonic().to_string(),
            Err(_) => format!(".code {:#05x}", instr.code),
        };
        let mut line = format!(
            "{start:04x}  {name:<8} s{} d{}",
            instr.source, instr.destination
        );

        let operand = match Operation::from_code(instr.code).inline_operand() {
            None => Some(String::new()),
            Some(InlineOperand::Literal(width)) => {
                program.get(pc..pc + width.bytes()).map(|bytes| {
                    pc += width.bytes();
                    let mut le = [0u8; 4];
                    le[..bytes.len()].copy_from_slice(bytes);
                    format!("  {}", u32::from_le_bytes(le))
                })
            }
            Some(InlineOperand::Offset) => program.get(pc..pc + 2).map(|bytes| {
                pc += 2;
                format!("  {:+}", i16::from_le_bytes([bytes[0], bytes[1]]))
            }),
            Some(InlineOperand::String) => {
                let rest = &program[pc..];
                rest.iter().position(|&b| b == 0).map(|len| {
                    pc += len + 1;
                    format!("  {:?}", String::from_utf8_lossy(&rest[..len]))
                })
            }
        };

        match operand {
            Some(operand) => {
                line.push_str(&operand);
                out.push_str(&line);
                out.push('\n');
            }
            None => {
                out.push_str(&line);
                out.push_str("  .truncated\n");
                break;
            }
        }
    }

    out
}
