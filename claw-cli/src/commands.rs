//! CLI command implementations.

use std::fs;

use claw_common::STACK_COUNT;
use claw_vm::{Engine, EngineConfig, HaltReason, StackBank};
use log::debug;

/// Execute a program, with debug output on stdout.
pub fn run(args: &[String]) -> Result<(), i32> {
    if args.is_empty() {
        eprintln!("error: run requires an input file");
        eprintln!("Usage: claw run <program.bin> [--max-steps N]");
        return Err(1);
    }

    let input = &args[0];
    let config = parse_run_flags(&args[1..])?;
    let program = read_program(input)?;

    let mut engine = Engine::new().with_config(config);
    let result = engine.run(&program);
    print_stacks(engine.stacks());

    match result {
        Ok(halt) => {
            let reason = match halt.reason {
                HaltReason::End(_) => "end",
                HaltReason::Landed => "landed at end of program",
            };
            eprintln!(
                "halted at {:#06x} ({reason}) after {} steps",
                halt.at,
                engine.steps()
            );
            Ok(())
        }
        Err(fault) => {
            eprintln!("fault: {fault}");
            Err(3)
        }
    }
}

/// Print a decoded listing of a program.
pub fn dump(args: &[String]) -> Result<(), i32> {
    if args.is_empty() {
        eprintln!("error: dump requires an input file");
        eprintln!("Usage: claw dump <program.bin>");
        return Err(1);
    }

    let program = read_program(&args[0])?;
    print!("{}", claw_common::disassemble(&program));
    Ok(())
}

// --- Helpers ---

/// Read a program image from disk.
fn read_program(path: &str) -> Result<Vec<u8>, i32> {
    let bytes = fs::read(path).map_err(|e| {
        eprintln!("error: cannot read '{path}': {e}");
        1
    })?;
    debug!("loaded {} bytes from {path}", bytes.len());
    Ok(bytes)
}

/// Parse the flags accepted by `run`.
fn parse_run_flags(args: &[String]) -> Result<EngineConfig, i32> {
    let mut config = EngineConfig::new();
    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--max-steps" => {
                let Some(value) = args.get(i + 1) else {
                    eprintln!("error: --max-steps requires a value");
                    return Err(1);
                };
                let limit = value.parse::<u64>().map_err(|_| {
                    eprintln!("error: invalid step count '{value}'");
                    1
                })?;
                config = config.with_step_limit(limit);
                i += 2;
            }
            other => {
                eprintln!("error: unexpected argument '{other}'");
                return Err(1);
            }
        }
    }
    Ok(config)
}

/// Print each stack's live bytes, bottom first.
fn print_stacks(stacks: &StackBank) {
    for stack in 0..STACK_COUNT {
        let bytes: Vec<String> = stacks
            .contents(stack)
            .iter()
            .map(|b| format!("{b:02x}"))
            .collect();
        eprintln!("s{stack}: [{}]", bytes.join(" "));
    }
}
