//! CLAW CLI: run and inspect bytecode images.
//!
//! Exit codes:
//! - 0: Success
//! - 1: Input or usage error
//! - 3: Runtime fault

mod commands;

use std::process;

fn main() {
    let env = env_logger::Env::default()
        .filter_or("CLAW_LOG", "warn")
        .write_style_or("CLAW_LOG_STYLE", "auto");
    env_logger::init_from_env(env);

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        process::exit(1);
    }

    let result = match args[1].as_str() {
        "run" => commands::run(&args[2..]),
        "dump" => commands::dump(&args[2..]),
        "--help" | "-h" | "help" => {
            print_usage();
            process::exit(0);
        }
        other => {
            eprintln!("error: unknown command '{other}'");
            eprintln!();
            print_usage();
            process::exit(1);
        }
    };

    if let Err(code) = result {
        process::exit(code);
    }
}

fn print_usage() {
    eprintln!("Usage: claw <command> [args]");
    eprintln!();
    eprintln!("Commands:");
    eprintln!("  run <program.bin> [--max-steps N]   Execute a program");
    eprintln!("  dump <program.bin>                  Print a decoded listing");
    eprintln!("  help                                Show this message");
    eprintln!();
    eprintln!("Set CLAW_LOG=debug or CLAW_LOG=trace for execution logs.");
}
