//! Numcheck CLI
//!
//! Runs the numeric edge-case registry against the host's arithmetic.

use numcheck::{init_tracing, list_cases, run_all_with, RunnerConfig};

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();
    let command = args.get(1).map_or("run", String::as_str);

    let code = match command {
        "run" => {
            let mut config = RunnerConfig::default();
            for arg in args.iter().skip(2) {
                if let Some(filter) = arg.strip_prefix("--filter=") {
                    config.filter = Some(filter.to_string());
                } else if let Some(suite) = arg.strip_prefix("--suite=") {
                    config.suites.push(suite.to_string());
                } else if arg == "--verbose" || arg == "-v" {
                    config.verbose = true;
                } else if arg == "--no-parallel" {
                    config.parallel = false;
                } else {
                    eprintln!("error: unknown option `{arg}`");
                    print_usage();
                    std::process::exit(1);
                }
            }
            run_all_with(&config)
        }
        "list" => list_cases(),
        "help" | "--help" | "-h" => {
            print_usage();
            0
        }
        _ => {
            eprintln!("Unknown command: {command}");
            print_usage();
            1
        }
    };

    std::process::exit(code);
}

fn print_usage() {
    println!("Numcheck - numeric-semantics conformance checker");
    println!();
    println!("Usage: numcheck <command> [options]");
    println!();
    println!("Commands:");
    println!("  run [options]    Check every registered case (default)");
    println!("  list             List every case with its operation and expectation");
    println!("  help             Show this message");
    println!();
    println!("Run options:");
    println!("  --filter=<text>  Only cases whose `suite/case` name contains <text>");
    println!("  --suite=<name>   Only the named suite (repeatable)");
    println!("  -v, --verbose    Show each case's operation");
    println!("  --no-parallel    Evaluate cases sequentially");
    println!();
    println!("Set RUST_LOG (e.g. RUST_LOG=numcheck=debug) for tracing output.");
}
