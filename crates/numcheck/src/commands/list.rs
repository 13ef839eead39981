//! The `list` command: show every registered case without running it.

use std::fmt::Write as _;

use numc_registry::{build_registry, Suite};

/// One line per case: `suite/case: operation => expected`.
pub fn case_listing(suites: &[Suite]) -> String {
    let mut out = String::new();
    for suite in suites {
        for case in suite.cases() {
            // Writing to a String cannot fail.
            let _ = writeln!(
                out,
                "{}/{}: {} => {}",
                suite.name(),
                case.name(),
                case.operation(),
                case.expected()
            );
        }
    }
    out
}

/// Print the registry listing and return the exit code.
pub fn list_cases() -> i32 {
    match build_registry() {
        Ok(suites) => {
            print!("{}", case_listing(&suites));
            0
        }
        Err(err) => {
            eprintln!("error: {err}");
            1
        }
    }
}
