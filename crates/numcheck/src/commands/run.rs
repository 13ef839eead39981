//! The `run` command: build the registry, check every case, print the report.

use numc_registry::build_registry;

use crate::check::{Report, Runner, RunnerConfig};

/// Build the registry and run it with `config`.
///
/// A registry that fails to build produces a zero-confidence report instead
/// of a panic, so callers always get something to render.
pub fn check_registry(config: &RunnerConfig) -> Report {
    match build_registry() {
        Ok(suites) => Runner::with_config(config.clone()).run(&suites),
        Err(err) => {
            tracing::error!(%err, "registry is malformed");
            Report::malformed(&err)
        }
    }
}

/// Run every case with the default configuration.
pub fn run_all() -> i32 {
    run_all_with(&RunnerConfig::default())
}

/// Run the selected cases, print the report and return the exit code.
pub fn run_all_with(config: &RunnerConfig) -> i32 {
    let report = check_registry(config);
    print!("{}", report.render(config.verbose));
    report.exit_code()
}
