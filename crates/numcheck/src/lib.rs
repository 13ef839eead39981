//! Numcheck - numeric-semantics conformance checker.
//!
//! Builds the case registry, evaluates every case with host arithmetic,
//! and reports which edge-case policies hold:
//! - `check`: runner, comparison rules and report types
//! - `commands`: the entry points behind the `numcheck` binary
//!
//! ```text
//! build_registry() -> Runner::run() -> Report -> exit code
//! ```

pub mod check;
pub mod commands;

use std::sync::Once;

pub use check::{run, EntryOutcome, Report, ReportEntry, Runner, RunnerConfig, Verdict};
pub use commands::{case_listing, check_registry, list_cases, run_all, run_all_with};

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Call this once at startup. Safe to call multiple times.
/// Enable with `RUST_LOG=numcheck=debug` or `RUST_LOG=numc_registry=debug`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(
                    tracing_tree::HierarchicalLayer::new(2)
                        .with_targets(true)
                        .with_bracketed_fields(true),
                )
                .with(filter)
                .init();
        }
    });
}
