//! Command handlers for the `numcheck` CLI.
//!
//! Each submodule implements one command. Handlers print to stdout and
//! return the process exit code; `main` owns the actual exit.

mod list;
mod run;

pub use list::{case_listing, list_cases};
pub use run::{check_registry, run_all, run_all_with};
