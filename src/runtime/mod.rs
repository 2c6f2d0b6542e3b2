//! Analysis bootstrap and process exit handling.
mod startup;

pub use startup::{run_analysis, RunExit};
