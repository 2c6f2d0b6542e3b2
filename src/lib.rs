//! Library crate root re-exporting the manifest, probe, report and CLI modules.

#[path = "lib/mod.rs"]
pub mod lib_mod;
pub use lib_mod as lib;
pub mod cli;
pub mod manifest;
pub mod report;
pub mod runtime;
