//! Shared library modules providing error types, the filesystem probe, path helpers and telemetry.

pub mod errors;
pub mod fs;
pub mod paths;
pub mod telemetry;
