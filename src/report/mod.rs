//! Progress analysis, phase classification and report rendering.
mod analysis;
mod phase;
mod render;

pub use analysis::{
    analyze, percent, Counters, EntryClass, EntryOutcome, LegacyOutcome, LegacyState,
    ProgressReport, Violation,
};
pub use phase::{Phase, FINALIZATION_THRESHOLD, RESOURCE_EXTRACTION_THRESHOLD};
pub use render::{render, render_json, render_text, OutputFormat};
