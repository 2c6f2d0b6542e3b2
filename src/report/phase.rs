use serde::Serialize;

/// Existing-file count at which resource extraction is assumed to have started.
///
/// Tied to the size of the built-in manifest; it does not scale with custom manifests.
pub const RESOURCE_EXTRACTION_THRESHOLD: usize = 10;
/// Existing-file count at which finalization is assumed to have started.
pub const FINALIZATION_THRESHOLD: usize = 20;

/// Coarse progress label derived from how many expected files exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    NotStarted,
    BaseSetup,
    ResourceExtraction,
    Finalization,
    Complete,
}

impl Phase {
    /// Classify progress from the existing and total file counts.
    ///
    /// Nothing created is always `NotStarted`; every file created is always `Complete`,
    /// even for manifests smaller than the fixed thresholds.
    pub fn classify(existing_files: usize, total_files: usize) -> Self {
        if existing_files == 0 {
            Phase::NotStarted
        } else if existing_files >= total_files {
            Phase::Complete
        } else if existing_files < RESOURCE_EXTRACTION_THRESHOLD {
            Phase::BaseSetup
        } else if existing_files < FINALIZATION_THRESHOLD {
            Phase::ResourceExtraction
        } else {
            Phase::Finalization
        }
    }

    pub const fn label(&self) -> &'static str {
        match self {
            Phase::NotStarted => "Phase 1: Infrastructure Setup (not started)",
            Phase::BaseSetup => "Phase 2-4: GraphQL extraction and base setup (in progress)",
            Phase::ResourceExtraction => "Phase 5-8: Resource extraction (in progress)",
            Phase::Finalization => "Phase 9-11: Finalization (in progress)",
            Phase::Complete => "Phase 12: Complete! Ready for commit",
        }
    }
}
