use clap::ValueEnum;
use serde_json::json;

use super::{EntryClass, LegacyState, Phase, ProgressReport};

/// Output format for the report on stdout.
#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl OutputFormat {
    pub const fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
        }
    }
}

pub fn render(report: &ProgressReport, format: OutputFormat) -> serde_json::Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(report)),
        OutputFormat::Json => render_json(report),
    }
}

/// Human-readable report: entries, legacy files, summary, violations, phase.
pub fn render_text(report: &ProgressReport) -> String {
    let mut out = String::new();

    out.push_str("🔍 Checking refactoring progress...\n\n");

    for entry in &report.entries {
        match entry.class {
            EntryClass::Compliant { lines } => {
                out.push_str(&format!("✅ {} ({} lines)\n", entry.path, lines));
            }
            EntryClass::Violation { lines } => {
                out.push_str(&format!(
                    "⚠️  {} ({} lines, exceeds {})\n",
                    entry.path, lines, entry.max_lines
                ));
            }
            EntryClass::Missing => {
                out.push_str(&format!("❌ {} (missing)\n", entry.path));
            }
        }
    }

    out.push_str("\n🗑️  Legacy files to remove:\n");
    for legacy in &report.legacy {
        match (legacy.state, legacy.replacement.as_deref()) {
            (LegacyState::Present, Some(replacement)) => {
                out.push_str(&format!(
                    "⚠️  {} (should be in {})\n",
                    legacy.path, replacement
                ));
            }
            (LegacyState::Present, None) => {
                out.push_str(&format!("⚠️  {} (should be removed)\n", legacy.path));
            }
            (LegacyState::Removed, _) => {
                out.push_str(&format!("✅ {} (removed)\n", legacy.path));
            }
        }
    }

    let counters = &report.counters;
    out.push_str("\n📊 Progress Summary:\n");
    out.push_str(&format!(
        "   Total expected files: {}\n",
        counters.total_files
    ));
    out.push_str(&format!(
        "   Files created: {} ({}%)\n",
        counters.existing_files,
        counters.existing_percent()
    ));
    out.push_str(&format!(
        "   Files compliant: {} ({}%)\n",
        counters.compliant_files,
        counters.compliant_percent()
    ));

    if !report.violations.is_empty() {
        out.push_str("\n🚨 Line count violations:\n");
        for v in &report.violations {
            out.push_str(&format!(
                "   {}: {} lines (max {})\n",
                v.file, v.actual, v.expected
            ));
        }
    }

    out.push_str("\n📍 Current Phase:\n");
    out.push_str(&format!("   {}", report.phase.label()));
    if report.phase == Phase::Complete {
        out.push_str(" 🎉");
    }
    out.push('\n');

    out
}

/// Machine-readable report with the same content as the text form.
pub fn render_json(report: &ProgressReport) -> serde_json::Result<String> {
    let counters = &report.counters;
    let payload = json!({
        "entries": report.entries,
        "legacy": report.legacy,
        "summary": {
            "total_files": counters.total_files,
            "existing_files": counters.existing_files,
            "compliant_files": counters.compliant_files,
            "existing_percent": counters.existing_percent(),
            "compliant_percent": counters.compliant_percent(),
        },
        "violations": report.violations,
        "phase": {
            "id": report.phase,
            "label": report.phase.label(),
        },
    });

    serde_json::to_string_pretty(&payload)
}
