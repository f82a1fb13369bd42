//! Render use cases: text, GitHub annotations, and JSON from in-memory reports.

use anyhow::Context;
use camino::Utf8Path;
use envguard_render::RenderableReport;
use envguard_types::ValidationReport;

pub fn render_text(report: &ValidationReport) -> String {
    envguard_render::render_text(&RenderableReport::from(report))
}

pub fn render_annotations(report: &ValidationReport) -> Vec<String> {
    envguard_render::render_github_annotations(&RenderableReport::from(report))
}

pub fn serialize_report(report: &ValidationReport) -> anyhow::Result<Vec<u8>> {
    serde_json::to_vec_pretty(report).context("serialize report")
}

/// Write the JSON report to `path`, creating parent directories.
pub fn write_report(path: &Utf8Path, report: &ValidationReport) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_str().is_empty()) {
        std::fs::create_dir_all(parent).with_context(|| format!("create directory: {}", parent))?;
    }
    let mut data = serialize_report(report)?;
    data.push(b'\n');
    std::fs::write(path, data).with_context(|| format!("write report: {}", path))?;
    Ok(())
}
