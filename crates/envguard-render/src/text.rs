use crate::RenderableReport;

/// Human-readable result, one line per message, newline-terminated.
pub fn render_text(report: &RenderableReport) -> String {
    let mut out = String::new();

    if !report.ok {
        out.push_str("Invalid environment configuration:\n");
        for e in &report.errors {
            out.push_str(&format!("- {}: {}\n", e.key, e.message));
        }
        return out;
    }

    out.push_str(&format!(
        "Environment configuration OK (preset: {}, source: {})\n",
        report.preset, report.source
    ));
    for w in &report.warnings {
        out.push_str(&format!("- {}\n", w));
    }

    out
}
