use crate::RenderableReport;

/// Render the result as GitHub Actions workflow command annotations.
///
/// Format:
/// `::error title=envguard {key}::{message}` per error, `::warning::{message}` per advisory.
pub fn render_github_annotations(report: &RenderableReport) -> Vec<String> {
    let mut out = Vec::new();

    for e in &report.errors {
        out.push(format!(
            "::error title={}::{}",
            escape_property(&format!("envguard {}", e.key)),
            escape_data(&e.message)
        ));
    }

    if report.ok {
        for w in &report.warnings {
            out.push(format!("::warning title=envguard::{}", escape_data(w)));
        }
    }

    out
}

fn escape_data(s: &str) -> String {
    s.replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

fn escape_property(s: &str) -> String {
    escape_data(s).replace(':', "%3A").replace(',', "%2C")
}
