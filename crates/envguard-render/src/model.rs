use envguard_types::ValidationReport;
use envguard_types::ids::{PRESET_STANDARD, SOURCE_RUNTIME};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderableError {
    pub key: String,
    pub message: String,
}

/// Flattened view of a [`ValidationReport`]: one entry per message, key order preserved.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderableReport {
    pub ok: bool,
    pub preset: String,
    pub source: String,
    pub errors: Vec<RenderableError>,
    pub warnings: Vec<String>,
}

impl From<&ValidationReport> for RenderableReport {
    fn from(report: &ValidationReport) -> Self {
        let errors = report
            .errors
            .iter()
            .flat_map(|(key, messages)| {
                messages.iter().map(move |message| RenderableError {
                    key: key.clone(),
                    message: message.clone(),
                })
            })
            .collect();

        Self {
            ok: report.ok,
            preset: report
                .preset
                .clone()
                .unwrap_or_else(|| PRESET_STANDARD.to_string()),
            source: report
                .source
                .clone()
                .unwrap_or_else(|| SOURCE_RUNTIME.to_string()),
            errors,
            warnings: report.warnings.clone(),
        }
    }
}
