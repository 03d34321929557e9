//! Rendering of driver outcomes for stdout.

use crate::OutputFormat;
use treesnap_core::errors::{ExError, ExErrorKind};
use treesnap_core::render_human_summary;
use treesnap_engine::{RunConfig, RunOutcome};

/// Text for one outcome: a confirmation line on creation, otherwise the
/// comparison in the requested format.
///
/// # Errors
///
/// Returns a `Serialization` error if JSON encoding fails.
pub fn render(
    config: &RunConfig,
    outcome: &RunOutcome,
    format: OutputFormat,
) -> Result<String, ExError> {
    match outcome {
        RunOutcome::Created(_) => Ok(format!(
            "Report file '{}' created successfully.\n",
            config.report_file_name
        )),
        RunOutcome::Compared(result) => match format {
            OutputFormat::Text => Ok(render_human_summary(result)),
            OutputFormat::Json => serde_json::to_string_pretty(result)
                .map(|mut json| {
                    json.push('\n');
                    json
                })
                .map_err(|e| {
                    ExError::new(ExErrorKind::Serialization)
                        .with_op("render_json")
                        .with_message(e.to_string())
                }),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use treesnap_core::reconcile::{FileChange, ReconciliationResult};
    use treesnap_engine::SnapshotOutcome;

    fn config() -> RunConfig {
        RunConfig::new("/data")
    }

    #[test]
    fn test_created_message() {
        let outcome = RunOutcome::Created(SnapshotOutcome {
            report_path: config().report_path(),
            file_count: 3,
        });
        let text = render(&config(), &outcome, OutputFormat::Text).unwrap();
        assert_eq!(text, "Report file 'CompareVersions.txt' created successfully.\n");
    }

    #[test]
    fn test_json_output_has_counts_and_entries() {
        let mut result = ReconciliationResult::default();
        result.record_match();
        result.record_change(FileChange::NewInFolder {
            path: "n.txt".to_string(),
            size: 1,
        });

        let text = render(&config(), &RunOutcome::Compared(result), OutputFormat::Json).unwrap();
        let json: serde_json::Value = serde_json::from_str(&text).unwrap();

        assert_eq!(json["counts"]["matched"], 1);
        assert_eq!(json["counts"]["new_in_folder"], 1);
        assert_eq!(json["entries"][0]["status"], "NewInFolder");
        assert_eq!(json["entries"][0]["path"], "n.txt");
    }
}
