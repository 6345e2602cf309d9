use std::fs;
use std::path::Path;

use crate::Result;
use crate::report::Report;

/// Report written when no output path is given.
pub const DEFAULT_OUTPUT: &str = "readability-report.json";

/// Configuration for JSON output
#[derive(Debug, Clone)]
pub struct JsonConfig {
    /// Pretty print with two-space indentation
    pub pretty: bool,
}

impl Default for JsonConfig {
    fn default() -> Self {
        Self { pretty: true }
    }
}

/// Convert a report to JSON
pub fn convert_to_json(report: &Report, config: &JsonConfig) -> Result<String> {
    if config.pretty { Ok(serde_json::to_string_pretty(report)?) } else { Ok(serde_json::to_string(report)?) }
}

/// Serialize a report as indented JSON to `path`, replacing any existing file.
///
/// The report is serialized before the file is touched, so a serialization
/// failure never truncates a previous report.
pub fn write_report(report: &Report, path: &Path) -> Result<()> {
    let json = convert_to_json(report, &JsonConfig::default())?;
    fs::write(path, json)?;
    tracing::debug!(path = %path.display(), "report written");
    Ok(())
}

/// Read a report back from `path`.
pub fn read_report(path: &Path) -> Result<Report> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::MetricSet;
    use crate::report::Thresholds;

    fn sample_report() -> Report {
        let metrics = MetricSet {
            flesch_reading_ease: 45.12,
            flesch_kincaid_grade: 13.4,
            gunning_fog_index: 10.05,
            estimated_reading_time_minutes: 2.37,
            word_count: 812,
        };
        Report::from_metrics(metrics, &Thresholds::default())
    }

    #[test]
    fn test_pretty_json_uses_two_space_indent() {
        let json = convert_to_json(&sample_report(), &JsonConfig::default()).unwrap();

        assert!(json.starts_with("{\n  \"flesch_reading_ease\": 45.12,"));
        assert!(json.contains("\n  \"word_count\": 812,"));
        assert!(json.contains("\n  \"recommendations\": [\n    \"Content is fairly difficult"));
    }

    #[test]
    fn test_compact_json() {
        let json = convert_to_json(&sample_report(), &JsonConfig { pretty: false }).unwrap();

        assert!(!json.contains('\n'));
        assert!(json.contains("\"gunning_fog_index\":10.05"));
    }

    #[test]
    fn test_empty_recommendations_serialize_as_empty_array() {
        let metrics = MetricSet { flesch_reading_ease: 80.0, word_count: 10, ..Default::default() };
        let report = Report::from_metrics(metrics, &Thresholds::default());
        let json = convert_to_json(&report, &JsonConfig { pretty: false }).unwrap();

        assert!(json.ends_with("\"recommendations\":[]}"));
    }

    #[test]
    fn test_write_report_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DEFAULT_OUTPUT);
        let report = sample_report();

        write_report(&report, &path).unwrap();

        assert_eq!(read_report(&path).unwrap(), report);
    }

    #[test]
    fn test_write_report_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DEFAULT_OUTPUT);
        std::fs::write(&path, "stale contents that are much longer than nothing at all").unwrap();

        write_report(&sample_report(), &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(!content.contains("stale"));
        assert!(content.starts_with('{'));
    }

    #[test]
    fn test_write_report_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join(DEFAULT_OUTPUT);

        let result = write_report(&sample_report(), &path);
        assert!(matches!(result, Err(crate::ReadscoreError::WriteError(_))));
    }
}
