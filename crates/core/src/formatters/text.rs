use crate::report::Report;

/// Convert a report to the human-readable summary.
///
/// Floats use `Debug` formatting so whole numbers keep their fractional part
/// (`60.0`, not `60`).
///
/// ```text
/// 📖 Readability Analysis Complete
/// Flesch Reading Ease: 64.2/100
/// Grade Level: 8.1
/// Reading Time: 1.32 minutes
/// ```
pub fn convert_to_summary(report: &Report) -> String {
    let metrics = &report.metrics;
    format!(
        "📖 Readability Analysis Complete\nFlesch Reading Ease: {:?}/100\nGrade Level: {:?}\nReading Time: {:?} minutes\n",
        metrics.flesch_reading_ease, metrics.flesch_kincaid_grade, metrics.estimated_reading_time_minutes
    )
}
