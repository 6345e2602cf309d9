//! Readability report with threshold-based recommendations.
//!
//! A [`Report`] is the only artifact the tool persists. Its fields are the
//! [`MetricSet`] flattened, followed by the recommendations triggered by
//! [`Thresholds`].

use serde::{Deserialize, Serialize};

use crate::metrics::MetricSet;

pub const DIFFICULT_TO_READ: &str = "Content is fairly difficult to read. Consider shorter sentences.";
pub const ABOVE_GRADE_LEVEL: &str = "Reading level is above 12th grade. Simplify vocabulary.";
pub const HIGH_COMPLEXITY: &str = "Text complexity is high. Break down complex sentences.";

/// Limits past which a recommendation is emitted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Thresholds {
    /// Recommend shorter sentences below this reading ease (default: 60).
    pub min_reading_ease: f64,
    /// Recommend simpler vocabulary above this grade level (default: 12).
    pub max_grade_level: f64,
    /// Recommend splitting sentences above this fog index (default: 12).
    pub max_fog_index: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self { min_reading_ease: 60.0, max_grade_level: 12.0, max_fog_index: 12.0 }
    }
}

/// The persisted readability report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    #[serde(flatten)]
    pub metrics: MetricSet,
    /// Recommendations in check order: reading ease, grade level, fog index.
    pub recommendations: Vec<String>,
}

impl Report {
    /// Builds a report, evaluating every threshold independently.
    pub fn from_metrics(metrics: MetricSet, thresholds: &Thresholds) -> Self {
        let checks = [
            (metrics.flesch_reading_ease < thresholds.min_reading_ease, DIFFICULT_TO_READ),
            (metrics.flesch_kincaid_grade > thresholds.max_grade_level, ABOVE_GRADE_LEVEL),
            (metrics.gunning_fog_index > thresholds.max_fog_index, HIGH_COMPLEXITY),
        ];

        let recommendations = checks
            .into_iter()
            .filter(|(triggered, _)| *triggered)
            .map(|(_, message)| message.to_string())
            .collect();

        Self { metrics, recommendations }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metrics(ease: f64, grade: f64, fog: f64) -> MetricSet {
        MetricSet {
            flesch_reading_ease: ease,
            flesch_kincaid_grade: grade,
            gunning_fog_index: fog,
            estimated_reading_time_minutes: 1.5,
            word_count: 300,
        }
    }

    #[test]
    fn test_only_reading_ease_recommendation() {
        let report = Report::from_metrics(metrics(45.0, 8.0, 10.0), &Thresholds::default());
        assert_eq!(report.recommendations, vec![DIFFICULT_TO_READ.to_string()]);
    }

    #[test]
    fn test_no_recommendations_for_easy_text() {
        let report = Report::from_metrics(metrics(75.0, 6.0, 8.0), &Thresholds::default());
        assert!(report.recommendations.is_empty());
    }

    #[test]
    fn test_all_recommendations_in_check_order() {
        let report = Report::from_metrics(metrics(20.0, 16.0, 18.0), &Thresholds::default());
        assert_eq!(
            report.recommendations,
            vec![
                DIFFICULT_TO_READ.to_string(),
                ABOVE_GRADE_LEVEL.to_string(),
                HIGH_COMPLEXITY.to_string()
            ]
        );
    }

    #[test]
    fn test_thresholds_are_strict() {
        let report = Report::from_metrics(metrics(60.0, 12.0, 12.0), &Thresholds::default());
        assert!(report.recommendations.is_empty());
    }

    #[test]
    fn test_fog_without_grade() {
        let report = Report::from_metrics(metrics(65.0, 11.9, 12.1), &Thresholds::default());
        assert_eq!(report.recommendations, vec![HIGH_COMPLEXITY.to_string()]);
    }

    #[test]
    fn test_custom_thresholds() {
        let thresholds = Thresholds { min_reading_ease: 30.0, max_grade_level: 20.0, max_fog_index: 5.0 };
        let report = Report::from_metrics(metrics(45.0, 8.0, 10.0), &thresholds);
        assert_eq!(report.recommendations, vec![HIGH_COMPLEXITY.to_string()]);
    }

    #[test]
    fn test_serialized_keys() {
        let report = Report::from_metrics(metrics(45.0, 8.0, 10.0), &Thresholds::default());
        let value = serde_json::to_value(&report).unwrap();
        let object = value.as_object().unwrap();

        let mut keys: Vec<&str> = object.keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(
            keys,
            vec![
                "estimated_reading_time_minutes",
                "flesch_kincaid_grade",
                "flesch_reading_ease",
                "gunning_fog_index",
                "recommendations",
                "word_count"
            ]
        );
        assert!(object["word_count"].is_u64());
        assert!(object["recommendations"].is_array());
    }
}
