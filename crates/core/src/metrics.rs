//! Readability formulas.
//!
//! Each metric is a pure function of [`TextStats`]; [`MetricSet::compute`]
//! runs all of them over a piece of plain text.
//!
//! # Example
//!
//! ```rust
//! use readscore_core::{MetricSet, MetricsConfig};
//!
//! let metrics = MetricSet::compute("The cat sat on the mat.", &MetricsConfig::default()).unwrap();
//! assert_eq!(metrics.word_count, 6);
//! assert!(metrics.flesch_reading_ease > 100.0);
//! ```

use serde::{Deserialize, Serialize};

use crate::text::TextStats;
use crate::{ReadscoreError, Result};

/// Reading speed used for reading time estimates, in milliseconds per character.
pub const DEFAULT_MS_PER_CHAR: f64 = 14.69;

const MS_PER_SECOND: f64 = 1_000.0;

/// Configuration for metric computation.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricsConfig {
    /// Milliseconds a reader spends per non-whitespace character.
    pub ms_per_char: f64,
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self { ms_per_char: DEFAULT_MS_PER_CHAR }
    }
}

/// The readability scores of a piece of text.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct MetricSet {
    /// Flesch Reading Ease, higher is easier.
    pub flesch_reading_ease: f64,
    /// Flesch-Kincaid US grade level.
    pub flesch_kincaid_grade: f64,
    /// Gunning Fog index.
    pub gunning_fog_index: f64,
    /// Estimated reading time: characters × ms-per-char ÷ 1000, so 1000
    /// characters at the default speed report `14.69`.
    pub estimated_reading_time_minutes: f64,
    /// Whitespace-delimited tokens in the text.
    pub word_count: usize,
}

impl MetricSet {
    /// Computes every metric for `text`.
    ///
    /// # Errors
    ///
    /// Returns [`ReadscoreError::NoContent`] when the text has no words.
    pub fn compute(text: &str, config: &MetricsConfig) -> Result<Self> {
        let stats = TextStats::from_text(text);
        Self::from_stats(&stats, config)
    }

    /// Computes every metric from precomputed counts.
    pub fn from_stats(stats: &TextStats, config: &MetricsConfig) -> Result<Self> {
        if stats.words == 0 {
            return Err(ReadscoreError::NoContent);
        }

        let metrics = Self {
            flesch_reading_ease: round2(flesch_reading_ease(stats)),
            flesch_kincaid_grade: round2(flesch_kincaid_grade(stats)),
            gunning_fog_index: round2(gunning_fog(stats)),
            estimated_reading_time_minutes: round2(reading_time(stats.characters, config.ms_per_char)),
            word_count: stats.tokens,
        };

        tracing::debug!(?stats, ?metrics, "computed readability metrics");

        Ok(metrics)
    }
}

/// Flesch Reading Ease: `206.835 - 1.015 * ASL - 84.6 * ASW`.
pub fn flesch_reading_ease(stats: &TextStats) -> f64 {
    206.835 - 1.015 * stats.words_per_sentence() - 84.6 * stats.syllables_per_word()
}

/// Flesch-Kincaid grade: `0.39 * ASL + 11.8 * ASW - 15.59`.
pub fn flesch_kincaid_grade(stats: &TextStats) -> f64 {
    0.39 * stats.words_per_sentence() + 11.8 * stats.syllables_per_word() - 15.59
}

/// Gunning Fog: `0.4 * (ASL + percentage of complex words)`.
pub fn gunning_fog(stats: &TextStats) -> f64 {
    0.4 * (stats.words_per_sentence() + stats.complex_word_percentage())
}

/// Reading time for `characters` non-whitespace characters: the total
/// milliseconds divided by 1000.
pub fn reading_time(characters: usize, ms_per_char: f64) -> f64 {
    characters as f64 * ms_per_char / MS_PER_SECOND
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    fn stats(words: usize, sentences: usize, syllables: usize, complex_words: usize) -> TextStats {
        TextStats { tokens: words, words, sentences, syllables, complex_words, characters: 0 }
    }

    #[test]
    fn test_flesch_reading_ease_formula() {
        // 10 words, 1 sentence, 15 syllables
        let s = stats(10, 1, 15, 0);
        let expected = 206.835 - 1.015 * 10.0 - 84.6 * 1.5;
        assert!((flesch_reading_ease(&s) - expected).abs() < EPSILON);
    }

    #[test]
    fn test_flesch_kincaid_grade_formula() {
        let s = stats(20, 2, 30, 0);
        let expected = 0.39 * 10.0 + 11.8 * 1.5 - 15.59;
        assert!((flesch_kincaid_grade(&s) - expected).abs() < EPSILON);
    }

    #[test]
    fn test_gunning_fog_formula() {
        let s = stats(20, 2, 30, 4);
        let expected = 0.4 * (10.0 + 20.0);
        assert!((gunning_fog(&s) - expected).abs() < EPSILON);
    }

    #[test]
    fn test_reading_time_is_linear_in_characters() {
        let one = reading_time(1_000, DEFAULT_MS_PER_CHAR);
        let ten = reading_time(10_000, DEFAULT_MS_PER_CHAR);

        assert!((one - 14.69).abs() < EPSILON);
        assert!((ten - 10.0 * one).abs() < EPSILON);
        assert_eq!(reading_time(0, DEFAULT_MS_PER_CHAR), 0.0);
    }

    #[test]
    fn test_reading_time_of_thousand_characters() {
        // 100 ten-letter words: 1000 non-whitespace characters
        let metrics = MetricSet::compute(&"abcdefghij ".repeat(100), &MetricsConfig::default()).unwrap();
        assert_eq!(metrics.estimated_reading_time_minutes, 14.69);
    }

    #[test]
    fn test_reading_time_of_short_text_is_not_zero() {
        // 13 non-whitespace characters
        let metrics = MetricSet::compute("Easy text here.", &MetricsConfig::default()).unwrap();
        assert_eq!(metrics.estimated_reading_time_minutes, round2(13.0 * 14.69 / 1000.0));
        assert!(metrics.estimated_reading_time_minutes > 0.0);
    }

    #[test]
    fn test_reading_time_uses_configured_speed() {
        let config = MetricsConfig { ms_per_char: 60.0 };
        let metrics = MetricSet::compute(&"word ".repeat(250), &config).unwrap();

        // 1000 characters at 60ms each
        assert_eq!(metrics.estimated_reading_time_minutes, 60.0);
    }

    #[test]
    fn test_word_count_counts_tokens() {
        let metrics = MetricSet::compute("Hello world foo", &MetricsConfig::default()).unwrap();
        assert_eq!(metrics.word_count, 3);
    }

    #[test]
    fn test_compute_simple_text() {
        // 3 words, 1 sentence, 4 syllables (Ea-sy text here), no complex words
        let metrics = MetricSet::compute("Easy text here.", &MetricsConfig::default()).unwrap();

        let asl = 3.0;
        let asw = 4.0 / 3.0;
        assert_eq!(metrics.flesch_reading_ease, round2(206.835 - 1.015 * asl - 84.6 * asw));
        assert_eq!(metrics.flesch_kincaid_grade, round2(0.39 * asl + 11.8 * asw - 15.59));
        assert_eq!(metrics.gunning_fog_index, round2(0.4 * asl));
        assert_eq!(metrics.word_count, 3);
    }

    #[test]
    fn test_compute_is_deterministic() {
        let text = "Readability formulas approximate comprehension difficulty. Short words help.";
        let config = MetricsConfig::default();

        assert_eq!(MetricSet::compute(text, &config).unwrap(), MetricSet::compute(text, &config).unwrap());
    }

    #[test]
    fn test_compute_empty_text() {
        let result = MetricSet::compute("  \n\t ", &MetricsConfig::default());
        assert!(matches!(result, Err(ReadscoreError::NoContent)));
    }

    #[test]
    fn test_compute_punctuation_only() {
        let result = MetricSet::compute("- | © ...", &MetricsConfig::default());
        assert!(matches!(result, Err(ReadscoreError::NoContent)));
    }

    #[test]
    fn test_round2() {
        assert_eq!(round2(1.23456), 1.23);
        assert_eq!(round2(-1.235001), -1.24);
    }
}
