//! Main readability analysis API.
//!
//! The pipeline is linear: fetch, extract text, compute metrics, build the
//! report. [`Analyzer`] runs it end to end; each stage is also available on
//! its own so callers can report progress between them.
//!
//! # Example
//!
//! ```rust
//! use readscore_core::Analyzer;
//!
//! let analyzer = Analyzer::new();
//! let report = analyzer
//!     .analyze_html("<html><body><p>The cat sat on the mat.</p></body></html>")
//!     .unwrap();
//! assert_eq!(report.metrics.word_count, 6);
//! assert!(report.recommendations.is_empty());
//! ```

#[cfg(feature = "fetch")]
use crate::fetch::{FetchConfig, fetch_url};
use crate::metrics::{MetricSet, MetricsConfig};
use crate::parse::Document;
use crate::report::{Report, Thresholds};
use crate::Result;

/// Configuration for the analysis pipeline.
///
/// # Example
///
/// ```rust
/// use readscore_core::AnalyzerConfig;
///
/// let config = AnalyzerConfig::builder()
///     .ms_per_char(20.0)
///     .max_grade_level(10.0)
///     .selector("main")
///     .build();
/// ```
#[derive(Debug, Clone, Default)]
pub struct AnalyzerConfig {
    /// Reading speed and other metric settings.
    pub metrics: MetricsConfig,

    /// Recommendation thresholds.
    pub thresholds: Thresholds,

    /// CSS selector restricting which part of the page is scored
    /// (default: the whole document).
    pub selector: Option<String>,
}

impl AnalyzerConfig {
    /// Creates a new builder for AnalyzerConfig.
    pub fn builder() -> AnalyzerConfigBuilder {
        AnalyzerConfigBuilder::new()
    }
}

/// Builder for AnalyzerConfig.
pub struct AnalyzerConfigBuilder {
    config: AnalyzerConfig,
}

impl AnalyzerConfigBuilder {
    /// Creates a new builder with default values.
    pub fn new() -> Self {
        Self { config: AnalyzerConfig::default() }
    }

    /// Sets the reading speed in milliseconds per character.
    pub fn ms_per_char(mut self, value: f64) -> Self {
        self.config.metrics.ms_per_char = value;
        self
    }

    /// Sets the reading ease below which shorter sentences are recommended.
    pub fn min_reading_ease(mut self, value: f64) -> Self {
        self.config.thresholds.min_reading_ease = value;
        self
    }

    /// Sets the grade level above which simpler vocabulary is recommended.
    pub fn max_grade_level(mut self, value: f64) -> Self {
        self.config.thresholds.max_grade_level = value;
        self
    }

    /// Sets the fog index above which splitting sentences is recommended.
    pub fn max_fog_index(mut self, value: f64) -> Self {
        self.config.thresholds.max_fog_index = value;
        self
    }

    /// Restricts scoring to elements matching a CSS selector.
    pub fn selector(mut self, value: impl Into<String>) -> Self {
        self.config.selector = Some(value.into());
        self
    }

    /// Builds the config.
    pub fn build(self) -> AnalyzerConfig {
        self.config
    }
}

impl Default for AnalyzerConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Main entry point for readability analysis.
pub struct Analyzer {
    config: AnalyzerConfig,
}

impl Analyzer {
    /// Creates a new Analyzer with default settings.
    pub fn new() -> Self {
        Self { config: AnalyzerConfig::default() }
    }

    /// Creates a new Analyzer with a custom configuration.
    pub fn with_config(config: AnalyzerConfig) -> Self {
        Self { config }
    }

    /// Extracts the plain text that will be scored from a parsed document.
    ///
    /// # Errors
    ///
    /// Fails only when a configured selector is invalid or matches nothing.
    pub fn extract_text(&self, doc: &Document) -> Result<String> {
        match &self.config.selector {
            Some(selector) => doc.select_text(selector),
            None => Ok(doc.text_content()),
        }
    }

    /// Scores plain text and builds the report.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ReadscoreError::NoContent`] when the text has no words.
    pub fn analyze_text(&self, text: &str) -> Result<Report> {
        let metrics = MetricSet::compute(text, &self.config.metrics)?;
        let report = Report::from_metrics(metrics, &self.config.thresholds);

        tracing::debug!(recommendations = report.recommendations.len(), "report built");

        Ok(report)
    }

    /// Parses HTML, extracts its text and scores it.
    pub fn analyze_html(&self, html: &str) -> Result<Report> {
        let doc = Document::parse(html);
        let text = self.extract_text(&doc)?;
        tracing::debug!(chars = text.len(), "extracted plain text");
        self.analyze_text(&text)
    }

    /// Fetch a page and analyze it using default fetch config.
    #[cfg(feature = "fetch")]
    pub async fn fetch_and_analyze(&self, url: &str) -> Result<Report> {
        let fetch_config = FetchConfig::default();
        self.fetch_and_analyze_with_config(url, &fetch_config).await
    }

    /// Fetch a page and analyze it with custom fetch config.
    #[cfg(feature = "fetch")]
    pub async fn fetch_and_analyze_with_config(&self, url: &str, fetch_config: &FetchConfig) -> Result<Report> {
        let html = fetch_url(url, fetch_config).await?;
        self.analyze_html(&html)
    }
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::new()
    }
}

/// Analyze an HTML string with default settings.
pub fn analyze_html(html: &str) -> Result<Report> {
    Analyzer::new().analyze_html(html)
}

/// Analyze plain text with default settings.
pub fn analyze_text(text: &str) -> Result<Report> {
    Analyzer::new().analyze_text(text)
}

/// Fetch a URL and analyze it with default settings.
#[cfg(feature = "fetch")]
pub async fn fetch_and_analyze(url: &str) -> Result<Report> {
    Analyzer::new().fetch_and_analyze(url).await
}
