pub mod analyzer;
pub mod error;
pub mod fetch;
pub mod formatters;
pub mod metrics;
pub mod parse;
pub mod report;
pub mod text;

pub use analyzer::{Analyzer, AnalyzerConfig, AnalyzerConfigBuilder, analyze_html, analyze_text};
#[cfg(feature = "fetch")]
pub use analyzer::fetch_and_analyze;
pub use error::{ReadscoreError, Result};
pub use fetch::{DEFAULT_URL, FetchConfig, content_type_charset, decode_html, fetch_file, fetch_stdin, parse_url};
#[cfg(feature = "fetch")]
pub use fetch::fetch_url;
pub use formatters::{DEFAULT_OUTPUT, JsonConfig, convert_to_json, convert_to_summary, read_report, write_report};
pub use metrics::{DEFAULT_MS_PER_CHAR, MetricSet, MetricsConfig};
pub use parse::Document;
pub use report::{Report, Thresholds};
pub use text::TextStats;
