use std::io;
use std::path::PathBuf;
use std::str::FromStr;

use anyhow::Context;
use clap::Parser;
use owo_colors::OwoColorize;
use readscore_core::{
    Analyzer, AnalyzerConfig, DEFAULT_MS_PER_CHAR, DEFAULT_OUTPUT, DEFAULT_URL, Document, FetchConfig, JsonConfig,
    MetricsConfig, TextStats, Thresholds, convert_to_json, convert_to_summary, fetch_file, fetch_stdin, fetch_url,
    write_report,
};
use tracing_subscriber::EnvFilter;

mod echo;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// What to print on stdout once the report is written
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutputFormat {
    Summary,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "summary" | "text" => Ok(Self::Summary),
            "json" => Ok(Self::Json),
            _ => Err(format!("Invalid format: {}. Valid options: summary, json", s)),
        }
    }
}

/// Score the readability of a web page and write a JSON report
#[derive(Parser, Debug)]
#[command(name = "readscore")]
#[command(version)]
#[command(about = "Score the readability of a web page", long_about = None)]
struct Args {
    /// URL to fetch, local HTML file, or "-" for stdin
    #[arg(value_name = "INPUT", env = "READSCORE_URL", default_value = DEFAULT_URL)]
    input: String,

    /// Report file, overwritten if it exists
    #[arg(short, long, value_name = "FILE", env = "READSCORE_OUTPUT", default_value = DEFAULT_OUTPUT)]
    output: PathBuf,

    /// What to print on stdout (summary, json)
    #[arg(short, long, default_value = "summary", value_name = "FORMAT")]
    format: OutputFormat,

    /// Only score text inside elements matching this CSS selector
    #[arg(long, value_name = "CSS")]
    selector: Option<String>,

    /// Reading speed in milliseconds per character
    #[arg(long, default_value_t = DEFAULT_MS_PER_CHAR, value_name = "MS")]
    ms_per_char: f64,

    /// Recommend shorter sentences below this reading ease
    #[arg(long, default_value_t = Thresholds::default().min_reading_ease, value_name = "SCORE")]
    min_reading_ease: f64,

    /// Recommend simpler vocabulary above this grade level
    #[arg(long, default_value_t = Thresholds::default().max_grade_level, value_name = "GRADE")]
    max_grade_level: f64,

    /// Recommend splitting sentences above this fog index
    #[arg(long, default_value_t = Thresholds::default().max_fog_index, value_name = "INDEX")]
    max_fog_index: f64,

    /// HTTP timeout in seconds
    #[arg(long, default_value = "30", value_name = "SECS")]
    timeout: u64,

    /// Custom User-Agent for HTTP requests
    #[arg(long, value_name = "UA")]
    user_agent: Option<String>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    fn analyzer_config(&self) -> AnalyzerConfig {
        AnalyzerConfig {
            metrics: MetricsConfig { ms_per_char: self.ms_per_char },
            thresholds: Thresholds {
                min_reading_ease: self.min_reading_ease,
                max_grade_level: self.max_grade_level,
                max_fog_index: self.max_fog_index,
            },
            selector: self.selector.clone(),
        }
    }

    fn fetch_config(&self) -> FetchConfig {
        let defaults = FetchConfig::default();
        FetchConfig { timeout: self.timeout, user_agent: self.user_agent.clone().unwrap_or(defaults.user_agent) }
    }
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "readscore=debug,readscore_core=debug" } else { "warn" };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)))
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

async fn read_input(args: &Args) -> anyhow::Result<String> {
    if args.input == "-" {
        if args.verbose {
            echo::print_step(1, 4, "Reading from stdin");
        }
        fetch_stdin().context("Failed to read from stdin")
    } else if args.input.starts_with("http://") || args.input.starts_with("https://") {
        if args.verbose {
            echo::print_step(
                1,
                4,
                &format!("Fetching from {}", args.input.bright_white().underline()),
            );
        }
        fetch_url(&args.input, &args.fetch_config())
            .await
            .with_context(|| format!("Failed to fetch {}", args.input))
    } else {
        if args.verbose {
            echo::print_step(1, 4, &format!("Reading from file {}", args.input.bright_white()));
        }
        fetch_file(&args.input).with_context(|| format!("Failed to read file: {}", args.input))
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);
    tracing::debug!(input = %args.input, output = %args.output.display(), "starting analysis");

    if args.verbose {
        echo::print_banner();
        echo::print_info("Debug logging enabled");
        eprintln!();
    }

    let html = read_input(&args).await?;

    if args.verbose {
        echo::print_detail("Size", &echo::format_size(html.len()));
        eprintln!();
        echo::print_step(2, 4, "Extracting text");
    }

    let analyzer = Analyzer::with_config(args.analyzer_config());
    let doc = Document::parse(&html);
    let text = analyzer.extract_text(&doc).context("Failed to extract text")?;

    if args.verbose {
        if let Some(title) = doc.title() {
            echo::print_detail("Title", title.trim());
        }
        let stats = TextStats::from_text(&text);
        echo::print_detail("Words", &stats.words.to_string());
        echo::print_detail("Sentences", &stats.sentences.to_string());
        echo::print_detail("Syllables", &stats.syllables.to_string());
        echo::print_detail("Complex words", &stats.complex_words.to_string());
        eprintln!();
        echo::print_step(3, 4, "Computing readability metrics");
    }

    let report = analyzer.analyze_text(&text).context("Failed to compute readability metrics")?;

    if args.verbose {
        eprintln!();
        echo::print_step(4, 4, "Writing report");
    }

    write_report(&report, &args.output)
        .with_context(|| format!("Failed to write report to {}", args.output.display()))?;

    if args.verbose {
        echo::print_success(&format!("Report written to {}", args.output.display().bright_white()));
        for recommendation in &report.recommendations {
            echo::print_warning(recommendation);
        }
        eprintln!();
    }

    match args.format {
        OutputFormat::Summary => print!("{}", convert_to_summary(&report)),
        OutputFormat::Json => {
            let json = convert_to_json(&report, &JsonConfig::default()).context("Failed to serialize report")?;
            println!("{}", json);
        }
    }

    Ok(())
}
