//! Content fetching from URLs, files, and stdin.
//!
//! The page is fetched once; there are no retries. Any non-success status is
//! surfaced as [`ReadscoreError::HttpStatus`] rather than scored as if it were
//! the page.
//!
//! Every source is read as raw bytes and decoded by [`decode_html`], so a
//! page without a `Content-Type` charset still honours its `<meta charset>`.

use std::fs;
use std::path::PathBuf;
use std::sync::LazyLock;
#[cfg(feature = "fetch")]
use std::time::Duration;

use encoding_rs::{Encoding, UTF_8};
use regex::bytes::Regex;
#[cfg(feature = "fetch")]
use reqwest::{Client, header::CONTENT_TYPE};
use url::Url;

use crate::{ReadscoreError, Result};

/// Page analyzed when no input is given on the command line.
pub const DEFAULT_URL: &str = "http://localhost:3000/ali-portfolio";

/// Browsers look for a `<meta charset>` within this many leading bytes.
const META_PRESCAN_BYTES: usize = 1024;

static META_CHARSET: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i-u)<meta[^>]*?charset\s*=\s*["']?\s*([a-z0-9_.:-]+)"#).expect("valid meta charset regex")
});

/// HTTP client configuration for fetching web pages.
#[derive(Debug, Clone)]
pub struct FetchConfig {
    /// Request timeout in seconds.
    pub timeout: u64,
    /// Custom User-Agent string.
    pub user_agent: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self { timeout: 30, user_agent: format!("Mozilla/5.0 (compatible; Readscore/{})", env!("CARGO_PKG_VERSION")) }
    }
}

/// Validates that `url` is an absolute http(s) URL.
pub fn parse_url(url: &str) -> Result<Url> {
    let parsed = Url::parse(url).map_err(|e| ReadscoreError::InvalidUrl(format!("{url}: {e}")))?;

    match parsed.scheme() {
        "http" | "https" => Ok(parsed),
        other => Err(ReadscoreError::InvalidUrl(format!(
            "unsupported scheme '{other}' (expected http or https)"
        ))),
    }
}

/// Fetches HTML content from a URL.
///
/// Performs a single HTTP GET, follows redirects, and returns the body as
/// text. Non-2xx responses are errors.
#[cfg(feature = "fetch")]
pub async fn fetch_url(url: &str, config: &FetchConfig) -> Result<String> {
    let parsed_url = parse_url(url)?;

    let client = Client::builder()
        .timeout(Duration::from_secs(config.timeout))
        .build()
        .map_err(ReadscoreError::HttpError)?;

    tracing::debug!(url = %parsed_url, timeout = config.timeout, "fetching page");

    let response = client
        .get(parsed_url)
        .header("User-Agent", &config.user_agent)
        .header(
            "Accept",
            "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8",
        )
        .send()
        .await
        .map_err(|e| {
            if e.is_timeout() {
                ReadscoreError::Timeout { timeout: config.timeout }
            } else {
                ReadscoreError::HttpError(e)
            }
        })?;

    let status = response.status();
    if !status.is_success() {
        return Err(ReadscoreError::HttpStatus { status: status.as_u16(), url: url.to_string() });
    }

    let header_charset = response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .and_then(content_type_charset)
        .map(str::to_owned);
    let bytes = response.bytes().await?;
    let content = decode_html(&bytes, header_charset.as_deref());
    tracing::debug!(bytes = bytes.len(), "page fetched");

    Ok(content)
}

/// Reads HTML content from a local file.
pub fn fetch_file(path: &str) -> Result<String> {
    let path_buf = PathBuf::from(path);

    if !path_buf.exists() {
        Err(ReadscoreError::FileNotFound(path_buf))
    } else {
        let bytes = fs::read(&path_buf)?;
        Ok(decode_html(&bytes, None))
    }
}

/// Reads HTML content from standard input until EOF.
pub fn fetch_stdin() -> Result<String> {
    use std::io::{self, Read};

    let mut buffer = Vec::new();
    io::stdin().read_to_end(&mut buffer)?;

    Ok(decode_html(&buffer, None))
}

/// Decodes an HTML byte stream to text.
///
/// The encoding is chosen by byte-order mark, then the transport charset (if
/// any), then a `<meta charset>` or `http-equiv` declaration near the top of
/// the document, and finally UTF-8. Malformed sequences become U+FFFD.
pub fn decode_html(bytes: &[u8], header_charset: Option<&str>) -> String {
    let encoding = header_charset
        .and_then(|label| Encoding::for_label(label.trim().as_bytes()))
        .or_else(|| meta_charset(bytes))
        .unwrap_or(UTF_8);

    let (text, used, had_errors) = encoding.decode(bytes);
    if had_errors {
        tracing::warn!(encoding = used.name(), "page contained malformed byte sequences");
    }
    tracing::debug!(encoding = used.name(), "decoded page");

    text.into_owned()
}

/// Extracts the `charset` parameter of a `Content-Type` header value.
pub fn content_type_charset(content_type: &str) -> Option<&str> {
    content_type.split(';').skip(1).find_map(|param| {
        let (name, value) = param.split_once('=')?;
        name.trim()
            .eq_ignore_ascii_case("charset")
            .then(|| value.trim().trim_matches(|c| c == '"' || c == '\''))
    })
}

fn meta_charset(bytes: &[u8]) -> Option<&'static Encoding> {
    let head = &bytes[..bytes.len().min(META_PRESCAN_BYTES)];
    let label = META_CHARSET.captures(head)?.get(1)?;
    Encoding::for_label(label.as_bytes())
}
