pub mod json;
pub mod text;

pub use json::{DEFAULT_OUTPUT, JsonConfig, convert_to_json, read_report, write_report};
pub use text::convert_to_summary;
