pub mod structured;
pub mod text;

use std::fmt;
use std::io::Write;
use std::str::FromStr;

use crate::error::{DummyError, Result};

/// Renderers a result table can be written with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Csv,
    Json,
    Yaml,
}

impl OutputFormat {
    pub const ALL: [OutputFormat; 4] = [
        OutputFormat::Text,
        OutputFormat::Csv,
        OutputFormat::Json,
        OutputFormat::Yaml,
    ];

    pub fn name(self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Csv => "csv",
            OutputFormat::Json => "json",
            OutputFormat::Yaml => "yaml",
        }
    }

    /// Comma-separated list of format names, for help and error text.
    pub fn names() -> String {
        Self::ALL
            .iter()
            .map(|f| f.name())
            .collect::<Vec<_>>()
            .join(",")
    }

    /// Write `rows` under `headers` to `out`.
    pub fn render<W: Write>(self, headers: &[&str], rows: &[Vec<String>], out: W) -> Result<()> {
        match self {
            OutputFormat::Text => text::render(headers, rows, out),
            OutputFormat::Csv => structured::render_csv(headers, rows, out),
            OutputFormat::Json => structured::render_json(headers, rows, out),
            OutputFormat::Yaml => structured::render_yaml(headers, rows, out),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for OutputFormat {
    type Err = DummyError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "text" | "table" => Ok(OutputFormat::Text),
            "csv" => Ok(OutputFormat::Csv),
            "json" => Ok(OutputFormat::Json),
            "yaml" | "yml" => Ok(OutputFormat::Yaml),
            _ => Err(DummyError::UnknownFormat(s.to_string(), Self::names())),
        }
    }
}
