//! CLI Configuration
//!
//! Output format, output location and input discovery.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use anyhow::{bail, Context, Result};

/// How rewritten templates are written out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// The rewritten template document, as JSON
    #[default]
    Json,
    /// The rewritten tree printed as template text
    Template,
}

impl OutputFormat {
    /// File extension for per-input output files
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Template => "hbs",
        }
    }
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "json" => Ok(OutputFormat::Json),
            "template" | "hbs" => Ok(OutputFormat::Template),
            other => bail!("unknown output format `{}` (expected `json` or `template`)", other),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Template => write!(f, "template"),
        }
    }
}

/// Options for one CLI run
#[derive(Debug, Clone, Default)]
pub struct TransformOptions {
    pub format: OutputFormat,
    /// Directory for per-input output files; stdout when `None`.
    pub out_dir: Option<PathBuf>,
    /// Pretty-print JSON output.
    pub pretty: bool,
}

impl TransformOptions {
    /// Output path for `input` when writing to `out_dir`.
    pub fn output_path(&self, input: &Path) -> Option<PathBuf> {
        let out_dir = self.out_dir.as_ref()?;
        let stem = input.file_stem().unwrap_or(input.as_os_str());
        Some(out_dir.join(stem).with_extension(self.format.extension()))
    }
}

/// Expand input arguments: existing paths are kept as given, anything else
/// is treated as a glob pattern. Order is preserved; duplicates are dropped.
pub fn expand_inputs(patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut inputs: Vec<PathBuf> = Vec::new();

    for pattern in patterns {
        let path = Path::new(pattern);
        if path.exists() {
            if !inputs.iter().any(|p| p == path) {
                inputs.push(path.to_path_buf());
            }
            continue;
        }

        let mut matched = false;
        for entry in glob::glob(pattern).with_context(|| format!("invalid glob pattern `{}`", pattern))? {
            let entry = entry.with_context(|| format!("failed to read glob match for `{}`", pattern))?;
            matched = true;
            if !inputs.contains(&entry) {
                inputs.push(entry);
            }
        }

        if !matched {
            bail!("no input matches `{}`", pattern);
        }
    }

    Ok(inputs)
}
