//! Perform Transform
//!
//! Reads template documents from disk, rewrites them in parallel and
//! emits the results in input order.

use std::collections::HashMap;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use rayon::prelude::*;
use tracing::{debug, info};

use crate::config::{OutputFormat, TransformOptions};
use angle_bracket_polyfill::syntax::print;
use angle_bracket_polyfill::{transform_document, TemplateDocument};

/// One successfully rewritten input
#[derive(Debug, Clone)]
pub struct TransformedFile {
    pub input: PathBuf,
    pub output: String,
}

/// Result of a whole run
#[derive(Debug, Default)]
pub struct TransformResult {
    pub files: Vec<TransformedFile>,
    pub diagnostics: Vec<String>,
}

impl TransformResult {
    pub fn has_errors(&self) -> bool {
        !self.diagnostics.is_empty()
    }
}

/// Render a rewritten document in the requested format.
pub fn render(document: &TemplateDocument, options: &TransformOptions) -> Result<String> {
    match options.format {
        OutputFormat::Template => Ok(print(&document.ast)),
        OutputFormat::Json if options.pretty => {
            serde_json::to_string_pretty(document).context("failed to serialize template document")
        }
        OutputFormat::Json => {
            serde_json::to_string(document).context("failed to serialize template document")
        }
    }
}

/// Rewrite a single document held in memory.
pub fn transform_source(json: &str, options: &TransformOptions) -> Result<String> {
    let mut document: TemplateDocument =
        serde_json::from_str(json).context("invalid template document")?;
    transform_document(&mut document);
    render(&document, options)
}

/// Read and rewrite one input file.
pub fn transform_file(path: &Path, options: &TransformOptions) -> Result<String> {
    debug!(input = %path.display(), "transforming");
    let json = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    transform_source(&json, options).with_context(|| format!("failed to transform {}", path.display()))
}

/// Rewrite every input in parallel. Successful outputs and diagnostics both
/// keep input order. With an output directory, an input whose output file
/// is already claimed by an earlier input is reported instead of written.
pub fn perform_transform(inputs: &[PathBuf], options: &TransformOptions) -> TransformResult {
    let outcomes: Vec<(PathBuf, Result<String>)> = inputs
        .par_iter()
        .map(|input| (input.clone(), transform_file(input, options)))
        .collect();

    let mut result = TransformResult::default();
    let mut claimed: HashMap<PathBuf, PathBuf> = HashMap::new();
    for (input, outcome) in outcomes {
        match outcome {
            Ok(output) => {
                if let Some(path) = options.output_path(&input) {
                    if let Some(first) = claimed.get(&path) {
                        result.diagnostics.push(format!(
                            "{} and {} both write {}",
                            first.display(),
                            input.display(),
                            path.display()
                        ));
                        continue;
                    }
                    claimed.insert(path, input.clone());
                }
                result.files.push(TransformedFile { input, output });
            }
            Err(error) => result.diagnostics.push(format!("{:#}", error)),
        }
    }

    info!(
        transformed = result.files.len(),
        failed = result.diagnostics.len(),
        "transform finished"
    );
    result
}

/// Write outputs: one file per input under `out_dir`, or to `out` one after
/// another, each followed by a newline.
pub fn emit(result: &TransformResult, options: &TransformOptions, out: &mut dyn Write) -> Result<()> {
    if let Some(out_dir) = &options.out_dir {
        fs::create_dir_all(out_dir)
            .with_context(|| format!("failed to create {}", out_dir.display()))?;
    }

    for file in &result.files {
        match options.output_path(&file.input) {
            Some(path) => {
                fs::write(&path, &file.output)
                    .with_context(|| format!("failed to write {}", path.display()))?;
                debug!(output = %path.display(), "wrote");
            }
            None => writeln!(out, "{}", file.output).context("failed to write output")?,
        }
    }

    Ok(())
}

/// Run the whole pipeline and print diagnostics to stderr. Returns the
/// process exit code.
pub fn main_transform(inputs: &[PathBuf], options: &TransformOptions) -> i32 {
    let result = perform_transform(inputs, options);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if let Err(error) = emit(&result, options, &mut out) {
        eprintln!("Error: {:#}", error);
        return 1;
    }

    for diagnostic in &result.diagnostics {
        eprintln!("Error: {}", diagnostic);
    }
    exit_code_from_result(&result)
}

pub fn exit_code_from_result(result: &TransformResult) -> i32 {
    if result.has_errors() {
        1
    } else {
        0
    }
}
