//! Parse Utilities
//!
//! Source positions and spans as recorded on template syntax nodes.
//! Lines are 1-based, columns are 0-based and count chars.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Source marker carried by nodes that were built rather than parsed.
pub const SYNTHETIC_SOURCE: &str = "(synthetic)";

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct SourcePosition {
    pub line: usize,
    pub column: usize,
}

impl SourcePosition {
    pub fn new(line: usize, column: usize) -> Self {
        SourcePosition { line, column }
    }
}

impl fmt::Display for SourcePosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SourceSpan {
    #[serde(default)]
    pub source: Option<String>,
    pub start: SourcePosition,
    pub end: SourcePosition,
}

impl SourceSpan {
    pub fn new(start: SourcePosition, end: SourcePosition) -> Self {
        SourceSpan { source: None, start, end }
    }

    /// Shorthand for `SourceSpan::new` from raw line/column pairs.
    pub fn from_coords(
        start_line: usize,
        start_column: usize,
        end_line: usize,
        end_column: usize,
    ) -> Self {
        SourceSpan::new(
            SourcePosition::new(start_line, start_column),
            SourcePosition::new(end_line, end_column),
        )
    }

    /// Span for a node that has no original text.
    pub fn synthetic() -> Self {
        SourceSpan {
            source: Some(SYNTHETIC_SOURCE.to_string()),
            start: SourcePosition::new(1, 0),
            end: SourcePosition::new(1, 0),
        }
    }

    pub fn is_synthetic(&self) -> bool {
        self.source.as_deref() == Some(SYNTHETIC_SOURCE)
    }
}

impl Default for SourceSpan {
    fn default() -> Self {
        SourceSpan::synthetic()
    }
}

impl fmt::Display for SourceSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.source {
            Some(source) => write!(f, "{}@{}-{}", source, self.start, self.end),
            None => write!(f, "{}-{}", self.start, self.end),
        }
    }
}
