//! Error types
//!
//! The rewrite itself cannot fail; errors only come from reading and
//! writing serialized documents.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PolyfillError {
    #[error("invalid template document: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, PolyfillError>;
