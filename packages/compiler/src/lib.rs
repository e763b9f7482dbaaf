#![deny(clippy::all)]

/**
 * Angle Bracket Polyfill
 *
 * Rewrites angle-bracket component invocations in a template syntax tree
 * into curly invocations, for template compilers that predate them.
 */

#[cfg(feature = "napi-bindings")]
use napi::bindgen_prelude::*;
#[cfg(feature = "napi-bindings")]
use napi_derive::napi;

// Core modules
pub mod chars;
pub mod config;
pub mod error;
pub mod parse_util;
pub mod util;

// Template syntax and the polyfill itself
pub mod angle_bracket;
pub mod syntax;

// Re-exports
pub use angle_bracket::{transform, transform_document, transform_json, AngleBracketPolyfill};
pub use config::{PolyfillOptions, TemplateDocument};
pub use error::{PolyfillError, Result as PolyfillResult};
pub use util::dasherize;

/// Rewrite a JSON template document (`{ "ast": ..., "contents": ..., "moduleName": ... }`)
/// and return the rewritten document as JSON
#[cfg(feature = "napi-bindings")]
#[napi]
pub fn transform_template(document_json: String) -> Result<String> {
    transform_json(&document_json).map_err(|e| Error::from_reason(e.to_string()))
}

/// Rewrite a JSON template document and return the result as template text
#[cfg(feature = "napi-bindings")]
#[napi]
pub fn transform_template_to_text(document_json: String) -> Result<String> {
    let mut document: TemplateDocument = serde_json::from_str(&document_json)
        .map_err(|e| Error::from_reason(e.to_string()))?;
    transform_document(&mut document);
    Ok(syntax::print(&document.ast))
}

/// Get polyfill version
#[cfg(feature = "napi-bindings")]
#[napi]
pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
