//! Polyfill Configuration
//!
//! Options for one transform, and the JSON document that carries a
//! template tree together with its options.

use serde::{Deserialize, Serialize};

use crate::syntax::ast::Program;

/// Options for rewriting one template
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PolyfillOptions {
    /// Original template text. Used only to recover tag-name casing and
    /// self-closing status the parser may have dropped.
    #[serde(default)]
    pub contents: Option<String>,
    /// Name of the template's module, for diagnostics.
    #[serde(default)]
    pub module_name: Option<String>,
}

impl PolyfillOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_contents(mut self, contents: impl Into<String>) -> Self {
        self.contents = Some(contents.into());
        self
    }

    pub fn with_module_name(mut self, module_name: impl Into<String>) -> Self {
        self.module_name = Some(module_name.into());
        self
    }
}

/// A template tree plus the options it should be rewritten with
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateDocument {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub module_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contents: Option<String>,
    pub ast: Program,
}

impl TemplateDocument {
    pub fn options(&self) -> PolyfillOptions {
        PolyfillOptions {
            contents: self.contents.clone(),
            module_name: self.module_name.clone(),
        }
    }
}
