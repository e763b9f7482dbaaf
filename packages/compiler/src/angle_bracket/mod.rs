//! Angle Bracket Invocation Polyfill
//!
//! Rewrites angle-bracket component invocations (`<Foo @bar={{baz}} />`)
//! into the equivalent curly invocations (`{{foo bar=baz}}`,
//! `{{#component ...}}...{{/component}}`) for compilers that only accept
//! the curly form. Plain markup elements pass through, apart from an
//! `...attributes` splat, which becomes a modifier.
//!
//! The rewrite runs as a single traversal. Block params of every entered
//! program are tracked so that `<item.title />` inside `{{#each ... as |item|}}`
//! is recognised as a local invocation rather than markup.

pub mod invocation;
pub mod locator;
pub mod rewrite;
pub mod scope;

use crate::config::{PolyfillOptions, TemplateDocument};
use crate::error::Result;
use crate::syntax::ast::{ElementNode, Program};
use crate::syntax::traverse::{traverse, NodeAction, Visitor};

use invocation::classify;
use locator::SourceLines;
use rewrite::rewrite_element;
use scope::LexicalScope;

pub use invocation::{DynamicCallee, Invocation};

/// Attribute name that forwards the caller's attributes
pub const SPLAT_ATTRIBUTE: &str = "...attributes";
/// Path bound to the attributes passed into the current invocation; also
/// the hash key the merged attributes are passed under.
pub const ANGLE_ATTRS: &str = "__ANGLE_ATTRS__";
/// Modifier applying forwarded attributes to a markup element
pub const SPLATTRIBUTES_MODIFIER: &str = "_splattributes";
/// Helper merging direct and forwarded attributes
pub const MERGE_REFS_HELPER: &str = "-merge-refs";
pub const HASH_HELPER: &str = "hash";
pub const CONCAT_HELPER: &str = "concat";
pub const COMPONENT_HELPER: &str = "component";

/// Visitor performing the rewrite. One instance serves one traversal.
pub struct AngleBracketPolyfill {
    scope: LexicalScope,
    source: SourceLines,
}

impl AngleBracketPolyfill {
    pub fn new(options: &PolyfillOptions) -> Self {
        AngleBracketPolyfill {
            scope: LexicalScope::new(),
            source: SourceLines::new(options.contents.as_deref()),
        }
    }

    /// Classify an element against the current scope without rewriting it.
    pub fn classify(&self, element: &ElementNode) -> Invocation {
        classify(element, &self.scope, &self.source)
    }
}

impl Visitor for AngleBracketPolyfill {
    fn enter_program(&mut self, program: &Program) {
        self.scope.push_all(&program.block_params);
    }

    fn exit_program(&mut self, program: &Program) {
        self.scope.pop_n(program.block_params.len());
    }

    fn element(&mut self, element: &mut ElementNode) -> NodeAction {
        let invocation = self.classify(element);
        tracing::debug!(
            tag = %element.tag,
            kind = invocation.kind_name(),
            splat = invocation.has_splat(),
            "classified element"
        );
        rewrite_element(element, invocation)
    }
}

/// Rewrite every angle-bracket invocation in `program`, in place.
pub fn transform(program: &mut Program, options: &PolyfillOptions) {
    let span = tracing::debug_span!(
        "angle_bracket_polyfill",
        module = options.module_name.as_deref().unwrap_or("<anonymous>"),
        has_source = options.contents.as_deref().is_some_and(|text| !text.is_empty()),
    );
    let _guard = span.enter();

    let mut polyfill = AngleBracketPolyfill::new(options);
    traverse(program, &mut polyfill);
}

/// Rewrite the tree of a template document using the document's own options.
pub fn transform_document(document: &mut TemplateDocument) {
    let options = document.options();
    transform(&mut document.ast, &options);
}

/// Read a template document from JSON, rewrite it and write it back out.
pub fn transform_json(json: &str) -> Result<String> {
    let mut document: TemplateDocument = serde_json::from_str(json)?;
    transform_document(&mut document);
    Ok(serde_json::to_string(&document)?)
}
