//! Invocation Classifier
//!
//! Decides what an element node stands for: plain markup, a component
//! invoked by a static name, or a component resolved at runtime.

use crate::chars;
use crate::syntax::ast::{ElementNode, Expression, PathExpression, StringLiteral};
use crate::syntax::builders as b;
use crate::util::dasherize;

use super::locator::SourceLines;
use super::scope::LexicalScope;
use super::SPLAT_ATTRIBUTE;

const THIS_PREFIX: &str = "this.";

/// What a dynamically resolved invocation resolves against.
#[derive(Debug, Clone, PartialEq)]
pub enum DynamicCallee {
    /// `<@greeting />`: a named argument of the caller. The path has
    /// `data` set, `parts` without the `@`, and the tag as `original`.
    NamedArgument(PathExpression),
    /// `<this.widget />`
    ThisPath(PathExpression),
    /// `<item.title />` where `item` is a block param in scope.
    Local(PathExpression),
    /// `<Widget />`: a single capitalized word, looked up by its
    /// dasherized name.
    Registry(StringLiteral),
}

impl DynamicCallee {
    pub fn into_expression(self) -> Expression {
        match self {
            DynamicCallee::NamedArgument(path)
            | DynamicCallee::ThisPath(path)
            | DynamicCallee::Local(path) => Expression::Path(path),
            DynamicCallee::Registry(name) => Expression::String(name),
        }
    }
}

/// Classified element
#[derive(Debug, Clone, PartialEq)]
pub enum Invocation {
    Element {
        has_splat: bool,
    },
    StaticComponent {
        /// Dasherized component name
        name: String,
        self_closing: bool,
        has_splat: bool,
    },
    DynamicComponent {
        callee: DynamicCallee,
        self_closing: bool,
        has_splat: bool,
    },
}

impl Invocation {
    pub fn kind_name(&self) -> &'static str {
        match self {
            Invocation::Element { .. } => "Element",
            Invocation::StaticComponent { .. } => "StaticComponent",
            Invocation::DynamicComponent { .. } => "DynamicComponent",
        }
    }

    pub fn has_splat(&self) -> bool {
        match self {
            Invocation::Element { has_splat }
            | Invocation::StaticComponent { has_splat, .. }
            | Invocation::DynamicComponent { has_splat, .. } => *has_splat,
        }
    }
}

/// Classify `element` given the locals in scope and the original source.
///
/// First match wins: `@` tag, `this.` tag, local head segment, single
/// capitalized word, any other capitalized name, plain markup.
pub fn classify(element: &ElementNode, scope: &LexicalScope, source: &SourceLines) -> Invocation {
    let tag = source.tag_name(element);
    let tag = tag.as_ref();
    let has_splat = element
        .attributes
        .iter()
        .any(|attr| attr.name == SPLAT_ATTRIBUTE);

    let dynamic = |callee: DynamicCallee| Invocation::DynamicComponent {
        callee,
        self_closing: source.self_closing(element),
        has_splat,
    };

    let first_char = tag.chars().next();

    if first_char == Some(chars::AT) {
        return dynamic(DynamicCallee::NamedArgument(b::path(tag)));
    }

    if tag.starts_with(THIS_PREFIX) {
        return dynamic(DynamicCallee::ThisPath(b::path(tag)));
    }

    let head = tag.split(chars::PERIOD).next().unwrap_or(tag);
    if scope.contains(head) {
        return dynamic(DynamicCallee::Local(b::path(tag)));
    }

    if !first_char.is_some_and(chars::is_upper_case) {
        return Invocation::Element { has_splat };
    }

    let name = dasherize(tag);
    if !name.contains(chars::MINUS) {
        return dynamic(DynamicCallee::Registry(b::string(&name)));
    }

    Invocation::StaticComponent {
        name,
        self_closing: source.self_closing(element),
        has_splat,
    }
}
