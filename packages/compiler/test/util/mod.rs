#![allow(dead_code)]

/**
 * Test Utilities
 *
 * Small builders for element trees, plus helpers that run the polyfill and
 * print the result.
 */
use angle_bracket_polyfill::parse_util::SourceSpan;
use angle_bracket_polyfill::syntax::ast::*;
use angle_bracket_polyfill::syntax::builders as b;
use angle_bracket_polyfill::syntax::print;
use angle_bracket_polyfill::{transform, PolyfillOptions};

/// Fluent element builder
pub struct El(ElementNode);

impl El {
    pub fn new(tag: &str) -> Self {
        El(b::element(tag))
    }

    /// Span from 1-based lines and 0-based columns
    pub fn at(mut self, start_line: usize, start_col: usize, end_line: usize, end_col: usize) -> Self {
        self.0.loc = SourceSpan::from_coords(start_line, start_col, end_line, end_col);
        self
    }

    pub fn self_closing(mut self, value: bool) -> Self {
        self.0.self_closing = Some(value);
        self
    }

    pub fn attr(mut self, name: &str, value: AttrValue) -> Self {
        self.0.attributes.push(b::attr(name, value));
        self
    }

    pub fn text_attr(self, name: &str, value: &str) -> Self {
        self.attr(name, text_value(value))
    }

    pub fn path_attr(self, name: &str, path: &str) -> Self {
        self.attr(name, path_value(path))
    }

    pub fn splat(self) -> Self {
        self.attr("...attributes", text_value(""))
    }

    pub fn modifier(mut self, path: &str) -> Self {
        self.0
            .modifiers
            .push(b::element_modifier(b::path(path), vec![], b::hash(vec![])));
        self
    }

    pub fn block_params(mut self, params: &[&str]) -> Self {
        self.0.block_params = params.iter().map(|p| p.to_string()).collect();
        self
    }

    pub fn child(mut self, child: Statement) -> Self {
        self.0.children.push(child);
        self
    }

    pub fn text(self, chars: &str) -> Self {
        self.child(Statement::Text(b::text(chars)))
    }

    pub fn build(self) -> ElementNode {
        self.0
    }

    pub fn stmt(self) -> Statement {
        Statement::Element(self.0)
    }
}

pub fn text_value(chars: &str) -> AttrValue {
    AttrValue::Text(b::text(chars))
}

pub fn path_value(path: &str) -> AttrValue {
    AttrValue::Mustache(b::mustache(b::path(path), vec![], b::hash(vec![])))
}

pub fn call_value(path: &str, params: Vec<Expression>, pairs: Vec<HashPair>) -> AttrValue {
    AttrValue::Mustache(b::mustache(b::path(path), params, b::hash(pairs)))
}

pub fn concat_value(parts: Vec<ConcatPart>) -> AttrValue {
    AttrValue::Concat(b::concat(parts))
}

pub fn text_part(chars: &str) -> ConcatPart {
    ConcatPart::Text(b::text(chars))
}

pub fn path_part(path: &str) -> ConcatPart {
    ConcatPart::Mustache(b::mustache(b::path(path), vec![], b::hash(vec![])))
}

pub fn text(chars: &str) -> Statement {
    Statement::Text(b::text(chars))
}

pub fn mustache(path: &str) -> Statement {
    Statement::Mustache(b::mustache(b::path(path), vec![], b::hash(vec![])))
}

/// `{{#path param as |block_params|}}body{{/path}}`
pub fn block(path: &str, param: &str, block_params: &[&str], body: Vec<Statement>) -> Statement {
    Statement::Block(b::block(
        b::path(path),
        vec![b::path(param).into()],
        b::hash(vec![]),
        b::program(body, block_params.iter().map(|p| p.to_string()).collect()),
        None,
    ))
}

pub fn template(body: Vec<Statement>) -> Program {
    b::program(body, vec![])
}

/// Run the polyfill over `body` and return the rewritten program
pub fn rewrite(body: Vec<Statement>, contents: Option<&str>) -> Program {
    let mut program = template(body);
    let mut options = PolyfillOptions::new().with_module_name("test/template.hbs");
    if let Some(contents) = contents {
        options = options.with_contents(contents);
    }
    transform(&mut program, &options);
    program
}

/// Run the polyfill over `body` and print the result as template text
pub fn rewrite_to_text(body: Vec<Statement>, contents: Option<&str>) -> String {
    print(&rewrite(body, contents))
}
