//! AST Builders
//!
//! Node-construction functions. Nodes built without an explicit span get a
//! synthetic one. Nothing here validates the shape of what it builds.

use serde_json::Map;

use super::ast::*;
use crate::parse_util::SourceSpan;

/// Path expression from its written form. A leading `this.` sets `this`,
/// a leading `@` sets `data`; neither appears in `parts`.
pub fn path(original: &str) -> PathExpression {
    path_with_loc(original, SourceSpan::synthetic())
}

pub fn path_with_loc(original: &str, loc: SourceSpan) -> PathExpression {
    let (data, rest) = match original.strip_prefix('@') {
        Some(rest) => (true, rest),
        None => (false, original),
    };

    let mut parts: Vec<String> = rest.split('.').map(str::to_string).collect();
    let mut this = false;
    if !data && parts.first().map(String::as_str) == Some("this") {
        this = true;
        parts.remove(0);
    }

    PathExpression {
        original: original.to_string(),
        this,
        data,
        parts,
        loc,
    }
}

pub fn string(value: &str) -> StringLiteral {
    StringLiteral {
        value: value.to_string(),
        loc: SourceSpan::synthetic(),
    }
}

pub fn boolean(value: bool) -> Expression {
    Expression::Boolean(BooleanLiteral {
        value,
        loc: SourceSpan::synthetic(),
    })
}

pub fn number(value: f64) -> Expression {
    Expression::Number(NumberLiteral {
        value,
        loc: SourceSpan::synthetic(),
    })
}

pub fn null() -> Expression {
    Expression::Null(NullLiteral::default())
}

pub fn sexpr(path: impl Into<Expression>, params: Vec<Expression>, hash: Hash) -> SubExpression {
    sexpr_with_loc(path, params, hash, SourceSpan::synthetic())
}

pub fn sexpr_with_loc(
    path: impl Into<Expression>,
    params: Vec<Expression>,
    hash: Hash,
    loc: SourceSpan,
) -> SubExpression {
    SubExpression {
        path: Box::new(path.into()),
        params,
        hash,
        loc,
    }
}

pub fn hash(pairs: Vec<HashPair>) -> Hash {
    Hash {
        pairs,
        loc: SourceSpan::synthetic(),
    }
}

pub fn pair(key: &str, value: impl Into<Expression>) -> HashPair {
    pair_with_loc(key, value, SourceSpan::synthetic())
}

pub fn pair_with_loc(key: &str, value: impl Into<Expression>, loc: SourceSpan) -> HashPair {
    HashPair {
        key: key.to_string(),
        value: value.into(),
        loc,
    }
}

pub fn mustache(path: impl Into<Expression>, params: Vec<Expression>, hash: Hash) -> MustacheStatement {
    mustache_with_loc(path, params, hash, SourceSpan::synthetic())
}

pub fn mustache_with_loc(
    path: impl Into<Expression>,
    params: Vec<Expression>,
    hash: Hash,
    loc: SourceSpan,
) -> MustacheStatement {
    MustacheStatement {
        path: path.into(),
        params,
        hash,
        escaped: true,
        loc,
        extra: Map::new(),
    }
}

pub fn block(
    path: impl Into<Expression>,
    params: Vec<Expression>,
    hash: Hash,
    program: Program,
    inverse: Option<Program>,
) -> BlockStatement {
    block_with_loc(path, params, hash, program, inverse, SourceSpan::synthetic())
}

pub fn block_with_loc(
    path: impl Into<Expression>,
    params: Vec<Expression>,
    hash: Hash,
    program: Program,
    inverse: Option<Program>,
    loc: SourceSpan,
) -> BlockStatement {
    BlockStatement {
        path: path.into(),
        params,
        hash,
        program,
        inverse,
        loc,
        extra: Map::new(),
    }
}

pub fn program(body: Vec<Statement>, block_params: Vec<String>) -> Program {
    Program {
        body,
        block_params,
        loc: SourceSpan::synthetic(),
    }
}

pub fn element_modifier(
    path: impl Into<Expression>,
    params: Vec<Expression>,
    hash: Hash,
) -> ElementModifierStatement {
    ElementModifierStatement {
        path: path.into(),
        params,
        hash,
        loc: SourceSpan::synthetic(),
    }
}

/// Bare element: no attributes, modifiers, children or block params.
pub fn element(tag: &str) -> ElementNode {
    element_with_loc(tag, SourceSpan::synthetic())
}

pub fn element_with_loc(tag: &str, loc: SourceSpan) -> ElementNode {
    ElementNode {
        tag: tag.to_string(),
        attributes: Vec::new(),
        modifiers: Vec::new(),
        children: Vec::new(),
        block_params: Vec::new(),
        self_closing: None,
        loc,
        extra: Map::new(),
    }
}

pub fn attr(name: &str, value: AttrValue) -> AttrNode {
    attr_with_loc(name, value, SourceSpan::synthetic())
}

pub fn attr_with_loc(name: &str, value: AttrValue, loc: SourceSpan) -> AttrNode {
    AttrNode {
        name: name.to_string(),
        value,
        loc,
    }
}

pub fn text(chars: &str) -> TextNode {
    TextNode {
        chars: chars.to_string(),
        loc: SourceSpan::synthetic(),
    }
}

pub fn concat(parts: Vec<ConcatPart>) -> ConcatStatement {
    ConcatStatement {
        parts,
        loc: SourceSpan::synthetic(),
    }
}

pub fn comment(value: &str) -> CommentStatement {
    CommentStatement {
        value: value.to_string(),
        loc: SourceSpan::synthetic(),
    }
}
