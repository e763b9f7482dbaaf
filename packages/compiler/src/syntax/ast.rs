//! Template AST
//!
//! Node definitions for the template syntax tree: markup elements,
//! curly invocations (inline and block) and the expressions they carry.
//! The serde representation uses the conventional `"type"` tags so trees
//! produced by an upstream template parser can be read as JSON.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::parse_util::SourceSpan;

fn default_true() -> bool {
    true
}

/// Top-level or block body. Block params are the locals the body introduces.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "type", rename = "Program", rename_all = "camelCase")]
pub struct Program {
    #[serde(default)]
    pub body: Vec<Statement>,
    #[serde(default)]
    pub block_params: Vec<String>,
    #[serde(default)]
    pub loc: SourceSpan,
}

/// Statement node union
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Statement {
    #[serde(rename = "ElementNode")]
    Element(ElementNode),
    #[serde(rename = "MustacheStatement")]
    Mustache(MustacheStatement),
    #[serde(rename = "BlockStatement")]
    Block(BlockStatement),
    #[serde(rename = "TextNode")]
    Text(TextNode),
    #[serde(rename = "CommentStatement")]
    Comment(CommentStatement),
    #[serde(rename = "MustacheCommentStatement")]
    MustacheComment(MustacheCommentStatement),
}

impl Statement {
    pub fn loc(&self) -> &SourceSpan {
        match self {
            Statement::Element(n) => &n.loc,
            Statement::Mustache(n) => &n.loc,
            Statement::Block(n) => &n.loc,
            Statement::Text(n) => &n.loc,
            Statement::Comment(n) => &n.loc,
            Statement::MustacheComment(n) => &n.loc,
        }
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Statement::Element(_) => "ElementNode",
            Statement::Mustache(_) => "MustacheStatement",
            Statement::Block(_) => "BlockStatement",
            Statement::Text(_) => "TextNode",
            Statement::Comment(_) => "CommentStatement",
            Statement::MustacheComment(_) => "MustacheCommentStatement",
        }
    }
}

/// Element node: plain markup or an angle-bracket invocation.
///
/// `tag` is the name as the parser recorded it; older parsers lower-case
/// its first character. `self_closing` is `None` when the parser did not
/// record it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementNode {
    pub tag: String,
    #[serde(default)]
    pub attributes: Vec<AttrNode>,
    #[serde(default)]
    pub modifiers: Vec<ElementModifierStatement>,
    #[serde(default)]
    pub children: Vec<Statement>,
    #[serde(default)]
    pub block_params: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub self_closing: Option<bool>,
    #[serde(default)]
    pub loc: SourceSpan,
    /// Parser fields not modelled here (`comments`, ...), written back as read.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Attribute written on an element. Names starting with `@` are named
/// arguments; `...attributes` is the splat marker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename = "AttrNode")]
pub struct AttrNode {
    pub name: String,
    pub value: AttrValue,
    #[serde(default)]
    pub loc: SourceSpan,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum AttrValue {
    #[serde(rename = "TextNode")]
    Text(TextNode),
    #[serde(rename = "MustacheStatement")]
    Mustache(MustacheStatement),
    #[serde(rename = "ConcatStatement")]
    Concat(ConcatStatement),
}

/// Quoted attribute value mixing text and interpolations: `class="a {{b}}"`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConcatStatement {
    pub parts: Vec<ConcatPart>,
    #[serde(default)]
    pub loc: SourceSpan,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ConcatPart {
    #[serde(rename = "TextNode")]
    Text(TextNode),
    #[serde(rename = "MustacheStatement")]
    Mustache(MustacheStatement),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextNode {
    pub chars: String,
    #[serde(default)]
    pub loc: SourceSpan,
}

/// Inline curly invocation: `{{path param key=value}}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MustacheStatement {
    pub path: Expression,
    #[serde(default)]
    pub params: Vec<Expression>,
    #[serde(default)]
    pub hash: Hash,
    #[serde(default = "default_true")]
    pub escaped: bool,
    #[serde(default)]
    pub loc: SourceSpan,
    /// Unmodelled parser fields such as `strip`.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl MustacheStatement {
    /// No positional params and no hash pairs.
    pub fn is_simple(&self) -> bool {
        self.params.is_empty() && self.hash.pairs.is_empty()
    }
}

/// Block curly invocation: `{{#path param key=value}}...{{else}}...{{/path}}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlockStatement {
    pub path: Expression,
    #[serde(default)]
    pub params: Vec<Expression>,
    #[serde(default)]
    pub hash: Hash,
    pub program: Program,
    #[serde(default)]
    pub inverse: Option<Program>,
    #[serde(default)]
    pub loc: SourceSpan,
    /// Unmodelled parser fields such as `openStrip` and `closeStrip`.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename = "ElementModifierStatement")]
pub struct ElementModifierStatement {
    pub path: Expression,
    #[serde(default)]
    pub params: Vec<Expression>,
    #[serde(default)]
    pub hash: Hash,
    #[serde(default)]
    pub loc: SourceSpan,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommentStatement {
    pub value: String,
    #[serde(default)]
    pub loc: SourceSpan,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MustacheCommentStatement {
    pub value: String,
    #[serde(default)]
    pub loc: SourceSpan,
}

/// Expression node union
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Expression {
    #[serde(rename = "PathExpression")]
    Path(PathExpression),
    #[serde(rename = "SubExpression")]
    SubExpression(SubExpression),
    #[serde(rename = "StringLiteral")]
    String(StringLiteral),
    #[serde(rename = "BooleanLiteral")]
    Boolean(BooleanLiteral),
    #[serde(rename = "NumberLiteral")]
    Number(NumberLiteral),
    #[serde(rename = "NullLiteral")]
    Null(NullLiteral),
    #[serde(rename = "UndefinedLiteral")]
    Undefined(UndefinedLiteral),
}

impl Expression {
    pub fn loc(&self) -> &SourceSpan {
        match self {
            Expression::Path(e) => &e.loc,
            Expression::SubExpression(e) => &e.loc,
            Expression::String(e) => &e.loc,
            Expression::Boolean(e) => &e.loc,
            Expression::Number(e) => &e.loc,
            Expression::Null(e) => &e.loc,
            Expression::Undefined(e) => &e.loc,
        }
    }

    pub fn as_path(&self) -> Option<&PathExpression> {
        match self {
            Expression::Path(path) => Some(path),
            _ => None,
        }
    }
}

impl From<PathExpression> for Expression {
    fn from(path: PathExpression) -> Self {
        Expression::Path(path)
    }
}

impl From<SubExpression> for Expression {
    fn from(sexpr: SubExpression) -> Self {
        Expression::SubExpression(sexpr)
    }
}

impl From<StringLiteral> for Expression {
    fn from(literal: StringLiteral) -> Self {
        Expression::String(literal)
    }
}

/// Path reference such as `foo.bar`, `this.foo` or `@foo`.
///
/// `original` is the path as written. `data` marks a path read from the
/// caller's named arguments (`@foo`), in which case `parts` excludes the `@`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathExpression {
    pub original: String,
    #[serde(default)]
    pub this: bool,
    #[serde(default)]
    pub data: bool,
    #[serde(default)]
    pub parts: Vec<String>,
    #[serde(default)]
    pub loc: SourceSpan,
}

/// Helper call in expression position: `(path param key=value)`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubExpression {
    pub path: Box<Expression>,
    #[serde(default)]
    pub params: Vec<Expression>,
    #[serde(default)]
    pub hash: Hash,
    #[serde(default)]
    pub loc: SourceSpan,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "type", rename = "Hash")]
pub struct Hash {
    #[serde(default)]
    pub pairs: Vec<HashPair>,
    #[serde(default)]
    pub loc: SourceSpan,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename = "HashPair")]
pub struct HashPair {
    pub key: String,
    pub value: Expression,
    #[serde(default)]
    pub loc: SourceSpan,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StringLiteral {
    pub value: String,
    #[serde(default)]
    pub loc: SourceSpan,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BooleanLiteral {
    pub value: bool,
    #[serde(default)]
    pub loc: SourceSpan,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NumberLiteral {
    pub value: f64,
    #[serde(default)]
    pub loc: SourceSpan,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct NullLiteral {
    #[serde(default)]
    pub loc: SourceSpan,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct UndefinedLiteral {
    #[serde(default)]
    pub loc: SourceSpan,
}
