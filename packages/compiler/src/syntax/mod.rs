//! Template Syntax
//!
//! The template syntax tree, its node builders, the traversal driver and
//! a printer back to template text.

pub mod ast;
pub mod builders;
pub mod printer;
pub mod traverse;

pub use ast::*;
pub use printer::print;
pub use traverse::{traverse, NodeAction, Visitor};
