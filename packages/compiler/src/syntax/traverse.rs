//! AST Traversal
//!
//! Depth-first, document-order walk over a template tree. Statement hooks
//! return a [`NodeAction`] telling the driver to keep, replace or remove
//! the visited node; a replacement is installed and then walked itself.

use super::ast::*;

/// Outcome of a statement hook.
#[derive(Debug, Clone, PartialEq)]
pub enum NodeAction {
    /// Keep the node (including any in-place changes the hook made) and
    /// continue into its children.
    Keep,
    /// Install the given node in place of the visited one, then walk it.
    Replace(Statement),
    /// Drop the node from its parent.
    Remove,
}

/// Visitor trait for traversing the template AST.
///
/// `enter_program`/`exit_program` bracket every program: the root, block
/// bodies and block inverses.
pub trait Visitor {
    fn enter_program(&mut self, _program: &Program) {}

    fn exit_program(&mut self, _program: &Program) {}

    fn element(&mut self, _element: &mut ElementNode) -> NodeAction {
        NodeAction::Keep
    }

    fn mustache(&mut self, _mustache: &mut MustacheStatement) -> NodeAction {
        NodeAction::Keep
    }

    fn block(&mut self, _block: &mut BlockStatement) -> NodeAction {
        NodeAction::Keep
    }
}

/// Walk `program` with `visitor`, applying the actions it returns.
pub fn traverse(program: &mut Program, visitor: &mut dyn Visitor) {
    visit_program(program, visitor);
}

fn visit_program(program: &mut Program, visitor: &mut dyn Visitor) {
    visitor.enter_program(program);
    visit_all(&mut program.body, visitor);
    visitor.exit_program(program);
}

/// Visit all statements in a list, rebuilding it from the hook results.
fn visit_all(statements: &mut Vec<Statement>, visitor: &mut dyn Visitor) {
    let originals = std::mem::take(statements);
    statements.reserve(originals.len());

    for statement in originals {
        if let Some(result) = visit_statement(statement, visitor) {
            statements.push(result);
        }
    }
}

fn visit_statement(mut statement: Statement, visitor: &mut dyn Visitor) -> Option<Statement> {
    let action = match &mut statement {
        Statement::Element(element) => visitor.element(element),
        Statement::Mustache(mustache) => visitor.mustache(mustache),
        Statement::Block(block) => visitor.block(block),
        Statement::Text(_) | Statement::Comment(_) | Statement::MustacheComment(_) => {
            NodeAction::Keep
        }
    };

    match action {
        NodeAction::Keep => {
            visit_children(&mut statement, visitor);
            Some(statement)
        }
        NodeAction::Replace(replacement) => {
            tracing::trace!(
                from = statement.type_name(),
                to = replacement.type_name(),
                "replacing node"
            );
            visit_statement(replacement, visitor)
        }
        NodeAction::Remove => None,
    }
}

fn visit_children(statement: &mut Statement, visitor: &mut dyn Visitor) {
    match statement {
        Statement::Element(element) => visit_all(&mut element.children, visitor),
        Statement::Block(block) => {
            visit_program(&mut block.program, visitor);
            if let Some(inverse) = block.inverse.as_mut() {
                visit_program(inverse, visitor);
            }
        }
        Statement::Mustache(_)
        | Statement::Text(_)
        | Statement::Comment(_)
        | Statement::MustacheComment(_) => {}
    }
}
