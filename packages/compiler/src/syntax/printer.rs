/**
 * Template Printer
 *
 * Serializes a template AST back to template text, so a rewritten tree
 * can be handed to a compiler that only reads curly-invocation syntax.
 */
use super::ast::*;
use crate::chars;

/// Elements that never have a closing tag.
const VOID_TAGS: &[&str] = &[
    "area", "base", "br", "col", "command", "embed", "hr", "img", "input", "keygen", "link",
    "meta", "param", "source", "track", "wbr",
];

/// Print a whole program as template text
pub fn print(program: &Program) -> String {
    let mut printer = TemplatePrinter;
    printer.visit_statements(&program.body)
}

/// Print a single statement
pub fn print_statement(statement: &Statement) -> String {
    let mut printer = TemplatePrinter;
    printer.visit_statement(statement)
}

/// Print a single expression
pub fn print_expression(expression: &Expression) -> String {
    let mut printer = TemplatePrinter;
    printer.visit_expression(expression)
}

struct TemplatePrinter;

impl TemplatePrinter {
    fn visit_statements(&mut self, statements: &[Statement]) -> String {
        statements.iter().map(|s| self.visit_statement(s)).collect()
    }

    fn visit_statement(&mut self, statement: &Statement) -> String {
        match statement {
            Statement::Element(element) => self.visit_element(element),
            Statement::Mustache(mustache) => self.visit_mustache(mustache),
            Statement::Block(block) => self.visit_block(block),
            Statement::Text(text) => text.chars.clone(),
            Statement::Comment(comment) => format!("<!--{}-->", comment.value),
            Statement::MustacheComment(comment) => format!("{{{{!--{}--}}}}", comment.value),
        }
    }

    fn visit_element(&mut self, element: &ElementNode) -> String {
        let mut out = format!("{}{}", chars::LT, element.tag);

        for attr in &element.attributes {
            out.push(chars::SPACE);
            out.push_str(&self.visit_attribute(attr));
        }

        for modifier in &element.modifiers {
            out.push(chars::SPACE);
            out.push_str(&format!(
                "{{{{{}}}}}",
                self.visit_call(&modifier.path, &modifier.params, &modifier.hash)
            ));
        }

        out.push_str(&block_params(&element.block_params));

        if element.self_closing == Some(true) && element.children.is_empty() {
            out.push_str(" />");
            return out;
        }

        out.push(chars::GT);
        if VOID_TAGS.contains(&element.tag.as_str()) {
            return out;
        }

        out.push_str(&self.visit_statements(&element.children));
        out.push_str(&format!("</{}>", element.tag));
        out
    }

    fn visit_attribute(&mut self, attr: &AttrNode) -> String {
        match &attr.value {
            AttrValue::Text(text) if text.chars.is_empty() => attr.name.clone(),
            AttrValue::Text(text) => format!("{}=\"{}\"", attr.name, escape_attr_text(&text.chars)),
            AttrValue::Mustache(mustache) => format!("{}={}", attr.name, self.visit_mustache(mustache)),
            AttrValue::Concat(concat) => {
                let parts: String = concat
                    .parts
                    .iter()
                    .map(|part| match part {
                        ConcatPart::Text(text) => escape_attr_text(&text.chars),
                        ConcatPart::Mustache(mustache) => self.visit_mustache(mustache),
                    })
                    .collect();
                format!("{}=\"{}\"", attr.name, parts)
            }
        }
    }

    fn visit_mustache(&mut self, mustache: &MustacheStatement) -> String {
        let call = self.visit_call(&mustache.path, &mustache.params, &mustache.hash);
        if mustache.escaped {
            format!("{{{{{}}}}}", call)
        } else {
            format!("{{{{{{{}}}}}}}", call)
        }
    }

    fn visit_block(&mut self, block: &BlockStatement) -> String {
        let mut out = format!(
            "{{{{#{}{}}}}}",
            self.visit_call(&block.path, &block.params, &block.hash),
            block_params(&block.program.block_params)
        );
        out.push_str(&self.visit_statements(&block.program.body));

        if let Some(inverse) = &block.inverse {
            out.push_str("{{else}}");
            out.push_str(&self.visit_statements(&inverse.body));
        }

        out.push_str(&format!("{{{{/{}}}}}", self.visit_expression(&block.path)));
        out
    }

    /// `path param1 param2 key=value`
    fn visit_call(&mut self, path: &Expression, params: &[Expression], hash: &Hash) -> String {
        let mut parts = vec![self.visit_expression(path)];
        parts.extend(params.iter().map(|p| self.visit_expression(p)));
        if !hash.pairs.is_empty() {
            parts.push(self.visit_hash(hash));
        }
        parts.join(" ")
    }

    fn visit_hash(&mut self, hash: &Hash) -> String {
        hash.pairs
            .iter()
            .map(|pair| format!("{}={}", pair.key, self.visit_expression(&pair.value)))
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn visit_expression(&mut self, expression: &Expression) -> String {
        match expression {
            Expression::Path(path) => path.original.clone(),
            Expression::SubExpression(sexpr) => {
                format!("({})", self.visit_call(&sexpr.path, &sexpr.params, &sexpr.hash))
            }
            Expression::String(literal) => quote_string(&literal.value),
            Expression::Boolean(literal) => literal.value.to_string(),
            Expression::Number(literal) => format_number(literal.value),
            Expression::Null(_) => "null".to_string(),
            Expression::Undefined(_) => "undefined".to_string(),
        }
    }
}

fn block_params(params: &[String]) -> String {
    if params.is_empty() {
        String::new()
    } else {
        format!(" as |{}|", params.join(" "))
    }
}

fn quote_string(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push(chars::DQ);
    for ch in value.chars() {
        if ch == chars::DQ || ch == chars::BACKSLASH {
            out.push(chars::BACKSLASH);
        }
        out.push(ch);
    }
    out.push(chars::DQ);
    out
}

fn escape_attr_text(value: &str) -> String {
    value.replace(chars::DQ, "&quot;")
}

fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.is_finite() {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}
