//! Tree Rewriter
//!
//! Builds the curly invocation that replaces a classified angle-bracket
//! element.
//!
//! Named arguments (`@name=...`) become hash pairs of the invocation.
//! Plain attributes and the `...attributes` splat are folded into one extra
//! pair, `__ANGLE_ATTRS__=(-merge-refs invocation=(hash ...) splat=__ANGLE_ATTRS__)`,
//! so the invoked component receives both sets of attributes. On plain
//! markup the splat marker becomes a `{{_splattributes __ANGLE_ATTRS__}}`
//! modifier instead.

use crate::syntax::ast::*;
use crate::syntax::builders as b;
use crate::syntax::traverse::NodeAction;

use super::invocation::Invocation;
use super::{
    ANGLE_ATTRS, COMPONENT_HELPER, CONCAT_HELPER, HASH_HELPER, MERGE_REFS_HELPER,
    SPLATTRIBUTES_MODIFIER, SPLAT_ATTRIBUTE,
};

/// Rewrite `element` according to `invocation`.
///
/// Plain markup is edited in place and kept; component invocations are
/// replaced by a mustache (self-closing) or a block whose program takes
/// over the element's children and block params.
pub fn rewrite_element(element: &mut ElementNode, invocation: Invocation) -> NodeAction {
    match invocation {
        Invocation::Element { has_splat } => {
            if has_splat {
                splat_into_modifier(element);
            }
            NodeAction::Keep
        }
        Invocation::StaticComponent {
            name,
            self_closing,
            has_splat,
        } => {
            let hash = invocation_hash(element, has_splat);
            NodeAction::Replace(emit(element, b::path(&name).into(), Vec::new(), hash, self_closing))
        }
        Invocation::DynamicComponent {
            callee,
            self_closing,
            has_splat,
        } => {
            let hash = invocation_hash(element, has_splat);
            NodeAction::Replace(emit(
                element,
                b::path(COMPONENT_HELPER).into(),
                vec![callee.into_expression()],
                hash,
                self_closing,
            ))
        }
    }
}

/// Swap the splat marker on a markup element for the splattributes modifier.
fn splat_into_modifier(element: &mut ElementNode) {
    element.attributes.retain(|attr| attr.name != SPLAT_ATTRIBUTE);
    element.modifiers.push(b::element_modifier(
        b::path(SPLATTRIBUTES_MODIFIER),
        vec![b::path(ANGLE_ATTRS).into()],
        b::hash(Vec::new()),
    ));
    tracing::trace!(tag = %element.tag, "splat attributes moved to modifier");
}

/// Hash for the replacing invocation, taking the element's attributes.
fn invocation_hash(element: &mut ElementNode, has_splat: bool) -> Hash {
    let (args, attributes): (Vec<AttrNode>, Vec<AttrNode>) = std::mem::take(&mut element.attributes)
        .into_iter()
        .filter(|attr| attr.name != SPLAT_ATTRIBUTE)
        .partition(|attr| attr.name.starts_with('@'));

    let mut pairs: Vec<HashPair> = args
        .into_iter()
        .map(|arg| {
            let key = arg.name.strip_prefix('@').unwrap_or(&arg.name);
            b::pair_with_loc(key, expression_for_attribute_value(arg.value), arg.loc)
        })
        .collect();

    if has_splat || !attributes.is_empty() {
        pairs.push(b::pair(ANGLE_ATTRS, merged_attributes(attributes, has_splat)));
    }

    b::hash(pairs)
}

/// `(-merge-refs invocation=(hash ...) splat=__ANGLE_ATTRS__)`, with each
/// entry present only when it has something to carry.
fn merged_attributes(attributes: Vec<AttrNode>, has_splat: bool) -> SubExpression {
    let mut merge_pairs = Vec::with_capacity(2);

    if !attributes.is_empty() {
        let attribute_pairs = attributes
            .into_iter()
            .map(|attr| {
                b::pair_with_loc(&attr.name, expression_for_attribute_value(attr.value), attr.loc)
            })
            .collect();

        merge_pairs.push(b::pair(
            "invocation",
            b::sexpr(b::path(HASH_HELPER), Vec::new(), b::hash(attribute_pairs)),
        ));
    }

    if has_splat {
        merge_pairs.push(b::pair("splat", b::path(ANGLE_ATTRS)));
    }

    b::sexpr(b::path(MERGE_REFS_HELPER), Vec::new(), b::hash(merge_pairs))
}

fn emit(
    element: &mut ElementNode,
    path: Expression,
    params: Vec<Expression>,
    hash: Hash,
    self_closing: bool,
) -> Statement {
    let loc = element.loc.clone();

    if self_closing {
        Statement::Mustache(b::mustache_with_loc(path, params, hash, loc))
    } else {
        let program = b::program(
            std::mem::take(&mut element.children),
            std::mem::take(&mut element.block_params),
        );
        Statement::Block(b::block_with_loc(path, params, hash, program, None, loc))
    }
}

/// Expression for an attribute value.
///
/// Text becomes a string literal and a concatenation a `concat` call. An
/// interpolation with params or hash pairs becomes a sub-expression; a
/// bare `{{foo}}` stays the path itself, even though it might name a
/// helper (`data-foo={{is-this-a-helper}}`).
pub fn expression_for_attribute_value(value: AttrValue) -> Expression {
    match value {
        AttrValue::Text(text) => b::string(&text.chars).into(),
        AttrValue::Mustache(mustache) => expression_for_mustache(mustache),
        AttrValue::Concat(concat) => {
            let parts = concat
                .parts
                .into_iter()
                .map(|part| match part {
                    ConcatPart::Text(text) => b::string(&text.chars).into(),
                    ConcatPart::Mustache(mustache) => expression_for_mustache(mustache),
                })
                .collect();

            b::sexpr(b::path(CONCAT_HELPER), parts, b::hash(Vec::new())).into()
        }
    }
}

fn expression_for_mustache(mustache: MustacheStatement) -> Expression {
    if mustache.is_simple() {
        mustache.path
    } else {
        b::sexpr_with_loc(mustache.path, mustache.params, mustache.hash, mustache.loc).into()
    }
}
