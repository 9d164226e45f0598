//! ES2015 template literals to ES5 string concatenation.
//!
//! ```javascript
//! var s = `a${b}c${d}`;
//! var t = `${x}${y}`;
//! ```
//!
//! Becomes:
//!
//! ```javascript
//! var s = 'a' + b + 'c' + d;
//! var t = '' + x + y;
//! ```
//!
//! Runs on `leave`, so substitutions (including nested templates) are already
//! lowered when the enclosing template is flattened.

use esmorph_ast::{Node, NodeKind, TemplateElement};

use crate::stage::TransformationStage;
use crate::visitor::{NodeTransformer, TransformerName, VisitResult, Visitor};

/// Replaces a template literal with a left-associative `+` chain.
#[derive(Debug, Clone, Copy, Default)]
pub struct TemplateLiteralTransformer;

impl NodeTransformer for TemplateLiteralTransformer {
    fn name(&self) -> TransformerName {
        TransformerName::TemplateLiteralTransformer
    }

    fn visitor(&self, stage: TransformationStage) -> Option<Visitor> {
        match stage {
            TransformationStage::Converting => Some(Visitor::leave(Self::leave)),
            _ => None,
        }
    }
}

impl TemplateLiteralTransformer {
    fn leave(node: &mut Node, parent: Option<NodeKind>) -> VisitResult {
        // The quasi of a tagged template must stay a template literal.
        match parent {
            None | Some(NodeKind::TaggedTemplateExpression) => return VisitResult::Keep,
            Some(_) => {}
        }
        let Node::TemplateLiteral {
            quasis,
            expressions,
        } = node
        else {
            return VisitResult::Keep;
        };

        let quasis = std::mem::take(quasis);
        let expressions = std::mem::take(expressions);
        tracing::trace!(
            quasis = quasis.len(),
            expressions = expressions.len(),
            "flattening template literal"
        );
        VisitResult::Replace(Self::transform_node(&quasis, expressions))
    }

    /// Build the concatenation equivalent to a template with these parts.
    ///
    /// Expects `quasis.len() == expressions.len() + 1`. Always yields a string-typed
    /// expression; an empty template yields the literal `''`.
    pub fn transform_node(quasis: &[TemplateElement], expressions: Vec<Node>) -> Node {
        let mut nodes = Self::interleave(quasis, expressions);

        nodes.retain(|node| !Self::is_empty_string_literal(node));

        // `+` is left-associative: unless one of the first two operands is a
        // string, the first addition would be numeric.
        if !Self::is_string_literal_at(&nodes, 0) && !Self::is_string_literal_at(&nodes, 1) {
            nodes.insert(0, Node::string(""));
        }

        Self::concat(nodes)
    }

    /// Text segments and substitutions in source order, each segment as a string literal.
    fn interleave(quasis: &[TemplateElement], expressions: Vec<Node>) -> Vec<Node> {
        let mut expressions = expressions.into_iter();
        let mut nodes = Vec::with_capacity(quasis.len() * 2);

        for quasi in quasis {
            nodes.push(Node::string(quasi.cooked()));
            if let Some(expression) = expressions.next() {
                nodes.push(expression);
            }
        }

        nodes
    }

    /// `((n0 + n1) + n2) + ...`; a single node is returned as is.
    fn concat(nodes: Vec<Node>) -> Node {
        let mut nodes = nodes.into_iter();
        let Some(first) = nodes.next() else {
            return Node::string("");
        };
        nodes.fold(first, |left, right| Node::binary(left, "+", right))
    }

    fn is_string_literal_at(nodes: &[Node], index: usize) -> bool {
        nodes.get(index).is_some_and(Node::is_string_literal)
    }

    fn is_empty_string_literal(node: &Node) -> bool {
        matches!(node, Node::Literal { value, .. } if value.as_str() == Some(""))
    }
}

#[cfg(test)]
#[path = "../../tests/template_literal.rs"]
mod tests;
