//! Dot access to bracket access.
//!
//! ```javascript
//! object.identifier = 1;
//! ```
//!
//! Becomes:
//!
//! ```javascript
//! object['identifier'] = 1;
//! ```
//!
//! The key is routed through a plain string `Literal`, so later literal rewrites
//! reach it without member-access-specific handling. `object[identifier]` is left
//! alone: its key is a runtime value, not a static name.

use esmorph_ast::{Node, NodeKind};

use crate::stage::TransformationStage;
use crate::visitor::{NodeTransformer, TransformerName, VisitResult, Visitor};

/// Rewrites non-computed member access into computed access with a string key.
#[derive(Debug, Clone, Copy, Default)]
pub struct MemberExpressionTransformer;

impl NodeTransformer for MemberExpressionTransformer {
    fn name(&self) -> TransformerName {
        TransformerName::MemberExpressionTransformer
    }

    fn visitor(&self, stage: TransformationStage) -> Option<Visitor> {
        match stage {
            TransformationStage::Converting => Some(Visitor::enter(Self::enter)),
            _ => None,
        }
    }
}

impl MemberExpressionTransformer {
    fn enter(node: &mut Node, parent: Option<NodeKind>) -> VisitResult {
        if parent.is_some() && node.is_member_expression() {
            Self::transform_node(node);
        }
        VisitResult::Keep
    }

    /// Rewrite `node` in place. Returns whether anything changed.
    ///
    /// Only a non-computed access with an `Identifier` property is touched; the
    /// object subtree is never inspected.
    pub fn transform_node(node: &mut Node) -> bool {
        let Node::MemberExpression {
            property, computed, ..
        } = node
        else {
            return false;
        };
        if *computed {
            return false;
        }
        let Node::Identifier { name } = &mut **property else {
            return false;
        };

        let key = std::mem::take(name);
        tracing::trace!(key = %key, "member access converted to computed form");
        **property = Node::string(key);
        *computed = true;
        true
    }
}

#[cfg(test)]
#[path = "../../tests/member_expression.rs"]
mod tests;
