//! Transformer contract: stage activation, hooks and replace-or-keep results.

use std::fmt;

use esmorph_ast::{Node, NodeKind};

use crate::converting::{MemberExpressionTransformer, TemplateLiteralTransformer};
use crate::stage::TransformationStage;

/// Outcome of a hook invocation.
#[derive(Debug, Clone, PartialEq)]
pub enum VisitResult {
    /// No structural replacement. The hook may still have rewritten fields in place.
    Keep,
    /// Substitute this node into the slot being visited.
    Replace(Node),
}

/// Hook invoked for one visited node.
///
/// `parent` is the kind of the node owning the visited slot, `None` exactly at the root.
pub type Hook = fn(&mut Node, Option<NodeKind>) -> VisitResult;

/// Hooks a transformer contributes to one stage. At least one hook is always set.
#[derive(Debug, Clone, Copy)]
pub struct Visitor {
    enter: Option<Hook>,
    leave: Option<Hook>,
}

impl Visitor {
    /// Visitor with only a pre-order hook.
    pub const fn enter(hook: Hook) -> Self {
        Visitor {
            enter: Some(hook),
            leave: None,
        }
    }

    /// Visitor with only a post-order hook.
    pub const fn leave(hook: Hook) -> Self {
        Visitor {
            enter: None,
            leave: Some(hook),
        }
    }

    pub const fn enter_and_leave(enter: Hook, leave: Hook) -> Self {
        Visitor {
            enter: Some(enter),
            leave: Some(leave),
        }
    }

    #[inline]
    pub const fn enter_hook(&self) -> Option<Hook> {
        self.enter
    }

    #[inline]
    pub const fn leave_hook(&self) -> Option<Hook> {
        self.leave
    }
}

/// A rewrite rule pluggable into the staged visitor framework.
pub trait NodeTransformer {
    fn name(&self) -> TransformerName;

    /// Hooks for `stage`, or `None` when the transformer is inactive during it.
    fn visitor(&self, stage: TransformationStage) -> Option<Visitor>;
}

/// Identifies a registered transformer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TransformerName {
    MemberExpressionTransformer,
    TemplateLiteralTransformer,
}

impl TransformerName {
    /// Every transformer, in registration order.
    pub const ALL: [Self; 2] = [
        Self::MemberExpressionTransformer,
        Self::TemplateLiteralTransformer,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::MemberExpressionTransformer => "MemberExpressionTransformer",
            Self::TemplateLiteralTransformer => "TemplateLiteralTransformer",
        }
    }

    /// Inverse of `as_str`, ASCII case-insensitive.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|transformer| transformer.as_str().eq_ignore_ascii_case(name))
    }

    /// The transformer this name refers to.
    pub fn transformer(self) -> &'static dyn NodeTransformer {
        match self {
            Self::MemberExpressionTransformer => &MemberExpressionTransformer,
            Self::TemplateLiteralTransformer => &TemplateLiteralTransformer,
        }
    }
}

impl fmt::Display for TransformerName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
