//! Node kind tags and kind predicates.

use std::fmt;

use crate::node::{LiteralValue, Node};

/// Fieldless tag of a `Node` variant.
///
/// Traversal hands a child's parent to hooks as its `NodeKind`, since the
/// parent's slot is mutably borrowed while the child is visited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Program,
    ExpressionStatement,
    BlockStatement,
    ReturnStatement,
    VariableDeclaration,
    VariableDeclarator,
    Identifier,
    PrivateIdentifier,
    Literal,
    TemplateLiteral,
    TaggedTemplateExpression,
    MemberExpression,
    BinaryExpression,
    AssignmentExpression,
    CallExpression,
    ArrayExpression,
    ConditionalExpression,
    /// Any kind held by `Node::Other`
    Other,
}

impl NodeKind {
    /// ESTree `type` name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Program => "Program",
            Self::ExpressionStatement => "ExpressionStatement",
            Self::BlockStatement => "BlockStatement",
            Self::ReturnStatement => "ReturnStatement",
            Self::VariableDeclaration => "VariableDeclaration",
            Self::VariableDeclarator => "VariableDeclarator",
            Self::Identifier => "Identifier",
            Self::PrivateIdentifier => "PrivateIdentifier",
            Self::Literal => "Literal",
            Self::TemplateLiteral => "TemplateLiteral",
            Self::TaggedTemplateExpression => "TaggedTemplateExpression",
            Self::MemberExpression => "MemberExpression",
            Self::BinaryExpression => "BinaryExpression",
            Self::AssignmentExpression => "AssignmentExpression",
            Self::CallExpression => "CallExpression",
            Self::ArrayExpression => "ArrayExpression",
            Self::ConditionalExpression => "ConditionalExpression",
            Self::Other => "Other",
        }
    }

    /// Kind with a dedicated `Node` variant named `name`.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::DEDICATED
            .into_iter()
            .find(|kind| kind.as_str() == name)
    }

    const DEDICATED: [Self; 17] = [
        Self::Program,
        Self::ExpressionStatement,
        Self::BlockStatement,
        Self::ReturnStatement,
        Self::VariableDeclaration,
        Self::VariableDeclarator,
        Self::Identifier,
        Self::PrivateIdentifier,
        Self::Literal,
        Self::TemplateLiteral,
        Self::TaggedTemplateExpression,
        Self::MemberExpression,
        Self::BinaryExpression,
        Self::AssignmentExpression,
        Self::CallExpression,
        Self::ArrayExpression,
        Self::ConditionalExpression,
    ];
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Node {
    /// Kind tag of this node.
    pub const fn kind(&self) -> NodeKind {
        match self {
            Self::Program { .. } => NodeKind::Program,
            Self::ExpressionStatement { .. } => NodeKind::ExpressionStatement,
            Self::BlockStatement { .. } => NodeKind::BlockStatement,
            Self::ReturnStatement { .. } => NodeKind::ReturnStatement,
            Self::VariableDeclaration { .. } => NodeKind::VariableDeclaration,
            Self::VariableDeclarator { .. } => NodeKind::VariableDeclarator,
            Self::Identifier { .. } => NodeKind::Identifier,
            Self::PrivateIdentifier { .. } => NodeKind::PrivateIdentifier,
            Self::Literal { .. } => NodeKind::Literal,
            Self::TemplateLiteral { .. } => NodeKind::TemplateLiteral,
            Self::TaggedTemplateExpression { .. } => NodeKind::TaggedTemplateExpression,
            Self::MemberExpression { .. } => NodeKind::MemberExpression,
            Self::BinaryExpression { .. } => NodeKind::BinaryExpression,
            Self::AssignmentExpression { .. } => NodeKind::AssignmentExpression,
            Self::CallExpression { .. } => NodeKind::CallExpression,
            Self::ArrayExpression { .. } => NodeKind::ArrayExpression,
            Self::ConditionalExpression { .. } => NodeKind::ConditionalExpression,
            Self::Other(_) => NodeKind::Other,
        }
    }

    /// ESTree `type` name, including the names of `Other` nodes.
    pub fn type_name(&self) -> &str {
        match self {
            Self::Other(other) => &other.type_name,
            _ => self.kind().as_str(),
        }
    }

    #[inline]
    pub fn is_identifier(&self) -> bool {
        matches!(self, Self::Identifier { .. })
    }

    #[inline]
    pub fn is_literal(&self) -> bool {
        matches!(self, Self::Literal { .. })
    }

    /// `Literal` whose value is a string (possibly empty).
    #[inline]
    pub fn is_string_literal(&self) -> bool {
        matches!(
            self,
            Self::Literal {
                value: LiteralValue::String(_),
                ..
            }
        )
    }

    #[inline]
    pub fn is_member_expression(&self) -> bool {
        matches!(self, Self::MemberExpression { .. })
    }

    #[inline]
    pub fn is_template_literal(&self) -> bool {
        matches!(self, Self::TemplateLiteral { .. })
    }

    #[inline]
    pub fn is_tagged_template_expression(&self) -> bool {
        matches!(self, Self::TaggedTemplateExpression { .. })
    }
}
