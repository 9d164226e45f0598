//! Mutable child slot enumeration.

use smallvec::SmallVec;

use crate::node::{Node, OtherField};

/// Mutable child slots of one node, in source evaluation order.
pub type ChildSlots<'a> = SmallVec<[&'a mut Node; 4]>;

impl Node {
    /// Mutable references to every direct child slot, in evaluation order.
    ///
    /// A traversal engine writes replacements straight through these references.
    /// Template segments are not nodes and are not yielded; array holes are skipped.
    /// `Other` nodes yield their node-valued fields in input order.
    pub fn children_mut(&mut self) -> ChildSlots<'_> {
        let mut slots = ChildSlots::new();
        match self {
            Self::Program { body, .. } | Self::BlockStatement { body } => {
                slots.extend(body.iter_mut());
            }
            Self::ExpressionStatement { expression } => slots.push(&mut **expression),
            Self::ReturnStatement { argument } => {
                if let Some(argument) = argument {
                    slots.push(&mut **argument);
                }
            }
            Self::VariableDeclaration { declarations, .. } => {
                slots.extend(declarations.iter_mut());
            }
            Self::VariableDeclarator { id, init } => {
                slots.push(&mut **id);
                if let Some(init) = init {
                    slots.push(&mut **init);
                }
            }
            Self::Identifier { .. } | Self::PrivateIdentifier { .. } | Self::Literal { .. } => {}
            Self::TemplateLiteral { expressions, .. } => slots.extend(expressions.iter_mut()),
            Self::TaggedTemplateExpression { tag, quasi } => {
                slots.push(&mut **tag);
                slots.push(&mut **quasi);
            }
            Self::MemberExpression {
                object, property, ..
            } => {
                slots.push(&mut **object);
                slots.push(&mut **property);
            }
            Self::BinaryExpression { left, right, .. }
            | Self::AssignmentExpression { left, right, .. } => {
                slots.push(&mut **left);
                slots.push(&mut **right);
            }
            Self::CallExpression {
                callee, arguments, ..
            } => {
                slots.push(&mut **callee);
                slots.extend(arguments.iter_mut());
            }
            Self::ArrayExpression { elements } => slots.extend(elements.iter_mut().flatten()),
            Self::ConditionalExpression {
                test,
                consequent,
                alternate,
            } => {
                slots.push(&mut **test);
                slots.push(&mut **consequent);
                slots.push(&mut **alternate);
            }
            Self::Other(other) => {
                for (_, field) in &mut other.fields {
                    match field {
                        OtherField::Node(node) => slots.push(node),
                        OtherField::Nodes(nodes) => slots.extend(nodes.iter_mut().flatten()),
                        OtherField::Value(_) => {}
                    }
                }
            }
        }
        slots
    }
}

