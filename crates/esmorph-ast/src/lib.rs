//! Syntax tree model for the esmorph rewrite pipeline.
//!
//! This crate provides the node shapes the transformers operate on:
//! - `Node` - ESTree-shaped tagged enum, (de)serializable from ESTree JSON
//! - `OtherNode` - fallback for kinds without a dedicated variant
//! - `NodeKind` - fieldless tag mirror of `Node` with kind predicates
//! - Builder helpers (`Node::string`, `Node::binary`, ...) for synthesized nodes
//! - `Node::children_mut` - mutable child slots in evaluation order

// Node shapes and serde mapping
pub mod node;
pub use node::{
    LiteralValue, Node, OtherField, OtherNode, RegexLiteral, TemplateElement,
    TemplateElementValue, VariableKind,
};

// Kind tags and predicates
pub mod node_kind;
pub use node_kind::NodeKind;

// Construction helpers
mod builders;

// Child slot enumeration for traversal
mod children;
pub use children::ChildSlots;

#[cfg(test)]
#[path = "../tests/node.rs"]
mod tests;
