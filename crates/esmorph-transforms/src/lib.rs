//! Staged node transformers for the esmorph rewrite pipeline.
//!
//! A transformer advertises, per `TransformationStage`, a `Visitor` made of an
//! optional `enter` hook (pre-order) and an optional `leave` hook (post-order).
//! Each hook receives the visited node and its parent's kind, and either rewrites
//! the node in place or hands back a replacement.
//!
//! - `VisitorTable` - `(transformer, stage) -> Visitor` lookup built once per pipeline
//! - `TransformersRunner` - reference depth-first engine driving the hooks
//! - `converting` - rewrites active during `TransformationStage::Converting`

pub mod stage;
pub use stage::TransformationStage;

pub mod visitor;
pub use visitor::{Hook, NodeTransformer, TransformerName, VisitResult, Visitor};

pub mod visitor_table;
pub use visitor_table::VisitorTable;

pub mod runner;
pub use runner::{DEFAULT_MAX_DEPTH, TransformStats, TransformersRunner};

pub mod converting;
pub use converting::{MemberExpressionTransformer, TemplateLiteralTransformer};
