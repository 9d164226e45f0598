//! Reference traversal engine.
//!
//! Walks a tree depth-first and drives the hooks of every transformer active in
//! a stage:
//!
//! 1. every `enter` hook, in table order
//! 2. the node's children, left to right, with this node's kind as their parent
//! 3. every `leave` hook, in table order
//!
//! A `Replace` result is written into the visited slot at once, so later hooks of
//! the same node see the replacement. Children of an `enter` replacement are
//! walked; a `leave` replacement is not revisited.

use esmorph_ast::{Node, NodeKind};

use crate::stage::TransformationStage;
use crate::visitor::{Hook, TransformerName, VisitResult, Visitor};
use crate::visitor_table::VisitorTable;

/// Maximum traversal depth. Subtrees below it are left untouched.
pub const DEFAULT_MAX_DEPTH: u32 = 500;

/// Counters for one or more walks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TransformStats {
    /// Nodes whose hooks ran
    pub visited: usize,
    /// Hook results that replaced a node
    pub replaced: usize,
}

impl std::ops::AddAssign for TransformStats {
    fn add_assign(&mut self, other: Self) {
        self.visited += other.visited;
        self.replaced += other.replaced;
    }
}

/// Runs transformers over syntax trees, one stage at a time.
#[derive(Debug, Clone)]
pub struct TransformersRunner {
    table: VisitorTable,
    max_depth: u32,
}

impl TransformersRunner {
    /// Runner for the given transformers, invoked in the given order.
    pub fn new(transformers: impl IntoIterator<Item = TransformerName>) -> Self {
        TransformersRunner {
            table: VisitorTable::new(transformers),
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    #[must_use]
    pub fn with_max_depth(mut self, max_depth: u32) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Walk `root` once, running the hooks active during `stage`.
    #[tracing::instrument(level = "debug", skip_all, fields(stage = %stage))]
    pub fn transform(&self, root: &mut Node, stage: TransformationStage) -> TransformStats {
        let visitors = self.table.visitors(stage);
        if visitors.is_empty() {
            tracing::debug!("no transformer active, skipping walk");
            return TransformStats::default();
        }

        let mut walk = Walk {
            visitors,
            max_depth: self.max_depth,
            depth: 0,
            depth_limit_hit: false,
            stats: TransformStats::default(),
        };
        walk.visit(root, None);

        tracing::debug!(
            visited = walk.stats.visited,
            replaced = walk.stats.replaced,
            "stage walk finished"
        );
        walk.stats
    }

    /// Run `stages` in the order given.
    pub fn run_stages(&self, root: &mut Node, stages: &[TransformationStage]) -> TransformStats {
        let mut total = TransformStats::default();
        for &stage in stages {
            total += self.transform(root, stage);
        }
        total
    }

    /// Run every stage in pipeline order.
    pub fn run_all_stages(&self, root: &mut Node) -> TransformStats {
        self.run_stages(root, &TransformationStage::ALL)
    }
}

struct Walk<'a> {
    visitors: &'a [(TransformerName, Visitor)],
    max_depth: u32,
    depth: u32,
    depth_limit_hit: bool,
    stats: TransformStats,
}

impl Walk<'_> {
    fn visit(&mut self, node: &mut Node, parent: Option<NodeKind>) {
        if self.depth >= self.max_depth {
            if !self.depth_limit_hit {
                self.depth_limit_hit = true;
                tracing::warn!(
                    max_depth = self.max_depth,
                    "syntax tree exceeds traversal depth, deeper nodes left unchanged"
                );
            }
            return;
        }
        self.depth += 1;
        self.stats.visited += 1;

        let visitors = self.visitors;
        for (name, visitor) in visitors {
            if let Some(hook) = visitor.enter_hook() {
                self.apply(*name, hook, node, parent);
            }
        }

        let kind = node.kind();
        for child in node.children_mut() {
            self.visit(child, Some(kind));
        }

        for (name, visitor) in visitors {
            if let Some(hook) = visitor.leave_hook() {
                self.apply(*name, hook, node, parent);
            }
        }

        self.depth -= 1;
    }

    fn apply(
        &mut self,
        name: TransformerName,
        hook: Hook,
        node: &mut Node,
        parent: Option<NodeKind>,
    ) {
        if let VisitResult::Replace(replacement) = hook(node, parent) {
            tracing::trace!(
                transformer = %name,
                from = node.type_name(),
                to = replacement.type_name(),
                "node replaced"
            );
            *node = replacement;
            self.stats.replaced += 1;
        }
    }
}

#[cfg(test)]
#[path = "../tests/runner.rs"]
mod tests;
