//! Stage-indexed visitor lookup.

use crate::stage::TransformationStage;
use crate::visitor::{TransformerName, Visitor};

/// Precomputed `(transformer, stage) -> Visitor` table.
///
/// Built once from the enabled transformers; lookup by stage is an array index.
/// Within a stage, visitors keep the order the transformers were registered in,
/// which is the order the runner invokes their hooks.
#[derive(Debug, Clone)]
pub struct VisitorTable {
    by_stage: [Vec<(TransformerName, Visitor)>; TransformationStage::COUNT],
}

impl VisitorTable {
    /// Build the table for `transformers`. Repeated names are registered once.
    pub fn new(transformers: impl IntoIterator<Item = TransformerName>) -> Self {
        let mut by_stage: [Vec<(TransformerName, Visitor)>; TransformationStage::COUNT] =
            std::array::from_fn(|_| Vec::new());
        let mut registered: Vec<TransformerName> = Vec::new();

        for name in transformers {
            if registered.contains(&name) {
                continue;
            }
            registered.push(name);

            let transformer = name.transformer();
            for stage in TransformationStage::ALL {
                if let Some(visitor) = transformer.visitor(stage) {
                    by_stage[stage.index()].push((name, visitor));
                }
            }
        }

        VisitorTable { by_stage }
    }

    /// Table with every known transformer enabled.
    pub fn with_all_transformers() -> Self {
        Self::new(TransformerName::ALL)
    }

    /// Visitors active during `stage`, in invocation order.
    #[inline]
    pub fn visitors(&self, stage: TransformationStage) -> &[(TransformerName, Visitor)] {
        &self.by_stage[stage.index()]
    }

    /// Visitor of one transformer for one stage.
    pub fn lookup(&self, name: TransformerName, stage: TransformationStage) -> Option<Visitor> {
        self.visitors(stage)
            .iter()
            .find(|(registered, _)| *registered == name)
            .map(|(_, visitor)| *visitor)
    }

    /// Whether any transformer is active during `stage`.
    pub fn is_active(&self, stage: TransformationStage) -> bool {
        !self.by_stage[stage.index()].is_empty()
    }
}

#[cfg(test)]
#[path = "../tests/visitor_table.rs"]
mod tests;
