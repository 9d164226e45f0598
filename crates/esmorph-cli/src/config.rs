//! Pipeline configuration.
//!
//! ```json
//! {
//!   "stages": ["converting"],
//!   "disabledTransformers": ["MemberExpressionTransformer"],
//!   "maxDepth": 500
//! }
//! ```
//!
//! Every field is optional. Command-line flags are applied on top of the file.

use std::path::Path;

use esmorph_transforms::{
    DEFAULT_MAX_DEPTH, TransformationStage, TransformerName, TransformersRunner,
};
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::args::CliArgs;
use crate::error::CliError;

/// Configuration file contents before name resolution.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct ConfigFile {
    pub stages: Option<Vec<String>>,
    pub disabled_transformers: Vec<String>,
    pub max_depth: Option<u32>,
}

/// Resolved pipeline settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineConfig {
    /// Stages to run, deduplicated and in pipeline order.
    pub stages: Vec<TransformationStage>,
    pub disabled: FxHashSet<TransformerName>,
    pub max_depth: u32,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        PipelineConfig {
            stages: TransformationStage::ALL.to_vec(),
            disabled: FxHashSet::default(),
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl PipelineConfig {
    /// Load and resolve a configuration file.
    pub fn load(path: &Path) -> Result<Self, CliError> {
        let text = std::fs::read_to_string(path).map_err(|source| CliError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&text, &path.display().to_string())
    }

    /// Parse configuration JSON; `origin` names the source in errors.
    pub fn from_json_str(text: &str, origin: &str) -> Result<Self, CliError> {
        let file: ConfigFile = serde_json::from_str(text).map_err(|source| CliError::Json {
            origin: origin.to_string(),
            source,
        })?;
        Self::from_file(file)
    }

    pub fn from_file(file: ConfigFile) -> Result<Self, CliError> {
        let mut config = Self::default();
        if let Some(stages) = file.stages {
            config.stages = resolve_stages(&stages)?;
        }
        config.disable(&file.disabled_transformers)?;
        if let Some(max_depth) = file.max_depth {
            config.max_depth = max_depth;
        }
        Ok(config)
    }

    /// Apply command-line overrides.
    pub fn apply_args(&mut self, args: &CliArgs) -> Result<(), CliError> {
        if !args.stages.is_empty() {
            self.stages = resolve_stages(&args.stages)?;
        }
        self.disable(&args.disable)?;
        if let Some(max_depth) = args.max_depth {
            self.max_depth = max_depth;
        }
        Ok(())
    }

    /// Enabled transformers, in registration order.
    pub fn enabled_transformers(&self) -> Vec<TransformerName> {
        TransformerName::ALL
            .into_iter()
            .filter(|name| !self.disabled.contains(name))
            .collect()
    }

    pub fn runner(&self) -> TransformersRunner {
        TransformersRunner::new(self.enabled_transformers()).with_max_depth(self.max_depth)
    }

    fn disable(&mut self, names: &[String]) -> Result<(), CliError> {
        for name in names {
            let transformer = TransformerName::from_name(name)
                .ok_or_else(|| CliError::UnknownTransformer(name.clone()))?;
            self.disabled.insert(transformer);
        }
        Ok(())
    }
}

fn resolve_stages(names: &[String]) -> Result<Vec<TransformationStage>, CliError> {
    let mut stages = names
        .iter()
        .map(|name| {
            TransformationStage::from_name(name)
                .ok_or_else(|| CliError::UnknownStage(name.clone()))
        })
        .collect::<Result<Vec<_>, _>>()?;
    stages.sort_unstable();
    stages.dedup();
    Ok(stages)
}

#[cfg(test)]
#[path = "../tests/config.rs"]
mod tests;
