use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for the esmorph binary.
#[derive(Parser, Debug, Default)]
#[command(
    name = "esmorph",
    version,
    about = "Rewrite ESTree JSON syntax trees through staged node transformers"
)]
pub struct CliArgs {
    /// ESTree JSON file to transform. Reads stdin when absent or `-`.
    pub input: Option<PathBuf>,

    /// Write the rewritten tree here instead of stdout.
    #[arg(short = 'o', long)]
    pub output: Option<PathBuf>,

    /// Path to an esmorph JSON configuration file.
    #[arg(short = 'c', long)]
    pub config: Option<PathBuf>,

    /// Run only this stage (repeatable). Overrides the configured stages.
    #[arg(long = "stage", value_name = "STAGE")]
    pub stages: Vec<String>,

    /// Disable a transformer by name (repeatable).
    #[arg(long = "disable", value_name = "TRANSFORMER")]
    pub disable: Vec<String>,

    /// Maximum traversal depth.
    #[arg(long = "max-depth", alias = "maxDepth")]
    pub max_depth: Option<u32>,

    /// Pretty-print the output JSON.
    #[arg(long)]
    pub pretty: bool,
}
