//! Read, transform, write.

use std::io::{Read, Write};
use std::path::Path;

use anyhow::{Context, Result};
use esmorph_ast::Node;
use esmorph_transforms::TransformStats;

use crate::args::CliArgs;
use crate::config::PipelineConfig;
use crate::error::CliError;

/// Run the pipeline described by `args`.
#[tracing::instrument(
    name = "esmorph",
    level = "info",
    skip_all,
    fields(input = %args.input.as_deref().unwrap_or(Path::new("-")).display())
)]
pub fn run(args: &CliArgs) -> Result<TransformStats> {
    let config = resolve_config(args)?;
    tracing::debug!(
        stages = ?config.stages,
        transformers = ?config.enabled_transformers(),
        max_depth = config.max_depth,
        "resolved pipeline"
    );

    let input = args.input.as_deref().filter(|path| *path != Path::new("-"));
    let mut tree = read_tree(input).context("failed to load syntax tree")?;

    let stats = transform_tree(&mut tree, &config);
    tracing::info!(
        visited = stats.visited,
        replaced = stats.replaced,
        "transformation finished"
    );

    write_tree(&tree, args.output.as_deref(), args.pretty)
        .context("failed to emit syntax tree")?;
    Ok(stats)
}

/// Configuration file (if any) with command-line overrides applied.
pub fn resolve_config(args: &CliArgs) -> Result<PipelineConfig> {
    let mut config = match &args.config {
        Some(path) => PipelineConfig::load(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => PipelineConfig::default(),
    };
    config.apply_args(args)?;
    Ok(config)
}

/// Run every configured stage over `tree`.
pub fn transform_tree(tree: &mut Node, config: &PipelineConfig) -> TransformStats {
    config.runner().run_stages(tree, &config.stages)
}

/// Parse an ESTree JSON tree; `origin` names the source in errors.
pub fn parse_tree(text: &str, origin: &str) -> Result<Node, CliError> {
    serde_json::from_str(text).map_err(|source| CliError::Json {
        origin: origin.to_string(),
        source,
    })
}

/// Read a tree from `input`, or stdin when `None`.
pub fn read_tree(input: Option<&Path>) -> Result<Node, CliError> {
    match input {
        Some(path) => {
            let text = std::fs::read_to_string(path).map_err(|source| CliError::Read {
                path: path.to_path_buf(),
                source,
            })?;
            parse_tree(&text, &path.display().to_string())
        }
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .map_err(|source| CliError::Read {
                    path: "<stdin>".into(),
                    source,
                })?;
            parse_tree(&text, "<stdin>")
        }
    }
}

/// Serialize a tree as JSON.
pub fn render_tree(tree: &Node, pretty: bool) -> Result<String, CliError> {
    let rendered = if pretty {
        serde_json::to_string_pretty(tree)
    } else {
        serde_json::to_string(tree)
    };
    rendered.map_err(CliError::Serialize)
}

/// Write a tree to `output`, or stdout when `None`.
pub fn write_tree(tree: &Node, output: Option<&Path>, pretty: bool) -> Result<(), CliError> {
    let mut rendered = render_tree(tree, pretty)?;
    rendered.push('\n');

    match output {
        Some(path) => std::fs::write(path, rendered).map_err(|source| CliError::Write {
            path: path.to_path_buf(),
            source,
        }),
        None => std::io::stdout()
            .lock()
            .write_all(rendered.as_bytes())
            .map_err(|source| CliError::Write {
                path: "<stdout>".into(),
                source,
            }),
    }
}

#[cfg(test)]
#[path = "../tests/driver.rs"]
mod tests;
