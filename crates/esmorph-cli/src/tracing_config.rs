//! Tracing configuration.
//!
//! Every run opens an `esmorph` span naming its input, and every stage walk opens a
//! `transform` span below it. Three output formats are selected by `ESMORPH_LOG_FORMAT`:
//!
//! - `tree`: hierarchical output via `tracing-tree`, events nested under their stage.
//!   Default when stderr is a terminal.
//! - `text`: flat `tracing-subscriber` lines with the span chain as a prefix.
//!   Default when stderr is redirected.
//! - `json`: one JSON object per event, carrying the current stage span
//!
//! ```bash
//! # Every node replacement, grouped under its stage
//! ESMORPH_LOG=trace ESMORPH_LOG_FORMAT=tree esmorph tree.json
//!
//! # Only the runner's per-stage summaries
//! ESMORPH_LOG="esmorph_transforms::runner=debug" esmorph tree.json
//! ```
//!
//! The subscriber is only initialised when `ESMORPH_LOG` (or `RUST_LOG`) is set.

use std::io::IsTerminal;

use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, Registry, fmt};

/// Tracing output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Flat text lines.
    Text,
    /// Hierarchical indented tree via `tracing-tree`.
    Tree,
    /// Newline-delimited JSON objects.
    Json,
}

impl LogFormat {
    /// Parse a `ESMORPH_LOG_FORMAT` value, ASCII case-insensitive.
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "text" => Some(Self::Text),
            "tree" => Some(Self::Tree),
            "json" => Some(Self::Json),
            _ => None,
        }
    }

    /// Explicit choice if it parses, otherwise `Tree` for a terminal and `Text` for
    /// a pipe or file.
    pub fn resolve(value: Option<&str>, stderr_is_terminal: bool) -> Self {
        value.and_then(Self::parse).unwrap_or(if stderr_is_terminal {
            Self::Tree
        } else {
            Self::Text
        })
    }

    fn from_env() -> Self {
        let value = std::env::var("ESMORPH_LOG_FORMAT").ok();
        Self::resolve(value.as_deref(), std::io::stderr().is_terminal())
    }
}

/// Build an `EnvFilter` from `ESMORPH_LOG`, falling back to `RUST_LOG`.
fn build_filter() -> EnvFilter {
    if let Ok(val) = std::env::var("ESMORPH_LOG") {
        EnvFilter::builder().parse_lossy(val)
    } else {
        EnvFilter::from_default_env()
    }
}

/// Initialise the global tracing subscriber.
///
/// Does nothing when neither `ESMORPH_LOG` nor `RUST_LOG` is set. All output goes
/// to stderr, since stdout carries the rewritten tree.
pub fn init_tracing() {
    let has_esmorph_log = std::env::var("ESMORPH_LOG").is_ok();
    let has_rust_log = std::env::var("RUST_LOG").is_ok();
    if !has_esmorph_log && !has_rust_log {
        return;
    }

    let filter = build_filter();

    match LogFormat::from_env() {
        LogFormat::Tree => {
            let tree_layer = tracing_tree::HierarchicalLayer::default()
                .with_indent_amount(2)
                .with_indent_lines(true)
                .with_targets(true)
                .with_bracketed_fields(true)
                .with_deferred_spans(true);

            Registry::default().with(filter).with(tree_layer).init();
        }
        LogFormat::Json => {
            let json_layer = fmt::layer()
                .json()
                .with_current_span(true)
                .with_span_list(false)
                .with_writer(std::io::stderr);

            Registry::default().with(filter).with(json_layer).init();
        }
        LogFormat::Text => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_target(false)
                .with_writer(std::io::stderr)
                .init();
        }
    }
}

#[cfg(test)]
#[path = "../tests/tracing_config.rs"]
mod tests;
