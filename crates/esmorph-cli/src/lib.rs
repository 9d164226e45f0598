//! Command-line driver for the esmorph rewrite pipeline.
//!
//! Reads an ESTree JSON syntax tree, runs the configured transformation stages
//! over it and writes the rewritten tree back out as JSON.

pub mod args;
pub mod config;
pub mod driver;
pub mod error;
pub mod tracing_config;

pub use error::CliError;
