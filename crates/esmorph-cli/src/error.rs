use std::path::PathBuf;

/// Failures surfaced by the command-line driver.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("failed to read {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON in {origin}")]
    Json {
        origin: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to serialize syntax tree")]
    Serialize(#[source] serde_json::Error),

    #[error("unknown stage `{0}`")]
    UnknownStage(String),

    #[error("unknown transformer `{0}`")]
    UnknownTransformer(String),
}
