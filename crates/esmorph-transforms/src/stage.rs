//! Pipeline stages.

use std::fmt;

/// Named phase of the rewrite pipeline, in execution order.
///
/// Each transformer is active during a subset of stages; see `NodeTransformer::visitor`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TransformationStage {
    Initializing,
    Preparing,
    DeadCodeInjection,
    ControlFlowFlattening,
    /// Lowers newer syntax into an equivalent older form.
    Converting,
    Obfuscating,
    Finalizing,
}

impl TransformationStage {
    pub const COUNT: usize = 7;

    /// Every stage, in pipeline order.
    pub const ALL: [Self; Self::COUNT] = [
        Self::Initializing,
        Self::Preparing,
        Self::DeadCodeInjection,
        Self::ControlFlowFlattening,
        Self::Converting,
        Self::Obfuscating,
        Self::Finalizing,
    ];

    /// Position in `ALL`.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Name used in configuration files and on the command line.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Initializing => "initializing",
            Self::Preparing => "preparing",
            Self::DeadCodeInjection => "deadCodeInjection",
            Self::ControlFlowFlattening => "controlFlowFlattening",
            Self::Converting => "converting",
            Self::Obfuscating => "obfuscating",
            Self::Finalizing => "finalizing",
        }
    }

    /// Inverse of `as_str`, ASCII case-insensitive.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|stage| stage.as_str().eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for TransformationStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
