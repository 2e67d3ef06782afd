use std::path::PathBuf;

use slipstream_core::prelude::UnknownScenarioError;

/// Errors raised while loading the workload definition source.
#[derive(Debug, thiserror::Error)]
pub enum WorkloadSourceError {
    #[error("failed to read workload definitions from {}: {}", path.display(), source)]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed workload definitions in {}: {}", path.display(), source)]
    Definition {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

/// Errors surfaced while interpreting the harness command line.
///
/// Every variant is fatal to the parse. The offending token or value is
/// carried so the message can be shown to the invoking user as-is; no partial
/// configuration is ever returned alongside one of these.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("unsupported browser: {name}")]
    UnsupportedBrowser { name: String },

    #[error(transparent)]
    UnknownScenario(#[from] UnknownScenarioError),

    #[error("unknown workload: {name}")]
    UnknownWorkload { name: String },

    #[error("unknown measure set: {name}")]
    UnknownMeasureSet { name: String },

    #[error("flag {flag} expects a value but none was supplied")]
    MissingValue { flag: String },

    #[error("flag {flag} expects a positive integer, got '{value}'")]
    InvalidNumber { flag: String, value: String },

    #[error("unrecognized argument: {token}")]
    UnrecognizedArgument { token: String },

    #[error("path is not an existing directory: {}", path.display())]
    InvalidPath { path: PathBuf },

    #[error("failed to prepare trace output directory {}: {}", path.display(), source)]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid combination of trace capture and measure sets: {reason}")]
    ValidationConflict { reason: String },
}
