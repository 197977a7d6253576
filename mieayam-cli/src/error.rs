//! Error types emitted by the mie ayam CLI.
//!
//! Keep this error type reasonably small, as every command helper returns
//! `Result<_, CliError>`.

use std::sync::Arc;

use camino::Utf8PathBuf;
use mieayam_scorer::{BatchScoringError, WeightsError};
use thiserror::Error;

/// Errors emitted by the mie ayam CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (set --{field} or {env})")]
    MissingArgument {
        field: &'static str,
        env: &'static str,
    },
    /// A referenced input path does not exist on disk.
    #[error("{field} path {path:?} does not exist")]
    MissingSourceFile {
        field: &'static str,
        path: Utf8PathBuf,
    },
    /// A referenced input path exists but is not a file.
    #[error("{field} path {path:?} exists but is not a file")]
    SourcePathNotFile {
        field: &'static str,
        path: Utf8PathBuf,
    },
    /// A referenced input path could not be inspected due to an IO error.
    #[error("failed to inspect {field} path {path:?}: {source}")]
    InspectSourcePath {
        field: &'static str,
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Opening the reviews file failed.
    #[error("failed to open reviews at {path:?}: {source}")]
    OpenReviews {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The reviews file is not a JSON array of review records.
    #[error("failed to parse reviews JSON at {path:?}: {source}")]
    ParseReviews {
        path: Utf8PathBuf,
        #[source]
        source: serde_json::Error,
    },
    /// The scoring overrides produced unusable weights.
    #[error("invalid scoring weights: {0}")]
    InvalidWeights(#[from] WeightsError),
    /// A review could not be scored.
    #[error(transparent)]
    Score(#[from] BatchScoringError),
    /// No review carries the requested anchor id.
    #[error("no review with id {id} in {path:?}")]
    UnknownAnchor { id: u64, path: Utf8PathBuf },
    /// Serialising the command output failed.
    #[error("failed to serialise output: {0}")]
    SerialiseOutput(#[source] serde_json::Error),
    /// Writing the command output failed.
    #[error("failed to write output: {0}")]
    WriteOutput(#[source] std::io::Error),
}
