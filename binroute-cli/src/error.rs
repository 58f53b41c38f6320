//! Error types emitted by the binroute CLI.
//!
//! Keep this error type reasonably small, as CLI helpers return
//! `Result<_, CliError>` and the workspace enables `clippy::result_large_err`.

use std::sync::Arc;

use binroute_core::{PlanError, UnknownContainerStatus};
use binroute_data::SnapshotError;
use binroute_planner::{ScoreWeightsError, UnknownOverflowPolicy};
use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors emitted by the binroute CLI.
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
        /// Flag name of the missing option.
        field: &'static str,
        /// Environment variable that can supply it.
        env: &'static str,
    },
    /// Two mutually exclusive options were both supplied.
    #[error("--{first} and --{second} cannot be used together")]
    ConflictingArguments {
        /// First option supplied.
        first: &'static str,
        /// Second option supplied.
        second: &'static str,
    },
    /// The scorer name is not recognised.
    #[error("unknown scorer `{value}` (expected `weighted` or `proximity`)")]
    UnknownScorer {
        /// Rejected scorer name.
        value: String,
    },
    /// The minimum fill is neither a percentage nor `none`.
    #[error("invalid minimum fill `{value}` (expected 0-100 or `none`)")]
    InvalidMinFill {
        /// Rejected value.
        value: String,
    },
    /// A container status in the exclusion list is not recognised.
    #[error(transparent)]
    InvalidStatus(#[from] UnknownContainerStatus),
    /// The overflow policy is not recognised.
    #[error(transparent)]
    InvalidOverflowPolicy(#[from] UnknownOverflowPolicy),
    /// The scoring weights are invalid.
    #[error("invalid scoring weights: {0}")]
    InvalidWeights(#[from] ScoreWeightsError),
    /// A referenced input path does not exist on disk.
    #[error("{field} path {path:?} does not exist")]
    MissingSourceFile {
        /// Flag naming the path.
        field: &'static str,
        /// Missing path.
        path: Utf8PathBuf,
    },
    /// A referenced input path exists but is not a file.
    #[error("{field} path {path:?} exists but is not a file")]
    SourcePathNotFile {
        /// Flag naming the path.
        field: &'static str,
        /// Offending path.
        path: Utf8PathBuf,
    },
    /// A referenced input path could not be inspected due to an IO error.
    #[error("failed to inspect {field} path {path:?}: {source}")]
    InspectSourcePath {
        /// Flag naming the path.
        field: &'static str,
        /// Path that could not be inspected.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// Loading the fleet snapshot failed.
    #[error("failed to load fleet snapshot: {0}")]
    LoadSnapshot(#[from] SnapshotError),
    /// The query was invalid or the planner could not read the fleet.
    #[error(transparent)]
    Plan(#[from] PlanError),
    /// Serialising the route failed.
    #[error("failed to serialise route: {0}")]
    SerialiseRoute(#[source] serde_json::Error),
    /// Writing the route output failed.
    #[error("failed to write route output: {0}")]
    WriteRouteOutput(#[source] std::io::Error),
}
