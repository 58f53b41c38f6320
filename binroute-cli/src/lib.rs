//! Command-line interface for planning collection routes.
//!
//! `binroute route` loads a fleet snapshot, plans a route for one truck (by
//! id, or by zone and trash type) and prints it as JSON. Options can come
//! from CLI flags, configuration files or `BINROUTE_*` environment
//! variables.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};

mod error;
mod route;

pub use error::CliError;

use route::RouteArgs;

const ARG_SNAPSHOT: &str = "snapshot";
const ARG_TRUCK: &str = "truck";
const ARG_ZONE: &str = "zone";
const ARG_TRASH_TYPE: &str = "trash-type";
const ARG_SCORER: &str = "scorer";
const ARG_FILL_WEIGHT: &str = "fill-weight";
const ARG_DISTANCE_WEIGHT: &str = "distance-weight";
const ARG_STATUS_WEIGHT: &str = "status-weight";
const ARG_MIN_FILL: &str = "min-fill";
const ARG_EXCLUDE_STATUS: &str = "exclude-status";
const ARG_OVERFLOW: &str = "overflow";
const ENV_SNAPSHOT: &str = "BINROUTE_CMDS_ROUTE_SNAPSHOT";
const ENV_TRUCK: &str = "BINROUTE_CMDS_ROUTE_TRUCK";
const ENV_TRASH_TYPE: &str = "BINROUTE_CMDS_ROUTE_TRASH_TYPE";

/// Run the binroute CLI with the current process arguments and environment.
///
/// # Errors
///
/// Returns a [`CliError`] when arguments are invalid, the snapshot cannot be
/// loaded, planning fails or the route cannot be written to stdout.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Route(args) => route::run_route(args),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "binroute",
    about = "Plan capacity-aware collection routes for waste trucks",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Plan a route for one truck from a fleet snapshot.
    Route(RouteArgs),
}

#[cfg(test)]
mod tests;
