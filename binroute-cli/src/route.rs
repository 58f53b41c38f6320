//! Route command implementation for the binroute CLI.

use std::io::Write;

use binroute_core::{CollectionRoute, ContainerStatus, Planner, RouteQuery};
use binroute_data::SnapshotStore;
use binroute_planner::{
    CandidateFilter, GreedyPlanner, GreedyPlannerConfig, OverflowPolicy, ProximityScorer,
    ScoreWeights, WeightedScorer,
};
use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use log::warn;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::{
    ARG_DISTANCE_WEIGHT, ARG_EXCLUDE_STATUS, ARG_FILL_WEIGHT, ARG_MIN_FILL, ARG_OVERFLOW,
    ARG_SCORER, ARG_SNAPSHOT, ARG_STATUS_WEIGHT, ARG_TRASH_TYPE, ARG_TRUCK, ARG_ZONE, CliError,
    ENV_SNAPSHOT, ENV_TRASH_TYPE, ENV_TRUCK,
};

/// CLI arguments for the `route` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Plan a collection route for one truck. Select the truck by \
                 id, or by zone and trash type. Containers are filtered by \
                 zone, trash type, status and fill level, then collected \
                 greedily by score until the truck is full.",
    about = "Plan a collection route"
)]
#[ortho_config(prefix = "BINROUTE")]
pub(crate) struct RouteArgs {
    /// Path to the JSON fleet snapshot.
    #[arg(long = ARG_SNAPSHOT, value_name = "path")]
    #[serde(default)]
    pub(crate) snapshot: Option<Utf8PathBuf>,
    /// Identifier of the truck to plan for.
    #[arg(long = ARG_TRUCK, value_name = "id")]
    #[serde(default)]
    pub(crate) truck: Option<u64>,
    /// Zone to plan for; requires --trash-type.
    #[arg(long = ARG_ZONE, value_name = "zone")]
    #[serde(default)]
    pub(crate) zone: Option<String>,
    /// Trash type to collect (mixed, plastic, paper, glass).
    #[arg(long = ARG_TRASH_TYPE, value_name = "type")]
    #[serde(default)]
    pub(crate) trash_type: Option<String>,
    /// Scoring strategy: `weighted` (default) or `proximity`.
    #[arg(long = ARG_SCORER, value_name = "name")]
    #[serde(default)]
    pub(crate) scorer: Option<String>,
    /// Weight of the fill percentage in the weighted score.
    #[arg(long = ARG_FILL_WEIGHT, value_name = "weight")]
    #[serde(default)]
    pub(crate) fill_weight: Option<f64>,
    /// Weight of proximity in the weighted score.
    #[arg(long = ARG_DISTANCE_WEIGHT, value_name = "weight")]
    #[serde(default)]
    pub(crate) distance_weight: Option<f64>,
    /// Weight of the status bonus in the weighted score.
    #[arg(long = ARG_STATUS_WEIGHT, value_name = "weight")]
    #[serde(default)]
    pub(crate) status_weight: Option<f64>,
    /// Minimum fill percentage, or `none` to consider every container.
    #[arg(long = ARG_MIN_FILL, value_name = "percent|none")]
    #[serde(default)]
    pub(crate) min_fill: Option<String>,
    /// Comma-separated statuses to skip (default: fire).
    #[arg(long = ARG_EXCLUDE_STATUS, value_name = "statuses", value_delimiter = ',')]
    #[serde(default)]
    pub(crate) exclude_status: Option<Vec<String>>,
    /// What to do when the truck is full: `stop` or `return-to-depot`.
    #[arg(long = ARG_OVERFLOW, value_name = "policy")]
    #[serde(default)]
    pub(crate) overflow: Option<String>,
}

impl RouteArgs {
    pub(crate) fn into_config(self) -> Result<RouteConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        RouteConfig::try_from(merged)
    }
}

/// Scoring strategy selected on the command line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum ScorerChoice {
    Weighted(ScoreWeights),
    Proximity,
}

/// Resolved `route` command configuration.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct RouteConfig {
    /// Path to the fleet snapshot.
    pub(crate) snapshot: Utf8PathBuf,
    /// Which truck to plan for.
    pub(crate) query: RouteQuery,
    /// Scoring strategy.
    pub(crate) scorer: ScorerChoice,
    /// Filter and overflow settings.
    pub(crate) planner: GreedyPlannerConfig,
}

impl RouteConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        let path: &Utf8Path = &self.snapshot;
        match binroute_data::fs::file_is_file(path) {
            Ok(true) => Ok(()),
            Ok(false) if path.exists() => Err(CliError::SourcePathNotFile {
                field: ARG_SNAPSHOT,
                path: path.to_path_buf(),
            }),
            Ok(false) => Err(CliError::MissingSourceFile {
                field: ARG_SNAPSHOT,
                path: path.to_path_buf(),
            }),
            Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
                Err(CliError::MissingSourceFile {
                    field: ARG_SNAPSHOT,
                    path: path.to_path_buf(),
                })
            }
            Err(source) => Err(CliError::InspectSourcePath {
                field: ARG_SNAPSHOT,
                path: path.to_path_buf(),
                source,
            }),
        }
    }
}

impl TryFrom<RouteArgs> for RouteConfig {
    type Error = CliError;

    fn try_from(args: RouteArgs) -> Result<Self, Self::Error> {
        let snapshot = args.snapshot.clone().ok_or(CliError::MissingArgument {
            field: ARG_SNAPSHOT,
            env: ENV_SNAPSHOT,
        })?;
        let query = resolve_query(&args)?;
        let scorer = resolve_scorer(&args)?;
        let planner = GreedyPlannerConfig {
            filter: resolve_filter(&args)?,
            overflow: args
                .overflow
                .as_deref()
                .map(str::parse::<OverflowPolicy>)
                .transpose()?
                .unwrap_or_default(),
        };
        Ok(Self {
            snapshot,
            query,
            scorer,
            planner,
        })
    }
}

fn resolve_query(args: &RouteArgs) -> Result<RouteQuery, CliError> {
    match (args.truck, args.zone.as_deref()) {
        (Some(_), Some(_)) => Err(CliError::ConflictingArguments {
            first: ARG_TRUCK,
            second: ARG_ZONE,
        }),
        (Some(truck_id), None) => Ok(RouteQuery::for_truck_named(
            truck_id,
            args.trash_type.as_deref(),
        )?),
        (None, Some(zone)) => {
            let trash_type = args.trash_type.as_deref().ok_or(CliError::MissingArgument {
                field: ARG_TRASH_TYPE,
                env: ENV_TRASH_TYPE,
            })?;
            Ok(RouteQuery::for_zone_named(zone, trash_type)?)
        }
        (None, None) => Err(CliError::MissingArgument {
            field: ARG_TRUCK,
            env: ENV_TRUCK,
        }),
    }
}

fn resolve_scorer(args: &RouteArgs) -> Result<ScorerChoice, CliError> {
    let name = args.scorer.as_deref().unwrap_or("weighted");
    let has_weights = args.fill_weight.is_some()
        || args.distance_weight.is_some()
        || args.status_weight.is_some();
    match name.trim().to_ascii_lowercase().as_str() {
        "weighted" => {
            let defaults = ScoreWeights::default();
            let weights = ScoreWeights::new(
                args.fill_weight.unwrap_or(defaults.fill()),
                args.distance_weight.unwrap_or(defaults.distance()),
                args.status_weight.unwrap_or(defaults.status()),
            )?;
            Ok(ScorerChoice::Weighted(weights))
        }
        "proximity" => {
            if has_weights {
                warn!("scoring weights are ignored by the proximity scorer");
            }
            Ok(ScorerChoice::Proximity)
        }
        _ => Err(CliError::UnknownScorer {
            value: name.to_owned(),
        }),
    }
}

fn resolve_filter(args: &RouteArgs) -> Result<CandidateFilter, CliError> {
    let mut filter = min_fill_filter(args.min_fill.as_deref())?;
    if let Some(statuses) = &args.exclude_status {
        let parsed = statuses
            .iter()
            .map(String::as_str)
            .map(str::trim)
            .filter(|status| !status.is_empty())
            .map(str::parse::<ContainerStatus>)
            .collect::<Result<Vec<_>, _>>()?;
        filter = filter.excluding(parsed);
    }
    Ok(filter)
}

fn min_fill_filter(value: Option<&str>) -> Result<CandidateFilter, CliError> {
    let filter = CandidateFilter::default();
    let Some(text) = value.map(str::trim) else {
        return Ok(filter);
    };
    if text.eq_ignore_ascii_case("none") || text.eq_ignore_ascii_case("off") {
        return Ok(filter.without_min_fill());
    }
    text.parse::<f64>()
        .ok()
        .and_then(|percent| filter.with_min_fill(percent).ok())
        .ok_or_else(|| CliError::InvalidMinFill {
            value: text.to_owned(),
        })
}

/// Builds a planner for the current route invocation.
pub(super) trait RoutePlannerBuilder {
    fn build(&self, config: &RouteConfig) -> Result<Box<dyn Planner>, CliError>;
}

/// Builds planners over a file-backed fleet snapshot.
pub(super) struct SnapshotPlannerBuilder;

impl RoutePlannerBuilder for SnapshotPlannerBuilder {
    fn build(&self, config: &RouteConfig) -> Result<Box<dyn Planner>, CliError> {
        let store = SnapshotStore::open(&config.snapshot)?;
        let planner_config = config.planner.clone();
        Ok(match config.scorer {
            ScorerChoice::Weighted(weights) => Box::new(GreedyPlanner::with_config(
                store.clone(),
                store,
                WeightedScorer::new(weights),
                planner_config,
            )),
            ScorerChoice::Proximity => Box::new(GreedyPlanner::with_config(
                store.clone(),
                store,
                ProximityScorer,
                planner_config,
            )),
        })
    }
}

pub(super) fn run_route(args: RouteArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_route_with(args, &SnapshotPlannerBuilder, &mut stdout)
}

pub(super) fn run_route_with(
    args: RouteArgs,
    builder: &dyn RoutePlannerBuilder,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let config = args.into_config()?;
    let route = execute_route(&config, builder)?;
    write_route(writer, &route)
}

pub(super) fn execute_route(
    config: &RouteConfig,
    builder: &dyn RoutePlannerBuilder,
) -> Result<CollectionRoute, CliError> {
    config.validate_sources()?;
    let planner = builder.build(config)?;
    Ok(planner.plan(&config.query)?)
}

fn write_route(writer: &mut dyn Write, route: &CollectionRoute) -> Result<(), CliError> {
    let payload = serde_json::to_string_pretty(route).map_err(CliError::SerialiseRoute)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteRouteOutput)?;
    writer.write_all(b"\n").map_err(CliError::WriteRouteOutput)?;
    Ok(())
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<RouteConfig, CliError> {
    let merged = RouteArgs::merge_from_layers(layers).map_err(CliError::from)?;
    RouteConfig::try_from(merged)
}
