//! Focused unit tests covering route CLI configuration.

use super::helpers::{Workspace, truck_args, write_utf8};
use super::*;
use crate::route::{RouteArgs, RouteConfig, ScorerChoice, config_from_layers_for_test};
use binroute_core::{ContainerStatus, PlanError, RouteQuery, TrashType, ZoneId};
use binroute_planner::{OverflowPolicy, ScoreWeights};
use camino::Utf8PathBuf;
use rstest::rstest;

fn snapshot_path() -> Utf8PathBuf {
    Utf8PathBuf::from("fleet.json")
}

fn config_for(args: RouteArgs) -> Result<RouteConfig, CliError> {
    RouteConfig::try_from(args)
}

#[rstest]
fn converting_without_snapshot_errors() {
    let args = RouteArgs {
        truck: Some(1),
        ..RouteArgs::default()
    };
    let err = config_for(args).expect_err("missing snapshot should error");
    match err {
        CliError::MissingArgument { field, env } => {
            assert_eq!(field, ARG_SNAPSHOT);
            assert_eq!(env, ENV_SNAPSHOT);
        }
        other => panic!("expected MissingArgument, found {other:?}"),
    }
}

#[rstest]
fn converting_without_truck_or_zone_errors() {
    let args = RouteArgs {
        snapshot: Some(snapshot_path()),
        ..RouteArgs::default()
    };
    let err = config_for(args).expect_err("missing selector should error");
    match err {
        CliError::MissingArgument { field, env } => {
            assert_eq!(field, ARG_TRUCK);
            assert_eq!(env, ENV_TRUCK);
        }
        other => panic!("expected MissingArgument, found {other:?}"),
    }
}

#[rstest]
fn truck_and_zone_conflict() {
    let args = RouteArgs {
        zone: Some("centre".to_owned()),
        ..truck_args(snapshot_path())
    };
    let err = config_for(args).expect_err("conflicting selectors should error");
    assert!(matches!(
        err,
        CliError::ConflictingArguments {
            first: ARG_TRUCK,
            second: ARG_ZONE
        }
    ));
}

#[rstest]
fn zone_requires_trash_type() {
    let args = RouteArgs {
        snapshot: Some(snapshot_path()),
        zone: Some("centre".to_owned()),
        ..RouteArgs::default()
    };
    let err = config_for(args).expect_err("zone without type should error");
    match err {
        CliError::MissingArgument { field, env } => {
            assert_eq!(field, ARG_TRASH_TYPE);
            assert_eq!(env, ENV_TRASH_TYPE);
        }
        other => panic!("expected MissingArgument, found {other:?}"),
    }
}

#[rstest]
fn defaults_match_production_behaviour() {
    let config = config_for(truck_args(snapshot_path())).expect("config should build");
    assert_eq!(
        config.query,
        RouteQuery::Truck {
            truck_id: 1,
            trash_type: None,
        }
    );
    assert_eq!(config.scorer, ScorerChoice::Weighted(ScoreWeights::default()));
    assert_eq!(config.planner.overflow, OverflowPolicy::Stop);
    assert_eq!(config.planner.filter.min_fill(), Some(40.0));
    assert_eq!(config.planner.filter.excluded_statuses(), &[ContainerStatus::Fire]);
}

#[rstest]
fn zone_query_is_built_from_zone_and_type() {
    let args = RouteArgs {
        snapshot: Some(snapshot_path()),
        zone: Some("centre".to_owned()),
        trash_type: Some("Glass".to_owned()),
        ..RouteArgs::default()
    };
    let config = config_for(args).expect("config should build");
    assert_eq!(
        config.query,
        RouteQuery::Zone {
            zone: ZoneId::from("centre"),
            trash_type: TrashType::Glass,
        }
    );
}

#[rstest]
fn unknown_trash_type_fails_fast() {
    let args = RouteArgs {
        trash_type: Some("metal".to_owned()),
        ..truck_args(snapshot_path())
    };
    let err = config_for(args).expect_err("unknown trash type should error");
    assert!(matches!(err, CliError::Plan(PlanError::InvalidTrashType(_))));
}

#[rstest]
#[case(Some("none"), None)]
#[case(Some("OFF"), None)]
#[case(Some("55"), Some(55.0))]
#[case(Some(" 0 "), Some(0.0))]
#[case(None, Some(40.0))]
fn min_fill_is_parsed(#[case] text: Option<&str>, #[case] expected: Option<f64>) {
    let args = RouteArgs {
        min_fill: text.map(str::to_owned),
        ..truck_args(snapshot_path())
    };
    let config = config_for(args).expect("config should build");
    assert_eq!(config.planner.filter.min_fill(), expected);
}

#[rstest]
#[case("150")]
#[case("-1")]
#[case("half")]
#[case("NaN")]
#[case("inf")]
fn invalid_min_fill_is_rejected(#[case] text: &str) {
    let args = RouteArgs {
        min_fill: Some(text.to_owned()),
        ..truck_args(snapshot_path())
    };
    let err = config_for(args).expect_err("invalid min fill should error");
    assert!(matches!(err, CliError::InvalidMinFill { ref value } if value == text));
}

#[rstest]
fn excluded_statuses_replace_the_default() {
    let args = RouteArgs {
        exclude_status: Some(vec!["offline".to_owned(), " damaged".to_owned()]),
        ..truck_args(snapshot_path())
    };
    let config = config_for(args).expect("config should build");
    assert_eq!(
        config.planner.filter.excluded_statuses(),
        &[ContainerStatus::Offline, ContainerStatus::Damaged]
    );
}

#[rstest]
fn empty_exclusion_list_allows_every_status() {
    let args = RouteArgs {
        exclude_status: Some(vec![String::new()]),
        ..truck_args(snapshot_path())
    };
    let config = config_for(args).expect("config should build");
    assert!(config.planner.filter.excluded_statuses().is_empty());
}

#[rstest]
fn unknown_status_is_rejected() {
    let args = RouteArgs {
        exclude_status: Some(vec!["melted".to_owned()]),
        ..truck_args(snapshot_path())
    };
    let err = config_for(args).expect_err("unknown status should error");
    assert!(matches!(err, CliError::InvalidStatus(_)));
}

#[rstest]
#[case("stop", OverflowPolicy::Stop)]
#[case("return-to-depot", OverflowPolicy::ReturnToDepot)]
fn overflow_policy_is_parsed(#[case] text: &str, #[case] expected: OverflowPolicy) {
    let args = RouteArgs {
        overflow: Some(text.to_owned()),
        ..truck_args(snapshot_path())
    };
    let config = config_for(args).expect("config should build");
    assert_eq!(config.planner.overflow, expected);
}

#[rstest]
fn unknown_overflow_policy_is_rejected() {
    let args = RouteArgs {
        overflow: Some("spill".to_owned()),
        ..truck_args(snapshot_path())
    };
    let err = config_for(args).expect_err("unknown policy should error");
    assert!(matches!(err, CliError::InvalidOverflowPolicy(_)));
}

#[rstest]
fn explicit_weights_are_validated() {
    let args = RouteArgs {
        fill_weight: Some(0.5),
        distance_weight: Some(0.5),
        status_weight: Some(0.0),
        ..truck_args(snapshot_path())
    };
    let config = config_for(args).expect("config should build");
    let expected = ScoreWeights::new(0.5, 0.5, 0.0).expect("valid weights");
    assert_eq!(config.scorer, ScorerChoice::Weighted(expected));

    let args = RouteArgs {
        fill_weight: Some(0.9),
        ..truck_args(snapshot_path())
    };
    let err = config_for(args).expect_err("weights summing above one should error");
    assert!(matches!(err, CliError::InvalidWeights(_)));
}

#[rstest]
#[case("proximity", true)]
#[case("Weighted", true)]
#[case("random", false)]
fn scorer_names_are_recognised(#[case] name: &str, #[case] known: bool) {
    let args = RouteArgs {
        scorer: Some(name.to_owned()),
        ..truck_args(snapshot_path())
    };
    let result = config_for(args);
    if known {
        assert!(result.is_ok(), "{name} should be accepted");
    } else {
        assert!(matches!(result, Err(CliError::UnknownScorer { .. })));
    }
}

#[rstest]
fn validate_sources_reports_missing_snapshot() {
    let workspace = Workspace::new();
    let config = config_for(truck_args(workspace.root().join("absent.json")))
        .expect("config should build");
    let err = config.validate_sources().expect_err("missing snapshot");
    match err {
        CliError::MissingSourceFile { field, .. } => assert_eq!(field, ARG_SNAPSHOT),
        other => panic!("expected MissingSourceFile, found {other:?}"),
    }
}

#[rstest]
fn validate_sources_reports_not_file() {
    let workspace = Workspace::new();
    let directory = workspace.root().join("fleet.json");
    std::fs::create_dir(&directory).expect("snapshot directory");
    let config = config_for(truck_args(directory.clone())).expect("config should build");
    let err = config.validate_sources().expect_err("directory snapshot");
    match err {
        CliError::SourcePathNotFile { field, path } => {
            assert_eq!(field, ARG_SNAPSHOT);
            assert_eq!(path, directory);
        }
        other => panic!("expected SourcePathNotFile, found {other:?}"),
    }
}

#[rstest]
fn validate_sources_accepts_existing_file() {
    let workspace = Workspace::new();
    let path = workspace.snapshot();
    write_utf8(&path, b"{}");
    let config = config_for(truck_args(path)).expect("config should build");
    assert!(config.validate_sources().is_ok());
}

#[rstest]
fn merge_layers_maps_configuration_errors() {
    use ortho_config::MergeComposer;
    use serde_json::json;

    let mut composer = MergeComposer::new();
    composer.push_cli(json!({ "truck": "first" }));

    let err = config_from_layers_for_test(composer.layers())
        .expect_err("invalid config layer should map to CliError::Configuration");
    match err {
        CliError::Configuration(_) => {}
        other => panic!("expected CliError::Configuration, found {other:?}"),
    }
}

#[rstest]
fn merge_layers_honours_precedence() {
    use ortho_config::MergeComposer;
    use serde_json::json;

    let mut composer = MergeComposer::new();
    composer.push_file(
        json!({
            "snapshot": "from-file.json",
            "truck": 2,
            "overflow": "return-to-depot",
        }),
        None,
    );
    composer.push_environment(json!({
        "snapshot": "from-env.json",
        "min_fill": "none",
    }));
    composer.push_cli(json!({ "truck": 3 }));

    let config =
        config_from_layers_for_test(composer.layers()).expect("merged config should build");
    assert_eq!(config.snapshot, Utf8PathBuf::from("from-env.json"));
    assert_eq!(
        config.query,
        RouteQuery::Truck {
            truck_id: 3,
            trash_type: None,
        }
    );
    assert_eq!(config.planner.overflow, OverflowPolicy::ReturnToDepot);
    assert_eq!(config.planner.filter.min_fill(), None);
}
