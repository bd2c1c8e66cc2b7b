//! End-to-end scenario tests.
//!
//! Each test runs the full tick loop: mobility, signal feed, decision
//! engine, attachment controller, and trace output.

#![cfg(test)]

use std::fs;

use mobisim_common::config::{AlgorithmConfig, HandoverConfig};
use mobisim_common::{CellId, ScenarioConfig};
use mobisim_scenario::run_scenario;
use mobisim_scenario::trace::{HANDOVER_TRACE_FILE, RSRP_TRACE_FILE};

use crate::init_test_logging;

fn scenario_config(dir: &std::path::Path) -> ScenarioConfig {
    ScenarioConfig {
        output_dir: dir.join("results"),
        ..Default::default()
    }
}

/// E2E Test: default UMa drive-by handover
///
/// The UE starts near gNB 1 and drives past gNB 2. Exactly one handover
/// must complete, leaving the UE on cell 2, and the run summary must
/// account for every tick.
#[test]
fn test_e2e_default_drive_by() {
    init_test_logging();
    tracing::info!("========================================");
    tracing::info!("E2E Test: default UMa drive-by");
    tracing::info!("========================================");

    let dir = tempfile::tempdir().unwrap();
    let config = scenario_config(dir.path());

    let summary = run_scenario(&config, dir.path()).unwrap();

    assert_eq!(summary.completed, 1);
    assert_eq!(summary.decisions, 1);
    assert_eq!(summary.failed, 0);
    assert_eq!(summary.dropped_reports, 0);
    assert_eq!(summary.final_serving, Some(CellId::new(2)));
    assert_eq!(
        summary.reports,
        config.sim_duration_ms / config.report_interval_ms
    );
    assert_eq!(summary.packets_delivered, summary.reports);
}

/// E2E Test: trace files land in the results directory
#[test]
fn test_e2e_traces_collected() {
    init_test_logging();

    let dir = tempfile::tempdir().unwrap();
    let config = scenario_config(dir.path());

    let summary = run_scenario(&config, dir.path()).unwrap();

    let rsrp = fs::read_to_string(config.output_dir.join(RSRP_TRACE_FILE)).unwrap();
    let mut lines = rsrp.lines();
    assert_eq!(lines.next(), Some("time\tRSRP"));
    // header plus one row per report
    assert_eq!(lines.count() as u64, summary.reports);

    let handovers = fs::read_to_string(config.output_dir.join(HANDOVER_TRACE_FILE)).unwrap();
    let rows: Vec<&str> = handovers.lines().collect();
    assert_eq!(rows[0], "time\tue\tsource\ttarget\tevent");
    // one decision row and one completion row
    assert_eq!(rows.len(), 3);
    assert!(rows[1].ends_with("decision"));
    assert!(rows[2].ends_with("complete"));
    assert!(rows[1].contains("cell-1\tcell-2"));
}

/// E2E Test: replaying the same configuration reproduces the summary
#[test]
fn test_e2e_runs_are_reproducible() {
    init_test_logging();

    let dir_a = tempfile::tempdir().unwrap();
    let dir_b = tempfile::tempdir().unwrap();
    let mut config_a = scenario_config(dir_a.path());
    let mut config_b = scenario_config(dir_b.path());
    // seeded jitter: identical seeds must give identical runs
    let jitter = mobisim_common::JitterConfig {
        seed: 42,
        amplitude_db: 0.5,
    };
    config_a.jitter = Some(jitter);
    config_b.jitter = Some(jitter);

    let a = run_scenario(&config_a, dir_a.path()).unwrap();
    let b = run_scenario(&config_b, dir_b.path()).unwrap();
    assert_eq!(a, b);
}

/// E2E Test: absolute-threshold variant drives the same corridor
#[test]
fn test_e2e_absolute_threshold_variant() {
    init_test_logging();

    let dir = tempfile::tempdir().unwrap();
    let mut config = scenario_config(dir.path());
    config.handover = HandoverConfig {
        time_to_trigger_ms: 0,
        algorithm: AlgorithmConfig::AbsoluteThreshold {
            serving_threshold_dbm: -70.0,
            neighbour_offset_db: 5.0,
        },
    };

    let summary = run_scenario(&config, dir.path()).unwrap();
    assert_eq!(summary.completed, 1);
    assert_eq!(summary.final_serving, Some(CellId::new(2)));
}

/// E2E Test: a faster UE still completes exactly one handover
#[test]
fn test_e2e_faster_ue() {
    init_test_logging();

    let dir = tempfile::tempdir().unwrap();
    let mut config = scenario_config(dir.path());
    config.mobility.speed_mps = 30.0;
    config.sim_duration_ms = 4_000;

    let summary = run_scenario(&config, dir.path()).unwrap();
    assert_eq!(summary.completed, 1);
    assert_eq!(summary.final_serving, Some(CellId::new(2)));
}

/// E2E Test: misconfiguration refuses to start
#[test]
fn test_e2e_misconfiguration_is_fatal() {
    init_test_logging();

    let dir = tempfile::tempdir().unwrap();
    let mut config = scenario_config(dir.path());
    config.handover.algorithm = AlgorithmConfig::RelativeMargin {
        hysteresis_db: -3.0,
    };

    assert!(run_scenario(&config, dir.path()).is_err());
}
