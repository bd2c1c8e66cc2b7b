//! Handover decision engine.
//!
//! The engine tracks one trigger state machine per UE. A trigger moves
//! through three states:
//!
//! ```text
//!            condition true                  held for time_to_trigger
//!   ┌──────┐ ───────────────► ┌───────┐ ───────────────────────► ┌───────┐
//!   │ Idle │                  │ Armed │                          │ Fired │
//!   └──────┘ ◄─────────────── └───────┘                          └───────┘
//!            condition false       ▲                                 │
//!                                  │      handover complete/failed   │
//!                                  └─────────────────────────────────┘
//! ```
//!
//! A UE has at most one armed trigger at a time: when the armed neighbor's
//! condition lapses, the trigger cancels and another neighbor may arm in
//! the same tick. Neighbors are always evaluated in ascending cell-id
//! order, so simultaneous qualifiers resolve to the lowest cell id.
//!
//! `Fired` holds until the caller reports the handover outcome. On
//! completion the UE resets to `Idle` on its new serving cell; on failure
//! (target unreachable) it resets to `Idle` on the old one and re-arms
//! naturally on the next qualifying report.

use std::collections::{BTreeSet, HashMap};
use std::time::Duration;

use thiserror::Error;
use tracing::{debug, info, warn};

use mobisim_common::config::HandoverConfig;
use mobisim_common::{CellId, SimTime, UeId};

use crate::algorithm::{AlgorithmError, HandoverAlgorithm};
use crate::measurement::MeasurementReport;

/// Engine configuration: the trigger condition plus the shared
/// time-to-trigger guard.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EngineConfig {
    /// Trigger condition variant
    pub algorithm: HandoverAlgorithm,
    /// Time the condition must hold continuously before a handover fires
    pub time_to_trigger: Duration,
}

impl EngineConfig {
    /// Builds a validated engine configuration from its file form.
    pub fn from_config(config: &HandoverConfig) -> Result<Self, EngineError> {
        let algorithm = HandoverAlgorithm::from_config(config.algorithm)?;
        Ok(Self {
            algorithm,
            time_to_trigger: Duration::from_millis(config.time_to_trigger_ms),
        })
    }
}

/// A handover decision emitted by the engine.
///
/// Immutable once emitted; the caller forwards it to the attachment
/// controller exactly once.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandoverDecision {
    /// UE to hand over
    pub ue_id: UeId,
    /// Serving cell at decision time
    pub source_cell_id: CellId,
    /// Chosen target cell
    pub target_cell_id: CellId,
    /// Simulation time the decision fired
    pub decision_time: SimTime,
}

/// Trigger state for one UE.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TriggerState {
    /// No neighbor currently satisfies the trigger condition.
    Idle,
    /// A neighbor satisfies the condition; waiting out time-to-trigger.
    Armed {
        /// Qualifying neighbor
        neighbor: CellId,
        /// Time the condition was first satisfied
        since: SimTime,
    },
    /// A decision was emitted; waiting for the handover outcome.
    Fired {
        /// Target named by the emitted decision
        target: CellId,
    },
}

/// Errors raised by the engine.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum EngineError {
    /// Algorithm parameters failed validation at configuration time.
    #[error("configuration rejected: {0}")]
    InvalidConfig(#[from] AlgorithmError),

    /// Report for a UE that was never registered.
    #[error("unknown UE {0}")]
    UnknownUe(UeId),

    /// Report naming a cell outside the configured topology.
    #[error("unknown cell {cell_id} in report for {ue_id}")]
    UnknownCell {
        /// Reporting UE
        ue_id: UeId,
        /// Offending cell id
        cell_id: CellId,
    },

    /// Report whose serving cell disagrees with the engine's registry.
    #[error("serving cell mismatch for {ue_id}: reported {reported}, attached to {attached}")]
    ServingCellMismatch {
        /// Reporting UE
        ue_id: UeId,
        /// Serving cell named by the report
        reported: CellId,
        /// Serving cell the engine has on record
        attached: CellId,
    },

    /// Report older than the UE's previous report.
    #[error("out-of-order report for {ue_id}: {timestamp} after {last_seen}")]
    NonMonotonicTimestamp {
        /// Reporting UE
        ue_id: UeId,
        /// Offending timestamp
        timestamp: SimTime,
        /// Latest timestamp previously accepted
        last_seen: SimTime,
    },

    /// Report carrying a NaN or infinite metric value.
    #[error("non-finite metric value in report for {0}")]
    InvalidMetric(UeId),
}

/// Per-UE bookkeeping.
#[derive(Debug, Clone)]
struct UeContext {
    serving_cell_id: CellId,
    /// Serving cell at registration time, restored by `reset`
    initial_cell_id: CellId,
    last_report_time: Option<SimTime>,
    state: TriggerState,
}

impl UeContext {
    fn new(serving_cell_id: CellId) -> Self {
        Self {
            serving_cell_id,
            initial_cell_id: serving_cell_id,
            last_report_time: None,
            state: TriggerState::Idle,
        }
    }
}

/// Handover decision engine.
///
/// Single-threaded and synchronous: invoked once per measurement report by
/// the simulation loop, never blocks, never schedules itself.
pub struct HandoverEngine {
    config: EngineConfig,
    cells: BTreeSet<CellId>,
    ues: HashMap<UeId, UeContext>,
}

impl HandoverEngine {
    /// Creates an engine with a validated configuration.
    ///
    /// Fails on invalid algorithm parameters; the engine refuses to start
    /// rather than producing undefined trigger behavior.
    pub fn new(config: EngineConfig) -> Result<Self, EngineError> {
        config.algorithm.validate()?;
        Ok(Self {
            config,
            cells: BTreeSet::new(),
            ues: HashMap::new(),
        })
    }

    /// Returns the engine configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Adds a cell to the known topology.
    pub fn add_cell(&mut self, cell_id: CellId) {
        self.cells.insert(cell_id);
    }

    /// Returns true if the cell is part of the known topology.
    pub fn has_cell(&self, cell_id: CellId) -> bool {
        self.cells.contains(&cell_id)
    }

    /// Registers a UE attached to `serving_cell_id`.
    pub fn register_ue(&mut self, ue_id: UeId, serving_cell_id: CellId) -> Result<(), EngineError> {
        if !self.cells.contains(&serving_cell_id) {
            return Err(EngineError::UnknownCell {
                ue_id,
                cell_id: serving_cell_id,
            });
        }
        self.ues.insert(ue_id, UeContext::new(serving_cell_id));
        Ok(())
    }

    /// Returns the serving cell the engine has on record for a UE.
    pub fn serving_cell(&self, ue_id: UeId) -> Option<CellId> {
        self.ues.get(&ue_id).map(|ctx| ctx.serving_cell_id)
    }

    /// Returns the UE's current trigger state.
    pub fn trigger_state(&self, ue_id: UeId) -> Option<TriggerState> {
        self.ues.get(&ue_id).map(|ctx| ctx.state)
    }

    /// Processes one measurement report and returns a decision if the
    /// trigger fires.
    ///
    /// Invalid reports (unknown ids, out-of-order timestamps, non-finite
    /// metrics) are logged at WARN and surfaced as errors; the caller
    /// drops them. State for other UEs is never affected.
    pub fn on_report(
        &mut self,
        report: &MeasurementReport,
    ) -> Result<Option<HandoverDecision>, EngineError> {
        if let Err(e) = self.validate_report(report) {
            warn!("dropping measurement report: {e}");
            return Err(e);
        }

        let algorithm = self.config.algorithm;
        let time_to_trigger = self.config.time_to_trigger;
        let ctx = match self.ues.get_mut(&report.ue_id) {
            Some(ctx) => ctx,
            None => return Err(EngineError::UnknownUe(report.ue_id)),
        };
        ctx.last_report_time = Some(report.timestamp);

        if let TriggerState::Fired { target } = ctx.state {
            debug!(
                "{}: ignoring report, handover to {target} in progress",
                report.ue_id
            );
            return Ok(None);
        }

        // Ascending cell-id order makes simultaneous qualifiers resolve
        // to the lowest cell id.
        let mut neighbors: Vec<_> = report
            .neighbors
            .iter()
            .filter(|n| n.cell_id != report.serving_cell_id)
            .collect();
        neighbors.sort_by_key(|n| n.cell_id);

        // An armed trigger survives only while its own condition holds.
        if let TriggerState::Armed { neighbor, since } = ctx.state {
            let still_met = neighbors
                .iter()
                .find(|n| n.cell_id == neighbor)
                .is_some_and(|n| algorithm.condition_met(report.serving_dbm, n.value_dbm));

            if still_met {
                if report.timestamp.elapsed_since(since) >= time_to_trigger {
                    ctx.state = TriggerState::Fired { target: neighbor };
                    let decision = HandoverDecision {
                        ue_id: report.ue_id,
                        source_cell_id: ctx.serving_cell_id,
                        target_cell_id: neighbor,
                        decision_time: report.timestamp,
                    };
                    info!(
                        "handover decision for {}: {} -> {} at {}",
                        report.ue_id, decision.source_cell_id, neighbor, report.timestamp
                    );
                    return Ok(Some(decision));
                }
                return Ok(None);
            }

            debug!(
                "{}: trigger for {neighbor} cancelled at {}",
                report.ue_id, report.timestamp
            );
            ctx.state = TriggerState::Idle;
        }

        // Idle: arm the first qualifying neighbor, if any. Arming for a
        // new neighbor replaces whatever was pending for this UE.
        for n in &neighbors {
            if algorithm.condition_met(report.serving_dbm, n.value_dbm) {
                ctx.state = TriggerState::Armed {
                    neighbor: n.cell_id,
                    since: report.timestamp,
                };
                debug!(
                    "{}: trigger armed for {} at {}",
                    report.ue_id, n.cell_id, report.timestamp
                );
                // A zero time-to-trigger fires on the arming tick.
                if time_to_trigger.is_zero() {
                    ctx.state = TriggerState::Fired { target: n.cell_id };
                    let decision = HandoverDecision {
                        ue_id: report.ue_id,
                        source_cell_id: ctx.serving_cell_id,
                        target_cell_id: n.cell_id,
                        decision_time: report.timestamp,
                    };
                    info!(
                        "handover decision for {}: {} -> {} at {}",
                        report.ue_id, decision.source_cell_id, n.cell_id, report.timestamp
                    );
                    return Ok(Some(decision));
                }
                break;
            }
        }

        Ok(None)
    }

    /// Reports a completed handover: the UE is now attached to
    /// `new_serving_cell_id` and its trigger state resets relative to it.
    pub fn notify_handover_complete(
        &mut self,
        ue_id: UeId,
        new_serving_cell_id: CellId,
    ) -> Result<(), EngineError> {
        if !self.cells.contains(&new_serving_cell_id) {
            return Err(EngineError::UnknownCell {
                ue_id,
                cell_id: new_serving_cell_id,
            });
        }
        let ctx = self.ues.get_mut(&ue_id).ok_or(EngineError::UnknownUe(ue_id))?;
        info!(
            "handover complete for {ue_id}: {} -> {new_serving_cell_id}",
            ctx.serving_cell_id
        );
        ctx.serving_cell_id = new_serving_cell_id;
        ctx.state = TriggerState::Idle;
        Ok(())
    }

    /// Reports a failed handover (target unreachable): the UE stays on its
    /// serving cell and the trigger resets so it can re-arm on the next
    /// qualifying report.
    pub fn notify_handover_failed(&mut self, ue_id: UeId) -> Result<(), EngineError> {
        let ctx = self.ues.get_mut(&ue_id).ok_or(EngineError::UnknownUe(ue_id))?;
        if let TriggerState::Fired { target } = ctx.state {
            warn!("handover failed for {ue_id}: target {target} unreachable");
        }
        ctx.state = TriggerState::Idle;
        Ok(())
    }

    /// Returns the engine to its post-configuration state: every UE back
    /// on its registration-time serving cell with an idle trigger.
    ///
    /// Replaying an identical measurement stream after a reset produces an
    /// identical decision sequence.
    pub fn reset(&mut self) {
        for ctx in self.ues.values_mut() {
            ctx.serving_cell_id = ctx.initial_cell_id;
            ctx.last_report_time = None;
            ctx.state = TriggerState::Idle;
        }
    }

    fn validate_report(&self, report: &MeasurementReport) -> Result<(), EngineError> {
        let ctx = self
            .ues
            .get(&report.ue_id)
            .ok_or(EngineError::UnknownUe(report.ue_id))?;

        if !self.cells.contains(&report.serving_cell_id) {
            return Err(EngineError::UnknownCell {
                ue_id: report.ue_id,
                cell_id: report.serving_cell_id,
            });
        }
        for n in &report.neighbors {
            if !self.cells.contains(&n.cell_id) {
                return Err(EngineError::UnknownCell {
                    ue_id: report.ue_id,
                    cell_id: n.cell_id,
                });
            }
        }
        if report.serving_cell_id != ctx.serving_cell_id {
            return Err(EngineError::ServingCellMismatch {
                ue_id: report.ue_id,
                reported: report.serving_cell_id,
                attached: ctx.serving_cell_id,
            });
        }
        if let Some(last_seen) = ctx.last_report_time {
            if report.timestamp < last_seen {
                return Err(EngineError::NonMonotonicTimestamp {
                    ue_id: report.ue_id,
                    timestamp: report.timestamp,
                    last_seen,
                });
            }
        }
        if !report.metrics_finite() {
            return Err(EngineError::InvalidMetric(report.ue_id));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const UE: UeId = UeId::new(1);
    const CELL_A: CellId = CellId::new(1);
    const CELL_B: CellId = CellId::new(2);
    const CELL_C: CellId = CellId::new(3);

    fn engine(algorithm: HandoverAlgorithm, ttt_ms: u64) -> HandoverEngine {
        let mut engine = HandoverEngine::new(EngineConfig {
            algorithm,
            time_to_trigger: Duration::from_millis(ttt_ms),
        })
        .unwrap();
        engine.add_cell(CELL_A);
        engine.add_cell(CELL_B);
        engine.add_cell(CELL_C);
        engine.register_ue(UE, CELL_A).unwrap();
        engine
    }

    fn margin_engine(hysteresis_db: f64, ttt_ms: u64) -> HandoverEngine {
        engine(HandoverAlgorithm::RelativeMargin { hysteresis_db }, ttt_ms)
    }

    fn report(t_ms: u64, serving: f64, neighbor: f64) -> MeasurementReport {
        MeasurementReport::new(UE, SimTime::from_millis(t_ms), CELL_A, serving)
            .with_neighbor(CELL_B, neighbor)
    }

    #[test]
    fn test_fires_once_after_time_to_trigger() {
        let mut engine = margin_engine(0.5, 10);

        // condition true continuously from t=0; must fire exactly at t=10
        let mut decisions = Vec::new();
        for t in 0..=20 {
            if let Some(d) = engine.on_report(&report(t, -90.0, -85.0)).unwrap() {
                decisions.push(d);
            }
        }
        assert_eq!(decisions.len(), 1);
        assert_eq!(decisions[0].decision_time, SimTime::from_millis(10));
        assert_eq!(decisions[0].source_cell_id, CELL_A);
        assert_eq!(decisions[0].target_cell_id, CELL_B);
    }

    #[test]
    fn test_dip_before_trigger_cancels() {
        let mut engine = margin_engine(0.5, 10);

        for t in 0..5 {
            assert!(engine.on_report(&report(t, -90.0, -85.0)).unwrap().is_none());
        }
        // sample below threshold cancels the pending trigger
        assert!(engine.on_report(&report(5, -90.0, -95.0)).unwrap().is_none());
        assert_eq!(engine.trigger_state(UE), Some(TriggerState::Idle));

        // even though the condition held 5 ms before and holds again after,
        // the timer restarts from scratch
        for t in 6..15 {
            assert!(engine.on_report(&report(t, -90.0, -85.0)).unwrap().is_none());
        }
        let d = engine.on_report(&report(16, -90.0, -85.0)).unwrap();
        assert!(d.is_some());
    }

    #[test]
    fn test_rising_neighbor_scenario() {
        // hysteresis 0.5 dB, TTT 10 ms, serving constant at -90 dBm,
        // neighbor rising -95 -> -88 dBm over 20 ms in 1 ms steps
        // (0.35 dB/ms). The condition needs neighbor > -89.5 dBm, first
        // satisfied at t=16 ms (-89.4 dBm); the decision fires 10 ms
        // after that sample.
        let mut engine = margin_engine(0.5, 10);
        let mut fired = Vec::new();
        for t in 0..=40 {
            let v = (-95.0 + 0.35 * t as f64).min(-88.0);
            if let Some(d) = engine.on_report(&report(t, -90.0, v)).unwrap() {
                fired.push(d);
            }
        }
        assert_eq!(fired.len(), 1);
        // first qualifying sample at t=16, decision exactly 10 ms later
        assert_eq!(fired[0].decision_time, SimTime::from_millis(26));
    }

    #[test]
    fn test_oscillation_never_fires() {
        // neighbor alternates above/below the threshold every 1 ms for
        // 50 ms with TTT 10 ms: the timer keeps resetting
        let mut engine = margin_engine(0.5, 10);
        for t in 0..50 {
            let v = if t % 2 == 0 { -85.0 } else { -95.0 };
            assert!(engine.on_report(&report(t, -90.0, v)).unwrap().is_none());
        }
    }

    #[test]
    fn test_replay_after_reset_is_identical() {
        let mut engine = margin_engine(0.5, 10);
        let stream: Vec<MeasurementReport> = (0..30)
            .map(|t| {
                let v = if t < 5 { -95.0 } else { -85.0 };
                report(t, -90.0, v)
            })
            .collect();

        let run = |engine: &mut HandoverEngine| -> Vec<HandoverDecision> {
            stream
                .iter()
                .filter_map(|r| engine.on_report(r).unwrap())
                .collect()
        };

        let first = run(&mut engine);
        engine.reset();
        let second = run(&mut engine);
        assert_eq!(first, second);
        assert_eq!(first.len(), 1);
    }

    #[test]
    fn test_tie_break_prefers_lowest_cell_id() {
        let mut engine = margin_engine(0.5, 10);
        // both neighbors qualify on every tick; cell 2 must win even when
        // listed after cell 3 and measured weaker
        let make = |t: u64| {
            MeasurementReport::new(UE, SimTime::from_millis(t), CELL_A, -90.0)
                .with_neighbor(CELL_C, -80.0)
                .with_neighbor(CELL_B, -85.0)
        };
        let mut decision = None;
        for t in 0..=10 {
            if let Some(d) = engine.on_report(&make(t)).unwrap() {
                decision = Some(d);
            }
        }
        assert_eq!(decision.unwrap().target_cell_id, CELL_B);
    }

    #[test]
    fn test_armed_neighbor_lapse_lets_other_arm() {
        let mut engine = margin_engine(0.5, 10);
        // cell 2 arms first, then drops out; cell 3 arms in the same tick
        let both = MeasurementReport::new(UE, SimTime::from_millis(0), CELL_A, -90.0)
            .with_neighbor(CELL_B, -85.0)
            .with_neighbor(CELL_C, -84.0);
        engine.on_report(&both).unwrap();
        assert_eq!(
            engine.trigger_state(UE),
            Some(TriggerState::Armed {
                neighbor: CELL_B,
                since: SimTime::ZERO
            })
        );

        let b_gone = MeasurementReport::new(UE, SimTime::from_millis(5), CELL_A, -90.0)
            .with_neighbor(CELL_B, -95.0)
            .with_neighbor(CELL_C, -84.0);
        engine.on_report(&b_gone).unwrap();
        assert_eq!(
            engine.trigger_state(UE),
            Some(TriggerState::Armed {
                neighbor: CELL_C,
                since: SimTime::from_millis(5)
            })
        );
    }

    #[test]
    fn test_zero_time_to_trigger_fires_immediately() {
        let mut engine = margin_engine(0.5, 0);
        let d = engine.on_report(&report(0, -90.0, -85.0)).unwrap();
        assert_eq!(d.unwrap().decision_time, SimTime::ZERO);
    }

    #[test]
    fn test_absolute_threshold_variant() {
        let mut engine = engine(
            HandoverAlgorithm::AbsoluteThreshold {
                serving_threshold_dbm: -95.0,
                neighbour_offset_db: 5.0,
            },
            0,
        );

        // serving healthy: strong neighbor alone must not trigger
        assert!(engine.on_report(&report(0, -90.0, -70.0)).unwrap().is_none());
        // serving degraded below the floor and neighbor clears the offset
        let d = engine.on_report(&report(1, -96.0, -90.0)).unwrap();
        assert_eq!(d.unwrap().target_cell_id, CELL_B);
    }

    #[test]
    fn test_fired_state_ignores_reports_until_outcome() {
        let mut engine = margin_engine(0.5, 0);
        let d = engine.on_report(&report(0, -90.0, -85.0)).unwrap().unwrap();
        assert_eq!(d.target_cell_id, CELL_B);

        // still fired: further reports produce nothing
        assert!(engine.on_report(&report(1, -90.0, -85.0)).unwrap().is_none());

        engine.notify_handover_complete(UE, CELL_B).unwrap();
        assert_eq!(engine.serving_cell(UE), Some(CELL_B));
        assert_eq!(engine.trigger_state(UE), Some(TriggerState::Idle));
    }

    #[test]
    fn test_unreachable_target_rearms_and_refires() {
        let mut engine = margin_engine(0.5, 0);
        let first = engine.on_report(&report(0, -90.0, -85.0)).unwrap();
        assert!(first.is_some());

        // attachment controller reported the target unreachable
        engine.notify_handover_failed(UE).unwrap();
        assert_eq!(engine.serving_cell(UE), Some(CELL_A));

        // the next qualifying report fires again, no special retry path
        let second = engine.on_report(&report(1, -90.0, -85.0)).unwrap();
        assert_eq!(second.unwrap().target_cell_id, CELL_B);
    }

    #[test]
    fn test_unknown_ue_rejected() {
        let mut engine = margin_engine(0.5, 10);
        let r = MeasurementReport::new(UeId::new(99), SimTime::ZERO, CELL_A, -90.0)
            .with_neighbor(CELL_B, -85.0);
        assert_eq!(
            engine.on_report(&r).unwrap_err(),
            EngineError::UnknownUe(UeId::new(99))
        );
    }

    #[test]
    fn test_unknown_cell_rejected() {
        let mut engine = margin_engine(0.5, 10);
        let r = MeasurementReport::new(UE, SimTime::ZERO, CELL_A, -90.0)
            .with_neighbor(CellId::new(42), -85.0);
        assert!(matches!(
            engine.on_report(&r).unwrap_err(),
            EngineError::UnknownCell { .. }
        ));
        // dropped input leaves the trigger untouched
        assert_eq!(engine.trigger_state(UE), Some(TriggerState::Idle));
    }

    #[test]
    fn test_out_of_order_report_rejected() {
        let mut engine = margin_engine(0.5, 10);
        engine.on_report(&report(10, -90.0, -95.0)).unwrap();
        assert!(matches!(
            engine.on_report(&report(5, -90.0, -85.0)).unwrap_err(),
            EngineError::NonMonotonicTimestamp { .. }
        ));
    }

    #[test]
    fn test_non_finite_metric_rejected() {
        let mut engine = margin_engine(0.5, 10);
        let r = MeasurementReport::new(UE, SimTime::ZERO, CELL_A, f64::NAN)
            .with_neighbor(CELL_B, -85.0);
        assert_eq!(
            engine.on_report(&r).unwrap_err(),
            EngineError::InvalidMetric(UE)
        );
    }

    #[test]
    fn test_invalid_report_does_not_disturb_other_ues() {
        let mut engine = margin_engine(0.5, 10);
        let other = UeId::new(2);
        engine.register_ue(other, CELL_A).unwrap();

        // arm UE 2
        let r = MeasurementReport::new(other, SimTime::ZERO, CELL_A, -90.0)
            .with_neighbor(CELL_B, -85.0);
        engine.on_report(&r).unwrap();

        // garbage for UE 1
        let bad = MeasurementReport::new(UE, SimTime::ZERO, CELL_A, f64::INFINITY)
            .with_neighbor(CELL_B, -85.0);
        assert!(engine.on_report(&bad).is_err());

        assert!(matches!(
            engine.trigger_state(other),
            Some(TriggerState::Armed { .. })
        ));
    }

    #[test]
    fn test_misconfiguration_refused() {
        let result = HandoverEngine::new(EngineConfig {
            algorithm: HandoverAlgorithm::RelativeMargin {
                hysteresis_db: -0.5,
            },
            time_to_trigger: Duration::from_millis(10),
        });
        assert!(result.is_err());
    }

    #[test]
    fn test_register_ue_requires_known_cell() {
        let mut engine = HandoverEngine::new(EngineConfig {
            algorithm: HandoverAlgorithm::RelativeMargin { hysteresis_db: 0.5 },
            time_to_trigger: Duration::from_millis(10),
        })
        .unwrap();
        assert!(engine.register_ue(UE, CELL_A).is_err());
    }
}
