//! The scenario run loop.
//!
//! A fixed-period tick loop drives the whole run: each tick samples the
//! signal feed, hands the report to the decision engine, forwards any
//! decision to the attachment controller, and reports the outcome back to
//! the engine. The engine never schedules itself; the loop owns the
//! cadence.

use std::path::Path;

use tracing::{debug, info};

use mobisim_common::{
    CellId, Error, ScenarioConfig, SimulationClock, SimulationTimeConfig,
};
use mobisim_handover::{
    AttachmentController, EngineConfig, HandoverEngine,
};

use crate::attachment::SimAttachment;
use crate::feed::SignalFeed;
use crate::topology::Topology;
use crate::trace::{
    collect_traces, HandoverEvent, HandoverTraceWriter, RsrpTraceWriter, HANDOVER_TRACE_FILE,
    RSRP_TRACE_FILE,
};

/// Counters and final state of a completed run.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RunSummary {
    /// Measurement reports fed to the engine
    pub reports: u64,
    /// Reports the engine rejected as invalid input
    pub dropped_reports: u64,
    /// Handover decisions emitted
    pub decisions: u64,
    /// Handovers acknowledged by the attachment controller
    pub completed: u64,
    /// Handovers that failed with an unreachable target
    pub failed: u64,
    /// Downlink packets delivered (one per tick while attached)
    pub packets_delivered: u64,
    /// Serving cell of the UE at the end of the run
    pub final_serving: Option<CellId>,
}

/// Runs a full scenario, writing trace files under `work_dir` and
/// collecting them into the configured results directory at the end.
pub fn run_scenario(config: &ScenarioConfig, work_dir: &Path) -> Result<RunSummary, Error> {
    config.validate()?;

    let engine_config = EngineConfig::from_config(&config.handover)
        .map_err(|e| Error::Config(e.to_string()))?;
    let mut engine = HandoverEngine::new(engine_config)
        .map_err(|e| Error::Config(e.to_string()))?;

    let mut topology = Topology::two_gnb_corridor(config);
    for gnb in &topology.gnbs {
        engine.add_cell(gnb.cell_id);
    }

    // Attach each UE to its closest gNB before the run starts.
    for ue in &topology.ues {
        let serving = topology
            .closest_gnb(&ue.position)
            .map(|g| g.cell_id)
            .ok_or_else(|| Error::Config("topology has no gNBs".into()))?;
        engine
            .register_ue(ue.ue_id, serving)
            .map_err(|e| Error::Config(e.to_string()))?;
        info!("{} initially attached to {serving}", ue.ue_id);
    }

    let mut attachment = SimAttachment::new(topology.gnbs.iter().map(|g| g.cell_id));
    let mut feed = SignalFeed::new(config.radio.tx_power_dbm, config.jitter);
    let mut clock = SimulationClock::new(SimulationTimeConfig::new(
        config.report_interval_ms,
        config.sim_duration_ms,
    ));

    let mut rsrp_trace = RsrpTraceWriter::create(work_dir.join(RSRP_TRACE_FILE))?;
    let mut ho_trace = HandoverTraceWriter::create(work_dir.join(HANDOVER_TRACE_FILE))?;

    info!(
        "starting {} run: {} algorithm, TTT {:?}, {} ticks of {} ms",
        config.scenario,
        engine_config.algorithm.name(),
        engine_config.time_to_trigger,
        clock.config().total_ticks(),
        config.report_interval_ms,
    );

    let mut summary = RunSummary::default();
    let tick = clock.config().tick_duration();

    loop {
        let now = clock.now();

        for i in 0..topology.ues.len() {
            let ue = topology.ues[i];
            let Some(serving) = engine.serving_cell(ue.ue_id) else {
                continue;
            };

            let report = feed.report_for(&topology, &ue, serving, now);
            rsrp_trace.record(now, report.serving_dbm)?;
            summary.reports += 1;

            match engine.on_report(&report) {
                Ok(Some(decision)) => {
                    summary.decisions += 1;
                    ho_trace.record(
                        now,
                        decision.ue_id,
                        decision.source_cell_id,
                        decision.target_cell_id,
                        HandoverEvent::Decision,
                    )?;

                    match attachment.request_handover(decision.ue_id, decision.target_cell_id) {
                        Ok(ack) => {
                            engine
                                .notify_handover_complete(ack.ue_id, ack.new_serving_cell_id)
                                .map_err(|e| Error::Config(e.to_string()))?;
                            summary.completed += 1;
                            ho_trace.record(
                                now,
                                decision.ue_id,
                                decision.source_cell_id,
                                decision.target_cell_id,
                                HandoverEvent::Complete,
                            )?;
                        }
                        Err(e) => {
                            debug!("handover request rejected: {e}");
                            engine
                                .notify_handover_failed(decision.ue_id)
                                .map_err(|e| Error::Config(e.to_string()))?;
                            summary.failed += 1;
                            ho_trace.record(
                                now,
                                decision.ue_id,
                                decision.source_cell_id,
                                decision.target_cell_id,
                                HandoverEvent::Failed,
                            )?;
                        }
                    }
                }
                Ok(None) => {}
                Err(_) => {
                    // already WARN-logged by the engine; drop and move on
                    summary.dropped_reports += 1;
                }
            }

            summary.packets_delivered += 1;
        }

        topology.advance(tick);
        clock.tick();
        if clock.is_complete() {
            break;
        }
    }

    summary.final_serving = topology
        .ues
        .first()
        .and_then(|ue| engine.serving_cell(ue.ue_id));

    let rsrp_path = rsrp_trace.finish()?;
    let ho_path = ho_trace.finish()?;
    collect_traces(&config.output_dir, &[rsrp_path, ho_path])?;

    info!(
        "run finished: {} reports, {} decisions, {} completed, {} failed",
        summary.reports, summary.decisions, summary.completed, summary.failed
    );

    Ok(summary)
}
