//! Engine integration tests.
//!
//! Drives the decision engine with reports produced by the synthetic feed
//! over the real topology, rather than hand-built measurement values.

#![cfg(test)]

use std::time::Duration;

use mobisim_common::{CellId, ScenarioConfig, SimTime};
use mobisim_handover::{
    AttachmentController, EngineConfig, HandoverAlgorithm, HandoverEngine, TriggerState,
};
use mobisim_scenario::{SignalFeed, SimAttachment, Topology};

use crate::init_test_logging;

fn corridor_engine(ttt_ms: u64) -> (HandoverEngine, Topology, SignalFeed) {
    let config = ScenarioConfig::default();
    let topology = Topology::two_gnb_corridor(&config);

    let mut engine = HandoverEngine::new(EngineConfig {
        algorithm: HandoverAlgorithm::RelativeMargin { hysteresis_db: 0.5 },
        time_to_trigger: Duration::from_millis(ttt_ms),
    })
    .unwrap();
    for gnb in &topology.gnbs {
        engine.add_cell(gnb.cell_id);
    }
    let ue = topology.ues[0];
    let serving = topology.closest_gnb(&ue.position).unwrap().cell_id;
    engine.register_ue(ue.ue_id, serving).unwrap();

    let feed = SignalFeed::new(config.radio.tx_power_dbm, None);
    (engine, topology, feed)
}

/// The feed-driven corridor produces a decision as the UE crosses into
/// the second cell's dominance region, and the trigger stays idle before
/// the crossover.
#[test]
fn test_feed_driven_decision_at_crossover() {
    init_test_logging();
    let (mut engine, mut topology, mut feed) = corridor_engine(10);

    let tick = Duration::from_millis(10);
    let mut decision = None;
    for step in 0..700u64 {
        let now = SimTime::from_millis(step * 10);
        let ue = topology.ues[0];
        let serving = engine.serving_cell(ue.ue_id).unwrap();
        let report = feed.report_for(&topology, &ue, serving, now);

        if let Some(d) = engine.on_report(&report).unwrap() {
            decision = Some((d, ue.position.y));
            break;
        }
        topology.advance(tick);
    }

    let (decision, y) = decision.expect("no decision fired");
    assert_eq!(decision.source_cell_id, CellId::new(1));
    assert_eq!(decision.target_cell_id, CellId::new(2));
    // the corridor midpoint is y=50; the margin plus time-to-trigger
    // means the decision lands past it, well before the second gNB
    assert!(y > 50.0, "decision fired at y={y}");
    assert!(y < 100.0, "decision fired at y={y}");
}

/// When the target is out of service the engine re-arms and succeeds once
/// the cell returns.
#[test]
fn test_unreachable_target_retries_via_rearm() {
    init_test_logging();
    let (mut engine, mut topology, mut feed) = corridor_engine(0);
    let mut attachment = SimAttachment::new([CellId::new(1), CellId::new(2)]);
    attachment.take_out_of_service(CellId::new(2));

    let tick = Duration::from_millis(10);
    let mut failed = 0u32;
    let mut completed = 0u32;
    for step in 0..700u64 {
        let now = SimTime::from_millis(step * 10);
        let ue = topology.ues[0];
        let serving = engine.serving_cell(ue.ue_id).unwrap();
        let report = feed.report_for(&topology, &ue, serving, now);

        if let Some(d) = engine.on_report(&report).unwrap() {
            match attachment.request_handover(d.ue_id, d.target_cell_id) {
                Ok(ack) => {
                    engine
                        .notify_handover_complete(ack.ue_id, ack.new_serving_cell_id)
                        .unwrap();
                    completed += 1;
                }
                Err(_) => {
                    engine.notify_handover_failed(d.ue_id).unwrap();
                    failed += 1;
                    // cell comes back after a few rejected attempts
                    if failed == 3 {
                        attachment.return_to_service(CellId::new(2));
                    }
                }
            }
        }
        topology.advance(tick);
    }

    assert_eq!(failed, 3);
    assert_eq!(completed, 1);
    assert_eq!(engine.serving_cell(topology.ues[0].ue_id), Some(CellId::new(2)));
    assert_eq!(
        engine.trigger_state(topology.ues[0].ue_id),
        Some(TriggerState::Idle)
    );
}
