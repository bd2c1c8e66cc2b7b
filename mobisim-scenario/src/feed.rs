//! Synthetic signal feed.
//!
//! Converts UE-to-gNB distance into an RSRP figure with a fixed
//! log-distance slope anchored at the configured transmit power, plus
//! optional seeded jitter. This is a deterministic stand-in for the
//! channel model of a full simulator, not a propagation model: it exists
//! only so the decision engine has an input stream with the right shape.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use mobisim_common::config::JitterConfig;
use mobisim_common::{CellId, SimTime, UeId};
use mobisim_handover::MeasurementReport;

use crate::topology::{Topology, UeNode};

/// Reference loss at 1 m, in dB.
const REFERENCE_LOSS_DB: f64 = 61.4;

/// Log-distance slope exponent.
const PATH_LOSS_EXPONENT: f64 = 2.6;

/// Floor below which a cell is considered out of range, in dBm.
pub const MIN_ALLOWED_DBM: f64 = -140.0;

/// Produces per-UE measurement reports from node geometry.
pub struct SignalFeed {
    tx_power_dbm: f64,
    jitter: Option<(StdRng, f64)>,
}

impl SignalFeed {
    /// Creates a feed for gNBs transmitting at `tx_power_dbm`.
    pub fn new(tx_power_dbm: f64, jitter: Option<JitterConfig>) -> Self {
        let jitter = jitter.map(|j| (StdRng::seed_from_u64(j.seed), j.amplitude_db));
        Self {
            tx_power_dbm,
            jitter,
        }
    }

    /// RSRP observed at `distance_m` from a gNB, in dBm.
    pub fn rsrp_at(&mut self, distance_m: f64) -> f64 {
        // clamp below 1 m so the log term stays sane
        let d = distance_m.max(1.0);
        let loss = REFERENCE_LOSS_DB + 10.0 * PATH_LOSS_EXPONENT * d.log10();
        let mut rsrp = self.tx_power_dbm - loss;
        if let Some((rng, amplitude)) = &mut self.jitter {
            if *amplitude > 0.0 {
                rsrp += rng.gen_range(-*amplitude..=*amplitude);
            }
        }
        rsrp.max(MIN_ALLOWED_DBM)
    }

    /// Builds the measurement report for one UE at one instant.
    ///
    /// The serving entry is taken from `serving_cell_id`; every other gNB
    /// in the topology appears as a neighbor.
    pub fn report_for(
        &mut self,
        topology: &Topology,
        ue: &UeNode,
        serving_cell_id: CellId,
        now: SimTime,
    ) -> MeasurementReport {
        let serving_dbm = topology
            .gnbs
            .iter()
            .find(|g| g.cell_id == serving_cell_id)
            .map(|g| self.rsrp_at(g.position.distance_to(&ue.position)))
            .unwrap_or(MIN_ALLOWED_DBM);

        let mut report = MeasurementReport::new(ue.ue_id, now, serving_cell_id, serving_dbm);
        for gnb in &topology.gnbs {
            if gnb.cell_id == serving_cell_id {
                continue;
            }
            let value = self.rsrp_at(gnb.position.distance_to(&ue.position));
            report = report.with_neighbor(gnb.cell_id, value);
        }
        report
    }

    /// Convenience for tests: the report for the first UE in the topology.
    pub fn report_for_ue(
        &mut self,
        topology: &Topology,
        ue_id: UeId,
        serving_cell_id: CellId,
        now: SimTime,
    ) -> Option<MeasurementReport> {
        let ue = *topology.ues.iter().find(|u| u.ue_id == ue_id)?;
        Some(self.report_for(topology, &ue, serving_cell_id, now))
    }
}
