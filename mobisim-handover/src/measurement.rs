//! Measurement types consumed by the handover decision engine.
//!
//! A measurement source external to this crate produces one
//! [`MeasurementReport`] per UE per reporting interval, carrying the
//! serving-cell metric and one value per visible neighbor cell. Metric
//! values are RSRP/RSRQ-style scalars in dB-scaled units.

use mobisim_common::{CellId, SimTime, UeId};

/// A single serving/neighbor measurement sample.
///
/// This is the pairwise form of a report entry, useful for trace output
/// and for callers that deal in individual samples.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Measurement {
    /// UE the sample belongs to
    pub ue_id: UeId,
    /// Serving cell at sampling time
    pub serving_cell_id: CellId,
    /// Neighbor cell the sample measures
    pub neighbor_cell_id: CellId,
    /// Measured metric value for the neighbor, dB-scaled
    pub value_dbm: f64,
    /// Sampling timestamp, simulation time
    pub timestamp: SimTime,
}

/// Measured metric value for one neighbor cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NeighborMeasurement {
    /// Neighbor cell identifier
    pub cell_id: CellId,
    /// Measured metric value, dB-scaled
    pub value_dbm: f64,
}

/// Per-UE measurement batch for one reporting interval.
///
/// Contains the serving-cell metric and one entry per visible neighbor.
/// Reports for the same UE must arrive in non-decreasing timestamp order.
#[derive(Debug, Clone, PartialEq)]
pub struct MeasurementReport {
    /// UE the report belongs to
    pub ue_id: UeId,
    /// Sampling timestamp, simulation time
    pub timestamp: SimTime,
    /// Serving cell at sampling time
    pub serving_cell_id: CellId,
    /// Serving-cell metric value, dB-scaled
    pub serving_dbm: f64,
    /// One entry per visible neighbor cell
    pub neighbors: Vec<NeighborMeasurement>,
}

impl MeasurementReport {
    /// Creates a report with no neighbor entries.
    pub fn new(ue_id: UeId, timestamp: SimTime, serving_cell_id: CellId, serving_dbm: f64) -> Self {
        Self {
            ue_id,
            timestamp,
            serving_cell_id,
            serving_dbm,
            neighbors: Vec::new(),
        }
    }

    /// Adds a neighbor entry, builder style.
    pub fn with_neighbor(mut self, cell_id: CellId, value_dbm: f64) -> Self {
        self.neighbors.push(NeighborMeasurement { cell_id, value_dbm });
        self
    }

    /// Returns true if every metric value in the report is finite.
    pub fn metrics_finite(&self) -> bool {
        self.serving_dbm.is_finite() && self.neighbors.iter().all(|n| n.value_dbm.is_finite())
    }

    /// Decomposes the report into pairwise serving/neighbor samples.
    pub fn samples(&self) -> impl Iterator<Item = Measurement> + '_ {
        self.neighbors.iter().map(move |n| Measurement {
            ue_id: self.ue_id,
            serving_cell_id: self.serving_cell_id,
            neighbor_cell_id: n.cell_id,
            value_dbm: n.value_dbm,
            timestamp: self.timestamp,
        })
    }
}
