//! Node placement and UE mobility.
//!
//! The scenario deploys a two-gNB corridor: one gNB at the origin, one
//! 100 m along the Y axis, and a single UE starting between them that
//! drives past the second gNB at constant velocity. Antenna heights come
//! from the deployment scenario.

use std::time::Duration;

use mobisim_common::{CellId, ScenarioConfig, UeId};

/// Inter-site distance of the two-gNB corridor, in meters.
pub const INTER_SITE_DISTANCE_M: f64 = 100.0;

/// 3D position in meters.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Position {
    /// X coordinate
    pub x: f64,
    /// Y coordinate
    pub y: f64,
    /// Z coordinate (height)
    pub z: f64,
}

impl Position {
    /// Creates a position from coordinates in meters.
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Euclidean distance to another position, in meters.
    pub fn distance_to(&self, other: &Position) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        let dz = self.z - other.z;
        (dx * dx + dy * dy + dz * dz).sqrt()
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.1}, {:.1}, {:.1})", self.x, self.y, self.z)
    }
}

/// UE mobility model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Mobility {
    /// The UE does not move.
    ConstantPosition,
    /// The UE moves with a constant velocity vector, in m/s.
    ConstantVelocity {
        /// X velocity component
        vx: f64,
        /// Y velocity component
        vy: f64,
        /// Z velocity component
        vz: f64,
    },
}

/// A gNB and the cell it serves.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GnbNode {
    /// Cell served by this gNB
    pub cell_id: CellId,
    /// Antenna position
    pub position: Position,
}

/// A UE with its mobility model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UeNode {
    /// UE identity
    pub ue_id: UeId,
    /// Current position
    pub position: Position,
    /// Mobility model
    pub mobility: Mobility,
}

impl UeNode {
    /// Advances the UE position by one time step.
    pub fn advance(&mut self, dt: Duration) {
        if let Mobility::ConstantVelocity { vx, vy, vz } = self.mobility {
            let secs = dt.as_secs_f64();
            self.position.x += vx * secs;
            self.position.y += vy * secs;
            self.position.z += vz * secs;
        }
    }
}

/// The deployed node set for a run.
#[derive(Debug, Clone)]
pub struct Topology {
    /// Deployed gNBs
    pub gnbs: Vec<GnbNode>,
    /// Deployed UEs
    pub ues: Vec<UeNode>,
}

impl Topology {
    /// Builds the two-gNB corridor deployment for a scenario.
    ///
    /// gNB 1 sits at the origin and gNB 2 at (0, 100) at the scenario's
    /// base-station height; the UE starts at (50, 10) at user-terminal
    /// height, moving along +Y when mobility is enabled.
    pub fn two_gnb_corridor(config: &ScenarioConfig) -> Self {
        let h_bs = config.scenario.gnb_height_m();
        let h_ut = config.scenario.ue_height_m();

        let gnbs = vec![
            GnbNode {
                cell_id: CellId::new(1),
                position: Position::new(0.0, 0.0, h_bs),
            },
            GnbNode {
                cell_id: CellId::new(2),
                position: Position::new(0.0, INTER_SITE_DISTANCE_M, h_bs),
            },
        ];

        let mobility = if config.mobility.enabled {
            Mobility::ConstantVelocity {
                vx: 0.0,
                vy: config.mobility.speed_mps,
                vz: 0.0,
            }
        } else {
            Mobility::ConstantPosition
        };

        let ues = vec![UeNode {
            ue_id: UeId::new(1),
            position: Position::new(50.0, 10.0, h_ut),
            mobility,
        }];

        Self { gnbs, ues }
    }

    /// Returns the gNB whose cell is closest to the given position.
    pub fn closest_gnb(&self, position: &Position) -> Option<&GnbNode> {
        self.gnbs.iter().min_by(|a, b| {
            a.position
                .distance_to(position)
                .total_cmp(&b.position.distance_to(position))
        })
    }

    /// Advances every UE by one time step.
    pub fn advance(&mut self, dt: Duration) {
        for ue in &mut self.ues {
            ue.advance(dt);
        }
    }
}
