//! Handover trigger condition variants.
//!
//! The trigger condition is selected at configuration time as a tagged
//! variant and dispatched through a match; there is no runtime lookup by
//! algorithm name. Both variants feed the same arm/confirm/cancel state
//! machine in [`crate::engine`] and differ only in the boolean condition
//! evaluated against a (serving, neighbor) metric pair.

use thiserror::Error;

use mobisim_common::config::AlgorithmConfig;

/// Errors raised by algorithm parameter validation.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum AlgorithmError {
    /// A parameter that must be a non-negative finite dB value is not.
    #[error("invalid {name}: {value} (must be finite and non-negative)")]
    InvalidMargin {
        /// Parameter name
        name: &'static str,
        /// Offending value
        value: f64,
    },

    /// A parameter that must be a finite dB value is not.
    #[error("invalid {name}: {value} (must be finite)")]
    NonFinite {
        /// Parameter name
        name: &'static str,
        /// Offending value
        value: f64,
    },
}

/// Handover trigger condition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HandoverAlgorithm {
    /// A3-style: the neighbor must exceed the serving cell by the
    /// hysteresis margin.
    RelativeMargin {
        /// Required margin in dB
        hysteresis_db: f64,
    },
    /// A2-A4-style: the serving cell must fall below an absolute floor
    /// AND the neighbor must exceed the serving cell by an offset.
    AbsoluteThreshold {
        /// Serving-cell floor in dBm
        serving_threshold_dbm: f64,
        /// Required neighbor margin over serving, in dB
        neighbour_offset_db: f64,
    },
}

impl HandoverAlgorithm {
    /// Builds a validated algorithm from its configuration form.
    pub fn from_config(config: AlgorithmConfig) -> Result<Self, AlgorithmError> {
        let algorithm = match config {
            AlgorithmConfig::RelativeMargin { hysteresis_db } => {
                Self::RelativeMargin { hysteresis_db }
            }
            AlgorithmConfig::AbsoluteThreshold {
                serving_threshold_dbm,
                neighbour_offset_db,
            } => Self::AbsoluteThreshold {
                serving_threshold_dbm,
                neighbour_offset_db,
            },
        };
        algorithm.validate()?;
        Ok(algorithm)
    }

    /// Validates the variant's parameters.
    pub fn validate(&self) -> Result<(), AlgorithmError> {
        match *self {
            Self::RelativeMargin { hysteresis_db } => {
                if !hysteresis_db.is_finite() || hysteresis_db < 0.0 {
                    return Err(AlgorithmError::InvalidMargin {
                        name: "hysteresis_db",
                        value: hysteresis_db,
                    });
                }
            }
            Self::AbsoluteThreshold {
                serving_threshold_dbm,
                neighbour_offset_db,
            } => {
                if !serving_threshold_dbm.is_finite() {
                    return Err(AlgorithmError::NonFinite {
                        name: "serving_threshold_dbm",
                        value: serving_threshold_dbm,
                    });
                }
                if !neighbour_offset_db.is_finite() || neighbour_offset_db < 0.0 {
                    return Err(AlgorithmError::InvalidMargin {
                        name: "neighbour_offset_db",
                        value: neighbour_offset_db,
                    });
                }
            }
        }
        Ok(())
    }

    /// Evaluates the trigger condition for one (serving, neighbor) pair.
    pub fn condition_met(&self, serving_dbm: f64, neighbor_dbm: f64) -> bool {
        match *self {
            Self::RelativeMargin { hysteresis_db } => neighbor_dbm > serving_dbm + hysteresis_db,
            Self::AbsoluteThreshold {
                serving_threshold_dbm,
                neighbour_offset_db,
            } => {
                serving_dbm < serving_threshold_dbm
                    && neighbor_dbm > serving_dbm + neighbour_offset_db
            }
        }
    }

    /// Short name used in logs and traces.
    pub fn name(&self) -> &'static str {
        match self {
            Self::RelativeMargin { .. } => "relative-margin",
            Self::AbsoluteThreshold { .. } => "absolute-threshold",
        }
    }
}
