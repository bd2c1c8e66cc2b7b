//! Scenario configuration for mobisim
//!
//! This module provides the configuration types for a simulation run:
//! deployment scenario, radio parameters, UE mobility, measurement
//! reporting cadence, and the handover algorithm selection. Configurations
//! are loaded from YAML and validated before the run starts; validation
//! failures are fatal.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// 3GPP deployment scenario.
///
/// The scenario determines the base-station and user-terminal antenna
/// heights used when placing nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeploymentScenario {
    /// Rural macro
    #[serde(rename = "RMa")]
    RMa,
    /// Urban macro
    #[serde(rename = "UMa")]
    UMa,
    /// Urban micro, street canyon
    #[serde(rename = "UMi-StreetCanyon")]
    UMiStreetCanyon,
    /// Indoor hotspot, mixed office
    #[serde(rename = "InH-OfficeMixed")]
    InHOfficeMixed,
    /// Indoor hotspot, open office
    #[serde(rename = "InH-OfficeOpen")]
    InHOfficeOpen,
}

impl DeploymentScenario {
    /// Base-station antenna height in meters.
    pub fn gnb_height_m(&self) -> f64 {
        match self {
            Self::RMa => 35.0,
            Self::UMa => 25.0,
            Self::UMiStreetCanyon => 10.0,
            Self::InHOfficeMixed | Self::InHOfficeOpen => 3.0,
        }
    }

    /// User-terminal antenna height in meters.
    pub fn ue_height_m(&self) -> f64 {
        match self {
            Self::RMa | Self::UMa | Self::UMiStreetCanyon => 1.5,
            Self::InHOfficeMixed | Self::InHOfficeOpen => 1.0,
        }
    }

    /// The canonical scenario name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::RMa => "RMa",
            Self::UMa => "UMa",
            Self::UMiStreetCanyon => "UMi-StreetCanyon",
            Self::InHOfficeMixed => "InH-OfficeMixed",
            Self::InHOfficeOpen => "InH-OfficeOpen",
        }
    }
}

impl fmt::Display for DeploymentScenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for DeploymentScenario {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "RMa" => Ok(Self::RMa),
            "UMa" => Ok(Self::UMa),
            "UMi-StreetCanyon" => Ok(Self::UMiStreetCanyon),
            "InH-OfficeMixed" => Ok(Self::InHOfficeMixed),
            "InH-OfficeOpen" => Ok(Self::InHOfficeOpen),
            _ => Err(Error::Config(format!(
                "scenario '{s}' not supported; choose among 'RMa', 'UMa', \
                 'UMi-StreetCanyon', 'InH-OfficeMixed', 'InH-OfficeOpen'"
            ))),
        }
    }
}

/// Radio parameters for the run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RadioConfig {
    /// Central carrier frequency in Hz
    #[serde(default = "default_frequency_hz")]
    pub frequency_hz: f64,
    /// Channel bandwidth in Hz
    #[serde(default = "default_bandwidth_hz")]
    pub bandwidth_hz: f64,
    /// gNB transmit power in dBm
    #[serde(default = "default_tx_power_dbm")]
    pub tx_power_dbm: f64,
}

fn default_frequency_hz() -> f64 {
    28e9
}

fn default_bandwidth_hz() -> f64 {
    100e6
}

fn default_tx_power_dbm() -> f64 {
    40.0
}

impl Default for RadioConfig {
    fn default() -> Self {
        Self {
            frequency_hz: default_frequency_hz(),
            bandwidth_hz: default_bandwidth_hz(),
            tx_power_dbm: default_tx_power_dbm(),
        }
    }
}

/// UE mobility parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MobilityConfig {
    /// Enable UE mobility; when false the UE stays at its start position
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// UE speed in m/s, along the +Y axis
    #[serde(default = "default_speed_mps")]
    pub speed_mps: f64,
}

fn default_true() -> bool {
    true
}

fn default_speed_mps() -> f64 {
    15.0
}

impl Default for MobilityConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            speed_mps: default_speed_mps(),
        }
    }
}

/// Handover algorithm selection.
///
/// A tagged variant rather than a name string: the condition function is
/// chosen at configuration time and dispatched through a match, so an
/// unknown algorithm cannot survive past config parsing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum AlgorithmConfig {
    /// A3-style: neighbor must exceed serving by a hysteresis margin.
    RelativeMargin {
        /// Margin the neighbor must exceed the serving cell by, in dB
        hysteresis_db: f64,
    },
    /// A2-A4-style: serving must fall below a floor and the neighbor must
    /// exceed serving by an offset.
    AbsoluteThreshold {
        /// Floor the serving cell must fall below, in dBm
        serving_threshold_dbm: f64,
        /// Margin the neighbor must exceed the serving cell by, in dB
        neighbour_offset_db: f64,
    },
}

impl Default for AlgorithmConfig {
    fn default() -> Self {
        // ex005 defaults: 0.5 dB hysteresis
        Self::RelativeMargin { hysteresis_db: 0.5 }
    }
}

/// Handover configuration: algorithm variant plus the shared
/// time-to-trigger guard.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HandoverConfig {
    /// Time the trigger condition must hold continuously before a
    /// handover fires, in milliseconds
    #[serde(default = "default_time_to_trigger_ms")]
    pub time_to_trigger_ms: u64,
    /// Algorithm variant and its parameters
    #[serde(default)]
    pub algorithm: AlgorithmConfig,
}

fn default_time_to_trigger_ms() -> u64 {
    10
}

impl Default for HandoverConfig {
    fn default() -> Self {
        Self {
            time_to_trigger_ms: default_time_to_trigger_ms(),
            algorithm: AlgorithmConfig::default(),
        }
    }
}

/// Optional measurement jitter applied by the synthetic signal feed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct JitterConfig {
    /// Seed for the jitter stream; runs with the same seed are identical
    pub seed: u64,
    /// Peak jitter amplitude in dB
    pub amplitude_db: f64,
}

/// Top-level scenario configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioConfig {
    /// Deployment scenario (antenna heights)
    #[serde(default = "default_scenario")]
    pub scenario: DeploymentScenario,
    /// Radio parameters
    #[serde(default)]
    pub radio: RadioConfig,
    /// UE mobility
    #[serde(default)]
    pub mobility: MobilityConfig,
    /// Handover algorithm and trigger guard
    #[serde(default)]
    pub handover: HandoverConfig,
    /// Total simulated duration in milliseconds
    #[serde(default = "default_sim_duration_ms")]
    pub sim_duration_ms: u64,
    /// Measurement reporting period in milliseconds
    #[serde(default = "default_report_interval_ms")]
    pub report_interval_ms: u64,
    /// Directory trace files are collected into at the end of the run
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
    /// Optional measurement jitter
    #[serde(default)]
    pub jitter: Option<JitterConfig>,
}

fn default_scenario() -> DeploymentScenario {
    DeploymentScenario::UMa
}

fn default_sim_duration_ms() -> u64 {
    7_000
}

fn default_report_interval_ms() -> u64 {
    10
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("results")
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self {
            scenario: default_scenario(),
            radio: RadioConfig::default(),
            mobility: MobilityConfig::default(),
            handover: HandoverConfig::default(),
            sim_duration_ms: default_sim_duration_ms(),
            report_interval_ms: default_report_interval_ms(),
            output_dir: default_output_dir(),
            jitter: None,
        }
    }
}

impl ScenarioConfig {
    /// Validates the configuration.
    ///
    /// Misconfiguration is fatal: the run refuses to start rather than
    /// producing undefined trigger behavior.
    pub fn validate(&self) -> Result<(), Error> {
        if self.report_interval_ms == 0 {
            return Err(Error::Config(
                "report_interval_ms must be positive".into(),
            ));
        }
        if self.sim_duration_ms < self.report_interval_ms {
            return Err(Error::Config(
                "sim_duration_ms must cover at least one reporting interval".into(),
            ));
        }
        if !self.radio.tx_power_dbm.is_finite() {
            return Err(Error::Config("tx_power_dbm must be finite".into()));
        }
        if self.radio.frequency_hz <= 0.0 || self.radio.bandwidth_hz <= 0.0 {
            return Err(Error::Config(
                "frequency_hz and bandwidth_hz must be positive".into(),
            ));
        }
        if self.mobility.speed_mps < 0.0 || !self.mobility.speed_mps.is_finite() {
            return Err(Error::Config("speed_mps must be non-negative".into()));
        }
        match self.handover.algorithm {
            AlgorithmConfig::RelativeMargin { hysteresis_db } => {
                if hysteresis_db < 0.0 || !hysteresis_db.is_finite() {
                    return Err(Error::Config("hysteresis_db must be non-negative".into()));
                }
            }
            AlgorithmConfig::AbsoluteThreshold {
                serving_threshold_dbm,
                neighbour_offset_db,
            } => {
                if !serving_threshold_dbm.is_finite() {
                    return Err(Error::Config("serving_threshold_dbm must be finite".into()));
                }
                if neighbour_offset_db < 0.0 || !neighbour_offset_db.is_finite() {
                    return Err(Error::Config(
                        "neighbour_offset_db must be non-negative".into(),
                    ));
                }
            }
        }
        if let Some(jitter) = &self.jitter {
            if jitter.amplitude_db < 0.0 || !jitter.amplitude_db.is_finite() {
                return Err(Error::Config("jitter amplitude_db must be non-negative".into()));
            }
        }
        Ok(())
    }
}

/// Loads a scenario configuration from a YAML file and validates it.
pub fn load_scenario_config<P: AsRef<Path>>(path: P) -> Result<ScenarioConfig, Error> {
    let contents = std::fs::read_to_string(path.as_ref())?;
    load_scenario_config_from_str(&contents)
}

/// Loads a scenario configuration from a YAML string and validates it.
pub fn load_scenario_config_from_str(yaml: &str) -> Result<ScenarioConfig, Error> {
    let config: ScenarioConfig = serde_yaml::from_str(yaml)?;
    config.validate()?;
    Ok(config)
}
