//! Common types and utilities for mobisim
//!
//! This crate provides the shared foundation used across the mobisim
//! workspace: identity types, simulation time, scenario configuration,
//! error types, and logging setup.

pub mod config;
pub mod error;
pub mod logging;
pub mod sim_tick;
pub mod types;

pub use config::{
    load_scenario_config, load_scenario_config_from_str, AlgorithmConfig, DeploymentScenario,
    HandoverConfig, JitterConfig, MobilityConfig, RadioConfig, ScenarioConfig,
};
pub use error::Error;
pub use logging::{init_logging, init_logging_with_filter, LogLevel};
pub use sim_tick::{SimTime, SimulationClock, SimulationTimeConfig};
pub use types::{CellId, UeId};
