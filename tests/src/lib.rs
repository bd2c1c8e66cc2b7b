//! Integration test framework for mobisim
//!
//! This crate provides test utilities and end-to-end scenario tests that
//! exercise the public APIs of the mobisim workspace together: scenario
//! configuration, topology, signal feed, decision engine, attachment
//! controller, and trace output.
//!
//! # Test Categories
//!
//! 1. **Scenario Tests** - full runs over the default and configured
//!    scenarios
//! 2. **Engine Integration Tests** - the engine driven by the synthetic
//!    feed rather than hand-built reports

pub mod test_utils;

pub mod engine_integration;
pub mod handover_scenario;

pub use test_utils::init_test_logging;
