//! Simulation time and the fixed-period tick clock.
//!
//! All domain logic runs on simulated time, expressed in milliseconds since
//! the start of the run. The clock is advanced only by the scenario loop;
//! components never schedule themselves.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// A point in simulated time, in milliseconds since run start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SimTime(u64);

impl SimTime {
    /// Simulation time zero.
    pub const ZERO: SimTime = SimTime(0);

    /// Creates a timestamp from milliseconds since run start.
    pub const fn from_millis(ms: u64) -> Self {
        Self(ms)
    }

    /// Returns the timestamp as milliseconds since run start.
    pub const fn as_millis(&self) -> u64 {
        self.0
    }

    /// Returns the timestamp as fractional seconds since run start.
    pub fn as_secs_f64(&self) -> f64 {
        self.0 as f64 / 1000.0
    }

    /// Returns the duration elapsed since an earlier timestamp.
    ///
    /// Saturates to zero if `earlier` is in the future.
    pub fn elapsed_since(&self, earlier: SimTime) -> Duration {
        Duration::from_millis(self.0.saturating_sub(earlier.0))
    }

    /// Returns this timestamp advanced by a duration.
    pub fn advanced_by(&self, d: Duration) -> Self {
        Self(self.0 + d.as_millis() as u64)
    }
}

impl std::fmt::Display for SimTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}ms", self.0)
    }
}

impl From<u64> for SimTime {
    fn from(ms: u64) -> Self {
        Self(ms)
    }
}

/// Simulation time configuration.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SimulationTimeConfig {
    /// Duration of each tick in milliseconds
    pub tick_duration_ms: u64,
    /// Total simulation duration in milliseconds
    pub total_duration_ms: u64,
}

impl Default for SimulationTimeConfig {
    fn default() -> Self {
        Self {
            tick_duration_ms: 10, // 10 ms reporting period
            total_duration_ms: 7_000,
        }
    }
}

impl SimulationTimeConfig {
    /// Creates a new simulation time configuration.
    pub fn new(tick_duration_ms: u64, total_duration_ms: u64) -> Self {
        Self {
            tick_duration_ms,
            total_duration_ms,
        }
    }

    /// Returns the tick period as a Duration.
    pub fn tick_duration(&self) -> Duration {
        Duration::from_millis(self.tick_duration_ms)
    }

    /// Returns the total number of ticks in the run.
    pub fn total_ticks(&self) -> u64 {
        self.total_duration_ms / self.tick_duration_ms
    }
}

/// Monotonic simulation clock advanced by the scenario loop.
#[derive(Debug)]
pub struct SimulationClock {
    now: SimTime,
    config: SimulationTimeConfig,
}

impl SimulationClock {
    /// Creates a clock at time zero.
    pub fn new(config: SimulationTimeConfig) -> Self {
        Self {
            now: SimTime::ZERO,
            config,
        }
    }

    /// Returns the current simulation time.
    pub fn now(&self) -> SimTime {
        self.now
    }

    /// Returns the configuration.
    pub fn config(&self) -> &SimulationTimeConfig {
        &self.config
    }

    /// Advances the clock by one tick period.
    pub fn tick(&mut self) {
        self.now = SimTime(self.now.0 + self.config.tick_duration_ms);
    }

    /// Returns true once the configured duration has elapsed.
    pub fn is_complete(&self) -> bool {
        self.now.0 >= self.config.total_duration_ms
    }

    /// Resets the clock to time zero.
    pub fn reset(&mut self) {
        self.now = SimTime::ZERO;
    }
}

impl Default for SimulationClock {
    fn default() -> Self {
        Self::new(SimulationTimeConfig::default())
    }
}
