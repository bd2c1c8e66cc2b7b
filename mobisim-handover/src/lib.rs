//! Handover decision engine
//!
//! This crate decides, from a stream of per-cell signal measurements, when
//! and to which target cell a UE should hand over. It implements the
//! event-triggered decision logic of an NR RRC measurement configuration:
//! a configurable trigger condition with hysteresis, guarded by a
//! time-to-trigger window against transient fluctuations.
//!
//! # Event Types
//!
//! Two trigger variants are supported, mirroring the 3GPP measurement
//! events they are modeled on:
//!
//! - **Relative margin** ("A3-style"): neighbor becomes amount better
//!   than serving.
//! - **Absolute threshold** ("A2-A4-style"): serving becomes worse than a
//!   floor AND neighbor becomes offset better than serving.
//!
//! Both variants share the same arm/confirm/cancel state machine; they
//! differ only in the boolean condition evaluated per neighbor.
//!
//! # Architecture
//!
//! The engine is a synchronous callee: the simulation loop feeds it one
//! [`MeasurementReport`] per UE per reporting interval and acts on the
//! returned [`HandoverDecision`], reporting the outcome back through
//! [`HandoverEngine::notify_handover_complete`] or
//! [`HandoverEngine::notify_handover_failed`]. The engine never schedules
//! itself and performs no I/O.
//!
//! # Reference
//! - 3GPP TS 38.331: NR; RRC protocol specification (measurement events)

pub mod algorithm;
pub mod attachment;
pub mod engine;
pub mod measurement;

pub use algorithm::{AlgorithmError, HandoverAlgorithm};
pub use attachment::{AttachmentController, AttachmentError, HandoverAck};
pub use engine::{EngineConfig, EngineError, HandoverDecision, HandoverEngine, TriggerState};
pub use measurement::{Measurement, MeasurementReport, NeighborMeasurement};
