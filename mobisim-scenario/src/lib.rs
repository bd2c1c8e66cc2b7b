//! NR handover scenario harness
//!
//! This crate wires the handover decision engine into a runnable
//! simulation: node placement and mobility for a two-gNB corridor, a
//! synthetic signal feed standing in for the external channel model, the
//! fixed-period tick loop, RSRP and handover trace writers, and run
//! summary reporting.
//!
//! The binary entry point lives in `main.rs`; everything here is also
//! usable as a library so integration tests can drive full runs.

pub mod attachment;
pub mod feed;
pub mod run;
pub mod topology;
pub mod trace;

pub use attachment::SimAttachment;
pub use feed::SignalFeed;
pub use run::{run_scenario, RunSummary};
pub use topology::{GnbNode, Mobility, Position, Topology, UeNode};
pub use trace::{collect_traces, HandoverEvent, HandoverTraceWriter, RsrpTraceWriter};
