//! Core identity types: UE and cell identifiers.

use std::fmt;

use serde::{Deserialize, Serialize};

/// User Equipment identifier.
///
/// Identifies one mobile terminal for the lifetime of a simulation run.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct UeId(pub u32);

impl UeId {
    /// Creates a new UE identifier.
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Returns the raw identifier value.
    pub const fn value(&self) -> u32 {
        self.0
    }
}

impl fmt::Debug for UeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "UeId({})", self.0)
    }
}

impl fmt::Display for UeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ue-{}", self.0)
    }
}

impl From<u32> for UeId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

/// Cell identifier.
///
/// Identifies the coverage area of one gNB. The ordering of cell
/// identifiers is load-bearing: when several neighbor cells qualify for a
/// handover in the same tick, the lowest identifier wins.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CellId(pub u32);

impl CellId {
    /// Creates a new cell identifier.
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Returns the raw identifier value.
    pub const fn value(&self) -> u32 {
        self.0
    }
}

impl fmt::Debug for CellId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CellId({})", self.0)
    }
}

impl fmt::Display for CellId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cell-{}", self.0)
    }
}

impl From<u32> for CellId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}
