//! Attachment controller interface.
//!
//! The attachment controller is the collaborator that actually moves a UE
//! between cells. The decision engine emits [`crate::HandoverDecision`]s;
//! the simulation loop forwards them here and reports the outcome back to
//! the engine.

use thiserror::Error;

use mobisim_common::{CellId, UeId};

/// Acknowledgment of an accepted handover request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HandoverAck {
    /// UE that was moved
    pub ue_id: UeId,
    /// New serving cell after the handover
    pub new_serving_cell_id: CellId,
}

/// Errors returned by the attachment controller.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum AttachmentError {
    /// The target cell cannot be reached; the UE stays on its serving
    /// cell. Non-fatal: the engine re-arms on the next qualifying tick.
    #[error("target {0} unreachable")]
    Unreachable(CellId),
}

/// Command surface for reassigning a UE's serving cell.
pub trait AttachmentController {
    /// Requests a handover of `ue_id` to `target_cell_id`.
    fn request_handover(
        &mut self,
        ue_id: UeId,
        target_cell_id: CellId,
    ) -> Result<HandoverAck, AttachmentError>;
}
