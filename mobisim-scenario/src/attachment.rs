//! Attachment controller over the simulated topology.

use std::collections::BTreeSet;

use tracing::info;

use mobisim_common::{CellId, UeId};
use mobisim_handover::{AttachmentController, AttachmentError, HandoverAck};

/// Attachment controller backed by the deployed cell set.
///
/// Requests naming a deployed cell are acknowledged; anything else is
/// unreachable. Cells can be taken out of service to exercise the
/// engine's retry behavior.
pub struct SimAttachment {
    cells: BTreeSet<CellId>,
    out_of_service: BTreeSet<CellId>,
}

impl SimAttachment {
    /// Creates a controller over the given cell set.
    pub fn new(cells: impl IntoIterator<Item = CellId>) -> Self {
        Self {
            cells: cells.into_iter().collect(),
            out_of_service: BTreeSet::new(),
        }
    }

    /// Marks a cell as out of service; requests for it become unreachable.
    pub fn take_out_of_service(&mut self, cell_id: CellId) {
        self.out_of_service.insert(cell_id);
    }

    /// Returns a cell to service.
    pub fn return_to_service(&mut self, cell_id: CellId) {
        self.out_of_service.remove(&cell_id);
    }
}

impl AttachmentController for SimAttachment {
    fn request_handover(
        &mut self,
        ue_id: UeId,
        target_cell_id: CellId,
    ) -> Result<HandoverAck, AttachmentError> {
        if !self.cells.contains(&target_cell_id) || self.out_of_service.contains(&target_cell_id) {
            return Err(AttachmentError::Unreachable(target_cell_id));
        }
        info!("attaching {ue_id} to {target_cell_id}");
        Ok(HandoverAck {
            ue_id,
            new_serving_cell_id: target_cell_id,
        })
    }
}
