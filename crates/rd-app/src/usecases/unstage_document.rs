//! Removing a single document from the active stage.

use tracing::debug;

use rd_core::document::StagedDocument;

use crate::state::{SharedViewState, StateError};

/// Drops the staged document at a given position.
pub struct UnstageDocumentUseCase {
    state: SharedViewState,
}

impl UnstageDocumentUseCase {
    pub fn new(state: SharedViewState) -> Self {
        Self { state }
    }

    /// Removes the staged document at `index`. Returns `None` when the index
    /// is already out of range, which happens when the view races a commit.
    pub fn execute(&self, index: usize) -> Result<Option<StagedDocument>, StateError> {
        let mut state = self.state.write().unwrap();
        let stager = state
            .session
            .stager_mut()
            .ok_or(StateError::NoSelection)?;
        let removed = stager.unstage(index);
        if let Some(document) = &removed {
            debug!(index, file_name = %document.file_name, "document unstaged");
        }
        Ok(removed)
    }
}
