//! Staging freshly picked files onto the active detail session.

use tracing::debug;

use rd_core::document::StagedDocument;

use crate::state::{SharedViewState, StateError};

/// Appends picked files to the active session's stage.
pub struct StageDocumentsUseCase {
    state: SharedViewState,
}

impl StageDocumentsUseCase {
    pub fn new(state: SharedViewState) -> Self {
        Self { state }
    }

    /// Stages `documents` and returns the resulting stage size.
    ///
    /// Fails with [`StateError::NoSelection`] when no client is open; picked
    /// files are dropped in that case rather than parked somewhere global.
    pub fn execute(&self, documents: Vec<StagedDocument>) -> Result<usize, StateError> {
        let picked = documents.len();
        let mut state = self.state.write().unwrap();
        let stager = state
            .session
            .stager_mut()
            .ok_or(StateError::NoSelection)?;
        stager.stage_all(documents);
        let staged = stager.len();
        debug!(picked, staged, "documents staged");
        Ok(staged)
    }
}
