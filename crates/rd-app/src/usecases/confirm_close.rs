//! The unsaved-changes guard shared by every navigation path.

use std::sync::Arc;

use rd_core::ports::ConfirmationPort;

use crate::state::SharedViewState;
use crate::usecases::UNSAVED_CHANGES_PROMPT;

/// Asks the user whether staged work may be discarded.
///
/// Clean sessions pass without a prompt. The session itself is never touched
/// here, so the same check serves deselection and switching alike.
pub struct ConfirmCloseUseCase {
    confirmation: Arc<dyn ConfirmationPort>,
    state: SharedViewState,
}

impl ConfirmCloseUseCase {
    pub fn new(confirmation: Arc<dyn ConfirmationPort>, state: SharedViewState) -> Self {
        Self {
            confirmation,
            state,
        }
    }

    /// Returns true when navigating away may proceed.
    pub async fn execute(&self) -> bool {
        let dirty = self.state.read().unwrap().session.is_dirty();
        if !dirty {
            return true;
        }
        self.confirmation
            .confirm_discard(UNSAVED_CHANGES_PROMPT)
            .await
    }
}
