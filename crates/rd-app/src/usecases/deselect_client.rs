//! Returning from the detail view to the roster.

use std::sync::Arc;

use tracing::debug;

use rd_core::ports::ConfirmationPort;

use crate::state::SharedViewState;
use crate::usecases::confirm_close::ConfirmCloseUseCase;

/// Closes the detail session, guarding staged work behind a confirmation.
pub struct DeselectClientUseCase {
    confirmation: Arc<dyn ConfirmationPort>,
    state: SharedViewState,
}

impl DeselectClientUseCase {
    pub fn new(confirmation: Arc<dyn ConfirmationPort>, state: SharedViewState) -> Self {
        Self {
            confirmation,
            state,
        }
    }

    /// Returns true when the session was closed, false when the user chose
    /// to stay.
    pub async fn execute(&self) -> bool {
        let guard = ConfirmCloseUseCase::new(self.confirmation.clone(), self.state.clone());
        if !guard.execute().await {
            debug!("deselect cancelled, staged documents kept");
            return false;
        }
        self.state.write().unwrap().session.clear();
        debug!("detail session closed");
        true
    }
}
