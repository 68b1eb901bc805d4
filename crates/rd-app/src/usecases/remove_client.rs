//! Removing a client from the roster.

use std::sync::Arc;

use tracing::{error, info};

use rd_core::client::RosterStore;
use rd_core::ids::ClientId;
use rd_core::ports::{ClientApiPort, NotifierPort};

use crate::state::SharedViewState;

pub(crate) const REMOVE_ERROR_NOTICE: &str = "Error removing client. Please try again.";

/// Deletes a client remotely, then drops it from the canonical roster.
///
/// The detail session is deliberately left alone even when the removed
/// client is the open one; the view layer decides whether to close it.
pub struct RemoveClientUseCase {
    api: Arc<dyn ClientApiPort>,
    notifier: Arc<dyn NotifierPort>,
    roster: Arc<RosterStore>,
    state: SharedViewState,
}

impl RemoveClientUseCase {
    pub fn new(
        api: Arc<dyn ClientApiPort>,
        notifier: Arc<dyn NotifierPort>,
        roster: Arc<RosterStore>,
        state: SharedViewState,
    ) -> Self {
        Self {
            api,
            notifier,
            roster,
            state,
        }
    }

    /// Returns true when the client is gone from the roster.
    #[tracing::instrument(
        name = "usecase.remove_client.execute",
        skip(self),
        fields(client = %client_id)
    )]
    pub async fn execute(&self, client_id: &ClientId) -> bool {
        self.state.write().unwrap().begin_op();
        let result = self.api.delete_client(client_id).await;
        let mut state = self.state.write().unwrap();
        state.end_op();
        match result {
            Ok(()) => {
                // No row left to overlay.
                state.status_overrides.remove(client_id);
                drop(state);
                let removed = self.roster.remove(client_id);
                info!(removed, "client removed");
                removed
            }
            Err(api_error) => {
                drop(state);
                error!(error = %api_error, "client removal failed");
                self.notifier.error(REMOVE_ERROR_NOTICE);
                false
            }
        }
    }
}
