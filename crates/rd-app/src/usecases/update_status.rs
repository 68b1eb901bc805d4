//! Optimistic conversation-status transitions.

use std::sync::Arc;

use tracing::{error, info, warn};

use rd_core::client::{ConversationStatus, RosterStore};
use rd_core::ids::ClientId;
use rd_core::ports::{ClientApiPort, NotifierPort};

use crate::state::SharedViewState;

/// Pushes a status change to the remote service while the view already
/// shows it.
///
/// The transition goes through the override map: inserted before the
/// request, removed once it settles. Concurrent transitions for the same
/// client are not deduplicated; the override always carries the newest
/// intent, and each settling request may only clear the value it wrote
/// itself.
pub struct UpdateStatusUseCase {
    api: Arc<dyn ClientApiPort>,
    notifier: Arc<dyn NotifierPort>,
    roster: Arc<RosterStore>,
    state: SharedViewState,
}

impl UpdateStatusUseCase {
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

    /// Returns true when the remote service accepted the transition.
    #[tracing::instrument(
        name = "usecase.update_status.execute",
        skip(self),
        fields(client = %client_id, status = %status)
    )]
    pub async fn execute(&self, client_id: &ClientId, status: ConversationStatus) -> bool {
        let Some(client) = self.roster.get(client_id) else {
            warn!("status change for a client not in the roster");
            return false;
        };

        // 1. The view flips immediately through the override.
        {
            let mut state = self.state.write().unwrap();
            state
                .status_overrides
                .insert(client_id.clone(), status.clone());
            state.begin_op();
        }

        let result = self.api.update_status(client_id, &status).await;

        // 2. Settle. The override may only be cleared while it still holds
        //    the value this transition wrote; otherwise a newer transition
        //    owns it.
        let mut state = self.state.write().unwrap();
        state.end_op();
        let still_ours = state.status_overrides.get(client_id) == Some(&status);
        match result {
            Ok(()) => {
                if still_ours {
                    state.status_overrides.remove(client_id);
                }
                drop(state);
                self.roster.update_status(client_id, status.clone());
                info!("status transition accepted");
                self.notifier.success(&format!(
                    "Successfully updated {}'s status to {}",
                    client.full_name, status
                ));
                true
            }
            Err(api_error) => {
                if still_ours {
                    state.status_overrides.remove(client_id);
                }
                drop(state);
                error!(
                    error = %api_error,
                    transient = api_error.is_transient(),
                    "status transition rejected"
                );
                self.notifier
                    .error(&format!("Error updating client status: {api_error}"));
                false
            }
        }
    }
}
