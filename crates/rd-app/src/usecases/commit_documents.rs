//! Committing the staged documents to the remote service.

use std::sync::Arc;

use tracing::{debug, error, warn};

use rd_core::ports::{ClientApiPort, NotifierPort};

use crate::state::SharedViewState;
use crate::usecases::select_client::FETCH_ERROR_NOTICE;

pub(crate) const UPLOAD_ERROR_NOTICE: &str = "Error uploading documents. Please try again.";

/// How a commit attempt ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitOutcome {
    /// Upload accepted; the stage is clean again.
    Committed,
    /// The stage was empty; nothing was sent.
    NothingStaged,
    /// No client is selected.
    NoSelection,
    /// The upload failed; the stage is untouched and may be retried.
    Failed,
}

/// Uploads the staged documents, then refreshes the authoritative list.
pub struct CommitDocumentsUseCase {
    api: Arc<dyn ClientApiPort>,
    notifier: Arc<dyn NotifierPort>,
    state: SharedViewState,
}

impl CommitDocumentsUseCase {
    pub fn new(
        api: Arc<dyn ClientApiPort>,
        notifier: Arc<dyn NotifierPort>,
        state: SharedViewState,
    ) -> Self {
        Self {
            api,
            notifier,
            state,
        }
    }

    #[tracing::instrument(name = "usecase.commit_documents.execute", skip(self))]
    pub async fn execute(&self) -> CommitOutcome {
        // 1. Snapshot the stage; the lock is not held across the upload.
        let (client_id, epoch, staged) = {
            let state = self.state.read().unwrap();
            let Some(client) = state.session.client() else {
                return CommitOutcome::NoSelection;
            };
            let staged = state
                .session
                .stager()
                .map(|stager| stager.staged().to_vec())
                .unwrap_or_default();
            (
                client.id.clone(),
                state.session.epoch().unwrap_or_default(),
                staged,
            )
        };
        if staged.is_empty() {
            debug!("nothing staged, commit skipped");
            return CommitOutcome::NothingStaged;
        }

        // 2. Upload failures leave the stage intact for a retry.
        if let Err(error) = self.api.upload_documents(&client_id, &staged).await {
            error!(%error, client = %client_id, "document upload failed");
            self.notifier.error(UPLOAD_ERROR_NOTICE);
            return CommitOutcome::Failed;
        }

        // 3. Clean the stage only while the session that staged these
        //    documents is still the open one.
        {
            let mut state = self.state.write().unwrap();
            if state.session.epoch() != Some(epoch) {
                debug!("commit settled after the session moved on");
                return CommitOutcome::Committed;
            }
            if let Some(stager) = state.session.stager_mut() {
                stager.mark_committed();
            }
        }
        debug!(uploaded = staged.len(), client = %client_id, "documents committed");

        // 4. Refresh the authoritative list; a failure keeps the previous
        //    one on screen.
        match self.api.list_documents(&client_id).await {
            Ok(documents) => {
                self.state
                    .write()
                    .unwrap()
                    .session
                    .replace_documents(epoch, documents);
            }
            Err(error) => {
                warn!(%error, client = %client_id, "post-commit refresh failed");
                self.notifier.error(FETCH_ERROR_NOTICE);
            }
        }
        CommitOutcome::Committed
    }
}
