//! The facade the view layer drives.

use std::sync::Arc;

use tokio::sync::watch;

use rd_core::client::{ClientRecord, ConversationStatus, RosterStore};
use rd_core::document::StagedDocument;
use rd_core::ids::{ClientId, DocumentId};
use rd_core::session::DetailSession;

use crate::deps::AppDeps;
use crate::state::{shared_view_state, SharedViewState, StateError};
use crate::usecases::{
    CommitDocumentsUseCase, CommitOutcome, ConfirmCloseUseCase, DeselectClientUseCase,
    OpenDocumentUseCase, RemoveClientUseCase, SearchRosterUseCase, SelectClientUseCase,
    SelectOutcome, StageDocumentsUseCase, UnstageDocumentUseCase, UpdateStatusUseCase,
};

/// One front door over the use cases, carrying the shared view state.
///
/// Constructed once at startup and cloned into whatever drives the UI;
/// clones share the same state and roster. Use cases are assembled per call
/// from the dependency group, so they stay individually testable.
#[derive(Clone)]
pub struct RosterEngine {
    deps: AppDeps,
    state: SharedViewState,
}

impl RosterEngine {
    pub fn new(deps: AppDeps) -> Self {
        Self {
            deps,
            state: shared_view_state(),
        }
    }

    pub fn roster(&self) -> Arc<RosterStore> {
        self.deps.roster.clone()
    }

    /// Change feed of the canonical roster; receivers re-derive their view
    /// through [`RosterEngine::current_view`] on every version bump.
    pub fn subscribe_roster(&self) -> watch::Receiver<u64> {
        self.deps.roster.subscribe()
    }

    /// Owned snapshot of the detail session for rendering.
    pub fn session(&self) -> DetailSession {
        self.state.read().unwrap().session.clone()
    }

    pub fn is_busy(&self) -> bool {
        self.state.read().unwrap().is_busy()
    }

    /// Sets the live filter and returns the rows to render.
    pub fn search(&self, query: &str) -> Vec<ClientRecord> {
        SearchRosterUseCase::new(self.deps.roster.clone(), self.state.clone()).execute(query)
    }

    /// Rows for the stored filter, with status overrides applied.
    pub fn current_view(&self) -> Vec<ClientRecord> {
        SearchRosterUseCase::new(self.deps.roster.clone(), self.state.clone()).current()
    }

    pub async fn select_client(&self, client_id: &ClientId) -> SelectOutcome {
        SelectClientUseCase::new(
            self.deps.api.clone(),
            self.deps.confirmation.clone(),
            self.deps.notifier.clone(),
            self.deps.roster.clone(),
            self.state.clone(),
        )
        .execute(client_id)
        .await
    }

    pub async fn deselect_client(&self) -> bool {
        DeselectClientUseCase::new(self.deps.confirmation.clone(), self.state.clone())
            .execute()
            .await
    }

    /// Whether navigating away from the detail view may proceed, without
    /// changing anything.
    pub async fn confirm_close(&self) -> bool {
        ConfirmCloseUseCase::new(self.deps.confirmation.clone(), self.state.clone())
            .execute()
            .await
    }

    pub fn stage_documents(&self, documents: Vec<StagedDocument>) -> Result<usize, StateError> {
        StageDocumentsUseCase::new(self.state.clone()).execute(documents)
    }

    pub fn unstage_document(&self, index: usize) -> Result<Option<StagedDocument>, StateError> {
        UnstageDocumentUseCase::new(self.state.clone()).execute(index)
    }

    pub async fn commit_documents(&self) -> CommitOutcome {
        CommitDocumentsUseCase::new(
            self.deps.api.clone(),
            self.deps.notifier.clone(),
            self.state.clone(),
        )
        .execute()
        .await
    }

    pub async fn update_status(&self, client_id: &ClientId, status: ConversationStatus) -> bool {
        UpdateStatusUseCase::new(
            self.deps.api.clone(),
            self.deps.notifier.clone(),
            self.deps.roster.clone(),
            self.state.clone(),
        )
        .execute(client_id, status)
        .await
    }

    pub async fn remove_client(&self, client_id: &ClientId) -> bool {
        RemoveClientUseCase::new(
            self.deps.api.clone(),
            self.deps.notifier.clone(),
            self.deps.roster.clone(),
            self.state.clone(),
        )
        .execute(client_id)
        .await
    }

    pub async fn open_document(&self, document_id: &DocumentId) -> bool {
        OpenDocumentUseCase::new(
            self.deps.api.clone(),
            self.deps.viewer.clone(),
            self.deps.notifier.clone(),
        )
        .execute(document_id)
        .await
    }
}
