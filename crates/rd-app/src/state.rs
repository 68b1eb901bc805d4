//! Shared view-model state.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use rd_core::client::{ClientRecord, ConversationStatus};
use rd_core::ids::ClientId;
use rd_core::session::DetailSession;
use thiserror::Error;

#[derive(Debug, PartialEq, Eq, Error)]
pub enum StateError {
    #[error("no client selected")]
    NoSelection,
}

/// Mutable view-model state behind a std `RwLock` that is never held
/// across an await: use cases snapshot what they need, await, then re-lock
/// and validate against the session epoch before applying results.
pub struct ViewState {
    /// Current roster search query.
    pub query: String,

    /// The detail session, including any staged documents.
    pub session: DetailSession,

    /// Optimistic status overlays, keyed by client. An entry shadows the
    /// canonical status until its remote mutation settles.
    pub status_overrides: HashMap<ClientId, ConversationStatus>,

    next_epoch: u64,
    pending_ops: usize,
}

impl ViewState {
    pub fn new() -> Self {
        Self {
            query: String::new(),
            session: DetailSession::NoSelection,
            status_overrides: HashMap::new(),
            next_epoch: 0,
            pending_ops: 0,
        }
    }

    /// Hands out the next selection epoch.
    pub fn next_epoch(&mut self) -> u64 {
        self.next_epoch += 1;
        self.next_epoch
    }

    pub fn begin_op(&mut self) {
        self.pending_ops += 1;
    }

    pub fn end_op(&mut self) {
        self.pending_ops = self.pending_ops.saturating_sub(1);
    }

    /// True while a remote mutation is in flight; hosts disable the
    /// affected controls meanwhile.
    pub fn is_busy(&self) -> bool {
        self.pending_ops > 0
    }

    /// Applies the status overlays onto a derived roster copy.
    pub fn overlay_status(&self, clients: &mut [ClientRecord]) {
        for client in clients.iter_mut() {
            if let Some(status) = self.status_overrides.get(&client.id) {
                client.status = status.clone();
            }
        }
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new()
    }
}

pub type SharedViewState = Arc<RwLock<ViewState>>;

pub fn shared_view_state() -> SharedViewState {
    Arc::new(RwLock::new(ViewState::new()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rd_core::client::ConversationStatus;

    fn client(id: &str, status: ConversationStatus) -> ClientRecord {
        ClientRecord::new(ClientId::from(id), "Name", "Project", status)
    }

    #[test]
    fn test_epochs_are_strictly_increasing() {
        let mut state = ViewState::new();
        let first = state.next_epoch();
        let second = state.next_epoch();
        assert!(second > first);
    }

    #[test]
    fn test_overlay_shadows_canonical_status() {
        let mut state = ViewState::new();
        state
            .status_overrides
            .insert(ClientId::from("c1"), ConversationStatus::FinalizedDeal);

        let mut view = vec![
            client("c1", ConversationStatus::Pending),
            client("c2", ConversationStatus::Pending),
        ];
        state.overlay_status(&mut view);

        assert_eq!(view[0].status, ConversationStatus::FinalizedDeal);
        assert_eq!(view[1].status, ConversationStatus::Pending);
    }

    #[test]
    fn test_busy_tracks_pending_operations() {
        let mut state = ViewState::new();
        assert!(!state.is_busy());

        state.begin_op();
        state.begin_op();
        state.end_op();
        assert!(state.is_busy());

        state.end_op();
        assert!(!state.is_busy());

        // Unbalanced end never underflows.
        state.end_op();
        assert!(!state.is_busy());
    }
}
