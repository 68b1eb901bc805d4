//! Roster filtering with the status overlay applied.

use std::sync::Arc;

use tracing::debug;

use rd_core::client::{filter_roster, ClientRecord, RosterStore};

use crate::state::SharedViewState;

/// Filters the roster by the live search query and applies any in-flight
/// status overrides to the rows handed to the view.
pub struct SearchRosterUseCase {
    roster: Arc<RosterStore>,
    state: SharedViewState,
}

impl SearchRosterUseCase {
    pub fn new(roster: Arc<RosterStore>, state: SharedViewState) -> Self {
        Self { roster, state }
    }

    /// Stores `query` as the live filter and returns the matching rows.
    pub fn execute(&self, query: &str) -> Vec<ClientRecord> {
        let snapshot = self.roster.snapshot();
        let mut state = self.state.write().unwrap();
        state.query = query.to_string();
        let mut rows = filter_roster(&snapshot, &state.query);
        state.overlay_status(&mut rows);
        debug!(query, matches = rows.len(), "roster filtered");
        rows
    }

    /// Re-derives the current rows without changing the stored query.
    pub fn current(&self) -> Vec<ClientRecord> {
        let snapshot = self.roster.snapshot();
        let state = self.state.read().unwrap();
        let mut rows = filter_roster(&snapshot, &state.query);
        state.overlay_status(&mut rows);
        rows
    }
}
