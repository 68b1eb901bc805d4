//! Roster filtering.

use super::ClientRecord;

/// Returns the clients whose full name or project contains `query`,
/// case-insensitively, preserving roster order.
///
/// An empty query matches every client. The canonical roster is never
/// touched; callers get an owned view copy.
pub fn filter_roster(roster: &[ClientRecord], query: &str) -> Vec<ClientRecord> {
    let needle = query.to_lowercase();
    roster
        .iter()
        .filter(|client| matches_query(client, &needle))
        .cloned()
        .collect()
}

fn matches_query(client: &ClientRecord, needle: &str) -> bool {
    client.full_name.to_lowercase().contains(needle)
        || client.project.to_lowercase().contains(needle)
}
