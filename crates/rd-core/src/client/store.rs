//! Canonical roster store.

use std::sync::RwLock;

use tokio::sync::watch;

use super::{ClientRecord, ConversationStatus};
use crate::ids::ClientId;

/// Owns the shared client collection.
///
/// Derived views never mutate the collection directly; every change goes
/// through one of the entry points below, each of which bumps the version
/// channel so observers know to re-derive. The lock is internal and never
/// exposed, so it cannot be held across an await.
pub struct RosterStore {
    clients: RwLock<Vec<ClientRecord>>,
    version: watch::Sender<u64>,
}

impl RosterStore {
    pub fn new() -> Self {
        let (version, _) = watch::channel(0);
        Self {
            clients: RwLock::new(Vec::new()),
            version,
        }
    }

    pub fn with_clients(clients: Vec<ClientRecord>) -> Self {
        let store = Self::new();
        *store.clients.write().unwrap() = clients;
        store
    }

    /// Replaces the whole collection, e.g. when the roster provider
    /// delivers a fresh snapshot.
    pub fn replace_all(&self, clients: Vec<ClientRecord>) {
        *self.clients.write().unwrap() = clients;
        self.bump();
    }

    /// Owned copy of the current collection, in roster order.
    pub fn snapshot(&self) -> Vec<ClientRecord> {
        self.clients.read().unwrap().clone()
    }

    pub fn get(&self, id: &ClientId) -> Option<ClientRecord> {
        self.clients
            .read()
            .unwrap()
            .iter()
            .find(|client| &client.id == id)
            .cloned()
    }

    /// Removes a client. Returns false when the id is unknown.
    pub fn remove(&self, id: &ClientId) -> bool {
        let removed = {
            let mut clients = self.clients.write().unwrap();
            let before = clients.len();
            clients.retain(|client| &client.id != id);
            clients.len() != before
        };
        if removed {
            self.bump();
        }
        removed
    }

    /// Rewrites the conversation status of a client in place. Returns false
    /// when the id is unknown.
    pub fn update_status(&self, id: &ClientId, status: ConversationStatus) -> bool {
        let updated = {
            let mut clients = self.clients.write().unwrap();
            match clients.iter_mut().find(|client| &client.id == id) {
                Some(client) => {
                    client.status = status;
                    true
                }
                None => false,
            }
        };
        if updated {
            self.bump();
        }
        updated
    }

    /// Change feed for derived views. The value is a monotonically
    /// increasing version; receivers re-read the snapshot on change.
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.version.subscribe()
    }

    pub fn len(&self) -> usize {
        self.clients.read().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn bump(&self) {
        self.version.send_modify(|version| *version += 1);
    }
}

impl Default for RosterStore {
    fn default() -> Self {
        Self::new()
    }
}
