use std::fmt::{Display, Formatter};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ids::ClientId;

/// Conversation status of a client as tracked by the roster provider.
///
/// The provider speaks plain strings on the wire; the two statuses the
/// product acts on get their own variants, everything else rides along
/// untouched in `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ConversationStatus {
    Pending,
    FinalizedDeal,
    Other(String),
}

impl ConversationStatus {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Pending => "Pending",
            Self::FinalizedDeal => "Finalized Deal",
            Self::Other(status) => status,
        }
    }
}

impl Display for ConversationStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<&str> for ConversationStatus {
    fn from(s: &str) -> Self {
        match s {
            "Pending" => Self::Pending,
            "Finalized Deal" => Self::FinalizedDeal,
            other => Self::Other(other.to_string()),
        }
    }
}

impl From<String> for ConversationStatus {
    fn from(s: String) -> Self {
        Self::from(s.as_str())
    }
}

impl From<ConversationStatus> for String {
    fn from(status: ConversationStatus) -> Self {
        status.as_str().to_string()
    }
}

/// A single client entry in the canonical roster.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientRecord {
    pub id: ClientId,
    pub full_name: String,
    pub project: String,
    pub status: ConversationStatus,
    pub created_at: DateTime<Utc>,
}

impl ClientRecord {
    pub fn new(
        id: ClientId,
        full_name: impl Into<String>,
        project: impl Into<String>,
        status: ConversationStatus,
    ) -> Self {
        Self {
            id,
            full_name: full_name.into(),
            project: project.into(),
            status,
            created_at: Utc::now(),
        }
    }
}
