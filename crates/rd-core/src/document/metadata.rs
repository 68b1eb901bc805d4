use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ids::{ClientId, DocumentId};

/// Server-side document descriptor, fetched per client on demand and never
/// cached beyond the active detail session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentMetadata {
    pub id: DocumentId,
    pub client_id: ClientId,
    pub name: String,
    /// Not every deployment reports upload times.
    pub uploaded_at: Option<DateTime<Utc>>,
}
