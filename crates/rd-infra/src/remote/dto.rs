//! Wire shapes of the roster service.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use rd_core::document::DocumentMetadata;
use rd_core::ids::{ClientId, DocumentId};

/// Document row as the service returns it.
#[derive(Debug, Deserialize)]
pub(super) struct DocumentMetadataDto {
    pub id: String,
    pub document_name: String,
    #[serde(default)]
    pub uploaded_at: Option<DateTime<Utc>>,
}

impl DocumentMetadataDto {
    /// The service scopes document routes by client and leaves the owner
    /// out of the row, so it is filled in from the request.
    pub(super) fn into_domain(self, client: &ClientId) -> DocumentMetadata {
        DocumentMetadata {
            id: DocumentId::from(self.id),
            client_id: client.clone(),
            name: self.document_name,
            uploaded_at: self.uploaded_at,
        }
    }
}

/// PATCH body for a conversation status change.
#[derive(Debug, Serialize)]
pub(super) struct StatusUpdateBody<'a> {
    pub conversation_status: &'a str,
}
