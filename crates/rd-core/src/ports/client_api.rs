use async_trait::async_trait;

use crate::client::ConversationStatus;
use crate::document::{DocumentMetadata, DocumentPayload, StagedDocument};
use crate::ids::{ClientId, DocumentId};
use crate::payment::PaymentDetails;

use super::errors::ApiError;

pub type ApiResult<T> = std::result::Result<T, ApiError>;

/// Remote persistence service for clients and their documents.
#[async_trait]
pub trait ClientApiPort: Send + Sync {
    /// Deletes the client record remotely.
    async fn delete_client(&self, client: &ClientId) -> ApiResult<()>;

    /// Lists the documents stored for a client.
    async fn list_documents(&self, client: &ClientId) -> ApiResult<Vec<DocumentMetadata>>;

    /// Fetches the payment details of a client. Clients without payment
    /// details answer with [`ApiError::NotFound`].
    async fn fetch_payment_details(&self, client: &ClientId) -> ApiResult<PaymentDetails>;

    /// Uploads the given documents as one multipart request.
    async fn upload_documents(
        &self,
        client: &ClientId,
        documents: &[StagedDocument],
    ) -> ApiResult<()>;

    /// Fetches a single document body with its content metadata.
    async fn fetch_document(&self, document: &DocumentId) -> ApiResult<DocumentPayload>;

    /// Persists a new conversation status for a client.
    async fn update_status(&self, client: &ClientId, status: &ConversationStatus) -> ApiResult<()>;
}
