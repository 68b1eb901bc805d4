//! HTTP implementation of the roster service port.

use async_trait::async_trait;
use reqwest::header::{CONTENT_DISPOSITION, CONTENT_TYPE};
use reqwest::multipart::{Form, Part};
use reqwest::{Response, StatusCode};
use tracing::debug;

use rd_core::client::ConversationStatus;
use rd_core::document::{
    filename_from_disposition, DocumentMetadata, DocumentPayload, StagedDocument,
};
use rd_core::ids::{ClientId, DocumentId};
use rd_core::payment::PaymentDetails;
use rd_core::ports::{ApiError, ApiResult, ClientApiPort};

use crate::settings::ApiSettings;

use super::dto::{DocumentMetadataDto, StatusUpdateBody};

/// Multipart field name the service expects for uploads.
const DOCUMENTS_FIELD: &str = "documents";

const FALLBACK_MEDIA_TYPE: &str = "application/octet-stream";

/// Roster service over HTTP.
pub struct HttpClientApi {
    http: reqwest::Client,
    base_url: String,
}

impl HttpClientApi {
    pub fn new(settings: &ApiSettings) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(settings.timeout())
            .build()?;
        Ok(Self {
            http,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

fn expect_success(response: Response) -> Result<Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(map_status(status))
    }
}

fn map_status(status: StatusCode) -> ApiError {
    match status {
        StatusCode::NOT_FOUND => ApiError::NotFound,
        StatusCode::REQUEST_TIMEOUT | StatusCode::GATEWAY_TIMEOUT => ApiError::Timeout,
        status if status.is_server_error() => ApiError::Network(format!("server error: {status}")),
        status => ApiError::UnexpectedStatus(status.as_u16()),
    }
}

fn map_transport(error: reqwest::Error) -> ApiError {
    if error.is_timeout() {
        ApiError::Timeout
    } else {
        ApiError::Network(error.to_string())
    }
}

#[async_trait]
impl ClientApiPort for HttpClientApi {
    async fn delete_client(&self, client: &ClientId) -> ApiResult<()> {
        let url = self.url(&format!("/clients/{client}"));
        debug!(%client, "deleting client");
        let response = self.http.delete(&url).send().await.map_err(map_transport)?;
        expect_success(response)?;
        Ok(())
    }

    async fn list_documents(&self, client: &ClientId) -> ApiResult<Vec<DocumentMetadata>> {
        let url = self.url(&format!("/clients/{client}/documents"));
        let response = self.http.get(&url).send().await.map_err(map_transport)?;
        let response = expect_success(response)?;
        let rows: Vec<DocumentMetadataDto> = response.json().await.map_err(map_transport)?;
        debug!(%client, count = rows.len(), "documents listed");
        Ok(rows
            .into_iter()
            .map(|row| row.into_domain(client))
            .collect())
    }

    async fn fetch_payment_details(&self, client: &ClientId) -> ApiResult<PaymentDetails> {
        let url = self.url(&format!("/clients/{client}/payment-details"));
        let response = self.http.get(&url).send().await.map_err(map_transport)?;
        let response = expect_success(response)?;
        response.json().await.map_err(map_transport)
    }

    async fn upload_documents(
        &self,
        client: &ClientId,
        documents: &[StagedDocument],
    ) -> ApiResult<()> {
        let url = self.url(&format!("/clients/{client}/documents"));
        let mut form = Form::new();
        for document in documents {
            let media_type = document
                .media_type
                .as_deref()
                .unwrap_or(FALLBACK_MEDIA_TYPE);
            let part = Part::bytes(document.content.to_vec())
                .file_name(document.file_name.clone())
                .mime_str(media_type)
                .map_err(map_transport)?;
            form = form.part(DOCUMENTS_FIELD, part);
        }
        debug!(%client, count = documents.len(), "uploading documents");
        let response = self
            .http
            .post(&url)
            .multipart(form)
            .send()
            .await
            .map_err(map_transport)?;
        expect_success(response)?;
        Ok(())
    }

    async fn fetch_document(&self, document: &DocumentId) -> ApiResult<DocumentPayload> {
        let url = self.url(&format!("/documents/{document}"));
        let response = self.http.get(&url).send().await.map_err(map_transport)?;
        let response = expect_success(response)?;

        let media_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .unwrap_or(FALLBACK_MEDIA_TYPE)
            .to_string();
        let suggested_name = response
            .headers()
            .get(CONTENT_DISPOSITION)
            .and_then(|value| value.to_str().ok())
            .and_then(filename_from_disposition);
        let content = response.bytes().await.map_err(map_transport)?;
        debug!(%document, size = content.len(), "document fetched");
        Ok(DocumentPayload {
            content,
            media_type,
            suggested_name,
        })
    }

    async fn update_status(&self, client: &ClientId, status: &ConversationStatus) -> ApiResult<()> {
        let url = self.url(&format!("/clients/{client}/status"));
        let body = StatusUpdateBody {
            conversation_status: status.as_str(),
        };
        debug!(%client, %status, "updating conversation status");
        let response = self
            .http
            .patch(&url)
            .json(&body)
            .send()
            .await
            .map_err(map_transport)?;
        expect_success(response)?;
        Ok(())
    }
}
