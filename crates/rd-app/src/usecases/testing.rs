//! Shared call-recording fakes for use-case tests.

use std::collections::{HashMap, VecDeque};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;

use rd_core::client::{ClientRecord, ConversationStatus, RosterStore};
use rd_core::document::{DocumentMetadata, DocumentPayload, StagedDocument};
use rd_core::ids::{ClientId, DocumentId};
use rd_core::payment::PaymentDetails;
use rd_core::ports::{
    ApiError, ApiResult, BlobHandle, ClientApiPort, ConfirmationPort, DocumentViewerPort,
    NotifierPort,
};
use rd_core::session::DetailSession;

use crate::state::{shared_view_state, SharedViewState};

/// One planned answer for `update_status`, consumed in call order.
#[derive(Debug, Clone)]
pub struct PlannedStatusCall {
    pub delay: Duration,
    pub result: ApiResult<()>,
}

/// Remote service fake. Every call is recorded; responses and artificial
/// fetch latencies are configured per test.
pub struct RecordingApi {
    pub delete_calls: Mutex<Vec<ClientId>>,
    pub list_documents_calls: Mutex<Vec<ClientId>>,
    pub payment_calls: Mutex<Vec<ClientId>>,
    pub upload_calls: Mutex<Vec<(ClientId, Vec<StagedDocument>)>>,
    pub fetch_document_calls: Mutex<Vec<DocumentId>>,
    pub status_calls: Mutex<Vec<(ClientId, ConversationStatus)>>,

    pub documents_result: Mutex<ApiResult<Vec<DocumentMetadata>>>,
    pub payment_result: Mutex<ApiResult<PaymentDetails>>,
    pub delete_result: Mutex<ApiResult<()>>,
    pub upload_result: Mutex<ApiResult<()>>,
    pub document_result: Mutex<ApiResult<DocumentPayload>>,

    /// Planned `update_status` answers; an empty queue answers `Ok` with no
    /// delay.
    pub status_plan: Mutex<VecDeque<PlannedStatusCall>>,

    /// Per-client artificial latency for the detail fetches, driven by the
    /// paused tokio clock in tests.
    pub fetch_delays: Mutex<HashMap<ClientId, Duration>>,
}

impl Default for RecordingApi {
    fn default() -> Self {
        Self {
            delete_calls: Mutex::new(Vec::new()),
            list_documents_calls: Mutex::new(Vec::new()),
            payment_calls: Mutex::new(Vec::new()),
            upload_calls: Mutex::new(Vec::new()),
            fetch_document_calls: Mutex::new(Vec::new()),
            status_calls: Mutex::new(Vec::new()),
            documents_result: Mutex::new(Ok(Vec::new())),
            payment_result: Mutex::new(Err(ApiError::NotFound)),
            delete_result: Mutex::new(Ok(())),
            upload_result: Mutex::new(Ok(())),
            document_result: Mutex::new(Ok(pdf_payload())),
            status_plan: Mutex::new(VecDeque::new()),
            fetch_delays: Mutex::new(HashMap::new()),
        }
    }
}

impl RecordingApi {
    async fn simulate_latency(&self, client: &ClientId) {
        let delay = self.fetch_delays.lock().unwrap().get(client).copied();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
    }
}

#[async_trait]
impl ClientApiPort for RecordingApi {
    async fn delete_client(&self, client: &ClientId) -> ApiResult<()> {
        self.delete_calls.lock().unwrap().push(client.clone());
        self.delete_result.lock().unwrap().clone()
    }

    async fn list_documents(&self, client: &ClientId) -> ApiResult<Vec<DocumentMetadata>> {
        self.list_documents_calls.lock().unwrap().push(client.clone());
        self.simulate_latency(client).await;
        self.documents_result.lock().unwrap().clone()
    }

    async fn fetch_payment_details(&self, client: &ClientId) -> ApiResult<PaymentDetails> {
        self.payment_calls.lock().unwrap().push(client.clone());
        self.simulate_latency(client).await;
        self.payment_result.lock().unwrap().clone()
    }

    async fn upload_documents(
        &self,
        client: &ClientId,
        documents: &[StagedDocument],
    ) -> ApiResult<()> {
        self.upload_calls
            .lock()
            .unwrap()
            .push((client.clone(), documents.to_vec()));
        self.upload_result.lock().unwrap().clone()
    }

    async fn fetch_document(&self, document: &DocumentId) -> ApiResult<DocumentPayload> {
        self.fetch_document_calls
            .lock()
            .unwrap()
            .push(document.clone());
        self.document_result.lock().unwrap().clone()
    }

    async fn update_status(
        &self,
        client: &ClientId,
        status: &ConversationStatus,
    ) -> ApiResult<()> {
        self.status_calls
            .lock()
            .unwrap()
            .push((client.clone(), status.clone()));
        let planned = self.status_plan.lock().unwrap().pop_front();
        match planned {
            Some(call) => {
                if !call.delay.is_zero() {
                    tokio::time::sleep(call.delay).await;
                }
                call.result
            }
            None => Ok(()),
        }
    }
}

/// Platform viewer fake recording the full handle lifecycle.
#[derive(Default)]
pub struct RecordingViewer {
    handle_seq: AtomicUsize,
    pub published: Mutex<Vec<(BlobHandle, String)>>,
    pub opened_inline: Mutex<Vec<BlobHandle>>,
    pub saved_as: Mutex<Vec<(BlobHandle, String)>>,
    pub released: Mutex<Vec<BlobHandle>>,
    pub fail_publish: AtomicBool,
    pub fail_open: AtomicBool,
}

impl RecordingViewer {
    /// True when every published handle was released exactly once.
    pub fn all_released(&self) -> bool {
        let published: Vec<BlobHandle> = self
            .published
            .lock()
            .unwrap()
            .iter()
            .map(|(handle, _)| handle.clone())
            .collect();
        let released = self.released.lock().unwrap();
        published.len() == released.len() && published.iter().all(|handle| released.contains(handle))
    }
}

#[async_trait]
impl DocumentViewerPort for RecordingViewer {
    async fn publish(&self, _content: Bytes, media_type: &str) -> anyhow::Result<BlobHandle> {
        if self.fail_publish.load(Ordering::SeqCst) {
            anyhow::bail!("publish refused");
        }
        let handle = BlobHandle(format!(
            "blob:{}",
            self.handle_seq.fetch_add(1, Ordering::SeqCst)
        ));
        self.published
            .lock()
            .unwrap()
            .push((handle.clone(), media_type.to_string()));
        Ok(handle)
    }

    async fn open_inline(&self, handle: &BlobHandle) -> anyhow::Result<()> {
        if self.fail_open.load(Ordering::SeqCst) {
            anyhow::bail!("viewing context refused to open");
        }
        self.opened_inline.lock().unwrap().push(handle.clone());
        Ok(())
    }

    async fn save_as(&self, handle: &BlobHandle, file_name: &str) -> anyhow::Result<()> {
        self.saved_as
            .lock()
            .unwrap()
            .push((handle.clone(), file_name.to_string()));
        Ok(())
    }

    async fn release(&self, handle: BlobHandle) -> anyhow::Result<()> {
        self.released.lock().unwrap().push(handle);
        Ok(())
    }
}

/// Confirmation fake with a fixed answer.
pub struct StubConfirmation {
    pub accept: bool,
    pub prompts: Mutex<Vec<String>>,
}

impl StubConfirmation {
    pub fn accepting() -> Self {
        Self {
            accept: true,
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn declining() -> Self {
        Self {
            accept: false,
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn prompt_count(&self) -> usize {
        self.prompts.lock().unwrap().len()
    }
}

#[async_trait]
impl ConfirmationPort for StubConfirmation {
    async fn confirm_discard(&self, message: &str) -> bool {
        self.prompts.lock().unwrap().push(message.to_string());
        self.accept
    }
}

/// Notice sink recording what the user would have seen.
#[derive(Default)]
pub struct RecordingNotifier {
    pub errors: Mutex<Vec<String>>,
    pub successes: Mutex<Vec<String>>,
}

impl RecordingNotifier {
    pub fn error_count(&self) -> usize {
        self.errors.lock().unwrap().len()
    }

    pub fn success_count(&self) -> usize {
        self.successes.lock().unwrap().len()
    }
}

impl NotifierPort for RecordingNotifier {
    fn error(&self, message: &str) {
        self.errors.lock().unwrap().push(message.to_string());
    }

    fn success(&self, message: &str) {
        self.successes.lock().unwrap().push(message.to_string());
    }
}

// =============================================================================
// Builders
// =============================================================================

pub fn client(id: &str, full_name: &str, project: &str) -> ClientRecord {
    ClientRecord::new(
        ClientId::from(id),
        full_name,
        project,
        ConversationStatus::Pending,
    )
}

pub fn seeded_roster() -> Arc<RosterStore> {
    Arc::new(RosterStore::with_clients(vec![
        client("c1", "Alice Archer", "Harbor Bridge"),
        client("c2", "Bruno Keller", "Skyline Tower"),
    ]))
}

pub fn staged(name: &str) -> StagedDocument {
    StagedDocument::new(
        name,
        Some("application/pdf".to_string()),
        Bytes::from_static(b"%PDF"),
    )
}

pub fn document(id: &str, client_id: &str, name: &str) -> DocumentMetadata {
    DocumentMetadata {
        id: DocumentId::from(id),
        client_id: ClientId::from(client_id),
        name: name.to_string(),
        uploaded_at: None,
    }
}

pub fn payment_details() -> PaymentDetails {
    PaymentDetails {
        account_holder: "Alice Archer".to_string(),
        account_number: "DE02120300000000202051".to_string(),
        bank_name: Some("Testbank".to_string()),
        billing_email: None,
    }
}

pub fn pdf_payload() -> DocumentPayload {
    DocumentPayload {
        content: Bytes::from_static(b"%PDF-1.7"),
        media_type: "application/pdf".to_string(),
        suggested_name: Some("contract.pdf".to_string()),
    }
}

pub fn png_payload() -> DocumentPayload {
    DocumentPayload {
        content: Bytes::from_static(b"\x89PNG"),
        media_type: "image/png".to_string(),
        suggested_name: None,
    }
}

pub fn fresh_state() -> SharedViewState {
    shared_view_state()
}

/// Drives `state` straight into a settled session for `client`, bypassing
/// the fetches.
pub fn select_directly(state: &SharedViewState, client: ClientRecord) -> u64 {
    let mut guard = state.write().unwrap();
    let epoch = guard.next_epoch();
    guard.session = DetailSession::begin(client, epoch);
    guard.session.complete_fetch(epoch, Vec::new(), None);
    epoch
}
