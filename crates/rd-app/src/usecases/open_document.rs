//! Routing a fetched document to the platform viewer.

use std::sync::Arc;

use tracing::warn;

use rd_core::document::DocumentHandling;
use rd_core::ids::DocumentId;
use rd_core::ports::{ClientApiPort, DocumentViewerPort, NotifierPort};

pub(crate) const OPEN_ERROR_NOTICE: &str = "Error opening document. Please try again.";

/// Fetches a stored document and hands it to the viewer: inline for images,
/// a save dialog for everything else.
pub struct OpenDocumentUseCase {
    api: Arc<dyn ClientApiPort>,
    viewer: Arc<dyn DocumentViewerPort>,
    notifier: Arc<dyn NotifierPort>,
}

impl OpenDocumentUseCase {
    pub fn new(
        api: Arc<dyn ClientApiPort>,
        viewer: Arc<dyn DocumentViewerPort>,
        notifier: Arc<dyn NotifierPort>,
    ) -> Self {
        Self {
            api,
            viewer,
            notifier,
        }
    }

    /// Returns true when the document reached the viewer.
    #[tracing::instrument(
        name = "usecase.open_document.execute",
        skip(self),
        fields(document = %document_id)
    )]
    pub async fn execute(&self, document_id: &DocumentId) -> bool {
        let payload = match self.api.fetch_document(document_id).await {
            Ok(payload) => payload,
            Err(error) => {
                warn!(%error, "document fetch failed");
                self.notifier.error(OPEN_ERROR_NOTICE);
                return false;
            }
        };

        let handle = match self
            .viewer
            .publish(payload.content.clone(), &payload.media_type)
            .await
        {
            Ok(handle) => handle,
            Err(error) => {
                warn!(%error, "publishing the document payload failed");
                self.notifier.error(OPEN_ERROR_NOTICE);
                return false;
            }
        };

        let handoff = match payload.handling() {
            DocumentHandling::InlineView => self.viewer.open_inline(&handle).await,
            DocumentHandling::SaveAs { file_name } => {
                self.viewer.save_as(&handle, &file_name).await
            }
        };

        // The handle is transient; it goes away whether the handoff worked
        // or not.
        if let Err(error) = self.viewer.release(handle).await {
            warn!(%error, "releasing the document handle failed");
        }

        match handoff {
            Ok(()) => true,
            Err(error) => {
                warn!(%error, "document handoff failed");
                self.notifier.error(OPEN_ERROR_NOTICE);
                false
            }
        }
    }
}
