use anyhow::Result;
use async_trait::async_trait;
use bytes::Bytes;

/// Opaque token for a platform-held document resource, e.g. an object URL
/// in a webview host. Released exactly once after use.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BlobHandle(pub String);

impl BlobHandle {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Platform capability for handing fetched documents to the user.
#[async_trait]
pub trait DocumentViewerPort: Send + Sync {
    /// Materializes the bytes as a platform resource.
    async fn publish(&self, content: Bytes, media_type: &str) -> Result<BlobHandle>;

    /// Opens the resource in a new viewing context.
    async fn open_inline(&self, handle: &BlobHandle) -> Result<()>;

    /// Starts a save-file flow for the resource under `file_name`.
    async fn save_as(&self, handle: &BlobHandle, file_name: &str) -> Result<()>;

    /// Releases the resource once handling finished.
    async fn release(&self, handle: BlobHandle) -> Result<()>;
}
