use async_trait::async_trait;

/// Blocking user confirmation for destructive transitions.
#[async_trait]
pub trait ConfirmationPort: Send + Sync {
    /// Asks whether unsaved work may be discarded. Returns true when the
    /// user accepts the loss.
    async fn confirm_discard(&self, message: &str) -> bool;
}
