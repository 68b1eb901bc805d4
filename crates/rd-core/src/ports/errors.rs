use thiserror::Error;

/// Failure taxonomy of the remote service port.
///
/// `NotFound` doubles as an absence signal where the calling policy says so
/// (payment details); every other variant is a genuine fault.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("resource not found")]
    NotFound,

    #[error("request timed out")]
    Timeout,

    #[error("network error: {0}")]
    Network(String),

    #[error("unexpected status: {0}")]
    UnexpectedStatus(u16),
}

impl ApiError {
    /// True for failures a plain retry can plausibly fix.
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::Timeout | Self::Network(_))
    }
}
