//! Port interfaces for the application layer
//!
//! Ports define the contract between the application logic (use cases)
//! and infrastructure or platform implementations, keeping the core
//! business logic independent of external dependencies.
//!
//! A port belongs here when it represents a business capability, is
//! depended upon by multiple use cases, and is implemented by the
//! infrastructure or platform layer. Anything narrower stays in its
//! domain submodule.

pub mod client_api;
pub mod confirmation;
pub mod document_viewer;
pub mod errors;
pub mod notifier;

pub use client_api::{ApiResult, ClientApiPort};
pub use confirmation::ConfirmationPort;
pub use document_viewer::{BlobHandle, DocumentViewerPort};
pub use errors::ApiError;
pub use notifier::NotifierPort;
