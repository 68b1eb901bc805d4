//! # rd-core
//!
//! Core domain models and business logic for Rosterdesk.
//!
//! This crate contains pure business logic without any infrastructure dependencies.

// Public module exports
pub mod client;
pub mod document;
pub mod ids;
pub mod payment;
pub mod ports;
pub mod session;

// Re-export commonly used types at the crate root
pub use client::{ClientRecord, ConversationStatus, RosterStore};
pub use document::{DocumentMetadata, DocumentPayload, DocumentStager, StagedDocument};
pub use ids::{ClientId, DocumentId};
pub use payment::PaymentDetails;
pub use session::DetailSession;
