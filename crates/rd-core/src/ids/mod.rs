//! ID type wrappers for type safety.

mod id_macro;

pub mod client_id;
pub mod document_id;

pub use client_id::ClientId;
pub use document_id::DocumentId;
