//! Documents: server-side metadata, local staging and fetched payloads.

pub mod metadata;
pub mod payload;
pub mod stager;

pub use metadata::DocumentMetadata;
pub use payload::{
    filename_from_disposition, DocumentHandling, DocumentPayload, DEFAULT_DOWNLOAD_NAME,
};
pub use stager::{DocumentStager, StagedDocument};
