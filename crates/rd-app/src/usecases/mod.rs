//! One module per user-facing operation.

pub mod commit_documents;
pub mod confirm_close;
pub mod deselect_client;
pub mod open_document;
pub mod remove_client;
pub mod search_roster;
pub mod select_client;
pub mod stage_documents;
pub mod unstage_document;
pub mod update_status;

#[cfg(test)]
pub(crate) mod testing;

pub use commit_documents::{CommitDocumentsUseCase, CommitOutcome};
pub use confirm_close::ConfirmCloseUseCase;
pub use deselect_client::DeselectClientUseCase;
pub use open_document::OpenDocumentUseCase;
pub use remove_client::RemoveClientUseCase;
pub use search_roster::SearchRosterUseCase;
pub use select_client::{SelectClientUseCase, SelectOutcome};
pub use stage_documents::StageDocumentsUseCase;
pub use unstage_document::UnstageDocumentUseCase;
pub use update_status::UpdateStatusUseCase;

/// Prompt shown before any action that would discard staged documents.
pub const UNSAVED_CHANGES_PROMPT: &str =
    "You have unsaved changes. Are you sure you want to go back without saving?";
