//! Rosterdesk: client roster synchronization and document staging.
//!
//! The workspace splits along the dependency rule: `rd-core` holds the
//! domain model and ports, `rd-app` the use cases behind [`RosterEngine`],
//! and `rd-infra` the wire adapters. This crate ties them together for
//! hosts and re-exports the surface they work with.

use std::sync::Arc;

use anyhow::Context;
use tracing::info;

pub use rd_app::usecases::{CommitOutcome, SelectOutcome};
pub use rd_app::{AppDeps, RosterEngine, StateError};
pub use rd_core::client::{filter_roster, ClientRecord, ConversationStatus, RosterStore};
pub use rd_core::document::{DocumentMetadata, DocumentPayload, DocumentStager, StagedDocument};
pub use rd_core::ids::{ClientId, DocumentId};
pub use rd_core::payment::PaymentDetails;
pub use rd_core::ports::{
    ApiError, ApiResult, BlobHandle, ClientApiPort, ConfirmationPort, DocumentViewerPort,
    NotifierPort,
};
pub use rd_core::session::DetailSession;
pub use rd_infra::logging::init_tracing;
pub use rd_infra::{ApiSettings, HttpClientApi, Settings};

/// Wires the HTTP adapter and a fresh roster store into an engine.
///
/// The platform-facing ports stay injectable; hosts bring their own window,
/// dialog and notification implementations.
pub fn bootstrap(
    settings: &Settings,
    viewer: Arc<dyn DocumentViewerPort>,
    confirmation: Arc<dyn ConfirmationPort>,
    notifier: Arc<dyn NotifierPort>,
) -> anyhow::Result<RosterEngine> {
    let api = HttpClientApi::new(&settings.api).context("failed to build roster service client")?;
    info!(base_url = %settings.api.base_url, "roster engine wired");
    Ok(RosterEngine::new(AppDeps {
        api: Arc::new(api),
        viewer,
        confirmation,
        notifier,
        roster: Arc::new(RosterStore::new()),
    }))
}
