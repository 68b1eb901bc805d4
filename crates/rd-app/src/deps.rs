//! Application dependency grouping.
//!
//! Not a builder: no build steps, no defaults, no hidden logic. Just
//! parameter grouping for engine construction.

use std::sync::Arc;

use rd_core::client::RosterStore;
use rd_core::ports::{ClientApiPort, ConfirmationPort, DocumentViewerPort, NotifierPort};

/// Everything the engine needs, provided by the host in one move.
#[derive(Clone)]
pub struct AppDeps {
    // Remote service
    pub api: Arc<dyn ClientApiPort>,

    // Platform capabilities
    pub viewer: Arc<dyn DocumentViewerPort>,
    pub confirmation: Arc<dyn ConfirmationPort>,
    pub notifier: Arc<dyn NotifierPort>,

    // Canonical roster
    pub roster: Arc<RosterStore>,
}
