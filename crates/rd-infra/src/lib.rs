//! Rosterdesk infrastructure adapters.
//!
//! Wire-level implementations of the rd-core ports plus host plumbing: the
//! HTTP adapter for the roster service, the settings file, and tracing
//! setup.

pub mod logging;
pub mod remote;
pub mod settings;

pub use remote::HttpClientApi;
pub use settings::{ApiSettings, Settings};
