//! Rosterdesk application layer.
//!
//! Use cases orchestrate the rd-core domain state through injected ports.
//! Hosts construct [`AppDeps`] with their platform adapters and drive
//! everything through [`RosterEngine`].

pub mod deps;
pub mod engine;
pub mod state;
pub mod usecases;

pub use deps::AppDeps;
pub use engine::RosterEngine;
pub use state::{SharedViewState, StateError, ViewState};
