//! Client detail session.

pub mod state;

pub use state::DetailSession;
