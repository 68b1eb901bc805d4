//! Client records, the canonical roster store and roster filtering.

pub mod filter;
pub mod record;
pub mod store;

pub use filter::filter_roster;
pub use record::{ClientRecord, ConversationStatus};
pub use store::RosterStore;
