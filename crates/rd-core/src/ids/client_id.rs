use serde::{Deserialize, Serialize};

use super::id_macro::impl_id;

/// Stable identifier of a client record, assigned by the roster provider.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ClientId(String);

impl_id!(ClientId);
