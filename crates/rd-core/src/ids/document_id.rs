use serde::{Deserialize, Serialize};

use super::id_macro::impl_id;

/// Identifier of a stored document on the remote service.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DocumentId(String);

impl_id!(DocumentId);
