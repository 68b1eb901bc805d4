use crate::client::ClientRecord;
use crate::document::{DocumentMetadata, DocumentStager};
use crate::payment::PaymentDetails;

/// Client detail session state machine.
///
/// Design principle: this is a pure state container with transition
/// validation only. Fetch scheduling, confirmation prompts and user notices
/// live in the application layer.
///
/// State transitions:
/// ```text
///   NoSelection
///    │ begin(client, epoch)
///    ▼
///   Loading { client, epoch, stager }
///    │ complete_fetch(epoch, documents, payment)    stale epoch: ignored
///    ▼
///   Selected { client, documents, payment_details, epoch, stager }
///    │ begin(other client, fresh epoch)   back to Loading
///    │ clear()                            back to NoSelection
///    ▼
///   NoSelection
/// ```
///
/// The stager lives inside the active variants, so staged documents without
/// a selected client cannot be represented. `epoch` is the selection
/// generation: `begin` hands out a larger one every time, and completions
/// carrying an older epoch are discarded without touching the state.
#[derive(Debug, Clone, PartialEq)]
pub enum DetailSession {
    /// Roster view, no client opened.
    NoSelection,

    /// Client chosen; documents and payment details are still in flight.
    Loading {
        client: ClientRecord,
        epoch: u64,
        stager: DocumentStager,
    },

    /// Detail data settled (or its fetch failed and was surfaced).
    Selected {
        client: ClientRecord,
        documents: Vec<DocumentMetadata>,
        payment_details: Option<PaymentDetails>,
        epoch: u64,
        stager: DocumentStager,
    },
}

impl DetailSession {
    /// Opens a fresh session for `client` with an empty stage.
    pub fn begin(client: ClientRecord, epoch: u64) -> Self {
        Self::Loading {
            client,
            epoch,
            stager: DocumentStager::new(),
        }
    }

    pub fn is_active(&self) -> bool {
        !matches!(self, Self::NoSelection)
    }

    pub fn client(&self) -> Option<&ClientRecord> {
        match self {
            Self::NoSelection => None,
            Self::Loading { client, .. } | Self::Selected { client, .. } => Some(client),
        }
    }

    pub fn epoch(&self) -> Option<u64> {
        match self {
            Self::NoSelection => None,
            Self::Loading { epoch, .. } | Self::Selected { epoch, .. } => Some(*epoch),
        }
    }

    pub fn stager(&self) -> Option<&DocumentStager> {
        match self {
            Self::NoSelection => None,
            Self::Loading { stager, .. } | Self::Selected { stager, .. } => Some(stager),
        }
    }

    pub fn stager_mut(&mut self) -> Option<&mut DocumentStager> {
        match self {
            Self::NoSelection => None,
            Self::Loading { stager, .. } | Self::Selected { stager, .. } => Some(stager),
        }
    }

    /// True while the stage holds unsaved changes.
    pub fn is_dirty(&self) -> bool {
        self.stager().map(DocumentStager::is_dirty).unwrap_or(false)
    }

    pub fn documents(&self) -> Option<&[DocumentMetadata]> {
        match self {
            Self::Selected { documents, .. } => Some(documents),
            _ => None,
        }
    }

    pub fn payment_details(&self) -> Option<&PaymentDetails> {
        match self {
            Self::Selected {
                payment_details, ..
            } => payment_details.as_ref(),
            _ => None,
        }
    }

    /// Applies the detail fetch outcome for the given epoch.
    ///
    /// Documents staged while the fetch was in flight survive the
    /// transition. Returns false, leaving the state untouched, when the
    /// completion is stale or no fetch is pending.
    pub fn complete_fetch(
        &mut self,
        epoch: u64,
        documents: Vec<DocumentMetadata>,
        payment_details: Option<PaymentDetails>,
    ) -> bool {
        match self {
            Self::Loading {
                client,
                epoch: current,
                stager,
            } if *current == epoch => {
                *self = Self::Selected {
                    client: client.clone(),
                    documents,
                    payment_details,
                    epoch,
                    stager: std::mem::take(stager),
                };
                true
            }
            _ => false,
        }
    }

    /// Replaces the authoritative document list, e.g. after a commit
    /// refresh. Only applies to the selected session of the same epoch.
    pub fn replace_documents(&mut self, epoch: u64, replacement: Vec<DocumentMetadata>) -> bool {
        match self {
            Self::Selected {
                epoch: current,
                documents,
                ..
            } if *current == epoch => {
                *documents = replacement;
                true
            }
            _ => false,
        }
    }

    /// Drops the selection together with any staged documents and the dirty
    /// flag. Callers run the unsaved-changes guard first.
    pub fn clear(&mut self) {
        *self = Self::NoSelection;
    }
}

impl Default for DetailSession {
    fn default() -> Self {
        Self::NoSelection
    }
}
