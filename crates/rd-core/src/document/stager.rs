use bytes::Bytes;

/// A locally picked file waiting to be committed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StagedDocument {
    pub file_name: String,
    pub media_type: Option<String>,
    pub content: Bytes,
}

impl StagedDocument {
    pub fn new(file_name: impl Into<String>, media_type: Option<String>, content: Bytes) -> Self {
        Self {
            file_name: file_name.into(),
            media_type,
            content,
        }
    }
}

/// Ordered sequence of staged documents plus the unsaved-changes flag.
///
/// `dirty` is true from the first staging action until the next successful
/// commit. Removing entries never clears it, even when the sequence becomes
/// empty again: the user still diverged from the last saved state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentStager {
    staged: Vec<StagedDocument>,
    dirty: bool,
}

impl DocumentStager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one document and marks the stage dirty.
    pub fn stage(&mut self, document: StagedDocument) {
        self.staged.push(document);
        self.dirty = true;
    }

    /// Appends a batch of picked documents. Staging nothing changes nothing.
    pub fn stage_all(&mut self, documents: impl IntoIterator<Item = StagedDocument>) {
        let before = self.staged.len();
        self.staged.extend(documents);
        if self.staged.len() > before {
            self.dirty = true;
        }
    }

    /// Removes the document at `index`, keeping the order of the rest.
    /// Out-of-range indexes are a no-op and leave the dirty flag alone.
    pub fn unstage(&mut self, index: usize) -> Option<StagedDocument> {
        if index >= self.staged.len() {
            return None;
        }
        let removed = self.staged.remove(index);
        self.dirty = true;
        Some(removed)
    }

    /// Clears the sequence and the dirty flag after a successful commit.
    pub fn mark_committed(&mut self) {
        self.staged.clear();
        self.dirty = false;
    }

    pub fn staged(&self) -> &[StagedDocument] {
        &self.staged
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn len(&self) -> usize {
        self.staged.len()
    }

    pub fn is_empty(&self) -> bool {
        self.staged.is_empty()
    }
}
