use bytes::Bytes;

/// Fallback save name when the server does not suggest one.
pub const DEFAULT_DOWNLOAD_NAME: &str = "download";

/// Raw document content as served by the document endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentPayload {
    pub content: Bytes,
    /// Declared content type, verbatim from the response header.
    pub media_type: String,
    /// Filename suggested via the content-disposition header, if any.
    pub suggested_name: Option<String>,
}

impl DocumentPayload {
    /// Name the document should be saved under.
    pub fn file_name(&self) -> &str {
        self.suggested_name
            .as_deref()
            .unwrap_or(DEFAULT_DOWNLOAD_NAME)
    }

    pub fn is_image(&self) -> bool {
        media_type_is_image(&self.media_type)
    }

    /// How the platform should hand this document to the user.
    pub fn handling(&self) -> DocumentHandling {
        if self.is_image() {
            DocumentHandling::InlineView
        } else {
            DocumentHandling::SaveAs {
                file_name: self.file_name().to_string(),
            }
        }
    }
}

/// Routing decision for a fetched document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentHandling {
    /// Open in a new viewing context (images).
    InlineView,
    /// Hand off to a save-file flow under the derived name.
    SaveAs { file_name: String },
}

fn media_type_is_image(media_type: &str) -> bool {
    media_type.trim().to_ascii_lowercase().starts_with("image/")
}

/// Extracts the filename from a `content-disposition` style header value.
///
/// `attachment; filename="report.pdf"` yields `report.pdf`. Quotes are
/// stripped; a missing or empty value yields `None`.
pub fn filename_from_disposition(header: &str) -> Option<String> {
    let (_, rest) = header.split_once("filename=")?;
    let raw = rest.split(';').next().unwrap_or(rest);
    let name = raw.trim().trim_matches('"').trim();
    if name.is_empty() {
        None
    } else {
        Some(name.to_string())
    }
}
