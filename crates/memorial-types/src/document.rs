//! Input boundary: document content produced by the external extraction
//! service. This crate never reads PDF/DOCX binaries itself.

use serde::{Deserialize, Serialize};

/// Extracted content of a descriptive memorial, as delivered by the
/// upstream text-extraction collaborator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractedDocument {
    /// Full plain text of the document.
    pub text: String,
    /// Titled sections, in document order.
    pub sections: Vec<DocumentSection>,
    pub metadata: DocumentMetadata,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentSection {
    pub title: String,
    pub content: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentMetadata {
    pub pages: u32,
    pub title: Option<String>,
}

impl ExtractedDocument {
    /// Convenience constructor for callers that only have raw text.
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            sections: Vec::new(),
            metadata: DocumentMetadata {
                pages: 1,
                title: None,
            },
        }
    }
}
