pub mod document;
pub mod types;

pub use document::{DocumentMetadata, DocumentSection, ExtractedDocument};
pub use types::{
    AnalysisResult, DocumentContext, DocumentType, Severity, VerificationItem,
    VerificationResult, VerificationStats,
};
