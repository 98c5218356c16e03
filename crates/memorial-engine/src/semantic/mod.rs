//! Weighted bag-of-words semantic matching between a memorial and the
//! instruction corpus.

pub mod matcher;
pub mod terms;
pub mod vector;

pub use matcher::{MatchConfidence, SemanticMatcher};
pub use terms::TermDictionary;
pub use vector::SemanticVector;
