//! Text-to-feature transformation: vocabulary and TF-IDF weighting.

pub mod tfidf;
pub mod vocabulary;

pub use tfidf::TfIdfVectorizer;
pub use vocabulary::Vocabulary;
