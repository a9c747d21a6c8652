pub mod document;
pub mod quiz;
pub mod reed;
pub use document::ExtractedDocument;
pub use quiz::QuizQuestion;
pub use reed::{DialogueMode, GeneratedReed, TeachingStyle};
