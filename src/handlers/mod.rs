pub mod extraction_handler;
pub mod llm_handler;
pub mod system_handler;

pub use extraction_handler::extract_pdf;
pub use llm_handler::{generate_quiz, generate_reed};
pub use system_handler::{index, wake_up};
