//! Model backend: the client trait, the Gemini implementation, and errors.

mod gemini;
mod traits;
mod types;

pub use gemini::GeminiClient;
pub use traits::ModelClient;
pub use types::ModelError;
