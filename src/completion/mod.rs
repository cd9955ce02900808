pub mod client;
pub mod error;
pub mod types;

#[cfg(test)]
mod tests;

pub use client::GeminiClient;
pub use error::CompletionError;
pub use types::{GenerateContentRequest, GenerateContentResponse, ModelInfo};

/// A text-completion backend: one prompt in, one text response out
pub trait CompletionService {
    fn complete(&self, prompt: &str) -> Result<String, CompletionError>;
}

impl<C: CompletionService + ?Sized> CompletionService for &C {
    fn complete(&self, prompt: &str) -> Result<String, CompletionError> {
        (**self).complete(prompt)
    }
}

impl<C: CompletionService + ?Sized> CompletionService for Box<C> {
    fn complete(&self, prompt: &str) -> Result<String, CompletionError> {
        (**self).complete(prompt)
    }
}
