mod error;
mod prompt;
mod response;


pub use error::{BatchError, ParseError};
pub use prompt::{Category, build_prompt};
pub use response::parse_numbered_list;

use crate::completion::CompletionService;
use tracing::debug;

/// Placeholder written for every name of a batch that failed
pub const FAILURE_MARKER: &str = "Error";

/// Turns one batch of raw names into standardized names with a single model call
pub struct Standardizer<C> {
    service: C,
    category: Category,
}

impl<C: CompletionService> Standardizer<C> {
    pub fn new(service: C, category: Category) -> Self {
        Self { service, category }
    }

    pub fn category(&self) -> Category {
        self.category
    }

    /// Standardize `batch`, returning one name per input in the same order.
    ///
    /// An empty batch returns immediately without calling the service.
    pub fn standardize_batch<S: AsRef<str>>(&self, batch: &[S]) -> Result<Vec<String>, BatchError> {
        if batch.is_empty() {
            return Ok(Vec::new());
        }

        let prompt = build_prompt(batch, self.category);
        let text = self.service.complete(&prompt)?;
        debug!(names = batch.len(), response_bytes = text.len(), "model responded");

        Ok(parse_numbered_list(&text, batch.len())?)
    }
}
