use std::cell::RefCell;

use crate::completion::{CompletionError, CompletionService};

/// In-process completion backend that records prompts and answers via a closure
pub struct ScriptedService<F> {
    respond: F,
    prompts: RefCell<Vec<String>>,
}

impl<F> ScriptedService<F>
where
    F: Fn(usize, &str) -> Result<String, CompletionError>,
{
    /// `respond` receives the zero-based call index and the prompt
    pub fn new(respond: F) -> Self {
        Self {
            respond,
            prompts: RefCell::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> usize {
        self.prompts.borrow().len()
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.borrow().clone()
    }
}

impl<F> CompletionService for ScriptedService<F>
where
    F: Fn(usize, &str) -> Result<String, CompletionError>,
{
    fn complete(&self, prompt: &str) -> Result<String, CompletionError> {
        let call = self.prompts.borrow().len();
        self.prompts.borrow_mut().push(prompt.to_string());
        (self.respond)(call, prompt)
    }
}

/// Names listed in a prompt built by `build_prompt`, in order
pub fn prompt_names(prompt: &str) -> Vec<String> {
    prompt
        .lines()
        .skip_while(|l| !l.starts_with("Format:"))
        .skip(1)
        .filter(|l| !l.is_empty())
        .filter_map(|l| l.split_once(". ").map(|(_, name)| name.to_string()))
        .collect()
}

/// Echo each prompt name back upper-cased as a numbered list
pub fn echo_upper(_call: usize, prompt: &str) -> Result<String, CompletionError> {
    Ok(prompt_names(prompt)
        .iter()
        .enumerate()
        .map(|(i, n)| format!("{}. {}", i + 1, n.to_uppercase()))
        .collect::<Vec<_>>()
        .join("\n"))
}
