// client.rs - blocking Gemini generateContent client
use reqwest::blocking::{Client, Response};
use std::time::Duration;
use tracing::debug;

use super::types::{GenerateContentRequest, GenerateContentResponse, ModelInfo};
use super::{CompletionError, CompletionService};
use crate::config::GeminiConfig;

const API_KEY_HEADER: &str = "x-goog-api-key";

pub struct GeminiClient {
    http: Client,
    base_url: String,
    api_version: String,
    model: String,
    api_key: String,
    temperature: Option<f32>,
    timeout: Duration,
}

impl std::fmt::Debug for GeminiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiClient")
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}

impl GeminiClient {
    /// Build a client from settings and an already-resolved API key
    pub fn new(config: &GeminiConfig, api_key: impl Into<String>) -> Result<Self, CompletionError> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(CompletionError::Config("API key is empty".to_string()));
        }

        let timeout = Duration::from_secs(config.timeout_secs);
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(CompletionError::RequestFailed)?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_version: config.api_version.clone(),
            model: config.model.clone(),
            api_key,
            temperature: config.temperature,
            timeout,
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn model_url(&self) -> String {
        format!("{}/{}/models/{}", self.base_url, self.api_version, self.model)
    }

    pub(crate) fn generate_url(&self) -> String {
        format!("{}:generateContent", self.model_url())
    }

    /// Fetch metadata for the configured model; verifies the key and model name
    pub fn model_info(&self) -> Result<ModelInfo, CompletionError> {
        let response = self
            .http
            .get(self.model_url())
            .header(API_KEY_HEADER, &self.api_key)
            .send()
            .map_err(|e| self.map_send_error(e))?;

        let response = check_status(response)?;
        Ok(response.json()?)
    }

    fn map_send_error(&self, e: reqwest::Error) -> CompletionError {
        if e.is_timeout() {
            CompletionError::Timeout(self.timeout)
        } else {
            CompletionError::RequestFailed(e)
        }
    }
}

impl CompletionService for GeminiClient {
    fn complete(&self, prompt: &str) -> Result<String, CompletionError> {
        let req = GenerateContentRequest::from_prompt(prompt, self.temperature);
        debug!(model = %self.model, prompt_bytes = prompt.len(), "generateContent");

        let response = self
            .http
            .post(self.generate_url())
            .header(API_KEY_HEADER, &self.api_key)
            .json(&req)
            .send()
            .map_err(|e| self.map_send_error(e))?;

        let response = check_status(response)?;
        let body: GenerateContentResponse = response.json()?;
        extract_text(&body)
    }
}

fn check_status(response: Response) -> Result<Response, CompletionError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response
        .text()
        .unwrap_or_else(|_| "Unknown error".to_string());
    Err(CompletionError::ServerError {
        status: status.as_u16(),
        body,
    })
}

pub(crate) fn extract_text(body: &GenerateContentResponse) -> Result<String, CompletionError> {
    if let Some(reason) = body.block_reason() {
        return Err(CompletionError::Blocked(reason.to_string()));
    }
    body.text().ok_or(CompletionError::EmptyResponse)
}
