//! Language model trait and test implementations.
//!
//! The production model (local inference server, remote API) lives outside
//! the core and is injected as a `dyn LanguageModel`. `MockModel` returns a
//! canned response and records every prompt it receives, so orchestration
//! tests can assert on assembled prompts; `FailingModel` exercises the
//! failure paths.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::error::ChatError;

/// An external language model invoked with a fully rendered prompt.
#[async_trait]
pub trait LanguageModel: Send + Sync {
    /// Generate a completion for the prompt.
    async fn invoke(&self, prompt: &str) -> Result<String, ChatError>;
}

/// Test model returning a fixed response and recording prompts.
#[derive(Debug, Default)]
pub struct MockModel {
    response: String,
    prompts: Mutex<Vec<String>>,
}

impl MockModel {
    /// A mock that always answers with `response`.
    pub fn new(response: impl Into<String>) -> Self {
        Self {
            response: response.into(),
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// Every prompt received so far, in call order.
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().map(|p| p.clone()).unwrap_or_default()
    }

    /// Number of invocations so far.
    pub fn call_count(&self) -> usize {
        self.prompts.lock().map(|p| p.len()).unwrap_or(0)
    }
}

#[async_trait]
impl LanguageModel for MockModel {
    async fn invoke(&self, prompt: &str) -> Result<String, ChatError> {
        if let Ok(mut prompts) = self.prompts.lock() {
            prompts.push(prompt.to_string());
        }
        Ok(self.response.clone())
    }
}

/// Test model that always fails.
#[derive(Debug, Clone)]
pub struct FailingModel {
    message: String,
}

impl FailingModel {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl Default for FailingModel {
    fn default() -> Self {
        Self::new("model unavailable")
    }
}

#[async_trait]
impl LanguageModel for FailingModel {
    async fn invoke(&self, _prompt: &str) -> Result<String, ChatError> {
        Err(ChatError::Model(self.message.clone()))
    }
}
