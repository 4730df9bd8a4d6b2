use std::sync::Mutex;

use async_trait::async_trait;

use crate::llm_client::{ModelRequestError, TextGenerator};

/// In-memory `TextGenerator` for tests: returns a canned reply (or a quota
/// error) and records every prompt it receives.
pub struct FakeGenerator {
    reply: Option<String>,
    prompts: Mutex<Vec<String>>,
}

impl FakeGenerator {
    pub fn replying(text: impl Into<String>) -> Self {
        Self {
            reply: Some(text.into()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn failing() -> Self {
        Self {
            reply: None,
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl TextGenerator for FakeGenerator {
    async fn generate(&self, prompt: &str) -> Result<String, ModelRequestError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        self.reply.clone().ok_or_else(|| ModelRequestError::Api {
            status: 429,
            message: "quota exceeded".to_string(),
        })
    }
}
