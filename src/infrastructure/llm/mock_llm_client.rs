use crate::application::ports::{LlmClient, LlmClientError};

/// Returns a fixed reply without calling any API.
pub struct MockLlmClient {
    reply: String,
}

impl MockLlmClient {
    pub fn new(reply: impl Into<String>) -> Self {
        Self {
            reply: reply.into(),
        }
    }
}

impl Default for MockLlmClient {
    fn default() -> Self {
        Self::new(
            "Definition: A stand-in reply from the mock language model.\n\
             Synonyms: placeholder, stub, dummy",
        )
    }
}

#[async_trait::async_trait]
impl LlmClient for MockLlmClient {
    async fn complete(&self, _prompt: &str) -> Result<String, LlmClientError> {
        Ok(self.reply.trim().to_string())
    }
}
