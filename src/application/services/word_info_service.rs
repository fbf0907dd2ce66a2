use std::sync::Arc;

use crate::application::ports::{LlmClient, LlmClientError};
use crate::domain::WordInfo;

use super::prompt_builder::build_word_info_prompt;

pub struct WordInfoService {
    llm_client: Arc<dyn LlmClient>,
}

impl WordInfoService {
    pub fn new(llm_client: Arc<dyn LlmClient>) -> Self {
        Self { llm_client }
    }

    #[tracing::instrument(skip(self))]
    pub async fn lookup(&self, word: &str) -> Result<WordInfo, WordInfoError> {
        let word = word.trim();
        if word.is_empty() {
            return Err(WordInfoError::MissingWord);
        }

        let reply = self
            .llm_client
            .complete(&build_word_info_prompt(word))
            .await
            .map_err(WordInfoError::Completion)?;

        Ok(WordInfo::parse_reply(word, &reply))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum WordInfoError {
    #[error("Word parameter is required")]
    MissingWord,
    #[error("completion: {0}")]
    Completion(LlmClientError),
}
