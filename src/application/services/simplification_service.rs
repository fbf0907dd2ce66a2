use std::sync::Arc;

use crate::application::ports::{CacheStore, CacheStoreError, LlmClient, LlmClientError};
use crate::domain::{Audience, CacheEntry, SimplifyInput};
use crate::infrastructure::observability::sanitize_prompt;

use super::input_resolver::{InputError, InputResolver};
use super::prompt_builder::build_simplification_prompt;

pub struct SimplificationService {
    input_resolver: InputResolver,
    llm_client: Arc<dyn LlmClient>,
    cache_store: Arc<dyn CacheStore>,
}

impl SimplificationService {
    pub fn new(
        input_resolver: InputResolver,
        llm_client: Arc<dyn LlmClient>,
        cache_store: Arc<dyn CacheStore>,
    ) -> Self {
        Self {
            input_resolver,
            llm_client,
            cache_store,
        }
    }

    #[tracing::instrument(skip(self, input), fields(audience = %audience))]
    pub async fn simplify(
        &self,
        input: SimplifyInput,
        audience: Audience,
    ) -> Result<String, SimplificationError> {
        let resolved = self.input_resolver.resolve(input).await?;

        tracing::debug!(input = %sanitize_prompt(&resolved.text), "Input resolved");

        let prompt = build_simplification_prompt(audience, &resolved);
        let simplified = self
            .llm_client
            .complete(&prompt)
            .await
            .map_err(SimplificationError::Completion)?;

        self.cache_store
            .put(CacheEntry::new(resolved.text, audience, simplified.clone()))
            .await?;

        tracing::info!(chars = simplified.len(), "Simplification complete");

        Ok(simplified)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SimplificationError {
    #[error("input: {0}")]
    Input(#[from] InputError),
    #[error("completion: {0}")]
    Completion(LlmClientError),
    #[error("cache: {0}")]
    Cache(#[from] CacheStoreError),
}
