use std::sync::{Arc, Mutex};

use plainify::application::ports::{LlmClient, LlmClientError};
use plainify::application::services::{WordInfoError, WordInfoService};
use plainify::domain::DEFINITION_PLACEHOLDER;

struct ScriptedLlmClient {
    reply: String,
    prompts: Mutex<Vec<String>>,
}

impl ScriptedLlmClient {
    fn new(reply: &str) -> Self {
        Self {
            reply: reply.to_string(),
            prompts: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait::async_trait]
impl LlmClient for ScriptedLlmClient {
    async fn complete(&self, prompt: &str) -> Result<String, LlmClientError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        Ok(self.reply.clone())
    }
}

#[tokio::test]
async fn given_padded_word_when_looking_up_then_trims_before_prompting() {
    let llm = Arc::new(ScriptedLlmClient::new(
        "Definition: Very old.\nSynonyms: ancient, antique",
    ));
    let service = WordInfoService::new(llm.clone());

    let info = service.lookup("  archaic ").await.unwrap();

    assert_eq!(info.word, "archaic");
    assert_eq!(info.definition, "Very old.");
    assert_eq!(info.synonyms, "ancient, antique");
    assert!(llm.prompts.lock().unwrap()[0].contains("\"archaic\""));
}

#[tokio::test]
async fn given_blank_word_when_looking_up_then_returns_missing_word() {
    let llm = Arc::new(ScriptedLlmClient::new("unused"));
    let service = WordInfoService::new(llm.clone());

    let result = service.lookup("   ").await;

    assert!(matches!(result, Err(WordInfoError::MissingWord)));
    assert!(llm.prompts.lock().unwrap().is_empty());
}

#[tokio::test]
async fn given_unstructured_reply_when_looking_up_then_uses_placeholders() {
    let service = WordInfoService::new(Arc::new(ScriptedLlmClient::new("Sorry, no idea.")));

    let info = service.lookup("xyzzy").await.unwrap();

    assert_eq!(info.definition, DEFINITION_PLACEHOLDER);
}
