use std::path::PathBuf;

use config::{Config, ConfigError, File};
use serde::Deserialize;

use super::Environment;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub llm: LlmSettings,
    pub access: AccessSettings,
    pub limits: LimitSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    /// Terminate TLS in-process using `tls`.
    pub deploy: bool,
    pub tls: Option<TlsSettings>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TlsSettings {
    pub cert_path: PathBuf,
    pub key_path: PathBuf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LlmProvider {
    #[serde(rename = "openai")]
    OpenAi,
    Mock,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LlmSettings {
    pub provider: LlmProvider,
    pub api_key: String,
    pub base_url: String,
    pub chat_model: String,
    pub max_tokens: usize,
    pub temperature: f32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AccessSettings {
    pub allowed_origins: Vec<String>,
    pub extension_id: Option<String>,
    pub extension_token: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LimitSettings {
    pub word_limit: usize,
    pub max_upload_mb: usize,
    /// Cap on inflated document bodies, such as `word/document.xml`.
    pub max_document_mb: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    pub json: bool,
}

impl LimitSettings {
    pub fn max_upload_bytes(&self) -> usize {
        self.max_upload_mb * 1024 * 1024
    }

    pub fn max_document_bytes(&self) -> u64 {
        self.max_document_mb * 1024 * 1024
    }
}

impl Settings {
    /// Defaults, then `appsettings.{environment}.*` if present, then `APP__*`
    /// variables, then `OPENAI_API_KEY`.
    pub fn load(environment: Environment) -> Result<Self, ConfigError> {
        Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 3000)?
            .set_default("server.deploy", false)?
            .set_default("llm.provider", "openai")?
            .set_default("llm.api_key", "")?
            .set_default("llm.base_url", "https://api.openai.com/v1")?
            .set_default("llm.chat_model", "gpt-4o-mini")?
            .set_default("llm.max_tokens", 1000)?
            .set_default("llm.temperature", 0.7)?
            .set_default("access.allowed_origins", Vec::<String>::new())?
            .set_default("limits.word_limit", 1000)?
            .set_default("limits.max_upload_mb", 10)?
            .set_default("limits.max_document_mb", 50)?
            .set_default("logging.json", false)?
            .add_source(
                File::with_name(&format!("appsettings.{}", environment.as_str())).required(false),
            )
            .add_source(
                config::Environment::with_prefix("APP")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("access.allowed_origins")
                    .try_parsing(true),
            )
            .set_override_option("llm.api_key", std::env::var("OPENAI_API_KEY").ok())?
            .build()?
            .try_deserialize()
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
