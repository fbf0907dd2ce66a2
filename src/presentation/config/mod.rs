mod environment;
mod settings;

pub use environment::Environment;
pub use settings::{
    AccessSettings, LimitSettings, LlmProvider, LlmSettings, LoggingSettings, ServerSettings,
    Settings, TlsSettings,
};
