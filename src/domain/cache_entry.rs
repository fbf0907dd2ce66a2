use chrono::{DateTime, Utc};

use super::audience::Audience;

#[derive(Debug, Clone, PartialEq)]
pub struct CacheEntry {
    pub key: String,
    pub original_text: String,
    pub audience: Audience,
    pub simplified_text: String,
    pub created_at: DateTime<Utc>,
}

impl CacheEntry {
    pub fn new(original_text: String, audience: Audience, simplified_text: String) -> Self {
        Self::at(original_text, audience, simplified_text, Utc::now())
    }

    pub fn at(
        original_text: String,
        audience: Audience,
        simplified_text: String,
        created_at: DateTime<Utc>,
    ) -> Self {
        let key = format!(
            "{}_{}_{}",
            original_text,
            audience.as_str(),
            created_at.timestamp_millis()
        );
        Self {
            key,
            original_text,
            audience,
            simplified_text,
            created_at,
        }
    }
}
