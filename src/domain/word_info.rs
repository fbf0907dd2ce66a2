pub const DEFINITION_PLACEHOLDER: &str = "No definition available.";
pub const SYNONYMS_PLACEHOLDER: &str = "No synonyms available.";

#[derive(Debug, Clone, PartialEq)]
pub struct WordInfo {
    pub word: String,
    pub definition: String,
    pub synonyms: String,
}

impl WordInfo {
    /// Reads a `Definition: ...` / `Synonyms: ...` reply. Lines that do not
    /// carry one of those keys are ignored, and missing keys fall back to
    /// placeholders.
    pub fn parse_reply(word: &str, reply: &str) -> Self {
        let mut definition = None;
        let mut synonyms = None;

        for line in reply.lines() {
            let Some((key, value)) = line.split_once(':') else {
                continue;
            };
            let value = value.trim();
            if value.is_empty() {
                continue;
            }

            let key = key.trim().trim_start_matches(['*', '-', '#', ' ']).trim_end_matches('*');
            match key.to_lowercase().as_str() {
                "definition" if definition.is_none() => definition = Some(value.to_string()),
                "synonyms" | "synonym" if synonyms.is_none() => {
                    synonyms = Some(value.to_string())
                }
                _ => {}
            }
        }

        Self {
            word: word.to_string(),
            definition: definition.unwrap_or_else(|| DEFINITION_PLACEHOLDER.to_string()),
            synonyms: synonyms.unwrap_or_else(|| SYNONYMS_PLACEHOLDER.to_string()),
        }
    }
}
