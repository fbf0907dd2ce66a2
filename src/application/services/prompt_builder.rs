use crate::domain::{Audience, ResolvedInput};

pub fn build_simplification_prompt(audience: Audience, input: &ResolvedInput) -> String {
    let subject = if input.is_url() {
        "the content of the web page at the following URL"
    } else {
        "the following text"
    };

    format!(
        "Rewrite {subject} in plain, easy-to-understand language for {}. \
         Keep every important fact and the original meaning, avoid jargon, \
         and explain any technical term you have to keep.\n\n{}",
        audience.prompt_phrase(),
        input.text
    )
}

pub fn build_word_info_prompt(word: &str) -> String {
    format!(
        "Give a short, simple definition and a list of synonyms for the word \"{word}\". \
         Reply using exactly this format and nothing else:\n\
         Definition: <one-sentence definition>\n\
         Synonyms: <comma-separated synonyms>"
    )
}
