mod input_resolver;
mod prompt_builder;
mod simplification_service;
mod word_info_service;

pub use input_resolver::{InputError, InputResolver, count_words};
pub use prompt_builder::{build_simplification_prompt, build_word_info_prompt};
pub use simplification_service::{SimplificationError, SimplificationService};
pub use word_info_service::{WordInfoError, WordInfoService};
