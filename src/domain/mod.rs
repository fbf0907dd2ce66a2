mod audience;
mod cache_entry;
mod document;
mod feedback;
mod simplify_input;
mod word_info;

pub use audience::Audience;
pub use cache_entry::CacheEntry;
pub use document::{ContentType, Document};
pub use feedback::{Feedback, FeedbackError, MAX_RATING, MIN_RATING};
pub use simplify_input::{InputSource, ResolvedInput, SimplifyInput, UploadedFile};
pub use word_info::{DEFINITION_PLACEHOLDER, SYNONYMS_PLACEHOLDER, WordInfo};
