mod error;
mod feedback;
mod health;
mod simplify;
mod word_info;

pub use error::{ApiError, ErrorResponse};
pub use feedback::feedback_handler;
pub use health::{health_handler, index_handler};
pub use simplify::{SimplifyForm, simplify_handler};
pub use word_info::word_info_handler;
