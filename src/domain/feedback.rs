pub const MIN_RATING: i64 = 1;
pub const MAX_RATING: i64 = 10;

#[derive(Debug, Clone, PartialEq)]
pub struct Feedback {
    pub rating: u8,
    pub text: String,
}

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum FeedbackError {
    #[error("Rating must be between 1 and 10")]
    RatingOutOfRange(i64),
}

impl Feedback {
    pub fn new(rating: i64, text: String) -> Result<Self, FeedbackError> {
        if !(MIN_RATING..=MAX_RATING).contains(&rating) {
            return Err(FeedbackError::RatingOutOfRange(rating));
        }

        Ok(Self {
            rating: rating as u8,
            text,
        })
    }
}
