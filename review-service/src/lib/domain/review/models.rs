use std::fmt;

use chrono::DateTime;
use chrono::Utc;
use uuid::Uuid;

use crate::domain::book::models::BookId;
use crate::domain::review::errors::RatingError;
use crate::domain::review::errors::ReviewIdError;
use crate::domain::user::models::UserId;

/// Review aggregate entity.
#[derive(Debug, Clone)]
pub struct Review {
    pub id: ReviewId,
    /// Recorded owner; ownership checks compare against this
    pub user_id: UserId,
    pub book_id: BookId,
    pub rating: Rating,
    pub review_text: String,
    pub created_at: DateTime<Utc>,
}

/// Review unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ReviewId(pub Uuid);

impl ReviewId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// # Errors
    /// * `InvalidFormat` - the string is not a valid UUID
    pub fn from_string(s: &str) -> Result<Self, ReviewIdError> {
        Uuid::parse_str(s)
            .map(ReviewId)
            .map_err(|e| ReviewIdError::InvalidFormat(e.to_string()))
    }
}

impl Default for ReviewId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ReviewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Rating value type, 1 through 5 inclusive (mirrors the DB CHECK).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rating(i32);

impl Rating {
    const MIN: i32 = 1;
    const MAX: i32 = 5;

    /// # Errors
    /// * `OutOfRange` - value outside 1..=5
    pub fn new(value: i32) -> Result<Self, RatingError> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(RatingError::OutOfRange {
                min: Self::MIN,
                max: Self::MAX,
                actual: value,
            })
        }
    }

    pub fn value(&self) -> i32 {
        self.0
    }
}

/// Command to create a new review
#[derive(Debug)]
pub struct CreateReviewCommand {
    pub user_id: UserId,
    pub book_id: BookId,
    pub rating: Rating,
    pub review_text: String,
}

/// Command to edit an existing review.
///
/// Both fields are required; a PUT replaces the rating and text wholesale.
#[derive(Debug)]
pub struct UpdateReviewCommand {
    pub rating: Rating,
    pub review_text: String,
}
