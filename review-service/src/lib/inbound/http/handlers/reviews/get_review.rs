use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use super::ReviewData;
use crate::domain::book::models::BookId;
use crate::domain::review::models::ReviewId;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

/// `GET /api/books/:book_id/reviews/:review_id`
pub async fn get_review(
    State(state): State<AppState>,
    Path((book_id, review_id)): Path<(String, String)>,
) -> Result<ApiSuccess<ReviewData>, ApiError> {
    let book_id = BookId::from_string(&book_id).map_err(|e| ApiError::BadRequest(e.to_string()))?;
    let review_id =
        ReviewId::from_string(&review_id).map_err(|e| ApiError::BadRequest(e.to_string()))?;

    state
        .review_service
        .get_book_review(&book_id, &review_id)
        .await
        .map_err(ApiError::from)
        .map(|ref review| ApiSuccess::new(StatusCode::OK, review.into()))
}
