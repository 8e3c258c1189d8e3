use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use super::ReviewData;
use crate::domain::book::models::BookId;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

/// `GET /api/books/:book_id/reviews`
pub async fn list_book_reviews(
    State(state): State<AppState>,
    Path(book_id): Path<String>,
) -> Result<ApiSuccess<Vec<ReviewData>>, ApiError> {
    let book_id = BookId::from_string(&book_id).map_err(|e| ApiError::BadRequest(e.to_string()))?;

    let reviews = state.review_service.list_book_reviews(&book_id).await?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        reviews.iter().map(ReviewData::from).collect(),
    ))
}
