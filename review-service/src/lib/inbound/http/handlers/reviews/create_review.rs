use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;
use serde::Deserialize;

use super::ReviewData;
use crate::domain::book::models::BookId;
use crate::domain::review::models::CreateReviewCommand;
use crate::domain::review::models::Rating;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

/// `POST /api/books/:book_id/reviews`
pub async fn create_review(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthenticatedUser>,
    Path(book_id): Path<String>,
    Json(body): Json<CreateReviewRequestBody>,
) -> Result<ApiSuccess<ReviewData>, ApiError> {
    let book_id = BookId::from_string(&book_id).map_err(|e| ApiError::BadRequest(e.to_string()))?;

    let rating =
        Rating::new(body.rating).map_err(|e| ApiError::UnprocessableEntity(e.to_string()))?;

    let command = CreateReviewCommand {
        user_id: auth_user.user_id,
        book_id,
        rating,
        review_text: body.review_text,
    };

    state
        .review_service
        .create_review(command)
        .await
        .map_err(ApiError::from)
        .map(|ref review| ApiSuccess::new(StatusCode::CREATED, review.into()))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateReviewRequestBody {
    rating: i32,
    review_text: String,
}
