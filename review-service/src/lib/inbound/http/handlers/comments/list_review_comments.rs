use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use super::CommentData;
use crate::domain::review::models::ReviewId;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

/// `GET /api/reviews/:review_id/comments`
pub async fn list_review_comments(
    State(state): State<AppState>,
    Path(review_id): Path<String>,
) -> Result<ApiSuccess<Vec<CommentData>>, ApiError> {
    let review_id =
        ReviewId::from_string(&review_id).map_err(|e| ApiError::BadRequest(e.to_string()))?;

    let comments = state
        .comment_service
        .list_review_comments(&review_id)
        .await?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        comments.iter().map(CommentData::from).collect(),
    ))
}
