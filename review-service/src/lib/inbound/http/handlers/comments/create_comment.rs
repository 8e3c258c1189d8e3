use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;
use serde::Deserialize;

use super::CommentData;
use crate::domain::book::models::BookId;
use crate::domain::comment::models::CreateCommentCommand;
use crate::domain::review::models::ReviewId;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

/// `POST /api/books/:book_id/reviews/:review_id/comments`
///
/// The review must exist under the addressed book; commenting on a
/// review through the wrong book path is a 404.
pub async fn create_comment(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthenticatedUser>,
    Path((book_id, review_id)): Path<(String, String)>,
    Json(body): Json<CreateCommentRequestBody>,
) -> Result<ApiSuccess<CommentData>, ApiError> {
    let book_id = BookId::from_string(&book_id).map_err(|e| ApiError::BadRequest(e.to_string()))?;
    let review_id =
        ReviewId::from_string(&review_id).map_err(|e| ApiError::BadRequest(e.to_string()))?;

    let review = state
        .review_service
        .get_book_review(&book_id, &review_id)
        .await?;

    let command = CreateCommentCommand {
        user_id: auth_user.user_id,
        review_id: review.id,
        comment_text: body.comment_text,
    };

    state
        .comment_service
        .create_comment(command)
        .await
        .map_err(ApiError::from)
        .map(|ref comment| ApiSuccess::new(StatusCode::CREATED, comment.into()))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateCommentRequestBody {
    comment_text: String,
}
