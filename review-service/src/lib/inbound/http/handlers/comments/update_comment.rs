use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;
use serde::Deserialize;

use super::CommentData;
use crate::domain::comment::models::CommentId;
use crate::domain::user::models::UserId;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

/// `PUT /api/users/:user_id/comments/:comment_id`
pub async fn update_comment(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthenticatedUser>,
    Path((user_id, comment_id)): Path<(String, String)>,
    Json(body): Json<UpdateCommentRequestBody>,
) -> Result<ApiSuccess<CommentData>, ApiError> {
    let path_user_id =
        UserId::from_string(&user_id).map_err(|e| ApiError::BadRequest(e.to_string()))?;
    let comment_id =
        CommentId::from_string(&comment_id).map_err(|e| ApiError::BadRequest(e.to_string()))?;

    if path_user_id != auth_user.user_id {
        return Err(ApiError::Forbidden(
            "Not authorized to edit this comment".to_string(),
        ));
    }

    state
        .comment_service
        .update_comment(&comment_id, &auth_user.user_id, body.comment_text)
        .await
        .map_err(ApiError::from)
        .map(|ref comment| ApiSuccess::new(StatusCode::OK, comment.into()))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UpdateCommentRequestBody {
    comment_text: String,
}
