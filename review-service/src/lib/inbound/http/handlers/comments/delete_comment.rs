use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;

use crate::domain::comment::models::CommentId;
use crate::domain::user::models::UserId;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

/// `DELETE /api/users/:user_id/comments/:comment_id`
///
/// Responds 204 with no body.
pub async fn delete_comment(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthenticatedUser>,
    Path((user_id, comment_id)): Path<(String, String)>,
) -> Result<StatusCode, ApiError> {
    let path_user_id =
        UserId::from_string(&user_id).map_err(|e| ApiError::BadRequest(e.to_string()))?;
    let comment_id =
        CommentId::from_string(&comment_id).map_err(|e| ApiError::BadRequest(e.to_string()))?;

    if path_user_id != auth_user.user_id {
        return Err(ApiError::Forbidden(
            "Not authorized to delete this comment".to_string(),
        ));
    }

    state
        .comment_service
        .delete_comment(&comment_id, &auth_user.user_id)
        .await
        .map_err(ApiError::from)
        .map(|_| StatusCode::NO_CONTENT)
}
