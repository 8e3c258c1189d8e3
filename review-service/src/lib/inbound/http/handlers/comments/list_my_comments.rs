use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;

use super::CommentData;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

/// `GET /api/comments/me`
pub async fn list_my_comments(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthenticatedUser>,
) -> Result<ApiSuccess<Vec<CommentData>>, ApiError> {
    let comments = state
        .comment_service
        .list_user_comments(&auth_user.user_id)
        .await?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        comments.iter().map(CommentData::from).collect(),
    ))
}
