use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;

use crate::domain::review::models::ReviewId;
use crate::domain::user::models::UserId;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

/// `DELETE /api/users/:user_id/reviews/:review_id`
///
/// Responds 204 with no body.
pub async fn delete_review(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthenticatedUser>,
    Path((user_id, review_id)): Path<(String, String)>,
) -> Result<StatusCode, ApiError> {
    let path_user_id =
        UserId::from_string(&user_id).map_err(|e| ApiError::BadRequest(e.to_string()))?;
    let review_id =
        ReviewId::from_string(&review_id).map_err(|e| ApiError::BadRequest(e.to_string()))?;

    if path_user_id != auth_user.user_id {
        return Err(ApiError::Forbidden(
            "Not authorized to delete this review".to_string(),
        ));
    }

    state
        .review_service
        .delete_review(&review_id, &auth_user.user_id)
        .await
        .map_err(ApiError::from)
        .map(|_| StatusCode::NO_CONTENT)
}
