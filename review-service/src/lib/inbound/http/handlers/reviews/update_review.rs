use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;
use serde::Deserialize;

use super::ReviewData;
use crate::domain::review::models::Rating;
use crate::domain::review::models::ReviewId;
use crate::domain::review::models::UpdateReviewCommand;
use crate::domain::user::models::UserId;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

/// `PUT /api/users/:user_id/reviews/:review_id`
///
/// The path-supplied owner id is parsed into the same typed id as the
/// token subject before comparison; a mismatch is 403. The service
/// re-checks the review's recorded owner.
pub async fn update_review(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthenticatedUser>,
    Path((user_id, review_id)): Path<(String, String)>,
    Json(body): Json<UpdateReviewRequestBody>,
) -> Result<ApiSuccess<ReviewData>, ApiError> {
    let path_user_id =
        UserId::from_string(&user_id).map_err(|e| ApiError::BadRequest(e.to_string()))?;
    let review_id =
        ReviewId::from_string(&review_id).map_err(|e| ApiError::BadRequest(e.to_string()))?;

    if path_user_id != auth_user.user_id {
        return Err(ApiError::Forbidden(
            "Not authorized to edit this review".to_string(),
        ));
    }

    let rating =
        Rating::new(body.rating).map_err(|e| ApiError::UnprocessableEntity(e.to_string()))?;

    let command = UpdateReviewCommand {
        rating,
        review_text: body.review_text,
    };

    state
        .review_service
        .update_review(&review_id, &auth_user.user_id, command)
        .await
        .map_err(ApiError::from)
        .map(|ref review| ApiSuccess::new(StatusCode::OK, review.into()))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UpdateReviewRequestBody {
    rating: i32,
    review_text: String,
}
