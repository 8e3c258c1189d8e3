use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;

use super::ReviewData;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

/// `GET /api/reviews/me`
pub async fn list_my_reviews(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthenticatedUser>,
) -> Result<ApiSuccess<Vec<ReviewData>>, ApiError> {
    let reviews = state
        .review_service
        .list_user_reviews(&auth_user.user_id)
        .await?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        reviews.iter().map(ReviewData::from).collect(),
    ))
}
