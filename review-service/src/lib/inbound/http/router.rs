use std::sync::Arc;
use std::time::Duration;

use auth::Authenticator;
use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::delete;
use axum::routing::get;
use axum::routing::post;
use axum::routing::put;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::auth::login::login;
use super::handlers::auth::me::me;
use super::handlers::auth::register::register;
use super::handlers::books::get_book::get_book;
use super::handlers::books::list_books::list_books;
use super::handlers::comments::create_comment::create_comment;
use super::handlers::comments::delete_comment::delete_comment;
use super::handlers::comments::list_my_comments::list_my_comments;
use super::handlers::comments::list_review_comments::list_review_comments;
use super::handlers::comments::update_comment::update_comment;
use super::handlers::reviews::create_review::create_review;
use super::handlers::reviews::delete_review::delete_review;
use super::handlers::reviews::get_review::get_review;
use super::handlers::reviews::list_book_reviews::list_book_reviews;
use super::handlers::reviews::list_my_reviews::list_my_reviews;
use super::handlers::reviews::update_review::update_review;
use super::middleware::authenticate as auth_middleware;
use crate::domain::book::ports::BookServicePort;
use crate::domain::comment::ports::CommentServicePort;
use crate::domain::review::ports::ReviewServicePort;
use crate::domain::user::ports::UserServicePort;

/// Application state shared by all handlers.
///
/// Services are held behind their ports so the router can be wired with
/// the Postgres repositories in production and in-memory implementations
/// in tests.
#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<dyn UserServicePort>,
    pub book_service: Arc<dyn BookServicePort>,
    pub review_service: Arc<dyn ReviewServicePort>,
    pub comment_service: Arc<dyn CommentServicePort>,
    pub authenticator: Arc<Authenticator>,
    pub jwt_expiration_hours: i64,
}

pub fn create_router(state: AppState) -> Router {
    let public_routes = Router::new()
        .route("/api/auth/register", post(register))
        .route("/api/auth/login", post(login))
        .route("/api/books", get(list_books))
        .route("/api/books/:book_id", get(get_book))
        .route("/api/books/:book_id/reviews", get(list_book_reviews))
        .route("/api/books/:book_id/reviews/:review_id", get(get_review))
        .route(
            "/api/reviews/:review_id/comments",
            get(list_review_comments),
        );

    let protected_routes = Router::new()
        .route("/api/auth/me", get(me))
        .route("/api/books/:book_id/reviews", post(create_review))
        .route("/api/reviews/me", get(list_my_reviews))
        .route(
            "/api/users/:user_id/reviews/:review_id",
            put(update_review),
        )
        .route(
            "/api/users/:user_id/reviews/:review_id",
            delete(delete_review),
        )
        .route(
            "/api/books/:book_id/reviews/:review_id/comments",
            post(create_comment),
        )
        .route("/api/comments/me", get(list_my_comments))
        .route(
            "/api/users/:user_id/comments/:comment_id",
            put(update_comment),
        )
        .route(
            "/api/users/:user_id/comments/:comment_id",
            delete(delete_comment),
        )
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}
