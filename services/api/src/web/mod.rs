pub mod auth;
pub mod dto;
pub mod middleware;
pub mod rest;
pub mod state;

use axum::{
    extract::DefaultBodyLimit,
    middleware::from_fn_with_state,
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use state::AppState;

pub use middleware::require_auth;

/// Builds the full API router: the public auth routes plus the
/// cookie-protected directory routes, all sharing one `AppState`.
pub fn api_router(state: Arc<AppState>) -> Router {
    let protected = Router::new()
        .route("/mentors", get(rest::list_mentors_handler))
        .route("/students", get(rest::list_students_handler))
        .route("/users/{id}", get(rest::get_user_handler))
        .route("/mentors/{id}/requests", get(rest::mentor_requests_handler))
        .route(
            "/students/{id}/requests",
            get(rest::student_requests_handler),
        )
        .route(
            "/requests",
            post(rest::create_request_handler).patch(rest::decide_request_handler),
        )
        .route("/mentors/{id}/students", get(rest::mentor_students_handler))
        .route("/students/{id}/mentors", get(rest::student_mentors_handler))
        .route(
            "/mentors/{id}/sessions",
            get(rest::mentor_sessions_handler).post(rest::create_session_handler),
        )
        .route(
            "/students/{id}/sessions",
            get(rest::student_sessions_handler),
        )
        .route(
            "/mentors/{id}/videos",
            get(rest::mentor_videos_handler).post(rest::create_video_handler),
        )
        .route("/students/{id}/videos", get(rest::student_videos_handler))
        .route(
            "/sessions/{id}/attendance",
            get(rest::session_attendance_handler).put(rest::mark_attendance_handler),
        )
        .route("/mentors/{id}/feedback", get(rest::mentor_feedback_handler))
        .route("/feedback", post(rest::create_feedback_handler))
        .route("/mentors/{id}/rating", get(rest::mentor_rating_handler))
        .route(
            "/quotes",
            get(rest::list_quotes_handler).post(rest::create_quote_handler),
        )
        .route("/mentors/{id}/overview", get(rest::mentor_overview_handler))
        .layer(from_fn_with_state(state.clone(), require_auth));

    let public = Router::new()
        .route("/auth/login", post(auth::login_handler))
        .route("/auth/logout", post(auth::logout_handler));

    Router::new()
        .merge(public)
        .merge(protected)
        .layer(DefaultBodyLimit::max(64 * 1024))
        .with_state(state)
}
