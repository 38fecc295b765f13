//! services/api/src/web/rest.rs
//!
//! Contains the Axum handlers for the REST API endpoints and the master
//! definition for the OpenAPI specification.

use crate::web::dto::{
    AttendanceDto, AttendanceStateDto, AttendanceStatusDto, FeedbackDto, MentorDto,
    MentorOverviewDto, QuoteDto, RatingDto, RequestDecisionDto, RequestDto, SessionDto,
    StudentDto, StudentSessionDto, UserDto, VideoDto,
};
use crate::web::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use chrono::NaiveDate;
use nearbyskillz_core::domain::RequestStatus;
use nearbyskillz_core::ports::PortError;
use serde::Deserialize;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::error;
use utoipa::{OpenApi, ToSchema};

//=========================================================================================
// OpenAPI Master Definition
//=========================================================================================

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::web::auth::login_handler,
        crate::web::auth::logout_handler,
        list_mentors_handler,
        list_students_handler,
        get_user_handler,
        mentor_requests_handler,
        student_requests_handler,
        create_request_handler,
        decide_request_handler,
        mentor_students_handler,
        student_mentors_handler,
        mentor_sessions_handler,
        create_session_handler,
        student_sessions_handler,
        mentor_videos_handler,
        create_video_handler,
        student_videos_handler,
        session_attendance_handler,
        mark_attendance_handler,
        mentor_feedback_handler,
        create_feedback_handler,
        mentor_rating_handler,
        list_quotes_handler,
        create_quote_handler,
        mentor_overview_handler,
    ),
    components(
        schemas(
            crate::web::auth::LoginRequest,
            crate::web::dto::RoleDto,
            crate::web::dto::UserDto,
            crate::web::dto::MentorDto,
            crate::web::dto::StudentDto,
            crate::web::dto::RequestStatusDto,
            crate::web::dto::RequestDecisionDto,
            crate::web::dto::RequestDto,
            crate::web::dto::SessionDto,
            crate::web::dto::StudentSessionDto,
            crate::web::dto::AttendanceStatusDto,
            crate::web::dto::AttendanceStateDto,
            crate::web::dto::AttendanceDto,
            crate::web::dto::VideoDto,
            crate::web::dto::FeedbackDto,
            crate::web::dto::QuoteDto,
            crate::web::dto::RatingDto,
            crate::web::dto::MentorOverviewDto,
            CreateRequestPayload,
            DecideRequestPayload,
            CreateSessionPayload,
            CreateVideoPayload,
            MarkAttendancePayload,
            CreateFeedbackPayload,
            CreateQuotePayload,
        )
    ),
    tags(
        (name = "NearBySkillz API", description = "API endpoints for the mentorship directory.")
    )
)]
pub struct ApiDoc;

//=========================================================================================
// API Payload Structs
//=========================================================================================

#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateRequestPayload {
    pub student_id: String,
    pub mentor_id: String,
}

#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DecideRequestPayload {
    pub student_id: String,
    pub mentor_id: String,
    pub decision: RequestDecisionDto,
}

#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateSessionPayload {
    pub topic: String,
    pub date: NaiveDate,
}

#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateVideoPayload {
    pub title: String,
    pub video_url: String,
}

#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MarkAttendancePayload {
    pub student_id: String,
    pub status: AttendanceStatusDto,
}

#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateFeedbackPayload {
    pub student_id: String,
    pub mentor_id: String,
    pub rating: u8,
    pub comment: String,
}

#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateQuotePayload {
    pub author_id: String,
    pub text: String,
}

//=========================================================================================
// Error Helpers
//=========================================================================================

/// Logs a store failure and maps it to the response the client sees.
fn store_failure(context: &'static str, err: PortError) -> (StatusCode, String) {
    error!("{}: {:?}", context, err);
    (StatusCode::INTERNAL_SERVER_ERROR, context.to_string())
}

/// Rejects blank text fields before they reach the store.
fn require_field(value: &str, message: &'static str) -> Result<(), (StatusCode, String)> {
    if value.trim().is_empty() {
        return Err((StatusCode::BAD_REQUEST, message.to_string()));
    }
    Ok(())
}

//=========================================================================================
// User Handlers
//=========================================================================================

/// List every mentor in the directory.
#[utoipa::path(
    get,
    path = "/mentors",
    responses(
        (status = 200, description = "All mentors", body = [MentorDto]),
        (status = 401, description = "Not signed in"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn list_mentors_handler(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let mentors = state
        .directory
        .list_mentors()
        .await
        .map_err(|e| store_failure("Failed to list mentors", e))?;
    let body: Vec<MentorDto> = mentors.into_iter().map(MentorDto::from).collect();
    Ok(Json(body))
}

/// List every student in the directory.
#[utoipa::path(
    get,
    path = "/students",
    responses(
        (status = 200, description = "All students", body = [StudentDto]),
        (status = 401, description = "Not signed in"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn list_students_handler(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let students = state
        .directory
        .list_students()
        .await
        .map_err(|e| store_failure("Failed to list students", e))?;
    let body: Vec<StudentDto> = students.into_iter().map(StudentDto::from).collect();
    Ok(Json(body))
}

/// Look up a single user of either role by id.
#[utoipa::path(
    get,
    path = "/users/{id}",
    responses(
        (status = 200, description = "The user", body = UserDto),
        (status = 401, description = "Not signed in"),
        (status = 404, description = "No user with this id"),
        (status = 500, description = "Internal server error")
    ),
    params(
        ("id" = String, Path, description = "The user's id.")
    )
)]
pub async fn get_user_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let user = state
        .directory
        .find_user(&id)
        .await
        .map_err(|e| store_failure("Failed to look up user", e))?
        .ok_or_else(|| (StatusCode::NOT_FOUND, format!("No user with id {}", id)))?;
    Ok(Json(UserDto::from(user)))
}

//=========================================================================================
// Mentorship Request Handlers
//=========================================================================================

/// List the requests addressed to a mentor, any status.
#[utoipa::path(
    get,
    path = "/mentors/{id}/requests",
    responses(
        (status = 200, description = "Requests for this mentor", body = [RequestDto]),
        (status = 401, description = "Not signed in"),
        (status = 500, description = "Internal server error")
    ),
    params(
        ("id" = String, Path, description = "The mentor's id.")
    )
)]
pub async fn mentor_requests_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let requests = state
        .directory
        .requests_for_mentor(&id)
        .await
        .map_err(|e| store_failure("Failed to list requests", e))?;
    let body: Vec<RequestDto> = requests.into_iter().map(RequestDto::from).collect();
    Ok(Json(body))
}

/// List the requests a student has sent, any status.
#[utoipa::path(
    get,
    path = "/students/{id}/requests",
    responses(
        (status = 200, description = "Requests from this student", body = [RequestDto]),
        (status = 401, description = "Not signed in"),
        (status = 500, description = "Internal server error")
    ),
    params(
        ("id" = String, Path, description = "The student's id.")
    )
)]
pub async fn student_requests_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let requests = state
        .directory
        .requests_for_student(&id)
        .await
        .map_err(|e| store_failure("Failed to list requests", e))?;
    let body: Vec<RequestDto> = requests.into_iter().map(RequestDto::from).collect();
    Ok(Json(body))
}

/// Send a mentorship request from a student to a mentor.
///
/// Sending again for the same pair returns the existing request unchanged,
/// whatever state it is in.
#[utoipa::path(
    post,
    path = "/requests",
    request_body = CreateRequestPayload,
    responses(
        (status = 201, description = "The pending (or pre-existing) request", body = RequestDto),
        (status = 401, description = "Not signed in"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn create_request_handler(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreateRequestPayload>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let request = state
        .directory
        .create_request(&payload.student_id, &payload.mentor_id)
        .await
        .map_err(|e| store_failure("Failed to create request", e))?;
    Ok((StatusCode::CREATED, Json(RequestDto::from(request))))
}

/// Accept or reject a mentorship request.
///
/// Rejecting a pair that never sent a request changes nothing and returns
/// 204 No Content.
#[utoipa::path(
    patch,
    path = "/requests",
    request_body = DecideRequestPayload,
    responses(
        (status = 200, description = "The decided request", body = RequestDto),
        (status = 204, description = "No such request; nothing to reject"),
        (status = 401, description = "Not signed in"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn decide_request_handler(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<DecideRequestPayload>,
) -> Result<Response, (StatusCode, String)> {
    let updated = state
        .directory
        .set_request_status(
            &payload.student_id,
            &payload.mentor_id,
            payload.decision.into(),
        )
        .await
        .map_err(|e| store_failure("Failed to update request", e))?;
    Ok(match updated {
        Some(request) => (StatusCode::OK, Json(RequestDto::from(request))).into_response(),
        None => StatusCode::NO_CONTENT.into_response(),
    })
}

/// List the students a mentor has admitted.
#[utoipa::path(
    get,
    path = "/mentors/{id}/students",
    responses(
        (status = 200, description = "Admitted students", body = [StudentDto]),
        (status = 401, description = "Not signed in"),
        (status = 500, description = "Internal server error")
    ),
    params(
        ("id" = String, Path, description = "The mentor's id.")
    )
)]
pub async fn mentor_students_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let students = state
        .directory
        .admitted_students(&id)
        .await
        .map_err(|e| store_failure("Failed to list admitted students", e))?;
    let body: Vec<StudentDto> = students.into_iter().map(StudentDto::from).collect();
    Ok(Json(body))
}

/// List the mentors that have accepted this student.
#[utoipa::path(
    get,
    path = "/students/{id}/mentors",
    responses(
        (status = 200, description = "This student's mentors", body = [MentorDto]),
        (status = 401, description = "Not signed in"),
        (status = 500, description = "Internal server error")
    ),
    params(
        ("id" = String, Path, description = "The student's id.")
    )
)]
pub async fn student_mentors_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let mentors = state
        .directory
        .mentors_for_student(&id)
        .await
        .map_err(|e| store_failure("Failed to list mentors", e))?;
    let body: Vec<MentorDto> = mentors.into_iter().map(MentorDto::from).collect();
    Ok(Json(body))
}

//=========================================================================================
// Session Handlers
//=========================================================================================

/// List the sessions a mentor has scheduled.
#[utoipa::path(
    get,
    path = "/mentors/{id}/sessions",
    responses(
        (status = 200, description = "This mentor's sessions", body = [SessionDto]),
        (status = 401, description = "Not signed in"),
        (status = 500, description = "Internal server error")
    ),
    params(
        ("id" = String, Path, description = "The mentor's id.")
    )
)]
pub async fn mentor_sessions_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let sessions = state
        .directory
        .sessions_for_mentor(&id)
        .await
        .map_err(|e| store_failure("Failed to list sessions", e))?;
    let body: Vec<SessionDto> = sessions.into_iter().map(SessionDto::from).collect();
    Ok(Json(body))
}

/// Schedule a new session for a mentor.
#[utoipa::path(
    post,
    path = "/mentors/{id}/sessions",
    request_body = CreateSessionPayload,
    responses(
        (status = 201, description = "The scheduled session", body = SessionDto),
        (status = 400, description = "Blank topic"),
        (status = 401, description = "Not signed in"),
        (status = 500, description = "Internal server error")
    ),
    params(
        ("id" = String, Path, description = "The mentor's id.")
    )
)]
pub async fn create_session_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(payload): Json<CreateSessionPayload>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    require_field(&payload.topic, "Session topic must not be blank")?;
    let session = state
        .directory
        .create_session(&id, &payload.topic, payload.date)
        .await
        .map_err(|e| store_failure("Failed to create session", e))?;
    Ok((StatusCode::CREATED, Json(SessionDto::from(session))))
}

/// List the sessions of every mentor who admitted this student, newest
/// first, each row carrying the mentor's name and the student's own
/// attendance state.
#[utoipa::path(
    get,
    path = "/students/{id}/sessions",
    responses(
        (status = 200, description = "Sessions visible to this student", body = [StudentSessionDto]),
        (status = 401, description = "Not signed in"),
        (status = 500, description = "Internal server error")
    ),
    params(
        ("id" = String, Path, description = "The student's id.")
    )
)]
pub async fn student_sessions_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let sessions = state
        .directory
        .sessions_for_student(&id)
        .await
        .map_err(|e| store_failure("Failed to list sessions", e))?;
    let mentors = state
        .directory
        .list_mentors()
        .await
        .map_err(|e| store_failure("Failed to list mentors", e))?;
    let mentor_names: HashMap<&str, &str> = mentors
        .iter()
        .map(|m| (m.profile.id.as_str(), m.profile.name.as_str()))
        .collect();

    let mut rows = Vec::with_capacity(sessions.len());
    for session in sessions {
        let attendance = state
            .directory
            .attendance_for_session(&session.id)
            .await
            .map_err(|e| store_failure("Failed to read attendance", e))?;
        let attendance_state = attendance
            .iter()
            .find(|a| a.student_id == id)
            .map(|a| AttendanceStateDto::from(a.status))
            .unwrap_or(AttendanceStateDto::Unmarked);
        let mentor_name = mentor_names
            .get(session.mentor_id.as_str())
            .copied()
            .unwrap_or("Unknown Mentor")
            .to_string();
        rows.push(StudentSessionDto {
            id: session.id,
            mentor_id: session.mentor_id,
            mentor_name,
            topic: session.topic,
            date: session.date,
            attendance: attendance_state,
        });
    }
    Ok(Json(rows))
}

//=========================================================================================
// Video Handlers
//=========================================================================================

/// List a mentor's video lessons, newest first.
#[utoipa::path(
    get,
    path = "/mentors/{id}/videos",
    responses(
        (status = 200, description = "This mentor's videos", body = [VideoDto]),
        (status = 401, description = "Not signed in"),
        (status = 500, description = "Internal server error")
    ),
    params(
        ("id" = String, Path, description = "The mentor's id.")
    )
)]
pub async fn mentor_videos_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let videos = state
        .directory
        .videos_for_mentor(&id)
        .await
        .map_err(|e| store_failure("Failed to list videos", e))?;
    let body: Vec<VideoDto> = videos.into_iter().map(VideoDto::from).collect();
    Ok(Json(body))
}

/// Publish a video lesson, dated today.
#[utoipa::path(
    post,
    path = "/mentors/{id}/videos",
    request_body = CreateVideoPayload,
    responses(
        (status = 201, description = "The published video", body = VideoDto),
        (status = 400, description = "Blank title or URL"),
        (status = 401, description = "Not signed in"),
        (status = 500, description = "Internal server error")
    ),
    params(
        ("id" = String, Path, description = "The mentor's id.")
    )
)]
pub async fn create_video_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(payload): Json<CreateVideoPayload>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    require_field(&payload.title, "Video title must not be blank")?;
    require_field(&payload.video_url, "Video URL must not be blank")?;
    let video = state
        .directory
        .create_video(&id, &payload.title, &payload.video_url)
        .await
        .map_err(|e| store_failure("Failed to create video", e))?;
    Ok((StatusCode::CREATED, Json(VideoDto::from(video))))
}

/// List the videos of every mentor who admitted this student, newest first.
#[utoipa::path(
    get,
    path = "/students/{id}/videos",
    responses(
        (status = 200, description = "Videos visible to this student", body = [VideoDto]),
        (status = 401, description = "Not signed in"),
        (status = 500, description = "Internal server error")
    ),
    params(
        ("id" = String, Path, description = "The student's id.")
    )
)]
pub async fn student_videos_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let videos = state
        .directory
        .videos_for_student(&id)
        .await
        .map_err(|e| store_failure("Failed to list videos", e))?;
    let body: Vec<VideoDto> = videos.into_iter().map(VideoDto::from).collect();
    Ok(Json(body))
}

//=========================================================================================
// Attendance Handlers
//=========================================================================================

/// List the attendance records of one session.
#[utoipa::path(
    get,
    path = "/sessions/{id}/attendance",
    responses(
        (status = 200, description = "Attendance for this session", body = [AttendanceDto]),
        (status = 401, description = "Not signed in"),
        (status = 500, description = "Internal server error")
    ),
    params(
        ("id" = String, Path, description = "The session's id.")
    )
)]
pub async fn session_attendance_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let records = state
        .directory
        .attendance_for_session(&id)
        .await
        .map_err(|e| store_failure("Failed to read attendance", e))?;
    let body: Vec<AttendanceDto> = records.into_iter().map(AttendanceDto::from).collect();
    Ok(Json(body))
}

/// Mark a student present or absent for a session.
///
/// Marking the same student again overwrites the earlier record.
#[utoipa::path(
    put,
    path = "/sessions/{id}/attendance",
    request_body = MarkAttendancePayload,
    responses(
        (status = 200, description = "The attendance record as stored", body = AttendanceDto),
        (status = 401, description = "Not signed in"),
        (status = 500, description = "Internal server error")
    ),
    params(
        ("id" = String, Path, description = "The session's id.")
    )
)]
pub async fn mark_attendance_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(payload): Json<MarkAttendancePayload>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let record = state
        .directory
        .mark_attendance(&id, &payload.student_id, payload.status.into())
        .await
        .map_err(|e| store_failure("Failed to mark attendance", e))?;
    Ok(Json(AttendanceDto::from(record)))
}

//=========================================================================================
// Feedback Handlers
//=========================================================================================

/// List the feedback a mentor has received.
#[utoipa::path(
    get,
    path = "/mentors/{id}/feedback",
    responses(
        (status = 200, description = "Feedback for this mentor", body = [FeedbackDto]),
        (status = 401, description = "Not signed in"),
        (status = 500, description = "Internal server error")
    ),
    params(
        ("id" = String, Path, description = "The mentor's id.")
    )
)]
pub async fn mentor_feedback_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let feedback = state
        .directory
        .feedback_for_mentor(&id)
        .await
        .map_err(|e| store_failure("Failed to list feedback", e))?;
    let body: Vec<FeedbackDto> = feedback.into_iter().map(FeedbackDto::from).collect();
    Ok(Json(body))
}

/// Leave feedback for a mentor, dated today.
///
/// Only students the mentor has admitted may leave feedback.
#[utoipa::path(
    post,
    path = "/feedback",
    request_body = CreateFeedbackPayload,
    responses(
        (status = 201, description = "The stored feedback", body = FeedbackDto),
        (status = 400, description = "Rating outside 1 to 5"),
        (status = 401, description = "Not signed in"),
        (status = 403, description = "The mentor has not admitted this student"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn create_feedback_handler(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreateFeedbackPayload>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    if !(1..=5).contains(&payload.rating) {
        return Err((
            StatusCode::BAD_REQUEST,
            "Rating must be between 1 and 5".to_string(),
        ));
    }
    let admitted_mentors = state
        .directory
        .mentors_for_student(&payload.student_id)
        .await
        .map_err(|e| store_failure("Failed to check feedback eligibility", e))?;
    if !admitted_mentors.iter().any(|m| m.profile.id == payload.mentor_id) {
        return Err((
            StatusCode::FORBIDDEN,
            "Feedback is only open to students the mentor has admitted".to_string(),
        ));
    }
    let feedback = state
        .directory
        .create_feedback(
            &payload.student_id,
            &payload.mentor_id,
            payload.rating,
            &payload.comment,
        )
        .await
        .map_err(|e| store_failure("Failed to create feedback", e))?;
    Ok((StatusCode::CREATED, Json(FeedbackDto::from(feedback))))
}

/// Report a mentor's average rating, one decimal place, 0.0 when unrated.
#[utoipa::path(
    get,
    path = "/mentors/{id}/rating",
    responses(
        (status = 200, description = "The average rating", body = RatingDto),
        (status = 401, description = "Not signed in"),
        (status = 500, description = "Internal server error")
    ),
    params(
        ("id" = String, Path, description = "The mentor's id.")
    )
)]
pub async fn mentor_rating_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let average_rating = state
        .directory
        .average_rating(&id)
        .await
        .map_err(|e| store_failure("Failed to compute rating", e))?;
    Ok(Json(RatingDto {
        mentor_id: id,
        average_rating,
    }))
}

//=========================================================================================
// Quote Handlers
//=========================================================================================

/// List every motivation quote, oldest first.
#[utoipa::path(
    get,
    path = "/quotes",
    responses(
        (status = 200, description = "All quotes", body = [QuoteDto]),
        (status = 401, description = "Not signed in"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn list_quotes_handler(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let quotes = state
        .directory
        .motivation_quotes()
        .await
        .map_err(|e| store_failure("Failed to list quotes", e))?;
    let body: Vec<QuoteDto> = quotes.into_iter().map(QuoteDto::from).collect();
    Ok(Json(body))
}

/// Post a new motivation quote.
#[utoipa::path(
    post,
    path = "/quotes",
    request_body = CreateQuotePayload,
    responses(
        (status = 201, description = "The posted quote", body = QuoteDto),
        (status = 400, description = "Blank quote text"),
        (status = 401, description = "Not signed in"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn create_quote_handler(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreateQuotePayload>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    require_field(&payload.text, "Quote text must not be blank")?;
    let quote = state
        .directory
        .create_quote(&payload.author_id, &payload.text)
        .await
        .map_err(|e| store_failure("Failed to create quote", e))?;
    Ok((StatusCode::CREATED, Json(QuoteDto::from(quote))))
}

//=========================================================================================
// Overview Handler
//=========================================================================================

/// Compute the stat cards of a mentor's dashboard in one call.
#[utoipa::path(
    get,
    path = "/mentors/{id}/overview",
    responses(
        (status = 200, description = "The mentor's dashboard numbers", body = MentorOverviewDto),
        (status = 401, description = "Not signed in"),
        (status = 500, description = "Internal server error")
    ),
    params(
        ("id" = String, Path, description = "The mentor's id.")
    )
)]
pub async fn mentor_overview_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let students = state
        .directory
        .admitted_students(&id)
        .await
        .map_err(|e| store_failure("Failed to list admitted students", e))?;
    let sessions = state
        .directory
        .sessions_for_mentor(&id)
        .await
        .map_err(|e| store_failure("Failed to list sessions", e))?;
    let requests = state
        .directory
        .requests_for_mentor(&id)
        .await
        .map_err(|e| store_failure("Failed to list requests", e))?;
    let average_rating = state
        .directory
        .average_rating(&id)
        .await
        .map_err(|e| store_failure("Failed to compute rating", e))?;

    let pending_request_count = requests
        .iter()
        .filter(|r| r.status == RequestStatus::Pending)
        .count();

    Ok(Json(MentorOverviewDto {
        mentor_id: id,
        student_count: students.len(),
        session_count: sessions.len(),
        pending_request_count,
        average_rating,
    }))
}
