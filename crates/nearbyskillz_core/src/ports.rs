//! crates/nearbyskillz_core/src/ports.rs
//!
//! Defines the service contracts (traits) for the application's core logic.
//! These traits form the boundary of the hexagonal architecture, allowing the core
//! to be independent of specific external implementations like databases or APIs.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};

use crate::domain::{
    AnyUser, Attendance, AttendanceStatus, Feedback, Mentor, MentorshipRequest, MotivationQuote,
    RequestDecision, Role, Session, Student, VideoSession,
};

//=========================================================================================
// Generic Port Error and Result Types
//=========================================================================================

/// A generic error type for all port operations.
/// This abstracts away the specific errors from external services (e.g., database, network).
#[derive(Debug, thiserror::Error)]
pub enum PortError {
    #[error("Invalid credentials for the selected role")]
    InvalidCredentials,
    #[error("Item not found: {0}")]
    NotFound(String),
    #[error("Unauthorized")]
    Unauthorized,
    #[error("An unexpected error occurred: {0}")]
    Unexpected(String),
}

/// A convenience type alias for `Result<T, PortError>`.
pub type PortResult<T> = Result<T, PortError>;

//=========================================================================================
// Service Ports (Traits)
//=========================================================================================

/// The mentorship directory store: the single source of truth for every
/// entity collection in the application.
///
/// All operations other than `authenticate` are total over their inputs.
/// Lookups of missing references yield empty results or no-ops rather than
/// errors, and consumers rely on that.
#[async_trait]
pub trait DirectoryService: Send + Sync {
    // --- Authentication ---

    /// Checks `password` against the fixed secret for `role`, then returns
    /// the user registered under `email` in that role's collection. An
    /// unseen email is auto-provisioned with a fresh demo profile first.
    ///
    /// This is the only operation in the store with a checked failure:
    /// a wrong password fails with `PortError::InvalidCredentials` and
    /// mutates nothing.
    async fn authenticate(&self, email: &str, password: &str, role: Role) -> PortResult<AnyUser>;

    async fn create_auth_session(
        &self,
        session_id: &str,
        user_id: &str,
        expires_at: DateTime<Utc>,
    ) -> PortResult<()>;

    /// Resolves an auth session id to the owning user id. Fails with
    /// `NotFound` for an unknown session and `Unauthorized` for an expired one.
    async fn validate_auth_session(&self, session_id: &str) -> PortResult<String>;

    async fn delete_auth_session(&self, session_id: &str) -> PortResult<()>;

    // --- Users ---

    async fn list_mentors(&self) -> PortResult<Vec<Mentor>>;

    async fn list_students(&self) -> PortResult<Vec<Student>>;

    /// Looks the id up across both role collections, mentors first.
    async fn find_user(&self, user_id: &str) -> PortResult<Option<AnyUser>>;

    // --- Mentorship Requests ---

    async fn requests_for_mentor(&self, mentor_id: &str) -> PortResult<Vec<MentorshipRequest>>;

    async fn requests_for_student(&self, student_id: &str) -> PortResult<Vec<MentorshipRequest>>;

    /// Idempotent: if a request for this pair already exists, in any status,
    /// it is returned unchanged; otherwise a new pending request is appended.
    async fn create_request(
        &self,
        student_id: &str,
        mentor_id: &str,
    ) -> PortResult<MentorshipRequest>;

    /// Overwrites the status of the matching request in place. When no
    /// request exists for the pair, an `Accepted` decision fabricates one
    /// already in the accepted state, while a `Rejected` decision is a
    /// no-op returning `None`.
    async fn set_request_status(
        &self,
        student_id: &str,
        mentor_id: &str,
        decision: RequestDecision,
    ) -> PortResult<Option<MentorshipRequest>>;

    /// The students this mentor has admitted, i.e. those with an accepted
    /// request. Result order follows the student collection, not the requests.
    async fn admitted_students(&self, mentor_id: &str) -> PortResult<Vec<Student>>;

    /// The mentors that have admitted this student. Counterpart of
    /// `admitted_students`; result order follows the mentor collection.
    async fn mentors_for_student(&self, student_id: &str) -> PortResult<Vec<Mentor>>;

    // --- Teaching Sessions ---

    async fn sessions_for_mentor(&self, mentor_id: &str) -> PortResult<Vec<Session>>;

    /// Every session held by one of this student's admitted mentors,
    /// sorted most recent first.
    async fn sessions_for_student(&self, student_id: &str) -> PortResult<Vec<Session>>;

    async fn create_session(
        &self,
        mentor_id: &str,
        topic: &str,
        date: NaiveDate,
    ) -> PortResult<Session>;

    // --- Video Lessons ---

    /// This mentor's videos, sorted most recent first. Equal dates keep
    /// their original insertion order.
    async fn videos_for_mentor(&self, mentor_id: &str) -> PortResult<Vec<VideoSession>>;

    /// The videos visible to a student: those posted by mentors with an
    /// accepted request for the student, sorted most recent first.
    async fn videos_for_student(&self, student_id: &str) -> PortResult<Vec<VideoSession>>;

    /// Appends a new video stamped with today's date.
    async fn create_video(
        &self,
        mentor_id: &str,
        title: &str,
        video_url: &str,
    ) -> PortResult<VideoSession>;

    // --- Attendance ---

    async fn attendance_for_session(&self, session_id: &str) -> PortResult<Vec<Attendance>>;

    /// Upsert: overwrites the status of an existing (session, student)
    /// record or appends a new one, guaranteeing exactly one record per pair.
    async fn mark_attendance(
        &self,
        session_id: &str,
        student_id: &str,
        status: AttendanceStatus,
    ) -> PortResult<Attendance>;

    // --- Feedback & Ratings ---

    async fn feedback_for_mentor(&self, mentor_id: &str) -> PortResult<Vec<Feedback>>;

    /// Pure append, stamped with today's date. The rating is stored as
    /// given; constraining it to 1..=5 is the caller's job.
    async fn create_feedback(
        &self,
        student_id: &str,
        mentor_id: &str,
        rating: u8,
        comment: &str,
    ) -> PortResult<Feedback>;

    /// The mean of this mentor's feedback ratings, rounded to one decimal
    /// place. A mentor with no feedback rates 0.0, never NaN or an error.
    async fn average_rating(&self, mentor_id: &str) -> PortResult<f64>;

    // --- Motivation Quotes ---

    async fn motivation_quotes(&self) -> PortResult<Vec<MotivationQuote>>;

    async fn create_quote(&self, author_id: &str, text: &str) -> PortResult<MotivationQuote>;
}
