//! services/api/src/web/dto.rs
//!
//! The JSON wire types exchanged with API clients, kept separate from the
//! domain model so field naming and tagging stay a web-layer concern.

use chrono::NaiveDate;
use nearbyskillz_core::domain::{
    AnyUser, Attendance, AttendanceStatus, Feedback, Mentor, MentorshipRequest, MotivationQuote,
    RequestDecision, RequestStatus, Role, Session, Student, VideoSession,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

//=========================================================================================
// Users
//=========================================================================================

/// The `"role"` discriminator carried by login requests and user JSON.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum RoleDto {
    Mentor,
    Student,
}

impl From<RoleDto> for Role {
    fn from(role: RoleDto) -> Self {
        match role {
            RoleDto::Mentor => Role::Mentor,
            RoleDto::Student => Role::Student,
        }
    }
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MentorDto {
    pub id: String,
    pub name: String,
    pub email: String,
    pub location: String,
    pub bio: String,
    pub photo_url: String,
    pub skills: Vec<String>,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StudentDto {
    pub id: String,
    pub name: String,
    pub email: String,
    pub location: String,
    pub bio: String,
    pub photo_url: String,
    pub interests: Vec<String>,
}

/// A user of either role, tagged with a `"role"` field in the JSON body.
#[derive(Serialize, ToSchema)]
#[serde(tag = "role", rename_all = "lowercase")]
pub enum UserDto {
    Mentor(MentorDto),
    Student(StudentDto),
}

impl From<Mentor> for MentorDto {
    fn from(mentor: Mentor) -> Self {
        Self {
            id: mentor.profile.id,
            name: mentor.profile.name,
            email: mentor.profile.email,
            location: mentor.profile.location,
            bio: mentor.profile.bio,
            photo_url: mentor.profile.photo_url,
            skills: mentor.skills,
        }
    }
}

impl From<Student> for StudentDto {
    fn from(student: Student) -> Self {
        Self {
            id: student.profile.id,
            name: student.profile.name,
            email: student.profile.email,
            location: student.profile.location,
            bio: student.profile.bio,
            photo_url: student.profile.photo_url,
            interests: student.interests,
        }
    }
}

impl From<AnyUser> for UserDto {
    fn from(user: AnyUser) -> Self {
        match user {
            AnyUser::Mentor(mentor) => UserDto::Mentor(mentor.into()),
            AnyUser::Student(student) => UserDto::Student(student.into()),
        }
    }
}

//=========================================================================================
// Mentorship Requests
//=========================================================================================

#[derive(Debug, Clone, Copy, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum RequestStatusDto {
    Pending,
    Accepted,
    Rejected,
}

impl From<RequestStatus> for RequestStatusDto {
    fn from(status: RequestStatus) -> Self {
        match status {
            RequestStatus::Pending => RequestStatusDto::Pending,
            RequestStatus::Accepted => RequestStatusDto::Accepted,
            RequestStatus::Rejected => RequestStatusDto::Rejected,
        }
    }
}

/// The only two states a mentor's decision can move a request into.
#[derive(Debug, Clone, Copy, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum RequestDecisionDto {
    Accepted,
    Rejected,
}

impl From<RequestDecisionDto> for RequestDecision {
    fn from(decision: RequestDecisionDto) -> Self {
        match decision {
            RequestDecisionDto::Accepted => RequestDecision::Accepted,
            RequestDecisionDto::Rejected => RequestDecision::Rejected,
        }
    }
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RequestDto {
    pub student_id: String,
    pub mentor_id: String,
    pub status: RequestStatusDto,
}

impl From<MentorshipRequest> for RequestDto {
    fn from(request: MentorshipRequest) -> Self {
        Self {
            student_id: request.student_id,
            mentor_id: request.mentor_id,
            status: request.status.into(),
        }
    }
}

//=========================================================================================
// Sessions and Attendance
//=========================================================================================

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SessionDto {
    pub id: String,
    pub mentor_id: String,
    pub topic: String,
    pub date: NaiveDate,
}

impl From<Session> for SessionDto {
    fn from(session: Session) -> Self {
        Self {
            id: session.id,
            mentor_id: session.mentor_id,
            topic: session.topic,
            date: session.date,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum AttendanceStatusDto {
    Present,
    Absent,
}

impl From<AttendanceStatus> for AttendanceStatusDto {
    fn from(status: AttendanceStatus) -> Self {
        match status {
            AttendanceStatus::Present => AttendanceStatusDto::Present,
            AttendanceStatus::Absent => AttendanceStatusDto::Absent,
        }
    }
}

impl From<AttendanceStatusDto> for AttendanceStatus {
    fn from(status: AttendanceStatusDto) -> Self {
        match status {
            AttendanceStatusDto::Present => AttendanceStatus::Present,
            AttendanceStatusDto::Absent => AttendanceStatus::Absent,
        }
    }
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceDto {
    pub session_id: String,
    pub student_id: String,
    pub status: AttendanceStatusDto,
}

impl From<Attendance> for AttendanceDto {
    fn from(record: Attendance) -> Self {
        Self {
            session_id: record.session_id,
            student_id: record.student_id,
            status: record.status.into(),
        }
    }
}

/// A student's view of one attendance cell: marked either way, or not yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum AttendanceStateDto {
    Present,
    Absent,
    Unmarked,
}

impl From<AttendanceStatus> for AttendanceStateDto {
    fn from(status: AttendanceStatus) -> Self {
        match status {
            AttendanceStatus::Present => AttendanceStateDto::Present,
            AttendanceStatus::Absent => AttendanceStateDto::Absent,
        }
    }
}

/// A session row as a student sees it, joined with the mentor's name and
/// this student's own attendance state.
#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StudentSessionDto {
    pub id: String,
    pub mentor_id: String,
    pub mentor_name: String,
    pub topic: String,
    pub date: NaiveDate,
    pub attendance: AttendanceStateDto,
}

//=========================================================================================
// Videos, Feedback, and Quotes
//=========================================================================================

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct VideoDto {
    pub id: String,
    pub mentor_id: String,
    pub title: String,
    pub video_url: String,
    pub date: NaiveDate,
}

impl From<VideoSession> for VideoDto {
    fn from(video: VideoSession) -> Self {
        Self {
            id: video.id,
            mentor_id: video.mentor_id,
            title: video.title,
            video_url: video.video_url,
            date: video.date,
        }
    }
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackDto {
    pub mentor_id: String,
    pub student_id: String,
    pub rating: u8,
    pub comment: String,
    pub date: NaiveDate,
}

impl From<Feedback> for FeedbackDto {
    fn from(feedback: Feedback) -> Self {
        Self {
            mentor_id: feedback.mentor_id,
            student_id: feedback.student_id,
            rating: feedback.rating,
            comment: feedback.comment,
            date: feedback.date,
        }
    }
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct QuoteDto {
    pub id: String,
    pub author_id: String,
    pub text: String,
}

impl From<MotivationQuote> for QuoteDto {
    fn from(quote: MotivationQuote) -> Self {
        Self {
            id: quote.id,
            author_id: quote.author_id,
            text: quote.text,
        }
    }
}

//=========================================================================================
// Derived Read Models
//=========================================================================================

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RatingDto {
    pub mentor_id: String,
    pub average_rating: f64,
}

/// The four stat cards of a mentor's dashboard, computed in one call.
#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MentorOverviewDto {
    pub mentor_id: String,
    pub student_count: usize,
    pub session_count: usize,
    pub pending_request_count: usize,
    pub average_rating: f64,
}
