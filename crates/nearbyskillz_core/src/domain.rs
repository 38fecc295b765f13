//! crates/nearbyskillz_core/src/domain.rs
//!
//! Defines the pure, core data structures for the application.
//! These structs are independent of any storage backend or serialization format.

use chrono::{DateTime, NaiveDate, Utc};

/// The two fixed roles a user can hold. A user is one or the other for life.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Mentor,
    Student,
}

/// The fields shared by every user, regardless of role.
#[derive(Debug, Clone)]
pub struct UserProfile {
    pub id: String,
    pub name: String,
    pub email: String,
    pub location: String,
    pub bio: String,
    pub photo_url: String,
}

/// A mentor: a base profile plus the skills they offer to teach.
#[derive(Debug, Clone)]
pub struct Mentor {
    pub profile: UserProfile,
    pub skills: Vec<String>,
}

/// A student: a base profile plus the topics they want to learn.
#[derive(Debug, Clone)]
pub struct Student {
    pub profile: UserProfile,
    pub interests: Vec<String>,
}

/// A user of either role. The discriminant doubles as the role tag.
#[derive(Debug, Clone)]
pub enum AnyUser {
    Mentor(Mentor),
    Student(Student),
}

impl AnyUser {
    pub fn profile(&self) -> &UserProfile {
        match self {
            AnyUser::Mentor(m) => &m.profile,
            AnyUser::Student(s) => &s.profile,
        }
    }

    pub fn id(&self) -> &str {
        &self.profile().id
    }

    pub fn role(&self) -> Role {
        match self {
            AnyUser::Mentor(_) => Role::Mentor,
            AnyUser::Student(_) => Role::Student,
        }
    }
}

/// The lifecycle states of a mentorship request. The only legal transition
/// is `Pending` to one of `Accepted` or `Rejected`; nothing moves back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestStatus {
    Pending,
    Accepted,
    Rejected,
}

/// The decision a mentor can take on a request. There is no path back
/// to pending.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestDecision {
    Accepted,
    Rejected,
}

impl RequestDecision {
    pub fn as_status(self) -> RequestStatus {
        match self {
            RequestDecision::Accepted => RequestStatus::Accepted,
            RequestDecision::Rejected => RequestStatus::Rejected,
        }
    }
}

/// The edge of the student/mentor bipartite graph. The (student, mentor)
/// pair is the key; there is no independent identifier.
#[derive(Debug, Clone)]
pub struct MentorshipRequest {
    pub student_id: String,
    pub mentor_id: String,
    pub status: RequestStatus,
}

/// A teaching session a mentor has scheduled. Calendar date only, no time.
#[derive(Debug, Clone)]
pub struct Session {
    pub id: String,
    pub mentor_id: String,
    pub topic: String,
    pub date: NaiveDate,
}

/// An explicit attendance mark. A missing record for a (session, student)
/// pair is the third logical state, "unmarked".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttendanceStatus {
    Present,
    Absent,
}

/// One attendance record per (session, student) pair, upserted on mark.
#[derive(Debug, Clone)]
pub struct Attendance {
    pub session_id: String,
    pub student_id: String,
    pub status: AttendanceStatus,
}

/// A rating-and-comment entry a student left for a mentor. Append-only;
/// the same pair may accumulate several entries.
#[derive(Debug, Clone)]
pub struct Feedback {
    pub mentor_id: String,
    pub student_id: String,
    pub rating: u8,
    pub comment: String,
    pub date: NaiveDate,
}

/// A recorded video lesson posted by a mentor.
#[derive(Debug, Clone)]
pub struct VideoSession {
    pub id: String,
    pub mentor_id: String,
    pub title: String,
    pub video_url: String,
    pub date: NaiveDate,
}

/// A motivational quote shown on the dashboards. `author_id` is either the
/// literal string "system" or a mentor id.
#[derive(Debug, Clone)]
pub struct MotivationQuote {
    pub id: String,
    pub author_id: String,
    pub text: String,
}

/// Represents a browser login session (auth cookie).
#[derive(Debug, Clone)]
pub struct AuthSession {
    pub id: String,
    pub user_id: String,
    pub expires_at: DateTime<Utc>,
}
