pub mod domain;
pub mod ports;

pub use domain::{
    AnyUser, Attendance, AttendanceStatus, AuthSession, Feedback, Mentor, MentorshipRequest,
    MotivationQuote, RequestDecision, RequestStatus, Role, Session, Student, UserProfile,
    VideoSession,
};
pub use ports::{DirectoryService, PortError, PortResult};
