//! services/api/src/adapters/seed.rs
//!
//! Initial data for the in-memory directory store. The store is built from an
//! explicit `SeedData` value rather than module-level statics, so every
//! process (and every test) starts from data it chose itself.

use chrono::NaiveDate;
use nearbyskillz_core::domain::{
    Attendance, AttendanceStatus, Feedback, Mentor, MentorshipRequest, MotivationQuote,
    RequestStatus, Session, Student, UserProfile, VideoSession,
};

/// Everything a fresh `MemoryDirectory` starts out holding.
/// The default value is completely empty.
#[derive(Debug, Clone, Default)]
pub struct SeedData {
    pub mentors: Vec<Mentor>,
    pub students: Vec<Student>,
    pub requests: Vec<MentorshipRequest>,
    pub sessions: Vec<Session>,
    pub videos: Vec<VideoSession>,
    pub attendance: Vec<Attendance>,
    pub feedback: Vec<Feedback>,
    pub quotes: Vec<MotivationQuote>,
}

impl SeedData {
    /// The built-in demo database: two mentors, two students, one
    /// established mentorship and a little activity on it.
    pub fn demo() -> Self {
        Self {
            mentors: vec![
                mentor(
                    "mentor-1",
                    "Ankit Rao",
                    "ankit.rao@example.com",
                    "Bengaluru, India",
                    &["Web Design", "Python", "React"],
                    "Helping students build digital skills through practical learning.",
                ),
                mentor(
                    "mentor-2",
                    "Sunita Sharma",
                    "sunita.sharma@example.com",
                    "Mumbai, India",
                    &["Data Science", "Machine Learning"],
                    "Passionate about data and mentoring the next generation of analysts.",
                ),
            ],
            students: vec![
                student(
                    "student-1",
                    "Priya Mehta",
                    "priya.mehta@example.com",
                    "Bengaluru, India",
                    &["UI Design", "Frontend Development"],
                    "Eager to learn from experienced professionals and build a strong portfolio.",
                ),
                student(
                    "student-2",
                    "Rohan Verma",
                    "rohan.verma@example.com",
                    "Mumbai, India",
                    &["Data Science", "Python"],
                    "Aspiring data scientist looking for guidance on real-world projects.",
                ),
            ],
            requests: vec![
                request("student-1", "mentor-2", RequestStatus::Pending),
                request("student-2", "mentor-1", RequestStatus::Accepted),
            ],
            sessions: vec![
                Session {
                    id: "session-1".to_string(),
                    mentor_id: "mentor-1".to_string(),
                    topic: "Intro to React Hooks".to_string(),
                    date: ymd(2024, 8, 15),
                },
                Session {
                    id: "session-2".to_string(),
                    mentor_id: "mentor-2".to_string(),
                    topic: "Data Cleaning with Pandas".to_string(),
                    date: ymd(2024, 8, 18),
                },
            ],
            videos: vec![VideoSession {
                id: "video-1".to_string(),
                mentor_id: "mentor-1".to_string(),
                title: "React State Management Masterclass".to_string(),
                video_url:
                    "http://commondatastorage.googleapis.com/gtv-videos-bucket/sample/BigBuckBunny.mp4"
                        .to_string(),
                date: ymd(2024, 8, 20),
            }],
            attendance: vec![Attendance {
                session_id: "session-1".to_string(),
                student_id: "student-2".to_string(),
                status: AttendanceStatus::Present,
            }],
            feedback: vec![Feedback {
                mentor_id: "mentor-1".to_string(),
                student_id: "student-2".to_string(),
                rating: 5,
                comment: "Ankit is a fantastic mentor! His explanations are clear and he is very patient."
                    .to_string(),
                date: ymd(2024, 7, 20),
            }],
            quotes: vec![
                quote(
                    "quote-1",
                    "system",
                    "A mentor is someone who allows you to see the hope inside yourself.",
                ),
                quote(
                    "quote-2",
                    "system",
                    "Every skill you acquire doubles your odds of success.",
                ),
                quote(
                    "quote-3",
                    "system",
                    "The beautiful thing about learning is that no one can take it away from you.",
                ),
                quote(
                    "quote-4",
                    "mentor-1",
                    "Keep coding, keep building. Every line you write makes you a better developer.",
                ),
            ],
        }
    }
}

/// Builds the placeholder avatar URL every profile photo points at.
pub(crate) fn pravatar_url(key: &str) -> String {
    format!("https://i.pravatar.cc/150?u={key}")
}

fn profile(id: &str, name: &str, email: &str, location: &str, bio: &str) -> UserProfile {
    UserProfile {
        id: id.to_string(),
        name: name.to_string(),
        email: email.to_string(),
        location: location.to_string(),
        bio: bio.to_string(),
        photo_url: pravatar_url(id),
    }
}

fn mentor(id: &str, name: &str, email: &str, location: &str, skills: &[&str], bio: &str) -> Mentor {
    Mentor {
        profile: profile(id, name, email, location, bio),
        skills: skills.iter().map(|s| s.to_string()).collect(),
    }
}

fn student(
    id: &str,
    name: &str,
    email: &str,
    location: &str,
    interests: &[&str],
    bio: &str,
) -> Student {
    Student {
        profile: profile(id, name, email, location, bio),
        interests: interests.iter().map(|s| s.to_string()).collect(),
    }
}

fn request(student_id: &str, mentor_id: &str, status: RequestStatus) -> MentorshipRequest {
    MentorshipRequest {
        student_id: student_id.to_string(),
        mentor_id: mentor_id.to_string(),
        status,
    }
}

fn quote(id: &str, author_id: &str, text: &str) -> MotivationQuote {
    MotivationQuote {
        id: id.to_string(),
        author_id: author_id.to_string(),
        text: text.to_string(),
    }
}

fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid seed date")
}
