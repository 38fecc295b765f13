//! services/api/src/adapters/directory.rs
//!
//! This module contains the in-memory directory adapter, the concrete
//! implementation of the `DirectoryService` port from the `core` crate. It
//! owns every entity collection for the lifetime of the process; nothing is
//! persisted anywhere.

use std::collections::HashSet;

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use nearbyskillz_core::domain::{
    AnyUser, Attendance, AttendanceStatus, AuthSession, Feedback, Mentor, MentorshipRequest,
    MotivationQuote, RequestDecision, RequestStatus, Role, Session, Student, UserProfile,
    VideoSession,
};
use nearbyskillz_core::ports::{DirectoryService, PortError, PortResult};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::adapters::seed::{pravatar_url, SeedData};

//=========================================================================================
// The Main Adapter Struct
//=========================================================================================

/// The per-role login secrets the store checks credentials against.
#[derive(Clone, Debug)]
pub struct AccessCodes {
    pub mentor: String,
    pub student: String,
}

/// Every entity collection, guarded together by a single lock. Collections
/// only ever grow or update in place; nothing is deleted except auth sessions.
#[derive(Default)]
struct Collections {
    mentors: Vec<Mentor>,
    students: Vec<Student>,
    requests: Vec<MentorshipRequest>,
    sessions: Vec<Session>,
    videos: Vec<VideoSession>,
    attendance: Vec<Attendance>,
    feedback: Vec<Feedback>,
    quotes: Vec<MotivationQuote>,
    auth_sessions: Vec<AuthSession>,
}

impl Collections {
    /// Ids of the mentors that have accepted this student's request.
    fn accepted_mentor_ids(&self, student_id: &str) -> HashSet<&str> {
        self.requests
            .iter()
            .filter(|r| r.student_id == student_id && r.status == RequestStatus::Accepted)
            .map(|r| r.mentor_id.as_str())
            .collect()
    }

    /// Ids of the students this mentor has accepted.
    fn admitted_student_ids(&self, mentor_id: &str) -> HashSet<&str> {
        self.requests
            .iter()
            .filter(|r| r.mentor_id == mentor_id && r.status == RequestStatus::Accepted)
            .map(|r| r.student_id.as_str())
            .collect()
    }
}

/// An in-memory adapter that implements the `DirectoryService` port.
///
/// One writer or many readers at a time; writes are last-writer-wins with no
/// isolation across operations, which is all this demo application needs.
pub struct MemoryDirectory {
    inner: RwLock<Collections>,
    access_codes: AccessCodes,
}

impl MemoryDirectory {
    /// Creates a new `MemoryDirectory` pre-populated with `seed`.
    pub fn new(seed: SeedData, access_codes: AccessCodes) -> Self {
        Self {
            inner: RwLock::new(Collections {
                mentors: seed.mentors,
                students: seed.students,
                requests: seed.requests,
                sessions: seed.sessions,
                videos: seed.videos,
                attendance: seed.attendance,
                feedback: seed.feedback,
                quotes: seed.quotes,
                auth_sessions: Vec::new(),
            }),
            access_codes,
        }
    }
}

//=========================================================================================
// Helpers
//=========================================================================================

/// Generates a fresh, opaque entity id such as `session-1c56…`.
fn entity_id(prefix: &str) -> String {
    format!("{}-{}", prefix, Uuid::new_v4())
}

/// Derives a display name from the local part of an email address:
/// non-alphanumeric characters become spaces and each word is capitalized,
/// so `ankit.rao@example.com` provisions as "Ankit Rao".
fn display_name_from_email(email: &str) -> String {
    let local = email.split('@').next().unwrap_or(email);
    let mut name = String::with_capacity(local.len());
    let mut word_start = true;
    for c in local.chars() {
        if c.is_ascii_alphanumeric() {
            name.push(if word_start { c.to_ascii_uppercase() } else { c });
            word_start = false;
        } else {
            name.push(' ');
            word_start = true;
        }
    }
    name
}

fn today() -> NaiveDate {
    Utc::now().date_naive()
}

//=========================================================================================
// `DirectoryService` Trait Implementation
//=========================================================================================

#[async_trait]
impl DirectoryService for MemoryDirectory {
    async fn authenticate(&self, email: &str, password: &str, role: Role) -> PortResult<AnyUser> {
        let expected = match role {
            Role::Mentor => self.access_codes.mentor.as_str(),
            Role::Student => self.access_codes.student.as_str(),
        };
        if password != expected {
            return Err(PortError::InvalidCredentials);
        }

        let mut inner = self.inner.write().await;
        match role {
            Role::Mentor => {
                if let Some(found) = inner.mentors.iter().find(|m| m.profile.email == email) {
                    return Ok(AnyUser::Mentor(found.clone()));
                }
                // Unseen email: provision a fresh demo profile.
                let mentor = Mentor {
                    profile: UserProfile {
                        id: entity_id("mentor"),
                        name: display_name_from_email(email),
                        email: email.to_string(),
                        location: "Online".to_string(),
                        bio: "A new mentor ready to inspire!".to_string(),
                        photo_url: pravatar_url(email),
                    },
                    skills: vec!["Newly Added Skill".to_string()],
                };
                inner.mentors.push(mentor.clone());
                Ok(AnyUser::Mentor(mentor))
            }
            Role::Student => {
                if let Some(found) = inner.students.iter().find(|s| s.profile.email == email) {
                    return Ok(AnyUser::Student(found.clone()));
                }
                let student = Student {
                    profile: UserProfile {
                        id: entity_id("student"),
                        name: display_name_from_email(email),
                        email: email.to_string(),
                        location: "Online".to_string(),
                        bio: "A new student on a learning journey!".to_string(),
                        photo_url: pravatar_url(email),
                    },
                    interests: vec!["Eager to Learn".to_string()],
                };
                inner.students.push(student.clone());
                Ok(AnyUser::Student(student))
            }
        }
    }

    async fn create_auth_session(
        &self,
        session_id: &str,
        user_id: &str,
        expires_at: DateTime<Utc>,
    ) -> PortResult<()> {
        let mut inner = self.inner.write().await;
        inner.auth_sessions.push(AuthSession {
            id: session_id.to_string(),
            user_id: user_id.to_string(),
            expires_at,
        });
        Ok(())
    }

    async fn validate_auth_session(&self, session_id: &str) -> PortResult<String> {
        let inner = self.inner.read().await;
        let session = inner
            .auth_sessions
            .iter()
            .find(|s| s.id == session_id)
            .ok_or_else(|| PortError::NotFound(format!("Auth session {} not found", session_id)))?;
        if session.expires_at <= Utc::now() {
            return Err(PortError::Unauthorized);
        }
        Ok(session.user_id.clone())
    }

    async fn delete_auth_session(&self, session_id: &str) -> PortResult<()> {
        let mut inner = self.inner.write().await;
        inner.auth_sessions.retain(|s| s.id != session_id);
        Ok(())
    }

    async fn list_mentors(&self) -> PortResult<Vec<Mentor>> {
        let inner = self.inner.read().await;
        Ok(inner.mentors.clone())
    }

    async fn list_students(&self) -> PortResult<Vec<Student>> {
        let inner = self.inner.read().await;
        Ok(inner.students.clone())
    }

    async fn find_user(&self, user_id: &str) -> PortResult<Option<AnyUser>> {
        let inner = self.inner.read().await;
        if let Some(mentor) = inner.mentors.iter().find(|m| m.profile.id == user_id) {
            return Ok(Some(AnyUser::Mentor(mentor.clone())));
        }
        Ok(inner
            .students
            .iter()
            .find(|s| s.profile.id == user_id)
            .map(|s| AnyUser::Student(s.clone())))
    }

    async fn requests_for_mentor(&self, mentor_id: &str) -> PortResult<Vec<MentorshipRequest>> {
        let inner = self.inner.read().await;
        Ok(inner
            .requests
            .iter()
            .filter(|r| r.mentor_id == mentor_id)
            .cloned()
            .collect())
    }

    async fn requests_for_student(&self, student_id: &str) -> PortResult<Vec<MentorshipRequest>> {
        let inner = self.inner.read().await;
        Ok(inner
            .requests
            .iter()
            .filter(|r| r.student_id == student_id)
            .cloned()
            .collect())
    }

    async fn create_request(
        &self,
        student_id: &str,
        mentor_id: &str,
    ) -> PortResult<MentorshipRequest> {
        let mut inner = self.inner.write().await;
        // Repeated sends are absorbed: whatever state the pair is in wins.
        if let Some(existing) = inner
            .requests
            .iter()
            .find(|r| r.student_id == student_id && r.mentor_id == mentor_id)
        {
            return Ok(existing.clone());
        }
        let request = MentorshipRequest {
            student_id: student_id.to_string(),
            mentor_id: mentor_id.to_string(),
            status: RequestStatus::Pending,
        };
        inner.requests.push(request.clone());
        Ok(request)
    }

    async fn set_request_status(
        &self,
        student_id: &str,
        mentor_id: &str,
        decision: RequestDecision,
    ) -> PortResult<Option<MentorshipRequest>> {
        let mut inner = self.inner.write().await;
        if let Some(request) = inner
            .requests
            .iter_mut()
            .find(|r| r.student_id == student_id && r.mentor_id == mentor_id)
        {
            request.status = decision.as_status();
            return Ok(Some(request.clone()));
        }
        match decision {
            // An accept with no matching request fabricates one, already
            // accepted. A reject with no match changes nothing.
            RequestDecision::Accepted => {
                let request = MentorshipRequest {
                    student_id: student_id.to_string(),
                    mentor_id: mentor_id.to_string(),
                    status: RequestStatus::Accepted,
                };
                inner.requests.push(request.clone());
                Ok(Some(request))
            }
            RequestDecision::Rejected => Ok(None),
        }
    }

    async fn admitted_students(&self, mentor_id: &str) -> PortResult<Vec<Student>> {
        let inner = self.inner.read().await;
        let admitted = inner.admitted_student_ids(mentor_id);
        Ok(inner
            .students
            .iter()
            .filter(|s| admitted.contains(s.profile.id.as_str()))
            .cloned()
            .collect())
    }

    async fn mentors_for_student(&self, student_id: &str) -> PortResult<Vec<Mentor>> {
        let inner = self.inner.read().await;
        let accepted = inner.accepted_mentor_ids(student_id);
        Ok(inner
            .mentors
            .iter()
            .filter(|m| accepted.contains(m.profile.id.as_str()))
            .cloned()
            .collect())
    }

    async fn sessions_for_mentor(&self, mentor_id: &str) -> PortResult<Vec<Session>> {
        let inner = self.inner.read().await;
        Ok(inner
            .sessions
            .iter()
            .filter(|s| s.mentor_id == mentor_id)
            .cloned()
            .collect())
    }

    async fn sessions_for_student(&self, student_id: &str) -> PortResult<Vec<Session>> {
        let inner = self.inner.read().await;
        let accepted = inner.accepted_mentor_ids(student_id);
        let mut sessions: Vec<Session> = inner
            .sessions
            .iter()
            .filter(|s| accepted.contains(s.mentor_id.as_str()))
            .cloned()
            .collect();
        sessions.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(sessions)
    }

    async fn create_session(
        &self,
        mentor_id: &str,
        topic: &str,
        date: NaiveDate,
    ) -> PortResult<Session> {
        let mut inner = self.inner.write().await;
        let session = Session {
            id: entity_id("session"),
            mentor_id: mentor_id.to_string(),
            topic: topic.to_string(),
            date,
        };
        inner.sessions.push(session.clone());
        Ok(session)
    }

    async fn videos_for_mentor(&self, mentor_id: &str) -> PortResult<Vec<VideoSession>> {
        let inner = self.inner.read().await;
        let mut videos: Vec<VideoSession> = inner
            .videos
            .iter()
            .filter(|v| v.mentor_id == mentor_id)
            .cloned()
            .collect();
        // Stable sort: equal dates keep their insertion order.
        videos.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(videos)
    }

    async fn videos_for_student(&self, student_id: &str) -> PortResult<Vec<VideoSession>> {
        let inner = self.inner.read().await;
        let accepted = inner.accepted_mentor_ids(student_id);
        let mut videos: Vec<VideoSession> = inner
            .videos
            .iter()
            .filter(|v| accepted.contains(v.mentor_id.as_str()))
            .cloned()
            .collect();
        videos.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(videos)
    }

    async fn create_video(
        &self,
        mentor_id: &str,
        title: &str,
        video_url: &str,
    ) -> PortResult<VideoSession> {
        let mut inner = self.inner.write().await;
        let video = VideoSession {
            id: entity_id("video"),
            mentor_id: mentor_id.to_string(),
            title: title.to_string(),
            video_url: video_url.to_string(),
            date: today(),
        };
        inner.videos.push(video.clone());
        Ok(video)
    }

    async fn attendance_for_session(&self, session_id: &str) -> PortResult<Vec<Attendance>> {
        let inner = self.inner.read().await;
        Ok(inner
            .attendance
            .iter()
            .filter(|a| a.session_id == session_id)
            .cloned()
            .collect())
    }

    async fn mark_attendance(
        &self,
        session_id: &str,
        student_id: &str,
        status: AttendanceStatus,
    ) -> PortResult<Attendance> {
        let mut inner = self.inner.write().await;
        if let Some(record) = inner
            .attendance
            .iter_mut()
            .find(|a| a.session_id == session_id && a.student_id == student_id)
        {
            record.status = status;
            return Ok(record.clone());
        }
        let record = Attendance {
            session_id: session_id.to_string(),
            student_id: student_id.to_string(),
            status,
        };
        inner.attendance.push(record.clone());
        Ok(record)
    }

    async fn feedback_for_mentor(&self, mentor_id: &str) -> PortResult<Vec<Feedback>> {
        let inner = self.inner.read().await;
        Ok(inner
            .feedback
            .iter()
            .filter(|f| f.mentor_id == mentor_id)
            .cloned()
            .collect())
    }

    async fn create_feedback(
        &self,
        student_id: &str,
        mentor_id: &str,
        rating: u8,
        comment: &str,
    ) -> PortResult<Feedback> {
        let mut inner = self.inner.write().await;
        let feedback = Feedback {
            mentor_id: mentor_id.to_string(),
            student_id: student_id.to_string(),
            rating,
            comment: comment.to_string(),
            date: today(),
        };
        inner.feedback.push(feedback.clone());
        Ok(feedback)
    }

    async fn average_rating(&self, mentor_id: &str) -> PortResult<f64> {
        let inner = self.inner.read().await;
        let ratings: Vec<f64> = inner
            .feedback
            .iter()
            .filter(|f| f.mentor_id == mentor_id)
            .map(|f| f64::from(f.rating))
            .collect();
        if ratings.is_empty() {
            return Ok(0.0);
        }
        let mean = ratings.iter().sum::<f64>() / ratings.len() as f64;
        Ok((mean * 10.0).round() / 10.0)
    }

    async fn motivation_quotes(&self) -> PortResult<Vec<MotivationQuote>> {
        let inner = self.inner.read().await;
        Ok(inner.quotes.clone())
    }

    async fn create_quote(&self, author_id: &str, text: &str) -> PortResult<MotivationQuote> {
        let mut inner = self.inner.write().await;
        let quote = MotivationQuote {
            id: entity_id("quote"),
            author_id: author_id.to_string(),
            text: text.to_string(),
        };
        inner.quotes.push(quote.clone());
        Ok(quote)
    }
}

//=========================================================================================
// Tests
//=========================================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn codes() -> AccessCodes {
        AccessCodes {
            mentor: "university".to_string(),
            student: "vignan".to_string(),
        }
    }

    fn empty_store() -> MemoryDirectory {
        MemoryDirectory::new(SeedData::default(), codes())
    }

    fn demo_store() -> MemoryDirectory {
        MemoryDirectory::new(SeedData::demo(), codes())
    }

    fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn test_profile(id: &str) -> UserProfile {
        UserProfile {
            id: id.to_string(),
            name: id.to_string(),
            email: format!("{id}@example.com"),
            location: "Test City".to_string(),
            bio: String::new(),
            photo_url: String::new(),
        }
    }

    fn test_mentor(id: &str) -> Mentor {
        Mentor {
            profile: test_profile(id),
            skills: vec!["Testing".to_string()],
        }
    }

    fn test_student(id: &str) -> Student {
        Student {
            profile: test_profile(id),
            interests: vec!["Learning".to_string()],
        }
    }

    fn video(id: &str, mentor_id: &str, date: NaiveDate) -> VideoSession {
        VideoSession {
            id: id.to_string(),
            mentor_id: mentor_id.to_string(),
            title: format!("Video {id}"),
            video_url: format!("https://example.com/{id}.mp4"),
            date,
        }
    }

    #[tokio::test]
    async fn sending_a_request_twice_keeps_a_single_pending_record() {
        let store = empty_store();
        store.create_request("s1", "m1").await.unwrap();
        store.create_request("s1", "m1").await.unwrap();

        let requests = store.requests_for_student("s1").await.unwrap();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].status, RequestStatus::Pending);
    }

    #[tokio::test]
    async fn accepting_a_request_admits_the_student_and_rejecting_removes_them() {
        let store = MemoryDirectory::new(
            SeedData {
                students: vec![test_student("s1")],
                ..SeedData::default()
            },
            codes(),
        );
        store.create_request("s1", "m1").await.unwrap();

        store
            .set_request_status("s1", "m1", RequestDecision::Accepted)
            .await
            .unwrap();
        let admitted = store.admitted_students("m1").await.unwrap();
        assert_eq!(admitted.len(), 1);
        assert_eq!(admitted[0].profile.id, "s1");

        store
            .set_request_status("s1", "m1", RequestDecision::Rejected)
            .await
            .unwrap();
        assert!(store.admitted_students("m1").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn deciding_an_existing_request_overwrites_in_place() {
        let store = empty_store();
        store.create_request("s1", "m1").await.unwrap();
        let updated = store
            .set_request_status("s1", "m1", RequestDecision::Accepted)
            .await
            .unwrap()
            .unwrap();

        assert_eq!(updated.status, RequestStatus::Accepted);
        let requests = store.requests_for_mentor("m1").await.unwrap();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].status, RequestStatus::Accepted);
    }

    #[tokio::test]
    async fn accepting_an_unknown_pair_fabricates_an_accepted_request() {
        let store = empty_store();
        let created = store
            .set_request_status("s1", "m1", RequestDecision::Accepted)
            .await
            .unwrap();

        assert_eq!(created.unwrap().status, RequestStatus::Accepted);
        assert_eq!(store.requests_for_mentor("m1").await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn rejecting_an_unknown_pair_is_a_noop() {
        let store = empty_store();
        let result = store
            .set_request_status("s1", "m1", RequestDecision::Rejected)
            .await
            .unwrap();

        assert!(result.is_none());
        assert!(store.requests_for_mentor("m1").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn admitted_students_follow_student_collection_order() {
        let store = MemoryDirectory::new(
            SeedData {
                students: vec![test_student("s1"), test_student("s2"), test_student("s3")],
                ..SeedData::default()
            },
            codes(),
        );
        // Accept in the opposite order to the student collection.
        store
            .set_request_status("s3", "m1", RequestDecision::Accepted)
            .await
            .unwrap();
        store
            .set_request_status("s1", "m1", RequestDecision::Accepted)
            .await
            .unwrap();

        let admitted = store.admitted_students("m1").await.unwrap();
        let ids: Vec<&str> = admitted.iter().map(|s| s.profile.id.as_str()).collect();
        assert_eq!(ids, vec!["s1", "s3"]);
    }

    #[tokio::test]
    async fn students_list_the_mentors_that_accepted_them() {
        let store = MemoryDirectory::new(
            SeedData {
                mentors: vec![test_mentor("m1"), test_mentor("m2")],
                ..SeedData::default()
            },
            codes(),
        );
        store.create_request("s1", "m1").await.unwrap();
        store
            .set_request_status("s1", "m1", RequestDecision::Accepted)
            .await
            .unwrap();
        // A pending request with m2 grants nothing yet.
        store.create_request("s1", "m2").await.unwrap();

        let mentors = store.mentors_for_student("s1").await.unwrap();
        assert_eq!(mentors.len(), 1);
        assert_eq!(mentors[0].profile.id, "m1");
    }

    #[tokio::test]
    async fn marking_attendance_is_an_upsert_per_student() {
        let store = empty_store();
        store
            .mark_attendance("sess1", "s1", AttendanceStatus::Present)
            .await
            .unwrap();
        store
            .mark_attendance("sess1", "s1", AttendanceStatus::Absent)
            .await
            .unwrap();
        store
            .mark_attendance("sess1", "s2", AttendanceStatus::Present)
            .await
            .unwrap();

        let records = store.attendance_for_session("sess1").await.unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].student_id, "s1");
        assert_eq!(records[0].status, AttendanceStatus::Absent);
        assert_eq!(records[1].student_id, "s2");
        assert_eq!(records[1].status, AttendanceStatus::Present);
    }

    #[tokio::test]
    async fn average_rating_is_the_mean_rounded_to_one_decimal() {
        let store = empty_store();
        for rating in [5, 4, 3] {
            store.create_feedback("s1", "m1", rating, "").await.unwrap();
        }
        assert_eq!(store.average_rating("m1").await.unwrap(), 4.0);

        for rating in [4, 4, 5] {
            store.create_feedback("s1", "m2", rating, "").await.unwrap();
        }
        // 13 / 3 = 4.333… rounds to 4.3.
        assert_eq!(store.average_rating("m2").await.unwrap(), 4.3);
    }

    #[tokio::test]
    async fn average_rating_without_feedback_is_zero() {
        let store = empty_store();
        assert_eq!(store.average_rating("nobody").await.unwrap(), 0.0);
    }

    #[tokio::test]
    async fn feedback_is_append_only_and_allows_repeat_entries() {
        let store = empty_store();
        store.create_feedback("s1", "m1", 5, "great").await.unwrap();
        store.create_feedback("s1", "m1", 2, "less great").await.unwrap();

        assert_eq!(store.feedback_for_mentor("m1").await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn students_see_only_admitted_mentors_videos_newest_first() {
        let store = MemoryDirectory::new(
            SeedData {
                videos: vec![
                    video("v-old", "m1", ymd(2024, 8, 10)),
                    video("v-other", "m2", ymd(2024, 8, 25)),
                    video("v-new", "m1", ymd(2024, 8, 20)),
                ],
                ..SeedData::default()
            },
            codes(),
        );
        store
            .set_request_status("s1", "m1", RequestDecision::Accepted)
            .await
            .unwrap();

        let videos = store.videos_for_student("s1").await.unwrap();
        let ids: Vec<&str> = videos.iter().map(|v| v.id.as_str()).collect();
        assert_eq!(ids, vec!["v-new", "v-old"]);
    }

    #[tokio::test]
    async fn videos_with_equal_dates_keep_insertion_order() {
        let store = MemoryDirectory::new(
            SeedData {
                videos: vec![
                    video("v1", "m1", ymd(2024, 8, 20)),
                    video("v2", "m1", ymd(2024, 8, 20)),
                ],
                ..SeedData::default()
            },
            codes(),
        );

        let videos = store.videos_for_mentor("m1").await.unwrap();
        let ids: Vec<&str> = videos.iter().map(|v| v.id.as_str()).collect();
        assert_eq!(ids, vec!["v1", "v2"]);
    }

    #[tokio::test]
    async fn students_see_sessions_of_their_mentors_newest_first() {
        let store = empty_store();
        store
            .set_request_status("s1", "m1", RequestDecision::Accepted)
            .await
            .unwrap();
        store
            .set_request_status("s1", "m2", RequestDecision::Accepted)
            .await
            .unwrap();
        store
            .create_session("m1", "Rust basics", ymd(2024, 8, 1))
            .await
            .unwrap();
        store
            .create_session("m2", "SQL joins", ymd(2024, 8, 12))
            .await
            .unwrap();
        store
            .create_session("m3", "Not visible", ymd(2024, 8, 30))
            .await
            .unwrap();

        let sessions = store.sessions_for_student("s1").await.unwrap();
        let topics: Vec<&str> = sessions.iter().map(|s| s.topic.as_str()).collect();
        assert_eq!(topics, vec!["SQL joins", "Rust basics"]);
    }

    #[tokio::test]
    async fn login_provisions_a_profile_for_an_unseen_email() {
        let store = empty_store();
        let user = store
            .authenticate("jane.m-doe@example.com", "university", Role::Mentor)
            .await
            .unwrap();

        assert_eq!(user.profile().name, "Jane M Doe");
        assert_eq!(user.role(), Role::Mentor);
        assert_eq!(store.list_mentors().await.unwrap().len(), 1);

        // A second login with the same email returns the same profile.
        let again = store
            .authenticate("jane.m-doe@example.com", "university", Role::Mentor)
            .await
            .unwrap();
        assert_eq!(again.id(), user.id());
        assert_eq!(store.list_mentors().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn login_with_a_wrong_password_fails_without_mutating() {
        let store = empty_store();
        let result = store
            .authenticate("jane@example.com", "wrong", Role::Student)
            .await;

        assert!(matches!(result, Err(PortError::InvalidCredentials)));
        assert!(store.list_students().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn the_same_email_may_hold_a_profile_in_each_role() {
        let store = empty_store();
        let mentor = store
            .authenticate("alex@example.com", "university", Role::Mentor)
            .await
            .unwrap();
        let student = store
            .authenticate("alex@example.com", "vignan", Role::Student)
            .await
            .unwrap();

        assert_ne!(mentor.id(), student.id());
        assert!(matches!(
            store.find_user(mentor.id()).await.unwrap(),
            Some(AnyUser::Mentor(_))
        ));
        assert!(matches!(
            store.find_user(student.id()).await.unwrap(),
            Some(AnyUser::Student(_))
        ));
    }

    #[tokio::test]
    async fn find_user_searches_both_collections() {
        let store = demo_store();
        let mentor = store.find_user("mentor-2").await.unwrap().unwrap();
        let student = store.find_user("student-1").await.unwrap().unwrap();

        assert_eq!(mentor.profile().name, "Sunita Sharma");
        assert_eq!(student.profile().name, "Priya Mehta");
        assert!(store.find_user("nobody").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn auth_sessions_validate_until_expired_or_deleted() {
        let store = empty_store();
        let future = Utc::now() + Duration::days(30);
        store
            .create_auth_session("cookie-1", "mentor-1", future)
            .await
            .unwrap();

        assert_eq!(
            store.validate_auth_session("cookie-1").await.unwrap(),
            "mentor-1"
        );
        assert!(matches!(
            store.validate_auth_session("cookie-2").await,
            Err(PortError::NotFound(_))
        ));

        let past = Utc::now() - Duration::hours(1);
        store
            .create_auth_session("cookie-3", "mentor-1", past)
            .await
            .unwrap();
        assert!(matches!(
            store.validate_auth_session("cookie-3").await,
            Err(PortError::Unauthorized)
        ));

        store.delete_auth_session("cookie-1").await.unwrap();
        assert!(store.validate_auth_session("cookie-1").await.is_err());
    }

    #[tokio::test]
    async fn the_demo_seed_boots_a_consistent_directory() {
        let store = demo_store();

        assert_eq!(store.list_mentors().await.unwrap().len(), 2);
        assert_eq!(store.list_students().await.unwrap().len(), 2);
        assert_eq!(store.motivation_quotes().await.unwrap().len(), 4);

        // Rohan is already admitted by Ankit, so the seeded video is visible.
        let admitted = store.admitted_students("mentor-1").await.unwrap();
        assert_eq!(admitted.len(), 1);
        assert_eq!(admitted[0].profile.id, "student-2");

        let videos = store.videos_for_student("student-2").await.unwrap();
        assert_eq!(videos.len(), 1);
        assert_eq!(videos[0].id, "video-1");

        assert_eq!(store.average_rating("mentor-1").await.unwrap(), 5.0);
        assert_eq!(store.average_rating("mentor-2").await.unwrap(), 0.0);
    }

    #[tokio::test]
    async fn created_sessions_and_quotes_get_fresh_prefixed_ids() {
        let store = empty_store();
        let session = store
            .create_session("m1", "Ownership in Rust", ymd(2024, 9, 1))
            .await
            .unwrap();
        let quote = store.create_quote("m1", "Keep going.").await.unwrap();

        assert!(session.id.starts_with("session-"));
        assert!(quote.id.starts_with("quote-"));
        assert_eq!(store.sessions_for_mentor("m1").await.unwrap().len(), 1);
        assert_eq!(store.motivation_quotes().await.unwrap().len(), 1);
    }
}
