//! Role dashboards built from a session marker.
//!
//! DESIGN
//! ======
//! Dashboard figures are fixed demo data. The only inputs are the username
//! (greeting, learner chatbot profile) and the teacher's subject.

use serde::Serialize;

use super::chatbot::LearnerProfile;
use super::session::{SessionMarker, UserType};

#[derive(Debug, Clone, Serialize)]
pub struct StatCard {
    pub label: &'static str,
    pub value: String,
    pub note: Option<&'static str>,
}

fn stat(label: &'static str, value: impl ToString, note: Option<&'static str>) -> StatCard {
    StatCard { label, value: value.to_string(), note }
}

// =============================================================================
// LEARNER
// =============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct SubjectPath {
    pub name: &'static str,
    pub progress: u8,
    pub current_topic: &'static str,
    pub next_topic: &'static str,
    pub current_marks: u8,
    pub suggested_marks: u8,
}

const SUBJECT_PATHS: &[SubjectPath] = &[
    SubjectPath {
        name: "Mathematics",
        progress: 65,
        current_topic: "Algebra & Quadratic Equations",
        next_topic: "Calculus Fundamentals",
        current_marks: 62,
        suggested_marks: 78,
    },
    SubjectPath {
        name: "English Literature",
        progress: 72,
        current_topic: "Shakespeare Analysis",
        next_topic: "Modern Poetry",
        current_marks: 75,
        suggested_marks: 85,
    },
    SubjectPath {
        name: "Biology",
        progress: 58,
        current_topic: "Cell Structure & Function",
        next_topic: "Photosynthesis & Respiration",
        current_marks: 60,
        suggested_marks: 80,
    },
    SubjectPath {
        name: "History",
        progress: 81,
        current_topic: "Industrial Revolution",
        next_topic: "World War II Era",
        current_marks: 85,
        suggested_marks: 88,
    },
];

const WEAK_SUBJECTS: &[&str] = &["Mathematics", "Biology"];
const CURRENT_AVERAGE: i32 = 72;
const TARGET_AVERAGE: i32 = 82;
const OVERALL_PROGRESS: i32 = 68;

const RECOMMENDATIONS: &[&str] = &[
    "Focus on Mathematics fundamentals - this will unlock better performance across sciences",
    "Allocate 45 minutes daily to Mathematics and 30 minutes to Biology for optimal improvement",
    "Your History performance is excellent - maintain this momentum while boosting weaker areas",
];

#[derive(Debug, Clone, Serialize)]
pub struct LearnerDashboard {
    pub stats: Vec<StatCard>,
    pub learning_paths: &'static [SubjectPath],
    pub recommendations: &'static [&'static str],
    pub profile: LearnerProfile,
}

/// Chatbot profile for `learner_name`, derived from the dashboard figures.
#[must_use]
pub fn learner_profile(learner_name: &str) -> LearnerProfile {
    LearnerProfile {
        learner_name: learner_name.to_owned(),
        subjects: SUBJECT_PATHS.iter().map(|p| p.name.to_owned()).collect(),
        weak_subjects: WEAK_SUBJECTS.iter().map(|s| (*s).to_owned()).collect(),
        current_marks: CURRENT_AVERAGE,
        target_marks: TARGET_AVERAGE,
    }
}

#[must_use]
pub fn learner_dashboard(username: &str) -> LearnerDashboard {
    LearnerDashboard {
        stats: vec![
            stat("Current Average", format!("{CURRENT_AVERAGE}%"), Some("+5% from last month")),
            stat("Target Average", format!("{TARGET_AVERAGE}%"), Some("Based on your report")),
            stat("Overall Progress", format!("{OVERALL_PROGRESS}%"), Some("Through learning path")),
        ],
        learning_paths: SUBJECT_PATHS,
        recommendations: RECOMMENDATIONS,
        profile: learner_profile(username),
    }
}

// =============================================================================
// TEACHER
// =============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct UploadedVideo {
    pub id: u32,
    pub title: &'static str,
    pub date: &'static str,
    pub rating: f32,
    pub views: u32,
}

const UPLOADED_VIDEOS: &[UploadedVideo] = &[
    UploadedVideo {
        id: 1,
        title: "Introduction to Quadratic Equations",
        date: "Dec 10, 2024",
        rating: 4.5,
        views: 156,
    },
    UploadedVideo { id: 2, title: "Solving Linear Systems", date: "Dec 5, 2024", rating: 4.8, views: 203 },
];

#[derive(Debug, Clone, Serialize)]
pub struct TeacherDashboard {
    pub subject: String,
    pub stats: Vec<StatCard>,
    pub uploaded_videos: &'static [UploadedVideo],
}

#[must_use]
pub fn teacher_dashboard(subject: &str) -> TeacherDashboard {
    TeacherDashboard {
        subject: subject.to_owned(),
        stats: vec![
            stat("Active Students", 28, None),
            stat("Lesson Plans Created", 12, None),
            stat("Pending Assignments", 5, None),
        ],
        uploaded_videos: UPLOADED_VIDEOS,
    }
}

// =============================================================================
// VIEW
// =============================================================================

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "user_type", rename_all = "lowercase")]
pub enum DashboardBody {
    Learner(LearnerDashboard),
    Teacher(TeacherDashboard),
}

#[derive(Debug, Clone, Serialize)]
pub struct DashboardView {
    pub username: String,
    pub greeting: String,
    pub tagline: String,
    #[serde(flatten)]
    pub body: DashboardBody,
}

/// Build the dashboard for whoever `marker` identifies.
#[must_use]
pub fn build(marker: &SessionMarker) -> DashboardView {
    let subject = marker.subject.as_deref().unwrap_or_default();
    let (tagline, body) = match marker.user_type {
        UserType::Learner => (
            "Continue your personalized learning journey".to_owned(),
            DashboardBody::Learner(learner_dashboard(&marker.username)),
        ),
        UserType::Teacher => (format!("Teaching {subject}"), DashboardBody::Teacher(teacher_dashboard(subject))),
    };

    DashboardView {
        username: marker.username.clone(),
        greeting: format!("Welcome back, {}!", marker.username),
        tagline,
        body,
    }
}

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod tests;
