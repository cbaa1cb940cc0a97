//! Request and response models for the Smart Learning System API
//!
//! The backend omits fields freely, so everything optional is `Option` or
//! defaulted; the views substitute placeholder content at render time.

use serde::{Deserialize, Serialize};

/// The authenticated student record
///
/// Also what gets persisted locally so other screens can re-read identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    /// University student id
    pub student_id: String,
    /// Full display name
    pub name: String,
    /// Major, when the server provides it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub major: Option<String>,
}

/// Body for `POST /api/login`
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    /// University student id
    pub student_id: String,
    /// Account password
    pub password: String,
}

/// Response of `POST /api/login`
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    /// Whether the credentials were accepted
    pub success: bool,
    /// The student record on success
    #[serde(default)]
    pub student: Option<Student>,
    /// Server-provided rejection message
    #[serde(default)]
    pub message: Option<String>,
}

/// One personalized recommendation
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RecommendationItem {
    /// Course the recommendation is about
    pub course: String,
    /// Current progress in that course, when known
    #[serde(default)]
    pub progress: Option<f64>,
    /// Why this was recommended
    #[serde(default)]
    pub reason: Option<String>,
    /// External resource link
    #[serde(default)]
    pub link: Option<String>,
    /// Suggested study roadmap steps
    #[serde(default)]
    pub roadmap: Vec<String>,
}

/// Response of `GET /api/recommendation/{student_id}`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RecommendationResponse {
    /// Overall advisory message
    #[serde(default)]
    pub message: Option<String>,
    /// Recommended courses, possibly empty when all is well
    #[serde(default)]
    pub recommendations: Vec<RecommendationItem>,
}

/// One row of `GET /api/progress/{student_id}`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ProgressEntry {
    /// Course name
    pub course: String,
    /// Completion percentage in `[0, 100]`
    pub progress: f64,
}

/// One row of `GET /api/schedule/{student_id}`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ScheduleEntry {
    /// University course code
    pub subject_code: String,
    /// Course display name
    pub subject_name: String,
    /// Assigned lecturer
    #[serde(default)]
    pub teacher_name: Option<String>,
}
