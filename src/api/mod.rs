//! Smart Learning System API integration
//!
//! HTTP client, request/response models and the newest-request-wins guard
//! used by screens that fetch on parameter changes.

pub mod client;
pub mod error;
pub mod latest;
pub mod models;

// Re-export commonly used types
pub use client::ApiClient;
pub use error::ApiError;
pub use latest::{Latest, Token};
pub use models::{
    LoginRequest, LoginResponse, ProgressEntry, RecommendationItem, RecommendationResponse,
    ScheduleEntry, Student,
};
