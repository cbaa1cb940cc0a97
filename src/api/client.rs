//! HTTP client for the Smart Learning System backend

use reqwest::Client;

use super::error::ApiError;
use super::models::{
    LoginRequest, LoginResponse, ProgressEntry, RecommendationResponse, ScheduleEntry, Student,
};

/// Backend API client
///
/// One method per endpoint, one attempt per call. No retry, no backoff;
/// every failure is terminal for the triggering user action.
#[derive(Debug, Clone)]
pub struct ApiClient {
    /// HTTP client
    client: Client,
    /// Base URL, without a trailing slash
    base_url: String,
}

impl ApiClient {
    /// Request timeout in seconds
    const TIMEOUT_SECS: u64 = 30;

    /// Create a client against the given base URL
    pub fn new(base_url: impl Into<String>) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(Self::TIMEOUT_SECS))
            .build()
            .expect("Failed to create HTTP client");

        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }

        Self { client, base_url }
    }

    /// Authenticate a student
    ///
    /// A `success: false` answer maps to [`ApiError::LoginRejected`] with
    /// the server's message.
    pub async fn login(&self, student_id: &str, password: &str) -> Result<Student, ApiError> {
        let request = LoginRequest {
            student_id: student_id.to_string(),
            password: password.to_string(),
        };

        let response = self
            .client
            .post(format!("{}/api/login", self.base_url))
            .json(&request)
            .send()
            .await?;

        let body: LoginResponse = Self::decode(response).await?;

        if body.success {
            body.student.ok_or_else(|| {
                ApiError::LoginRejected("Phản hồi đăng nhập thiếu thông tin sinh viên".into())
            })
        } else {
            Err(ApiError::LoginRejected(
                body.message.unwrap_or_else(|| "Sai mã sinh viên hoặc mật khẩu!".into()),
            ))
        }
    }

    /// Personalized recommendations for a student
    pub async fn recommendations(
        &self,
        student_id: &str,
    ) -> Result<RecommendationResponse, ApiError> {
        let response = self
            .client
            .get(format!("{}/api/recommendation/{student_id}", self.base_url))
            .send()
            .await?;

        Self::decode(response).await
    }

    /// Per-course completion percentages for the dashboard
    pub async fn progress(&self, student_id: &str) -> Result<Vec<ProgressEntry>, ApiError> {
        let response = self
            .client
            .get(format!("{}/api/progress/{student_id}", self.base_url))
            .send()
            .await?;

        Self::decode(response).await
    }

    /// Current semester schedule rows
    pub async fn schedule(&self, student_id: &str) -> Result<Vec<ScheduleEntry>, ApiError> {
        let response = self
            .client
            .get(format!("{}/api/schedule/{student_id}", self.base_url))
            .send()
            .await?;

        Self::decode(response).await
    }

    /// The base URL this client talks to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Check status, then decode the JSON body
    async fn decode<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, ApiError> {
        let status = response.status();

        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            tracing::warn!(status = status.as_u16(), "API request failed");
            return Err(ApiError::ServerError { status: status.as_u16(), message });
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slashes_are_stripped() {
        let client = ApiClient::new("http://127.0.0.1:5000/");
        assert_eq!(client.base_url(), "http://127.0.0.1:5000");

        let client = ApiClient::new("http://127.0.0.1:5000");
        assert_eq!(client.base_url(), "http://127.0.0.1:5000");
    }
}
