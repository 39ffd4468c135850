//! Types for jobmatch API requests and responses.
//!
//! AI endpoints return model-generated content whose shape the backend does
//! not pin down (plain text in some deployments, objects in others), so those
//! payloads are kept as `serde_json::Value`.

use crate::navigator::LOGIN_ROUTE;
use jobmatch_core::{AnalysisResult, JobApplication, ResumeId, SessionCredentials, UserId};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::time::Duration;

/// Default backend origin and API prefix.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000/api";

/// Configuration for connecting to the jobmatch backend.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL including the API prefix (e.g., "http://localhost:8000/api")
    pub base_url: String,
    /// Per-request timeout; `None` waits for as long as the backend takes
    pub timeout: Option<Duration>,
    /// Route handed to the navigator after a 401
    pub login_route: String,
}

impl ClientConfig {
    /// Create a config for the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: None,
            login_route: LOGIN_ROUTE.to_string(),
        }
    }

    /// Set a request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

// =============================================================================
// AI Types
// =============================================================================

/// Request body for resume analysis.
#[derive(Debug, Clone, Serialize)]
pub struct AnalyzeResumeRequest {
    pub resume_text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub analysis_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_role: Option<String>,
}

impl AnalyzeResumeRequest {
    pub fn new(resume_text: impl Into<String>) -> Self {
        Self {
            resume_text: resume_text.into(),
            analysis_type: None,
            target_role: None,
        }
    }
}

/// Response from resume analysis.
#[derive(Debug, Clone, Deserialize)]
pub struct AnalyzeResumeResponse {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    /// Missing when the backend answers without a result
    #[serde(default)]
    pub analysis: Option<AnalysisResult>,
}

/// Request body for job matching.
#[derive(Debug, Clone, Serialize)]
pub struct MatchJobsRequest {
    pub resume_text: String,
    /// Free-form preference bag (location, salary, remote, ...)
    #[serde(skip_serializing_if = "Map::is_empty")]
    pub preferences: Map<String, Value>,
    /// Route the search through the enhanced search provider
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_perplexity: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

impl MatchJobsRequest {
    pub fn new(resume_text: impl Into<String>) -> Self {
        Self {
            resume_text: resume_text.into(),
            preferences: Map::new(),
            use_perplexity: None,
            limit: None,
        }
    }
}

/// Matches found for a resume.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct JobMatches {
    #[serde(default)]
    pub total_found: Option<u64>,
    #[serde(default)]
    pub jobs: Value,
    #[serde(default)]
    pub use_perplexity: Option<bool>,
}

/// Response from job matching.
#[derive(Debug, Clone, Deserialize)]
pub struct MatchJobsResponse {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub matches: JobMatches,
}

/// Request body for career advice.
#[derive(Debug, Clone, Serialize)]
pub struct CareerAdviceRequest {
    pub resume_text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub career_goals: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_challenges: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub preferred_industries: Vec<String>,
}

/// Response from career advice.
#[derive(Debug, Clone, Deserialize)]
pub struct CareerAdviceResponse {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub advice: Value,
}

/// Request body for market research.
#[derive(Debug, Clone, Serialize)]
pub struct MarketResearchRequest {
    pub industry: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeframe: Option<String>,
}

/// Response from market research.
#[derive(Debug, Clone, Deserialize)]
pub struct MarketResearchResponse {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub research: Value,
}

/// Request body for company research.
#[derive(Debug, Clone, Serialize)]
pub struct CompanyResearchRequest {
    pub company_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detailed: Option<bool>,
}

/// Response from company research.
#[derive(Debug, Clone, Deserialize)]
pub struct CompanyResearchResponse {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub company_research: Value,
}

/// Request body for external job collection.
#[derive(Debug, Clone, Serialize)]
pub struct CollectJobsRequest {
    pub queries: Vec<String>,
    pub locations: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

/// Response from external job collection.
#[derive(Debug, Clone, Deserialize)]
pub struct CollectJobsResponse {
    #[serde(default)]
    pub status: Option<String>,
    /// Provider the backend used
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub total_collected: u64,
    #[serde(default)]
    pub jobs: Value,
    #[serde(default)]
    pub note: Option<String>,
}

/// Availability of the backend AI providers.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AiServices {
    #[serde(default)]
    pub gemini: Option<String>,
    #[serde(default)]
    pub perplexity: Option<String>,
    #[serde(default)]
    pub available_endpoints: Vec<String>,
}

/// Response from the AI status endpoint.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServiceStatus {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub ai_services: AiServices,
}

// =============================================================================
// Job Types
// =============================================================================

/// Query parameters for the job listing; unset fields are not sent.
#[derive(Debug, Clone, Default, Serialize)]
pub struct JobListParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub experience_level: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
}

/// Request body for a job application.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ApplyRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_letter: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resume_id: Option<ResumeId>,
}

/// Response from a job application.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApplyResponse {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub application: Option<JobApplication>,
}

// =============================================================================
// Authentication Types
// =============================================================================

/// Request body for login endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Request body for registration endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
}

/// Response from login or registration.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthResponse {
    #[serde(default, alias = "access")]
    pub access_token: Option<String>,
    #[serde(default, alias = "refresh")]
    pub refresh_token: Option<String>,
    #[serde(default)]
    pub user_id: Option<UserId>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

impl AuthResponse {
    /// Tokens to keep in the session, if the backend issued an access token.
    pub fn credentials(&self) -> Option<SessionCredentials> {
        self.access_token.as_ref().map(|access| SessionCredentials {
            access_token: access.clone(),
            refresh_token: self.refresh_token.clone(),
        })
    }
}

/// Current user's profile.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UserProfile {
    #[serde(default)]
    pub id: Option<UserId>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    /// Any additional profile fields the backend returns
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Partial profile update; unset fields are left untouched.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

// =============================================================================
// Error Types
// =============================================================================

/// Error body as returned by the backend.
#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct ApiErrorBody {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub detail: Option<String>,
}

impl ApiErrorBody {
    /// Most specific human-readable message available
    pub(crate) fn into_message(self) -> Option<String> {
        self.message.or(self.error).or(self.detail)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_response_accepts_short_token_keys() {
        let json = serde_json::json!({
            "user_id": 7,
            "username": "ada",
            "email": "ada@example.com",
            "refresh": "r-token",
            "access": "a-token"
        });
        let response: AuthResponse = serde_json::from_value(json).unwrap();
        let creds = response.credentials().unwrap();
        assert_eq!(creds.access_token, "a-token");
        assert_eq!(creds.refresh_token.as_deref(), Some("r-token"));
        assert_eq!(response.user_id.unwrap().as_str(), "7");
    }

    #[test]
    fn test_job_list_params_skip_unset() {
        let params = JobListParams {
            search: Some("rust".into()),
            page: Some(2),
            ..JobListParams::default()
        };
        let value = serde_json::to_value(&params).unwrap();
        assert_eq!(value, serde_json::json!({ "search": "rust", "page": 2 }));
    }

    #[test]
    fn test_match_request_omits_empty_preferences() {
        let request = MatchJobsRequest::new("resume");
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value, serde_json::json!({ "resume_text": "resume" }));
    }

    #[test]
    fn test_error_body_precedence() {
        let body: ApiErrorBody =
            serde_json::from_str(r#"{"status": "error", "message": "No resume text provided"}"#)
                .unwrap();
        assert_eq!(body.into_message().as_deref(), Some("No resume text provided"));

        let body: ApiErrorBody = serde_json::from_str(r#"{"detail": "Not found."}"#).unwrap();
        assert_eq!(body.into_message().as_deref(), Some("Not found."));
    }
}
