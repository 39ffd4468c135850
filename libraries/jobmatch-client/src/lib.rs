//! jobmatch API client
//!
//! HTTP client library for the jobmatch resume and job-matching backend.
//!
//! # Features
//!
//! - **Session**: tokens live in an explicit [`SessionContext`] (memory or file)
//! - **Auth interceptors**: bearer token on every request; 401 clears the
//!   session and redirects to login
//! - **Middleware**: ordered request/response hooks around every call
//! - **Facades**: resumes, AI services, jobs, authentication
//!
//! # Example
//!
//! ```ignore
//! use jobmatch_client::{ApiClient, ClientConfig, FileSessionStore, LoginRequest};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let session = FileSessionStore::new(".jobmatch/session.json").into_context();
//!     let client = ApiClient::builder(ClientConfig::default(), session).build()?;
//!
//!     client
//!         .auth()
//!         .login(&LoginRequest {
//!             email: "ada@example.com".into(),
//!             password: "secret".into(),
//!         })
//!         .await?;
//!
//!     let jobs = client.jobs().list(&Default::default()).await?;
//!     println!("Found {} jobs", jobs.results.len());
//!
//!     Ok(())
//! }
//! ```

mod ai;
mod auth;
mod client;
mod error;
mod interceptors;
mod jobs;
mod middleware;
mod navigator;
mod resumes;
mod session;
mod types;

// Re-export main types
pub use client::{ApiClient, ApiClientBuilder};
pub use error::{ClientError, Result};
pub use interceptors::{BearerAuth, UnauthorizedRedirect};
pub use middleware::{Middleware, MiddlewareChain};
pub use navigator::{LogNavigator, Navigator, LOGIN_ROUTE};
pub use session::{
    FileSessionStore, MemorySessionStore, SessionContext, SessionStore, ACCESS_TOKEN_KEY,
    REFRESH_TOKEN_KEY,
};
pub use types::{
    AiServices, AnalyzeResumeRequest, AnalyzeResumeResponse, ApplyRequest, ApplyResponse,
    AuthResponse, CareerAdviceRequest, CareerAdviceResponse, ClientConfig, CollectJobsRequest,
    CollectJobsResponse, CompanyResearchRequest, CompanyResearchResponse, JobListParams,
    JobMatches, LoginRequest, MarketResearchRequest, MarketResearchResponse, MatchJobsRequest,
    MatchJobsResponse, ProfileUpdate, RegisterRequest, ServiceStatus, UserProfile,
    DEFAULT_BASE_URL,
};

// Re-export facades for direct use if needed
pub use ai::AiApi;
pub use auth::AuthApi;
pub use jobs::JobsApi;
pub use resumes::ResumesApi;
