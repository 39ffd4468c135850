//! Domain types for jobmatch

mod dashboard;
mod ids;
mod job;
mod page;
mod resume;
mod session;

pub use dashboard::{Activity, ActivityKind, DashboardStats};
pub use ids::{ApplicationId, JobId, ResumeId, UserId};
pub use job::{Job, JobApplication};
pub use page::Page;
pub use resume::{AiAnalysis, AnalysisResult, PersonalInfo, Resume, UploadedResume};
pub use session::SessionCredentials;
