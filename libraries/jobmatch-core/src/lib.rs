//! jobmatch core
//!
//! Platform-agnostic data shapes and pure helpers shared by the jobmatch API
//! client and the command-line pages.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `Job`, `Resume`, `AnalysisResult`, `SessionCredentials`, etc.
//! - **Filtering**: `JobFilter`, the search/location predicate used by the jobs page
//! - **Formatting**: salary ranges and relative timestamps
//! - **Error Handling**: `CoreError` and `Result`
//!
//! # Example
//!
//! ```rust
//! use jobmatch_core::{format_salary, JobFilter};
//!
//! assert_eq!(format_salary(Some(50_000), Some(70_000)), "$50,000 - $70,000");
//!
//! let filter = JobFilter::new("rust", "remote");
//! assert!(!filter.is_empty());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod filter;
pub mod format;
pub mod types;
pub mod upload;

pub use error::{CoreError, Result};
pub use filter::JobFilter;
pub use format::{
    format_activity_timestamp, format_posted_date, format_salary, group_thousands, parse_timestamp,
};
pub use upload::{ResumeFileKind, MAX_RESUME_BYTES};

pub use types::{
    // Session
    SessionCredentials, UserId,
    // Resumes
    AiAnalysis, AnalysisResult, PersonalInfo, Resume, ResumeId, UploadedResume,
    // Jobs
    ApplicationId, Job, JobApplication, JobId,
    // Dashboard
    Activity, ActivityKind, DashboardStats,
    // Pagination
    Page,
};
