//! Page-level orchestration.
//!
//! Each page owns its view state, drives the client facades and renders to
//! plain text. Failures are logged and surfaced through a
//! [`Notifier`](crate::notify::Notifier); nothing is retried and nothing aborts the
//! program.

pub mod dashboard;
pub mod home;
pub mod jobs;
pub mod upload;

pub use dashboard::DashboardPage;
pub use home::HomePage;
pub use jobs::JobsPage;
pub use upload::{SelectedFile, UploadPage};
