//! jobmatch command-line front end
//!
//! Pages and commands built on top of `jobmatch-client`: resume upload with
//! AI analysis, the job board, the dashboard and the home screen.
//!
//! This library exposes the pages and configuration for testing purposes.

pub mod commands;
pub mod config;
pub mod error;
pub mod notify;
pub mod pages;

// Re-export commonly used types for convenience
pub use config::AppConfig;
pub use error::{AppError, Result};
pub use notify::{ConsoleNavigator, ConsoleNotifier, Notifier};
pub use pages::{DashboardPage, HomePage, JobsPage, SelectedFile, UploadPage};
