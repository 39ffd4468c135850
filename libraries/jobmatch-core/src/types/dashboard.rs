/// Dashboard types
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Aggregate counters shown on the dashboard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardStats {
    pub total_resumes: u32,
    pub total_applications: u32,
    pub matched_jobs: u32,
    pub ai_analysis_score: u8,
}

impl DashboardStats {
    /// Static figures displayed until the backend exposes real counters.
    pub fn placeholder() -> Self {
        Self {
            total_resumes: 3,
            total_applications: 12,
            matched_jobs: 45,
            ai_analysis_score: 85,
        }
    }
}

/// What happened in an activity feed entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityKind {
    ResumeUpload,
    JobApplication,
    AiAnalysis,
}

impl ActivityKind {
    /// Short label used in place of an icon
    pub fn label(&self) -> &'static str {
        match self {
            ActivityKind::ResumeUpload => "resume",
            ActivityKind::JobApplication => "application",
            ActivityKind::AiAnalysis => "analysis",
        }
    }
}

/// A timestamped entry in the dashboard activity feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: ActivityKind,
    pub description: String,
    pub timestamp: DateTime<Utc>,
}

impl Activity {
    /// Placeholder feed, timestamped relative to `now`.
    pub fn placeholder_feed(now: DateTime<Utc>) -> Vec<Activity> {
        vec![
            Activity {
                id: "1".to_string(),
                kind: ActivityKind::ResumeUpload,
                description: "Uploaded new resume: Senior_Developer_Resume.pdf".to_string(),
                timestamp: now - Duration::hours(2),
            },
            Activity {
                id: "2".to_string(),
                kind: ActivityKind::AiAnalysis,
                description: "AI analysis completed with score: 85/100".to_string(),
                timestamp: now - Duration::hours(4),
            },
            Activity {
                id: "3".to_string(),
                kind: ActivityKind::JobApplication,
                description: "Applied to Senior Python Developer at TechCorp".to_string(),
                timestamp: now - Duration::hours(24),
            },
        ]
    }
}
