//! Dashboard: progress counters and recent activity.
//!
//! The backend exposes no dashboard endpoint yet, so the page shows fixed
//! counters and a feed timestamped relative to the moment it is loaded.

use chrono::{DateTime, Utc};
use jobmatch_core::{format_activity_timestamp, Activity, DashboardStats};
use std::fmt::Write as _;

#[derive(Debug, Clone)]
pub struct DashboardPage {
    stats: DashboardStats,
    activity: Vec<Activity>,
    loading: bool,
}

impl Default for DashboardPage {
    fn default() -> Self {
        Self::new()
    }
}

impl DashboardPage {
    pub fn new() -> Self {
        Self {
            stats: DashboardStats::default(),
            activity: Vec::new(),
            loading: true,
        }
    }

    pub async fn load(&mut self, now: DateTime<Utc>) {
        self.stats = DashboardStats::placeholder();
        self.activity = Activity::placeholder_feed(now);
        self.loading = false;
    }

    pub fn stats(&self) -> &DashboardStats {
        &self.stats
    }

    pub fn activity(&self) -> &[Activity] {
        &self.activity
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn render(&self, now: DateTime<Utc>) -> String {
        if self.loading {
            return "Loading dashboard...\n".to_string();
        }

        let stats = &self.stats;
        let mut out = String::from("Dashboard\n\n");
        let _ = writeln!(out, "  Total Resumes   {}", stats.total_resumes);
        let _ = writeln!(out, "  Applications    {}", stats.total_applications);
        let _ = writeln!(out, "  Matched Jobs    {}", stats.matched_jobs);
        let _ = writeln!(out, "  AI Score        {}/100", stats.ai_analysis_score);

        out.push_str("\nRecent Activity\n");
        if self.activity.is_empty() {
            out.push_str("  No recent activity\n");
        }
        for entry in &self.activity {
            let _ = writeln!(
                out,
                "  [{}] {} ({})",
                entry.kind.label(),
                entry.description,
                format_activity_timestamp(entry.timestamp, now)
            );
        }

        out.push_str("\nQuick Actions\n");
        out.push_str("  Upload New Resume     jobmatch upload <file>\n");
        out.push_str("  Browse Jobs           jobmatch jobs\n");
        out.push_str("  Get AI Career Advice  jobmatch advice <resume-file>\n");

        let _ = writeln!(
            out,
            "\nAI Resume Score: {}/100. {}",
            stats.ai_analysis_score,
            score_remark(stats.ai_analysis_score)
        );
        out
    }
}

/// One-line verdict for a resume score.
pub fn score_remark(score: u8) -> &'static str {
    match score {
        80.. => "Excellent work!",
        60..=79 => "Good progress!",
        _ => "Room for improvement.",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    #[tokio::test]
    async fn test_placeholder_dashboard() {
        let loaded_at = Utc.with_ymd_and_hms(2025, 9, 11, 12, 0, 0).unwrap();
        let mut page = DashboardPage::new();
        assert!(page.render(loaded_at).starts_with("Loading"));

        page.load(loaded_at).await;
        assert!(!page.is_loading());
        assert_eq!(*page.stats(), DashboardStats::placeholder());
        assert_eq!(page.activity().len(), 3);

        let rendered = page.render(loaded_at);
        assert!(rendered.contains("AI Score        85/100"));
        assert!(rendered.contains("(2 hours ago)"));
        assert!(rendered.contains("(4 hours ago)"));
        assert!(rendered.contains("(1 day ago)"));
        assert!(rendered.contains("Excellent work!"));

        // Re-rendered later, the same feed ages
        let later = page.render(loaded_at + Duration::days(2));
        assert!(later.contains("(3 days ago)"));
    }

    #[test]
    fn test_score_remark_bands() {
        assert_eq!(score_remark(100), "Excellent work!");
        assert_eq!(score_remark(80), "Excellent work!");
        assert_eq!(score_remark(79), "Good progress!");
        assert_eq!(score_remark(60), "Good progress!");
        assert_eq!(score_remark(59), "Room for improvement.");
        assert_eq!(score_remark(0), "Room for improvement.");
    }
}
