//! Client-side job filtering.
//!
//! The jobs page narrows the fetched snapshot with two independent predicates:
//! a free-text search over title, company and skills, and a location match
//! where the keyword `remote` also selects postings flagged as remote. A job
//! is kept when both predicates hold, so the order the filters are applied in
//! never changes the result.

use crate::types::Job;

const REMOTE_KEYWORD: &str = "remote";

/// Search text and location filter, compared case-insensitively.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JobFilter {
    search: String,
    location: String,
}

impl JobFilter {
    /// Filter on both search text and location. Empty strings match everything.
    pub fn new(search: impl AsRef<str>, location: impl AsRef<str>) -> Self {
        Self {
            search: search.as_ref().to_lowercase(),
            location: location.as_ref().to_lowercase(),
        }
    }

    /// Filter on search text only
    pub fn search(search: impl AsRef<str>) -> Self {
        Self::new(search, "")
    }

    /// Filter on location only
    pub fn location(location: impl AsRef<str>) -> Self {
        Self::new("", location)
    }

    /// True when neither field narrows the result
    pub fn is_empty(&self) -> bool {
        self.search.is_empty() && self.location.is_empty()
    }

    /// Title, company or any required skill contains the search text.
    pub fn matches_search(&self, job: &Job) -> bool {
        let needle = self.search.as_str();
        job.title.to_lowercase().contains(needle)
            || job.company.to_lowercase().contains(needle)
            || job
                .skills_required
                .iter()
                .any(|skill| skill.to_lowercase().contains(needle))
    }

    /// Location contains the filter text, or the filter is `remote` and the job is remote.
    pub fn matches_location(&self, job: &Job) -> bool {
        self.location.is_empty()
            || job.location.to_lowercase().contains(self.location.as_str())
            || (self.location == REMOTE_KEYWORD && job.is_remote)
    }

    /// Both predicates hold.
    pub fn matches(&self, job: &Job) -> bool {
        self.matches_search(job) && self.matches_location(job)
    }

    /// Jobs from `jobs` that match, in their original order.
    pub fn apply<'a>(&self, jobs: &'a [Job]) -> Vec<&'a Job> {
        jobs.iter().filter(|job| self.matches(job)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::JobId;

    fn job(title: &str, company: &str, location: &str, skills: &[&str], remote: bool) -> Job {
        Job {
            id: JobId::new(title),
            title: title.to_string(),
            company: company.to_string(),
            location: location.to_string(),
            salary_min: None,
            salary_max: None,
            job_type: "full_time".to_string(),
            experience_level: "mid".to_string(),
            description: String::new(),
            skills_required: skills.iter().map(|s| s.to_string()).collect(),
            posted_date: "2025-09-01".to_string(),
            source: "linkedin".to_string(),
            is_remote: remote,
        }
    }

    fn sample() -> Vec<Job> {
        vec![
            job("Senior Software Engineer", "TechCorp Inc.", "San Francisco, CA", &["Python", "Django"], false),
            job("Data Scientist", "DataFlow Solutions", "New York, NY", &["Machine Learning", "SQL"], false),
            job("Frontend Developer", "WebDesign Pro", "Austin, TX", &["React", "TypeScript"], true),
        ]
    }

    #[test]
    fn test_empty_filter_keeps_everything() {
        let jobs = sample();
        let filter = JobFilter::default();
        assert!(filter.is_empty());
        assert_eq!(filter.apply(&jobs).len(), 3);
    }

    #[test]
    fn test_search_is_case_insensitive_across_fields() {
        let jobs = sample();

        let by_title = JobFilter::search("SCIENTIST").apply(&jobs);
        assert_eq!(by_title.len(), 1);
        assert_eq!(by_title[0].company, "DataFlow Solutions");

        let by_company = JobFilter::search("webdesign").apply(&jobs);
        assert_eq!(by_company.len(), 1);

        let by_skill = JobFilter::search("typescr").apply(&jobs);
        assert_eq!(by_skill[0].title, "Frontend Developer");
    }

    #[test]
    fn test_remote_keyword_matches_flag() {
        let jobs = sample();

        let remote = JobFilter::location("Remote").apply(&jobs);
        assert_eq!(remote.len(), 1);
        assert!(remote[0].is_remote);

        // Partial keyword falls back to a plain substring match
        assert!(JobFilter::location("remo").apply(&jobs).is_empty());
    }

    #[test]
    fn test_location_substring() {
        let jobs = sample();
        let ny = JobFilter::location("new york").apply(&jobs);
        assert_eq!(ny.len(), 1);
        assert_eq!(ny[0].title, "Data Scientist");
    }

    #[test]
    fn test_filters_combine_with_and() {
        let jobs = sample();
        assert!(JobFilter::new("python", "austin").apply(&jobs).is_empty());
        assert_eq!(JobFilter::new("react", "remote").apply(&jobs).len(), 1);
    }
}
