//! Resume upload followed by AI analysis.

use crate::error::{AppError, Result};
use crate::notify::Notifier;
use jobmatch_client::{
    AnalyzeResumeRequest, AnalyzeResumeResponse, ApiClient, ClientError,
};
use jobmatch_core::{AnalysisResult, ResumeFileKind};
use std::fmt::Write as _;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{error, info};

/// Analysis depth requested after every upload.
pub const ANALYSIS_TYPE: &str = "comprehensive";

pub const UPLOAD_SUCCESS: &str = "Resume uploaded successfully!";
pub const ANALYSIS_SUCCESS: &str = "AI analysis completed!";
pub const UPLOAD_FAILURE: &str = "Failed to upload or analyze resume. Please try again.";

/// A resume file that passed the type and size checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    pub path: PathBuf,
    pub name: String,
    pub size: u64,
    pub kind: ResumeFileKind,
}

impl SelectedFile {
    /// Inspect a file on disk and accept it if it is a PDF, DOC or DOCX of at
    /// most 5 MiB.
    pub fn from_path(path: &Path) -> Result<Self> {
        let metadata = std::fs::metadata(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                AppError::InvalidArgument(format!("File not found: {}", path.display()))
            } else {
                AppError::Io(e)
            }
        })?;
        if !metadata.is_file() {
            return Err(AppError::InvalidArgument(format!(
                "Not a file: {}",
                path.display()
            )));
        }

        let size = metadata.len();
        let kind = ResumeFileKind::validate(path, size)?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        Ok(Self {
            path: path.to_path_buf(),
            name,
            size,
            kind,
        })
    }

    /// Size in megabytes with two decimals, e.g. "1.25 MB".
    pub fn size_label(&self) -> String {
        format!("{:.2} MB", self.size as f64 / 1024.0 / 1024.0)
    }
}

/// Upload page state.
///
/// One file at a time: the upload must finish before analysis starts, and
/// both flags are back to `false` once [`UploadPage::submit`] returns.
pub struct UploadPage {
    client: ApiClient,
    notifier: Arc<dyn Notifier>,
    target_role: Option<String>,
    uploaded_file: Option<SelectedFile>,
    is_uploading: bool,
    is_analyzing: bool,
    analysis: Option<AnalysisResult>,
}

impl UploadPage {
    pub fn new(client: ApiClient, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            client,
            notifier,
            target_role: None,
            uploaded_file: None,
            is_uploading: false,
            is_analyzing: false,
            analysis: None,
        }
    }

    /// Role passed along to the analysis request
    pub fn with_target_role(mut self, role: Option<String>) -> Self {
        self.target_role = role;
        self
    }

    pub fn uploaded_file(&self) -> Option<&SelectedFile> {
        self.uploaded_file.as_ref()
    }

    pub fn is_uploading(&self) -> bool {
        self.is_uploading
    }

    pub fn is_analyzing(&self) -> bool {
        self.is_analyzing
    }

    pub fn analysis(&self) -> Option<&AnalysisResult> {
        self.analysis.as_ref()
    }

    /// Upload `path` and analyze the extracted text.
    ///
    /// Returns `true` when an analysis result is available. Rejected files
    /// never reach the network. Any failure produces exactly one error
    /// notification.
    pub async fn submit(&mut self, path: &Path) -> bool {
        let file = match SelectedFile::from_path(path) {
            Ok(file) => file,
            Err(e) => {
                error!(path = %path.display(), error = %e, "Resume file rejected");
                self.notifier.error(&e.to_string());
                return false;
            }
        };

        self.analysis = None;
        self.uploaded_file = Some(file.clone());

        let outcome = self.upload_and_analyze(&file).await;
        self.is_uploading = false;
        self.is_analyzing = false;

        match outcome {
            Ok(analysis) => {
                self.analysis = Some(analysis);
                self.notifier.success(ANALYSIS_SUCCESS);
                true
            }
            Err(e) => {
                error!(file = %file.name, error = %e, "Upload/analysis failed");
                self.notifier.error(UPLOAD_FAILURE);
                false
            }
        }
    }

    async fn upload_and_analyze(&mut self, file: &SelectedFile) -> Result<AnalysisResult> {
        self.is_uploading = true;
        info!(file = %file.name, size = file.size, "Uploading resume");
        let uploaded = self.client.resumes().upload(&file.path).await?;

        self.notifier.success(UPLOAD_SUCCESS);
        self.is_uploading = false;
        self.is_analyzing = true;

        let mut request = AnalyzeResumeRequest::new(uploaded.text_content);
        request.analysis_type = Some(ANALYSIS_TYPE.to_string());
        request.target_role = self.target_role.clone();

        let response = self.client.ai().analyze_resume(&request).await?;
        analysis_or_error(response)
    }

    /// Render the current state of the page.
    pub fn render(&self) -> String {
        let mut out = String::new();

        match &self.uploaded_file {
            None => {
                out.push_str("Upload Your Resume\n");
                out.push_str("Supports PDF, DOC, DOCX files up to 5MB\n");
            }
            Some(file) => {
                let _ = write!(out, "{} ({})", file.name, file.size_label());
                if self.is_uploading {
                    out.push_str("  Uploading...");
                } else if self.is_analyzing {
                    out.push_str("  Analyzing with AI...");
                }
                out.push('\n');
            }
        }

        if let Some(analysis) = &self.analysis {
            out.push('\n');
            out.push_str(&render_analysis(analysis));
        }

        out
    }
}

/// The analysis carried by a response, or an error when the backend sent none.
pub(crate) fn analysis_or_error(response: AnalyzeResumeResponse) -> Result<AnalysisResult> {
    response.analysis.ok_or_else(|| {
        let reason = response
            .message
            .unwrap_or_else(|| "response has no analysis".to_string());
        AppError::Client(ClientError::Parse(reason))
    })
}

/// Text rendering of an analysis result.
pub fn render_analysis(analysis: &AnalysisResult) -> String {
    let mut out = String::from("AI Resume Analysis Complete\n\n");

    let info = &analysis.personal_info;
    out.push_str("Personal Information\n");
    let _ = writeln!(out, "  Name:  {}", info.name.as_deref().unwrap_or("Not found"));
    let _ = writeln!(out, "  Email: {}", info.email.as_deref().unwrap_or("Not found"));
    let _ = writeln!(out, "  Phone: {}", info.phone.as_deref().unwrap_or("Not found"));

    if !analysis.skills.is_empty() {
        let _ = writeln!(out, "\nSkills Extracted\n  {}", analysis.skills.join(", "));
    }

    if let Some(ai) = &analysis.ai_analysis {
        out.push_str("\nAI Analysis & Recommendations\n");
        if let Some(summary) = &ai.summary {
            let _ = writeln!(out, "  {}", summary);
        }
        if !ai.strengths.is_empty() {
            out.push_str("  Strengths\n");
            for strength in &ai.strengths {
                let _ = writeln!(out, "    • {}", strength);
            }
        }
        if !ai.suggestions.is_empty() {
            out.push_str("  Suggestions\n");
            for suggestion in &ai.suggestions {
                let _ = writeln!(out, "    • {}", suggestion);
            }
        }
        if let Some(score) = ai.score() {
            let _ = writeln!(out, "  Resume Score: {}/100", score);
        }
    }

    out.push_str("\nNext: run `jobmatch jobs` to find matching jobs\n");
    out
}
