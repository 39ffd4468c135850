//! Resume operations for the jobmatch backend.

use crate::client::ApiClient;
use crate::error::{ClientError, Result};
use jobmatch_core::{Page, Resume, ResumeFileKind, ResumeId, UploadedResume};
use reqwest::multipart::{Form, Part};
use std::path::Path;
use tracing::{debug, info};

/// Multipart field the backend reads the file from.
const UPLOAD_FIELD: &str = "resume";

/// Resume client for the jobmatch backend.
pub struct ResumesApi<'a> {
    client: &'a ApiClient,
}

impl<'a> ResumesApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Upload a resume file from disk.
    ///
    /// The file is sent as-is; format and size checks belong to the caller
    /// or the backend.
    pub async fn upload(&self, file_path: &Path) -> Result<UploadedResume> {
        if !file_path.exists() {
            return Err(ClientError::FileNotFound(file_path.display().to_string()));
        }

        let file_name = file_path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("resume")
            .to_string();

        let contents = tokio::fs::read(file_path).await?;
        self.upload_bytes(&file_name, contents).await
    }

    /// Upload resume contents already in memory.
    pub async fn upload_bytes(&self, file_name: &str, contents: Vec<u8>) -> Result<UploadedResume> {
        let size = contents.len();
        let mime = ResumeFileKind::from_path(Path::new(file_name))
            .map(|k| k.mime_type())
            .unwrap_or("application/octet-stream");

        debug!(file = %file_name, size = size, mime = %mime, "Uploading resume");

        let part = Part::bytes(contents)
            .file_name(file_name.to_string())
            .mime_str(mime)?;
        let form = Form::new().part(UPLOAD_FIELD, part);

        let uploaded: UploadedResume = self.client.post_multipart("/resumes/upload/", form).await?;

        info!(
            file = %file_name,
            size = size,
            words = ?uploaded.word_count,
            "Resume uploaded"
        );

        Ok(uploaded)
    }

    /// List stored resumes.
    pub async fn list(&self) -> Result<Page<Resume>> {
        self.client.get("/resumes/").await
    }

    /// Fetch one resume.
    pub async fn get(&self, id: &ResumeId) -> Result<Resume> {
        self.client.get(&format!("/resumes/{}/", id)).await
    }

    /// Delete one resume.
    pub async fn delete(&self, id: &ResumeId) -> Result<()> {
        debug!(resume_id = %id, "Deleting resume");
        self.client.delete(&format!("/resumes/{}/", id)).await
    }
}
