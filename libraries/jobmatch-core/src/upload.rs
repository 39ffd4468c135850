//! Acceptance rules for resume files picked for upload.

use crate::error::{CoreError, Result};
use std::path::Path;

/// Largest resume file accepted for upload (5 MiB).
pub const MAX_RESUME_BYTES: u64 = 5_242_880;

/// Document formats the backend can extract text from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResumeFileKind {
    Pdf,
    Doc,
    Docx,
}

impl ResumeFileKind {
    /// Detect the kind from a file name's extension (case-insensitive).
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "pdf" => Some(ResumeFileKind::Pdf),
            "doc" => Some(ResumeFileKind::Doc),
            "docx" => Some(ResumeFileKind::Docx),
            _ => None,
        }
    }

    /// MIME type sent with the multipart part
    pub fn mime_type(&self) -> &'static str {
        match self {
            ResumeFileKind::Pdf => "application/pdf",
            ResumeFileKind::Doc => "application/msword",
            ResumeFileKind::Docx => {
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
            }
        }
    }

    /// Check a candidate file's name and size before it is uploaded.
    pub fn validate(path: &Path, size: u64) -> Result<Self> {
        let kind = Self::from_path(path).ok_or_else(|| {
            CoreError::UnsupportedFile(format!(
                "{} (supported: PDF, DOC, DOCX)",
                path.display()
            ))
        })?;
        if size > MAX_RESUME_BYTES {
            return Err(CoreError::FileTooLarge {
                size,
                limit: MAX_RESUME_BYTES,
            });
        }
        Ok(kind)
    }
}
