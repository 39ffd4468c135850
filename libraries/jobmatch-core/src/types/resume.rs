/// Resume and analysis types
use super::ids::ResumeId;
use serde::{Deserialize, Deserializer, Serialize};

/// A stored resume record as listed by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resume {
    pub id: ResumeId,
    /// Reference to the uploaded file (URL or storage path)
    #[serde(default)]
    pub file: Option<String>,
    #[serde(default)]
    pub filename: Option<String>,
    /// Text extracted from the file by the backend
    #[serde(default)]
    pub text_content: String,
    #[serde(default)]
    pub uploaded_at: Option<String>,
}

/// Response body of a successful resume upload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UploadedResume {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub id: Option<ResumeId>,
    #[serde(default)]
    pub filename: Option<String>,
    /// File size in bytes
    #[serde(default)]
    pub size: Option<u64>,
    /// Extracted text; this is what gets sent for analysis
    #[serde(default)]
    pub text_content: String,
    #[serde(default)]
    pub word_count: Option<u64>,
}

/// Contact details pulled out of a resume.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonalInfo {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
}

/// The AI part of an analysis.
///
/// Some backends answer with free text instead of an object; that text lands
/// in `summary`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AiAnalysis {
    pub strengths: Vec<String>,
    pub suggestions: Vec<String>,
    /// Raw score as sent by the backend
    pub score: Option<f64>,
    pub summary: Option<String>,
}

impl AiAnalysis {
    /// Score rounded and clamped to 0..=100.
    pub fn score(&self) -> Option<u8> {
        self.score
            .filter(|s| s.is_finite())
            .map(|s| s.round().clamp(0.0, 100.0) as u8)
    }
}

impl<'de> Deserialize<'de> for AiAnalysis {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Structured {
            #[serde(default)]
            strengths: Vec<String>,
            #[serde(default)]
            suggestions: Vec<String>,
            #[serde(default)]
            score: Option<f64>,
            #[serde(default)]
            summary: Option<String>,
        }

        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Structured(Structured),
            Text(String),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Structured(s) => AiAnalysis {
                strengths: s.strengths,
                suggestions: s.suggestions,
                score: s.score,
                summary: s.summary,
            },
            Raw::Text(text) => AiAnalysis {
                summary: Some(text),
                ..AiAnalysis::default()
            },
        })
    }
}

/// Structured result of a resume analysis.
///
/// Produced once per analysis request and kept only in page state.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    #[serde(default)]
    pub personal_info: PersonalInfo,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub experience: Vec<String>,
    #[serde(default)]
    pub education: Vec<String>,
    #[serde(default)]
    pub ai_analysis: Option<AiAnalysis>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_structured_analysis() {
        let json = serde_json::json!({
            "personal_info": { "name": "Ada Lovelace", "email": "ada@example.com" },
            "skills": ["Rust", "SQL"],
            "ai_analysis": {
                "strengths": ["Clear impact statements"],
                "suggestions": ["Add metrics"],
                "score": 85
            }
        });

        let result: AnalysisResult = serde_json::from_value(json).unwrap();
        assert_eq!(result.personal_info.name.as_deref(), Some("Ada Lovelace"));
        assert!(result.personal_info.phone.is_none());
        assert_eq!(result.skills, vec!["Rust", "SQL"]);
        assert!(result.experience.is_empty());

        let ai = result.ai_analysis.unwrap();
        assert_eq!(ai.score(), Some(85));
        assert_eq!(ai.suggestions, vec!["Add metrics"]);
    }

    #[test]
    fn test_free_text_ai_analysis() {
        let json = serde_json::json!({ "ai_analysis": "Strong backend profile." });

        let result: AnalysisResult = serde_json::from_value(json).unwrap();
        let ai = result.ai_analysis.unwrap();
        assert_eq!(ai.summary.as_deref(), Some("Strong backend profile."));
        assert!(ai.strengths.is_empty());
        assert_eq!(ai.score(), None);
    }

    #[test]
    fn test_score_is_clamped() {
        let over = AiAnalysis {
            score: Some(140.0),
            ..AiAnalysis::default()
        };
        assert_eq!(over.score(), Some(100));

        let under = AiAnalysis {
            score: Some(-3.0),
            ..AiAnalysis::default()
        };
        assert_eq!(under.score(), Some(0));

        let fractional = AiAnalysis {
            score: Some(8.5),
            ..AiAnalysis::default()
        };
        assert_eq!(fractional.score(), Some(9));
    }
}
