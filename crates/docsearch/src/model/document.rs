//! Document records as returned by the list, detail, search and upload endpoints.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use super::catalog::Topic;

/// File type classification assigned by the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum FileType {
    Pdf,
    Docx,
    Pptx,
    Xlsx,
    Txt,
    Md,
    Image,
    #[default]
    #[serde(other)]
    Other,
}

impl FileType {
    pub const ALL: [FileType; 8] = [
        FileType::Pdf,
        FileType::Docx,
        FileType::Pptx,
        FileType::Xlsx,
        FileType::Txt,
        FileType::Md,
        FileType::Image,
        FileType::Other,
    ];

    /// Wire code, as used in `file_type` query parameters.
    pub fn as_str(&self) -> &'static str {
        match self {
            FileType::Pdf => "PDF",
            FileType::Docx => "DOCX",
            FileType::Pptx => "PPTX",
            FileType::Xlsx => "XLSX",
            FileType::Txt => "TXT",
            FileType::Md => "MD",
            FileType::Image => "IMAGE",
            FileType::Other => "OTHER",
        }
    }

    /// Classifies a file extension the same way the server does on upload.
    pub fn from_extension(ext: &str) -> Self {
        match ext.trim_start_matches('.').to_lowercase().as_str() {
            "pdf" => FileType::Pdf,
            "doc" | "docx" => FileType::Docx,
            "ppt" | "pptx" => FileType::Pptx,
            "xls" | "xlsx" => FileType::Xlsx,
            "txt" => FileType::Txt,
            "md" => FileType::Md,
            "jpg" | "jpeg" | "png" | "gif" => FileType::Image,
            _ => FileType::Other,
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            FileType::Pdf | FileType::Txt => "📄",
            FileType::Docx | FileType::Md => "📝",
            FileType::Pptx => "📊",
            FileType::Xlsx => "📈",
            FileType::Image => "🖼️",
            FileType::Other => "📎",
        }
    }
}

impl fmt::Display for FileType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FileType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FileType::ALL
            .iter()
            .copied()
            .find(|t| t.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("Unknown file type '{}'", s))
    }
}

/// Server-side processing status of a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DocumentStatus {
    #[default]
    Pending,
    Processed,
    Failed,
}

impl fmt::Display for DocumentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentStatus::Pending => write!(f, "Pending Processing"),
            DocumentStatus::Processed => write!(f, "Processed"),
            DocumentStatus::Failed => write!(f, "Processing Failed"),
        }
    }
}

/// Reference to a team or project attached to a document.
///
/// Detail responses nest `{id, name, ...}` while create/update responses
/// carry only the bare id; both decode into this type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Related {
    pub id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl<'de> Deserialize<'de> for Related {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Id(i64),
            Object {
                id: i64,
                #[serde(default)]
                name: Option<String>,
            },
        }

        Ok(match Repr::deserialize(deserializer)? {
            Repr::Id(id) => Related { id, name: None },
            Repr::Object { id, name } => Related { id, name },
        })
    }
}

/// A document as held by the controller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub id: i64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Extracted text; only present in detail responses.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_text: Option<String>,
    /// Original filename as exposed by list responses.
    #[serde(default)]
    pub file_name: Option<String>,
    /// Original filename as exposed by detail responses.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_filename: Option<String>,
    #[serde(default)]
    pub file_type: FileType,
    #[serde(default)]
    pub file_size: u64,
    #[serde(default)]
    pub file_url: Option<String>,
    #[serde(default)]
    pub uploaded_by_name: Option<String>,
    #[serde(default)]
    pub uploaded_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub team: Option<Related>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team_name: Option<String>,
    #[serde(default)]
    pub project: Option<Related>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_name: Option<String>,
    #[serde(default, alias = "topics_list")]
    pub topics: Vec<Topic>,
    #[serde(default)]
    pub status: DocumentStatus,
}

impl Document {
    /// Creates a document with only an id and title set.
    pub fn new(id: i64, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            description: None,
            content_text: None,
            file_name: None,
            original_filename: None,
            file_type: FileType::Other,
            file_size: 0,
            file_url: None,
            uploaded_by_name: None,
            uploaded_at: None,
            team: None,
            team_name: None,
            project: None,
            project_name: None,
            topics: Vec::new(),
            status: DocumentStatus::Pending,
        }
    }

    /// The filename the document was uploaded with, whichever shape carried it.
    pub fn original_filename(&self) -> Option<&str> {
        self.original_filename
            .as_deref()
            .or(self.file_name.as_deref())
    }

    pub fn team_id(&self) -> Option<i64> {
        self.team.as_ref().map(|t| t.id)
    }

    pub fn project_id(&self) -> Option<i64> {
        self.project.as_ref().map(|p| p.id)
    }

    pub fn team_label(&self) -> Option<&str> {
        self.team
            .as_ref()
            .and_then(|t| t.name.as_deref())
            .or(self.team_name.as_deref())
    }

    pub fn project_label(&self) -> Option<&str> {
        self.project
            .as_ref()
            .and_then(|p| p.name.as_deref())
            .or(self.project_name.as_deref())
    }
}
