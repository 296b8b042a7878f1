//! Upload payload construction.

use std::path::Path;

use reqwest::multipart::{Form, Part};
use serde::Deserialize;

use crate::error::ApiError;
use crate::model::Document;

/// A document upload: file contents plus the metadata fields of the form.
#[derive(Debug, Clone)]
pub struct UploadRequest {
    pub file_name: String,
    pub bytes: Vec<u8>,
    pub title: String,
    pub description: String,
    pub team: Option<String>,
    pub project: Option<String>,
}

/// Strips the last extension: `q3-report.final.pdf` → `q3-report.final`.
fn title_from_file_name(file_name: &str) -> String {
    match file_name.rfind('.') {
        Some(dot) if dot > 0 => file_name[..dot].to_string(),
        _ => file_name.to_string(),
    }
}

impl UploadRequest {
    /// Creates a request whose title defaults to the file name without its extension.
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        let file_name = file_name.into();
        Self {
            title: title_from_file_name(&file_name),
            file_name,
            bytes,
            description: String::new(),
            team: None,
            project: None,
        }
    }

    /// Reads the file at `path` into a new request.
    pub async fn from_path(path: impl AsRef<Path>) -> Result<Self, ApiError> {
        let path = path.as_ref();
        let bytes = tokio::fs::read(path)
            .await
            .map_err(|e| ApiError::ReadFile {
                path: path.to_path_buf(),
                source: e,
            })?;
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| "upload".to_string());
        Ok(Self::new(file_name, bytes))
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        let title = title.into();
        if !title.is_empty() {
            self.title = title;
        }
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn team(mut self, team: impl Into<String>) -> Self {
        self.team = Some(team.into()).filter(|t: &String| !t.is_empty());
        self
    }

    pub fn project(mut self, project: impl Into<String>) -> Self {
        self.project = Some(project.into()).filter(|p: &String| !p.is_empty());
        self
    }

    /// Builds the multipart body: `file`, `title`, `description`, and
    /// `team` / `project` only when selected.
    pub fn into_form(self) -> Result<Form, ApiError> {
        let mime = mime_guess::from_path(&self.file_name).first_or_octet_stream();
        let part = Part::bytes(self.bytes)
            .file_name(self.file_name)
            .mime_str(mime.essence_str())?;

        let mut form = Form::new()
            .part("file", part)
            .text("title", self.title)
            .text("description", self.description);
        if let Some(team) = self.team {
            form = form.text("team", team);
        }
        if let Some(project) = self.project {
            form = form.text("project", project);
        }
        Ok(form)
    }
}

/// What the upload endpoint answers with: either the stored document or an
/// acknowledgement carrying only its id.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum UploadResponse {
    Document(Box<Document>),
    Accepted {
        document_id: i64,
        #[serde(default)]
        message: Option<String>,
        #[serde(default)]
        status: Option<String>,
    },
}
