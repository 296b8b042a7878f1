use async_trait::async_trait;

use crate::api::upload::{UploadRequest, UploadResponse};
use crate::error::ApiError;
use crate::model::{Document, DocumentStats, FilterSet, Project, SearchStats, Team, Topic};

/// Operations offered by the remote document/search service.
///
/// List-returning methods always yield the normalized `Vec`, whatever shape
/// the server used on the wire.
#[async_trait]
pub trait DocumentService: Send + Sync {
    /// Document list, optionally narrowed by a substring `search` and filters.
    async fn list_documents(
        &self,
        search: Option<&str>,
        filters: &FilterSet,
    ) -> Result<Vec<Document>, ApiError>;

    async fn get_document(&self, id: i64) -> Result<Document, ApiError>;

    async fn upload_document(&self, request: UploadRequest) -> Result<UploadResponse, ApiError>;

    async fn recent_documents(&self) -> Result<Vec<Document>, ApiError>;

    async fn document_stats(&self) -> Result<DocumentStats, ApiError>;

    async fn teams(&self) -> Result<Vec<Team>, ApiError>;

    async fn projects(&self) -> Result<Vec<Project>, ApiError>;

    async fn topics(&self) -> Result<Vec<Topic>, ApiError>;

    /// Server-side search across content and metadata.
    async fn search(&self, query: &str, filters: &FilterSet) -> Result<Vec<Document>, ApiError>;

    async fn suggestions(&self, prefix: &str) -> Result<Vec<String>, ApiError>;

    async fn search_stats(&self) -> Result<SearchStats, ApiError>;
}
