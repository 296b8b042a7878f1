//! reqwest implementation of [`DocumentService`].

use async_trait::async_trait;
use log::{debug, warn};
use reqwest::{Client, Response, Url};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::Instrument;

use crate::api::service::DocumentService;
use crate::api::upload::{UploadRequest, UploadResponse};
use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::model::{
    Document, DocumentStats, FilterSet, ListPayload, Project, SearchStats, Team, Topic,
};
use crate::sanitize::{redact_url, truncate_body};

const DOCUMENTS_PATH: &str = "documents/documents/";
const UPLOAD_PATH: &str = "documents/documents/upload/";
const RECENT_PATH: &str = "documents/documents/recent/";
const DOCUMENT_STATS_PATH: &str = "documents/documents/stats/";
const TEAMS_PATH: &str = "documents/teams/";
const PROJECTS_PATH: &str = "documents/projects/";
const TOPICS_PATH: &str = "documents/topics/";
const SEARCH_PATH: &str = "search/";
const SUGGESTIONS_PATH: &str = "search/suggestions/";
const SEARCH_STATS_PATH: &str = "search/stats/";

#[derive(Debug, Deserialize)]
struct SuggestionsResponse {
    #[serde(default)]
    suggestions: Vec<String>,
}

/// Extracts the human-readable message from an error body, if the server sent one.
fn server_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    ["error", "detail"]
        .iter()
        .find_map(|key| value.get(key).and_then(|v| v.as_str()))
        .map(str::to_string)
}

/// Client for the document/search HTTP API.
///
/// No request timeout is configured; a request that never completes never
/// resolves.
#[derive(Clone)]
pub struct HttpDocumentService {
    client: Client,
    base_url: Url,
}

impl HttpDocumentService {
    pub fn new(config: &ClientConfig) -> Result<Self, ApiError> {
        let client = Client::builder().user_agent(&config.user_agent).build()?;
        Self::with_client(client, &config.api_base_url)
    }

    /// Uses a caller-supplied reqwest client.
    pub fn with_client(client: Client, base_url: &str) -> Result<Self, ApiError> {
        // Url::join drops the last path segment unless the base ends with '/'.
        let normalized = if base_url.ends_with('/') {
            base_url.to_string()
        } else {
            format!("{}/", base_url)
        };
        let base_url = Url::parse(&normalized).map_err(|e| ApiError::InvalidUrl {
            url: redact_url(base_url),
            reason: e.to_string(),
        })?;

        debug!("Document service at {}", redact_url(base_url.as_str()));
        Ok(Self { client, base_url })
    }

    fn endpoint(&self, path: &str) -> Result<Url, ApiError> {
        self.base_url
            .join(path.trim_start_matches('/'))
            .map_err(|e| ApiError::InvalidUrl {
                url: format!("{}{}", redact_url(self.base_url.as_str()), path),
                reason: e.to_string(),
            })
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, String)],
    ) -> Result<T, ApiError> {
        let url = self.endpoint(path)?;
        let span = tracing::info_span!("api.get", path = %path);
        async move {
            let response = self.client.get(url).query(params).send().await?;
            read_json(response).await
        }
        .instrument(span)
        .await
    }

    async fn get_list<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, String)],
    ) -> Result<Vec<T>, ApiError> {
        let payload: ListPayload<T> = self.get_json(path, params).await?;
        Ok(payload.into_vec())
    }
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let status = response.status();
    let body = response.text().await?;

    if !status.is_success() {
        warn!("API returned {}: {}", status, truncate_body(&body));
        return Err(ApiError::Status {
            status: status.as_u16(),
            message: server_message(&body),
        });
    }

    Ok(serde_json::from_str(&body)?)
}

#[async_trait]
impl DocumentService for HttpDocumentService {
    async fn list_documents(
        &self,
        search: Option<&str>,
        filters: &FilterSet,
    ) -> Result<Vec<Document>, ApiError> {
        let mut params = Vec::new();
        if let Some(search) = search.filter(|s| !s.is_empty()) {
            params.push(("search", search.to_string()));
        }
        params.extend(filters.list_params());
        self.get_list(DOCUMENTS_PATH, &params).await
    }

    async fn get_document(&self, id: i64) -> Result<Document, ApiError> {
        self.get_json(&format!("{}{}/", DOCUMENTS_PATH, id), &[])
            .await
    }

    async fn upload_document(&self, request: UploadRequest) -> Result<UploadResponse, ApiError> {
        let url = self.endpoint(UPLOAD_PATH)?;
        let span = tracing::info_span!(
            "api.upload",
            file_name = %request.file_name,
            size = request.bytes.len()
        );
        async move {
            let form = request.into_form()?;
            let response = self.client.post(url).multipart(form).send().await?;
            read_json(response).await
        }
        .instrument(span)
        .await
    }

    async fn recent_documents(&self) -> Result<Vec<Document>, ApiError> {
        self.get_list(RECENT_PATH, &[]).await
    }

    async fn document_stats(&self) -> Result<DocumentStats, ApiError> {
        self.get_json(DOCUMENT_STATS_PATH, &[]).await
    }

    async fn teams(&self) -> Result<Vec<Team>, ApiError> {
        self.get_list(TEAMS_PATH, &[]).await
    }

    async fn projects(&self) -> Result<Vec<Project>, ApiError> {
        self.get_list(PROJECTS_PATH, &[]).await
    }

    async fn topics(&self) -> Result<Vec<Topic>, ApiError> {
        self.get_list(TOPICS_PATH, &[]).await
    }

    async fn search(&self, query: &str, filters: &FilterSet) -> Result<Vec<Document>, ApiError> {
        let mut params = vec![("q", query.to_string())];
        params.extend(filters.search_params());
        self.get_list(SEARCH_PATH, &params).await
    }

    async fn suggestions(&self, prefix: &str) -> Result<Vec<String>, ApiError> {
        let response: SuggestionsResponse = self
            .get_json(SUGGESTIONS_PATH, &[("q", prefix.to_string())])
            .await?;
        Ok(response.suggestions)
    }

    async fn search_stats(&self) -> Result<SearchStats, ApiError> {
        self.get_json(SEARCH_STATS_PATH, &[]).await
    }
}
