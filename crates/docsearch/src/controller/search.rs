use std::future::Future;
use std::sync::Arc;

use log::{debug, info, warn};
use tokio::sync::watch;
use tracing::Instrument;

use crate::api::{DocumentService, UploadRequest, UploadResponse};
use crate::config::ClientConfig;
use crate::controller::state::{reduce, Action, ControllerState, InitialData};
use crate::error::{ApiError, ControllerError};
use crate::model::{projects_for_team, Document, FileType, FilterPatch, FilterSet, Project};
use crate::sanitize::redact_url;

/// Shown when both advanced and basic search fail.
pub const SEARCH_UNAVAILABLE: &str = "Search is temporarily unavailable. Please try again.";

/// Shown when an upload fails without a server-provided message.
pub const UPLOAD_FAILED: &str = "Failed to upload document";

/// Resolves a fallible fetch to its value, or to the type's neutral value on failure.
async fn or_neutral<T, F>(what: &str, fetch: F) -> T
where
    T: Default,
    F: Future<Output = Result<T, ApiError>>,
{
    match fetch.await {
        Ok(value) => value,
        Err(e) => {
            warn!("Failed to load {}: {}", what, e);
            T::default()
        }
    }
}

/// Search/filter state controller.
///
/// Owns the canonical document list, the active query and filters, and the
/// displayed subset. Construct one per session and share it by `Arc`;
/// presentation layers read state through [`snapshot`](Self::snapshot) or
/// [`subscribe`](Self::subscribe) and call the intent methods.
///
/// Overlapping searches are not cancelled: each result is applied when it
/// arrives, so a slow earlier search can replace the result of a faster later
/// one.
pub struct SearchController {
    service: Arc<dyn DocumentService>,
    config: ClientConfig,
    state: watch::Sender<ControllerState>,
}

impl SearchController {
    pub fn new(service: Arc<dyn DocumentService>, config: ClientConfig) -> Self {
        let (state, _) = watch::channel(ControllerState::default());
        Self {
            service,
            config,
            state,
        }
    }

    /// A copy of the current state.
    pub fn snapshot(&self) -> ControllerState {
        self.state.borrow().clone()
    }

    /// Receives every state change from now on.
    pub fn subscribe(&self) -> watch::Receiver<ControllerState> {
        self.state.subscribe()
    }

    fn dispatch(&self, action: Action) {
        self.state.send_modify(|state| {
            let current = std::mem::take(state);
            *state = reduce(current, action);
        });
    }

    fn is_connected(&self) -> bool {
        self.state.borrow().api_connected
    }

    /// Probes the service and, if it answers, loads the initial data.
    ///
    /// Returns whether the service is reachable. On failure the controller
    /// makes no further remote calls until `connect` or `reload` is called again.
    pub async fn connect(&self) -> bool {
        let span = tracing::info_span!("controller.connect");
        async {
            match self.service.teams().await {
                Ok(_) => {
                    info!("Connected to document service");
                    self.dispatch(Action::Connected);
                    self.load_all().await;
                    true
                }
                Err(e) => {
                    warn!("Connectivity probe failed: {}", e);
                    self.dispatch(Action::ConnectionFailed(format!(
                        "Cannot connect to server. Make sure the document service is running at {}",
                        redact_url(&self.config.api_base_url)
                    )));
                    false
                }
            }
        }
        .instrument(span)
        .await
    }

    /// Retries the connection; identical to [`connect`](Self::connect).
    pub async fn retry_connection(&self) -> bool {
        self.connect().await
    }

    /// Reloads all data, or retries the connection if it is down.
    pub async fn reload(&self) {
        if self.is_connected() {
            self.load_all().await;
        } else {
            self.connect().await;
        }
    }

    async fn load_all(&self) {
        self.dispatch(Action::ReloadStarted);

        let service = &self.service;
        let no_filters = FilterSet::default();
        let (documents, teams, projects, topics, stats, search_stats) = tokio::join!(
            or_neutral("documents", service.list_documents(None, &no_filters)),
            or_neutral("teams", service.teams()),
            or_neutral("projects", service.projects()),
            or_neutral("topics", service.topics()),
            or_neutral("document stats", async {
                service.document_stats().await.map(Some)
            }),
            or_neutral("search stats", async {
                service.search_stats().await.map(Some)
            }),
        );

        debug!(
            "Loaded {} documents, {} teams, {} projects, {} topics",
            documents.len(),
            teams.len(),
            projects.len(),
            topics.len()
        );
        self.dispatch(Action::Loaded(Box::new(InitialData {
            documents,
            teams,
            projects,
            topics,
            stats,
            search_stats,
        })));
    }

    /// Runs a search for `query` under the current filters.
    ///
    /// An empty query, or a disconnected controller, filters the full list
    /// locally. Otherwise advanced search is tried, then basic search; if
    /// both fail an error is shown and the displayed list is left as it was.
    pub async fn search(&self, query: &str) {
        self.dispatch(Action::SearchStarted(query.to_string()));

        if query.is_empty() || !self.is_connected() {
            self.dispatch(Action::FilterLocally);
            return;
        }

        let filters = self.state.borrow().filters.clone();
        self.remote_search(query, &filters).await;
    }

    /// Merges `patch` into the active filters and re-derives the displayed list.
    pub async fn apply_filters(&self, patch: FilterPatch) {
        self.dispatch(Action::MergeFilters(patch));

        let (connected, query, filters) = {
            let state = self.state.borrow();
            (
                state.api_connected,
                state.search_query.clone(),
                state.filters.clone(),
            )
        };

        if connected && !query.is_empty() {
            self.dispatch(Action::SearchStarted(query.clone()));
            self.remote_search(&query, &filters).await;
        } else {
            self.dispatch(Action::FilterLocally);
        }
    }

    async fn remote_search(&self, query: &str, filters: &FilterSet) {
        let span = tracing::info_span!("controller.search", query_len = query.len());
        async {
            match self.service.search(query, filters).await {
                Ok(documents) => {
                    debug!("Advanced search returned {} documents", documents.len());
                    self.dispatch(Action::ShowResults(documents));
                    return;
                }
                Err(e) => warn!("Advanced search failed, falling back to basic search: {}", e),
            }

            match self.service.list_documents(Some(query), filters).await {
                Ok(documents) => {
                    debug!("Basic search returned {} documents", documents.len());
                    self.dispatch(Action::ShowResults(documents));
                }
                Err(e) => {
                    warn!("Basic search also failed: {}", e);
                    self.dispatch(Action::SetError(SEARCH_UNAVAILABLE.to_string()));
                }
            }
        }
        .instrument(span)
        .await
    }

    /// Fetches suggestions for a partially typed query.
    ///
    /// Prefixes shorter than `suggestion_min_chars` clear the suggestions
    /// without a request. Failures are logged and leave suggestions unchanged.
    pub async fn get_suggestions(&self, prefix: &str) {
        if prefix.chars().count() < self.config.suggestion_min_chars {
            self.dispatch(Action::SetSuggestions(Vec::new()));
            return;
        }
        if !self.is_connected() {
            debug!("Skipping suggestions while disconnected");
            return;
        }

        match self.service.suggestions(prefix).await {
            Ok(suggestions) => self.dispatch(Action::SetSuggestions(suggestions)),
            Err(e) => warn!("Failed to get search suggestions: {}", e),
        }
    }

    /// Refreshes search statistics; failures are logged only.
    pub async fn refresh_search_stats(&self) {
        if !self.is_connected() {
            return;
        }
        match self.service.search_stats().await {
            Ok(stats) => self.dispatch(Action::SetSearchStats(stats)),
            Err(e) => warn!("Failed to get search stats: {}", e),
        }
    }

    /// Uploads a document and prepends it to both lists, whatever the active
    /// filters are.
    ///
    /// On failure the error is shown and also returned so the caller can
    /// keep its upload form open for a retry.
    pub async fn upload(&self, request: UploadRequest) -> Result<Document, ControllerError> {
        if !self.is_connected() {
            return Err(ControllerError::Disconnected);
        }

        let span = tracing::info_span!("controller.upload", file_name = %request.file_name);
        async {
            match self.upload_and_resolve(request).await {
                Ok(document) => {
                    info!("Uploaded document {} ({})", document.id, document.title);
                    self.dispatch(Action::DocumentAdded(Box::new(document.clone())));
                    Ok(document)
                }
                Err(e) => {
                    warn!("Upload failed: {}", e);
                    let message = e
                        .server_message()
                        .map(str::to_string)
                        .unwrap_or_else(|| UPLOAD_FAILED.to_string());
                    self.dispatch(Action::SetError(message));
                    Err(ControllerError::Upload(e))
                }
            }
        }
        .instrument(span)
        .await
    }

    async fn upload_and_resolve(&self, request: UploadRequest) -> Result<Document, ApiError> {
        let mut placeholder = Document::new(0, request.title.clone());
        placeholder.description = Some(request.description.clone()).filter(|d| !d.is_empty());
        placeholder.file_type = std::path::Path::new(&request.file_name)
            .extension()
            .and_then(|e| e.to_str())
            .map(FileType::from_extension)
            .unwrap_or_default();
        placeholder.file_size = request.bytes.len() as u64;
        placeholder.file_name = Some(request.file_name.clone());

        match self.service.upload_document(request).await? {
            UploadResponse::Document(document) => Ok(*document),
            UploadResponse::Accepted { document_id, .. } => {
                match self.service.get_document(document_id).await {
                    Ok(document) => Ok(document),
                    Err(e) => {
                        // Stored server-side but not fetchable; fall back to the submitted metadata.
                        warn!(
                            "Uploaded document {} could not be fetched: {}",
                            document_id, e
                        );
                        placeholder.id = document_id;
                        Ok(placeholder)
                    }
                }
            }
        }
    }

    /// Clears the user-visible error. Nothing is retried.
    pub fn clear_error(&self) {
        self.dispatch(Action::ClearError);
    }

    /// Fetches one document without touching controller state.
    pub async fn document(&self, id: i64) -> Result<Document, ApiError> {
        self.service.get_document(id).await
    }

    /// Fetches recently accessed documents without touching controller state.
    pub async fn recent_documents(&self) -> Result<Vec<Document>, ApiError> {
        self.service.recent_documents().await
    }

    /// Projects a picker should offer once `team` is selected.
    pub fn projects_for_team(&self, team: Option<&str>) -> Vec<Project> {
        let state = self.state.borrow();
        projects_for_team(&state.projects, team)
            .into_iter()
            .cloned()
            .collect()
    }
}
