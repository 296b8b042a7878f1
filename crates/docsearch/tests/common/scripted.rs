//! In-memory `DocumentService` with scripted replies and a call log.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;

use docsearch::api::{DocumentService, UploadRequest, UploadResponse};
use docsearch::error::ApiError;
use docsearch::model::{
    Document, DocumentStats, FilterSet, Project, SearchStats, Team, Topic,
};
use docsearch::{ClientConfig, SearchController};

/// A scripted reply: a value to return, or a failure to raise.
#[derive(Debug, Clone)]
pub enum Reply<T> {
    Ok(T),
    Fail {
        status: u16,
        message: Option<String>,
    },
}

impl<T: Clone> Reply<T> {
    /// A 503 without a message body.
    pub fn fail() -> Self {
        Reply::Fail {
            status: 503,
            message: None,
        }
    }

    pub fn fail_with(status: u16, message: &str) -> Self {
        Reply::Fail {
            status,
            message: Some(message.to_string()),
        }
    }

    fn get(&self) -> Result<T, ApiError> {
        match self {
            Reply::Ok(value) => Ok(value.clone()),
            Reply::Fail { status, message } => Err(ApiError::Status {
                status: *status,
                message: message.clone(),
            }),
        }
    }
}

/// One recorded service call.
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Documents,
    BasicSearch { query: String, filters: FilterSet },
    Detail(i64),
    Upload(String),
    Recent,
    DocumentStats,
    Teams,
    Projects,
    Topics,
    Search { query: String, filters: FilterSet },
    Suggestions(String),
    SearchStats,
}

pub struct ScriptedService {
    pub documents: Mutex<Reply<Vec<Document>>>,
    pub basic_search: Mutex<Reply<Vec<Document>>>,
    pub detail: Mutex<Reply<Document>>,
    pub upload: Mutex<Reply<UploadResponse>>,
    pub recent: Mutex<Reply<Vec<Document>>>,
    pub document_stats: Mutex<Reply<DocumentStats>>,
    pub teams: Mutex<Reply<Vec<Team>>>,
    pub projects: Mutex<Reply<Vec<Project>>>,
    pub topics: Mutex<Reply<Vec<Topic>>>,
    /// Advanced search replies keyed by query; `search` answers the rest.
    pub search_by_query: Mutex<HashMap<String, Reply<Vec<Document>>>>,
    pub search: Mutex<Reply<Vec<Document>>>,
    /// Artificial latency for advanced search, keyed by query.
    pub search_delay: Mutex<HashMap<String, Duration>>,
    pub suggestions: Mutex<Reply<Vec<String>>>,
    pub search_stats: Mutex<Reply<SearchStats>>,
    calls: Mutex<Vec<Call>>,
}

impl Default for ScriptedService {
    fn default() -> Self {
        Self {
            documents: Mutex::new(Reply::Ok(vec![])),
            basic_search: Mutex::new(Reply::Ok(vec![])),
            detail: Mutex::new(Reply::fail()),
            upload: Mutex::new(Reply::fail()),
            recent: Mutex::new(Reply::Ok(vec![])),
            document_stats: Mutex::new(Reply::Ok(DocumentStats::default())),
            teams: Mutex::new(Reply::Ok(vec![])),
            projects: Mutex::new(Reply::Ok(vec![])),
            topics: Mutex::new(Reply::Ok(vec![])),
            search_by_query: Mutex::new(HashMap::new()),
            search: Mutex::new(Reply::Ok(vec![])),
            search_delay: Mutex::new(HashMap::new()),
            suggestions: Mutex::new(Reply::Ok(vec![])),
            search_stats: Mutex::new(Reply::Ok(SearchStats::default())),
            calls: Mutex::new(Vec::new()),
        }
    }
}

/// Replaces the reply held in `slot`.
pub fn script<T>(slot: &Mutex<T>, value: T) {
    *slot.lock().unwrap() = value;
}

impl ScriptedService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_documents(documents: Vec<Document>) -> Self {
        let service = Self::default();
        script(&service.documents, Reply::Ok(documents));
        service
    }

    pub fn script_search(&self, query: &str, reply: Reply<Vec<Document>>) {
        self.search_by_query
            .lock()
            .unwrap()
            .insert(query.to_string(), reply);
    }

    pub fn delay_search(&self, query: &str, delay: Duration) {
        self.search_delay
            .lock()
            .unwrap()
            .insert(query.to_string(), delay);
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn clear_calls(&self) {
        self.calls.lock().unwrap().clear();
    }

    pub fn count(&self, predicate: impl Fn(&Call) -> bool) -> usize {
        self.calls.lock().unwrap().iter().filter(|c| predicate(c)).count()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl DocumentService for ScriptedService {
    async fn list_documents(
        &self,
        search: Option<&str>,
        filters: &FilterSet,
    ) -> Result<Vec<Document>, ApiError> {
        match search {
            Some(query) => {
                self.record(Call::BasicSearch {
                    query: query.to_string(),
                    filters: filters.clone(),
                });
                self.basic_search.lock().unwrap().get()
            }
            None => {
                self.record(Call::Documents);
                self.documents.lock().unwrap().get()
            }
        }
    }

    async fn get_document(&self, id: i64) -> Result<Document, ApiError> {
        self.record(Call::Detail(id));
        self.detail.lock().unwrap().get()
    }

    async fn upload_document(&self, request: UploadRequest) -> Result<UploadResponse, ApiError> {
        self.record(Call::Upload(request.file_name.clone()));
        self.upload.lock().unwrap().get()
    }

    async fn recent_documents(&self) -> Result<Vec<Document>, ApiError> {
        self.record(Call::Recent);
        self.recent.lock().unwrap().get()
    }

    async fn document_stats(&self) -> Result<DocumentStats, ApiError> {
        self.record(Call::DocumentStats);
        self.document_stats.lock().unwrap().get()
    }

    async fn teams(&self) -> Result<Vec<Team>, ApiError> {
        self.record(Call::Teams);
        self.teams.lock().unwrap().get()
    }

    async fn projects(&self) -> Result<Vec<Project>, ApiError> {
        self.record(Call::Projects);
        self.projects.lock().unwrap().get()
    }

    async fn topics(&self) -> Result<Vec<Topic>, ApiError> {
        self.record(Call::Topics);
        self.topics.lock().unwrap().get()
    }

    async fn search(&self, query: &str, filters: &FilterSet) -> Result<Vec<Document>, ApiError> {
        self.record(Call::Search {
            query: query.to_string(),
            filters: filters.clone(),
        });

        let delay = self.search_delay.lock().unwrap().get(query).copied();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        let scripted = self.search_by_query.lock().unwrap().get(query).cloned();
        match scripted {
            Some(reply) => reply.get(),
            None => self.search.lock().unwrap().get(),
        }
    }

    async fn suggestions(&self, prefix: &str) -> Result<Vec<String>, ApiError> {
        self.record(Call::Suggestions(prefix.to_string()));
        self.suggestions.lock().unwrap().get()
    }

    async fn search_stats(&self) -> Result<SearchStats, ApiError> {
        self.record(Call::SearchStats);
        self.search_stats.lock().unwrap().get()
    }
}

/// A controller over `service` that has already connected.
pub async fn connected_controller(service: &Arc<ScriptedService>) -> SearchController {
    let controller = SearchController::new(service.clone(), ClientConfig::default());
    assert!(controller.connect().await, "scripted service should connect");
    service.clear_calls();
    controller
}
