//! Controller state and the reducer that evolves it.

use serde::Serialize;

use crate::controller::local_filter::filter_documents;
use crate::model::{
    Document, DocumentStats, FilterPatch, FilterSet, Project, SearchStats, Team, Topic,
};

/// Everything a presentation layer renders from.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ControllerState {
    /// Full document list from the last load, plus uploads since.
    pub all_documents: Vec<Document>,
    /// The subset currently shown.
    pub displayed_documents: Vec<Document>,
    pub search_query: String,
    pub filters: FilterSet,
    pub loading: bool,
    /// User-visible error, if any.
    pub error: Option<String>,
    pub api_connected: bool,
    pub suggestions: Vec<String>,
    pub teams: Vec<Team>,
    pub projects: Vec<Project>,
    pub topics: Vec<Topic>,
    pub stats: Option<DocumentStats>,
    pub search_stats: Option<SearchStats>,
}

/// Results of the initial batch load, failures already replaced by neutral values.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InitialData {
    pub documents: Vec<Document>,
    pub teams: Vec<Team>,
    pub projects: Vec<Project>,
    pub topics: Vec<Topic>,
    pub stats: Option<DocumentStats>,
    pub search_stats: Option<SearchStats>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// A full reload began: raises `loading`, drops any error.
    ReloadStarted,
    /// Connectivity probe succeeded.
    Connected,
    /// Connectivity probe failed; carries the user-visible message.
    ConnectionFailed(String),
    Loaded(Box<InitialData>),
    /// A search began: records the query, raises `loading`, drops any error.
    SearchStarted(String),
    /// Replaces the displayed list with a server result.
    ShowResults(Vec<Document>),
    /// Recomputes the displayed list locally from the full list.
    FilterLocally,
    MergeFilters(FilterPatch),
    SetSuggestions(Vec<String>),
    SetSearchStats(SearchStats),
    SetError(String),
    ClearError,
    /// Prepends an uploaded document to both lists.
    DocumentAdded(Box<Document>),
}

/// Applies one action, producing the next state.
pub fn reduce(mut state: ControllerState, action: Action) -> ControllerState {
    match action {
        Action::ReloadStarted => {
            state.loading = true;
            state.error = None;
        }
        Action::Connected => {
            state.api_connected = true;
            state.error = None;
        }
        Action::ConnectionFailed(message) => {
            state.api_connected = false;
            state.error = Some(message);
            state.loading = false;
        }
        Action::Loaded(data) => {
            let data = *data;
            state.displayed_documents = data.documents.clone();
            state.all_documents = data.documents;
            state.teams = data.teams;
            state.projects = data.projects;
            state.topics = data.topics;
            state.stats = data.stats;
            state.search_stats = data.search_stats;
            state.loading = false;
        }
        Action::SearchStarted(query) => {
            state.search_query = query;
            state.loading = true;
            state.error = None;
        }
        Action::ShowResults(documents) => {
            state.displayed_documents = documents;
            state.loading = false;
        }
        Action::FilterLocally => {
            state.displayed_documents =
                filter_documents(&state.all_documents, &state.search_query, &state.filters);
            state.loading = false;
        }
        Action::MergeFilters(patch) => {
            state.filters.merge(&patch);
        }
        Action::SetSuggestions(suggestions) => {
            state.suggestions = suggestions;
        }
        Action::SetSearchStats(stats) => {
            state.search_stats = Some(stats);
        }
        Action::SetError(message) => {
            state.error = Some(message);
            state.loading = false;
        }
        Action::ClearError => {
            state.error = None;
        }
        Action::DocumentAdded(document) => {
            state.displayed_documents.insert(0, (*document).clone());
            state.all_documents.insert(0, *document);
        }
    }
    state
}
