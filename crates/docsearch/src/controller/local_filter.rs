//! Client-side filtering over the in-memory document list.
//!
//! Used whenever remote search is unavailable or unnecessary. The result is
//! a pure function of its inputs.

use crate::model::{Document, FilterSet};

/// Case-insensitive substring match of `query` against title, description,
/// extracted content and original filename. An empty query matches everything.
pub fn matches_query(doc: &Document, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let needle = query.to_lowercase();
    let contains = |field: Option<&str>| {
        field
            .map(|value| value.to_lowercase().contains(&needle))
            .unwrap_or(false)
    };

    contains(Some(doc.title.as_str()))
        || contains(doc.description.as_deref())
        || contains(doc.content_text.as_deref())
        || contains(doc.original_filename())
}

/// All active filter predicates, ANDed. Ids compare in their string form.
pub fn matches_filters(doc: &Document, filters: &FilterSet) -> bool {
    if let Some(team) = &filters.team {
        if doc.team_id().map(|id| id.to_string()).as_ref() != Some(team) {
            return false;
        }
    }
    if let Some(project) = &filters.project {
        if doc.project_id().map(|id| id.to_string()).as_ref() != Some(project) {
            return false;
        }
    }
    if let Some(file_type) = filters.file_type {
        if doc.file_type != file_type {
            return false;
        }
    }
    if let Some(topic) = &filters.topic {
        if !doc.topics.iter().any(|t| &t.id.to_string() == topic) {
            return false;
        }
    }
    true
}

/// Documents matching both the text query and the filters, in input order.
pub fn filter_documents(documents: &[Document], query: &str, filters: &FilterSet) -> Vec<Document> {
    documents
        .iter()
        .filter(|doc| matches_query(doc, query) && matches_filters(doc, filters))
        .cloned()
        .collect()
}
