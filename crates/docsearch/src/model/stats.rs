//! Aggregate counters shown alongside the document list.

use serde::{Deserialize, Serialize};

/// One bucket of a grouped count.
///
/// The server names the key columns after the grouped field
/// (`team__name`, `file_type`, `topics__id`, ...); all of them land here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FacetCount {
    #[serde(
        default,
        alias = "team__id",
        alias = "project__id",
        alias = "topics__id"
    )]
    pub id: Option<i64>,
    #[serde(
        default,
        alias = "team__name",
        alias = "project__name",
        alias = "topics__name",
        alias = "file_type",
        alias = "status"
    )]
    pub label: Option<String>,
    pub count: u64,
}

/// Response of the document stats endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DocumentStats {
    #[serde(default)]
    pub total_documents: u64,
    #[serde(default)]
    pub total_size_mb: f64,
    #[serde(default)]
    pub by_file_type: Vec<FacetCount>,
    #[serde(default)]
    pub by_team: Vec<FacetCount>,
    #[serde(default)]
    pub by_status: Vec<FacetCount>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchFilters {
    #[serde(default)]
    pub teams: Vec<FacetCount>,
    #[serde(default)]
    pub projects: Vec<FacetCount>,
    #[serde(default)]
    pub file_types: Vec<FacetCount>,
    #[serde(default)]
    pub topics: Vec<FacetCount>,
}

/// Response of the search stats endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchStats {
    #[serde(default)]
    pub total_documents: u64,
    #[serde(default)]
    pub searchable_documents: u64,
    #[serde(default)]
    pub search_engine: Option<String>,
    #[serde(default)]
    pub available_filters: SearchFilters,
}
