//! Domain and wire types for the document/search service.
//!
//! Every response shape the server emits is normalized into these types at
//! the service boundary, so controller state only ever holds one canonical
//! representation.

pub mod catalog;
pub mod document;
pub mod filter;
pub mod payload;
pub mod stats;

pub use catalog::{projects_for_team, Project, Team, Topic};
pub use document::{Document, DocumentStatus, FileType, Related};
pub use filter::{FilterPatch, FilterSet};
pub use payload::ListPayload;
pub use stats::{DocumentStats, FacetCount, SearchFilters, SearchStats};
