//! Search/filter state controller.
//!
//! The controller owns the canonical document list, the active query and
//! filters, and the displayed subset. Every state change is an [`Action`]
//! applied by [`reduce`] through one serialized update channel.

pub mod local_filter;
pub mod search;
pub mod state;

pub use local_filter::{filter_documents, matches_filters, matches_query};
pub use search::{SearchController, SEARCH_UNAVAILABLE, UPLOAD_FAILED};
pub use state::{reduce, Action, ControllerState, InitialData};
