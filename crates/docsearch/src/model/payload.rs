//! Shape-tolerant decoding of list responses.

use serde::Deserialize;

/// A list response: either a bare JSON array or an object wrapping the
/// array in `results`.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ListPayload<T> {
    Wrapped { results: Vec<T> },
    Bare(Vec<T>),
}

impl<T> ListPayload<T> {
    pub fn into_vec(self) -> Vec<T> {
        match self {
            ListPayload::Wrapped { results } => results,
            ListPayload::Bare(items) => items,
        }
    }
}

impl<T> From<ListPayload<T>> for Vec<T> {
    fn from(payload: ListPayload<T>) -> Self {
        payload.into_vec()
    }
}
