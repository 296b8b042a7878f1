//! Remote document/search service.
//!
//! [`DocumentService`] is the seam the controller talks through;
//! [`HttpDocumentService`] is the reqwest-backed implementation.

pub mod http;
pub mod service;
pub mod upload;

pub use http::HttpDocumentService;
pub use service::DocumentService;
pub use upload::{UploadRequest, UploadResponse};
