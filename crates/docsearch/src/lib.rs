pub mod api;
pub mod config;
pub mod controller;
pub mod error;
pub mod format;
pub mod model;
pub mod sanitize;

pub use api::{DocumentService, HttpDocumentService, UploadRequest, UploadResponse};
pub use config::{load_config, ClientConfig};
pub use controller::{ControllerState, SearchController};
pub use error::{ApiError, ConfigError, ControllerError, DocsearchError, Result};
pub use model::{Document, FileType, FilterPatch, FilterSet};
