//! Shared test utilities for docsearch integration tests.
//!
//! This module provides:
//! - `ScriptedService`, an in-memory `DocumentService` with scripted replies
//! - `DocumentBuilder` for creating test documents programmatically

pub mod builders;
pub mod scripted;

pub use builders::*;
pub use scripted::*;
