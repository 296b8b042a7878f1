//! Builder patterns for creating test data programmatically.

#![allow(dead_code)]

use docsearch::model::{Document, DocumentStatus, FileType, Project, Related, Team, Topic};

/// Builder for creating `Document` instances.
pub struct DocumentBuilder {
    doc: Document,
}

impl DocumentBuilder {
    /// Create a new builder with only id and title set.
    pub fn new(id: i64, title: &str) -> Self {
        Self {
            doc: Document::new(id, title),
        }
    }

    pub fn description(mut self, description: &str) -> Self {
        self.doc.description = Some(description.to_string());
        self
    }

    pub fn content(mut self, content: &str) -> Self {
        self.doc.content_text = Some(content.to_string());
        self
    }

    pub fn file_name(mut self, name: &str) -> Self {
        self.doc.file_name = Some(name.to_string());
        self
    }

    pub fn file_type(mut self, file_type: FileType) -> Self {
        self.doc.file_type = file_type;
        self
    }

    pub fn team(mut self, id: i64, name: &str) -> Self {
        self.doc.team = Some(Related {
            id,
            name: Some(name.to_string()),
        });
        self
    }

    pub fn project(mut self, id: i64) -> Self {
        self.doc.project = Some(Related { id, name: None });
        self
    }

    pub fn topic(mut self, id: i64, name: &str) -> Self {
        self.doc.topics.push(Topic {
            id,
            name: name.to_string(),
            description: None,
        });
        self
    }

    pub fn status(mut self, status: DocumentStatus) -> Self {
        self.doc.status = status;
        self
    }

    pub fn build(self) -> Document {
        self.doc
    }
}

/// `count` plain documents with ids starting at 1.
pub fn numbered_documents(count: i64) -> Vec<Document> {
    (1..=count)
        .map(|i| DocumentBuilder::new(i, &format!("Document {}", i)).build())
        .collect()
}

pub fn team(id: i64, name: &str) -> Team {
    Team {
        id,
        name: name.to_string(),
        description: None,
    }
}

pub fn project(id: i64, name: &str, team: i64) -> Project {
    Project {
        id,
        name: name.to_string(),
        description: None,
        team,
        team_name: None,
    }
}

pub fn ids(documents: &[Document]) -> Vec<i64> {
    documents.iter().map(|d| d.id).collect()
}
