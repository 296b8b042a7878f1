//! Filter selections and partial filter updates.

use serde::{Deserialize, Serialize};

use super::document::FileType;

/// Active filter selections. `None` means no constraint from that field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterSet {
    pub team: Option<String>,
    pub project: Option<String>,
    pub file_type: Option<FileType>,
    pub topic: Option<String>,
}

impl FilterSet {
    /// Applies a patch in place. Keys the patch does not mention keep their value.
    pub fn merge(&mut self, patch: &FilterPatch) {
        if let Some(team) = &patch.team {
            self.team = team.clone();
        }
        if let Some(project) = &patch.project {
            self.project = project.clone();
        }
        if let Some(file_type) = patch.file_type {
            self.file_type = file_type;
        }
        if let Some(topic) = &patch.topic {
            self.topic = topic.clone();
        }
    }

    pub fn merged(&self, patch: &FilterPatch) -> FilterSet {
        let mut next = self.clone();
        next.merge(patch);
        next
    }

    /// Query parameters understood by the advanced search endpoint.
    /// Empty selections are omitted.
    pub fn search_params(&self) -> Vec<(&'static str, String)> {
        self.params("topic")
    }

    /// Query parameters understood by the document list endpoint, which
    /// names the topic filter after the many-to-many field.
    pub fn list_params(&self) -> Vec<(&'static str, String)> {
        self.params("topics")
    }

    fn params(&self, topic_key: &'static str) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if let Some(team) = &self.team {
            params.push(("team", team.clone()));
        }
        if let Some(project) = &self.project {
            params.push(("project", project.clone()));
        }
        if let Some(file_type) = self.file_type {
            params.push(("file_type", file_type.as_str().to_string()));
        }
        if let Some(topic) = &self.topic {
            params.push((topic_key, topic.clone()));
        }
        params
    }
}

/// A partial update to a [`FilterSet`].
///
/// Each key is either left alone (`None`), cleared (`Some(None)`) or set
/// (`Some(Some(value))`). Setting a key to an empty string clears it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterPatch {
    pub team: Option<Option<String>>,
    pub project: Option<Option<String>>,
    pub file_type: Option<Option<FileType>>,
    pub topic: Option<Option<String>>,
}

fn non_empty(value: String) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

impl FilterPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn team(mut self, id: impl Into<String>) -> Self {
        self.team = Some(non_empty(id.into()));
        self
    }

    pub fn clear_team(mut self) -> Self {
        self.team = Some(None);
        self
    }

    pub fn project(mut self, id: impl Into<String>) -> Self {
        self.project = Some(non_empty(id.into()));
        self
    }

    pub fn clear_project(mut self) -> Self {
        self.project = Some(None);
        self
    }

    pub fn file_type(mut self, file_type: FileType) -> Self {
        self.file_type = Some(Some(file_type));
        self
    }

    pub fn clear_file_type(mut self) -> Self {
        self.file_type = Some(None);
        self
    }

    pub fn topic(mut self, id: impl Into<String>) -> Self {
        self.topic = Some(non_empty(id.into()));
        self
    }

    pub fn clear_topic(mut self) -> Self {
        self.topic = Some(None);
        self
    }

    /// True when the patch touches no key.
    pub fn is_empty(&self) -> bool {
        self.team.is_none()
            && self.project.is_none()
            && self.file_type.is_none()
            && self.topic.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_keeps_unspecified_keys() {
        let mut filters = FilterSet::default();
        filters.merge(&FilterPatch::new().team("1").file_type(FileType::Pdf));
        filters.merge(&FilterPatch::new().project("4"));

        assert_eq!(filters.team.as_deref(), Some("1"));
        assert_eq!(filters.project.as_deref(), Some("4"));
        assert_eq!(filters.file_type, Some(FileType::Pdf));
        assert!(filters.topic.is_none());
    }

    #[test]
    fn test_merge_clears() {
        let mut filters = FilterSet::default();
        filters.merge(&FilterPatch::new().team("1").topic("2"));
        filters.merge(&FilterPatch::new().clear_team().topic(""));
        assert_eq!(filters, FilterSet::default());
    }

    #[test]
    fn test_merge_is_idempotent() {
        let patch = FilterPatch::new().team("3").file_type(FileType::Docx);
        let once = FilterSet::default().merged(&patch);
        let twice = once.merged(&patch);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_project_not_checked_against_team() {
        let filters = FilterSet::default().merged(&FilterPatch::new().team("1").project("99"));
        assert_eq!(filters.project.as_deref(), Some("99"));
    }

    #[test]
    fn test_search_params_omit_empty() {
        let filters = FilterSet::default().merged(&FilterPatch::new().team("2").topic("5"));
        assert_eq!(
            filters.search_params(),
            vec![("team", "2".to_string()), ("topic", "5".to_string())]
        );
        assert_eq!(
            filters.list_params(),
            vec![("team", "2".to_string()), ("topics", "5".to_string())]
        );
        assert!(FilterSet::default().search_params().is_empty());
    }

    #[test]
    fn test_file_type_param_uses_wire_code() {
        let filters = FilterSet::default().merged(&FilterPatch::new().file_type(FileType::Image));
        assert_eq!(
            filters.search_params(),
            vec![("file_type", "IMAGE".to_string())]
        );
    }

    #[test]
    fn test_patch_is_empty() {
        assert!(FilterPatch::new().is_empty());
        assert!(!FilterPatch::new().clear_topic().is_empty());
        assert!(!FilterPatch::new().team("").is_empty());
    }
}
