//! Lookup entities used to populate filter pickers.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub id: i64,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: i64,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Id of the owning team.
    pub team: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topic {
    pub id: i64,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Narrows a project list to those owned by the selected team.
///
/// This only shapes what a picker offers. A project/team mismatch in an
/// applied filter is never rejected.
pub fn projects_for_team<'a>(projects: &'a [Project], team: Option<&str>) -> Vec<&'a Project> {
    match team.filter(|t| !t.is_empty()) {
        None => projects.iter().collect(),
        Some(team) => projects
            .iter()
            .filter(|p| p.team.to_string() == team)
            .collect(),
    }
}
