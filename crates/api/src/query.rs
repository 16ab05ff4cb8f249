//! Query parameters for the project list endpoint.
//!
//! Filtering happens here, over the store's full listing; the store itself
//! only ever returns everything.

use projectdesk_core::project::{Project, ProjectPriority, ProjectStatus};
use serde::Deserialize;

use crate::error::AppError;

/// `?search=&status=&priority=` on `GET /projects`.
///
/// Empty values are treated as absent.
#[derive(Debug, Default, Deserialize)]
pub struct ProjectListParams {
    pub search: Option<String>,
    pub status: Option<String>,
    pub priority: Option<String>,
}

/// Parsed form of [`ProjectListParams`].
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ProjectFilter {
    /// Lowercased term matched against name and description.
    pub search: Option<String>,
    pub status: Option<ProjectStatus>,
    pub priority: Option<ProjectPriority>,
}

impl TryFrom<ProjectListParams> for ProjectFilter {
    type Error = AppError;

    fn try_from(params: ProjectListParams) -> Result<Self, Self::Error> {
        let search = non_empty(params.search).map(|s| s.to_lowercase());
        let status = non_empty(params.status)
            .map(|s| s.parse::<ProjectStatus>())
            .transpose()
            .map_err(AppError::BadRequest)?;
        let priority = non_empty(params.priority)
            .map(|s| s.parse::<ProjectPriority>())
            .transpose()
            .map_err(AppError::BadRequest)?;
        Ok(Self {
            search,
            status,
            priority,
        })
    }
}

impl ProjectFilter {
    pub fn matches(&self, project: &Project) -> bool {
        if self.status.is_some_and(|s| s != project.status) {
            return false;
        }
        if self.priority.is_some_and(|p| p != project.priority) {
            return false;
        }
        match &self.search {
            Some(term) => {
                project.name.to_lowercase().contains(term)
                    || project.description.to_lowercase().contains(term)
            }
            None => true,
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
