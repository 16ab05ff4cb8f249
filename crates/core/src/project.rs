//! Project entity, its enumerations, and the create/patch input shapes.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::CoreError;
use crate::types::{CalendarDate, ProjectId, Timestamp};
use crate::validation;

/// Entity name used in not-found errors.
pub const ENTITY: &str = "Project";

/// Lifecycle status of a project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectStatus {
    Active,
    Completed,
    OnHold,
    Cancelled,
}

impl ProjectStatus {
    pub const ALL: [ProjectStatus; 4] = [
        ProjectStatus::Active,
        ProjectStatus::Completed,
        ProjectStatus::OnHold,
        ProjectStatus::Cancelled,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ProjectStatus::Active => "active",
            ProjectStatus::Completed => "completed",
            ProjectStatus::OnHold => "on-hold",
            ProjectStatus::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProjectStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| format!("unknown project status '{s}'"))
    }
}

/// Relative priority of a project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectPriority {
    Low,
    Medium,
    High,
}

impl ProjectPriority {
    pub const ALL: [ProjectPriority; 3] = [
        ProjectPriority::Low,
        ProjectPriority::Medium,
        ProjectPriority::High,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ProjectPriority::Low => "low",
            ProjectPriority::Medium => "medium",
            ProjectPriority::High => "high",
        }
    }
}

impl fmt::Display for ProjectPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProjectPriority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|priority| priority.as_str() == s)
            .ok_or_else(|| format!("unknown project priority '{s}'"))
    }
}

/// A stored project record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: ProjectId,
    pub name: String,
    pub description: String,
    pub status: ProjectStatus,
    pub priority: ProjectPriority,
    pub start_date: CalendarDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<CalendarDate>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Project {
    /// Render the stored values back into candidate fields, so a patch can
    /// be merged and the result revalidated as a whole.
    pub fn to_fields(&self) -> ProjectFields {
        ProjectFields {
            name: self.name.clone(),
            description: self.description.clone(),
            status: self.status.as_str().to_string(),
            priority: self.priority.as_str().to_string(),
            start_date: self.start_date.format(validation::DATE_FORMAT).to_string(),
            end_date: self
                .end_date
                .map(|d| d.format(validation::DATE_FORMAT).to_string()),
        }
    }
}

/// Candidate project fields as received from a client, before validation.
///
/// Every field is kept as raw text so the validator can report all
/// violations at once instead of failing on the first unparseable value.
/// Missing keys deserialize to empty strings and surface as "required".
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProjectFields {
    pub name: String,
    pub description: String,
    pub status: String,
    pub priority: String,
    pub start_date: String,
    pub end_date: Option<String>,
}

impl ProjectFields {
    /// Validate against `today` and convert into typed values.
    pub fn into_validated(self, today: CalendarDate) -> Result<ValidatedProject, CoreError> {
        validation::check_project(&self, today).map_err(CoreError::Validation)
    }

    /// Overlay the keys present in `patch`, leaving the others untouched.
    pub fn merge(mut self, patch: ProjectPatch) -> Self {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
        if let Some(priority) = patch.priority {
            self.priority = priority;
        }
        if let Some(start_date) = patch.start_date {
            self.start_date = start_date;
        }
        if let Some(end_date) = patch.end_date {
            self.end_date = end_date;
        }
        self
    }
}

/// Partial update for an existing project. Absent keys are left unchanged.
///
/// `endDate` distinguishes "absent" (`None`) from an explicit `null`
/// (`Some(None)`), which clears the end date.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProjectPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub status: Option<String>,
    pub priority: Option<String>,
    pub start_date: Option<String>,
    #[serde(deserialize_with = "deserialize_present")]
    pub end_date: Option<Option<String>>,
}

/// Marks a key as present even when its value is `null`.
fn deserialize_present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

/// Fields that passed validation, in their typed form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedProject {
    pub name: String,
    pub description: String,
    pub status: ProjectStatus,
    pub priority: ProjectPriority,
    pub start_date: CalendarDate,
    pub end_date: Option<CalendarDate>,
}

impl ValidatedProject {
    /// Build a stored record with both timestamps set to `now`.
    pub fn into_project(self, id: ProjectId, now: Timestamp) -> Project {
        Project {
            id,
            name: self.name,
            description: self.description,
            status: self.status,
            priority: self.priority,
            start_date: self.start_date,
            end_date: self.end_date,
            created_at: now,
            updated_at: now,
        }
    }
}
