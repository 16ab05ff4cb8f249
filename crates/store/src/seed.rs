//! Demo records loaded at startup when seeding is enabled.

use chrono::{DateTime, NaiveDate, Utc};
use projectdesk_core::project::{Project, ProjectPriority, ProjectStatus};

/// The four demo projects, ids `1` through `4`.
///
/// These are historical records and are inserted without revalidation.
pub fn demo_projects() -> Vec<Project> {
    [
        (
            "E-commerce Platform",
            "Build a modern e-commerce platform with React and Node.js",
            ProjectStatus::Active,
            ProjectPriority::High,
            (2024, 1, 15),
            Some((2024, 6, 30)),
            "2024-01-15T10:00:00Z",
            "2024-01-15T10:00:00Z",
        ),
        (
            "Mobile App Development",
            "Create a cross-platform mobile application using React Native",
            ProjectStatus::Active,
            ProjectPriority::Medium,
            (2024, 2, 1),
            Some((2024, 8, 15)),
            "2024-02-01T09:00:00Z",
            "2024-02-01T09:00:00Z",
        ),
        (
            "Data Analytics Dashboard",
            "Develop a comprehensive analytics dashboard for business intelligence",
            ProjectStatus::Completed,
            ProjectPriority::High,
            (2023, 10, 1),
            Some((2024, 1, 31)),
            "2023-10-01T08:00:00Z",
            "2024-01-31T17:00:00Z",
        ),
        (
            "API Documentation Portal",
            "Create an interactive API documentation portal for developers",
            ProjectStatus::OnHold,
            ProjectPriority::Low,
            (2024, 3, 1),
            None,
            "2024-03-01T11:00:00Z",
            "2024-03-15T14:00:00Z",
        ),
    ]
    .into_iter()
    .enumerate()
    .filter_map(
        |(index, (name, description, status, priority, start, end, created, updated))| {
            Some(Project {
                id: (index + 1).to_string(),
                name: name.to_string(),
                description: description.to_string(),
                status,
                priority,
                start_date: date(start)?,
                end_date: match end {
                    Some(end) => Some(date(end)?),
                    None => None,
                },
                created_at: timestamp(created)?,
                updated_at: timestamp(updated)?,
            })
        },
    )
    .collect()
}

fn date((y, m, d): (i32, u32, u32)) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(y, m, d)
}

fn timestamp(raw: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|t| t.with_timezone(&Utc))
}
