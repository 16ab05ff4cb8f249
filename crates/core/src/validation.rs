//! Field rules for project records: pure logic, no side effects.
//!
//! Every rule is evaluated independently and every violation is reported,
//! so a client can highlight all invalid fields from one response.
//!
//! Dates are UTC calendar dates in `YYYY-MM-DD` form. "Today" is supplied
//! by the caller (normally the UTC date of the store's clock).

use chrono::{Datelike, Months};
use serde::{Deserialize, Serialize};

use crate::project::{ProjectFields, ProjectPriority, ProjectStatus, ValidatedProject};
use crate::types::CalendarDate;

/// Wire format of calendar dates.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Projects may not start before January 1st of this year.
pub const EARLIEST_START_YEAR: i32 = 2020;

/// How far past today an end date may lie.
pub const MAX_END_DATE_YEARS: u32 = 10;

/// A single field-level rule violation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldViolation {
    pub field: String,
    pub message: String,
}

impl FieldViolation {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Length bounds and messages for a required free-text field.
struct TextRule {
    field: &'static str,
    min: usize,
    max: usize,
    required: &'static str,
    too_short: &'static str,
    too_long: &'static str,
}

const NAME_RULE: TextRule = TextRule {
    field: "name",
    min: 3,
    max: 100,
    required: "Project name is required",
    too_short: "Project name must be at least 3 characters long",
    too_long: "Project name must be less than 100 characters",
};

const DESCRIPTION_RULE: TextRule = TextRule {
    field: "description",
    min: 10,
    max: 500,
    required: "Project description is required",
    too_short: "Description must be at least 10 characters long",
    too_long: "Description must be less than 500 characters",
};

/// Validate candidate fields, returning every violation (empty means valid).
pub fn validate_project(fields: &ProjectFields, today: CalendarDate) -> Vec<FieldViolation> {
    match check_project(fields, today) {
        Ok(_) => Vec::new(),
        Err(violations) => violations,
    }
}

/// Validate and, when no rule is violated, produce the typed record.
pub(crate) fn check_project(
    fields: &ProjectFields,
    today: CalendarDate,
) -> Result<ValidatedProject, Vec<FieldViolation>> {
    let mut violations = Vec::new();

    let name = check_text(&NAME_RULE, &fields.name, &mut violations);
    let description = check_text(&DESCRIPTION_RULE, &fields.description, &mut violations);
    let start_date = check_start_date(&fields.start_date, &mut violations);
    let end_date = check_end_date(
        fields.end_date.as_deref(),
        start_date,
        today,
        &mut violations,
    );

    let status = fields.status.parse::<ProjectStatus>().ok();
    if status.is_none() {
        violations.push(FieldViolation::new("status", "Invalid status selected"));
    }
    let priority = fields.priority.parse::<ProjectPriority>().ok();
    if priority.is_none() {
        violations.push(FieldViolation::new("priority", "Invalid priority selected"));
    }

    match (name, description, start_date, end_date, status, priority) {
        (
            Some(name),
            Some(description),
            Some(start_date),
            Some(end_date),
            Some(status),
            Some(priority),
        ) if violations.is_empty() => Ok(ValidatedProject {
            name,
            description,
            status,
            priority,
            start_date,
            end_date,
        }),
        _ => Err(violations),
    }
}

/// Trimmed text within the rule's bounds, counted in characters.
fn check_text(rule: &TextRule, raw: &str, violations: &mut Vec<FieldViolation>) -> Option<String> {
    let trimmed = raw.trim();
    let len = trimmed.chars().count();
    let message = if trimmed.is_empty() {
        rule.required
    } else if len < rule.min {
        rule.too_short
    } else if len > rule.max {
        rule.too_long
    } else {
        return Some(trimmed.to_string());
    };
    violations.push(FieldViolation::new(rule.field, message));
    None
}

/// Yields any date that parses, even one before 2020, so the end date is
/// still compared against it. The year violation alone fails the check.
fn check_start_date(raw: &str, violations: &mut Vec<FieldViolation>) -> Option<CalendarDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        violations.push(FieldViolation::new("startDate", "Start date is required"));
        return None;
    }
    let Some(date) = parse_date(raw) else {
        violations.push(FieldViolation::new(
            "startDate",
            "Start date must be a valid date (YYYY-MM-DD)",
        ));
        return None;
    };
    if date.year() < EARLIEST_START_YEAR {
        violations.push(FieldViolation::new(
            "startDate",
            "Start date cannot be before 2020",
        ));
    }
    Some(date)
}

/// Returns `Some(None)` when no end date was given, `None` when invalid.
fn check_end_date(
    raw: Option<&str>,
    start_date: Option<CalendarDate>,
    today: CalendarDate,
    violations: &mut Vec<FieldViolation>,
) -> Option<Option<CalendarDate>> {
    let raw = match raw.map(str::trim) {
        None | Some("") => return Some(None),
        Some(raw) => raw,
    };
    let Some(end) = parse_date(raw) else {
        violations.push(FieldViolation::new(
            "endDate",
            "End date must be a valid date (YYYY-MM-DD)",
        ));
        return None;
    };

    let mut valid = true;
    if start_date.is_some_and(|start| end <= start) {
        violations.push(FieldViolation::new(
            "endDate",
            "End date must be after start date",
        ));
        valid = false;
    }
    if latest_end_date(today).is_some_and(|latest| end > latest) {
        violations.push(FieldViolation::new(
            "endDate",
            "End date cannot be more than 10 years in the future",
        ));
        valid = false;
    }
    valid.then_some(Some(end))
}

/// Today plus ten calendar years; Feb 29 clamps to Feb 28.
pub fn latest_end_date(today: CalendarDate) -> Option<CalendarDate> {
    today.checked_add_months(Months::new(12 * MAX_END_DATE_YEARS))
}

pub fn parse_date(raw: &str) -> Option<CalendarDate> {
    CalendarDate::parse_from_str(raw, DATE_FORMAT).ok()
}
