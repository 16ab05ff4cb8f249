use crate::types::ProjectId;
use crate::validation::FieldViolation;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound {
        entity: &'static str,
        id: ProjectId,
    },

    #[error("Validation failed: {}", summarize(.0))]
    Validation(Vec<FieldViolation>),
}

/// Join violations into a single human-readable line.
fn summarize(violations: &[FieldViolation]) -> String {
    violations
        .iter()
        .map(|v| format!("{}: {}", v.field, v.message))
        .collect::<Vec<_>>()
        .join("; ")
}
