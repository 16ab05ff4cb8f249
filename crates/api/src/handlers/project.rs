//! Handlers for the `/projects` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use projectdesk_core::error::CoreError;
use projectdesk_core::project::{self, Project, ProjectFields, ProjectPatch};
use projectdesk_core::types::ProjectId;
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppQuery};
use crate::query::{ProjectFilter, ProjectListParams};
use crate::response::DataResponse;
use crate::state::AppState;

/// Confirmation payload for a successful delete.
#[derive(Debug, Serialize)]
pub struct DeletedProject {
    pub id: ProjectId,
    pub message: &'static str,
}

fn not_found(id: ProjectId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: project::ENTITY,
        id,
    })
}

/// POST /api/v1/projects
pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<ProjectFields>,
) -> AppResult<(StatusCode, Json<DataResponse<Project>>)> {
    let project = state.store.create(input)?;

    tracing::info!(project_id = %project.id, name = %project.name, "Project created");

    Ok((StatusCode::CREATED, Json(DataResponse::new(project))))
}

/// GET /api/v1/projects
///
/// Optional `search`, `status` and `priority` query parameters narrow the
/// listing; insertion order is preserved.
pub async fn list(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<ProjectListParams>,
) -> AppResult<Json<DataResponse<Vec<Project>>>> {
    let filter = ProjectFilter::try_from(params)?;
    let projects = state
        .store
        .list_all()
        .into_iter()
        .filter(|p| filter.matches(p))
        .collect();
    Ok(Json(DataResponse::new(projects)))
}

/// GET /api/v1/projects/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<ProjectId>,
) -> AppResult<Json<DataResponse<Project>>> {
    let project = state.store.get_by_id(&id).ok_or_else(|| not_found(id))?;
    Ok(Json(DataResponse::new(project)))
}

/// PUT /api/v1/projects/{id}
///
/// Applies a partial update; keys missing from the body keep their values.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<ProjectId>,
    AppJson(patch): AppJson<ProjectPatch>,
) -> AppResult<Json<DataResponse<Project>>> {
    let project = state
        .store
        .update(&id, patch)?
        .ok_or_else(|| not_found(id))?;

    tracing::info!(project_id = %project.id, "Project updated");

    Ok(Json(DataResponse::new(project)))
}

/// DELETE /api/v1/projects/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<ProjectId>,
) -> AppResult<Json<DataResponse<DeletedProject>>> {
    if !state.store.delete(&id) {
        return Err(not_found(id));
    }

    tracing::info!(project_id = %id, remaining = state.store.len(), "Project deleted");

    Ok(Json(DataResponse::new(DeletedProject {
        id,
        message: "Project deleted successfully",
    })))
}
