use axum::{
    Json,
    extract::{Path, State},
};
use serde::Deserialize;
use serde_json::{Value, json};

use crate::db::models::{CompareResult, CompareTable, Project, RunRow};
use crate::error::ConsoleError;
use crate::handlers::store;
use crate::router::ConsoleState;

#[derive(Debug, Deserialize)]
pub struct CreateProject {
    pub project_name: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateProject {
    pub project_name: Option<String>,
    pub project_config: Option<Value>,
}

/// GET /api/projects
pub async fn list(State(state): State<ConsoleState>) -> Result<Json<Vec<Project>>, ConsoleError> {
    Ok(Json(store(&state).await?.list_projects().await?))
}

/// POST /api/projects
pub async fn create(
    State(state): State<ConsoleState>,
    Json(body): Json<CreateProject>,
) -> Result<Json<Project>, ConsoleError> {
    let name = body
        .project_name
        .as_deref()
        .filter(|n| !n.is_empty())
        .ok_or(ConsoleError::BadRequest("Project name is required"))?;
    Ok(Json(store(&state).await?.create_project(name).await?))
}

/// GET /api/projects/{id}
pub async fn fetch(
    State(state): State<ConsoleState>,
    Path(pid): Path<i64>,
) -> Result<Json<Project>, ConsoleError> {
    store(&state)
        .await?
        .get_project(pid)
        .await?
        .map(Json)
        .ok_or(ConsoleError::NotFound("Project"))
}

/// PUT /api/projects/{id} -> partial update of name/config.
pub async fn update(
    State(state): State<ConsoleState>,
    Path(pid): Path<i64>,
    Json(body): Json<UpdateProject>,
) -> Result<Json<Value>, ConsoleError> {
    store(&state)
        .await?
        .update_project(pid, body.project_name.as_deref(), body.project_config.as_ref())
        .await?;
    Ok(Json(json!({ "success": true })))
}

/// GET /api/projects/{id}/tables
pub async fn tables(
    State(state): State<ConsoleState>,
    Path(pid): Path<i64>,
) -> Result<Json<Vec<CompareTable>>, ConsoleError> {
    Ok(Json(store(&state).await?.tables_for_project(pid).await?))
}

/// GET /api/projects/{id}/results -> last 10 results across the project.
pub async fn results(
    State(state): State<ConsoleState>,
    Path(pid): Path<i64>,
) -> Result<Json<Vec<CompareResult>>, ConsoleError> {
    Ok(Json(store(&state).await?.results_for_project(pid, 10).await?))
}

/// GET /api/projects/{id}/current-run -> latest run's per-table report.
pub async fn current_run(
    State(state): State<ConsoleState>,
    Path(pid): Path<i64>,
) -> Result<Json<Vec<RunRow>>, ConsoleError> {
    Ok(Json(store(&state).await?.current_run(pid).await?))
}
