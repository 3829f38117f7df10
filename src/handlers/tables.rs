use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;
use serde_json::{Value, json};

use crate::db::models::{ColumnOption, CompareResult, CompareTable, TableColumn, TableMap};
use crate::error::ConsoleError;
use crate::handlers::store;
use crate::router::ConsoleState;

#[derive(Debug, Deserialize)]
pub struct UpdateTable {
    pub enabled: bool,
    pub batch_nbr: i32,
    pub parallel_degree: i32,
}

#[derive(Debug, Deserialize)]
pub struct ResultsQuery {
    #[serde(default)]
    pub latest: bool,
}

#[derive(Debug, Deserialize)]
pub struct UpdateColumn {
    pub column_id: i64,
    pub column_alias: String,
    pub enabled: bool,
}

/// Composite key of `dc_table_map` plus the editable fields.
#[derive(Debug, Deserialize)]
pub struct UpdateTableMap {
    pub tid: i64,
    pub dest_type: String,
    pub schema_name: String,
    pub table_name: String,
    pub mod_column: Option<String>,
    pub table_filter: Option<String>,
}

/// GET /api/tables/{id}
pub async fn fetch(
    State(state): State<ConsoleState>,
    Path(tid): Path<i64>,
) -> Result<Json<CompareTable>, ConsoleError> {
    store(&state)
        .await?
        .get_table(tid)
        .await?
        .map(Json)
        .ok_or(ConsoleError::NotFound("Table"))
}

/// PUT /api/tables/{id}
pub async fn update(
    State(state): State<ConsoleState>,
    Path(tid): Path<i64>,
    Json(body): Json<UpdateTable>,
) -> Result<Json<Value>, ConsoleError> {
    store(&state)
        .await?
        .update_table(tid, body.enabled, body.batch_nbr, body.parallel_degree)
        .await?;
    Ok(Json(json!({ "success": true })))
}

/// GET /api/tables/{id}/results -> last 20, or just the latest with `?latest=true`.
pub async fn results(
    State(state): State<ConsoleState>,
    Path(tid): Path<i64>,
    Query(query): Query<ResultsQuery>,
) -> Result<Json<Vec<CompareResult>>, ConsoleError> {
    let limit = if query.latest { 1 } else { 20 };
    Ok(Json(store(&state).await?.results_for_table(tid, limit).await?))
}

/// GET /api/tables/{id}/columns
pub async fn columns(
    State(state): State<ConsoleState>,
    Path(tid): Path<i64>,
) -> Result<Json<Vec<TableColumn>>, ConsoleError> {
    Ok(Json(store(&state).await?.columns_for_table(tid).await?))
}

/// PUT /api/tables/{id}/columns -> the target column is keyed by the body's
/// `column_id`, not the path.
pub async fn update_column(
    State(state): State<ConsoleState>,
    Json(body): Json<UpdateColumn>,
) -> Result<Json<Value>, ConsoleError> {
    store(&state)
        .await?
        .update_column(body.column_id, &body.column_alias, body.enabled)
        .await?;
    Ok(Json(json!({ "success": true })))
}

/// GET /api/tables/{id}/maps
pub async fn maps(
    State(state): State<ConsoleState>,
    Path(tid): Path<i64>,
) -> Result<Json<Vec<TableMap>>, ConsoleError> {
    Ok(Json(store(&state).await?.maps_for_table(tid).await?))
}

/// PUT /api/tables/{id}/maps -> keyed by the body's composite key.
pub async fn update_map(
    State(state): State<ConsoleState>,
    Json(body): Json<UpdateTableMap>,
) -> Result<Json<Value>, ConsoleError> {
    store(&state)
        .await?
        .update_table_map(
            body.tid,
            &body.dest_type,
            &body.schema_name,
            &body.table_name,
            body.mod_column.as_deref(),
            body.table_filter.as_deref(),
        )
        .await?;
    Ok(Json(json!({ "success": true })))
}

/// GET /api/tables/{id}/all-columns -> name/origin pairs for dropdowns.
pub async fn all_columns(
    State(state): State<ConsoleState>,
    Path(tid): Path<i64>,
) -> Result<Json<Vec<ColumnOption>>, ConsoleError> {
    Ok(Json(store(&state).await?.column_options_for_table(tid).await?))
}
