use axum::{
    Json,
    extract::{Path, State},
};
use serde::Deserialize;
use serde_json::{Value, json};

use crate::db::models::ColumnMap;
use crate::error::ConsoleError;
use crate::handlers::store;
use crate::router::ConsoleState;

/// Composite key of `dc_table_column_map` plus the editable expression.
#[derive(Debug, Deserialize)]
pub struct UpdateColumnMap {
    pub column_id: i64,
    pub column_origin: String,
    pub column_name: String,
    pub map_expression: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct DeleteColumnMap {
    pub column_id: i64,
    pub column_origin: String,
    pub column_name: String,
}

/// GET /api/columns/{id}/maps
pub async fn maps(
    State(state): State<ConsoleState>,
    Path(column_id): Path<i64>,
) -> Result<Json<Vec<ColumnMap>>, ConsoleError> {
    Ok(Json(store(&state).await?.maps_for_column(column_id).await?))
}

/// PUT /api/columns/{id}/maps -> keyed by the body's composite key.
pub async fn update_map(
    State(state): State<ConsoleState>,
    Json(body): Json<UpdateColumnMap>,
) -> Result<Json<Value>, ConsoleError> {
    store(&state)
        .await?
        .update_column_map(
            body.column_id,
            &body.column_origin,
            &body.column_name,
            body.map_expression.as_deref(),
        )
        .await?;
    Ok(Json(json!({ "success": true })))
}

/// DELETE /api/columns/{id}/maps -> keyed by the body's composite key.
pub async fn delete_map(
    State(state): State<ConsoleState>,
    Json(body): Json<DeleteColumnMap>,
) -> Result<Json<Value>, ConsoleError> {
    store(&state)
        .await?
        .delete_column_map(body.column_id, &body.column_origin, &body.column_name)
        .await?;
    Ok(Json(json!({ "success": true })))
}
