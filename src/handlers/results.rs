use axum::{
    Json,
    extract::{Path, State},
};

use crate::db::models::TargetRow;
use crate::error::ConsoleError;
use crate::handlers::store;
use crate::router::ConsoleState;

/// GET /api/results/{id}/target -> staged target rows for one comparison,
/// resolved via `dc_result.cid`.
pub async fn target(
    State(state): State<ConsoleState>,
    Path(cid): Path<i32>,
) -> Result<Json<Vec<TargetRow>>, ConsoleError> {
    store(&state)
        .await?
        .target_rows_for_result(cid)
        .await?
        .map(Json)
        .ok_or(ConsoleError::NotFound("Result"))
}
