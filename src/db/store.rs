use serde_json::Value;
use sqlx::PgPool;

use crate::db::models::{
    ColumnMap, ColumnOption, CompareResult, CompareTable, Project, RunRow, TableColumn, TableMap,
    TargetRow,
};
use crate::error::ConsoleError;

/// Queries against the pgCompare repository schema, resolved through the
/// session pool's `search_path`.
#[derive(Clone)]
pub struct MetaStore {
    pool: PgPool,
}

impl MetaStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    // --- projects ---

    pub async fn list_projects(&self) -> Result<Vec<Project>, ConsoleError> {
        let rows = sqlx::query_as::<_, Project>(
            "SELECT pid, project_name, project_config FROM dc_project ORDER BY project_name",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    pub async fn create_project(&self, project_name: &str) -> Result<Project, ConsoleError> {
        let row = sqlx::query_as::<_, Project>(
            r#"INSERT INTO dc_project (project_name) VALUES ($1)
               RETURNING pid, project_name, project_config"#,
        )
        .bind(project_name)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    pub async fn get_project(&self, pid: i64) -> Result<Option<Project>, ConsoleError> {
        let row = sqlx::query_as::<_, Project>(
            "SELECT pid, project_name, project_config FROM dc_project WHERE pid = $1",
        )
        .bind(pid)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    /// Partial update: absent fields keep their current value.
    pub async fn update_project(
        &self,
        pid: i64,
        project_name: Option<&str>,
        project_config: Option<&Value>,
    ) -> Result<(), ConsoleError> {
        sqlx::query(
            r#"UPDATE dc_project SET
                project_name = COALESCE($2, project_name),
                project_config = COALESCE($3, project_config)
               WHERE pid = $1"#,
        )
        .bind(pid)
        .bind(project_name)
        .bind(project_config)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    // --- tables ---

    pub async fn tables_for_project(&self, pid: i64) -> Result<Vec<CompareTable>, ConsoleError> {
        let rows = sqlx::query_as::<_, CompareTable>(
            r#"SELECT tid, pid, table_alias, enabled, batch_nbr, parallel_degree
               FROM dc_table WHERE pid = $1 ORDER BY table_alias"#,
        )
        .bind(pid)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    pub async fn get_table(&self, tid: i64) -> Result<Option<CompareTable>, ConsoleError> {
        let row = sqlx::query_as::<_, CompareTable>(
            r#"SELECT tid, pid, table_alias, enabled, batch_nbr, parallel_degree
               FROM dc_table WHERE tid = $1"#,
        )
        .bind(tid)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    pub async fn update_table(
        &self,
        tid: i64,
        enabled: bool,
        batch_nbr: i32,
        parallel_degree: i32,
    ) -> Result<(), ConsoleError> {
        sqlx::query(
            "UPDATE dc_table SET enabled = $2, batch_nbr = $3, parallel_degree = $4 WHERE tid = $1",
        )
        .bind(tid)
        .bind(enabled)
        .bind(batch_nbr)
        .bind(parallel_degree)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    pub async fn maps_for_table(&self, tid: i64) -> Result<Vec<TableMap>, ConsoleError> {
        let rows = sqlx::query_as::<_, TableMap>(
            r#"SELECT tid, dest_type, schema_name, table_name, mod_column, table_filter,
                      schema_preserve_case, table_preserve_case
               FROM dc_table_map WHERE tid = $1"#,
        )
        .bind(tid)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// `dc_table_map` rows are keyed by (tid, dest_type, schema_name, table_name).
    pub async fn update_table_map(
        &self,
        tid: i64,
        dest_type: &str,
        schema_name: &str,
        table_name: &str,
        mod_column: Option<&str>,
        table_filter: Option<&str>,
    ) -> Result<(), ConsoleError> {
        sqlx::query(
            r#"UPDATE dc_table_map SET mod_column = $5, table_filter = $6
               WHERE tid = $1 AND dest_type = $2 AND schema_name = $3 AND table_name = $4"#,
        )
        .bind(tid)
        .bind(dest_type)
        .bind(schema_name)
        .bind(table_name)
        .bind(mod_column)
        .bind(table_filter)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    // --- columns ---

    pub async fn columns_for_table(&self, tid: i64) -> Result<Vec<TableColumn>, ConsoleError> {
        let rows = sqlx::query_as::<_, TableColumn>(
            "SELECT column_id, tid, column_alias, enabled FROM dc_table_column WHERE tid = $1",
        )
        .bind(tid)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    pub async fn update_column(
        &self,
        column_id: i64,
        column_alias: &str,
        enabled: bool,
    ) -> Result<(), ConsoleError> {
        sqlx::query("UPDATE dc_table_column SET column_alias = $2, enabled = $3 WHERE column_id = $1")
            .bind(column_id)
            .bind(column_alias)
            .bind(enabled)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    pub async fn column_options_for_table(
        &self,
        tid: i64,
    ) -> Result<Vec<ColumnOption>, ConsoleError> {
        let rows = sqlx::query_as::<_, ColumnOption>(
            "SELECT column_name, column_origin FROM dc_table_column_map WHERE tid = $1",
        )
        .bind(tid)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    pub async fn maps_for_column(&self, column_id: i64) -> Result<Vec<ColumnMap>, ConsoleError> {
        let rows = sqlx::query_as::<_, ColumnMap>(
            r#"SELECT tid, column_id, column_origin, column_name, data_type, data_class,
                      data_length, number_precision, number_scale, column_nullable,
                      column_primarykey, map_expression, supported, preserve_case, map_type
               FROM dc_table_column_map WHERE column_id = $1"#,
        )
        .bind(column_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// `dc_table_column_map` rows are keyed by (column_id, column_origin, column_name).
    pub async fn update_column_map(
        &self,
        column_id: i64,
        column_origin: &str,
        column_name: &str,
        map_expression: Option<&str>,
    ) -> Result<(), ConsoleError> {
        sqlx::query(
            r#"UPDATE dc_table_column_map SET map_expression = $4
               WHERE column_id = $1 AND column_origin = $2 AND column_name = $3"#,
        )
        .bind(column_id)
        .bind(column_origin)
        .bind(column_name)
        .bind(map_expression)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    pub async fn delete_column_map(
        &self,
        column_id: i64,
        column_origin: &str,
        column_name: &str,
    ) -> Result<(), ConsoleError> {
        sqlx::query(
            r#"DELETE FROM dc_table_column_map
               WHERE column_id = $1 AND column_origin = $2 AND column_name = $3"#,
        )
        .bind(column_id)
        .bind(column_origin)
        .bind(column_name)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    // --- results ---

    pub async fn results_for_table(
        &self,
        tid: i64,
        limit: i64,
    ) -> Result<Vec<CompareResult>, ConsoleError> {
        let rows = sqlx::query_as::<_, CompareResult>(
            r#"SELECT cid, rid::int8 AS rid, tid, table_name, status, compare_start, compare_end,
                      equal_cnt, missing_source_cnt, missing_target_cnt, not_equal_cnt,
                      source_cnt, target_cnt
               FROM dc_result WHERE tid = $1
               ORDER BY compare_start DESC LIMIT $2"#,
        )
        .bind(tid)
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Most recent results across every table of a project.
    pub async fn results_for_project(
        &self,
        pid: i64,
        limit: i64,
    ) -> Result<Vec<CompareResult>, ConsoleError> {
        let rows = sqlx::query_as::<_, CompareResult>(
            r#"SELECT cid, rid::int8 AS rid, tid, table_name, status, compare_start, compare_end,
                      equal_cnt, missing_source_cnt, missing_target_cnt, not_equal_cnt,
                      source_cnt, target_cnt
               FROM dc_result
               WHERE tid IN (SELECT tid FROM dc_table WHERE pid = $1)
               ORDER BY compare_start DESC LIMIT $2"#,
        )
        .bind(pid)
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Per-table rows of the most recent run overall, restricted to the
    /// project's tables. Empty when no run has been recorded yet.
    pub async fn current_run(&self, pid: i64) -> Result<Vec<RunRow>, ConsoleError> {
        let latest: Option<(Option<i64>,)> = sqlx::query_as(
            "SELECT rid::int8 AS rid FROM dc_result ORDER BY compare_start DESC LIMIT 1",
        )
        .fetch_optional(&self.pool)
        .await?;
        let Some((Some(rid),)) = latest else {
            return Ok(Vec::new());
        };

        let rows = sqlx::query_as::<_, RunRow>(
            r#"SELECT table_name, status, compare_start,
                      CAST(coalesce(compare_end, current_timestamp) - compare_start AS TEXT) AS run_time,
                      source_cnt, target_cnt, equal_cnt,
                      missing_source_cnt, missing_target_cnt, not_equal_cnt
               FROM dc_result
               WHERE rid = $1 AND tid IN (SELECT tid FROM dc_table WHERE pid = $2)
               ORDER BY compare_start DESC"#,
        )
        .bind(rid)
        .bind(pid)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Staged target rows for the comparison identified by `dc_result.cid`.
    /// `None` when the result row does not exist or carries no tid.
    pub async fn target_rows_for_result(
        &self,
        cid: i32,
    ) -> Result<Option<Vec<TargetRow>>, ConsoleError> {
        let result: Option<(Option<i64>,)> =
            sqlx::query_as("SELECT tid FROM dc_result WHERE cid = $1")
                .bind(cid)
                .fetch_optional(&self.pool)
                .await?;
        let Some((Some(tid),)) = result else {
            return Ok(None);
        };

        let rows = sqlx::query_as::<_, TargetRow>(
            r#"SELECT pk, pk_hash, column_hash, compare_result, thread_nbr, table_name, batch_nbr
               FROM dc_target WHERE tid = $1
               ORDER BY pk_hash LIMIT 1000"#,
        )
        .bind(tid)
        .fetch_all(&self.pool)
        .await?;
        Ok(Some(rows))
    }
}
