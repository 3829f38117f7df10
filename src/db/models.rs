use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;
use sqlx::FromRow;

/// Row of `dc_project`.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Project {
    pub pid: i64,
    pub project_name: String,
    pub project_config: Option<Value>,
}

/// Row of `dc_table`: one logical table registered for comparison.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct CompareTable {
    pub tid: i64,
    pub pid: i64,
    pub table_alias: Option<String>,
    pub enabled: Option<bool>,
    pub batch_nbr: Option<i32>,
    pub parallel_degree: Option<i32>,
}

/// Row of `dc_table_map`: where a logical table lives on one side
/// (`dest_type` is `source` or `target`).
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct TableMap {
    pub tid: i64,
    pub dest_type: String,
    pub schema_name: String,
    pub table_name: String,
    pub mod_column: Option<String>,
    pub table_filter: Option<String>,
    pub schema_preserve_case: Option<bool>,
    pub table_preserve_case: Option<bool>,
}

/// Row of `dc_table_column`.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct TableColumn {
    pub column_id: i64,
    pub tid: i64,
    pub column_alias: Option<String>,
    pub enabled: Option<bool>,
}

/// Row of `dc_table_column_map`: per-side physical column details behind a
/// logical column.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct ColumnMap {
    pub tid: i64,
    pub column_id: i64,
    pub column_origin: String,
    pub column_name: String,
    pub data_type: Option<String>,
    pub data_class: Option<String>,
    pub data_length: Option<i32>,
    pub number_precision: Option<i32>,
    pub number_scale: Option<i32>,
    pub column_nullable: Option<bool>,
    pub column_primarykey: Option<bool>,
    pub map_expression: Option<String>,
    pub supported: Option<bool>,
    pub preserve_case: Option<bool>,
    pub map_type: Option<String>,
}

/// `{column_name, column_origin}` pair for dropdown population.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct ColumnOption {
    pub column_name: String,
    pub column_origin: String,
}

/// Row of `dc_result`: one table's outcome within a comparison run.
/// `rid` is `numeric` in the repository schema and is cast to `int8` in
/// selects.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct CompareResult {
    pub cid: i32,
    pub rid: Option<i64>,
    pub tid: Option<i64>,
    pub table_name: Option<String>,
    pub status: Option<String>,
    pub compare_start: Option<DateTime<Utc>>,
    pub compare_end: Option<DateTime<Utc>>,
    pub equal_cnt: Option<i32>,
    pub missing_source_cnt: Option<i32>,
    pub missing_target_cnt: Option<i32>,
    pub not_equal_cnt: Option<i32>,
    pub source_cnt: Option<i32>,
    pub target_cnt: Option<i32>,
}

/// Per-table row of the latest-run report, with the elapsed interval
/// pre-rendered as text by the query.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct RunRow {
    pub table_name: Option<String>,
    pub status: Option<String>,
    pub compare_start: Option<DateTime<Utc>>,
    pub run_time: Option<String>,
    pub source_cnt: Option<i32>,
    pub target_cnt: Option<i32>,
    pub equal_cnt: Option<i32>,
    pub missing_source_cnt: Option<i32>,
    pub missing_target_cnt: Option<i32>,
    pub not_equal_cnt: Option<i32>,
}

/// Row of `dc_target` staged by the comparison engine.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct TargetRow {
    pub pk: Option<Value>,
    pub pk_hash: Option<String>,
    pub column_hash: Option<String>,
    pub compare_result: Option<String>,
    pub thread_nbr: Option<i32>,
    pub table_name: Option<String>,
    pub batch_nbr: Option<i32>,
}
