use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};

use crate::handlers::{auth, columns, projects, results, tables};
use crate::session::SessionManager;

/// Shared application state: the session manager injected into every handler.
#[derive(Clone)]
pub struct ConsoleState {
    pub sessions: Arc<SessionManager>,
}

impl ConsoleState {
    pub fn new(sessions: Arc<SessionManager>) -> Self {
        Self { sessions }
    }
}

impl Default for ConsoleState {
    fn default() -> Self {
        Self::new(Arc::new(SessionManager::new()))
    }
}

pub fn console_router(state: ConsoleState) -> Router {
    Router::new()
        .route("/api/auth/login", post(auth::login))
        .route("/api/auth/logout", post(auth::logout))
        .route("/api/auth/session", get(auth::session_status))
        .route("/api/projects", get(projects::list).post(projects::create))
        .route(
            "/api/projects/{id}",
            get(projects::fetch).put(projects::update),
        )
        .route("/api/projects/{id}/tables", get(projects::tables))
        .route("/api/projects/{id}/results", get(projects::results))
        .route("/api/projects/{id}/current-run", get(projects::current_run))
        .route("/api/tables/{id}", get(tables::fetch).put(tables::update))
        .route("/api/tables/{id}/results", get(tables::results))
        .route(
            "/api/tables/{id}/columns",
            get(tables::columns).put(tables::update_column),
        )
        .route(
            "/api/tables/{id}/maps",
            get(tables::maps).put(tables::update_map),
        )
        .route("/api/tables/{id}/all-columns", get(tables::all_columns))
        .route("/api/results/{id}/target", get(results::target))
        .route(
            "/api/columns/{id}/maps",
            get(columns::maps)
                .put(columns::update_map)
                .delete(columns::delete_map),
        )
        .with_state(state)
}
