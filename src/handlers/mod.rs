pub mod auth;
pub mod columns;
pub mod projects;
pub mod results;
pub mod tables;

use crate::db::MetaStore;
use crate::error::ConsoleError;
use crate::router::ConsoleState;

/// Store bound to the active session pool, reconnecting lazily if the handle
/// was lost since login.
pub(crate) async fn store(state: &ConsoleState) -> Result<MetaStore, ConsoleError> {
    Ok(MetaStore::new(state.sessions.acquire().await?))
}
