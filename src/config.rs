use figment::{
    Figment,
    providers::{Env, Serialized},
};
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// Runtime configuration, merged from defaults and `DC_CONSOLE_*` env vars.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Address the HTTP server binds to.
    pub bind: String,
    /// Default tracing filter when `RUST_LOG` is unset.
    pub loglevel: String,
    /// Upper bound on a single connection attempt / pool acquire.
    pub connect_timeout_secs: u64,
    /// Size of the session's connection pool.
    pub max_connections: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind: "0.0.0.0:8000".to_string(),
            loglevel: "info".to_string(),
            connect_timeout_secs: 10,
            max_connections: 5,
        }
    }
}

pub static CONFIG: LazyLock<Config> = LazyLock::new(|| {
    Figment::new()
        .merge(Serialized::defaults(Config::default()))
        .merge(Env::prefixed("DC_CONSOLE_"))
        .extract()
        .expect("invalid DC_CONSOLE_* configuration")
});
