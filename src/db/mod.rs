//! Data access for pgCompare's repository schema.
//!
//! Layout:
//! - `models.rs`: Rust structs mirroring the `dc_*` rows served to the UI
//! - `store.rs`: read/update queries against the externally-owned schema
//!
//! The schema belongs to the pgCompare engine; the console never creates or
//! migrates it.

pub mod models;
pub mod store;

pub use store::MetaStore;
