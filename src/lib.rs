pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod router;
pub mod session;

pub use error::ConsoleError;
pub use session::{Credentials, SessionManager};
