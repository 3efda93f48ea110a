//! Session storage for AdviseeMatrix
//!
//! Keeps a planner session in a JSON file between command invocations.

pub mod error;
mod store;

pub use error::{Error, Result};
pub use store::{SessionStore, SESSION_FILE_VERSION};
