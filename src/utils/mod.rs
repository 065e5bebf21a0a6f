//! Utility modules for the Study Hub API
//!
//! Currently this only hosts the shared error type; keeping the module
//! tree in place so future utilities have an obvious home.

pub mod error;

pub use error::{HubError, Result};
