//! Policy Search Server - Rust implementation
//!
//! An HTTP API over the policy document store:
//! - Filtered, sorted, paginated policy search
//! - Status counts and distinct lines of business
//!
//! The query-translation layer lives in the `polaris-query` crate; this
//! crate wires it to the HTTP boundary and the store implementations.

pub mod api;
pub mod config;
pub mod db;
pub mod error;
pub mod logging;
pub mod models;
pub mod services;
pub mod state;

pub use config::Config;
pub use error::{Error, Result};
pub use state::AppState;
