//! Syndicate REST API Server.
//!
//! This crate serves indicative bond issuance pricing over HTTP.
//!
//! ## Features
//!
//! - Full pricing analysis across GBP, EUR and USD
//! - Government rates and credit spread lookups
//! - Enumerations for building request forms
//!
//! ## Usage
//!
//! ```bash
//! # Start server on default port (8000)
//! syndicate-api-server
//!
//! # Custom host, port and reference tables
//! syndicate-api-server --host 0.0.0.0 --port 9000 --tables tables.toml
//!
//! # Settings from a config file
//! syndicate-api-server --config syndicate.toml
//! ```

pub mod config;
pub mod dto;
pub mod error;
pub mod routes;
pub mod server;
pub mod state;

pub use config::ServerConfig;
pub use error::{ApiError, ApiResult};
pub use server::{create_router, create_router_with_cors, run_server};
pub use state::AppState;
