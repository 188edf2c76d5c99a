//! TeleWebManager API - user-record service behind the TeleWebManager bots
//!
//! Stores user records (nickname, platform uid, coins, rating, login
//! timestamps) and exposes them over a token-protected REST API.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: Core entities and request payloads
//! - **services**: Application use cases
//! - **infra**: Database, migrations, repositories and unit of work
//! - **api**: HTTP handlers, middleware, and routes
//! - **types**: Shared request/response types (pagination)
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Start the server
//! cargo run -- serve
//!
//! # Run migrations
//! cargo run -- migrate up
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod services;
pub mod types;

// Re-export commonly used types at crate root
pub use api::AppState;
pub use config::Config;
pub use domain::{CreateUser, UpdateUser, User, UserStats};
pub use errors::{AppError, AppResult};
