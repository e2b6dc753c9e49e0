//! # Catalog Service
//!
//! Product catalog REST service with page-based listing.
//!
//! ## Architecture
//!
//! - **domain**: Product model and repository traits
//! - **application**: Product use cases on top of the paginator
//! - **infrastructure**: SeaORM/SQLite and in-memory repositories
//! - **interfaces**: REST API with Swagger documentation
//! - **shared**: Pagination, content validation, errors and small utilities

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;
pub mod server;
pub mod shared;

pub use config::{default_config_path, AppConfig, ConfigError};

pub use infrastructure::{init_database, DatabaseConfig, SeaOrmRepositoryProvider};

pub use interfaces::http::create_api_router;

pub use shared::types::{PageRequest, PageResult, Paginator};
