//! # casahub-adapter-storage-sqlite-sqlx
//!
//! `SQLite` persistence adapter using [sqlx](https://docs.rs/sqlx).
//!
//! ## Responsibilities
//! - Implement the repository port traits defined in `casahub-app::ports::storage`
//! - Manage `SQLite` connection pool lifecycle
//! - Run database migrations (using sqlx embedded migrations)
//! - Map between domain types and database rows
//!
//! ## Dependency rule
//! Depends on `casahub-app` (for port traits) and `casahub-domain` (for domain
//! types). The `app` and `domain` crates must never reference this adapter.

pub mod appliance_repo;
pub mod error;
pub mod pool;
pub mod setting_repo;

pub use appliance_repo::SqliteApplianceRepository;
pub use error::StorageError;
pub use pool::{Config, Database};
pub use setting_repo::SqliteSettingRepository;
