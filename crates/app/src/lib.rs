//! # casahub-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `ApplianceRepository` — CRUD for appliances
//!   - `SettingRepository` — read and upsert for settings
//! - Define **driving/inbound ports** as use-case structs:
//!   - `ApplianceService` — create, list, get, update, delete
//!   - `SettingService` — list, get, single and bulk upsert
//! - Orchestrate domain objects without knowing *how* persistence works
//!
//! ## Dependency rule
//! Depends on `casahub-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
