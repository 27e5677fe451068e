//! Storage port — repository traits for persistence.

use std::future::Future;

use casahub_domain::appliance::Appliance;
use casahub_domain::error::CasaHubError;
use casahub_domain::id::ApplianceId;
use casahub_domain::setting::Setting;

/// Repository for persisting and querying [`Appliance`]s.
pub trait ApplianceRepository {
    /// Create a new appliance in storage.
    fn create(
        &self,
        appliance: Appliance,
    ) -> impl Future<Output = Result<Appliance, CasaHubError>> + Send;

    /// Get an appliance by its unique identifier.
    fn get_by_id(
        &self,
        id: ApplianceId,
    ) -> impl Future<Output = Result<Option<Appliance>, CasaHubError>> + Send;

    /// Get all appliances.
    fn get_all(&self) -> impl Future<Output = Result<Vec<Appliance>, CasaHubError>> + Send;

    /// Update an existing appliance.
    fn update(
        &self,
        appliance: Appliance,
    ) -> impl Future<Output = Result<Appliance, CasaHubError>> + Send;

    /// Delete an appliance by its unique identifier.
    fn delete(&self, id: ApplianceId) -> impl Future<Output = Result<(), CasaHubError>> + Send;
}

/// Repository for persisting and querying [`Setting`]s.
///
/// There is deliberately no `delete` — the settings surface does not expose
/// one.
pub trait SettingRepository {
    /// Insert or replace a setting, keyed by `setting.key` (last-write-wins).
    fn upsert(
        &self,
        setting: Setting,
    ) -> impl Future<Output = Result<Setting, CasaHubError>> + Send;

    /// Insert or replace several settings atomically.
    fn upsert_many(
        &self,
        settings: Vec<Setting>,
    ) -> impl Future<Output = Result<Vec<Setting>, CasaHubError>> + Send;

    /// Get a setting by its key.
    fn get_by_key(
        &self,
        key: String,
    ) -> impl Future<Output = Result<Option<Setting>, CasaHubError>> + Send;

    /// Get all settings.
    fn get_all(&self) -> impl Future<Output = Result<Vec<Setting>, CasaHubError>> + Send;
}
