//! Shared application state for axum handlers.

use std::sync::Arc;

use casahub_app::ports::{ApplianceRepository, SettingRepository};
use casahub_app::services::appliance_service::ApplianceService;
use casahub_app::services::setting_service::SettingService;

/// Application state shared across all axum handlers.
///
/// Generic over the repository types to avoid dynamic dispatch. `Clone` is
/// implemented manually so the underlying types themselves do not need to be
/// `Clone` — only the `Arc` wrappers are cloned.
pub struct AppState<AR, SR> {
    /// Appliance CRUD service.
    pub appliance_service: Arc<ApplianceService<AR>>,
    /// Setting read/upsert service.
    pub setting_service: Arc<SettingService<SR>>,
}

impl<AR, SR> Clone for AppState<AR, SR> {
    fn clone(&self) -> Self {
        Self {
            appliance_service: Arc::clone(&self.appliance_service),
            setting_service: Arc::clone(&self.setting_service),
        }
    }
}

impl<AR, SR> AppState<AR, SR>
where
    AR: ApplianceRepository + Send + Sync + 'static,
    SR: SettingRepository + Send + Sync + 'static,
{
    /// Create a new application state from service instances.
    pub fn new(
        appliance_service: ApplianceService<AR>,
        setting_service: SettingService<SR>,
    ) -> Self {
        Self {
            appliance_service: Arc::new(appliance_service),
            setting_service: Arc::new(setting_service),
        }
    }
}
