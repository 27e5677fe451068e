//! JSON REST API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod appliances;
#[allow(clippy::missing_errors_doc)]
pub mod settings;

use axum::Router;
use axum::routing::get;

use casahub_app::ports::{ApplianceRepository, SettingRepository};

use crate::state::AppState;

/// Build the resource sub-router.
pub fn routes<AR, SR>() -> Router<AppState<AR, SR>>
where
    AR: ApplianceRepository + Send + Sync + 'static,
    SR: SettingRepository + Send + Sync + 'static,
{
    Router::new()
        // Appliances
        .route(
            "/appliances",
            get(appliances::list::<AR, SR>).post(appliances::create::<AR, SR>),
        )
        .route(
            "/appliances/{id}",
            get(appliances::get::<AR, SR>)
                .put(appliances::update::<AR, SR>)
                .delete(appliances::delete::<AR, SR>),
        )
        // Settings
        .route(
            "/settings",
            get(settings::list::<AR, SR>).put(settings::update_multiple::<AR, SR>),
        )
        .route(
            "/settings/{key}",
            get(settings::get::<AR, SR>).put(settings::update::<AR, SR>),
        )
}
