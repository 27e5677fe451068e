//! Axum router assembly.

use axum::Router;
use axum::routing::get;
use tower_http::trace::TraceLayer;

use casahub_app::ports::{ApplianceRepository, SettingRepository};

use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// Mounts the resource routes at the root and includes a [`TraceLayer`] that
/// logs each HTTP request/response at the `DEBUG` level using the `tracing`
/// ecosystem.
pub fn build<AR, SR>(state: AppState<AR, SR>) -> Router
where
    AR: ApplianceRepository + Send + Sync + 'static,
    SR: SettingRepository + Send + Sync + 'static,
{
    Router::new()
        .route("/health", get(health_check))
        .merge(crate::api::routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}
