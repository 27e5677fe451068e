//! JSON REST handlers for settings.
//!
//! The settings surface has no delete endpoint; writes are upserts.

use std::collections::BTreeMap;

use axum::Json;
use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};
use serde_json::{Map, Value};

use casahub_app::ports::{ApplianceRepository, SettingRepository};
use casahub_domain::setting::Setting;

use crate::error::ApiError;
use crate::state::AppState;

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<Setting>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the get endpoint.
pub enum GetResponse {
    Ok(Json<Setting>),
}

impl IntoResponse for GetResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the single-upsert endpoint.
pub enum UpdateResponse {
    Ok(Json<Setting>),
}

impl IntoResponse for UpdateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the bulk-upsert endpoint.
pub enum BulkUpdateResponse {
    Ok(Json<Vec<Setting>>),
}

impl IntoResponse for BulkUpdateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `GET /settings` — list all settings.
pub async fn list<AR, SR>(State(state): State<AppState<AR, SR>>) -> Result<ListResponse, ApiError>
where
    AR: ApplianceRepository + Send + Sync + 'static,
    SR: SettingRepository + Send + Sync + 'static,
{
    let settings = state.setting_service.list_settings().await?;
    Ok(ListResponse::Ok(Json(settings)))
}

/// `GET /settings/:key` — get setting by key.
pub async fn get<AR, SR>(
    State(state): State<AppState<AR, SR>>,
    Path(key): Path<String>,
) -> Result<GetResponse, ApiError>
where
    AR: ApplianceRepository + Send + Sync + 'static,
    SR: SettingRepository + Send + Sync + 'static,
{
    let setting = state.setting_service.get_setting(key).await?;
    Ok(GetResponse::Ok(Json(setting)))
}

/// `PUT /settings` — bulk upsert from a `{key: value-object, …}` mapping.
pub async fn update_multiple<AR, SR>(
    State(state): State<AppState<AR, SR>>,
    Json(body): Json<BTreeMap<String, Map<String, Value>>>,
) -> Result<BulkUpdateResponse, ApiError>
where
    AR: ApplianceRepository + Send + Sync + 'static,
    SR: SettingRepository + Send + Sync + 'static,
{
    let entries: Vec<(String, Map<String, Value>)> = body.into_iter().collect();
    let stored = state.setting_service.upsert_settings(entries).await?;
    Ok(BulkUpdateResponse::Ok(Json(stored)))
}

/// `PUT /settings/:key` — upsert a single setting (last-write-wins).
pub async fn update<AR, SR>(
    State(state): State<AppState<AR, SR>>,
    Path(key): Path<String>,
    Json(value): Json<Map<String, Value>>,
) -> Result<UpdateResponse, ApiError>
where
    AR: ApplianceRepository + Send + Sync + 'static,
    SR: SettingRepository + Send + Sync + 'static,
{
    let stored = state.setting_service.upsert_setting(key, value).await?;
    Ok(UpdateResponse::Ok(Json(stored)))
}
