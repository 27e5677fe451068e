//! JSON REST handlers for appliances.

use std::str::FromStr;

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;
use serde_json::{Map, Value};

use casahub_app::ports::{ApplianceRepository, SettingRepository};
use casahub_domain::appliance::Appliance;
use casahub_domain::error::{CasaHubError, ValidationError};
use casahub_domain::id::ApplianceId;

use crate::error::ApiError;
use crate::state::AppState;

/// Request body for creating an appliance.
#[derive(Deserialize)]
pub struct CreateApplianceRequest {
    pub name: String,
    #[serde(default)]
    pub attributes: Map<String, Value>,
}

/// Request body for updating an appliance.
///
/// `name` and `attributes` fully replace the stored values.
#[derive(Deserialize)]
pub struct UpdateApplianceRequest {
    pub name: String,
    #[serde(default)]
    pub attributes: Map<String, Value>,
}

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<Appliance>>),
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
    Ok(Json<Appliance>),
}

impl IntoResponse for GetResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the create endpoint.
pub enum CreateResponse {
    Created(Json<Appliance>),
}

impl IntoResponse for CreateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Created(json) => (StatusCode::CREATED, json).into_response(),
        }
    }
}

/// Possible responses from the update endpoint.
pub enum UpdateResponse {
    Ok(Json<Appliance>),
}

impl IntoResponse for UpdateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the delete endpoint.
pub enum DeleteResponse {
    NoContent,
}

impl IntoResponse for DeleteResponse {
    fn into_response(self) -> Response {
        match self {
            Self::NoContent => StatusCode::NO_CONTENT.into_response(),
        }
    }
}

fn parse_id(id: &str) -> Result<ApplianceId, ApiError> {
    ApplianceId::from_str(id).map_err(|_| {
        ApiError::from(CasaHubError::from(ValidationError::InvalidId(
            id.to_string(),
        )))
    })
}

/// `GET /appliances` — list all appliances.
pub async fn list<AR, SR>(
    State(state): State<AppState<AR, SR>>,
) -> Result<ListResponse, ApiError>
where
    AR: ApplianceRepository + Send + Sync + 'static,
    SR: SettingRepository + Send + Sync + 'static,
{
    let appliances = state.appliance_service.list_appliances().await?;
    Ok(ListResponse::Ok(Json(appliances)))
}

/// `GET /appliances/:id` — get appliance by ID.
pub async fn get<AR, SR>(
    State(state): State<AppState<AR, SR>>,
    Path(id): Path<String>,
) -> Result<GetResponse, ApiError>
where
    AR: ApplianceRepository + Send + Sync + 'static,
    SR: SettingRepository + Send + Sync + 'static,
{
    let appliance_id = parse_id(&id)?;
    let appliance = state.appliance_service.get_appliance(appliance_id).await?;
    Ok(GetResponse::Ok(Json(appliance)))
}

/// `POST /appliances` — create a new appliance.
pub async fn create<AR, SR>(
    State(state): State<AppState<AR, SR>>,
    Json(req): Json<CreateApplianceRequest>,
) -> Result<CreateResponse, ApiError>
where
    AR: ApplianceRepository + Send + Sync + 'static,
    SR: SettingRepository + Send + Sync + 'static,
{
    let appliance = Appliance::builder()
        .name(req.name)
        .attributes(req.attributes)
        .build()?;
    let created = state.appliance_service.create_appliance(appliance).await?;
    Ok(CreateResponse::Created(Json(created)))
}

/// `PUT /appliances/:id` — replace name and attributes of an appliance.
pub async fn update<AR, SR>(
    State(state): State<AppState<AR, SR>>,
    Path(id): Path<String>,
    Json(req): Json<UpdateApplianceRequest>,
) -> Result<UpdateResponse, ApiError>
where
    AR: ApplianceRepository + Send + Sync + 'static,
    SR: SettingRepository + Send + Sync + 'static,
{
    let appliance_id = parse_id(&id)?;
    let updated = state
        .appliance_service
        .update_appliance(appliance_id, req.name, req.attributes)
        .await?;
    Ok(UpdateResponse::Ok(Json(updated)))
}

/// `DELETE /appliances/:id` — delete an appliance.
pub async fn delete<AR, SR>(
    State(state): State<AppState<AR, SR>>,
    Path(id): Path<String>,
) -> Result<DeleteResponse, ApiError>
where
    AR: ApplianceRepository + Send + Sync + 'static,
    SR: SettingRepository + Send + Sync + 'static,
{
    let appliance_id = parse_id(&id)?;
    state
        .appliance_service
        .delete_appliance(appliance_id)
        .await?;
    Ok(DeleteResponse::NoContent)
}
