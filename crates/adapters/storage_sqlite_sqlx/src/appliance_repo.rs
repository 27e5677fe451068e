//! `SQLite` implementation of [`ApplianceRepository`].

use std::future::Future;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use casahub_app::ports::ApplianceRepository;
use casahub_domain::appliance::Appliance;
use casahub_domain::error::CasaHubError;
use casahub_domain::id::ApplianceId;
use casahub_domain::time::Timestamp;

use crate::error::StorageError;

/// Wrapper for converting database rows into domain [`Appliance`].
struct Wrapper(Appliance);

impl Wrapper {
    fn maybe(value: Option<Self>) -> Option<Appliance> {
        value.map(|w| w.0)
    }
}

fn decode_timestamp(value: &str) -> Result<Timestamp, sqlx::Error> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|err| sqlx::Error::Decode(Box::new(err)))
}

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let id: String = row.try_get("id")?;
        let name: String = row.try_get("name")?;
        let attributes: String = row.try_get("attributes")?;
        let created_at: String = row.try_get("created_at")?;
        let updated_at: String = row.try_get("updated_at")?;

        let id = ApplianceId::from_str(&id).map_err(|err| sqlx::Error::Decode(Box::new(err)))?;
        let attributes =
            serde_json::from_str(&attributes).map_err(|err| sqlx::Error::Decode(Box::new(err)))?;

        Ok(Self(Appliance {
            id,
            name,
            attributes,
            created_at: decode_timestamp(&created_at)?,
            updated_at: decode_timestamp(&updated_at)?,
        }))
    }
}

const INSERT: &str =
    "INSERT INTO appliances (id, name, attributes, created_at, updated_at) VALUES (?, ?, ?, ?, ?)";
const SELECT_BY_ID: &str = "SELECT * FROM appliances WHERE id = ?";
const SELECT_ALL: &str = "SELECT * FROM appliances ORDER BY created_at";
const UPDATE: &str = "UPDATE appliances SET name = ?, attributes = ?, updated_at = ? WHERE id = ?";
const DELETE_BY_ID: &str = "DELETE FROM appliances WHERE id = ?";

/// `SQLite`-backed appliance repository.
pub struct SqliteApplianceRepository {
    pool: SqlitePool,
}

impl SqliteApplianceRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl ApplianceRepository for SqliteApplianceRepository {
    fn create(
        &self,
        appliance: Appliance,
    ) -> impl Future<Output = Result<Appliance, CasaHubError>> + Send {
        let pool = self.pool.clone();
        async move {
            let attributes =
                serde_json::to_string(&appliance.attributes).map_err(StorageError::from)?;

            sqlx::query(INSERT)
                .bind(appliance.id.to_string())
                .bind(&appliance.name)
                .bind(attributes)
                .bind(appliance.created_at.to_rfc3339())
                .bind(appliance.updated_at.to_rfc3339())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(appliance)
        }
    }

    fn get_by_id(
        &self,
        id: ApplianceId,
    ) -> impl Future<Output = Result<Option<Appliance>, CasaHubError>> + Send {
        let pool = self.pool.clone();
        async move {
            let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_ID)
                .bind(id.to_string())
                .fetch_optional(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(Wrapper::maybe(row))
        }
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<Appliance>, CasaHubError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<Wrapper> = sqlx::query_as(SELECT_ALL)
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|w| w.0).collect())
        }
    }

    fn update(
        &self,
        appliance: Appliance,
    ) -> impl Future<Output = Result<Appliance, CasaHubError>> + Send {
        let pool = self.pool.clone();
        async move {
            let attributes =
                serde_json::to_string(&appliance.attributes).map_err(StorageError::from)?;

            sqlx::query(UPDATE)
                .bind(&appliance.name)
                .bind(attributes)
                .bind(appliance.updated_at.to_rfc3339())
                .bind(appliance.id.to_string())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(appliance)
        }
    }

    fn delete(&self, id: ApplianceId) -> impl Future<Output = Result<(), CasaHubError>> + Send {
        let pool = self.pool.clone();
        async move {
            sqlx::query(DELETE_BY_ID)
                .bind(id.to_string())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(())
        }
    }
}
