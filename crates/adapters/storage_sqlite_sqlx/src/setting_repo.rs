//! `SQLite` implementation of [`SettingRepository`].

use std::future::Future;

use chrono::{DateTime, Utc};
use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use casahub_app::ports::SettingRepository;
use casahub_domain::error::CasaHubError;
use casahub_domain::setting::Setting;

use crate::error::StorageError;

/// Wrapper for converting database rows into domain [`Setting`].
struct Wrapper(Setting);

impl Wrapper {
    fn maybe(value: Option<Self>) -> Option<Setting> {
        value.map(|w| w.0)
    }
}

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let key: String = row.try_get("key")?;
        let value: String = row.try_get("value")?;
        let updated_at: String = row.try_get("updated_at")?;

        let value =
            serde_json::from_str(&value).map_err(|err| sqlx::Error::Decode(Box::new(err)))?;
        let updated_at = DateTime::parse_from_rfc3339(&updated_at)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(|err| sqlx::Error::Decode(Box::new(err)))?;

        Ok(Self(Setting {
            key,
            value,
            updated_at,
        }))
    }
}

const UPSERT: &str = "INSERT INTO settings (key, value, updated_at) VALUES (?, ?, ?) \
    ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at";
const SELECT_BY_KEY: &str = "SELECT * FROM settings WHERE key = ?";
const SELECT_ALL: &str = "SELECT * FROM settings ORDER BY key";

/// `SQLite`-backed setting repository.
pub struct SqliteSettingRepository {
    pool: SqlitePool,
}

impl SqliteSettingRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl SettingRepository for SqliteSettingRepository {
    fn upsert(&self, setting: Setting) -> impl Future<Output = Result<Setting, CasaHubError>> + Send {
        let pool = self.pool.clone();
        async move {
            let value = serde_json::to_string(&setting.value).map_err(StorageError::from)?;

            sqlx::query(UPSERT)
                .bind(&setting.key)
                .bind(value)
                .bind(setting.updated_at.to_rfc3339())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(setting)
        }
    }

    fn upsert_many(
        &self,
        settings: Vec<Setting>,
    ) -> impl Future<Output = Result<Vec<Setting>, CasaHubError>> + Send {
        let pool = self.pool.clone();
        async move {
            // One transaction so a failing entry rolls back the whole batch.
            let mut tx = pool.begin().await.map_err(StorageError::from)?;

            for setting in &settings {
                let value = serde_json::to_string(&setting.value).map_err(StorageError::from)?;

                sqlx::query(UPSERT)
                    .bind(&setting.key)
                    .bind(value)
                    .bind(setting.updated_at.to_rfc3339())
                    .execute(&mut *tx)
                    .await
                    .map_err(StorageError::from)?;
            }

            tx.commit().await.map_err(StorageError::from)?;

            Ok(settings)
        }
    }

    fn get_by_key(
        &self,
        key: String,
    ) -> impl Future<Output = Result<Option<Setting>, CasaHubError>> + Send {
        let pool = self.pool.clone();
        async move {
            let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_KEY)
                .bind(&key)
                .fetch_optional(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(Wrapper::maybe(row))
        }
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<Setting>, CasaHubError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<Wrapper> = sqlx::query_as(SELECT_ALL)
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|w| w.0).collect())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::Config;
    use serde_json::{Map, Value};

    async fn setup() -> SqliteSettingRepository {
        let db = Config {
            database_url: "sqlite::memory:".to_string(),
        }
        .build()
        .await
        .unwrap();
        SqliteSettingRepository::new(db.pool().clone())
    }

    fn value(pairs: &[(&str, &str)]) -> Map<String, Value> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), Value::String((*v).to_string())))
            .collect()
    }

    #[tokio::test]
    async fn should_upsert_and_retrieve_setting() {
        let repo = setup().await;
        repo.upsert(Setting::new("locale", value(&[("language", "fr")])))
            .await
            .unwrap();

        let fetched = repo.get_by_key("locale".to_string()).await.unwrap().unwrap();
        assert_eq!(fetched.key, "locale");
        assert_eq!(
            fetched.value.get("language"),
            Some(&Value::String("fr".to_string()))
        );
    }

    #[tokio::test]
    async fn should_return_none_when_setting_not_found() {
        let repo = setup().await;
        let result = repo.get_by_key("missing".to_string()).await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn should_replace_value_when_upserting_same_key() {
        let repo = setup().await;
        repo.upsert(Setting::new("theme", value(&[("mode", "light")])))
            .await
            .unwrap();
        repo.upsert(Setting::new("theme", value(&[("mode", "dark")])))
            .await
            .unwrap();

        let all = repo.get_all().await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(
            all[0].value.get("mode"),
            Some(&Value::String("dark".to_string()))
        );
    }

    #[tokio::test]
    async fn should_upsert_many_in_one_batch() {
        let repo = setup().await;
        repo.upsert_many(vec![
            Setting::new("locale", value(&[("language", "en")])),
            Setting::new("theme", value(&[("mode", "dark")])),
        ])
        .await
        .unwrap();

        let all = repo.get_all().await.unwrap();
        assert_eq!(all.len(), 2);
    }

    #[tokio::test]
    async fn should_be_idempotent_when_upserting_batch_twice() {
        let repo = setup().await;
        let batch = vec![
            Setting::new("locale", value(&[("language", "en")])),
            Setting::new("theme", value(&[("mode", "dark")])),
        ];
        repo.upsert_many(batch.clone()).await.unwrap();
        repo.upsert_many(batch).await.unwrap();

        let all = repo.get_all().await.unwrap();
        assert_eq!(all.len(), 2);
    }

    #[tokio::test]
    async fn should_list_settings_ordered_by_key() {
        let repo = setup().await;
        repo.upsert(Setting::new("zebra", Map::new())).await.unwrap();
        repo.upsert(Setting::new("alpha", Map::new())).await.unwrap();

        let all = repo.get_all().await.unwrap();
        let keys: Vec<&str> = all.iter().map(|s| s.key.as_str()).collect();
        assert_eq!(keys, vec!["alpha", "zebra"]);
    }
}
