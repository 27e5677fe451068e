//! Setting service — use-cases for reading and upserting settings.

use serde_json::{Map, Value};

use casahub_domain::error::{CasaHubError, NotFoundError};
use casahub_domain::setting::Setting;

use crate::ports::SettingRepository;

/// Application service for setting operations.
///
/// Settings cannot be deleted; the write operations are upserts with
/// last-write-wins semantics.
pub struct SettingService<R> {
    repo: R,
}

impl<R: SettingRepository> SettingService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// List all settings.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_settings(&self) -> Result<Vec<Setting>, CasaHubError> {
        self.repo.get_all().await
    }

    /// Look up a setting by key, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`CasaHubError::NotFound`] when no setting with `key` exists,
    /// or a storage error from the repository.
    pub async fn get_setting(&self, key: String) -> Result<Setting, CasaHubError> {
        let missing = || {
            NotFoundError {
                entity: "Setting",
                id: key.clone(),
            }
            .into()
        };
        self.repo.get_by_key(key.clone()).await?.ok_or_else(missing)
    }

    /// Insert or replace a single setting (last-write-wins).
    ///
    /// # Errors
    ///
    /// Returns [`CasaHubError::Validation`] when `key` is empty, or a
    /// storage error from the repository.
    pub async fn upsert_setting(
        &self,
        key: String,
        value: Map<String, Value>,
    ) -> Result<Setting, CasaHubError> {
        let setting = Setting::new(key, value);
        setting.validate()?;
        let stored = self.repo.upsert(setting).await?;
        tracing::debug!(key = %stored.key, "setting upserted");
        Ok(stored)
    }

    /// Insert or replace a batch of settings atomically.
    ///
    /// Every entry is validated before anything is written, so a bad entry
    /// rejects the whole batch.
    ///
    /// # Errors
    ///
    /// Returns [`CasaHubError::Validation`] when any key is empty, or a
    /// storage error from the repository.
    pub async fn upsert_settings(
        &self,
        entries: Vec<(String, Map<String, Value>)>,
    ) -> Result<Vec<Setting>, CasaHubError> {
        let settings: Vec<Setting> = entries
            .into_iter()
            .map(|(key, value)| Setting::new(key, value))
            .collect();
        for setting in &settings {
            setting.validate()?;
        }
        let count = settings.len();
        let stored = self.repo.upsert_many(settings).await?;
        tracing::debug!(count, "settings bulk upserted");
        Ok(stored)
    }
}
