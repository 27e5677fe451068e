//! Appliance service — use-cases for managing appliances.

use serde_json::{Map, Value};

use casahub_domain::appliance::Appliance;
use casahub_domain::error::{CasaHubError, NotFoundError};
use casahub_domain::id::ApplianceId;

use crate::ports::ApplianceRepository;

/// Application service for appliance CRUD operations.
pub struct ApplianceService<R> {
    repo: R,
}

impl<R: ApplianceRepository> ApplianceService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Create a new appliance after validating domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`CasaHubError::Validation`] if invariants fail, or a
    /// storage error propagated from the repository.
    pub async fn create_appliance(&self, appliance: Appliance) -> Result<Appliance, CasaHubError> {
        appliance.validate()?;
        let created = self.repo.create(appliance).await?;
        tracing::debug!(id = %created.id, "appliance created");
        Ok(created)
    }

    /// Look up an appliance by id, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`CasaHubError::NotFound`] when no appliance with `id` exists,
    /// or a storage error from the repository.
    pub async fn get_appliance(&self, id: ApplianceId) -> Result<Appliance, CasaHubError> {
        self.repo.get_by_id(id).await?.ok_or_else(|| {
            NotFoundError {
                entity: "Appliance",
                id: id.to_string(),
            }
            .into()
        })
    }

    /// List all appliances.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_appliances(&self) -> Result<Vec<Appliance>, CasaHubError> {
        self.repo.get_all().await
    }

    /// Replace the name and attributes of an existing appliance.
    ///
    /// `id` and `created_at` are preserved; `updated_at` bumps.
    ///
    /// # Errors
    ///
    /// Returns [`CasaHubError::NotFound`] when no appliance with `id` exists,
    /// [`CasaHubError::Validation`] if the new content violates invariants,
    /// or a storage error from the repository.
    pub async fn update_appliance(
        &self,
        id: ApplianceId,
        name: String,
        attributes: Map<String, Value>,
    ) -> Result<Appliance, CasaHubError> {
        let mut appliance = self.get_appliance(id).await?;
        appliance.replace(name, attributes)?;
        self.repo.update(appliance).await
    }

    /// Delete an appliance by id.
    ///
    /// # Errors
    ///
    /// Returns [`CasaHubError::NotFound`] when no appliance with `id` exists,
    /// or a storage error propagated from the repository.
    pub async fn delete_appliance(&self, id: ApplianceId) -> Result<(), CasaHubError> {
        // Existence check first so a miss surfaces as NotFound, not a no-op.
        self.get_appliance(id).await?;
        self.repo.delete(id).await?;
        tracing::debug!(%id, "appliance deleted");
        Ok(())
    }
}
