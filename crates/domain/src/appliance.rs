//! Appliance — a managed device record.
//!
//! Beyond its identity and name, an appliance carries an open `attributes`
//! mapping (arbitrary JSON object) so integrations can attach whatever
//! fields they need without schema changes.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{CasaHubError, ValidationError};
use crate::id::ApplianceId;
use crate::time::Timestamp;

/// A managed device record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Appliance {
    pub id: ApplianceId,
    pub name: String,
    pub attributes: Map<String, Value>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Appliance {
    /// Create a builder for constructing an [`Appliance`].
    #[must_use]
    pub fn builder() -> ApplianceBuilder {
        ApplianceBuilder::default()
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`CasaHubError::Validation`] when `name` is empty.
    pub fn validate(&self) -> Result<(), CasaHubError> {
        if self.name.is_empty() {
            return Err(ValidationError::EmptyName.into());
        }
        Ok(())
    }

    /// Replace the mutable content of this record and bump `updated_at`.
    ///
    /// `id` and `created_at` are preserved.
    ///
    /// # Errors
    ///
    /// Returns [`CasaHubError::Validation`] when the new `name` is empty.
    pub fn replace(
        &mut self,
        name: impl Into<String>,
        attributes: Map<String, Value>,
    ) -> Result<(), CasaHubError> {
        self.name = name.into();
        self.attributes = attributes;
        self.updated_at = crate::time::now();
        self.validate()
    }
}

/// Step-by-step builder for [`Appliance`].
#[derive(Debug, Default)]
pub struct ApplianceBuilder {
    id: Option<ApplianceId>,
    name: Option<String>,
    attributes: Option<Map<String, Value>>,
}

impl ApplianceBuilder {
    #[must_use]
    pub fn id(mut self, id: ApplianceId) -> Self {
        self.id = Some(id);
        self
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn attributes(mut self, attributes: Map<String, Value>) -> Self {
        self.attributes = Some(attributes);
        self
    }

    /// Consume the builder, validate, and return an [`Appliance`].
    ///
    /// Timestamps are set to the current time.
    ///
    /// # Errors
    ///
    /// Returns [`CasaHubError::Validation`] if `name` is missing or empty.
    pub fn build(self) -> Result<Appliance, CasaHubError> {
        let now = crate::time::now();
        let appliance = Appliance {
            id: self.id.unwrap_or_default(),
            name: self.name.unwrap_or_default(),
            attributes: self.attributes.unwrap_or_default(),
            created_at: now,
            updated_at: now,
        };
        appliance.validate()?;
        Ok(appliance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attrs(pairs: &[(&str, &str)]) -> Map<String, Value> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), Value::String((*v).to_string())))
            .collect()
    }

    #[test]
    fn should_build_valid_appliance_when_name_provided() {
        let appliance = Appliance::builder().name("Dishwasher").build().unwrap();
        assert_eq!(appliance.name, "Dishwasher");
        assert!(appliance.attributes.is_empty());
        assert_eq!(appliance.created_at, appliance.updated_at);
    }

    #[test]
    fn should_return_validation_error_when_name_is_empty() {
        let result = Appliance::builder().build();
        assert!(matches!(
            result,
            Err(CasaHubError::Validation(ValidationError::EmptyName))
        ));
    }

    #[test]
    fn should_keep_attributes_through_build() {
        let appliance = Appliance::builder()
            .name("Fridge")
            .attributes(attrs(&[("brand", "Smeg")]))
            .build()
            .unwrap();
        assert_eq!(
            appliance.attributes.get("brand"),
            Some(&Value::String("Smeg".to_string()))
        );
    }

    #[test]
    fn should_preserve_id_and_created_at_when_replacing() {
        let mut appliance = Appliance::builder().name("Oven").build().unwrap();
        let id = appliance.id;
        let created_at = appliance.created_at;

        appliance
            .replace("Steam Oven", attrs(&[("power", "2kW")]))
            .unwrap();

        assert_eq!(appliance.id, id);
        assert_eq!(appliance.created_at, created_at);
        assert_eq!(appliance.name, "Steam Oven");
        assert!(appliance.updated_at >= created_at);
    }

    #[test]
    fn should_reject_replace_with_empty_name() {
        let mut appliance = Appliance::builder().name("Oven").build().unwrap();
        let result = appliance.replace("", Map::new());
        assert!(matches!(
            result,
            Err(CasaHubError::Validation(ValidationError::EmptyName))
        ));
    }

    #[test]
    fn should_roundtrip_through_serde_json() {
        let appliance = Appliance::builder()
            .name("Kettle")
            .attributes(attrs(&[("color", "red")]))
            .build()
            .unwrap();
        let json = serde_json::to_string(&appliance).unwrap();
        let parsed: Appliance = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.id, appliance.id);
        assert_eq!(parsed.name, appliance.name);
        assert_eq!(parsed.attributes, appliance.attributes);
    }
}
