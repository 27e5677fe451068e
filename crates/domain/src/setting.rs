//! Setting — a key/value configuration record.
//!
//! Settings are addressed by a unique string `key`; the `value` is an open
//! JSON object. Upserts are last-write-wins.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{CasaHubError, ValidationError};
use crate::time::Timestamp;

/// A key/value configuration record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Setting {
    pub key: String,
    pub value: Map<String, Value>,
    pub updated_at: Timestamp,
}

impl Setting {
    /// Construct a setting with the current time as `updated_at`.
    #[must_use]
    pub fn new(key: impl Into<String>, value: Map<String, Value>) -> Self {
        Self {
            key: key.into(),
            value,
            updated_at: crate::time::now(),
        }
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`CasaHubError::Validation`] when `key` is empty.
    pub fn validate(&self) -> Result<(), CasaHubError> {
        if self.key.is_empty() {
            return Err(ValidationError::EmptyKey.into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn value(pairs: &[(&str, &str)]) -> Map<String, Value> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), Value::String((*v).to_string())))
            .collect()
    }

    #[test]
    fn should_construct_setting_with_key_and_value() {
        let setting = Setting::new("locale", value(&[("language", "fr")]));
        assert_eq!(setting.key, "locale");
        assert_eq!(
            setting.value.get("language"),
            Some(&Value::String("fr".to_string()))
        );
        assert!(setting.validate().is_ok());
    }

    #[test]
    fn should_return_validation_error_when_key_is_empty() {
        let setting = Setting::new("", Map::new());
        assert!(matches!(
            setting.validate(),
            Err(CasaHubError::Validation(ValidationError::EmptyKey))
        ));
    }

    #[test]
    fn should_roundtrip_through_serde_json() {
        let setting = Setting::new("theme", value(&[("mode", "dark")]));
        let json = serde_json::to_string(&setting).unwrap();
        let parsed: Setting = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.key, setting.key);
        assert_eq!(parsed.value, setting.value);
    }
}
