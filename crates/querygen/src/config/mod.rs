//! Settings loading and validation.

mod types;
mod validation;

pub use types::*;
pub use validation::validate_request;

use serde::de::DeserializeOwned;
use std::path::Path;

use crate::error::Result;

impl Settings {
    /// Load settings from a YAML or JSON file (chosen by extension).
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let settings: Settings = read_document(path.as_ref())?;
        settings.validate()?;
        Ok(settings)
    }

    /// Parse settings from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let settings: Settings = serde_yaml::from_str(yaml)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Validate the settings.
    pub fn validate(&self) -> Result<()> {
        validation::validate(self)
    }
}

/// Read a JSON (`.json`) or YAML (anything else) document.
pub(crate) fn read_document<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = std::fs::read_to_string(path)?;
    let is_json = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    if is_json {
        Ok(serde_json::from_str(&content)?)
    } else {
        Ok(serde_yaml::from_str(&content)?)
    }
}
