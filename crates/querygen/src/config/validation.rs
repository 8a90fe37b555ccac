//! Settings and request validation.

use super::Settings;
use crate::core::request::CodeGenRequest;
use crate::error::{ModelError, Result};

/// Validate the settings.
pub fn validate(settings: &Settings) -> Result<()> {
    if settings.engine.as_str().trim().is_empty() {
        return Err(ModelError::Config("engine is required".into()));
    }

    for (from, to) in &settings.rename {
        if from.is_empty() {
            return Err(ModelError::Config(
                "rename keys must not be empty".into(),
            ));
        }
        if to.is_empty() {
            return Err(ModelError::Config(format!(
                "rename.{} must not be empty",
                from
            )));
        }
    }

    if settings
        .kotlin
        .inflection_exclude_table_names
        .iter()
        .any(|name| name.trim().is_empty())
    {
        return Err(ModelError::Config(
            "kotlin.inflection_exclude_table_names must not contain empty names".into(),
        ));
    }

    Ok(())
}

/// Validate a full request: its settings plus the catalog's default schema.
pub fn validate_request(request: &CodeGenRequest) -> Result<()> {
    validate(&request.settings)?;

    if request.catalog.default_schema.is_empty() {
        return Err(ModelError::Config(
            "catalog.default_schema is required".into(),
        ));
    }

    Ok(())
}
