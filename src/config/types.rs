use std::collections::HashSet;

use serde::{
    Deserialize,
    Serialize,
};
use thiserror::Error;

use crate::locale::LocaleId;
use crate::tiers::{
    PriorityTiers,
    Tier,
};

/// Settings file looked up in the workspace root.
pub const CONFIG_FILE_NAME: &str = ".i18n-matrix.json";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Configuration error in '{field_path}': {message}")]
pub struct ValidationError {
    /// JSON path to the field (e.g., "tiers.standard[2]")
    pub field_path: String,
    pub message: String,
}

impl ValidationError {
    #[must_use]
    pub fn new(field_path: impl Into<String>, message: impl Into<String>) -> Self {
        Self { field_path: field_path.into(), message: message.into() }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration validation failed:\n{}", format_validation_errors(.0))]
    ValidationErrors(Vec<ValidationError>),

    #[error("Failed to load configuration file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse configuration: {0}")]
    ParseError(#[from] serde_json::Error),
}

fn format_validation_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .enumerate()
        .map(|(i, err)| format!("  {}. {} - {}", i + 1, err.field_path, err.message))
        .collect::<Vec<_>>()
        .join("\n")
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MatrixSettings {
    /// Max locales per batch.
    pub batch_size: usize,

    /// Parallelism bound handed to the CI layer. Not enforced here.
    pub max_parallel: usize,

    /// Priority tiers. Ignored when `locales` is set.
    pub tiers: PriorityTiers,

    /// Flat, already ordered locale list.
    ///
    /// - `None`: batch the tiers (default)
    /// - `Some([...])`: batch exactly these locales in this order
    pub locales: Option<Vec<LocaleId>>,

    /// Resource mapping file, relative to the workspace root.
    pub resources_file: String,
}

impl MatrixSettings {
    /// # Errors
    /// - Non-positive batch size or parallelism
    /// - Locale listed in more than one tier
    /// - Locale that is empty, contains `,` or is padded with whitespace
    /// - Locale listed twice in `locales`
    /// - Empty resource file path
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if self.batch_size == 0 {
            errors.push(ValidationError::new(
                "batchSize",
                "The batch size must be a positive integer. Example: 4",
            ));
        }

        if self.max_parallel == 0 {
            errors.push(ValidationError::new(
                "maxParallel",
                "The parallelism bound must be a positive integer. Example: 2",
            ));
        }

        for tier in Tier::ALL {
            for (index, locale) in self.tiers.locales(tier).iter().enumerate() {
                if let Some(reason) = locale.defect() {
                    errors.push(invalid_locale(format!("tiers.{tier}[{index}]"), locale, reason));
                }
            }
        }

        for conflict in self.tiers.conflicts() {
            errors.push(ValidationError::new(
                format!("tiers.{}", conflict.second),
                format!(
                    "Locale '{}' is already listed in the '{}' tier. Tiers must not overlap",
                    conflict.locale, conflict.first
                ),
            ));
        }

        if let Some(locales) = &self.locales {
            let mut seen = HashSet::with_capacity(locales.len());
            for (index, locale) in locales.iter().enumerate() {
                if let Some(reason) = locale.defect() {
                    errors.push(invalid_locale(format!("locales[{index}]"), locale, reason));
                } else if !seen.insert(locale) {
                    errors.push(ValidationError::new(
                        format!("locales[{index}]"),
                        format!("Locale '{locale}' is listed more than once"),
                    ));
                }
            }
        }

        if self.resources_file.is_empty() {
            errors.push(ValidationError::new(
                "resourcesFile",
                "The path cannot be empty. Example: \"resources.json\"",
            ));
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }

    /// The locale list to batch, when one overrides the tiers.
    #[must_use]
    pub fn flat_locales(&self) -> Option<&[LocaleId]> {
        self.locales.as_deref()
    }
}

fn invalid_locale(field_path: String, locale: &LocaleId, reason: &str) -> ValidationError {
    ValidationError::new(
        field_path,
        format!("Locale '{locale}' {reason}. Identifiers are joined with ',' in the matrix"),
    )
}

impl Default for MatrixSettings {
    fn default() -> Self {
        Self {
            batch_size: 4,
            max_parallel: 2,
            tiers: PriorityTiers::default(),
            locales: None,
            resources_file: "resources.json".to_string(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing, clippy::expect_used, clippy::panic)]
mod tests {
    use googletest::prelude::*;
    use rstest::*;

    use super::*;
    use crate::test_utils::{
        locales,
        tiers,
    };

    #[rstest]
    fn validate_valid_settings() {
        let settings = MatrixSettings::default();

        assert_that!(settings.validate(), ok(anything()));
    }

    #[rstest]
    fn deserialize_partial_settings() {
        let json = r#"{"batchSize": 6, "locales": ["pt_BR", "zh-Hans"]}"#;

        let settings: MatrixSettings = serde_json::from_str(json).unwrap();

        assert_that!(settings.batch_size, eq(6));
        assert_that!(settings.max_parallel, eq(2));
        assert_that!(settings.locales, some(len(eq(2))));
        assert_that!(settings.resources_file, eq("resources.json"));
    }

    #[rstest]
    fn deserialize_empty_settings() {
        let json = "{}";

        let settings: MatrixSettings = serde_json::from_str(json).unwrap();

        assert_eq!(settings, MatrixSettings::default());
        assert_that!(settings.flat_locales(), none());
    }

    #[rstest]
    fn deserialize_partial_tiers_does_not_inherit_defaults() {
        let json = r#"{"tiers": {"critical": ["pt_BR"]}}"#;

        let settings: MatrixSettings = serde_json::from_str(json).unwrap();

        assert_that!(settings.tiers.critical, len(eq(1)));
        assert_that!(settings.tiers.important, is_empty());
        assert_that!(settings.tiers.standard, is_empty());
    }

    #[rstest]
    fn validate_invalid_batch_size_zero() {
        let settings = MatrixSettings { batch_size: 0, ..MatrixSettings::default() };
        let result = settings.validate();

        assert_that!(
            result,
            err(elements_are![all![
                field!(ValidationError.field_path, eq("batchSize")),
                field!(ValidationError.message, contains_substring("positive integer"))
            ]])
        );
    }

    #[rstest]
    fn validate_invalid_max_parallel_zero() {
        let settings = MatrixSettings { max_parallel: 0, ..MatrixSettings::default() };
        let result = settings.validate();

        assert_that!(
            result,
            err(elements_are![all![
                field!(ValidationError.field_path, eq("maxParallel")),
                field!(ValidationError.message, contains_substring("positive integer"))
            ]])
        );
    }

    #[rstest]
    fn validate_overlapping_tiers() {
        let settings = MatrixSettings {
            tiers: tiers(&["pt_BR", "de"], &["zh-Hans", "de"], &["af_ZA", "pt_BR"]),
            ..MatrixSettings::default()
        };

        let result = settings.validate();

        assert_that!(
            result,
            err(elements_are![
                all![
                    field!(ValidationError.field_path, eq("tiers.important")),
                    field!(ValidationError.message, contains_substring("'de'")),
                    field!(ValidationError.message, contains_substring("'critical' tier"))
                ],
                all![
                    field!(ValidationError.field_path, eq("tiers.standard")),
                    field!(ValidationError.message, contains_substring("'pt_BR'"))
                ]
            ])
        );
    }

    #[rstest]
    fn validate_duplicate_flat_locale() {
        let settings = MatrixSettings {
            locales: Some(locales(&["pt_BR", "zh-Hans", "pt_BR"])),
            ..MatrixSettings::default()
        };

        let result = settings.validate();

        assert_that!(
            result,
            err(elements_are![all![
                field!(ValidationError.field_path, eq("locales[2]")),
                field!(ValidationError.message, contains_substring("more than once"))
            ]])
        );
    }

    #[rstest]
    #[case("", "is empty")]
    #[case("a,b", "contains ','")]
    #[case(" de", "leading or trailing whitespace")]
    fn validate_unjoinable_flat_locale(#[case] id: &str, #[case] reason: &str) {
        let settings = MatrixSettings {
            locales: Some(locales(&["pt_BR", id])),
            ..MatrixSettings::default()
        };

        let result = settings.validate();

        assert_that!(
            result,
            err(elements_are![all![
                field!(ValidationError.field_path, eq("locales[1]")),
                field!(ValidationError.message, contains_substring(reason))
            ]])
        );
    }

    #[rstest]
    fn validate_unjoinable_tier_locale() {
        let settings = MatrixSettings {
            tiers: tiers(&["pt_BR"], &[], &["af_ZA", "a,b"]),
            ..MatrixSettings::default()
        };

        let result = settings.validate();

        assert_that!(
            result,
            err(elements_are![all![
                field!(ValidationError.field_path, eq("tiers.standard[1]")),
                field!(ValidationError.message, contains_substring("'a,b' contains ','"))
            ]])
        );
    }

    #[rstest]
    fn validate_invalid_resources_file_empty() {
        let settings = MatrixSettings { resources_file: String::new(), ..MatrixSettings::default() };
        let result = settings.validate();

        assert_that!(
            result,
            err(elements_are![field!(ValidationError.field_path, eq("resourcesFile"))])
        );
    }

    #[rstest]
    fn config_error_validation_errors_format() {
        let settings = MatrixSettings {
            batch_size: 0,
            resources_file: String::new(),
            ..MatrixSettings::default()
        };

        let validation_result = settings.validate();
        let errors = validation_result.unwrap_err();
        let config_error = ConfigError::ValidationErrors(errors);

        let error_message = format!("{config_error}");
        assert_that!(error_message, contains_substring("Configuration validation failed"));
        assert_that!(error_message, contains_substring("1. batchSize"));
        assert_that!(error_message, contains_substring("2. resourcesFile"));
        assert_that!(error_message, contains_substring("cannot be empty"));
    }
}
