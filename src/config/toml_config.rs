use crate::domain::ports::ConfigProvider;
use crate::utils::error::{Result, SweepError};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// File-based configuration for unattended runs. Values left out fall
/// back to the same defaults the CLI flags use.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub source: SourceConfig,
    pub controls: Option<ControlsConfig>,
    pub policy: Option<PolicyConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    pub base_url: String,
    pub listing_path: Option<String>,
    /// Read the listing from this file instead of fetching it.
    pub file: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ControlsConfig {
    pub marker_class: Option<String>,
    pub id_attribute: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PolicyConfig {
    pub keep_upcoming: Option<bool>,
    pub dry_run: Option<bool>,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(SweepError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| SweepError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR_NAME}` placeholders with environment values.
    /// Unset variables are left as-is so validation can point at them.
    fn substitute_env_vars(content: &str) -> String {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").unwrap();

        re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .to_string()
    }

    pub fn source_file(&self) -> Option<&str> {
        self.source.file.as_deref()
    }
}

impl ConfigProvider for TomlConfig {
    fn base_url(&self) -> &str {
        &self.source.base_url
    }

    fn listing_path(&self) -> &str {
        self.source.listing_path.as_deref().unwrap_or("/venues")
    }

    fn marker_class(&self) -> &str {
        self.controls
            .as_ref()
            .and_then(|c| c.marker_class.as_deref())
            .unwrap_or("venue-delete")
    }

    fn id_attribute(&self) -> &str {
        self.controls
            .as_ref()
            .and_then(|c| c.id_attribute.as_deref())
            .unwrap_or("data-id")
    }

    fn keep_upcoming(&self) -> bool {
        self.policy
            .as_ref()
            .and_then(|p| p.keep_upcoming)
            .unwrap_or(false)
    }

    fn dry_run(&self) -> bool {
        self.policy.as_ref().and_then(|p| p.dry_run).unwrap_or(false)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_url("source.base_url", &self.source.base_url)?;
        validation::validate_leading_slash("source.listing_path", self.listing_path())?;
        validation::validate_non_empty_string("controls.marker_class", self.marker_class())?;
        validation::validate_non_empty_string("controls.id_attribute", self.id_attribute())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal_toml_config() {
        let toml_content = r#"
[source]
base_url = "http://localhost:5000"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.base_url(), "http://localhost:5000");
        assert_eq!(config.listing_path(), "/venues");
        assert_eq!(config.marker_class(), "venue-delete");
        assert_eq!(config.id_attribute(), "data-id");
        assert!(!config.keep_upcoming());
        assert!(!config.dry_run());
    }

    #[test]
    fn test_parse_full_toml_config() {
        let toml_content = r#"
[source]
base_url = "https://fyyur.example.com"
listing_path = "/admin/venues"

[controls]
marker_class = "remove-venue"
id_attribute = "data-venue-id"

[policy]
keep_upcoming = true
dry_run = true
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.listing_path(), "/admin/venues");
        assert_eq!(config.marker_class(), "remove-venue");
        assert_eq!(config.id_attribute(), "data-venue-id");
        assert!(config.keep_upcoming());
        assert!(config.dry_run());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("SWEEP_TEST_BASE_URL", "http://venues.test");

        let toml_content = r#"
[source]
base_url = "${SWEEP_TEST_BASE_URL}"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.base_url(), "http://venues.test");

        std::env::remove_var("SWEEP_TEST_BASE_URL");
    }

    #[test]
    fn test_unset_env_var_fails_validation() {
        let toml_content = r#"
[source]
base_url = "${SWEEP_TEST_UNSET_VAR}"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_toml_is_a_config_error() {
        let result = TomlConfig::from_toml_str("[source\nbase_url = ");
        assert!(matches!(result, Err(SweepError::ConfigError { .. })));
    }
}
