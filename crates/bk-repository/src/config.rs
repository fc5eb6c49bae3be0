use serde::{Deserialize, Serialize};

use crate::error::{RepositoryError, RepositoryResult};

/// What `update` does when no object is stored under the object's key.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UpdatePolicy {
    /// Fail with [`RepositoryError::NotFound`], the same way `delete` does.
    #[default]
    Strict,
    /// Insert the object under its key, at the end of the insertion order.
    /// The key counter is advanced past the inserted key so later `add` calls
    /// never collide with it; inserting the largest possible key exhausts the
    /// counter instead of failing.
    Upsert,
}

/// Configuration for a repository instance.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RepositoryConfig {
    /// Behavior of `update` on an unknown key.
    pub update_policy: UpdatePolicy,
}

impl RepositoryConfig {
    /// A configuration that lets `update` create missing entries.
    pub fn upsert() -> Self {
        Self {
            update_policy: UpdatePolicy::Upsert,
        }
    }

    /// Parse a configuration from TOML text. Missing keys take defaults.
    pub fn from_toml_str(text: &str) -> RepositoryResult<Self> {
        toml::from_str(text).map_err(|e| RepositoryError::Config(e.to_string()))
    }

    /// Render this configuration as TOML text.
    pub fn to_toml_string(&self) -> RepositoryResult<String> {
        toml::to_string(self).map_err(|e| RepositoryError::Config(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_strict() {
        let c = RepositoryConfig::default();
        assert_eq!(c.update_policy, UpdatePolicy::Strict);
    }

    #[test]
    fn parse_upsert_policy() {
        let c = RepositoryConfig::from_toml_str(r#"update_policy = "upsert""#).unwrap();
        assert_eq!(c, RepositoryConfig::upsert());
    }

    #[test]
    fn empty_text_takes_defaults() {
        let c = RepositoryConfig::from_toml_str("").unwrap();
        assert_eq!(c, RepositoryConfig::default());
    }

    #[test]
    fn unknown_policy_is_a_config_error() {
        let err = RepositoryConfig::from_toml_str(r#"update_policy = "merge""#).unwrap_err();
        assert!(matches!(err, RepositoryError::Config(_)));
    }

    #[test]
    fn toml_output_parses_back() {
        let text = RepositoryConfig::upsert().to_toml_string().unwrap();
        assert!(text.contains("upsert"));
        let parsed = RepositoryConfig::from_toml_str(&text).unwrap();
        assert_eq!(parsed.update_policy, UpdatePolicy::Upsert);
    }
}
