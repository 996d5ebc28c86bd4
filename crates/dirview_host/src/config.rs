//! Client configuration resolved at build time.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// GraphQL endpoint used when the build does not override it.
pub const DEFAULT_API_ENDPOINT: &str = "/_goserve/api/graphql";
/// Path prefix reserved for the backend's API and asset mount.
pub const DEFAULT_MOUNT_PREFIX: &str = "/_goserve";
/// Query suffix asking the backend to serve a subtitle file as WebVTT.
pub const SUBTITLE_VTT_QUERY: &str = "?mode=vtt";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Endpoint and routing settings for one client build.
pub struct ClientConfig {
    /// GraphQL endpoint URL (absolute or origin-relative).
    pub api_endpoint: String,
    /// Reserved mount prefix, with a leading `/` and no trailing `/`.
    pub mount_prefix: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_endpoint: DEFAULT_API_ENDPOINT.to_string(),
            mount_prefix: DEFAULT_MOUNT_PREFIX.to_string(),
        }
    }
}

impl ClientConfig {
    /// Reads `DIRVIEW_API_ENDPOINT` and `DIRVIEW_MOUNT_PREFIX` as captured at compile time.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] when an override is present but invalid.
    pub fn from_build_env() -> Result<Self, ConfigError> {
        Self::from_values(
            option_env!("DIRVIEW_API_ENDPOINT"),
            option_env!("DIRVIEW_MOUNT_PREFIX"),
        )
    }

    /// Builds a configuration from optional overrides, defaulting each absent value.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyEndpoint`] for a blank endpoint and
    /// [`ConfigError::RootMountPrefix`] for a prefix that normalizes to `/`.
    pub fn from_values(
        api_endpoint: Option<&str>,
        mount_prefix: Option<&str>,
    ) -> Result<Self, ConfigError> {
        let config = Self {
            api_endpoint: api_endpoint
                .map(|endpoint| endpoint.trim().to_string())
                .unwrap_or_else(|| DEFAULT_API_ENDPOINT.to_string()),
            mount_prefix: mount_prefix
                .map(normalize_mount_prefix)
                .unwrap_or_else(|| DEFAULT_MOUNT_PREFIX.to_string()),
        };
        config.validate()?;
        Ok(config)
    }

    /// Checks the configuration invariants.
    ///
    /// # Errors
    ///
    /// See [`ClientConfig::from_values`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.api_endpoint.trim().is_empty() {
            return Err(ConfigError::EmptyEndpoint);
        }
        if self.mount_prefix.is_empty() || self.mount_prefix == "/" {
            return Err(ConfigError::RootMountPrefix(self.mount_prefix.clone()));
        }
        Ok(())
    }

    /// Route pattern matching every page below the reserved mount prefix.
    pub fn reserved_route(&self) -> String {
        format!("{}/*any", self.mount_prefix)
    }
}

fn normalize_mount_prefix(raw: &str) -> String {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{trimmed}")
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn defaults_point_at_reserved_mount() {
        let config = ClientConfig::from_values(None, None).expect("defaults");
        assert_eq!(config, ClientConfig::default());
        assert_eq!(config.api_endpoint, "/_goserve/api/graphql");
        assert_eq!(config.reserved_route(), "/_goserve/*any");
    }

    #[test]
    fn overrides_are_normalized() {
        let config = ClientConfig::from_values(
            Some(" https://files.example.test/_api/graphql "),
            Some("_api/"),
        )
        .expect("overrides");
        assert_eq!(
            config.api_endpoint,
            "https://files.example.test/_api/graphql"
        );
        assert_eq!(config.mount_prefix, "/_api");
    }

    #[test]
    fn invalid_overrides_are_rejected() {
        assert_eq!(
            ClientConfig::from_values(Some("  "), None),
            Err(ConfigError::EmptyEndpoint)
        );
        assert_eq!(
            ClientConfig::from_values(None, Some("/")),
            Err(ConfigError::RootMountPrefix("/".into()))
        );
    }
}
