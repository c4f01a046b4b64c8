//! Landing site configuration.
//!
//! The landing crate embeds a `waitlist.toml` at compile time; every field
//! has a default so the file only needs to carry what differs.
//!
//! ```toml
//! submit_timeout_ms = 2000
//! favicon = "/lupin-logo.png"
//!
//! [provider]
//! action = "https://deckbuildr.us1.list-manage.com/subscribe/post"
//! user_id = "5708d487c290f03aaa16cbbd7"
//! list_id = "4df9c7ef2c"
//! form_id = "00e0ede4f0"
//!
//! [analytics]
//! enabled = true
//! script_src = "https://plausible.io/js/script.js"
//! site = "joinlupin.app"
//! ```

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::analytics::AnalyticsConfig;
use crate::error::ConfigError;
use crate::provider::ProviderConfig;
use crate::timer::{DEFAULT_SUBMIT_TIMEOUT, MAX_SUBMIT_TIMEOUT};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WaitlistConfig {
    pub provider: ProviderConfig,
    /// Fallback delay before an unanswered submission counts as accepted.
    pub submit_timeout_ms: u64,
    pub analytics: AnalyticsConfig,
    /// Icon injected into `<head>` at startup.
    pub favicon: String,
}

impl Default for WaitlistConfig {
    fn default() -> Self {
        Self {
            provider: ProviderConfig::default(),
            submit_timeout_ms: DEFAULT_SUBMIT_TIMEOUT.as_millis() as u64,
            analytics: AnalyticsConfig::default(),
            favicon: "/lupin-logo.png".to_string(),
        }
    }
}

impl WaitlistConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        let config: WaitlistConfig = toml::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Like [`WaitlistConfig::from_toml_str`], falling back to defaults.
    pub fn from_toml_or_default(raw: &str) -> Self {
        match Self::from_toml_str(raw) {
            Ok(config) => config,
            Err(err) => {
                tracing::warn!(%err, "using default waitlist config");
                Self::default()
            }
        }
    }

    pub fn submit_timeout(&self) -> Duration {
        Duration::from_millis(self.submit_timeout_ms)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.provider.validate()?;
        if self.submit_timeout_ms == 0 {
            return Err(ConfigError::Invalid(
                "submit_timeout_ms must be greater than zero".to_string(),
            ));
        }
        if self.submit_timeout() > MAX_SUBMIT_TIMEOUT {
            return Err(ConfigError::Invalid(format!(
                "submit_timeout_ms must be at most {}, got {}",
                MAX_SUBMIT_TIMEOUT.as_millis(),
                self.submit_timeout_ms
            )));
        }
        self.analytics.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_document_is_default() {
        let config = WaitlistConfig::from_toml_str("").unwrap();
        assert_eq!(config, WaitlistConfig::default());
        assert_eq!(config.submit_timeout(), Duration::from_millis(2000));
    }

    #[test]
    fn partial_provider_keeps_other_defaults() {
        let config = WaitlistConfig::from_toml_str(
            r#"
            submit_timeout_ms = 3500

            [provider]
            list_id = "abc123"
            "#,
        )
        .unwrap();

        assert_eq!(config.submit_timeout(), Duration::from_millis(3500));
        assert_eq!(config.provider.list_id, "abc123");
        assert_eq!(config.provider.user_id, ProviderConfig::default().user_id);
        assert_eq!(config.favicon, "/lupin-logo.png");
    }

    #[test]
    fn analytics_section() {
        let config = WaitlistConfig::from_toml_str(
            r#"
            [analytics]
            enabled = true
            script_src = "https://plausible.io/js/script.js"
            site = "joinlupin.app"
            "#,
        )
        .unwrap();

        assert!(config.analytics.enabled);
        assert_eq!(config.analytics.site.as_deref(), Some("joinlupin.app"));
    }

    #[test]
    fn rejects_zero_timeout() {
        let err = WaitlistConfig::from_toml_str("submit_timeout_ms = 0").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn rejects_oversized_timeout() {
        let err = WaitlistConfig::from_toml_str("submit_timeout_ms = 9223372036854775807")
            .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
        assert!(err.to_string().contains("at most 60000"));
    }

    #[test]
    fn accepts_timeout_at_cap() {
        let config = WaitlistConfig::from_toml_str("submit_timeout_ms = 60000").unwrap();
        assert_eq!(config.submit_timeout(), MAX_SUBMIT_TIMEOUT);
    }

    #[test]
    fn rejects_insecure_action() {
        let err = WaitlistConfig::from_toml_str(
            r#"
            [provider]
            action = "http://example.com/subscribe/post"
            "#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("https"));
    }

    #[test]
    fn malformed_toml_falls_back() {
        let config = WaitlistConfig::from_toml_or_default("submit_timeout_ms = \"soon\"");
        assert_eq!(config, WaitlistConfig::default());
    }

    #[test]
    fn json_round_trip_for_debug_dumps() {
        let config = WaitlistConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let parsed: WaitlistConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);
    }
}
