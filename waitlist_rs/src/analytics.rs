//! Process-wide analytics bootstrap.
//!
//! Analytics is installed once per page load, never torn down, and has no
//! interaction with submission state. Page variants may all ask for it; only
//! the first successful request does anything.

use std::sync::atomic::{AtomicBool, Ordering};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AnalyticsConfig {
    pub enabled: bool,
    /// Script URL appended to `<head>` as `async`.
    pub script_src: Option<String>,
    /// Site identifier passed as `data-domain`.
    pub site: Option<String>,
}

impl AnalyticsConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.enabled {
            return Ok(());
        }
        match self.script_src.as_deref() {
            Some(src) if src.starts_with("https://") => Ok(()),
            Some(src) => Err(ConfigError::Invalid(format!(
                "analytics script must be https, got {src:?}"
            ))),
            None => Err(ConfigError::Invalid(
                "analytics is enabled but script_src is missing".to_string(),
            )),
        }
    }
}

/// Outcome of [`AnalyticsGuard::init_once`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalyticsInit {
    /// This call ran the installer.
    Installed,
    /// An earlier call already did.
    AlreadyInitialized,
    /// Configuration turns analytics off.
    Disabled,
}

/// Idempotency flag around a one-time installer.
pub struct AnalyticsGuard {
    initialized: AtomicBool,
}

/// The page-wide guard.
pub static ANALYTICS: AnalyticsGuard = AnalyticsGuard::new();

impl AnalyticsGuard {
    pub const fn new() -> Self {
        Self {
            initialized: AtomicBool::new(false),
        }
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized.load(Ordering::Acquire)
    }

    /// Run `install` the first time this is called with analytics enabled.
    ///
    /// A failing installer releases the guard so a later call can try again.
    pub fn init_once<E>(
        &self,
        config: &AnalyticsConfig,
        install: impl FnOnce(&AnalyticsConfig) -> Result<(), E>,
    ) -> Result<AnalyticsInit, E> {
        if !config.enabled {
            return Ok(AnalyticsInit::Disabled);
        }
        if self
            .initialized
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return Ok(AnalyticsInit::AlreadyInitialized);
        }
        match install(config) {
            Ok(()) => {
                tracing::info!(site = ?config.site, "analytics installed");
                Ok(AnalyticsInit::Installed)
            }
            Err(err) => {
                self.initialized.store(false, Ordering::Release);
                Err(err)
            }
        }
    }
}

impl Default for AnalyticsGuard {
    fn default() -> Self {
        Self::new()
    }
}
