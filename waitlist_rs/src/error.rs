use thiserror::Error;

/// Why an attempt ended in `Failed`.
///
/// The `Display` text is what the page shows inline under the email field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SubmitError {
    /// Empty input or not shaped like `x@y.z`.
    #[error("Please enter a valid email address")]
    InvalidAddress,
    /// The hidden form/frame pair was not there to carry the submission.
    #[error("Unable to submit right now. Please try again.")]
    SurfaceUnavailable,
}

/// Problems with the embedded waitlist configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse waitlist config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid waitlist config: {0}")]
    Invalid(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn submit_error_messages() {
        assert_eq!(
            SubmitError::InvalidAddress.to_string(),
            "Please enter a valid email address"
        );
        assert_eq!(
            SubmitError::SurfaceUnavailable.to_string(),
            "Unable to submit right now. Please try again."
        );
    }

    #[test]
    fn config_error_wraps_toml() {
        let err = toml::from_str::<toml::Table>("= broken").unwrap_err();
        let wrapped = ConfigError::from(err);
        assert!(wrapped.to_string().starts_with("failed to parse waitlist config"));
    }
}
