//! Mailchimp list identifiers and the form fields derived from them.

use serde::{Deserialize, Serialize};

use crate::dispatch::Submission;
use crate::error::ConfigError;

/// Name of the email field Mailchimp's embedded forms expect.
pub const EMAIL_FIELD: &str = "EMAIL";

/// Fixed identifiers of the waitlist audience.
///
/// Mailchimp embedded forms carry `u` (account), `id` (audience) and `f_id`
/// (form) both in the action query string and as hidden inputs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProviderConfig {
    /// Endpoint without query string.
    pub action: String,
    /// Account id (`u`).
    pub user_id: String,
    /// Audience id (`id`).
    pub list_id: String,
    /// Embedded form id (`f_id`).
    pub form_id: String,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            action: "https://deckbuildr.us1.list-manage.com/subscribe/post".to_string(),
            user_id: "5708d487c290f03aaa16cbbd7".to_string(),
            list_id: "4df9c7ef2c".to_string(),
            form_id: "00e0ede4f0".to_string(),
        }
    }
}

impl ProviderConfig {
    /// Full form `action`, identifiers included in the query string.
    pub fn action_url(&self) -> String {
        format!(
            "{}?u={}&id={}&f_id={}",
            self.action,
            urlencoding::encode(&self.user_id),
            urlencoding::encode(&self.list_id),
            urlencoding::encode(&self.form_id),
        )
    }

    /// Decoy input name, `b_<u>_<id>`.
    pub fn honeypot_name(&self) -> String {
        format!("b_{}_{}", self.user_id, self.list_id)
    }

    /// The three identifier inputs rendered as `type="hidden"`.
    pub fn hidden_fields(&self) -> [(&'static str, &str); 3] {
        [
            ("u", self.user_id.as_str()),
            ("id", self.list_id.as_str()),
            ("f_id", self.form_id.as_str()),
        ]
    }

    /// Build the payload for one attempt.
    pub fn submission(&self, email: &str, honeypot: &str, target: &str) -> Submission {
        let mut fields: Vec<(String, String)> = self
            .hidden_fields()
            .iter()
            .map(|(name, value)| (name.to_string(), value.to_string()))
            .collect();
        fields.push((EMAIL_FIELD.to_string(), email.to_string()));
        fields.push((self.honeypot_name(), honeypot.to_string()));

        Submission {
            action: self.action_url(),
            target: target.to_string(),
            fields,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.action.starts_with("https://") {
            return Err(ConfigError::Invalid(format!(
                "provider action must be https, got {:?}",
                self.action
            )));
        }
        if self.action.contains('?') {
            return Err(ConfigError::Invalid(
                "provider action must not carry a query string".to_string(),
            ));
        }
        for (name, value) in self.hidden_fields() {
            if value.trim().is_empty() {
                return Err(ConfigError::Invalid(format!("provider field `{name}` is empty")));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn default_action_url_matches_list() {
        assert_eq!(
            ProviderConfig::default().action_url(),
            "https://deckbuildr.us1.list-manage.com/subscribe/post?u=5708d487c290f03aaa16cbbd7&id=4df9c7ef2c&f_id=00e0ede4f0"
        );
    }

    #[test]
    fn honeypot_name_joins_ids() {
        assert_eq!(
            ProviderConfig::default().honeypot_name(),
            "b_5708d487c290f03aaa16cbbd7_4df9c7ef2c"
        );
    }

    #[test]
    fn submission_field_order() {
        let submission = ProviderConfig::default().submission("a@b.com", "", "mailchimp_iframe");
        let names: Vec<&str> = submission.fields.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(
            names,
            vec!["u", "id", "f_id", "EMAIL", "b_5708d487c290f03aaa16cbbd7_4df9c7ef2c"]
        );
        assert_eq!(submission.field(EMAIL_FIELD), Some("a@b.com"));
        assert_eq!(submission.target, "mailchimp_iframe");
    }

    #[test]
    fn query_values_are_encoded() {
        let provider = ProviderConfig {
            user_id: "a b".to_string(),
            ..ProviderConfig::default()
        };
        assert!(provider.action_url().contains("u=a%20b"));
    }

    #[test]
    fn validate_rejects_plain_http() {
        let provider = ProviderConfig {
            action: "http://example.com/subscribe/post".to_string(),
            ..ProviderConfig::default()
        };
        assert!(matches!(provider.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn validate_rejects_empty_ids() {
        let provider = ProviderConfig {
            form_id: "  ".to_string(),
            ..ProviderConfig::default()
        };
        let err = provider.validate().unwrap_err();
        assert!(err.to_string().contains("f_id"));
    }

    #[test]
    fn default_validates() {
        assert!(ProviderConfig::default().validate().is_ok());
    }
}
