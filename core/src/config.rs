//! Credentials and endpoint settings captured once at client construction.

use std::fmt;

use serde::Deserialize;

use crate::error::{FastBillError, Result};

pub const EMAIL_VAR: &str = "FASTBILL_EMAIL";
pub const API_KEY_VAR: &str = "FASTBILL_API_KEY";
pub const BASE_URL_VAR: &str = "FASTBILL_BASE_URL";

/// Account credentials plus an optional base URL override.
///
/// Both credentials are mandatory. They are checked by
/// [`ClientConfig::validate`], which every client constructor calls, so a
/// blank value never reaches the network.
#[derive(Clone, Deserialize, PartialEq, Eq)]
pub struct ClientConfig {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub api_key: String,
    /// Replaces the variant's default host, e.g. to target a mock server.
    #[serde(default)]
    pub base_url: Option<String>,
}

impl ClientConfig {
    pub fn new(email: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            api_key: api_key.into(),
            base_url: None,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Reads `FASTBILL_EMAIL`, `FASTBILL_API_KEY` and the optional
    /// `FASTBILL_BASE_URL`.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let config = Self {
            email: lookup(EMAIL_VAR).unwrap_or_default(),
            api_key: lookup(API_KEY_VAR).unwrap_or_default(),
            base_url: lookup(BASE_URL_VAR).filter(|url| !url.trim().is_empty()),
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.api_key.trim().is_empty() {
            return Err(FastBillError::MissingCredential { field: "api_key" });
        }
        if self.email.trim().is_empty() {
            return Err(FastBillError::MissingCredential { field: "email" });
        }
        Ok(())
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("email", &self.email)
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use rstest::rstest;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| map.get(name).cloned()
    }

    #[rstest]
    #[case::no_key("me@example.com", "", "api_key")]
    #[case::blank_key("me@example.com", "   ", "api_key")]
    #[case::no_email("", "secret", "email")]
    fn validate_rejects_missing_credentials(
        #[case] email: &str,
        #[case] api_key: &str,
        #[case] expected: &str,
    ) {
        let err = ClientConfig::new(email, api_key).validate().unwrap_err();
        assert!(
            matches!(err, FastBillError::MissingCredential { field } if field == expected),
            "got {err:?}"
        );
    }

    #[test]
    fn validate_accepts_complete_config() {
        assert!(ClientConfig::new("me@example.com", "secret").validate().is_ok());
    }

    #[test]
    fn from_lookup_reads_all_variables() {
        let config = ClientConfig::from_lookup(lookup(&[
            (EMAIL_VAR, "me@example.com"),
            (API_KEY_VAR, "secret"),
            (BASE_URL_VAR, "http://localhost:3000"),
        ]))
        .unwrap();
        assert_eq!(config.email, "me@example.com");
        assert_eq!(config.api_key, "secret");
        assert_eq!(config.base_url.as_deref(), Some("http://localhost:3000"));
    }

    #[test]
    fn from_lookup_fails_without_api_key() {
        let err = ClientConfig::from_lookup(lookup(&[(EMAIL_VAR, "me@example.com")])).unwrap_err();
        assert!(matches!(err, FastBillError::MissingCredential { field: "api_key" }));
    }

    #[test]
    fn from_lookup_ignores_blank_base_url() {
        let config = ClientConfig::from_lookup(lookup(&[
            (EMAIL_VAR, "me@example.com"),
            (API_KEY_VAR, "secret"),
            (BASE_URL_VAR, " "),
        ]))
        .unwrap();
        assert!(config.base_url.is_none());
    }

    #[test]
    fn deserializes_from_json() {
        let config: ClientConfig =
            serde_json::from_str(r#"{"email":"me@example.com","api_key":"secret"}"#).unwrap();
        assert_eq!(config, ClientConfig::new("me@example.com", "secret"));
    }

    #[test]
    fn debug_redacts_api_key() {
        let rendered = format!("{:?}", ClientConfig::new("me@example.com", "secret"));
        assert!(!rendered.contains("secret"));
        assert!(rendered.contains("me@example.com"));
    }
}
