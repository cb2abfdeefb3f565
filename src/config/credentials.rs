//! Credential resolution from configuration.
//!
//! The API key comes either from the config file or from the environment
//! variable it names, and is wrapped so it never reaches a log line.

use super::types::ApiConfig;

/// Wrapper for sensitive strings that prevents accidental logging.
///
/// The inner value is never exposed via Debug or Display traits.
/// Use `expose()` to access the actual value when needed for API calls.
#[derive(Clone, PartialEq, Eq)]
pub struct SecureString(String);

impl SecureString {
    /// Create a new secure string.
    pub fn new(value: String) -> Self {
        Self(value)
    }

    /// Expose the inner value.
    ///
    /// Use sparingly and only when actually sending to APIs.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for SecureString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SecureString(••••••••)")
    }
}

impl std::fmt::Display for SecureString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "••••••••")
    }
}

/// Outcome of looking up the API key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CredentialStatus {
    /// API key resolved successfully.
    Configured(SecureString),
    /// API key is missing or empty.
    Unconfigured {
        /// Reason for missing configuration.
        reason: String,
    },
}

impl CredentialStatus {
    /// The key, if one was found.
    pub fn key(&self) -> Option<&SecureString> {
        match self {
            CredentialStatus::Configured(key) => Some(key),
            CredentialStatus::Unconfigured { .. } => None,
        }
    }
}

impl ApiConfig {
    /// Resolve the API key: literal `api_key` first, then the environment.
    ///
    /// Read on demand, so the environment at call time wins.
    pub fn resolve_credential(&self) -> CredentialStatus {
        self.resolve_credential_with(|name| std::env::var(name).ok())
    }

    /// Same as [`resolve_credential`](Self::resolve_credential) with an
    /// injectable environment lookup.
    pub fn resolve_credential_with<F>(&self, lookup: F) -> CredentialStatus
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(ref key) = self.api_key {
            if !key.is_empty() {
                return CredentialStatus::Configured(SecureString::new(key.clone()));
            }
        }

        match lookup(&self.api_key_env) {
            Some(key) if !key.is_empty() => CredentialStatus::Configured(SecureString::new(key)),
            Some(_) => CredentialStatus::Unconfigured {
                reason: format!("Environment variable {} is empty", self.api_key_env),
            },
            None => CredentialStatus::Unconfigured {
                reason: format!("Environment variable {} is not set", self.api_key_env),
            },
        }
    }
}
