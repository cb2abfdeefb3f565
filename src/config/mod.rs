//! Configuration: TOML file, API credentials, request headers.

mod auth;
mod credentials;
mod loader;
mod types;

pub use auth::{build_auth_header, request_headers, Header};
pub use credentials::{CredentialStatus, SecureString};
pub use loader::ConfigError;
pub use types::{ApiConfig, Config, LoggingConfig, DEFAULT_API_KEY_ENV, DEFAULT_ENDPOINT};
