//! Request headers for the country API.

use super::credentials::CredentialStatus;

/// Header name and value.
pub type Header = (String, String);

/// Build the `Authorization: Bearer` header.
///
/// Returns `None` when no key is configured; the request then goes out
/// unauthenticated and the server decides.
pub fn build_auth_header(credential: &CredentialStatus) -> Option<Header> {
    credential
        .key()
        .map(|key| ("Authorization".to_string(), format!("Bearer {}", key.expose())))
}

/// Headers attached to every request: auth (when available) and content type.
pub fn request_headers(credential: &CredentialStatus) -> Vec<Header> {
    let mut headers = Vec::with_capacity(2);
    if let Some(auth) = build_auth_header(credential) {
        headers.push(auth);
    }
    headers.push(("Content-Type".to_string(), "application/json".to_string()));
    headers
}
