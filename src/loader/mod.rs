//! One-shot loading of the country list over HTTP.

mod client;
mod error;

pub use client::{decode_response, CountryClient};
pub use error::{FailureKind, LoadError};
