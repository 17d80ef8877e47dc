/*
[INPUT]:  API key and base64-encoded secret key
[OUTPUT]: Credentials holding the decoded secret bytes
[POS]:    Auth layer - credential storage for request signing
[UPDATE]: When changing secret encoding or credential sources
*/

//! API credential management.
//!
//! The secret key arrives base64-encoded and is decoded once at construction.
//! The raw bytes are wrapped in `SecretSlice` so they are zeroed on drop and
//! never printed by `Debug`.

use std::fmt;

use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};
use secrecy::{ExposeSecret, SecretSlice};

use crate::http::Result;

/// API credentials for authenticated requests
pub struct Credentials {
    api_key: String,
    secret: SecretSlice<u8>,
}

impl Credentials {
    /// Create credentials from an API key and a base64-encoded secret.
    ///
    /// # Errors
    /// Returns `AnbotoError::Credentials` if the secret is not valid base64.
    pub fn new(api_key: impl Into<String>, secret_key_b64: impl AsRef<str>) -> Result<Self> {
        let secret = BASE64.decode(secret_key_b64.as_ref())?;
        Ok(Self {
            api_key: api_key.into(),
            secret: SecretSlice::from(secret),
        })
    }

    /// Get the API key (public, safe to log)
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Expose the decoded secret bytes. Only for keying the MAC.
    pub(crate) fn expose_secret(&self) -> &[u8] {
        self.secret.expose_secret()
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &self.api_key)
            .field("secret", &"[REDACTED]")
            .finish()
    }
}
