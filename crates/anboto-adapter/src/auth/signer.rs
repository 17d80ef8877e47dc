/*
[INPUT]:  Message bytes and decoded secret key
[OUTPUT]: Base64-encoded HMAC-SHA256 signatures
[POS]:    Auth layer - cryptographic signing for request authentication
[UPDATE]: When changing signing algorithm or output encoding
*/

use std::fmt;

use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};
use hmac::{Hmac, Mac};
use sha2::Sha256;

use super::Credentials;
use crate::http::{AnbotoError, Result};

type HmacSha256 = Hmac<Sha256>;

/// HMAC-SHA256 signer keyed with the decoded API secret
#[derive(Clone)]
pub struct HmacSigner {
    keyed: HmacSha256,
}

impl HmacSigner {
    /// Key a signer from credentials
    pub fn new(credentials: &Credentials) -> Result<Self> {
        let keyed = HmacSha256::new_from_slice(credentials.expose_secret())
            .map_err(|_| AnbotoError::InvalidKey)?;
        Ok(Self { keyed })
    }

    /// Sign a message and return the base64-encoded MAC
    pub fn sign(&self, message: &[u8]) -> String {
        let mut mac = self.keyed.clone();
        mac.update(message);
        BASE64.encode(mac.finalize().into_bytes())
    }
}

impl fmt::Debug for HmacSigner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("HmacSigner([REDACTED])")
    }
}
