/*
[INPUT]:  Query parameters, JSON body string and HMAC signer
[OUTPUT]: Signed request descriptor and X-* auth headers
[POS]:    HTTP layer - request signing for authenticated endpoints
[UPDATE]: When changing signing algorithm or header format
*/

use chrono::Utc;
use reqwest::RequestBuilder;

use crate::auth::{Credentials, HmacSigner};
use crate::http::Result;

/// Receive window the server applies to `X-TIMESTAMP`, in milliseconds
pub const RECV_WINDOW: &str = "5000";

pub const HEADER_API_KEY: &str = "X-API-KEY";
pub const HEADER_SIGN: &str = "X-SIGN";
pub const HEADER_TIMESTAMP: &str = "X-TIMESTAMP";
pub const HEADER_RECV_WINDOW: &str = "X-RECV-WINDOW";

/// Everything that went into one request signature
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedRequest {
    pub timestamp: String,
    pub query_string: String,
    pub body: String,
    pub signature: String,
}

/// Signs requests with the account HMAC key
#[derive(Debug)]
pub struct RequestSigner {
    credentials: Credentials,
    signer: HmacSigner,
}

impl RequestSigner {
    /// Create a new request signer owning the given credentials
    pub fn new(credentials: Credentials) -> Result<Self> {
        let signer = HmacSigner::new(&credentials)?;
        Ok(Self {
            credentials,
            signer,
        })
    }

    pub fn api_key(&self) -> &str {
        self.credentials.api_key()
    }

    /// Current wall-clock time in whole milliseconds
    pub fn timestamp() -> String {
        Utc::now().timestamp_millis().to_string()
    }

    /// Build the string that gets signed.
    ///
    /// Format: "{timestamp}{api_key}{recv_window}{query_string}{body}"
    pub fn canonical_string(&self, timestamp: &str, query_string: &str, body: &str) -> String {
        let api_key = self.api_key();
        let mut message = String::with_capacity(
            timestamp.len() + api_key.len() + RECV_WINDOW.len() + query_string.len() + body.len(),
        );
        message.push_str(timestamp);
        message.push_str(api_key);
        message.push_str(RECV_WINDOW);
        message.push_str(query_string);
        message.push_str(body);
        message
    }

    /// Sign a request at an explicit timestamp.
    ///
    /// `body` must be the exact compact JSON that will be sent, or empty.
    pub fn sign_at(
        &self,
        timestamp: String,
        params: &[(&str, String)],
        body: String,
    ) -> SignedRequest {
        let query_string = build_query_string(params);
        let message = self.canonical_string(&timestamp, &query_string, &body);
        let signature = self.signer.sign(message.as_bytes());

        SignedRequest {
            timestamp,
            query_string,
            body,
            signature,
        }
    }

    /// Sign a request at the current time
    pub fn sign(&self, params: &[(&str, String)], body: String) -> SignedRequest {
        self.sign_at(Self::timestamp(), params, body)
    }

    /// Attach the four authentication headers to a request
    pub fn apply_headers(&self, builder: RequestBuilder, signed: &SignedRequest) -> RequestBuilder {
        builder
            .header(HEADER_API_KEY, self.api_key())
            .header(HEADER_SIGN, &signed.signature)
            .header(HEADER_TIMESTAMP, &signed.timestamp)
            .header(HEADER_RECV_WINDOW, RECV_WINDOW)
    }
}

/// Join `key=value` pairs sorted ascending by key.
///
/// Values are not URL-encoded; the transport encodes separately.
pub fn build_query_string(params: &[(&str, String)]) -> String {
    let mut sorted: Vec<&(&str, String)> = params.iter().collect();
    sorted.sort_by(|a, b| a.0.cmp(b.0));

    sorted
        .iter()
        .map(|(key, value)| format!("{key}={value}"))
        .collect::<Vec<_>>()
        .join("&")
}
