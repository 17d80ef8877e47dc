/*
[INPUT]:  HTTP configuration (base URL, timeouts, credentials)
[OUTPUT]: Signed requests dispatched through reqwest
[POS]:    HTTP layer - core client implementation
[UPDATE]: When adding connection options or changing client behavior
*/

use std::time::Duration;

use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Method, RequestBuilder, Url};
use serde::Serialize;
use tracing::{debug, warn};

use crate::auth::Credentials;
use crate::http::response::ApiResponse;
use crate::http::signature::{RequestSigner, SignedRequest};
use crate::http::Result;

/// Base URL of the Anboto testnet
pub const TESTNET_BASE_URL: &str = "https://api.testnet.anboto.xyz";

/// HTTP client configuration.
///
/// Unset timeouts leave the transport default in place.
#[derive(Debug, Clone, Default)]
pub struct ClientConfig {
    pub timeout: Option<Duration>,
    pub connect_timeout: Option<Duration>,
}

/// Main HTTP client for the Anboto trading API
#[derive(Debug)]
pub struct AnbotoClient {
    http_client: Client,
    base_url: String,
    signer: RequestSigner,
}

impl AnbotoClient {
    /// Create a new client with default configuration
    pub fn new(base_url: &str, api_key: &str, secret_key: &str) -> Result<Self> {
        Self::with_config(ClientConfig::default(), base_url, api_key, secret_key)
    }

    /// Create a new client with custom configuration.
    ///
    /// # Errors
    /// Fails if the secret is not base64, the base URL does not parse or the
    /// transport cannot be built.
    pub fn with_config(
        config: ClientConfig,
        base_url: &str,
        api_key: &str,
        secret_key: &str,
    ) -> Result<Self> {
        let credentials = Credentials::new(api_key, secret_key)?;
        let signer = RequestSigner::new(credentials)?;

        let base_url = base_url.trim_end_matches('/');
        Url::parse(base_url)?;

        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(connect_timeout) = config.connect_timeout {
            builder = builder.connect_timeout(connect_timeout);
        }

        Ok(Self {
            http_client: builder.build()?,
            base_url: base_url.to_string(),
            signer,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn api_key(&self) -> &str {
        self.signer.api_key()
    }

    /// Build full URL for an endpoint path
    fn endpoint_url(&self, path: &str) -> Result<Url> {
        Ok(Url::parse(&format!("{}{}", self.base_url, path))?)
    }

    /// Issue a signed GET with query parameters
    pub async fn signed_get(&self, path: &str, params: &[(&str, String)]) -> Result<ApiResponse> {
        let signed = self.signer.sign(params, String::new());
        let mut builder = self.http_client.request(Method::GET, self.endpoint_url(path)?);
        if !params.is_empty() {
            let mut sorted = params.to_vec();
            sorted.sort_by(|a, b| a.0.cmp(b.0));
            builder = builder.query(&sorted);
        }

        self.dispatch(Method::GET, path, builder, &signed).await
    }

    /// Issue a signed POST with a JSON body.
    ///
    /// The body is serialized once; the same bytes are signed and sent.
    pub async fn signed_post<B>(&self, path: &str, body: &B) -> Result<ApiResponse>
    where
        B: Serialize + ?Sized,
    {
        let json_body = serde_json::to_string(body)?;
        let signed = self.signer.sign(&[], json_body);
        let builder = self
            .http_client
            .request(Method::POST, self.endpoint_url(path)?)
            .header(CONTENT_TYPE, "application/json")
            .body(signed.body.clone());

        self.dispatch(Method::POST, path, builder, &signed).await
    }

    async fn dispatch(
        &self,
        method: Method,
        path: &str,
        builder: RequestBuilder,
        signed: &SignedRequest,
    ) -> Result<ApiResponse> {
        debug!(
            method = %method,
            path,
            timestamp = %signed.timestamp,
            has_query = !signed.query_string.is_empty(),
            body_len = signed.body.len(),
            "dispatching signed request"
        );

        let response = self.signer.apply_headers(builder, signed).send().await?;
        let status = response.status();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);
        let body = response.bytes().await?.to_vec();
        debug!(path, status = status.as_u16(), "response received");

        let api_response = ApiResponse::from_parts(status, content_type, body);
        if let ApiResponse::Raw(raw) = &api_response {
            warn!(
                path,
                status = status.as_u16(),
                body = %raw.text(),
                "response body is not JSON"
            );
        }
        Ok(api_response)
    }
}
