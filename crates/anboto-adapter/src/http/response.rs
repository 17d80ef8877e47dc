/*
[INPUT]:  HTTP status, content type and body bytes
[OUTPUT]: Tagged response (parsed JSON or raw)
[POS]:    HTTP layer - response classification
[UPDATE]: When changing how response bodies are exposed
*/

use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::http::Result;

/// Response body that could not be parsed as JSON
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: StatusCode,
    pub content_type: Option<String>,
    pub body: Vec<u8>,
}

impl RawResponse {
    /// Body decoded as UTF-8, lossy
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// Outcome of an API call.
///
/// The service answers with JSON for both successes and API errors, so a
/// parsed body is returned as-is regardless of status. Anything else is
/// handed back untouched for the caller to inspect.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiResponse {
    Json { status: StatusCode, body: Value },
    Raw(RawResponse),
}

impl ApiResponse {
    /// Classify a response body
    pub fn from_parts(status: StatusCode, content_type: Option<String>, body: Vec<u8>) -> Self {
        match serde_json::from_slice::<Value>(&body) {
            Ok(value) => ApiResponse::Json {
                status,
                body: value,
            },
            Err(_) => ApiResponse::Raw(RawResponse {
                status,
                content_type,
                body,
            }),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiResponse::Json { status, .. } => *status,
            ApiResponse::Raw(raw) => raw.status,
        }
    }

    pub fn is_json(&self) -> bool {
        matches!(self, ApiResponse::Json { .. })
    }

    pub fn json(&self) -> Option<&Value> {
        match self {
            ApiResponse::Json { body, .. } => Some(body),
            ApiResponse::Raw(_) => None,
        }
    }

    pub fn into_json(self) -> Option<Value> {
        match self {
            ApiResponse::Json { body, .. } => Some(body),
            ApiResponse::Raw(_) => None,
        }
    }

    pub fn raw(&self) -> Option<&RawResponse> {
        match self {
            ApiResponse::Json { .. } => None,
            ApiResponse::Raw(raw) => Some(raw),
        }
    }

    /// Decode the JSON body into a caller-defined type.
    ///
    /// Returns `Ok(None)` for a raw response.
    pub fn deserialize<T: DeserializeOwned>(&self) -> Result<Option<T>> {
        match self {
            ApiResponse::Json { body, .. } => Ok(Some(serde_json::from_value(body.clone())?)),
            ApiResponse::Raw(_) => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[test]
    fn test_json_body_is_parsed() {
        let response = ApiResponse::from_parts(
            StatusCode::OK,
            Some("application/json".to_string()),
            br#"{"orders":[]}"#.to_vec(),
        );

        assert!(response.is_json());
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.json(), Some(&serde_json::json!({ "orders": [] })));
        assert!(response.raw().is_none());
    }

    #[test]
    fn test_non_json_body_is_kept_raw() {
        let response = ApiResponse::from_parts(
            StatusCode::BAD_GATEWAY,
            Some("text/html".to_string()),
            b"<html>bad gateway</html>".to_vec(),
        );

        assert!(!response.is_json());
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        let raw = response.raw().expect("raw response");
        assert_eq!(raw.text(), "<html>bad gateway</html>");
        assert_eq!(raw.content_type.as_deref(), Some("text/html"));
        assert!(response.into_json().is_none());
    }

    #[test]
    fn test_empty_body_is_raw() {
        let response = ApiResponse::from_parts(StatusCode::NO_CONTENT, None, Vec::new());
        assert!(response.raw().is_some());
    }

    #[test]
    fn test_error_status_with_json_stays_json() {
        let response = ApiResponse::from_parts(
            StatusCode::UNAUTHORIZED,
            None,
            br#"{"code":"INVALID_SIGNATURE"}"#.to_vec(),
        );
        assert!(response.is_json());
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn test_deserialize_typed() {
        #[derive(Debug, Deserialize, PartialEq)]
        struct Ack {
            success: bool,
        }

        let response =
            ApiResponse::from_parts(StatusCode::OK, None, br#"{"success":true}"#.to_vec());
        let ack: Option<Ack> = response.deserialize().unwrap();
        assert_eq!(ack, Some(Ack { success: true }));

        let raw = ApiResponse::from_parts(StatusCode::OK, None, b"ok".to_vec());
        let none: Option<Ack> = raw.deserialize().unwrap();
        assert!(none.is_none());
    }
}
