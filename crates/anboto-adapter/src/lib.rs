/*
[INPUT]:  Crate modules and public type definitions
[OUTPUT]: Public Anboto adapter crate surface
[POS]:    Crate root - module wiring
[UPDATE]: When public modules or exports change
*/

pub mod auth;
pub mod http;
pub mod types;

// Re-export commonly used types from auth
pub use auth::{Credentials, HmacSigner};

// Re-export commonly used types from http
pub use http::{
    AnbotoClient,
    AnbotoError,
    ApiResponse,
    ClientConfig,
    RawResponse,
    RequestSigner,
    Result,
    SignedRequest,
    RECV_WINDOW,
    TESTNET_BASE_URL,
};

// Re-export all types
pub use types::*;

// Status codes appear in every ApiResponse
pub use reqwest::StatusCode;
