/*
[INPUT]:  HTTP client configuration and API endpoints
[OUTPUT]: Signed HTTP requests and tagged API responses
[POS]:    HTTP layer - REST API communication
[UPDATE]: When adding new endpoints or changing client behavior
*/

pub mod client;
pub mod error;
pub mod orders;
pub mod response;
pub mod signature;

pub use error::{AnbotoError, Result};
pub use response::{ApiResponse, RawResponse};
pub use signature::{RequestSigner, SignedRequest, RECV_WINDOW};

pub use client::{AnbotoClient, ClientConfig, TESTNET_BASE_URL};
