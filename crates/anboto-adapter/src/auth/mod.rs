/*
[INPUT]:  API key and base64 secret
[OUTPUT]: Credentials and a keyed HMAC-SHA256 signer
[POS]:    Auth layer - handles Anboto API authentication
[UPDATE]: When auth flow or signature methods change
*/

pub mod credentials;
pub mod signer;

pub use credentials::Credentials;
pub use signer::HmacSigner;
