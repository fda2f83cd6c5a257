//! Transport layer
//!
//! `HttpClient` is the seam between the typed API and the wire. The network
//! implementation talks to the real backend; the oneshot implementation calls
//! an axum `Router` in-process.

pub mod http;
#[cfg(feature = "in-process")]
pub mod http_oneshot;

pub use http::{HttpClient, NetworkHttpClient};
#[cfg(feature = "in-process")]
pub use http_oneshot::OneshotHttpClient;
