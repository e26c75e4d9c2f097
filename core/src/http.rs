//! HTTP wire types and the transport seam.
//!
//! # Design
//! Requests and responses are plain owned data, so the client core stays
//! deterministic and unit tests can fabricate both sides freely. The one
//! point that touches the network is the `Transport` trait; production code
//! plugs in [`crate::transport::UreqTransport`], tests plug in a recording
//! fake.

use crate::error::ApiError;

/// HTTP method for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

/// An HTTP request described as plain data. `path` is the absolute URL
/// (base URL already applied).
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub path: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

/// An HTTP response described as plain data, as handed back by a
/// [`Transport`].
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

/// Executes a single HTTP round-trip.
///
/// Implementations must return non-2xx responses as `Ok(HttpResponse)` —
/// status interpretation belongs to [`crate::client::HttpClient`]. Only
/// transport-level failures (connection refused, DNS, broken stream) map
/// to `Err`.
pub trait Transport {
    fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError>;
}
