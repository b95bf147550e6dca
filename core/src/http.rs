//! HTTP transport types for the host-does-IO pattern.
//!
//! # Design
//! These types describe HTTP requests and responses as plain data. The client
//! builds an `HttpRequest` and parses an `HttpResponse` without touching the
//! network itself; a [`Transport`] executes the round-trip in between. Every
//! FastBill call is a `POST` to the same entry point, so the request carries
//! no method.

use crate::error::TransportError;

/// An outbound FastBill call described as plain data. Always sent as `POST`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl HttpRequest {
    /// Looks up a header by case-insensitive name.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// An HTTP response described as plain data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn ok(body: impl Into<String>) -> Self {
        Self {
            status: 200,
            body: body.into(),
        }
    }
}

/// Executes one request and hands back the raw response.
///
/// Implementations report non-2xx statuses as data rather than errors; the
/// client decides what a status means. Timeouts and cancellation are the
/// implementation's business.
pub trait Transport {
    fn send(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn send(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError> {
        (**self).send(request)
    }
}

impl<T: Transport + ?Sized> Transport for Box<T> {
    fn send(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError> {
        (**self).send(request)
    }
}

#[cfg(feature = "ureq")]
pub use self::ureq_transport::UreqTransport;

#[cfg(feature = "ureq")]
mod ureq_transport {
    use std::time::Duration;

    use super::{HttpRequest, HttpResponse, Transport};
    use crate::error::TransportError;

    /// Blocking transport backed by a `ureq` agent.
    ///
    /// The agent is configured with `http_status_as_error(false)` so 4xx/5xx
    /// responses come back as data.
    #[derive(Debug, Clone)]
    pub struct UreqTransport {
        agent: ureq::Agent,
    }

    impl UreqTransport {
        pub fn new() -> Self {
            Self::build(None)
        }

        /// Applies a global timeout to every call.
        pub fn with_timeout(timeout: Duration) -> Self {
            Self::build(Some(timeout))
        }

        fn build(timeout: Option<Duration>) -> Self {
            let agent = ureq::Agent::config_builder()
                .http_status_as_error(false)
                .timeout_global(timeout)
                .build()
                .new_agent();
            Self { agent }
        }
    }

    impl Default for UreqTransport {
        fn default() -> Self {
            Self::new()
        }
    }

    impl Transport for UreqTransport {
        fn send(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError> {
            let mut builder = self.agent.post(&request.url);
            for (name, value) in &request.headers {
                builder = builder.header(name.as_str(), value.as_str());
            }
            let mut response = builder.send(request.body.as_bytes())?;
            let status = response.status().as_u16();
            let body = response.body_mut().read_to_string()?;
            Ok(HttpResponse { status, body })
        }
    }
}
