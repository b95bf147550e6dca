//! Request dispatch shared by every FastBill operation.
//!
//! # Design
//! `FastBillClient` holds the API entry point URL, the precomputed basic-auth
//! header and a [`Transport`]; nothing else, and nothing that changes between
//! calls. Every operation goes through the same pipeline:
//! [`build_request`](FastBillClient::build_request) turns an envelope into an
//! `HttpRequest`, the transport executes it, and
//! [`parse_response`](FastBillClient::parse_response) checks the status,
//! decodes the body and runs the operation's success predicate. The two pure
//! halves are public so a host can run the round-trip itself.
//!
//! The two FastBill hosts differ only in base URL and in which services they
//! offer, so the host is a type parameter rather than a separate client type.
//! Subscription and article operations are implemented for
//! `FastBillClient<T, Automatic>` only.

use std::fmt;
use std::marker::PhantomData;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use serde_json::Value;

use crate::config::ClientConfig;
use crate::envelope::{RequestEnvelope, ResponseEnvelope};
use crate::error::{FastBillError, Result, ValidationFailure};
use crate::http::{HttpRequest, HttpResponse, Transport};
use crate::response::{has_collection, parse_body, status_success, validate};
use crate::types::Model;

/// Path of the single API entry point; the service is chosen by the body.
pub const API_PATH: &str = "/api/1.0/api.php";

/// A FastBill host.
pub trait Variant {
    const BASE_URL: &'static str;
}

/// The general bookkeeping host.
#[derive(Debug, Clone, Copy, Default)]
pub struct MyFastBill;

impl Variant for MyFastBill {
    const BASE_URL: &'static str = "https://my.fastbill.com";
}

/// The subscription billing host. Also offers every general operation.
#[derive(Debug, Clone, Copy, Default)]
pub struct Automatic;

impl Variant for Automatic {
    const BASE_URL: &'static str = "https://automatic.fastbill.com";
}

/// Client for the general host.
pub type MyFastBillClient<T> = FastBillClient<T, MyFastBill>;

/// Client for the subscription billing host.
pub type AutomaticClient<T> = FastBillClient<T, Automatic>;

pub struct FastBillClient<T, V = MyFastBill> {
    endpoint: String,
    authorization: String,
    transport: T,
    variant: PhantomData<V>,
}

impl<T, V: Variant> FastBillClient<T, V> {
    /// Validates the credentials and captures them with the transport.
    ///
    /// Fails with [`FastBillError::MissingCredential`] when the email or API
    /// key is blank.
    pub fn new(config: ClientConfig, transport: T) -> Result<Self> {
        config.validate()?;
        let base_url = config.base_url.as_deref().unwrap_or(V::BASE_URL);
        let credentials = format!("{}:{}", config.email, config.api_key);
        Ok(Self {
            endpoint: format!("{}{API_PATH}", base_url.trim_end_matches('/')),
            authorization: format!("Basic {}", STANDARD.encode(credentials)),
            transport,
            variant: PhantomData,
        })
    }

    /// Full URL every request is posted to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn build_request(&self, envelope: &RequestEnvelope) -> Result<HttpRequest> {
        let body = envelope.to_json().map_err(FastBillError::Serialization)?;
        Ok(HttpRequest {
            url: self.endpoint.clone(),
            headers: vec![
                ("content-type".to_string(), "application/json".to_string()),
                ("authorization".to_string(), self.authorization.clone()),
            ],
            body,
        })
    }

    /// Status check, decoding and validation of one reply.
    pub fn parse_response<P>(
        &self,
        response: HttpResponse,
        predicate: P,
    ) -> Result<ResponseEnvelope>
    where
        P: Fn(&Value) -> Result<(), ValidationFailure>,
    {
        check_status(&response)?;
        let decoded = parse_body(&response.body)?;
        validate(decoded, predicate)
    }
}

impl<T: Transport, V: Variant> FastBillClient<T, V> {
    /// One full round-trip: build, send, parse, validate.
    pub fn dispatch<P>(&self, envelope: &RequestEnvelope, predicate: P) -> Result<ResponseEnvelope>
    where
        P: Fn(&Value) -> Result<(), ValidationFailure>,
    {
        let request = self.build_request(envelope)?;
        tracing::debug!(
            service = envelope.service(),
            url = %request.url,
            "dispatching FastBill request"
        );
        let response = self
            .transport
            .send(&request)
            .map_err(FastBillError::Transport)?;
        tracing::debug!(
            service = envelope.service(),
            status = response.status,
            "received FastBill response"
        );
        self.parse_response(response, predicate)
    }

    /// Sends `{SERVICE, DATA}` and requires `STATUS == "success"`.
    pub(crate) fn mutate(&self, service: &str, data: Value) -> Result<ResponseEnvelope> {
        self.dispatch(&RequestEnvelope::data(service, data), status_success)
    }

    /// Sends a query envelope and maps every element of `key`, in server
    /// order.
    pub(crate) fn collect<M: Model>(
        &self,
        envelope: &RequestEnvelope,
        key: &'static str,
    ) -> Result<Vec<M>> {
        let envelope = self.dispatch(envelope, has_collection(key))?;
        let Some(Value::Array(items)) = envelope.field(key) else {
            return Err(FastBillError::MissingField {
                field: key,
                envelope: envelope.into_value(),
            });
        };
        items.iter().map(M::from_object).collect()
    }
}

#[cfg(feature = "ureq")]
impl<V: Variant> FastBillClient<crate::http::UreqTransport, V> {
    /// Client on top of a default [`UreqTransport`](crate::http::UreqTransport).
    pub fn from_config(config: ClientConfig) -> Result<Self> {
        Self::new(config, crate::http::UreqTransport::new())
    }
}

impl<T: fmt::Debug, V> fmt::Debug for FastBillClient<T, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FastBillClient")
            .field("endpoint", &self.endpoint)
            .field("authorization", &"<redacted>")
            .field("transport", &self.transport)
            .finish()
    }
}

/// Reads a scalar `RESPONSE` field the operation writes back.
pub(crate) fn required_text(envelope: &ResponseEnvelope, field: &'static str) -> Result<String> {
    envelope
        .text(field)
        .ok_or_else(|| FastBillError::MissingField {
            field,
            envelope: envelope.as_value().clone(),
        })
}

/// Identifier an operation on an existing record needs.
pub(crate) fn require_id<'a>(id: &'a Option<String>, entity: &'static str) -> Result<&'a str> {
    match id.as_deref() {
        Some(id) if !id.is_empty() => Ok(id),
        _ => Err(FastBillError::MissingIdentifier { entity }),
    }
}

/// FastBill reports business failures with 200, so anything outside 2xx is
/// a transport-level problem.
fn check_status(response: &HttpResponse) -> Result<()> {
    if (200..300).contains(&response.status) {
        return Ok(());
    }
    Err(FastBillError::HttpStatus {
        status: response.status,
        body: response.body.clone(),
    })
}
