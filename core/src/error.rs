//! Error types for the FastBill client.
//!
//! # Design
//! Failures fall into four classes that callers need to tell apart:
//! configuration problems caught at construction, transport failures,
//! protocol failures where the server reply does not look like a FastBill
//! envelope at all, and business rejections where the server answered
//! properly but refused the request. Only the last class carries a
//! well-formed envelope that is worth inspecting for server error codes.

use serde_json::Value;

/// Error produced by a [`Transport`](crate::http::Transport) implementation.
pub type TransportError = Box<dyn std::error::Error + Send + Sync + 'static>;

pub type Result<T, E = FastBillError> = std::result::Result<T, E>;

/// Errors returned by every client operation.
#[derive(Debug, thiserror::Error)]
pub enum FastBillError {
    /// A required credential was missing or blank when the client was built.
    #[error("the configuration value `{field}` has to be set")]
    MissingCredential { field: &'static str },

    /// The HTTP collaborator failed before a response was received.
    #[error("transport error: {0}")]
    Transport(#[source] TransportError),

    /// The server answered with a non-2xx status.
    #[error("HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },

    /// The body is not JSON, even after the trailing-comma repair.
    #[error("API returned invalid JSON: {source}")]
    MalformedResponse {
        body: String,
        #[source]
        source: serde_json::Error,
    },

    /// The decoded body has no `RESPONSE` object.
    #[error("the property RESPONSE is expected in the response envelope")]
    MissingResponse { envelope: Value },

    /// The server rejected the request.
    #[error(transparent)]
    BadRequest(Box<BadRequest>),

    /// A success envelope lacks a field the operation reads back.
    #[error("the field {field} is missing from RESPONSE")]
    MissingField { field: &'static str, envelope: Value },

    /// The operation addresses an existing record but the entity has no
    /// identifier yet.
    #[error("{entity} has no identifier; create it first")]
    MissingIdentifier { entity: &'static str },

    /// `invoice.sendbyemail` was called without any address.
    #[error("at least one email recipient is required")]
    NoRecipients,

    #[error("failed to serialize request: {0}")]
    Serialization(#[source] serde_json::Error),

    #[error("failed to map {entity} from response: {source}")]
    Deserialization {
        entity: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

impl FastBillError {
    /// True when the server understood the request and refused it.
    pub fn is_business_rejection(&self) -> bool {
        matches!(self, FastBillError::BadRequest(_))
    }

    /// True when the reply could not be read as a FastBill envelope.
    pub fn is_protocol_error(&self) -> bool {
        matches!(
            self,
            FastBillError::HttpStatus { .. }
                | FastBillError::MalformedResponse { .. }
                | FastBillError::MissingResponse { .. }
        )
    }

    pub fn as_bad_request(&self) -> Option<&BadRequest> {
        match self {
            FastBillError::BadRequest(rejection) => Some(rejection),
            _ => None,
        }
    }
}

/// A business rejection, carrying the whole envelope the server returned.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("bad request: {message}")]
pub struct BadRequest {
    message: String,
    envelope: Value,
}

impl BadRequest {
    pub fn new(message: impl Into<String>, envelope: Value) -> Self {
        Self {
            message: message.into(),
            envelope,
        }
    }

    /// Why the success check failed.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The full decoded envelope, `REQUEST` included.
    pub fn envelope(&self) -> &Value {
        &self.envelope
    }

    /// Error strings the server put into `RESPONSE.ERRORS`, if any.
    ///
    /// FastBill sends either a list of strings or a single string here.
    pub fn errors(&self) -> Vec<String> {
        match self.envelope.pointer("/RESPONSE/ERRORS") {
            Some(Value::Array(items)) => items
                .iter()
                .map(|item| match item {
                    Value::String(s) => s.clone(),
                    other => other.to_string(),
                })
                .collect(),
            Some(Value::String(s)) => vec![s.clone()],
            _ => Vec::new(),
        }
    }
}

/// Returned by a success predicate when the `RESPONSE` object does not
/// satisfy it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationFailure {
    message: String,
}

impl ValidationFailure {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn into_message(self) -> String {
        self.message
    }
}
