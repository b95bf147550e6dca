//! Decoding and validating FastBill replies.
//!
//! # Design
//! Parsing and validation are separate steps with separate failure classes.
//! [`parse_body`] only cares about JSON syntax. [`validate`] first checks the
//! envelope shape, which is a protocol concern, and only then hands the
//! `RESPONSE` object to an operation-specific predicate, whose failure is a
//! business rejection.

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

use crate::envelope::{ResponseEnvelope, RESPONSE};
use crate::error::{BadRequest, FastBillError, Result, ValidationFailure};

/// A comma right before the closing brace at the very end of the body. The
/// upstream service emits this under some conditions.
static TRAILING_COMMA: Lazy<Regex> =
    Lazy::new(|| Regex::new(r",\s*\}\s*$").expect("trailing comma pattern is valid"));

/// Decodes a response body.
///
/// Strict JSON first. If that fails, the single trailing-comma repair is
/// applied and decoding is retried once; no other repair is attempted.
pub fn parse_body(body: &str) -> Result<Value> {
    let strict_error = match serde_json::from_str(body) {
        Ok(value) => return Ok(value),
        Err(e) => e,
    };

    if !TRAILING_COMMA.is_match(body) {
        return Err(FastBillError::MalformedResponse {
            body: body.to_string(),
            source: strict_error,
        });
    }

    let patched = TRAILING_COMMA.replace(body, "}");
    match serde_json::from_str(&patched) {
        Ok(value) => {
            tracing::warn!("repaired trailing comma in FastBill response");
            Ok(value)
        }
        Err(source) => Err(FastBillError::MalformedResponse {
            body: body.to_string(),
            source,
        }),
    }
}

/// Checks the envelope shape and the operation's success predicate.
///
/// A missing or `null` `RESPONSE` is a [`FastBillError::MissingResponse`]; a
/// failing predicate is a [`FastBillError::BadRequest`] carrying the whole
/// envelope.
pub fn validate<P>(envelope: Value, predicate: P) -> Result<ResponseEnvelope>
where
    P: Fn(&Value) -> Result<(), ValidationFailure>,
{
    let Some(response) = envelope.get(RESPONSE).filter(|value| !value.is_null()) else {
        return Err(FastBillError::MissingResponse { envelope });
    };

    if let Err(failure) = predicate(response) {
        tracing::debug!(reason = failure.message(), "FastBill rejected request");
        return Err(FastBillError::BadRequest(Box::new(BadRequest::new(
            failure.into_message(),
            envelope,
        ))));
    }

    Ok(ResponseEnvelope::new(envelope))
}

/// Success predicate for mutating services: `STATUS` must be `"success"`.
pub fn status_success(response: &Value) -> Result<(), ValidationFailure> {
    match response.get("STATUS").and_then(Value::as_str) {
        Some("success") => Ok(()),
        _ => Err(ValidationFailure::new("STATUS is not equal to success")),
    }
}

/// Success predicate for `*.get` services: the named collection must be
/// present and not `null`.
pub fn has_collection(key: &'static str) -> impl Fn(&Value) -> Result<(), ValidationFailure> {
    move |response| {
        if response.get(key).is_some_and(|value| !value.is_null()) {
            Ok(())
        } else {
            Err(ValidationFailure::new(format!("key {key} is not set")))
        }
    }
}
