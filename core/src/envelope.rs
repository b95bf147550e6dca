//! Request and response envelopes.
//!
//! # Design
//! A request is `{SERVICE, DATA}` for mutations or `{SERVICE, FILTER, ...props}`
//! for queries; the service name selects the remote operation, not the URL.
//! A response is `{REQUEST, RESPONSE}`. Both sides are typed here so the
//! reserved keys live in one place.

use serde::Serialize;
use serde_json::{Map, Value};

pub const SERVICE: &str = "SERVICE";
pub const DATA: &str = "DATA";
pub const FILTER: &str = "FILTER";
pub const REQUEST: &str = "REQUEST";
pub const RESPONSE: &str = "RESPONSE";

/// Filter criteria for a `*.get` service.
///
/// Keys are upper-cased on insertion. `null` and empty-string values are
/// dropped; everything else, including `0`, `false` and `"0"`, is sent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Filter {
    entries: Map<String, Value>,
}

impl Filter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: &str, value: impl Into<Value>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert(&mut self, name: &str, value: impl Into<Value>) {
        let value = value.into();
        if is_blank(&value) {
            return;
        }
        self.entries.insert(name.to_uppercase(), value);
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.entries.get(&name.to_uppercase())
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

impl<K: AsRef<str>, V: Into<Value>> FromIterator<(K, V)> for Filter {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut filter = Filter::new();
        for (name, value) in iter {
            filter.insert(name.as_ref(), value);
        }
        filter
    }
}

fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        _ => false,
    }
}

/// Extra top-level properties of a query envelope, such as `LIMIT` or
/// `OFFSET`.
///
/// Keys are upper-cased. `SERVICE`, `DATA` and `FILTER` are reserved and
/// silently ignored.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Props {
    entries: Map<String, Value>,
}

impl Props {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: &str, value: impl Into<Value>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert(&mut self, name: &str, value: impl Into<Value>) {
        let key = name.to_uppercase();
        if matches!(key.as_str(), SERVICE | DATA | FILTER) {
            return;
        }
        self.entries.insert(key, value.into());
    }

    pub fn limit(self, limit: u32) -> Self {
        self.with("LIMIT", limit)
    }

    pub fn offset(self, offset: u32) -> Self {
        self.with("OFFSET", offset)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Outbound envelope.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RequestEnvelope {
    #[serde(rename = "SERVICE")]
    service: String,
    #[serde(rename = "DATA", skip_serializing_if = "Option::is_none")]
    data: Option<Value>,
    #[serde(rename = "FILTER", skip_serializing_if = "Option::is_none")]
    filter: Option<Map<String, Value>>,
    #[serde(flatten)]
    props: Map<String, Value>,
}

impl RequestEnvelope {
    /// `{SERVICE, DATA}` envelope for a mutating service.
    pub fn data(service: &str, data: Value) -> Self {
        Self {
            service: service.to_string(),
            data: Some(data),
            filter: None,
            props: Map::new(),
        }
    }

    /// `{SERVICE, FILTER?, ...props}` envelope for a query service. `FILTER`
    /// is only present when the filter has entries.
    pub fn query(service: &str, filter: &Filter, props: &Props) -> Self {
        Self {
            service: service.to_string(),
            data: None,
            filter: (!filter.is_empty()).then(|| filter.entries.clone()),
            props: props.entries.clone(),
        }
    }

    pub fn service(&self) -> &str {
        &self.service
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

/// Decoded reply that is known to carry a `RESPONSE` object.
///
/// Only [`validate`](crate::response::validate) constructs it.
#[derive(Debug, Clone, PartialEq)]
pub struct ResponseEnvelope {
    raw: Value,
}

impl ResponseEnvelope {
    pub(crate) fn new(raw: Value) -> Self {
        Self { raw }
    }

    /// The echo of the request, when the server sent one.
    pub fn request(&self) -> Option<&Value> {
        self.raw.get(REQUEST)
    }

    pub fn response(&self) -> &Value {
        &self.raw[RESPONSE]
    }

    /// A field of the `RESPONSE` object.
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.response().get(name)
    }

    /// A scalar field of `RESPONSE` rendered as text. Numbers are accepted
    /// since FastBill is not consistent about quoting identifiers.
    pub fn text(&self, name: &str) -> Option<String> {
        match self.field(name)? {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        }
    }

    pub fn as_value(&self) -> &Value {
        &self.raw
    }

    pub fn into_value(self) -> Value {
        self.raw
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use serde_json::json;

    use super::*;

    #[rstest]
    #[case::null(Value::Null, false)]
    #[case::empty_string(json!(""), false)]
    #[case::zero(json!(0), true)]
    #[case::false_flag(json!(false), true)]
    #[case::zero_string(json!("0"), true)]
    #[case::text(json!("Berlin"), true)]
    #[case::list(json!([1, 2]), true)]
    fn filter_keeps_only_meaningful_values(#[case] value: Value, #[case] kept: bool) {
        let filter = Filter::new().with("city", value.clone());
        assert_eq!(filter.get("CITY").is_some(), kept);
        let envelope = serde_json::to_value(RequestEnvelope::query(
            "customer.get",
            &filter,
            &Props::new(),
        ))
        .unwrap();
        if kept {
            assert_eq!(envelope["FILTER"]["CITY"], value);
        } else {
            assert!(envelope.get("FILTER").is_none());
        }
    }

    #[test]
    fn filter_keys_are_upper_cased() {
        let filter: Filter = [("customer_id", json!("7")), ("Term", json!("acme"))]
            .into_iter()
            .collect();
        assert_eq!(filter.len(), 2);
        assert_eq!(filter.get("customer_id"), Some(&json!("7")));
        let envelope =
            serde_json::to_value(RequestEnvelope::query("customer.get", &filter, &Props::new()))
                .unwrap();
        assert_eq!(
            envelope,
            json!({"SERVICE": "customer.get", "FILTER": {"CUSTOMER_ID": "7", "TERM": "acme"}})
        );
    }

    #[test]
    fn query_flattens_props() {
        let props = Props::new().limit(10).offset(20).with("sort", "asc");
        let envelope =
            serde_json::to_value(RequestEnvelope::query("invoice.get", &Filter::new(), &props))
                .unwrap();
        assert_eq!(
            envelope,
            json!({"SERVICE": "invoice.get", "LIMIT": 10, "OFFSET": 20, "SORT": "asc"})
        );
    }

    #[test]
    fn props_cannot_override_reserved_keys() {
        let props = Props::new()
            .with("service", "customer.delete")
            .with("FILTER", json!({"X": 1}))
            .with("data", json!({}));
        assert!(props.is_empty());
        let envelope =
            serde_json::to_value(RequestEnvelope::query("customer.get", &Filter::new(), &props))
                .unwrap();
        assert_eq!(envelope, json!({"SERVICE": "customer.get"}));
    }

    #[test]
    fn data_envelope_has_service_and_data() {
        let envelope = RequestEnvelope::data("invoice.complete", json!({"INVOICE_ID": "42"}));
        assert_eq!(envelope.service(), "invoice.complete");
        let parsed: Value = serde_json::from_str(&envelope.to_json().unwrap()).unwrap();
        assert_eq!(
            parsed,
            json!({"SERVICE": "invoice.complete", "DATA": {"INVOICE_ID": "42"}})
        );
    }

    #[test]
    fn response_envelope_accessors() {
        let envelope = ResponseEnvelope::new(json!({
            "REQUEST": {"SERVICE": "invoice.create"},
            "RESPONSE": {"STATUS": "success", "INVOICE_ID": 42, "FLAGS": [1]}
        }));
        assert_eq!(envelope.request().unwrap()["SERVICE"], "invoice.create");
        assert_eq!(envelope.text("STATUS").as_deref(), Some("success"));
        assert_eq!(envelope.text("INVOICE_ID").as_deref(), Some("42"));
        assert_eq!(envelope.text("FLAGS"), None);
        assert_eq!(envelope.text("MISSING"), None);
    }
}
