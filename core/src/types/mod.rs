//! Domain entities and the mapping between them and FastBill wire objects.
//!
//! # Design
//! Each entity is a flat struct of optional attributes. The wire name of an
//! attribute is its field name upper-cased (`address_2` is `ADDRESS_2`), which
//! `rename_all = "SCREAMING_SNAKE_CASE"` expresses on the struct; the few wire
//! names that are not valid Rust identifiers get an explicit rename. Unset
//! attributes are left out of outbound objects, and response fields the
//! struct does not know are ignored.
//!
//! FastBill encodes scalars as strings but does not do so reliably, so
//! [`Model::from_object`] turns numbers and booleans into their string form
//! before mapping.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::error::{FastBillError, Result};

mod article;
mod contact;
mod customer;
mod expense;
mod invoice;
mod project;
mod recipients;
mod subscription;

pub use article::Article;
pub use contact::Contact;
pub use customer::Customer;
pub use expense::Expense;
pub use invoice::{Invoice, InvoiceItem, VatItem};
pub use project::Project;
pub use recipients::EmailRecipients;
pub use subscription::Subscription;

/// Two-way mapping between an entity and its wire object.
pub trait Model: Serialize + DeserializeOwned + Sized {
    /// Entity name used in error messages.
    const ENTITY: &'static str;

    /// Builds an entity from a decoded response fragment.
    fn from_object(value: &Value) -> Result<Self> {
        serde_json::from_value(stringify_scalars(value.clone())).map_err(|source| {
            FastBillError::Deserialization {
                entity: Self::ENTITY,
                source,
            }
        })
    }

    /// Produces the wire object sent as `DATA`.
    fn to_wire(&self) -> Result<Value> {
        serde_json::to_value(self).map_err(FastBillError::Serialization)
    }
}

/// Replaces numbers and booleans with their string form, recursively.
pub(crate) fn stringify_scalars(value: Value) -> Value {
    match value {
        Value::Number(n) => Value::String(n.to_string()),
        Value::Bool(b) => Value::String(if b { "1" } else { "0" }.to_string()),
        Value::Array(items) => Value::Array(items.into_iter().map(stringify_scalars).collect()),
        Value::Object(map) => Value::Object(
            map.into_iter()
                .map(|(key, value)| (key, stringify_scalars(value)))
                .collect(),
        ),
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn stringify_scalars_recurses() {
        let value = json!({"A": 1, "B": [2.5, true], "C": {"D": false, "E": null, "F": "x"}});
        assert_eq!(
            stringify_scalars(value),
            json!({"A": "1", "B": ["2.5", "1"], "C": {"D": "0", "E": null, "F": "x"}})
        );
    }

    #[test]
    fn from_object_rejects_non_objects() {
        let err = Contact::from_object(&json!(["not", "an", "object"])).unwrap_err();
        assert!(matches!(err, FastBillError::Deserialization { entity: "contact", .. }));
    }
}
