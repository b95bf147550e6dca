use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use super::Model;

/// A contact person attached to a customer.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct Contact {
    /// Assigned by the server on `contact.create`.
    pub contact_id: Option<String>,
    pub customer_id: Option<String>,
    /// Required when the customer is a business.
    pub organization: Option<String>,
    pub position: Option<String>,
    pub salutation: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub address: Option<String>,
    pub address_2: Option<String>,
    pub zipcode: Option<String>,
    pub city: Option<String>,
    pub country_code: Option<String>,
    /// Delivery address.
    pub secondary_address: Option<String>,
    pub phone: Option<String>,
    pub phone_2: Option<String>,
    pub fax: Option<String>,
    pub mobile: Option<String>,
    pub email: Option<String>,
    pub vat_id: Option<String>,
    pub currency_code: Option<String>,
    pub created: Option<String>,
    pub tags: Option<String>,
}

impl Model for Contact {
    const ENTITY: &'static str = "contact";
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn maps_wire_names_both_ways() {
        let contact = Contact {
            customer_id: Some("7".to_string()),
            first_name: Some("Ada".to_string()),
            address_2: Some("Floor 3".to_string()),
            phone_2: Some("+49 30 123".to_string()),
            ..Contact::default()
        };
        let wire = contact.to_wire().unwrap();
        assert_eq!(
            wire,
            json!({
                "CUSTOMER_ID": "7",
                "FIRST_NAME": "Ada",
                "ADDRESS_2": "Floor 3",
                "PHONE_2": "+49 30 123"
            })
        );
        assert_eq!(Contact::from_object(&wire).unwrap(), contact);
    }

    #[test]
    fn ignores_unknown_fields_and_leaves_missing_unset() {
        let contact = Contact::from_object(&json!({
            "CONTACT_ID": 12,
            "LAST_NAME": "Lovelace",
            "SHOE_SIZE": "42"
        }))
        .unwrap();
        assert_eq!(contact.contact_id.as_deref(), Some("12"));
        assert_eq!(contact.last_name.as_deref(), Some("Lovelace"));
        assert!(contact.first_name.is_none());
    }

    #[test]
    fn null_fields_stay_unset() {
        let contact = Contact::from_object(&json!({"EMAIL": null})).unwrap();
        assert!(contact.email.is_none());
    }
}
