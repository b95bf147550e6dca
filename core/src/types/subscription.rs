use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use super::Model;

/// A recurring subscription on the automatic billing endpoint.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct Subscription {
    pub subscription_id: Option<String>,
    pub subscription_ext_uid: Option<String>,
    pub customer_id: Option<String>,
    pub article_number: Option<String>,
    pub quantity: Option<String>,
    pub unit_price: Option<String>,
    pub currency_code: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub coupon: Option<String>,
    pub status: Option<String>,
    pub start: Option<String>,
    pub last_event: Option<String>,
    pub next_event: Option<String>,
    pub expiration_date: Option<String>,
    /// Set from the server reply to `subscription.cancel`.
    pub cancellation_date: Option<String>,
    pub invoice_title: Option<String>,
    pub x_attributes: Option<String>,
}

impl Model for Subscription {
    const ENTITY: &'static str = "subscription";
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn round_trips_set_attributes() {
        let subscription = Subscription {
            customer_id: Some("1001".to_string()),
            article_number: Some("PRO-M".to_string()),
            subscription_ext_uid: Some("ext-9".to_string()),
            ..Subscription::default()
        };
        let wire = subscription.to_wire().unwrap();
        assert_eq!(
            wire,
            json!({
                "CUSTOMER_ID": "1001",
                "ARTICLE_NUMBER": "PRO-M",
                "SUBSCRIPTION_EXT_UID": "ext-9"
            })
        );
        assert_eq!(Subscription::from_object(&wire).unwrap(), subscription);
    }
}
