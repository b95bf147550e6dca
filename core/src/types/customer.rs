use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use super::Model;

/// A customer record.
///
/// `customer_type` is `business` or `consumer`; FastBill requires
/// `organization` for the former and `last_name` for the latter.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct Customer {
    pub customer_id: Option<String>,
    pub customer_number: Option<String>,
    pub customer_ext_uid: Option<String>,
    pub customer_type: Option<String>,
    pub top: Option<String>,
    pub newsletter_optin: Option<String>,
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
    pub secondary_address: Option<String>,
    pub phone: Option<String>,
    pub phone_2: Option<String>,
    pub fax: Option<String>,
    pub mobile: Option<String>,
    pub email: Option<String>,
    pub vat_id: Option<String>,
    pub currency_code: Option<String>,
    pub days_for_payment: Option<String>,
    pub payment_type: Option<String>,
    pub show_payment_notice: Option<String>,
    pub bank_name: Option<String>,
    pub bank_code: Option<String>,
    pub bank_account_number: Option<String>,
    pub bank_account_owner: Option<String>,
    pub bank_iban: Option<String>,
    pub bank_bic: Option<String>,
    pub account_receivable: Option<String>,
    pub comment: Option<String>,
    pub created: Option<String>,
    pub lastupdate: Option<String>,
    pub tags: Option<String>,
}

impl Model for Customer {
    const ENTITY: &'static str = "customer";
}
