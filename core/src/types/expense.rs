use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use super::Model;

/// An incoming invoice booked as an expense. Read-only through this client.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct Expense {
    pub invoice_id: Option<String>,
    pub organization: Option<String>,
    pub invoice_number: Option<String>,
    pub invoice_date: Option<String>,
    pub service_period_start: Option<String>,
    pub service_period_end: Option<String>,
    pub due_date: Option<String>,
    pub sub_total: Option<String>,
    pub vat_total: Option<String>,
    pub total: Option<String>,
    pub paid_date: Option<String>,
    pub currency_code: Option<String>,
    pub customer_id: Option<String>,
    pub project_id: Option<String>,
    pub comment: Option<String>,
    pub payment_info: Option<String>,
    pub document_url: Option<String>,
}

impl Model for Expense {
    const ENTITY: &'static str = "expense";
}
