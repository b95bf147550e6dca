use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use super::Model;

/// An outgoing invoice.
///
/// `invoice_number` stays unset for drafts; the server assigns it on
/// `invoice.complete`.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE", default)]
pub struct Invoice {
    pub invoice_id: Option<String>,
    #[serde(rename = "TYPE")]
    pub invoice_type: Option<String>,
    pub customer_id: Option<String>,
    pub customer_number: Option<String>,
    pub customer_costcenter_id: Option<String>,
    pub contact_id: Option<String>,
    pub project_id: Option<String>,
    pub currency_code: Option<String>,
    pub delivery_date: Option<String>,
    pub invoice_title: Option<String>,
    pub invoice_number: Option<String>,
    pub invoice_date: Option<String>,
    pub introtext: Option<String>,
    pub cash_discount_percent: Option<String>,
    pub cash_discount_days: Option<String>,
    pub days_for_payment: Option<String>,
    pub due_date: Option<String>,
    pub service_period_start: Option<String>,
    pub service_period_end: Option<String>,
    pub template_id: Option<String>,
    pub organization: Option<String>,
    pub salutation: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub address: Option<String>,
    pub address_2: Option<String>,
    pub zipcode: Option<String>,
    pub city: Option<String>,
    pub country_code: Option<String>,
    pub vat_id: Option<String>,
    pub payment_type: Option<String>,
    pub eu_delivery: Option<String>,
    pub sub_total: Option<String>,
    pub vat_total: Option<String>,
    pub total: Option<String>,
    pub paid_date: Option<String>,
    pub is_canceled: Option<String>,
    pub document_url: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub vat_items: Vec<VatItem>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<InvoiceItem>,
}

impl Model for Invoice {
    const ENTITY: &'static str = "invoice";
}

/// One line of an invoice.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct InvoiceItem {
    pub invoice_item_id: Option<String>,
    pub article_number: Option<String>,
    pub description: Option<String>,
    pub quantity: Option<String>,
    pub unit_price: Option<String>,
    pub vat_percent: Option<String>,
    pub vat_value: Option<String>,
    pub complete_net: Option<String>,
    pub complete_gross: Option<String>,
    pub sort_order: Option<String>,
}

/// VAT subtotal per rate, as reported by the server.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct VatItem {
    pub vat_percent: Option<String>,
    pub complete_net: Option<String>,
    pub vat_value: Option<String>,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn draft() -> Invoice {
        Invoice {
            customer_id: Some("1001".to_string()),
            invoice_type: Some("outgoing".to_string()),
            items: vec![InvoiceItem {
                description: Some("Consulting".to_string()),
                quantity: Some("2".to_string()),
                unit_price: Some("150.00".to_string()),
                vat_percent: Some("19".to_string()),
                ..InvoiceItem::default()
            }],
            ..Invoice::default()
        }
    }

    #[test]
    fn serializes_type_and_items() {
        assert_eq!(
            draft().to_wire().unwrap(),
            json!({
                "TYPE": "outgoing",
                "CUSTOMER_ID": "1001",
                "ITEMS": [{
                    "DESCRIPTION": "Consulting",
                    "QUANTITY": "2",
                    "UNIT_PRICE": "150.00",
                    "VAT_PERCENT": "19"
                }]
            })
        );
    }

    #[test]
    fn round_trips_set_attributes() {
        let invoice = draft();
        assert_eq!(Invoice::from_object(&invoice.to_wire().unwrap()).unwrap(), invoice);
    }

    #[test]
    fn empty_collections_are_omitted() {
        let wire = Invoice::default().to_wire().unwrap();
        assert_eq!(wire, json!({}));
    }

    #[test]
    fn reads_nested_numbers_as_text() {
        let invoice = Invoice::from_object(&json!({
            "INVOICE_ID": 42,
            "TOTAL": 357.0,
            "VAT_ITEMS": [{"VAT_PERCENT": 19, "COMPLETE_NET": "300.00", "VAT_VALUE": 57}],
            "ITEMS": [{"INVOICE_ITEM_ID": 1, "SORT_ORDER": 1}]
        }))
        .unwrap();
        assert_eq!(invoice.invoice_id.as_deref(), Some("42"));
        assert_eq!(invoice.total.as_deref(), Some("357.0"));
        assert_eq!(invoice.vat_items[0].vat_value.as_deref(), Some("57"));
        assert_eq!(invoice.items[0].invoice_item_id.as_deref(), Some("1"));
    }
}
