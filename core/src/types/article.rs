use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use super::Model;

/// A product that subscriptions refer to by `article_number`.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct Article {
    pub article_number: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub unit_price: Option<String>,
    pub setup_fee: Option<String>,
    pub allow_multiple: Option<String>,
    pub is_addon: Option<String>,
    pub currency_code: Option<String>,
    pub vat_percent: Option<String>,
    pub subscription_interval: Option<String>,
    pub subscription_number_events: Option<String>,
    pub subscription_trial: Option<String>,
    pub subscription_duration: Option<String>,
    pub subscription_duration_follow: Option<String>,
    pub subscription_cancellation: Option<String>,
    pub return_url_success: Option<String>,
    pub return_url_cancel: Option<String>,
    pub checkout_url: Option<String>,
}

impl Model for Article {
    const ENTITY: &'static str = "article";
}
