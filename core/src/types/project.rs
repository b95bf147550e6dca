use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use super::Model;

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct Project {
    pub project_id: Option<String>,
    pub project_name: Option<String>,
    pub project_number: Option<String>,
    pub customer_id: Option<String>,
    pub customer_costcenter_id: Option<String>,
    pub hour_price: Option<String>,
    pub currency_code: Option<String>,
    pub vat_percent: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub budget: Option<String>,
}

impl Model for Project {
    const ENTITY: &'static str = "project";
}
