use crate::client::{FastBillClient, Variant};
use crate::envelope::{Filter, Props, RequestEnvelope};
use crate::error::Result;
use crate::http::Transport;
use crate::types::Expense;

impl<T: Transport, V: Variant> FastBillClient<T, V> {
    /// `expense.get`.
    pub fn get_expenses(&self, filter: &Filter, props: &Props) -> Result<Vec<Expense>> {
        self.collect(&RequestEnvelope::query("expense.get", filter, props), "EXPENSES")
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::client::MyFastBill;
    use crate::resources::testing::client;
    use crate::{Filter, Props};

    #[test]
    fn get_expenses_sends_month_filter() {
        let client = client::<MyFastBill>(&[
            r#"{"RESPONSE":{"EXPENSES":[
                {"INVOICE_ID":"300","ORGANIZATION":"Office Supplies AG","TOTAL":"59.50"}
            ]}}"#,
        ]);
        let filter = Filter::new().with("year", 2024).with("month", 3);
        let expenses = client.get_expenses(&filter, &Props::new()).unwrap();
        assert_eq!(expenses[0].organization.as_deref(), Some("Office Supplies AG"));
        assert_eq!(
            client.transport().sent_bodies()[0],
            json!({"SERVICE": "expense.get", "FILTER": {"YEAR": 2024, "MONTH": 3}})
        );
    }
}
